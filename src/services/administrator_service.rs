//! Administrator service for account management and authentication.

use crate::error::{AppError, AppResult};
use crate::models::{Administrator, NewAdministrator};
use crate::repositories::AdministratorRepository;
use crate::utils::jwt::generate_token_pair;
use crate::utils::password::{hash_password, verify_password};

/// Administrator service wrapping the repository with the uniqueness and
/// credential rules.
#[derive(Clone)]
pub struct AdministratorService {
    repo: AdministratorRepository,
}

impl AdministratorService {
    pub fn new(repo: AdministratorRepository) -> Self {
        Self { repo }
    }

    /// Creates a new administrator.
    ///
    /// The name is the unique business key; a duplicate is rejected with a
    /// conflict before the insert is attempted. The password is stored as
    /// an Argon2id hash only.
    pub async fn create_administrator(
        &self,
        name: String,
        password: String,
    ) -> AppResult<Administrator> {
        if self.repo.find_by_name(&name).await?.is_some() {
            return Err(AppError::Duplicate {
                entity: "administrator".to_string(),
                field: "name".to_string(),
                value: name,
            });
        }

        let password_hash = hash_password(&password)?;
        self.repo
            .create(NewAdministrator {
                name,
                password_hash,
            })
            .await
    }

    /// Authenticates an administrator by name and password and issues a
    /// token pair. Wrong name and wrong password are indistinguishable to
    /// the caller.
    pub async fn authenticate(
        &self,
        name: &str,
        password: &str,
        secret: &str,
        access_expiration_hours: i64,
        refresh_expiration_hours: i64,
    ) -> AppResult<(Administrator, String, String)> {
        let invalid = || AppError::Unauthorized {
            message: "Incorrect name or password".to_string(),
        };

        let admin = self.repo.find_by_name(name).await?.ok_or_else(invalid)?;

        if !verify_password(password, &admin.password_hash)? {
            return Err(invalid());
        }

        let (access_token, refresh_token) = generate_token_pair(
            admin.id,
            admin.name.clone(),
            secret,
            access_expiration_hours,
            refresh_expiration_hours,
        )?;

        Ok((admin, access_token, refresh_token))
    }

    /// Gets an administrator by id, or `NotFound`.
    pub async fn get_administrator(&self, id: i32) -> AppResult<Administrator> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("administrator", id))
    }

    /// Lists administrators with skip/limit.
    pub async fn list_administrators(&self, skip: i64, limit: i64) -> AppResult<Vec<Administrator>> {
        self.repo.list(skip, limit).await
    }

    /// Deletes an administrator.
    ///
    /// No cascade is declared for the wallet and ledger relations; an
    /// administrator that still owns rows fails the foreign key checks and
    /// surfaces as a validation error.
    pub async fn delete_administrator(&self, id: i32) -> AppResult<()> {
        self.get_administrator(id).await?;
        self.repo.delete(id).await?;
        Ok(())
    }
}
