//! Payable service: owner-scoped CRUD over the payable side of the ledger.

use bigdecimal::BigDecimal;

use crate::error::{AppError, AppResult};
use crate::models::{NewPayable, Payable, UpdatePayable};
use crate::repositories::{AdministratorRepository, PayableRepository};

#[derive(Clone)]
pub struct PayableService {
    repo: PayableRepository,
    administrators: AdministratorRepository,
}

impl PayableService {
    pub fn new(repo: PayableRepository, administrators: AdministratorRepository) -> Self {
        Self {
            repo,
            administrators,
        }
    }

    /// Creates a payable. The owning administrator must exist before the
    /// row is written.
    pub async fn create_payable(&self, new_payable: NewPayable) -> AppResult<Payable> {
        self.administrators
            .find_by_id(new_payable.administrator_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found("administrator", new_payable.administrator_id)
            })?;

        self.repo.create(new_payable).await
    }

    /// Gets a payable by id, enforcing ownership.
    ///
    /// A record that exists but belongs to another administrator is a
    /// permission error, not a not-found, so the two cases stay
    /// distinguishable to the caller.
    pub async fn get_payable(&self, id: i32, owner: i32) -> AppResult<Payable> {
        let payable = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("payable", id))?;

        if payable.administrator_id != owner {
            return Err(AppError::Forbidden {
                message: "You do not have permission to access this payable".to_string(),
            });
        }

        Ok(payable)
    }

    /// Lists the owner's payables, optionally filtered by settlement
    /// status, returning the page and the total count.
    pub async fn list_payables(
        &self,
        owner: i32,
        settled: Option<bool>,
        skip: i64,
        limit: i64,
    ) -> AppResult<(Vec<Payable>, i64)> {
        self.repo.list_paginated(owner, settled, skip, limit).await
    }

    /// Applies a partial update to an owned payable.
    pub async fn update_payable(
        &self,
        id: i32,
        owner: i32,
        update_data: UpdatePayable,
    ) -> AppResult<Payable> {
        self.get_payable(id, owner).await?;
        self.repo.update(id, update_data).await
    }

    /// Marks an owned payable as settled.
    pub async fn mark_settled(&self, id: i32, owner: i32) -> AppResult<Payable> {
        self.get_payable(id, owner).await?;
        self.repo.set_settled(id, true).await
    }

    /// Marks an owned payable back as pending.
    pub async fn mark_pending(&self, id: i32, owner: i32) -> AppResult<Payable> {
        self.get_payable(id, owner).await?;
        self.repo.set_settled(id, false).await
    }

    /// Deletes an owned payable.
    pub async fn delete_payable(&self, id: i32, owner: i32) -> AppResult<()> {
        self.get_payable(id, owner).await?;
        self.repo.delete(id).await?;
        Ok(())
    }

    /// Total payable amount for the owner, optionally filtered by
    /// settlement status. Zero when no rows match.
    pub async fn total(&self, owner: i32, settled: Option<bool>) -> AppResult<BigDecimal> {
        let total = self.repo.total(owner, settled).await?;
        Ok(total.unwrap_or_else(|| BigDecimal::from(0)))
    }
}
