//! Receivable service: owner-scoped CRUD over the receivable side of the
//! ledger. Mirrors the payable contract.

use bigdecimal::BigDecimal;

use crate::error::{AppError, AppResult};
use crate::models::{NewReceivable, Receivable, UpdateReceivable};
use crate::repositories::{AdministratorRepository, ReceivableRepository};

#[derive(Clone)]
pub struct ReceivableService {
    repo: ReceivableRepository,
    administrators: AdministratorRepository,
}

impl ReceivableService {
    pub fn new(repo: ReceivableRepository, administrators: AdministratorRepository) -> Self {
        Self {
            repo,
            administrators,
        }
    }

    /// Creates a receivable. The owning administrator must exist before
    /// the row is written.
    pub async fn create_receivable(&self, new_receivable: NewReceivable) -> AppResult<Receivable> {
        self.administrators
            .find_by_id(new_receivable.administrator_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found("administrator", new_receivable.administrator_id)
            })?;

        self.repo.create(new_receivable).await
    }

    /// Gets a receivable by id, enforcing ownership. Cross-owner access is
    /// a permission error, not a not-found.
    pub async fn get_receivable(&self, id: i32, owner: i32) -> AppResult<Receivable> {
        let receivable = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("receivable", id))?;

        if receivable.administrator_id != owner {
            return Err(AppError::Forbidden {
                message: "You do not have permission to access this receivable".to_string(),
            });
        }

        Ok(receivable)
    }

    /// Lists the owner's receivables, optionally filtered by settlement
    /// status, returning the page and the total count.
    pub async fn list_receivables(
        &self,
        owner: i32,
        settled: Option<bool>,
        skip: i64,
        limit: i64,
    ) -> AppResult<(Vec<Receivable>, i64)> {
        self.repo.list_paginated(owner, settled, skip, limit).await
    }

    /// Applies a partial update to an owned receivable.
    pub async fn update_receivable(
        &self,
        id: i32,
        owner: i32,
        update_data: UpdateReceivable,
    ) -> AppResult<Receivable> {
        self.get_receivable(id, owner).await?;
        self.repo.update(id, update_data).await
    }

    /// Marks an owned receivable as settled (received).
    pub async fn mark_settled(&self, id: i32, owner: i32) -> AppResult<Receivable> {
        self.get_receivable(id, owner).await?;
        self.repo.set_settled(id, true).await
    }

    /// Marks an owned receivable back as pending.
    pub async fn mark_pending(&self, id: i32, owner: i32) -> AppResult<Receivable> {
        self.get_receivable(id, owner).await?;
        self.repo.set_settled(id, false).await
    }

    /// Deletes an owned receivable.
    pub async fn delete_receivable(&self, id: i32, owner: i32) -> AppResult<()> {
        self.get_receivable(id, owner).await?;
        self.repo.delete(id).await?;
        Ok(())
    }

    /// Total receivable amount for the owner, optionally filtered by
    /// settlement status. Zero when no rows match.
    pub async fn total(&self, owner: i32, settled: Option<bool>) -> AppResult<BigDecimal> {
        let total = self.repo.total(owner, settled).await?;
        Ok(total.unwrap_or_else(|| BigDecimal::from(0)))
    }
}
