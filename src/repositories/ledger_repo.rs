//! Ledger repositories: payables and receivables.
//!
//! Both repositories expose the same shape of operations. The `sum`
//! aggregates return `None` when no rows match; the zero identity is
//! applied by the wallet service.

use bigdecimal::BigDecimal;
use diesel::dsl::sum;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{
    NewPayable, NewReceivable, Payable, Receivable, UpdatePayable, UpdateReceivable,
};

/// Payable repository holding an async connection pool.
#[derive(Clone)]
pub struct PayableRepository {
    pool: AsyncDbPool,
}

impl PayableRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new_payable: NewPayable) -> Result<Payable, AppError> {
        use crate::schema::payables::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(payables)
            .values(&new_payable)
            .returning(Payable::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn find_by_id(&self, payable_id: i32) -> Result<Option<Payable>, AppError> {
        use crate::schema::payables::dsl::*;
        let mut conn = self.pool.get().await?;

        payables
            .filter(id.eq(payable_id))
            .select(Payable::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    fn filtered(
        owner: i32,
        settled_filter: Option<bool>,
    ) -> crate::schema::payables::BoxedQuery<'static, diesel::pg::Pg> {
        use crate::schema::payables::dsl::*;

        let mut query = payables.filter(administrator_id.eq(owner)).into_boxed();
        if let Some(flag) = settled_filter {
            query = query.filter(settled.eq(flag));
        }
        query
    }

    /// Lists an administrator's payables, optionally filtered by settlement
    /// status, returning the page and the total count under the same filter.
    pub async fn list_paginated(
        &self,
        owner: i32,
        settled_filter: Option<bool>,
        skip: i64,
        limit: i64,
    ) -> Result<(Vec<Payable>, i64), AppError> {
        use crate::schema::payables::dsl::*;
        let mut conn = self.pool.get().await?;

        let items = Self::filtered(owner, settled_filter)
            .order(due_date.asc())
            .offset(skip)
            .limit(limit)
            .select(Payable::as_select())
            .load(&mut conn)
            .await?;

        let total = Self::filtered(owner, settled_filter)
            .count()
            .get_result::<i64>(&mut conn)
            .await?;

        Ok((items, total))
    }

    pub async fn update(
        &self,
        payable_id: i32,
        update_data: UpdatePayable,
    ) -> Result<Payable, AppError> {
        use crate::schema::payables::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(payables.filter(id.eq(payable_id)))
            .set(&update_data)
            .returning(Payable::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Sets the settlement flag. The two service-level mark operations both
    /// funnel through here.
    pub async fn set_settled(&self, payable_id: i32, flag: bool) -> Result<Payable, AppError> {
        use crate::schema::payables::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(payables.filter(id.eq(payable_id)))
            .set(settled.eq(flag))
            .returning(Payable::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn delete(&self, payable_id: i32) -> Result<usize, AppError> {
        use crate::schema::payables::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::delete(payables.filter(id.eq(payable_id)))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Sums an administrator's payable amounts, optionally filtered by
    /// settlement status. `None` when no rows match.
    pub async fn total(
        &self,
        owner: i32,
        settled_filter: Option<bool>,
    ) -> Result<Option<BigDecimal>, AppError> {
        use crate::schema::payables::dsl::*;
        let mut conn = self.pool.get().await?;

        Self::filtered(owner, settled_filter)
            .select(sum(amount))
            .first::<Option<BigDecimal>>(&mut conn)
            .await
            .map_err(AppError::from)
    }
}

/// Receivable repository holding an async connection pool.
#[derive(Clone)]
pub struct ReceivableRepository {
    pool: AsyncDbPool,
}

impl ReceivableRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new_receivable: NewReceivable) -> Result<Receivable, AppError> {
        use crate::schema::receivables::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(receivables)
            .values(&new_receivable)
            .returning(Receivable::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn find_by_id(&self, receivable_id: i32) -> Result<Option<Receivable>, AppError> {
        use crate::schema::receivables::dsl::*;
        let mut conn = self.pool.get().await?;

        receivables
            .filter(id.eq(receivable_id))
            .select(Receivable::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    fn filtered(
        owner: i32,
        settled_filter: Option<bool>,
    ) -> crate::schema::receivables::BoxedQuery<'static, diesel::pg::Pg> {
        use crate::schema::receivables::dsl::*;

        let mut query = receivables.filter(administrator_id.eq(owner)).into_boxed();
        if let Some(flag) = settled_filter {
            query = query.filter(settled.eq(flag));
        }
        query
    }

    /// Lists an administrator's receivables, optionally filtered by
    /// settlement status, returning the page and the total count.
    pub async fn list_paginated(
        &self,
        owner: i32,
        settled_filter: Option<bool>,
        skip: i64,
        limit: i64,
    ) -> Result<(Vec<Receivable>, i64), AppError> {
        use crate::schema::receivables::dsl::*;
        let mut conn = self.pool.get().await?;

        let items = Self::filtered(owner, settled_filter)
            .order(receipt_date.asc())
            .offset(skip)
            .limit(limit)
            .select(Receivable::as_select())
            .load(&mut conn)
            .await?;

        let total = Self::filtered(owner, settled_filter)
            .count()
            .get_result::<i64>(&mut conn)
            .await?;

        Ok((items, total))
    }

    pub async fn update(
        &self,
        receivable_id: i32,
        update_data: UpdateReceivable,
    ) -> Result<Receivable, AppError> {
        use crate::schema::receivables::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(receivables.filter(id.eq(receivable_id)))
            .set(&update_data)
            .returning(Receivable::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Sets the settlement flag.
    pub async fn set_settled(
        &self,
        receivable_id: i32,
        flag: bool,
    ) -> Result<Receivable, AppError> {
        use crate::schema::receivables::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(receivables.filter(id.eq(receivable_id)))
            .set(settled.eq(flag))
            .returning(Receivable::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn delete(&self, receivable_id: i32) -> Result<usize, AppError> {
        use crate::schema::receivables::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::delete(receivables.filter(id.eq(receivable_id)))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Sums an administrator's receivable amounts, optionally filtered by
    /// settlement status. `None` when no rows match.
    pub async fn total(
        &self,
        owner: i32,
        settled_filter: Option<bool>,
    ) -> Result<Option<BigDecimal>, AppError> {
        use crate::schema::receivables::dsl::*;
        let mut conn = self.pool.get().await?;

        Self::filtered(owner, settled_filter)
            .select(sum(amount))
            .first::<Option<BigDecimal>>(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
