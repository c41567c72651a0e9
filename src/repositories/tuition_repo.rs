//! Tuition status repository for async database operations.
//!
//! Month/year filters use SQL `date_part` on the stored date, matching
//! calendar extraction rather than date-range arithmetic so a month can
//! be filtered across all years.

use diesel::prelude::*;
use diesel::sql_types::{Date, Double, Text};
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{
    NewTuitionStatus, STATUS_LATE, STATUS_PENDING, TuitionStatus, UpdateTuitionStatus,
};

diesel::define_sql_function! {
    /// SQL `date_part(field, date)` for calendar extraction.
    fn date_part(part: Text, d: Date) -> Double;
}

/// Optional filters for tuition status listings.
#[derive(Debug, Clone, Default)]
pub struct TuitionFilter {
    pub student_id: Option<i32>,
    pub status: Option<String>,
    pub month: Option<u32>,
    pub year: Option<i32>,
}

/// Tuition status repository holding an async connection pool.
#[derive(Clone)]
pub struct TuitionStatusRepository {
    pool: AsyncDbPool,
}

impl TuitionStatusRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        new_status: NewTuitionStatus,
    ) -> Result<TuitionStatus, AppError> {
        use crate::schema::tuition_statuses::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(tuition_statuses)
            .values(&new_status)
            .returning(TuitionStatus::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn find_by_id(&self, status_id: i32) -> Result<Option<TuitionStatus>, AppError> {
        use crate::schema::tuition_statuses::dsl::*;
        let mut conn = self.pool.get().await?;

        tuition_statuses
            .filter(id.eq(status_id))
            .select(TuitionStatus::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    fn filtered(
        filter: &TuitionFilter,
    ) -> crate::schema::tuition_statuses::BoxedQuery<'static, diesel::pg::Pg> {
        use crate::schema::tuition_statuses::dsl::*;

        let mut query = tuition_statuses.into_boxed();
        if let Some(sid) = filter.student_id {
            query = query.filter(student_id.eq(sid));
        }
        if let Some(label) = filter.status.clone() {
            query = query.filter(status.eq(label));
        }
        if let Some(month) = filter.month {
            query = query.filter(date_part("month", date).eq(f64::from(month)));
        }
        if let Some(year) = filter.year {
            query = query.filter(date_part("year", date).eq(f64::from(year)));
        }
        query
    }

    /// Lists tuition statuses under the given filters, newest first,
    /// returning the page and the total count under the same filters.
    pub async fn list_paginated(
        &self,
        filter: &TuitionFilter,
        skip: i64,
        limit: i64,
    ) -> Result<(Vec<TuitionStatus>, i64), AppError> {
        use crate::schema::tuition_statuses::dsl::*;
        let mut conn = self.pool.get().await?;

        let items = Self::filtered(filter)
            .order(date.desc())
            .offset(skip)
            .limit(limit)
            .select(TuitionStatus::as_select())
            .load(&mut conn)
            .await?;

        let total = Self::filtered(filter)
            .count()
            .get_result::<i64>(&mut conn)
            .await?;

        Ok((items, total))
    }

    /// All tuition rows of one student, newest first.
    pub async fn list_by_student(
        &self,
        of_student_id: i32,
    ) -> Result<Vec<TuitionStatus>, AppError> {
        use crate::schema::tuition_statuses::dsl::*;
        let mut conn = self.pool.get().await?;

        tuition_statuses
            .filter(student_id.eq(of_student_id))
            .order(date.desc())
            .select(TuitionStatus::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Rows whose status is exactly "Pendente" or "Atrasado", soonest /
    /// most overdue first.
    pub async fn list_pending_or_late(&self) -> Result<Vec<TuitionStatus>, AppError> {
        use crate::schema::tuition_statuses::dsl::*;
        let mut conn = self.pool.get().await?;

        tuition_statuses
            .filter(status.eq_any([STATUS_PENDING, STATUS_LATE]))
            .order(date.asc())
            .select(TuitionStatus::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Loads all rows matching the optional month/year filter; the totals
    /// fold happens in the service.
    pub async fn list_for_totals(
        &self,
        month: Option<u32>,
        year: Option<i32>,
    ) -> Result<Vec<TuitionStatus>, AppError> {
        let mut conn = self.pool.get().await?;

        let filter = TuitionFilter {
            month,
            year,
            ..Default::default()
        };
        Self::filtered(&filter)
            .select(TuitionStatus::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn update(
        &self,
        status_id: i32,
        update_data: UpdateTuitionStatus,
    ) -> Result<TuitionStatus, AppError> {
        use crate::schema::tuition_statuses::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(tuition_statuses.filter(id.eq(status_id)))
            .set(&update_data)
            .returning(TuitionStatus::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn delete(&self, status_id: i32) -> Result<usize, AppError> {
        use crate::schema::tuition_statuses::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::delete(tuition_statuses.filter(id.eq(status_id)))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
