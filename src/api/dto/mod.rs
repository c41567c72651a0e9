//! Data Transfer Objects for API requests and responses.
//!
//! DTOs are organized by domain; `pagination` carries the shared
//! `{items, total, skip, limit}` wrapper and `common` the one-line
//! message and total shapes.

mod administrator;
mod auth;
mod common;
mod error;
mod language;
mod ledger;
mod lesson;
mod pagination;
mod student;
mod teacher;
mod todo;
mod tuition;
mod wallet;

pub use administrator::{AdministratorResponse, CreateAdministratorRequest};
pub use auth::{
    LoginRequest, LoginResponse, RefreshTokenRequest, RefreshTokenResponse, RegisterRequest,
    RegisterResponse,
};
pub use common::{MessageResponse, TotalResponse};
pub use error::ErrorResponse;
pub use language::{CreateLanguageRequest, LanguageResponse, UpdateLanguageRequest};
pub use ledger::{
    CreatePayableRequest, CreateReceivableRequest, PayableResponse, ReceivableResponse,
    SettledFilter, UpdatePayableRequest, UpdateReceivableRequest,
};
pub use lesson::{CreateLessonRequest, LessonResponse, UpdateLessonRequest};
pub use pagination::{PaginatedResponse, PaginationParams};
pub use student::{CreateStudentRequest, StudentResponse, UpdateStudentRequest};
pub use teacher::{CreateTeacherRequest, TeacherResponse, UpdateTeacherRequest};
pub use todo::{CreateTodoRequest, TodoListFilter, TodoResponse, UpdateTodoRequest};
pub use tuition::{
    CreateTuitionStatusRequest, TuitionListFilter, TuitionStatusResponse, TuitionTotalsResponse,
    UpdateTuitionStatusRequest,
};
pub use wallet::{CreateWalletRequest, WalletResponse};

use bigdecimal::{BigDecimal, FromPrimitive};
use bigdecimal::rounding::RoundingMode;

use crate::error::{AppError, AppResult};

/// Converts a JSON amount into a money value with two decimal places.
pub(crate) fn money(value: f64, field: &str) -> AppResult<BigDecimal> {
    BigDecimal::from_f64(value)
        .map(|d| d.with_scale_round(2, RoundingMode::HalfUp))
        .ok_or_else(|| AppError::validation(field, "Amount is not a representable number"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_rounds_to_cents() {
        assert_eq!(money(10.1, "amount").unwrap().to_string(), "10.10");
        assert_eq!(money(0.005, "amount").unwrap().to_string(), "0.01");
    }

    #[test]
    fn test_money_rejects_nan() {
        assert!(money(f64::NAN, "amount").is_err());
    }
}
