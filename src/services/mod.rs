//! Service layer for business logic operations.
//!
//! Services encapsulate the domain rules on top of the repositories:
//! existence checks before any write, ownership checks on financial
//! records, association membership checks, and the derived ledger
//! figures.

mod administrator_service;
mod language_service;
mod lesson_service;
mod payable_service;
mod receivable_service;
mod student_service;
mod teacher_service;
mod todo_service;
mod tuition_service;
mod wallet_service;

pub use administrator_service::AdministratorService;
pub use language_service::LanguageService;
pub use lesson_service::LessonService;
pub use payable_service::PayableService;
pub use receivable_service::ReceivableService;
pub use student_service::StudentService;
pub use teacher_service::TeacherService;
pub use todo_service::TodoService;
pub use tuition_service::{TuitionService, TuitionTotals};
pub use wallet_service::{WalletService, WalletWithBalance};

use crate::repositories::Repositories;

/// Aggregates all services for convenient access.
///
/// This struct is designed to be used as Axum application state.
/// Cloning is cheap since underlying pools use `Arc` internally.
#[derive(Clone)]
pub struct Services {
    pub administrators: AdministratorService,
    pub languages: LanguageService,
    pub students: StudentService,
    pub teachers: TeacherService,
    pub lessons: LessonService,
    pub todos: TodoService,
    pub wallets: WalletService,
    pub payables: PayableService,
    pub receivables: ReceivableService,
    pub tuition_statuses: TuitionService,
}

impl Services {
    /// Creates a new Services instance from Repositories.
    pub fn new(repos: Repositories) -> Self {
        Self {
            administrators: AdministratorService::new(repos.administrators.clone()),
            languages: LanguageService::new(repos.languages.clone()),
            students: StudentService::new(
                repos.students.clone(),
                repos.teachers.clone(),
                repos.student_teachers.clone(),
            ),
            teachers: TeacherService::new(
                repos.teachers.clone(),
                repos.students.clone(),
                repos.student_teachers,
                repos.languages,
            ),
            lessons: LessonService::new(
                repos.lessons,
                repos.teachers,
                repos.students.clone(),
                repos.lesson_students,
            ),
            todos: TodoService::new(repos.todos, repos.administrators.clone()),
            wallets: WalletService::new(
                repos.wallets,
                repos.administrators.clone(),
                repos.payables.clone(),
                repos.receivables.clone(),
            ),
            payables: PayableService::new(repos.payables, repos.administrators.clone()),
            receivables: ReceivableService::new(repos.receivables, repos.administrators),
            tuition_statuses: TuitionService::new(repos.tuition_statuses, repos.students),
        }
    }
}
