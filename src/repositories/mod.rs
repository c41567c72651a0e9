//! Repository layer for data access operations.
//!
//! Provides async CRUD operations for all domain entities. Repositories
//! stay at the level of queries and rows; business rules (existence
//! checks, ownership, conflicts) live in the service layer.

mod administrator_repo;
mod association_repo;
mod language_repo;
mod ledger_repo;
mod lesson_repo;
mod student_repo;
mod teacher_repo;
mod todo_repo;
mod tuition_repo;
mod wallet_repo;

pub use administrator_repo::AdministratorRepository;
pub use association_repo::{LessonStudentRepository, StudentTeacherRepository};
pub use language_repo::LanguageRepository;
pub use ledger_repo::{PayableRepository, ReceivableRepository};
pub use lesson_repo::LessonRepository;
pub use student_repo::StudentRepository;
pub use teacher_repo::TeacherRepository;
pub use todo_repo::TodoRepository;
pub use tuition_repo::{TuitionFilter, TuitionStatusRepository};
pub use wallet_repo::WalletRepository;

use crate::db::AsyncDbPool;

/// Aggregates all repositories for convenient access.
///
/// Since `AsyncDbPool` uses `Arc` internally, cloning is cheap.
#[derive(Clone)]
pub struct Repositories {
    pub administrators: AdministratorRepository,
    pub languages: LanguageRepository,
    pub students: StudentRepository,
    pub teachers: TeacherRepository,
    pub lessons: LessonRepository,
    pub todos: TodoRepository,
    pub wallets: WalletRepository,
    pub payables: PayableRepository,
    pub receivables: ReceivableRepository,
    pub tuition_statuses: TuitionStatusRepository,
    pub student_teachers: StudentTeacherRepository,
    pub lesson_students: LessonStudentRepository,
}

impl Repositories {
    /// Creates a new Repositories instance with all repositories initialized.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self {
            administrators: AdministratorRepository::new(pool.clone()),
            languages: LanguageRepository::new(pool.clone()),
            students: StudentRepository::new(pool.clone()),
            teachers: TeacherRepository::new(pool.clone()),
            lessons: LessonRepository::new(pool.clone()),
            todos: TodoRepository::new(pool.clone()),
            wallets: WalletRepository::new(pool.clone()),
            payables: PayableRepository::new(pool.clone()),
            receivables: ReceivableRepository::new(pool.clone()),
            tuition_statuses: TuitionStatusRepository::new(pool.clone()),
            student_teachers: StudentTeacherRepository::new(pool.clone()),
            lesson_students: LessonStudentRepository::new(pool),
        }
    }
}
