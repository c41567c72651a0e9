mod administrator;
mod association;
mod language;
mod ledger;
mod lesson;
mod student;
mod teacher;
mod todo;
mod tuition;
mod wallet;

pub use administrator::{Administrator, NewAdministrator};
pub use association::{LessonStudent, StudentTeacher};
pub use language::{Language, NewLanguage, UpdateLanguage};
pub use ledger::{
    NewPayable, NewReceivable, Payable, Receivable, UpdatePayable, UpdateReceivable,
};
pub use lesson::{Lesson, NewLesson, UpdateLesson};
pub use student::{NewStudent, Student, UpdateStudent};
pub use teacher::{NewTeacher, Teacher, UpdateTeacher};
pub use todo::{NewTodo, Todo, UpdateTodo};
pub use tuition::{
    NewTuitionStatus, STATUS_LATE, STATUS_PAID, STATUS_PENDING, TuitionStatus,
    UpdateTuitionStatus,
};
pub use wallet::{NewWallet, Wallet};
