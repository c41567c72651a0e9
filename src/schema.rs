// Diesel table definitions for the school schema.
// Kept in sync with the SQL under migrations/.

diesel::table! {
    administrators (id) {
        id -> Int4,
        #[max_length = 100]
        name -> Varchar,
        password_hash -> Text,
    }
}

diesel::table! {
    languages (id) {
        id -> Int4,
        #[max_length = 40]
        name -> Varchar,
    }
}

diesel::table! {
    students (id) {
        id -> Int4,
        #[max_length = 250]
        full_name -> Varchar,
        birth_date -> Date,
        #[max_length = 11]
        cpf -> Nullable<Varchar>,
        #[max_length = 11]
        phone -> Varchar,
        #[max_length = 50]
        payment_preference -> Nullable<Varchar>,
        billing_day -> Nullable<Int4>,
        photo -> Nullable<Bytea>,
        #[max_length = 100]
        country -> Nullable<Varchar>,
        active -> Bool,
    }
}

diesel::table! {
    teachers (id) {
        id -> Int4,
        language_id -> Int4,
        #[max_length = 250]
        full_name -> Varchar,
        birth_date -> Date,
        #[max_length = 11]
        cpf -> Nullable<Varchar>,
        #[max_length = 11]
        phone -> Varchar,
        contract_pdf -> Nullable<Bytea>,
        #[max_length = 14]
        mei -> Nullable<Varchar>,
        photo -> Nullable<Bytea>,
        #[max_length = 100]
        nationality -> Varchar,
        active -> Bool,
        #[max_length = 250]
        pix -> Nullable<Varchar>,
    }
}

diesel::table! {
    lessons (id) {
        id -> Int4,
        teacher_id -> Int4,
        lesson_date -> Timestamp,
        #[max_length = 40]
        language -> Varchar,
        teacher_rate -> Numeric,
        school_rate -> Numeric,
        active -> Bool,
        repeat_weekly -> Bool,
    }
}

diesel::table! {
    todos (id) {
        id -> Int4,
        text -> Text,
        done -> Bool,
        created_at -> Timestamp,
        administrator_id -> Int4,
    }
}

diesel::table! {
    wallets (id) {
        id -> Int4,
        administrator_id -> Int4,
    }
}

diesel::table! {
    payables (id) {
        id -> Int4,
        administrator_id -> Int4,
        #[max_length = 250]
        name -> Varchar,
        amount -> Numeric,
        due_date -> Date,
        settled -> Bool,
    }
}

diesel::table! {
    receivables (id) {
        id -> Int4,
        administrator_id -> Int4,
        #[max_length = 250]
        name -> Varchar,
        amount -> Numeric,
        receipt_date -> Date,
        settled -> Bool,
    }
}

diesel::table! {
    tuition_statuses (id) {
        id -> Int4,
        student_id -> Int4,
        date -> Date,
        #[max_length = 50]
        status -> Varchar,
        amount -> Float8,
    }
}

diesel::table! {
    student_teachers (student_id, teacher_id) {
        student_id -> Int4,
        teacher_id -> Int4,
    }
}

diesel::table! {
    lesson_students (lesson_id, student_id) {
        lesson_id -> Int4,
        student_id -> Int4,
    }
}

diesel::joinable!(teachers -> languages (language_id));
diesel::joinable!(lessons -> teachers (teacher_id));
diesel::joinable!(todos -> administrators (administrator_id));
diesel::joinable!(wallets -> administrators (administrator_id));
diesel::joinable!(payables -> administrators (administrator_id));
diesel::joinable!(receivables -> administrators (administrator_id));
diesel::joinable!(tuition_statuses -> students (student_id));
diesel::joinable!(student_teachers -> students (student_id));
diesel::joinable!(student_teachers -> teachers (teacher_id));
diesel::joinable!(lesson_students -> lessons (lesson_id));
diesel::joinable!(lesson_students -> students (student_id));

diesel::allow_tables_to_appear_in_same_query!(
    administrators,
    languages,
    students,
    teachers,
    lessons,
    todos,
    wallets,
    payables,
    receivables,
    tuition_statuses,
    student_teachers,
    lesson_students,
);
