//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Departments members can belong to.
    departments (id) {
        /// Serial primary key.
        id -> Int4,
        /// Unique display name.
        name -> Varchar,
    }
}

diesel::table! {
    /// Club members.
    members (id) {
        /// Serial primary key.
        id -> Int4,
        /// Display name.
        name -> Varchar,
        /// Role within the club.
        role -> Varchar,
        /// Portrait URL or the shared placeholder.
        photo_uri -> Varchar,
        /// Whether the member is active.
        active_member -> Bool,
    }
}

diesel::table! {
    /// Pure join between members and departments.
    ///
    /// Both foreign keys cascade on delete.
    department_member_association (department_id, member_id) {
        /// Department side of the membership.
        department_id -> Int4,
        /// Member side of the membership.
        member_id -> Int4,
    }
}

diesel::table! {
    /// Blog posts.
    blogs (id) {
        /// Serial primary key.
        id -> Int4,
        /// Headline (max 250 characters).
        title -> Varchar,
        /// Byline (max 50 characters).
        author -> Varchar,
        /// Cover URL or the shared placeholder.
        cover_image_uri -> Varchar,
        /// Post body.
        body -> Text,
    }
}

diesel::joinable!(department_member_association -> departments (department_id));
diesel::joinable!(department_member_association -> members (member_id));

diesel::allow_tables_to_appear_in_same_query!(
    blogs,
    department_member_association,
    departments,
    members,
);
