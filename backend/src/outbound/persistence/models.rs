//! Internal Diesel row structs.
//!
//! These types never leave the persistence layer; repositories convert them
//! into domain entities before returning.

use diesel::prelude::*;

use crate::domain::{Blog, BlogId, Department, DepartmentId, PhotoUri};

use super::schema::{blogs, department_member_association, departments, members};

/// Row read from `departments`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = departments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct DepartmentRow {
    pub id: i32,
    pub name: String,
}

impl From<DepartmentRow> for Department {
    fn from(row: DepartmentRow) -> Self {
        Self {
            id: DepartmentId::new(row.id),
            name: row.name,
        }
    }
}

/// Insertable and changeset form of a department.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = departments)]
pub(crate) struct DepartmentChanges<'a> {
    pub name: &'a str,
}

/// Row read from `members`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = members)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct MemberRow {
    pub id: i32,
    pub name: String,
    pub role: String,
    pub photo_uri: String,
    pub active_member: bool,
}

/// Insertable and changeset form of a member's scalar columns.
///
/// Every column is always written; updates are full overwrites.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = members)]
pub(crate) struct MemberChanges<'a> {
    pub name: &'a str,
    pub role: &'a str,
    pub photo_uri: &'a str,
    pub active_member: bool,
}

/// Membership row.
#[derive(Debug, Clone, Copy, Insertable)]
#[diesel(table_name = department_member_association)]
pub(crate) struct MembershipRow {
    pub department_id: i32,
    pub member_id: i32,
}

/// Row read from `blogs`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = blogs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct BlogRow {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub cover_image_uri: String,
    pub body: String,
}

impl From<BlogRow> for Blog {
    fn from(row: BlogRow) -> Self {
        Self {
            id: BlogId::new(row.id),
            title: row.title,
            author: row.author,
            cover_image_uri: PhotoUri::new(row.cover_image_uri),
            body: row.body,
        }
    }
}

/// Insertable form of a blog post.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = blogs)]
pub(crate) struct NewBlogRow<'a> {
    pub title: &'a str,
    pub author: &'a str,
    pub cover_image_uri: &'a str,
    pub body: &'a str,
}

/// Changeset for a blog post's text columns.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = blogs)]
pub(crate) struct BlogTextChanges<'a> {
    pub title: &'a str,
    pub author: &'a str,
    pub body: &'a str,
}
