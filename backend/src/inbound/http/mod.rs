//! HTTP inbound adapter exposing the REST API.
//!
//! Entity routes are registered under `/api` by [`configure_api`]; the
//! welcome route and health probes sit at the root.

pub mod blogs;
pub mod departments;
pub mod error;
pub mod health;
pub mod members;
pub(crate) mod multipart;
pub mod root;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod validation;

use actix_web::web;

pub use error::ApiResult;

/// Register every entity route on a scope mounted at `/api`.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(departments::create_department)
        .service(departments::list_departments)
        .service(departments::get_department)
        .service(departments::update_department)
        .service(departments::delete_department)
        .service(members::create_member)
        .service(members::list_members)
        .service(members::get_member)
        .service(members::update_member)
        .service(members::delete_member)
        .service(blogs::create_blog)
        .service(blogs::list_blogs)
        .service(blogs::get_blog)
        .service(blogs::update_blog)
        .service(blogs::replace_blog_cover)
        .service(blogs::delete_blog);
}
