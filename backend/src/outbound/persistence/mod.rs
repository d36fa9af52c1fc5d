//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the entity repository ports backed by
//! PostgreSQL through `diesel-async` and `bb8` connection pooling.
//!
//! - Repository implementations only translate between Diesel rows and
//!   domain types; photo and not-found policy lives in the domain services.
//! - Row structs (`models.rs`) and table definitions (`schema.rs`) never
//!   leave this module.
//! - Database failures are mapped onto each port's error enum.
//!
//! # Example
//!
//! ```no_run
//! use backend::outbound::persistence::{DbPool, DieselDepartmentRepository, PoolConfig};
//!
//! # async fn connect() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/clubsite")).await?;
//! let departments = DieselDepartmentRepository::new(pool);
//! # let _ = departments;
//! # Ok(())
//! # }
//! ```

mod diesel_basic_error_mapping;
mod diesel_blog_repository;
mod diesel_department_repository;
mod diesel_member_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_blog_repository::DieselBlogRepository;
pub use diesel_department_repository::DieselDepartmentRepository;
pub use diesel_member_repository::DieselMemberRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
