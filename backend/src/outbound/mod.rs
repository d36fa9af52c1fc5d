//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL-backed entity repositories using Diesel ORM.
//! - **blob**: HTTP client for the object store holding member photos and
//!   blog covers.
//!
//! Adapters translate between domain types and infrastructure
//! representations. They contain no business logic.

pub mod blob;
pub mod persistence;
