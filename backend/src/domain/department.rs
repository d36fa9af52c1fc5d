//! Department entity.
//!
//! Departments group members. Names are unique across the organisation; the
//! persistence adapter reports collisions as
//! [`DepartmentRepositoryError::DuplicateName`](crate::domain::ports::DepartmentRepositoryError).

use serde::{Deserialize, Serialize};

use super::DepartmentId;
use super::fields::{FieldValidationError, required_text};

/// Persisted department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// Primary key.
    pub id: DepartmentId,
    /// Unique display name.
    pub name: String,
}

/// Validated input for creating a department.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDepartment {
    name: String,
}

impl NewDepartment {
    /// Validate the submitted name.
    ///
    /// # Errors
    /// Returns [`FieldValidationError::Blank`] for a blank name.
    pub fn try_new(name: &str) -> Result<Self, FieldValidationError> {
        Ok(Self {
            name: required_text("name", name, None)?,
        })
    }

    /// Trimmed department name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Full overwrite of a department's mutable fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentUpdate {
    name: String,
}

impl DepartmentUpdate {
    /// Validate the replacement name.
    ///
    /// # Errors
    /// Returns [`FieldValidationError::Blank`] for a blank name.
    pub fn try_new(name: &str) -> Result<Self, FieldValidationError> {
        Ok(Self {
            name: required_text("name", name, None)?,
        })
    }

    /// Trimmed replacement name.
    pub fn name(&self) -> &str {
        &self.name
    }
}
