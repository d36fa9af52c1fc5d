//! Member entity and its write models.
//!
//! A member belongs to any number of departments. Membership is a set: the
//! submitted department ids are de-duplicated, and every update replaces the
//! whole set. Ids that do not resolve to an existing department are skipped
//! by the repository without error.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::fields::{FieldValidationError, required_text};
use super::{Department, DepartmentId, MemberId, PhotoUri};

/// Persisted member with its resolved departments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Primary key.
    pub id: MemberId,
    /// Display name.
    pub name: String,
    /// Role within the organisation, e.g. "Treasurer".
    pub role: String,
    /// Uploaded portrait URL or the shared placeholder.
    pub photo_uri: PhotoUri,
    /// Whether the member is currently active.
    pub active_member: bool,
    /// Departments ordered by id.
    pub departments: Vec<Department>,
}

/// Validated scalar fields and department ids submitted for a member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberDraft {
    name: String,
    role: String,
    active_member: bool,
    department_ids: Vec<DepartmentId>,
}

impl MemberDraft {
    /// Validate submitted member fields.
    ///
    /// Department ids are de-duplicated and sorted.
    ///
    /// # Errors
    /// Returns [`FieldValidationError`] when `name` or `role` is blank.
    pub fn try_new(
        name: &str,
        role: &str,
        active_member: bool,
        department_ids: impl IntoIterator<Item = DepartmentId>,
    ) -> Result<Self, FieldValidationError> {
        let department_ids: BTreeSet<DepartmentId> = department_ids.into_iter().collect();
        Ok(Self {
            name: required_text("name", name, None)?,
            role: required_text("role", role, None)?,
            active_member,
            department_ids: department_ids.into_iter().collect(),
        })
    }

    /// Trimmed member name; also names the photo object.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Trimmed role.
    pub fn role(&self) -> &str {
        &self.role
    }

    /// Activity flag.
    pub fn active_member(&self) -> bool {
        self.active_member
    }

    /// De-duplicated department ids in ascending order.
    pub fn department_ids(&self) -> &[DepartmentId] {
        &self.department_ids
    }
}

/// Record handed to the repository when creating a member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMember {
    /// Submitted fields.
    pub draft: MemberDraft,
    /// URI resolved by the photo lifecycle before persistence.
    pub photo_uri: PhotoUri,
}

/// Full overwrite of a member's fields.
///
/// Every mutable column is named explicitly; the department set is replaced
/// wholesale by `department_ids`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberUpdate {
    /// Replacement name.
    pub name: String,
    /// Replacement role.
    pub role: String,
    /// Replacement activity flag.
    pub active_member: bool,
    /// Photo URI after the lifecycle has run.
    pub photo_uri: PhotoUri,
    /// Complete replacement department set.
    pub department_ids: Vec<DepartmentId>,
}

impl MemberUpdate {
    /// Combine validated fields with the photo URI chosen by the lifecycle.
    pub fn from_draft(draft: MemberDraft, photo_uri: PhotoUri) -> Self {
        let MemberDraft {
            name,
            role,
            active_member,
            department_ids,
        } = draft;
        Self {
            name,
            role,
            active_member,
            photo_uri,
            department_ids,
        }
    }
}

/// Optional equality filters for member listings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberFilter {
    role: Option<String>,
}

impl MemberFilter {
    /// Filter on an exact role; blank input disables the filter.
    pub fn with_role(role: Option<&str>) -> Self {
        Self {
            role: role
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_owned),
        }
    }

    /// Role to match, if any.
    pub fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn ids(raw: &[i32]) -> Vec<DepartmentId> {
        raw.iter().copied().map(DepartmentId::new).collect()
    }

    #[rstest]
    fn draft_deduplicates_and_sorts_department_ids() {
        let draft = MemberDraft::try_new("Ada", "Lead", true, ids(&[3, 1, 3, 2, 1]))
            .expect("valid draft");
        assert_eq!(draft.department_ids(), ids(&[1, 2, 3]).as_slice());
    }

    #[rstest]
    #[case("", "Lead", "name")]
    #[case("Ada", "  ", "role")]
    fn draft_rejects_blank_text(#[case] name: &str, #[case] role: &str, #[case] field: &str) {
        let err = MemberDraft::try_new(name, role, true, Vec::new()).expect_err("blank field");
        assert_eq!(err.field(), field);
    }

    #[rstest]
    fn update_carries_every_field_from_the_draft() {
        let draft = MemberDraft::try_new(" Ada ", "Lead", false, ids(&[4])).expect("valid draft");
        let update = MemberUpdate::from_draft(draft, PhotoUri::new("https://blob/a.png"));
        assert_eq!(update.name, "Ada");
        assert_eq!(update.role, "Lead");
        assert!(!update.active_member);
        assert_eq!(update.photo_uri.as_str(), "https://blob/a.png");
        assert_eq!(update.department_ids, ids(&[4]));
    }

    #[rstest]
    #[case(None, None)]
    #[case(Some("   "), None)]
    #[case(Some(" Mentor "), Some("Mentor"))]
    fn filter_normalises_role(#[case] raw: Option<&str>, #[case] expected: Option<&str>) {
        assert_eq!(MemberFilter::with_role(raw).role(), expected);
    }
}
