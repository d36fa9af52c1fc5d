//! Offset pagination primitives shared by clubsite backend list endpoints.
//!
//! List endpoints accept `skip` and `limit` query parameters. Raw values are
//! parsed into a [`PageQuery`] and validated into a [`Page`], which exposes
//! the offset and limit as `i64` so persistence adapters can pass them
//! straight to SQL `OFFSET`/`LIMIT` clauses.
//!
//! # Examples
//! ```
//! use pagination::{Page, PageQuery};
//!
//! let page = Page::try_from(PageQuery { skip: Some(20), limit: Some(500) })
//!     .expect("non-negative values are accepted");
//! assert_eq!(page.offset(), 20);
//! assert_eq!(page.limit(), 100);
//! ```

use serde::{Deserialize, Serialize};

/// Number of rows returned when the caller does not supply a limit.
pub const DEFAULT_LIMIT: u32 = 10;

/// Largest page size a caller may request; larger values are clamped.
pub const MAX_LIMIT: u32 = 100;

/// Validation failures raised while building a [`Page`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PageError {
    /// `skip` was negative.
    #[error("skip must not be negative (got {value})")]
    NegativeSkip {
        /// Rejected raw value.
        value: i64,
    },
    /// `limit` was negative.
    #[error("limit must not be negative (got {value})")]
    NegativeLimit {
        /// Rejected raw value.
        value: i64,
    },
}

impl PageError {
    /// Name of the query parameter that failed validation.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::NegativeSkip { .. } => "skip",
            Self::NegativeLimit { .. } => "limit",
        }
    }
}

/// Raw `skip`/`limit` query parameters as received from a client.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageQuery {
    /// Number of rows to skip from the start of the ordered result set.
    pub skip: Option<i64>,
    /// Maximum number of rows to return.
    pub limit: Option<i64>,
}

/// Validated offset page.
///
/// ## Invariants
/// - `skip` is non-negative.
/// - `limit` lies within `1..=MAX_LIMIT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Page {
    skip: u32,
    limit: u32,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Page {
    /// Build a page from already non-negative values, clamping `limit`.
    #[must_use]
    pub fn new(skip: u32, limit: u32) -> Self {
        Self {
            skip,
            limit: limit.clamp(1, MAX_LIMIT),
        }
    }

    /// Rows skipped before the first returned row.
    #[must_use]
    pub const fn skip(&self) -> u32 {
        self.skip
    }

    /// SQL `OFFSET` value.
    #[must_use]
    pub fn offset(&self) -> i64 {
        i64::from(self.skip)
    }

    /// SQL `LIMIT` value.
    #[must_use]
    pub fn limit(&self) -> i64 {
        i64::from(self.limit)
    }
}

fn saturate(value: i64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

impl TryFrom<PageQuery> for Page {
    type Error = PageError;

    fn try_from(query: PageQuery) -> Result<Self, Self::Error> {
        let skip = match query.skip {
            None => 0,
            Some(value) if value < 0 => return Err(PageError::NegativeSkip { value }),
            Some(value) => saturate(value),
        };
        let limit = match query.limit {
            None => DEFAULT_LIMIT,
            Some(value) if value < 0 => return Err(PageError::NegativeLimit { value }),
            Some(value) => saturate(value),
        };
        Ok(Self::new(skip, limit))
    }
}
