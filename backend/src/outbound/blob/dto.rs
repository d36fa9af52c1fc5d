//! Wire payloads for the blob store HTTP protocol.

use serde::{Deserialize, Serialize};

/// Body returned by a successful `PUT`.
#[derive(Debug, Deserialize)]
pub(super) struct PutResponseDto {
    pub(super) url: String,
}

/// Body sent with `DELETE {base}/delete`.
#[derive(Debug, Serialize)]
pub(super) struct DeleteRequestDto<'a> {
    pub(super) urls: Vec<&'a str>,
}
