//! Shared validation helpers for inbound HTTP adapters.
//!
//! Every helper returns a domain `Error` with `invalid_request` and a
//! `details` object naming the offending field and a stable code.

use actix_web::{HttpRequest, web};
use pagination::{Page, PageError, PageQuery};
use serde_json::json;

use crate::domain::Error;

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    UnknownField,
    InvalidInteger,
    InvalidBoolean,
    InvalidPagination,
    MalformedBody,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::UnknownField => "unknown_field",
            ErrorCode::InvalidInteger => "invalid_integer",
            ErrorCode::InvalidBoolean => "invalid_boolean",
            ErrorCode::InvalidPagination => "invalid_pagination",
            ErrorCode::MalformedBody => "malformed_body",
        }
    }
}

/// Newtype wrapper for HTTP field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub(crate) fn as_str(&self) -> &'static str {
        self.0
    }
}

struct ValidationError {
    field: String,
    message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    fn with_code(self, code: ErrorCode) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "code": code.as_str(),
        }))
    }

    fn with_value(self, code: ErrorCode, value: impl Into<String>) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "value": value.into(),
            "code": code.as_str(),
        }))
    }

    fn with_index(self, code: ErrorCode, index: usize, value: impl Into<String>) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "index": index,
            "value": value.into(),
            "code": code.as_str(),
        }))
    }
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("missing required field: {field}"))
        .with_code(ErrorCode::MissingField)
}

pub(crate) fn unknown_field_error(field: &str) -> Error {
    ValidationError::new(field, format!("unexpected form field: {field}"))
        .with_code(ErrorCode::UnknownField)
}

pub(crate) fn malformed_body_error(field: &str, message: impl Into<String>) -> Error {
    ValidationError::new(field, message).with_code(ErrorCode::MalformedBody)
}

/// Parse every value of a repeated integer field, reporting the first bad index.
pub(crate) fn parse_i32_list(values: &[String], field: FieldName) -> Result<Vec<i32>, Error> {
    values
        .iter()
        .enumerate()
        .map(|(index, raw)| {
            raw.trim().parse::<i32>().map_err(|_| {
                let name = field.as_str();
                ValidationError::new(name, format!("{name} must contain integers")).with_index(
                    ErrorCode::InvalidInteger,
                    index,
                    raw.as_str(),
                )
            })
        })
        .collect()
}

/// Parse an HTML-form style boolean.
pub(crate) fn parse_bool(raw: &str, field: FieldName) -> Result<bool, Error> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "on" | "yes" => Ok(true),
        "false" | "0" | "off" | "no" => Ok(false),
        _ => {
            let name = field.as_str();
            Err(ValidationError::new(name, format!("{name} must be true or false"))
                .with_value(ErrorCode::InvalidBoolean, raw))
        }
    }
}

fn invalid_page_error(err: PageError) -> Error {
    let field = err.field();
    ValidationError::new(field, err.to_string()).with_code(ErrorCode::InvalidPagination)
}

/// Validate raw `skip`/`limit` parameters into a [`Page`].
pub(crate) fn parse_page(query: PageQuery) -> Result<Page, Error> {
    Page::try_from(query).map_err(invalid_page_error)
}

/// JSON extractor settings rendering body errors in the domain error shape.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req: &HttpRequest| {
        malformed_body_error("body", format!("invalid JSON body: {err}")).into()
    })
}

/// Query-string extractor settings rendering parse errors as domain errors.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req: &HttpRequest| {
        malformed_body_error("query", format!("invalid query string: {err}")).into()
    })
}

/// Path extractor settings; non-integer ids are reported as `invalid_request`.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req: &HttpRequest| {
        ValidationError::new("id", format!("invalid path parameter: {err}"))
            .with_code(ErrorCode::InvalidInteger)
            .into()
    })
}
