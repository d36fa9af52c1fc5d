//! Multipart form decoding for member and blog writes.
//!
//! Text parts are collected by name (repeated parts keep their order) and at
//! most one file part is kept as a [`PhotoUpload`]. Parts whose name is not
//! declared by the caller are rejected, as is a file above [`MAX_PHOTO_BYTES`].

use std::collections::HashMap;

use actix_multipart::{Field, Multipart, MultipartError};
use futures_util::StreamExt;
use serde_json::json;

use crate::domain::{Error, PhotoUpload};
use crate::inbound::http::validation::{
    FieldName, malformed_body_error, missing_field_error, unknown_field_error,
};

/// Largest accepted photo upload.
pub const MAX_PHOTO_BYTES: usize = 10 * 1024 * 1024;

const MAX_TEXT_BYTES: usize = 64 * 1024;

/// Field layout a handler accepts.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FormSchema {
    pub(crate) text: &'static [FieldName],
    pub(crate) file: FieldName,
}

impl FormSchema {
    fn text_field(&self, name: &str) -> Option<FieldName> {
        self.text.iter().copied().find(|field| field.as_str() == name)
    }
}

/// Decoded multipart form.
#[derive(Debug, Default)]
pub(crate) struct FormData {
    text: HashMap<&'static str, Vec<String>>,
    photo: Option<PhotoUpload>,
}

impl FormData {
    /// First value of a required text field.
    pub(crate) fn required(&self, field: FieldName) -> Result<&str, Error> {
        self.optional(field)
            .ok_or_else(|| missing_field_error(field))
    }

    /// First value of an optional text field.
    pub(crate) fn optional(&self, field: FieldName) -> Option<&str> {
        self.text
            .get(field.as_str())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Every value of a repeated text field, in submission order.
    pub(crate) fn all(&self, field: FieldName) -> &[String] {
        self.text
            .get(field.as_str())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Take the uploaded file, if one was sent.
    pub(crate) fn take_photo(&mut self) -> Option<PhotoUpload> {
        self.photo.take()
    }
}

fn map_multipart_error(err: MultipartError) -> Error {
    malformed_body_error("body", format!("invalid multipart body: {err}"))
}

fn too_large_error(field: &str, limit: usize) -> Error {
    Error::invalid_request(format!("{field} exceeds {limit} bytes")).with_details(json!({
        "field": field,
        "limit": limit,
        "code": "payload_too_large",
    }))
}

async fn read_field(field: &mut Field, name: &str, limit: usize) -> Result<Vec<u8>, Error> {
    let mut buf = Vec::new();
    while let Some(chunk) = field.next().await {
        let data = chunk.map_err(map_multipart_error)?;
        if buf.len().saturating_add(data.len()) > limit {
            return Err(too_large_error(name, limit));
        }
        buf.extend_from_slice(&data);
    }
    Ok(buf)
}

/// Drain `payload` into a [`FormData`] following `schema`.
///
/// A file part sent without a file name and without content (what browsers
/// submit for an empty file input) counts as no file.
pub(crate) async fn read_form(mut payload: Multipart, schema: FormSchema) -> Result<FormData, Error> {
    let mut form = FormData::default();

    while let Some(part) = payload.next().await {
        let mut field = part.map_err(map_multipart_error)?;
        let name = field.name().unwrap_or_default().to_owned();

        if name == schema.file.as_str() {
            let file_name = field
                .content_disposition()
                .and_then(|disposition| disposition.get_filename())
                .unwrap_or_default()
                .to_owned();
            let content = read_field(&mut field, &name, MAX_PHOTO_BYTES).await?;
            if file_name.is_empty() && content.is_empty() {
                continue;
            }
            if form.photo.is_some() {
                return Err(malformed_body_error(&name, format!("only one {name} may be sent")));
            }
            form.photo = Some(PhotoUpload::new(file_name, content));
            continue;
        }

        let Some(text_field) = schema.text_field(&name) else {
            return Err(unknown_field_error(&name));
        };
        let raw = read_field(&mut field, &name, MAX_TEXT_BYTES).await?;
        let value = String::from_utf8(raw)
            .map_err(|_| malformed_body_error(&name, format!("{name} must be UTF-8 text")))?;
        form.text.entry(text_field.as_str()).or_default().push(value);
    }

    Ok(form)
}
