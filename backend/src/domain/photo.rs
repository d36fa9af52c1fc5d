//! Photo value types: stored URIs, uploaded files, and blob object naming.

use serde::{Deserialize, Serialize};

/// Shared fallback image used whenever an entity has no uploaded photo.
pub const PLACEHOLDER_PHOTO_URL: &str = "https://akmiccoer19irir6.public.blob.vercel-storage.com/uploaded_images/placeholder-LfUscThhRnJRb0vT6hqOrhgNptslJC.png";

const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// URL of a photo held by the blob store, or the shared placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhotoUri(String);

impl PhotoUri {
    /// Wrap a stored URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// The built-in placeholder URL.
    pub fn placeholder() -> Self {
        Self::new(PLACEHOLDER_PHOTO_URL)
    }

    /// Borrow the URL text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PhotoUri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Blob store folder an entity kind writes its photos into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoFolder {
    /// Member portraits.
    Members,
    /// Blog cover images.
    Blogs,
}

impl PhotoFolder {
    /// Folder prefix used in the object path.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Members => "uploaded_images",
            Self::Blogs => "blog_images",
        }
    }
}

/// A photo file received from a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoUpload {
    file_name: String,
    content: Vec<u8>,
}

impl PhotoUpload {
    /// Bundle the client-supplied file name with the raw bytes.
    pub fn new(file_name: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content,
        }
    }

    /// File name as sent by the client.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Raw file bytes.
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Extension of the original file name, without the dot.
    ///
    /// Returns `None` when the name has no extension.
    pub fn extension(&self) -> Option<&str> {
        self.file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .filter(|ext| !ext.is_empty())
    }

    /// Consume the upload into a blob object stored as `{folder}/{name}.{ext}`.
    pub fn into_blob_object(self, folder: PhotoFolder, name: &str) -> BlobObject {
        let path = object_path(folder, name, self.extension());
        let content_type = guess_content_type(&path);
        BlobObject {
            path,
            content_type,
            content: self.content,
        }
    }
}

/// Object ready to be written to the blob store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlobObject {
    /// Path of the object below the store's base URL.
    pub path: String,
    /// MIME type guessed from the path extension.
    pub content_type: &'static str,
    /// Raw object bytes.
    pub content: Vec<u8>,
}

/// Build the object path for an entity photo.
///
/// Path separators inside `name` are replaced so an entity name can never
/// escape its folder. A stem made only of dots would collapse as a `.` or
/// `..` segment, so its dots become underscores.
pub fn object_path(folder: PhotoFolder, name: &str, extension: Option<&str>) -> String {
    let mut stem: String = name
        .trim()
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '-' } else { c })
        .collect();
    if stem.chars().all(|c| c == '.') {
        stem = stem.replace('.', "_");
    }
    match extension {
        Some(ext) => format!("{}/{stem}.{ext}", folder.as_str()),
        None => format!("{}/{stem}", folder.as_str()),
    }
}

/// Guess a MIME type from the extension of `path`.
pub fn guess_content_type(path: &str) -> &'static str {
    let Some((_, ext)) = path.rsplit_once('.') else {
        return FALLBACK_CONTENT_TYPE;
    };
    match ext.to_ascii_lowercase().as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" | "jpe" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "avif" => "image/avif",
        "svg" => "image/svg+xml",
        "bmp" => "image/bmp",
        "ico" => "image/vnd.microsoft.icon",
        "tif" | "tiff" => "image/tiff",
        "heic" => "image/heic",
        _ => FALLBACK_CONTENT_TYPE,
    }
}
