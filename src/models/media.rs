// src/models/media.rs
// DOCUMENTATION: Uploaded media, form payloads and object key layout
// PURPOSE: Shared by every resource that stores files in a bucket

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Image content types accepted for journey uploads
pub const IMAGE_CONTENT_TYPES: [&str; 5] = [
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/gif",
    "image/webp",
];

/// Video content types accepted for journey uploads
pub const VIDEO_CONTENT_TYPES: [&str; 4] = [
    "video/mp4",
    "video/webm",
    "video/ogg",
    "video/quicktime",
];

/// Kind of media stored for a journey item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
}

impl MediaType {
    /// Classify a content type, None when it is neither an accepted image nor video
    pub fn from_content_type(content_type: &str) -> Option<Self> {
        let content_type = content_type.trim().to_ascii_lowercase();
        if IMAGE_CONTENT_TYPES.contains(&content_type.as_str()) {
            Some(MediaType::Image)
        } else if VIDEO_CONTENT_TYPES.contains(&content_type.as_str()) {
            Some(MediaType::Video)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Image => "image",
            MediaType::Video => "video",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "image" => Ok(MediaType::Image),
            "video" => Ok(MediaType::Video),
            other => Err(format!("unknown media type: {}", other)),
        }
    }
}

/// A file part received in a multipart request
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    /// Sanitized file name, "file" when nothing usable is left
    pub fn safe_name(&self) -> String {
        let name = sanitize_file_name(&self.file_name);
        if name.is_empty() {
            "file".to_string()
        } else {
            name
        }
    }
}

/// Parsed multipart form: text fields and file parts keyed by field name
#[derive(Debug, Default)]
pub struct FormData {
    pub fields: HashMap<String, String>,
    pub files: HashMap<String, UploadedFile>,
}

impl FormData {
    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Text field with surrounding whitespace removed, None when blank
    pub fn non_empty(&self, name: &str) -> Option<&str> {
        self.text(name).map(str::trim).filter(|v| !v.is_empty())
    }

    pub fn take_file(&mut self, name: &str) -> Option<UploadedFile> {
        self.files.remove(name)
    }
}

/// Make an uploaded file name safe for use in an object key
/// Whitespace runs become one underscore, anything outside [A-Za-z0-9_.-] is dropped
pub fn sanitize_file_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_whitespace = false;

    for c in name.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                out.push('_');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;

        if c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-') {
            out.push(c);
        }
    }

    out
}

/// gallery/<millis>_<name>
pub fn gallery_object_key(millis: i64, safe_name: &str) -> String {
    format!("gallery/{}_{}", millis, safe_name)
}

/// tours/<millis>_<suffix>_<name>
pub fn tour_object_key(millis: i64, suffix: &str, safe_name: &str) -> String {
    format!("tours/{}_{}_{}", millis, suffix, safe_name)
}

/// journey/<images|videos>/<millis>_<name>
pub fn journey_object_key(media_type: MediaType, millis: i64, safe_name: &str) -> String {
    format!("journey/{}s/{}_{}", media_type, millis, safe_name)
}

/// Six lowercase alphanumerics to keep same-millisecond tour uploads apart
pub fn random_suffix() -> String {
    uuid::Uuid::new_v4().simple().to_string()[..6].to_string()
}
