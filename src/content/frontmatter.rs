//! Front-matter parsing and validation

use std::collections::HashMap;
use std::path::Path;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Deserialize;

use crate::error::{ContentError, Result};

/// Raw front-matter as it appears in YAML, before validation.
///
/// Every field is optional here; `FrontMatter::parse` promotes the raw shape
/// to the validated record or fails with a front-matter error.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawFrontMatter {
    title: Option<String>,
    date: Option<String>,

    /// Additional custom fields
    #[serde(flatten)]
    extra: HashMap<String, serde_yaml::Value>,
}

/// Validated front-matter of a lesson document.
#[derive(Debug, Clone)]
pub struct FrontMatter {
    /// Lesson title, required.
    pub title: String,

    /// Publication date, used for listing order.
    pub date: Option<NaiveDateTime>,

    /// Custom fields passed through untouched.
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl FrontMatter {
    /// Parse the front-matter block at the start of `content`.
    ///
    /// Returns the validated front-matter and the remaining markdown body.
    /// A document without a front-matter block, with an unterminated block,
    /// with invalid YAML, or without a `title` is rejected; listing and
    /// detail resolution must never fall back to a blank title.
    pub fn parse<'a>(path: &Path, content: &'a str) -> Result<(Self, &'a str)> {
        let content = content.trim_start();

        let Some(rest) = content.strip_prefix("---") else {
            return Err(ContentError::frontmatter(
                path,
                "missing front-matter block",
            ));
        };
        let rest = rest.trim_start_matches(['\n', '\r']);

        let Some(end_pos) = rest.find("\n---") else {
            return Err(ContentError::frontmatter(
                path,
                "unterminated front-matter block",
            ));
        };

        let yaml = &rest[..end_pos];
        let body = rest[end_pos + 4..].trim_start_matches(['\n', '\r']);

        let raw: RawFrontMatter = serde_yaml::from_str(yaml)
            .map_err(|e| ContentError::frontmatter(path, e.to_string()))?;

        raw.validate(path).map(|fm| (fm, body))
    }
}

impl RawFrontMatter {
    fn validate(self, path: &Path) -> Result<FrontMatter> {
        let title = match self.title {
            Some(t) if !t.trim().is_empty() => t,
            _ => return Err(ContentError::frontmatter(path, "missing `title`")),
        };

        let date = match self.date {
            Some(s) => Some(parse_date_string(&s).ok_or_else(|| {
                ContentError::frontmatter(path, format!("unrecognized date `{}`", s))
            })?),
            None => None,
        };

        Ok(FrontMatter {
            title,
            date,
            extra: self.extra,
        })
    }
}

/// Parse a date string in the formats lessons commonly use.
fn parse_date_string(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];
    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    let date_formats = ["%Y-%m-%d", "%Y/%m/%d"];
    for fmt in date_formats {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }

    // RFC 3339 / ISO 8601 with offset
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }

    None
}
