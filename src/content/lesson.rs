//! Lesson models

use std::cmp::Ordering;
use std::path::PathBuf;

use chrono::NaiveDateTime;
use serde::Serialize;

/// A fully resolved lesson: validated metadata plus rendered body.
#[derive(Debug, Clone, Serialize)]
pub struct Lesson {
    /// URL-safe identifier, derived from the source file name.
    pub slug: String,

    /// Lesson title from front-matter.
    pub title: String,

    /// Publication date, when declared.
    pub date: Option<NaiveDateTime>,

    /// Raw markdown body.
    pub raw: String,

    /// Rendered HTML body.
    pub content: String,

    /// Source file path.
    pub source: PathBuf,
}

/// Listing projection of a lesson, used for the index page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LessonSummary {
    pub slug: String,
    pub title: String,
    pub date: Option<NaiveDateTime>,
}

impl LessonSummary {
    /// Total listing order: date descending, dateless lessons last,
    /// ties broken by ascending slug.
    pub fn listing_cmp(&self, other: &Self) -> Ordering {
        match (&self.date, &other.date) {
            (Some(a), Some(b)) => b.cmp(a).then_with(|| self.slug.cmp(&other.slug)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.slug.cmp(&other.slug),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn summary(slug: &str, date: Option<&str>) -> LessonSummary {
        LessonSummary {
            slug: slug.to_string(),
            title: slug.to_string(),
            date: date.map(|d| {
                NaiveDate::parse_from_str(d, "%Y-%m-%d")
                    .unwrap()
                    .and_hms_opt(0, 0, 0)
                    .unwrap()
            }),
        }
    }

    #[test]
    fn test_newest_first() {
        let a = summary("intro", Some("2024-01-01"));
        let b = summary("basics", Some("2024-02-01"));
        assert_eq!(b.listing_cmp(&a), Ordering::Less);
        assert_eq!(a.listing_cmp(&b), Ordering::Greater);
    }

    #[test]
    fn test_equal_dates_break_by_slug() {
        let a = summary("alpha", Some("2024-01-01"));
        let b = summary("beta", Some("2024-01-01"));
        assert_eq!(a.listing_cmp(&b), Ordering::Less);
    }

    #[test]
    fn test_dateless_sorts_last() {
        let dated = summary("zulu", Some("2020-01-01"));
        let undated = summary("alpha", None);
        assert_eq!(dated.listing_cmp(&undated), Ordering::Less);
        assert_eq!(undated.listing_cmp(&dated), Ordering::Greater);
    }

    #[test]
    fn test_dateless_pair_breaks_by_slug() {
        let a = summary("alpha", None);
        let b = summary("beta", None);
        assert_eq!(a.listing_cmp(&b), Ordering::Less);
    }
}
