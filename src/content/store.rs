//! Content store - slug enumeration and lesson resolution

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::{FrontMatter, Lesson, LessonSummary, MarkdownRenderer};
use crate::error::{ContentError, Result};

/// Read-only store over the lessons source directory.
///
/// Documents are authored out-of-band and never written by the store. Every
/// operation takes `&self` and reads straight from disk, so a single store
/// can be shared across threads while routes are generated.
pub struct ContentStore {
    lessons_dir: PathBuf,
    renderer: MarkdownRenderer,
}

impl ContentStore {
    /// Create a store over a lessons directory.
    pub fn new(lessons_dir: impl Into<PathBuf>, renderer: MarkdownRenderer) -> Self {
        Self {
            lessons_dir: lessons_dir.into(),
            renderer,
        }
    }

    /// Enumerate every known slug, exactly once, in deterministic order.
    ///
    /// This is the route table for static generation: the set of slugs at
    /// generation time is complete and final.
    pub fn slugs(&self) -> Result<Vec<String>> {
        Ok(self.entries()?.into_iter().map(|(slug, _)| slug).collect())
    }

    /// All lessons ordered for listing: newest first, dateless lessons
    /// last, ties broken by slug.
    pub fn sorted_summaries(&self) -> Result<Vec<LessonSummary>> {
        let mut summaries = Vec::new();

        for (slug, path) in self.entries()? {
            let raw = fs::read_to_string(&path)?;
            let (fm, _body) = FrontMatter::parse(&path, &raw)?;
            summaries.push(LessonSummary {
                slug,
                title: fm.title,
                date: fm.date,
            });
        }

        summaries.sort_by(|a, b| a.listing_cmp(b));
        Ok(summaries)
    }

    /// Resolve a single slug to its lesson.
    ///
    /// Fails with `NotFound` when no document matches and with a
    /// front-matter error when the document is malformed.
    pub fn detail(&self, slug: &str) -> Result<Lesson> {
        let path = self
            .entries()?
            .into_iter()
            .find(|(s, _)| s == slug)
            .map(|(_, path)| path)
            .ok_or_else(|| ContentError::not_found(slug))?;

        let raw = fs::read_to_string(&path)?;
        let (fm, body) = FrontMatter::parse(&path, &raw)?;
        let content = self.renderer.render(body);

        Ok(Lesson {
            slug: slug.to_string(),
            title: fm.title,
            date: fm.date,
            raw: body.to_string(),
            content,
            source: path,
        })
    }

    /// Walk the lessons directory and pair each document with its slug.
    ///
    /// Traversal is sorted by file name so the result is deterministic.
    /// Two documents mapping to the same slug is an error, not a pick.
    fn entries(&self) -> Result<Vec<(String, PathBuf)>> {
        if !self.lessons_dir.exists() {
            return Ok(Vec::new());
        }

        let mut entries: Vec<(String, PathBuf)> = Vec::new();
        let mut seen: HashMap<String, PathBuf> = HashMap::new();

        for entry in WalkDir::new(&self.lessons_dir)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() || !is_markdown_file(path) {
                continue;
            }

            let slug = slug_for(path);
            if let Some(first) = seen.get(&slug) {
                return Err(ContentError::DuplicateSlug {
                    slug,
                    first: first.clone(),
                    second: path.to_path_buf(),
                });
            }

            seen.insert(slug.clone(), path.to_path_buf());
            entries.push((slug, path.to_path_buf()));
        }

        Ok(entries)
    }
}

/// Slug of a document: its file stem. The front-matter title never
/// affects the URL.
fn slug_for(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "untitled".to_string())
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store(dir: &TempDir) -> ContentStore {
        ContentStore::new(dir.path(), MarkdownRenderer::new())
    }

    fn write_lesson(dir: &TempDir, name: &str, content: &str) {
        fs::write(dir.path().join(name), content).unwrap();
    }

    fn fixture() -> TempDir {
        let dir = TempDir::new().unwrap();
        write_lesson(
            &dir,
            "intro.md",
            "---\ntitle: Intro\ndate: 2024-01-01\n---\n# Hi\n",
        );
        write_lesson(
            &dir,
            "basics.md",
            "---\ntitle: Basics\ndate: 2024-02-01\n---\n## Sub\n",
        );
        dir
    }

    #[test]
    fn test_slugs_complete_and_unique() {
        let dir = fixture();
        let slugs = store(&dir).slugs().unwrap();
        assert_eq!(slugs, vec!["basics", "intro"]);
    }

    #[test]
    fn test_slugs_empty_when_dir_missing() {
        let dir = TempDir::new().unwrap();
        let store = ContentStore::new(dir.path().join("nope"), MarkdownRenderer::new());
        assert!(store.slugs().unwrap().is_empty());
    }

    #[test]
    fn test_non_markdown_files_ignored() {
        let dir = fixture();
        write_lesson(&dir, "notes.txt", "not a lesson");
        let slugs = store(&dir).slugs().unwrap();
        assert_eq!(slugs.len(), 2);
    }

    #[test]
    fn test_duplicate_slug_rejected() {
        let dir = fixture();
        write_lesson(&dir, "intro.markdown", "---\ntitle: Other Intro\n---\nbody\n");
        let err = store(&dir).slugs().unwrap_err();
        assert!(matches!(err, ContentError::DuplicateSlug { ref slug, .. } if slug == "intro"));
    }

    #[test]
    fn test_summaries_newest_first() {
        let dir = fixture();
        let summaries = store(&dir).sorted_summaries().unwrap();
        let order: Vec<&str> = summaries.iter().map(|s| s.slug.as_str()).collect();
        assert_eq!(order, vec!["basics", "intro"]);
        assert_eq!(summaries[0].title, "Basics");
    }

    #[test]
    fn test_summaries_dateless_last() {
        let dir = fixture();
        write_lesson(&dir, "appendix.md", "---\ntitle: Appendix\n---\nbody\n");
        let summaries = store(&dir).sorted_summaries().unwrap();
        let order: Vec<&str> = summaries.iter().map(|s| s.slug.as_str()).collect();
        assert_eq!(order, vec!["basics", "intro", "appendix"]);
    }

    #[test]
    fn test_summaries_reject_missing_title() {
        let dir = fixture();
        write_lesson(&dir, "broken.md", "---\ndate: 2024-03-01\n---\nbody\n");
        let err = store(&dir).sorted_summaries().unwrap_err();
        assert!(matches!(err, ContentError::Frontmatter { .. }));
    }

    #[test]
    fn test_detail_resolves_title_and_content() {
        let dir = fixture();
        let lesson = store(&dir).detail("intro").unwrap();
        assert_eq!(lesson.title, "Intro");
        assert!(lesson.content.contains("<h1>Hi</h1>"));
        assert_eq!(lesson.raw.trim(), "# Hi");
    }

    #[test]
    fn test_detail_is_idempotent() {
        let dir = fixture();
        let store = store(&dir);
        let first = store.detail("basics").unwrap();
        let second = store.detail("basics").unwrap();
        assert_eq!(first.content, second.content);
    }

    #[test]
    fn test_detail_unknown_slug() {
        let dir = fixture();
        let err = store(&dir).detail("missing-slug").unwrap_err();
        assert!(matches!(err, ContentError::NotFound { ref slug } if slug == "missing-slug"));
    }

    #[test]
    fn test_detail_missing_title() {
        let dir = fixture();
        write_lesson(&dir, "broken.md", "---\ndate: 2024-03-01\n---\nbody\n");
        let err = store(&dir).detail("broken").unwrap_err();
        assert!(matches!(err, ContentError::Frontmatter { .. }));
    }

    #[test]
    fn test_nested_directories_are_walked() {
        let dir = fixture();
        fs::create_dir_all(dir.path().join("advanced")).unwrap();
        fs::write(
            dir.path().join("advanced/otp.md"),
            "---\ntitle: OTP\ndate: 2024-03-01\n---\nbody\n",
        )
        .unwrap();
        let slugs = store(&dir).slugs().unwrap();
        assert!(slugs.contains(&"otp".to_string()));
    }
}
