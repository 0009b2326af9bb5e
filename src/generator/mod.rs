//! Generator - renders the index page and the per-lesson pages

use std::fs;

use anyhow::Result;
use tera::Context;
use walkdir::WalkDir;

use crate::content::{ContentStore, LessonSummary};
use crate::templates::{LessonEntry, SiteMeta, TemplateRenderer};
use crate::Site;

/// Static site generator over a content store
pub struct Generator {
    site: Site,
    store: ContentStore,
    renderer: TemplateRenderer,
}

impl Generator {
    /// Create a new generator
    pub fn new(site: &Site) -> Result<Self> {
        let renderer = TemplateRenderer::new()?;
        let store = site.store();

        Ok(Self {
            site: site.clone(),
            store,
            renderer,
        })
    }

    /// Generate the entire site.
    ///
    /// The route table is fixed here: every slug known to the store gets a
    /// detail page, nothing else does. A malformed document aborts the run
    /// instead of shipping a page with a blank title.
    pub fn generate(&self) -> Result<()> {
        fs::create_dir_all(&self.site.public_dir)?;

        self.copy_static_assets()?;

        let summaries = self.store.sorted_summaries()?;
        self.generate_index_page(&summaries)?;

        let slugs = self.store.slugs()?;
        for slug in &slugs {
            self.generate_lesson_page(slug)?;
        }

        tracing::info!("Generated index and {} lesson pages", slugs.len());
        Ok(())
    }

    /// Site metadata for template context
    fn site_meta(&self) -> SiteMeta {
        SiteMeta {
            title: self.site.config.title.clone(),
            description: self.site.config.description.clone(),
            author: self.site.config.author.clone(),
            language: self.site.config.language.clone(),
            root: self.site.config.root.clone(),
        }
    }

    /// Route path for a lesson detail page
    fn lesson_path(&self, slug: &str) -> String {
        let root = self.site.config.root.trim_end_matches('/');
        format!("{}/lessons/{}/", root, slug)
    }

    /// Generate the index page listing all lessons
    fn generate_index_page(&self, summaries: &[LessonSummary]) -> Result<()> {
        let lessons: Vec<LessonEntry> = summaries
            .iter()
            .map(|s| LessonEntry {
                slug: s.slug.clone(),
                title: s.title.clone(),
                date: s.date.map(|d| d.format("%Y-%m-%d").to_string()),
                path: self.lesson_path(&s.slug),
            })
            .collect();

        let mut context = Context::new();
        context.insert("site", &self.site_meta());
        context.insert("lessons", &lessons);

        let html = self.renderer.render("index.html", &context)?;

        let output_path = self.site.public_dir.join("index.html");
        fs::write(&output_path, html)?;
        tracing::debug!("Generated: {:?}", output_path);

        Ok(())
    }

    /// Generate the detail page for one slug
    fn generate_lesson_page(&self, slug: &str) -> Result<()> {
        let lesson = self.store.detail(slug)?;

        let mut context = Context::new();
        context.insert("site", &self.site_meta());
        context.insert("title", &lesson.title);
        context.insert("content", &lesson.content);
        context.insert(
            "date",
            &lesson.date.map(|d| d.format("%Y-%m-%d").to_string()),
        );

        let html = self.renderer.render("lesson.html", &context)?;

        let output_path = self
            .site
            .public_dir
            .join("lessons")
            .join(slug)
            .join("index.html");
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&output_path, html)?;
        tracing::debug!("Generated lesson: {:?}", output_path);

        Ok(())
    }

    /// Copy static assets into the public directory
    fn copy_static_assets(&self) -> Result<()> {
        let static_dir = &self.site.static_dir;
        if !static_dir.exists() {
            return Ok(());
        }

        for entry in WalkDir::new(static_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if path.is_file() {
                let relative = path.strip_prefix(static_dir)?;
                let dest = self.site.public_dir.join(relative);

                if let Some(parent) = dest.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::copy(path, &dest)?;
            }
        }

        Ok(())
    }
}
