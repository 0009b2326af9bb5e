//! lessons-rs: a small static site generator for markdown lesson sites
//!
//! A directory of markdown documents with YAML front-matter is rendered
//! into an index page listing all lessons and one static detail page per
//! lesson under `lessons/{slug}/`.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod generator;
pub mod server;
pub mod templates;

use std::path::{Path, PathBuf};

use anyhow::Result;

use content::{ContentStore, MarkdownRenderer};

/// A lesson site rooted at a directory on disk.
#[derive(Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Lessons source directory
    pub lessons_dir: PathBuf,
    /// Static assets directory
    pub static_dir: PathBuf,
    /// Public (output) directory
    pub public_dir: PathBuf,
}

impl Site {
    /// Create a site instance from a base directory.
    ///
    /// Reads `_config.yml` when present, defaults otherwise.
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let lessons_dir = base_dir.join(&config.source_dir);
        let static_dir = base_dir.join(&config.static_dir);
        let public_dir = base_dir.join(&config.public_dir);

        Ok(Self {
            config,
            base_dir,
            lessons_dir,
            static_dir,
            public_dir,
        })
    }

    /// Content store over this site's lessons directory.
    pub fn store(&self) -> ContentStore {
        let renderer = MarkdownRenderer::with_theme(&self.config.highlight.theme);
        ContentStore::new(&self.lessons_dir, renderer)
    }

    /// Generate the static site
    pub fn generate(&self) -> Result<()> {
        commands::generate::run(self)
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
