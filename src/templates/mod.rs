//! Built-in page templates using the Tera template engine
//!
//! The templates are embedded directly in the binary; a site directory
//! carries no theme of its own.

use std::collections::HashMap;

use anyhow::Result;
use serde::Serialize;
use tera::{Context, Tera};

/// Template renderer with the embedded templates loaded
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates registered
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        // Lesson bodies arrive pre-rendered as HTML, so autoescaping
        // stays off for these templates.
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("builtin/layout.html")),
            ("index.html", include_str!("builtin/index.html")),
            ("lesson.html", include_str!("builtin/lesson.html")),
            ("partials/nav.html", include_str!("builtin/partials/nav.html")),
        ])?;

        tera.register_filter("date_format", date_format_filter);

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }
}

/// Tera filter: format a `YYYY-MM-DD` date string
fn date_format_filter(
    value: &tera::Value,
    args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("date_format", "value", String, value);
    let format = match args.get("format") {
        Some(val) => tera::try_get_value!("date_format", "format", String, val),
        None => "YYYY-MM-DD".to_string(),
    };

    // "LL" renders like "May 30, 2023"; anything else passes through
    if format == "LL" {
        if let Ok(date) = chrono::NaiveDate::parse_from_str(&s, "%Y-%m-%d") {
            return Ok(tera::Value::String(date.format("%B %d, %Y").to_string()));
        }
    }

    Ok(tera::Value::String(s))
}

/// Data structures for template context

#[derive(Debug, Clone, Serialize)]
pub struct SiteMeta {
    pub title: String,
    pub description: String,
    pub author: String,
    pub language: String,
    pub root: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LessonEntry {
    pub slug: String,
    pub title: String,
    pub date: Option<String>,
    pub path: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta() -> SiteMeta {
        SiteMeta {
            title: "Elixir Tutorials".to_string(),
            description: String::new(),
            author: String::new(),
            language: "en".to_string(),
            root: "/".to_string(),
        }
    }

    #[test]
    fn test_render_index() {
        let renderer = TemplateRenderer::new().unwrap();
        let lessons = vec![
            LessonEntry {
                slug: "basics".to_string(),
                title: "Basics".to_string(),
                date: Some("2024-02-01".to_string()),
                path: "/lessons/basics/".to_string(),
            },
            LessonEntry {
                slug: "intro".to_string(),
                title: "Intro".to_string(),
                date: Some("2024-01-01".to_string()),
                path: "/lessons/intro/".to_string(),
            },
        ];

        let mut context = Context::new();
        context.insert("site", &meta());
        context.insert("lessons", &lessons);

        let html = renderer.render("index.html", &context).unwrap();
        assert!(html.contains(r#"href="/lessons/basics/""#));
        assert!(html.contains(">Intro<"));
        // Listing order is preserved
        assert!(html.find("Basics").unwrap() < html.find("Intro").unwrap());
    }

    #[test]
    fn test_render_lesson() {
        let renderer = TemplateRenderer::new().unwrap();
        let mut context = Context::new();
        context.insert("site", &meta());
        context.insert("title", "Intro");
        context.insert("date", "2024-01-01");
        context.insert("content", "<h1>Hi</h1>");

        let html = renderer.render("lesson.html", &context).unwrap();
        assert!(html.contains("<h1>Hi</h1>"));
        assert!(html.contains("Intro"));
        assert!(html.contains("January 01, 2024"));
    }

    #[test]
    fn test_lesson_without_date() {
        let renderer = TemplateRenderer::new().unwrap();
        let mut context = Context::new();
        context.insert("site", &meta());
        context.insert("title", "Appendix");
        context.insert("date", &Option::<String>::None);
        context.insert("content", "<p>body</p>");

        let html = renderer.render("lesson.html", &context).unwrap();
        assert!(html.contains("<p>body</p>"));
    }

    #[test]
    fn test_nav_links_home() {
        let renderer = TemplateRenderer::new().unwrap();
        let mut context = Context::new();
        context.insert("site", &meta());
        context.insert("lessons", &Vec::<LessonEntry>::new());

        let html = renderer.render("index.html", &context).unwrap();
        assert!(html.contains(r#"<a class="brand" href="/">Home</a>"#));
    }

    #[test]
    fn test_date_format_filter_ll() {
        let value = tera::Value::String("2023-05-30".to_string());
        let mut args = HashMap::new();
        args.insert("format".to_string(), tera::Value::String("LL".to_string()));
        let out = date_format_filter(&value, &args).unwrap();
        assert_eq!(out, tera::Value::String("May 30, 2023".to_string()));
    }
}
