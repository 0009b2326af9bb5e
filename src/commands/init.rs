//! Initialize a new lesson site

use std::fs;
use std::path::Path;

use anyhow::Result;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    fs::create_dir_all(target_dir)?;
    fs::create_dir_all(target_dir.join("lessons"))?;
    fs::create_dir_all(target_dir.join("static"))?;

    let config_content = r#"# Site
title: Lessons
description: ''
author: ''
language: en

# URL
url: http://example.com
root: /

# Directory
source_dir: lessons
public_dir: public
static_dir: static

# Rendering
highlight:
  theme: base16-ocean.dark
"#;

    fs::write(target_dir.join("_config.yml"), config_content)?;

    // Create a sample lesson
    let now = chrono::Local::now();
    let sample_lesson = format!(
        r#"---
title: Hello World
date: {}
---

Welcome to your new lesson site. This page was created by `lessons-rs init`.

## Quick Start

### Create a new lesson

```bash
$ lessons-rs new "My New Lesson"
```

### Run the development server

```bash
$ lessons-rs server
```

### Generate static files

```bash
$ lessons-rs generate
```

The generated site lands in `public/`, with this lesson at
`/lessons/hello-world/`.
"#,
        now.format("%Y-%m-%d %H:%M:%S")
    );

    fs::write(target_dir.join("lessons/hello-world.md"), sample_lesson)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Site;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_site_layout() {
        let dir = TempDir::new().unwrap();
        init_site(dir.path()).unwrap();

        assert!(dir.path().join("_config.yml").exists());
        assert!(dir.path().join("lessons/hello-world.md").exists());
        assert!(dir.path().join("static").is_dir());
    }

    #[test]
    fn test_initialized_site_generates() {
        let dir = TempDir::new().unwrap();
        init_site(dir.path()).unwrap();

        let site = Site::new(dir.path()).unwrap();
        site.generate().unwrap();

        let page =
            fs::read_to_string(site.public_dir.join("lessons/hello-world/index.html")).unwrap();
        assert!(page.contains("Hello World"));
    }
}
