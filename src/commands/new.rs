//! Create a new lesson

use std::fs;

use anyhow::Result;

use crate::Site;

/// Create a lesson document with front-matter scaffold
pub fn create_lesson(site: &Site, title: &str) -> Result<()> {
    fs::create_dir_all(&site.lessons_dir)?;

    let slug = slug::slugify(title);
    let file_path = site.lessons_dir.join(format!("{}.md", slug));

    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let now = chrono::Local::now();
    let content = format!(
        "---\ntitle: {}\ndate: {}\n---\n",
        title,
        now.format("%Y-%m-%d %H:%M:%S")
    );

    fs::write(&file_path, content)?;

    println!("Created: {:?}", file_path);

    Ok(())
}
