//! List site content

use anyhow::Result;

use crate::Site;

/// Print all lessons in listing order
pub fn run(site: &Site) -> Result<()> {
    let store = site.store();
    let summaries = store.sorted_summaries()?;

    println!("Lessons ({}):", summaries.len());
    for summary in summaries {
        let date = summary
            .date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "          ".to_string());
        println!("  {} - {} [{}]", date, summary.title, summary.slug);
    }

    Ok(())
}
