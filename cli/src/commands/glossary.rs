//! Glossary browsing command

use anyhow::{anyhow, Result};
use claimpulse_core::glossary::{self, Category};
use tracing::debug;

/// Browse the insurance glossary
pub async fn glossary_command(
    search: Option<String>,
    category: Option<String>,
    json: bool,
) -> Result<()> {
    debug!(?search, ?category, json, "browsing glossary");

    let category = match category {
        Some(raw) => Some(raw.parse::<Category>().map_err(|_| {
            anyhow!(
                "Unknown category '{}'. Known categories: {}",
                raw,
                Category::ALL
                    .iter()
                    .map(|c| c.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            )
        })?),
        None => None,
    };

    let query = search.unwrap_or_default();
    let terms = glossary::search(&query, category);

    if json {
        println!("{}", serde_json::to_string_pretty(&terms)?);
        return Ok(());
    }

    if terms.is_empty() {
        println!("No glossary terms matched.");
        return Ok(());
    }

    for term in &terms {
        println!("{} [{}]", term.term, term.category.display_name());
        println!("  {}", term.definition);
        println!("  Example: {}", term.example);
        if !term.related_terms.is_empty() {
            println!("  Related: {}", term.related_terms.join(", "));
        }
        println!();
    }
    println!("{} term(s)", terms.len());

    Ok(())
}
