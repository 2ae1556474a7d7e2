//! Terminal rendering of lists, details and summaries.

use crate::models::catalog::CatalogItem;
use crate::models::summary::SummaryState;
use colored::Colorize;

const TITLE_WIDTH: usize = 40;

/// Shorten a title to fit the table column.
pub fn truncate_title(title: &str) -> String {
    if title.chars().count() > TITLE_WIDTH - 2 {
        format!("{}...", title.chars().take(TITLE_WIDTH - 5).collect::<String>())
    } else {
        title.to_string()
    }
}

/// Five-star rendering of a score, e.g. `★★★★☆`.
pub fn star_bar(stars: f64) -> String {
    let full = stars.round().clamp(0.0, 5.0) as usize;
    format!("{}{}", "★".repeat(full), "☆".repeat(5 - full))
}

/// Print a list as a numbered table.
pub fn print_table(header: &str, items: &[CatalogItem]) {
    println!("{}", header.bold().cyan());

    if items.is_empty() {
        println!("{}", "No movies found. Try a different search query.".yellow());
        return;
    }

    println!(
        " {:>4} | {:>4} | {:<40} | {:>5} | {}",
        "#", "Year", "Title", "Score", "Category"
    );
    println!("{}", "-".repeat(80));

    for (i, item) in items.iter().enumerate() {
        println!(
            " {:>4} | {:>4} | {:<40} | {:>5} | {}",
            i + 1,
            item.release_year().map(|y| y.to_string()).unwrap_or_default(),
            truncate_title(&item.name),
            item.score_label(),
            item.genre_label()
        );
    }
}

/// Print a list one movie per line.
pub fn print_simple(items: &[CatalogItem]) {
    if items.is_empty() {
        println!("No movies found.");
        return;
    }

    for item in items {
        println!(
            "[{}] {} ({}) - {}",
            item.id,
            item.name,
            item.release_year().map(|y| y.to_string()).unwrap_or_default(),
            item.score_label()
        );
    }
}

/// Print a list as JSON.
pub fn print_json(items: &[CatalogItem]) -> crate::Result<()> {
    println!("{}", serde_json::to_string_pretty(items)?);
    Ok(())
}

/// Print the detail card of a movie.
pub fn print_detail(item: &CatalogItem) {
    println!("{}", item.name.bold());
    if let Some(ref tagline) = item.tagline {
        println!("{}", format!("\"{}\"", tagline).italic().dimmed());
    }
    println!();

    match item.stars() {
        Some(stars) => {
            let votes = item
                .votes
                .map(|v| format!(" ({} votes)", v))
                .unwrap_or_default();
            println!(
                "  {:<14} {} {}/10{}",
                "Rating:",
                star_bar(stars).yellow(),
                item.score_label(),
                votes
            );
        }
        None => println!("  {:<14} {}", "Rating:", "N/A".dimmed()),
    }

    if !item.genres.is_empty() {
        println!("  {:<14} {}", "Genres:", item.genre_label());
    }
    if let (Some(date), Some(year)) = (item.release_date_long(), item.release_year()) {
        println!("  {:<14} {} ({})", "Release Date:", date, year);
    }
    if let Some(runtime) = item.runtime {
        println!("  {:<14} {} minutes", "Runtime:", runtime);
    }
    if !item.languages.is_empty() {
        let names: Vec<_> = item.languages.iter().map(|l| l.name.as_str()).collect();
        println!("  {:<14} {}", "Languages:", names.join(", "));
    }
    if !item.countries.is_empty() {
        let names: Vec<_> = item.countries.iter().map(|c| c.name.as_str()).collect();
        println!("  {:<14} {}", "Countries:", names.join(", "));
    }
    if let Some(status) = item.status {
        println!("  {:<14} {}", "Status:", status);
    }
    if item.adult == Some(true) {
        println!("  {:<14} {}", "Adult:", "yes".red());
    }
    if let Some(poster) = item.poster.as_ref().and_then(|p| p.best()) {
        println!("  {:<14} {}", "Poster:", poster.dimmed());
    }

    if let Some(ref overview) = item.overview {
        if !overview.trim().is_empty() {
            println!();
            println!("{}", "Overview".bold());
            println!("{}", overview);
        }
    }
}

/// Print the Wikipedia part of the detail view.
pub fn print_summary(state: &SummaryState) {
    println!();
    println!("{}", "Wikipedia".bold());
    match state {
        SummaryState::Idle => {}
        SummaryState::Loading => println!("{}", "Searching Wikipedia...".dimmed()),
        SummaryState::Found(summary) => {
            println!("{}", summary.extract);
            println!("{} {}", "Open on Wikipedia:".dimmed(), summary.url.underline());
        }
        SummaryState::NotFound => println!("{}", "No Wikipedia summary found.".dimmed()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_title() {
        assert_eq!(truncate_title("Heat"), "Heat");
        let long = "The Assassination of Jesse James by the Coward Robert Ford";
        let short = truncate_title(long);
        assert!(short.ends_with("..."));
        assert_eq!(short.chars().count(), TITLE_WIDTH - 2);
    }

    #[test]
    fn test_star_bar() {
        assert_eq!(star_bar(4.2), "★★★★☆");
        assert_eq!(star_bar(0.0), "☆☆☆☆☆");
        assert_eq!(star_bar(9.0), "★★★★★");
    }
}
