use std::io::IsTerminal;
use owo_colors::OwoColorize;
use terminal_size::{Width, terminal_size};

use crate::catalog::Catalog;
use crate::scoring::{category_max, CategoryBreakdown, Rating};
use crate::submission::ScoredSubmission;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a percentage with no decimals ("83%")
pub fn format_percent(percent: f64) -> String {
    format!("{:.0}%", percent)
}

/// Format "score/max", e.g. "15/18"
pub fn format_points(score: i64, max: i64) -> String {
    format!("{}/{}", score, max)
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate a category name to fit available width, accounting for Unicode
fn truncate_name(name: &str, max_width: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= max_width {
        name.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

fn colorize_rating(text: &str, rating: Rating) -> String {
    match rating {
        Rating::Excellent => text.green().to_string(),
        Rating::Good => text.yellow().to_string(),
        Rating::NeedsWork => text.red().to_string(),
    }
}

/// Format a category breakdown as an aligned table: Category, Points, Percent, Rating
/// Points column is right-aligned, 9 chars wide (fits "-999/9999")
pub fn format_breakdown_table(rows: &[CategoryBreakdown], use_colors: bool) -> String {
    if rows.is_empty() {
        return "No categories in catalog.".to_string();
    }

    let points_width = 9;
    let percent_width = 5;
    let separator = "  ";

    let longest = rows
        .iter()
        .map(|r| r.category.chars().count())
        .max()
        .unwrap_or(0);
    let rating_width = Rating::NeedsWork.label().len();
    let fixed_width = points_width + percent_width + rating_width + separator.len() * 3;
    let name_width = match get_terminal_width() {
        Some(width) if width > fixed_width + 10 => longest.min(width - fixed_width),
        Some(_) => longest.min(20),
        None => longest,
    };

    rows.iter()
        .map(|row| {
            let name = truncate_name(&row.category, name_width);
            let name_padded = format!("{:<width$}", name, width = name_width);
            let points = format!(
                "{:>width$}",
                format_points(row.score, row.max),
                width = points_width
            );
            let percent = format!(
                "{:>width$}",
                format_percent(row.percent),
                width = percent_width
            );
            let rating = row.rating();

            if use_colors {
                format!(
                    "{}{}{}{}{}{}{}",
                    name_padded.bold(),
                    separator,
                    points,
                    separator,
                    colorize_rating(&percent, rating),
                    separator,
                    colorize_rating(rating.label(), rating)
                )
            } else {
                format!(
                    "{}{}{}{}{}{}{}",
                    name_padded, separator, points, separator, percent, separator, rating
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a scored submission: header line, breakdown table, total line
pub fn format_submission(submission: &ScoredSubmission, use_colors: bool) -> String {
    let header = format!(
        "{} ({} answered)",
        submission.label,
        submission.answered()
    );
    let total = format!(
        "Total: {}",
        format_points(submission.total, submission.max())
    );

    if use_colors {
        format!(
            "{}\n{}\n{}",
            header.underline(),
            format_breakdown_table(&submission.breakdown, true),
            total.bold()
        )
    } else {
        format!(
            "{}\n{}\n{}",
            header,
            format_breakdown_table(&submission.breakdown, false),
            total
        )
    }
}

/// Format the maximum attainable points per category, plus the overall maximum
pub fn format_max_table(catalog: &Catalog) -> String {
    if catalog.categories.is_empty() {
        return "No categories in catalog.".to_string();
    }

    let name_width = catalog
        .categories
        .iter()
        .map(|c| c.category.chars().count())
        .max()
        .unwrap_or(0)
        .max("Total".len());

    let mut lines: Vec<String> = catalog
        .categories
        .iter()
        .map(|c| {
            format!(
                "{:<width$}  {:>5}",
                c.category,
                category_max(&c.questions),
                width = name_width
            )
        })
        .collect();

    let overall = category_max(catalog.questions());
    lines.push(format!("{:<width$}  {:>5}", "Total", overall, width = name_width));
    lines.join("\n")
}

/// Format a breakdown as tab-separated values for scripting
/// Columns: label, category, score, max (no headers, no colors)
pub fn format_tsv(submission: &ScoredSubmission) -> String {
    submission
        .breakdown
        .iter()
        .map(|row| {
            format!(
                "{}\t{}\t{}\t{}",
                submission.label, row.category, row.score, row.max
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
