//! Terminal rendering for the slip and submission results.

use std::fmt::Display;

use owo_colors::OwoColorize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::domain::{format_money, Selection, Slip, SubmissionResult};

/// Braille spinner animation frames.
const BRAILLE_SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

#[derive(Tabled)]
struct SelectionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Event")]
    event: String,
    #[tabled(rename = "Market")]
    market: String,
    #[tabled(rename = "Selection")]
    selection: String,
    #[tabled(rename = "Odds")]
    odds: String,
    #[tabled(rename = "Bookmaker")]
    bookmaker: String,
}

impl From<&Selection> for SelectionRow {
    fn from(selection: &Selection) -> Self {
        let outcome = selection.outcome();
        let name = match outcome.point {
            Some(point) => format!("{} {}", outcome.name, point),
            None => outcome.name.clone(),
        };
        Self {
            id: selection.id().to_string(),
            event: selection.event().display_name(),
            market: selection.market().to_string(),
            selection: name,
            odds: format_money(outcome.price),
            bookmaker: selection.bookmaker().to_string(),
        }
    }
}

/// Render the selections table and totals.
#[must_use]
pub fn render_slip(slip: &Slip) -> String {
    if slip.is_empty() {
        return format!(
            "  Your bet slip is empty\n  Stake             {}\n",
            format_money(slip.stake())
        );
    }

    let rows: Vec<SelectionRow> = slip.selections().iter().map(SelectionRow::from).collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());

    let mut out = format!("  Bet slip ({} selections)\n", slip.len());
    for line in table.to_string().lines() {
        out.push_str("  ");
        out.push_str(line);
        out.push('\n');
    }
    out.push_str(&format!(
        "  Total odds        {}\n",
        format_money(slip.total_odds())
    ));
    out.push_str(&format!("  Stake             {}\n", format_money(slip.stake())));
    out.push_str(&format!(
        "  Potential payout  {}\n",
        format_money(slip.potential_payout())
    ));
    out
}

/// One-line summary for a finished submission.
#[must_use]
pub fn render_result(result: &SubmissionResult) -> String {
    if result.success {
        format!("{} {}", "✓".green(), result.message)
    } else {
        format!("{} {}", "×".red(), result.message)
    }
}

/// Highlight a value for emphasis.
pub fn highlight(value: impl Display) -> String {
    format!("{}", value.to_string().cyan())
}

/// Create and start a progress spinner.
pub fn spinner(message: &str) -> indicatif::ProgressBar {
    let pb = indicatif::ProgressBar::new_spinner();
    let style = indicatif::ProgressStyle::default_spinner()
        .tick_strings(BRAILLE_SPINNER)
        .template("  {spinner:.cyan} {msg}")
        .unwrap_or_else(|_| indicatif::ProgressStyle::default_spinner());
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}
