use serde::Serialize;

use crate::error::Result;
use crate::models::constants::{CALORIE_GOAL, PROGRESS_BAR_WIDTH};
use crate::models::{Control, TileView};

/// Machine-readable form of a refreshed tile.
#[derive(Debug, Serialize)]
struct TileSummary {
    #[serde(flatten)]
    view: TileView,
    goal: f64,
    arc_degrees: f64,
    over_goal: bool,
}

/// Render the tile as text: reset control, count, goal, progress, step controls.
pub fn render_tile(view: &TileView) -> String {
    let reset = format!("[{}]", Control::Reset.label());
    let count = view.count.to_string();
    let goal = format!("/ {:.0}", CALORIE_GOAL);
    let controls = format!(
        "[{}]  [{}]",
        Control::Subtract.label(),
        Control::Add.label()
    );
    let progress = format!(
        "{} {:>5.1}% ({:.0}°)",
        progress_bar(view.percentage),
        view.percentage * 100.0,
        view.arc_degrees()
    );

    let lines = [reset, count, goal, progress, controls];
    let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);

    lines
        .iter()
        .map(|l| center(l, width))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Print the rendered tile.
pub fn display_tile(view: &TileView) {
    println!();
    println!("{}", render_tile(view));
    if view.over_goal() {
        println!();
        println!("Goal exceeded by {:.0} cal.", view.count as f64 - CALORIE_GOAL);
    }
    println!();
}

/// Render the tile as a single JSON object.
pub fn render_json(view: &TileView) -> Result<String> {
    let summary = TileSummary {
        view: *view,
        goal: CALORIE_GOAL,
        arc_degrees: view.arc_degrees(),
        over_goal: view.over_goal(),
    };
    Ok(serde_json::to_string(&summary)?)
}

/// Fixed-width bar; past the goal the whole bar fills and overflow shows as `!`.
fn progress_bar(percentage: f64) -> String {
    let filled = ((percentage.clamp(0.0, 1.0) * PROGRESS_BAR_WIDTH as f64).round()) as usize;
    let fill = if percentage > 1.0 { '!' } else { '#' };
    format!(
        "[{}{}]",
        fill.to_string().repeat(filled),
        "-".repeat(PROGRESS_BAR_WIDTH - filled)
    )
}

fn center(line: &str, width: usize) -> String {
    let pad = width.saturating_sub(line.chars().count()) / 2;
    format!("{}{}", " ".repeat(pad), line)
}
