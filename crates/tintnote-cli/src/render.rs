//! Plain-text rendering of the list, detail and palette screens.

use std::fmt::Write as _;

use tintnote_core::{defaults, palette, Note, NoteList, PALETTE};

/// Width of one card column, in characters.
pub const CARD_WIDTH: usize = 36;

/// Spaces between the two grid columns.
const GUTTER: &str = "  ";

/// Cut `text` to `width` characters, marking the cut with an ellipsis.
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

/// `Blue` for palette values, the raw string otherwise.
fn color_label(color: &str) -> String {
    match palette::label_for(color) {
        Some(label) => label.to_string(),
        None if color.is_empty() => "none".to_string(),
        None => color.to_string(),
    }
}

/// Lines of one card: title, content preview, tags, color.
///
/// Every line is padded to `width` so cards line up in the grid.
pub fn card_lines(note: &Note, width: usize) -> Vec<String> {
    let inner = width.saturating_sub(4);
    let mut body = vec![truncate(&note.title, inner)];

    let preview: Vec<&str> = note
        .content
        .lines()
        .filter(|l| !l.trim().is_empty())
        .collect();
    for i in 0..defaults::CARD_PREVIEW_LINES {
        let line = match preview.get(i) {
            Some(l) if i + 1 == defaults::CARD_PREVIEW_LINES && preview.len() > i + 1 => {
                // more content follows; force the ellipsis
                let cut = truncate(l, inner.saturating_sub(1));
                if cut.ends_with('…') {
                    cut
                } else {
                    format!("{}…", cut)
                }
            }
            Some(l) => truncate(l, inner),
            None => String::new(),
        };
        body.push(line);
    }

    let tags = note
        .tags
        .iter()
        .map(|t| format!("#{}", t))
        .collect::<Vec<_>>()
        .join(" ");
    body.push(truncate(&tags, inner));
    body.push(truncate(&format!("[{}]", color_label(&note.color)), inner));

    let border = format!("+{}+", "-".repeat(width.saturating_sub(2)));
    let mut lines = Vec::with_capacity(body.len() + 2);
    lines.push(border.clone());
    for line in body {
        lines.push(format!("| {:<inner$} |", line, inner = inner));
    }
    lines.push(border);
    lines
}

/// Cards laid out two per row, in the given order.
pub fn grid(notes: &[&Note], width: usize) -> String {
    let mut out = String::new();
    for row in notes.chunks(defaults::GRID_COLUMNS) {
        let columns: Vec<Vec<String>> = row.iter().map(|n| card_lines(n, width)).collect();
        let height = columns.iter().map(Vec::len).max().unwrap_or(0);
        for i in 0..height {
            let line = columns
                .iter()
                .map(|c| c.get(i).map(String::as_str).unwrap_or(""))
                .collect::<Vec<_>>()
                .join(GUTTER);
            let _ = writeln!(out, "{}", line.trim_end());
        }
    }
    out
}

/// The whole list screen: header with count, filter summary, empty-result
/// line or grid.
pub fn list_screen(list: &NoteList) -> String {
    let visible = list.visible();
    let mut out = String::new();

    let _ = writeln!(out, "Notes ({})", visible.len());
    if !list.query().is_empty() {
        let _ = writeln!(out, "Search: {:?}", list.query());
    }
    if !list.selected_colors().is_empty() {
        let labels: Vec<String> = list.selected_colors().iter().map(color_label).collect();
        let _ = writeln!(out, "Colors: {}", labels.join(", "));
    }
    if let Some(err) = list.error() {
        let _ = writeln!(out, "Error: {}", err);
    }
    out.push('\n');

    if list.shows_empty_indicator() {
        let _ = writeln!(out, "{}", defaults::EMPTY_LIST_MESSAGE);
    } else {
        out.push_str(&grid(&visible, CARD_WIDTH));
    }
    out
}

/// Detail screen for one note.
pub fn detail_screen(note: &Note) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", note.title);
    let _ = writeln!(out, "{}", "=".repeat(note.title.chars().count().max(3)));
    if !note.content.is_empty() {
        let _ = writeln!(out, "{}", note.content);
    }
    if !note.tags.is_empty() {
        out.push('\n');
        let _ = writeln!(out, "Tags: {}", note.tags.join(", "));
    }
    out.push('\n');
    let _ = writeln!(
        out,
        "Color: {} ({})",
        color_label(&note.color),
        palette::swatch_hex(&note.color)
    );
    let _ = writeln!(
        out,
        "Updated: {}",
        note.updated_at.format("%Y-%m-%d %H:%M UTC")
    );
    let _ = writeln!(out, "ID: {}", note.id);
    out
}

/// Palette table for the `colors` command.
pub fn palette_table() -> String {
    let mut out = String::new();
    for color in PALETTE.iter() {
        let _ = writeln!(out, "{:<8} {}", color.label, color.value);
    }
    out
}
