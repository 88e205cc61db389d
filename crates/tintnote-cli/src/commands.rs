//! One function per subcommand. Each returns the text to print.

use serde_json::json;
use tracing::debug;

use tintnote_core::{palette, Error, NoteForm, NoteId, NoteList, NoteStore, RefreshOutcome};

use crate::render;

/// Map a filter chip argument to the stored value it stands for.
///
/// Labels and palette values resolve; anything else is used verbatim and
/// will simply match no note unless some note carries that exact string.
pub fn chip_value(input: &str) -> String {
    palette::resolve(input)
        .map(str::to_string)
        .unwrap_or_else(|| input.to_string())
}

pub async fn list(
    store: &dyn NoteStore,
    query: &str,
    colors: &[String],
    as_json: bool,
) -> anyhow::Result<String> {
    let mut list = NoteList::new();
    list.set_query(query);
    // Chips given on the command line only switch on; repeats are no-ops.
    for color in colors {
        let value = chip_value(color);
        if !list.selected_colors().contains(&value) {
            list.toggle_color(value);
        }
    }

    if let RefreshOutcome::Failed(msg) = list.refresh(store).await {
        return Err(Error::Remote(msg).into());
    }
    debug!(
        result_count = list.count(),
        total = list.notes().len(),
        "List rendered"
    );

    if as_json {
        let visible = list.visible();
        let body = json!({ "count": visible.len(), "notes": visible });
        return Ok(format!("{}\n", serde_json::to_string_pretty(&body)?));
    }
    Ok(render::list_screen(&list))
}

pub async fn show(store: &dyn NoteStore, id: &str, as_json: bool) -> anyhow::Result<String> {
    let note = store.get_note(&NoteId::from(id)).await?;
    if as_json {
        return Ok(format!("{}\n", serde_json::to_string_pretty(&note)?));
    }
    Ok(render::detail_screen(&note))
}

pub async fn create(
    store: &dyn NoteStore,
    mut form: NoteForm,
    color: Option<&str>,
    as_json: bool,
) -> anyhow::Result<String> {
    if let Some(input) = color {
        form.color = palette::resolve(input)
            .ok_or_else(|| {
                Error::Validation(format!(
                    "Unknown color {:?}; run `tintnote colors` for the palette",
                    input
                ))
            })?
            .to_string();
    }

    let note = form.submit(store).await?;
    if as_json {
        return Ok(format!("{}\n", serde_json::to_string_pretty(&note)?));
    }
    Ok(render::detail_screen(&note))
}

pub fn colors(as_json: bool) -> anyhow::Result<String> {
    if as_json {
        let entries: Vec<_> = palette::PALETTE
            .iter()
            .map(|c| json!({ "label": c.label, "value": c.value }))
            .collect();
        return Ok(format!("{}\n", serde_json::to_string_pretty(&entries)?));
    }
    Ok(render::palette_table())
}

/// The line printed after `Error: ` when a command fails.
pub fn error_line(err: &anyhow::Error) -> String {
    match err.downcast_ref::<Error>() {
        Some(Error::NotFound(_)) => "Note not found".to_string(),
        Some(e) => e.user_message(),
        None => err.to_string(),
    }
}
