//! Line-driven interactive list.
//!
//! Reads one command per line and re-renders the list screen after every
//! change to the query, the color chips or the collection. Commands:
//!
//! ```text
//! search <text>   set the search query (`search` alone clears it)
//! /<text>         same as search
//! color <c>       switch a color chip on or off, by label or value
//! refresh, r      fetch the collection again
//! show <id>       print one note
//! add <title>     create a note with just a title, then refresh
//! help, ?         list commands
//! quit, q         leave
//! ```

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info};

use tintnote_core::{NoteForm, NoteId, NoteList, NoteStore};

use crate::commands::chip_value;
use crate::render;

const PROMPT: &str = "> ";

const HELP: &str = "\
search <text>   set the search query (`search` alone clears it)
/<text>         same as search
color <c>       switch a color chip on or off
refresh, r      fetch notes again
show <id>       print one note
add <title>     create a note
quit, q         leave
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    Search(String),
    ToggleColor(String),
    Refresh,
    Show(String),
    Add(String),
    Help,
    Quit,
    Blank,
    Unknown(String),
}

/// Parse one input line.
///
/// Search text is taken verbatim after the command word, so leading and
/// trailing spaces reach the filter untouched.
pub fn parse_command(line: &str) -> BrowseCommand {
    let line = line.trim_end_matches(['\r', '\n']);

    if let Some(text) = line.strip_prefix("search ") {
        return BrowseCommand::Search(text.to_string());
    }
    if let Some(text) = line.strip_prefix('/') {
        return BrowseCommand::Search(text.to_string());
    }

    let trimmed = line.trim();
    let (word, arg) = match trimmed.split_once(char::is_whitespace) {
        Some((w, a)) => (w, a.trim()),
        None => (trimmed, ""),
    };

    match (word, arg) {
        ("", _) => BrowseCommand::Blank,
        ("search", "") => BrowseCommand::Search(String::new()),
        ("color", c) if !c.is_empty() => BrowseCommand::ToggleColor(c.to_string()),
        ("refresh" | "r", "") => BrowseCommand::Refresh,
        ("show", id) if !id.is_empty() => BrowseCommand::Show(id.to_string()),
        ("add", title) if !title.is_empty() => BrowseCommand::Add(title.to_string()),
        ("help" | "?", "") => BrowseCommand::Help,
        ("quit" | "q" | "exit", "") => BrowseCommand::Quit,
        _ => BrowseCommand::Unknown(trimmed.to_string()),
    }
}

/// Run the loop until `quit` or end of input.
pub async fn run<R, W>(store: &dyn NoteStore, input: R, out: &mut W) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut list = NoteList::new();
    list.refresh(store).await;
    write!(out, "{}", render::list_screen(&list))?;

    let mut lines = input.lines();
    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let command = parse_command(&line);
        debug!(command = ?command, "Browse command");

        match command {
            BrowseCommand::Blank => continue,
            BrowseCommand::Quit => break,
            BrowseCommand::Help => write!(out, "{}", HELP)?,
            BrowseCommand::Unknown(text) => {
                writeln!(out, "Unknown command: {} (try `help`)", text)?;
            }
            BrowseCommand::Search(text) => {
                list.set_query(text);
                write!(out, "{}", render::list_screen(&list))?;
            }
            BrowseCommand::ToggleColor(color) => {
                list.toggle_color(chip_value(&color));
                write!(out, "{}", render::list_screen(&list))?;
            }
            BrowseCommand::Refresh => {
                list.refresh(store).await;
                write!(out, "{}", render::list_screen(&list))?;
            }
            BrowseCommand::Show(id) => match store.get_note(&NoteId::from(id)).await {
                Ok(note) => write!(out, "{}", render::detail_screen(&note))?,
                Err(e) => {
                    let err = anyhow::Error::from(e);
                    writeln!(out, "Error: {}", crate::commands::error_line(&err))?;
                }
            },
            BrowseCommand::Add(title) => match NoteForm::new(title).submit(store).await {
                Ok(note) => {
                    info!(note_id = %note.id, "Note added from browse");
                    list.refresh(store).await;
                    write!(out, "{}", render::list_screen(&list))?;
                }
                Err(e) => writeln!(out, "Error: {}", e.user_message())?,
            },
        }
    }
    Ok(())
}
