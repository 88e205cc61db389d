//! tintnote: browse, search and create color-tagged notes stored in a
//! PostgREST backend.
//!
//! Connection settings come from the environment (a `.env` file is read if
//! present): `TINTNOTE_URL`, `TINTNOTE_ANON_KEY`, and optionally
//! `TINTNOTE_ACCESS_TOKEN`, `TINTNOTE_TABLE`, `TINTNOTE_TIMEOUT_SECS`.

mod browse;
mod cli;
mod commands;
mod logging;
mod render;

use std::io::Write;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tokio::io::BufReader;

use tintnote_core::{NoteForm, NoteStore};
use tintnote_remote::RemoteNoteStore;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env is fine.
    let _ = dotenvy::dotenv();
    let _guard = logging::init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = %e, "Command failed");
            eprintln!("Error: {}", commands::error_line(&e));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    if cli.command == Commands::Colors {
        return print(&commands::colors(cli.json)?);
    }

    let store: Arc<dyn NoteStore> = Arc::new(RemoteNoteStore::from_env()?);

    match cli.command {
        Commands::List { query, colors } => {
            print(&commands::list(store.as_ref(), &query, &colors, cli.json).await?)
        }
        Commands::Show { id } => print(&commands::show(store.as_ref(), &id, cli.json).await?),
        Commands::New {
            title,
            content,
            tags,
            color,
        } => {
            let form = NoteForm {
                title,
                content,
                tags,
                ..NoteForm::default()
            };
            let out = commands::create(store.as_ref(), form, color.as_deref(), cli.json).await?;
            print(&out)
        }
        Commands::Browse => {
            let stdin = BufReader::new(tokio::io::stdin());
            let mut stdout = std::io::stdout();
            browse::run(store.as_ref(), stdin, &mut stdout).await
        }
        Commands::Colors => Ok(()),
    }
}

fn print(text: &str) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
