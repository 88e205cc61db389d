//! Command-line arguments.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "tintnote")]
#[command(author, version, about = "Color-tagged notes from the terminal")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Print JSON instead of rendered screens
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// List notes, optionally filtered by text and colors
    List {
        /// Case-insensitive text matched against title, content, tags and color
        #[arg(short, long, default_value = "")]
        query: String,

        /// Color chip to switch on, by label or value (repeatable)
        #[arg(short = 'c', long = "color")]
        colors: Vec<String>,
    },

    /// Show one note
    Show {
        /// Note id
        id: String,
    },

    /// Create a note
    New {
        /// Title (required, non-blank)
        #[arg(short, long)]
        title: String,

        /// Body text
        #[arg(long, default_value = "")]
        content: String,

        /// Comma-separated tags
        #[arg(long, default_value = "")]
        tags: String,

        /// Palette label or value
        #[arg(long)]
        color: Option<String>,
    },

    /// Print the color palette
    Colors,

    /// Interactive list: type commands on stdin, the list re-renders
    Browse,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_with_filters() {
        let cli = Cli::try_parse_from([
            "tintnote", "list", "-q", "trip", "-c", "red", "--color", "#4F86F7",
        ])
        .unwrap();
        assert!(!cli.json);
        assert_eq!(
            cli.command,
            Commands::List {
                query: "trip".to_string(),
                colors: vec!["red".to_string(), "#4F86F7".to_string()],
            }
        );
    }

    #[test]
    fn test_parse_list_defaults() {
        let cli = Cli::try_parse_from(["tintnote", "list"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::List {
                query: String::new(),
                colors: vec![],
            }
        );
    }

    #[test]
    fn test_parse_global_json_after_subcommand() {
        let cli = Cli::try_parse_from(["tintnote", "show", "abc", "--json"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.command, Commands::Show { id: "abc".to_string() });
    }

    #[test]
    fn test_parse_new() {
        let cli = Cli::try_parse_from([
            "tintnote", "new", "-t", "Groceries", "--content", "milk, eggs", "--tags",
            "home, today", "--color", "green",
        ])
        .unwrap();
        match cli.command {
            Commands::New {
                title,
                content,
                tags,
                color,
            } => {
                assert_eq!(title, "Groceries");
                assert_eq!(content, "milk, eggs");
                assert_eq!(tags, "home, today");
                assert_eq!(color.as_deref(), Some("green"));
            }
            other => panic!("Expected New, got {:?}", other),
        }
    }

    #[test]
    fn test_new_requires_title_flag() {
        assert!(Cli::try_parse_from(["tintnote", "new"]).is_err());
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["tintnote"]).is_err());
    }
}
