use clap::{Parser, Subcommand};
use memopad::model::MemoId;

#[derive(Parser, Debug)]
#[command(name = "memopad", bin_name = "memopad", version)]
#[command(about = "A small local memo store", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new memo
    #[command(alias = "n")]
    Create {
        /// Title of the memo
        title: String,

        /// Content of the memo
        #[arg(default_value = "")]
        content: String,
    },

    /// List memos (most recently updated first by default)
    #[command(alias = "ls")]
    List {
        /// Show memos in the order they were added
        #[arg(long)]
        stored: bool,
    },

    /// View one or more memos in full
    #[command(alias = "v")]
    View {
        /// Ids of the memos
        #[arg(required = true, num_args = 1..)]
        ids: Vec<MemoId>,
    },

    /// Change the title and/or content of a memo
    #[command(alias = "e")]
    Edit {
        /// Id of the memo
        id: MemoId,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New content
        #[arg(short, long)]
        content: Option<String>,
    },

    /// Delete one or more memos
    #[command(alias = "rm")]
    Delete {
        /// Ids of the memos
        #[arg(required = true, num_args = 1..)]
        ids: Vec<MemoId>,
    },

    /// Search titles and content (case-insensitive)
    Search {
        /// Keyword; empty lists everything
        #[arg(default_value = "")]
        keyword: String,
    },

    /// Print the number of memos
    Count,

    /// Delete every memo and start ids over from 1
    Clear {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },

    /// Add sample memos to an empty store
    Seed,

    /// Get or set configuration
    Config {
        /// Configuration key (namespace, list-order)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_create_with_optional_content() {
        let cli = Cli::try_parse_from(["memopad", "create", "Groceries"]).unwrap();
        match cli.command {
            Some(Commands::Create { title, content }) => {
                assert_eq!(title, "Groceries");
                assert_eq!(content, "");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn parses_aliases_and_ids() {
        let cli = Cli::try_parse_from(["memopad", "rm", "1", "3"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Delete { ids }) if ids == vec![1, 3]));

        let cli = Cli::try_parse_from(["memopad", "e", "2", "--title", "New"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Edit { id: 2, title: Some(_), content: None })
        ));
    }

    #[test]
    fn rejects_non_numeric_ids() {
        assert!(Cli::try_parse_from(["memopad", "view", "abc"]).is_err());
    }

    #[test]
    fn no_command_is_allowed() {
        let cli = Cli::try_parse_from(["memopad", "-v"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.verbose);
    }
}
