use clap::{Parser, Subcommand};
use notesync::config::Backend;
use std::path::PathBuf;

/// Returns the version string, with the git hash appended for dev builds.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "notesync", version = get_version())]
#[command(about = "Notes client with optimistic sync against a GraphQL note service", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (defaults to config.json in the user config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Note service to use: memory or graphql
    #[arg(long, global = true)]
    pub backend: Option<Backend>,

    /// GraphQL endpoint URL
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// API key sent with every request
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Undo optimistic changes whose remote call failed
    #[arg(long, global = true)]
    pub rollback: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive session (default)
    Shell,

    /// Fetch and list all notes
    #[command(alias = "ls")]
    List,

    /// Create a note
    #[command(alias = "n")]
    Add { name: String, description: String },

    /// Replace a note's name and description
    #[command(alias = "e")]
    Edit {
        /// Position in the list or note id
        note: String,
        name: String,
        description: String,
    },

    /// Delete a note
    #[command(alias = "rm")]
    Delete {
        /// Position in the list or note id
        note: String,
    },
}
