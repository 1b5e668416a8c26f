use std::path::PathBuf;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Write a sample configuration file
    Init,
    /// Start a local session
    Login {
        #[clap(short, long)]
        email: String,
        #[clap(short, long)]
        name: Option<String>,
        #[clap(long)]
        photo: Option<String>,
    },
    /// End the local session
    Logout,
    /// Show the signed-in profile
    Whoami,
    /// List supported languages
    Languages,
    /// Print the starter template for a language
    Template {
        language: String,
    },
    /// Analyze a code snippet
    Analyze {
        #[clap(short, long, conflicts_with = "code")]
        file: Option<PathBuf>,
        #[clap(short, long)]
        code: Option<String>,
        #[clap(short, long)]
        language: Option<String>,
    },
    /// Write or read the test document for the signed-in user
    TestData {
        #[clap(subcommand)]
        action: TestDataAction,
    },
    /// Validate the configuration file
    Validate,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestDataAction {
    Add,
    Get,
}
