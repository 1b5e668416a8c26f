use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "snippet-analyzer")]
#[clap(about = "AI-assisted code snippet analysis", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}
