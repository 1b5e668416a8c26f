use clap::Parser;
use snippet_analyzer::errors::ErrorHandler;
use snippet_analyzer::structs::cli::Cli;
use snippet_analyzer::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let result = match CommandRunner::from_environment().await {
        Ok(runner) => runner.run_command(cli.command).await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        ErrorHandler::handle_error(&e);
        std::process::exit(1);
    }

    Ok(())
}
