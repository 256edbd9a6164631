mod cli;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    // Pick up provider API keys from a local .env, if present
    let _ = dotenvy::dotenv();

    // Initialize logging
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    if cli.log_json {
        builder.json().init();
    } else {
        builder.with_ansi(!cli.no_color).init();
    }

    let result = match cli.command {
        cli::Commands::Generate(args) => cli::generate::handle_generate(args).await,
        cli::Commands::Evaluate(args) => cli::generate::handle_evaluate(args).await,
        cli::Commands::Resolve(args) => cli::directory::handle_resolve(args).await,
        cli::Commands::Models(args) => cli::directory::handle_models(args).await,
        cli::Commands::Validate(args) => cli::directory::handle_validate(args).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}
