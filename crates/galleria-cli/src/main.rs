//! CLI entry point - the composition root.
//!
//! Command dispatch routes to handlers, which delegate domain work to
//! the core services over the collection port.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use galleria_cli::{Cli, CliConfig, Commands, bootstrap, handlers};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging; --verbose raises the default filter to debug
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    // Compose the context (composition root)
    let ctx = bootstrap(&CliConfig {
        base_url: cli.base_url.clone(),
    });

    // Dispatch to appropriate handler
    let Some(command) = cli.command else {
        // No command provided - show help
        use clap::CommandFactory;
        galleria_cli::Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Search {
            query,
            max,
            department,
            any_image,
            columns,
        } => {
            let args = handlers::search::SearchArgs {
                query,
                max,
                department,
                any_image,
                columns,
            };
            handlers::search::execute(&ctx, args).await?;
        }
        Commands::Departments => {
            handlers::departments::execute(&ctx).await?;
        }
        Commands::Object { object_id } => {
            handlers::object::execute(&ctx, object_id).await?;
        }
    }

    Ok(())
}
