/// Rekon - reconcile a DJ library with the music on disk
use clap::Parser;
use rekon_cli::{Cli, RekonConfig, RunOptions};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing; stdout is reserved for the report
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "rekon=info,rekon_cli=info,rekon_scanner=info,rekon_reconcile=info,rekon_xml=info"
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = RekonConfig::load(cli.config.as_deref(), &cli.overrides())?;
    let options = RunOptions {
        dry_run: cli.dry_run,
    };

    let report = rekon_cli::run(&config, options).await?;
    tracing::info!("{}", report.summary_text());

    if cli.report {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}
