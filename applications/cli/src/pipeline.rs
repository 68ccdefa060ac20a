/// The reconciliation run: scan, parse, reconcile, write
use crate::config::RekonConfig;
use crate::output::write_atomic;
use anyhow::{Context, Result};
use rekon_reconcile::{ReconcileReport, Reconciler};
use rekon_scanner::{build_source_index, SourceIndex};
use std::path::Path;

/// Options that change what a run does, not what it reconciles
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Reconcile and report without writing the output file
    pub dry_run: bool,
}

/// Reconcile the configured library and write the result
///
/// Nothing is written unless every step succeeds.
pub async fn run(config: &RekonConfig, options: RunOptions) -> Result<ReconcileReport> {
    config.validate()?;

    tracing::info!(
        "Reconciling {} against {} music directories",
        config.input.display(),
        config.music_dirs.len()
    );

    // Index first, then the document; the two never overlap
    let index = scan_music_dirs(config.music_dirs.clone()).await?;
    let xml = read_library(&config.input).await?;

    let mut library = rekon_xml::parse_library(&xml)
        .with_context(|| format!("Failed to parse library {}", config.input.display()))?;

    let report = Reconciler::new()
        .rating_order(config.rating_order())
        .remap_playlists(config.remap_playlists)
        .reconcile(&mut library, &index)
        .with_context(|| format!("Failed to reconcile {}", config.input.display()))?;

    let output = rekon_xml::write_library(&library).context("Failed to serialize library")?;

    if options.dry_run {
        tracing::info!("Dry run, not writing {}", config.output.display());
    } else {
        write_atomic(&config.output, output.as_bytes())
            .await
            .with_context(|| format!("Failed to write {}", config.output.display()))?;
        tracing::info!("Wrote {}", config.output.display());
    }

    Ok(report)
}

/// Build the Source Index off the async runtime
async fn scan_music_dirs(roots: Vec<String>) -> Result<SourceIndex> {
    tokio::task::spawn_blocking(move || build_source_index(&roots))
        .await
        .context("Music directory scan did not complete")?
        .context("Failed to scan music directories")
}

async fn read_library(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read library {}", path.display()))
}
