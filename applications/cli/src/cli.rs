/// Command line arguments
use crate::config::ConfigOverrides;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "rekon", version)]
#[command(about = "Reconcile a Rekordbox XML library against the music files on disk", long_about = None)]
pub struct Cli {
    /// Library XML to read
    pub input: Option<PathBuf>,

    /// Where to write the reconciled library
    pub output: Option<PathBuf>,

    /// Directories to search for audio files, in order
    pub music_dirs: Vec<String>,

    /// JSON configuration file (input, output, musicDirs)
    #[arg(short, long, env = "REKON_CONFIG")]
    pub config: Option<PathBuf>,

    /// Compare ratings as numbers ("10" beats "9")
    #[arg(long)]
    pub numeric_ratings: bool,

    /// Point playlist entries at surviving tracks
    #[arg(long)]
    pub remap_playlists: bool,

    /// Reconcile and report without writing the output
    #[arg(long)]
    pub dry_run: bool,

    /// Print the reconciliation report as JSON on stdout
    #[arg(long)]
    pub report: bool,
}

impl Cli {
    /// Command line values that take precedence over file and environment
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            input: self.input.clone(),
            output: self.output.clone(),
            music_dirs: self.music_dirs.clone(),
            numeric_ratings: self.numeric_ratings,
            remap_playlists: self.remap_playlists,
        }
    }
}
