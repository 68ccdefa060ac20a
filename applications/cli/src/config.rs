/// Run configuration: JSON file, `REKON_*` environment, then command line
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use config::{Config, ConfigBuilder, Environment, File, FileFormat, Map, Source, Value};
use config::builder::DefaultState;
use rekon_core::RatingOrder;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "REKON";

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(String),

    #[error("No input library given (INPUT argument, \"input\" or REKON_INPUT)")]
    MissingInput,

    #[error("No output path given (OUTPUT argument, \"output\" or REKON_OUTPUT)")]
    MissingOutput,

    #[error("No music directories given (MUSIC_DIRS arguments, \"musicDirs\" or REKON_MUSIC_DIRS)")]
    NoMusicDirs,

    #[error("Music directory entries must not be empty")]
    EmptyMusicDir,
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        Self::Load(err.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RekonConfig {
    /// Library XML to read
    #[serde(default)]
    pub input: PathBuf,

    /// Where the reconciled library is written
    #[serde(default)]
    pub output: PathBuf,

    /// Directories searched recursively for audio files, in order
    #[serde(default, alias = "musicdirs")]
    pub music_dirs: Vec<String>,

    /// Compare ratings as numbers instead of strings
    #[serde(default, alias = "numericratings")]
    pub numeric_ratings: bool,

    /// Rewrite playlist entries after duplicates are removed
    #[serde(default, alias = "remapplaylists")]
    pub remap_playlists: bool,
}

/// Values given on the command line; unset values leave lower layers alone
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub music_dirs: Vec<String>,
    pub numeric_ratings: bool,
    pub remap_playlists: bool,
}

impl RekonConfig {
    /// Load configuration from file, environment and command line
    pub fn load(file: Option<&Path>, overrides: &ConfigOverrides) -> Result<Self> {
        Self::load_with_env(file, overrides, Environment::with_prefix(ENV_PREFIX))
    }

    /// Load configuration, reading variables from `environment`
    ///
    /// Later layers win: file, then environment, then command line.
    pub fn load_with_env(
        file: Option<&Path>,
        overrides: &ConfigOverrides,
        environment: Environment,
    ) -> Result<Self> {
        let mut layers = Vec::new();

        if let Some(path) = file {
            tracing::debug!("Reading configuration from {}", path.display());
            layers.push(
                Config::builder()
                    .add_source(File::from(path).format(FileFormat::Json))
                    .build()?,
            );
        }

        layers.push(
            Config::builder()
                .add_source(
                    environment
                        .try_parsing(true)
                        .list_separator(",")
                        .with_list_parse_key("music_dirs"),
                )
                .build()?,
        );

        // Each layer spells keys its own way; fold them before stacking
        let mut settings = Config::builder();
        for layer in layers {
            settings = apply(settings, canonical_keys(layer.collect()?))?;
        }
        settings = apply(settings, overrides.to_map())?;

        Ok(settings.build()?.try_deserialize()?)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.input.as_os_str().is_empty() {
            return Err(ConfigError::MissingInput);
        }

        if self.output.as_os_str().is_empty() {
            return Err(ConfigError::MissingOutput);
        }

        if self.music_dirs.is_empty() {
            return Err(ConfigError::NoMusicDirs);
        }

        if self.music_dirs.iter().any(|dir| dir.trim().is_empty()) {
            return Err(ConfigError::EmptyMusicDir);
        }

        Ok(())
    }

    pub fn rating_order(&self) -> RatingOrder {
        if self.numeric_ratings {
            RatingOrder::Numeric
        } else {
            RatingOrder::Lexicographic
        }
    }
}

impl ConfigOverrides {
    fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();

        if let Some(input) = &self.input {
            map.insert("input".to_string(), path_value(input));
        }
        if let Some(output) = &self.output {
            map.insert("output".to_string(), path_value(output));
        }
        if !self.music_dirs.is_empty() {
            map.insert("musicDirs".to_string(), Value::from(self.music_dirs.clone()));
        }
        if self.numeric_ratings {
            map.insert("numericRatings".to_string(), Value::from(true));
        }
        if self.remap_playlists {
            map.insert("remapPlaylists".to_string(), Value::from(true));
        }

        map
    }
}

/// Stack `values` on top of everything already in `settings`
fn apply(
    mut settings: ConfigBuilder<DefaultState>,
    values: impl IntoIterator<Item = (String, Value)>,
) -> Result<ConfigBuilder<DefaultState>> {
    for (key, value) in values {
        settings = settings.set_override(key, value)?;
    }
    Ok(settings)
}

fn path_value(path: &Path) -> Value {
    Value::from(path.to_string_lossy().into_owned())
}

/// Fold key spellings (`musicDirs`, `musicdirs`, `music_dirs`) onto field names
fn canonical_keys(table: Map<String, Value>) -> impl Iterator<Item = (String, Value)> {
    table.into_iter().map(|(key, value)| {
        let folded: String = key
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        let canonical = match folded.as_str() {
            "input" => "input",
            "output" => "output",
            "musicdirs" => "musicDirs",
            "numericratings" => "numericRatings",
            "remapplaylists" => "remapPlaylists",
            _ => return (key, value),
        };
        (canonical.to_string(), value)
    })
}
