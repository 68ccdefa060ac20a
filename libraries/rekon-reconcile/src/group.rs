//! Grouping of collection tracks by Root Name

use rekon_core::{Result, Track};
use std::collections::HashMap;

/// Root Name of every track plus the tracks sharing each one
///
/// Groups hold indices into the track slice they were built from, in
/// collection order.
#[derive(Debug, Clone, Default)]
pub struct RootNameGroups {
    root_names: Vec<String>,
    groups: HashMap<String, Vec<usize>>,
}

impl RootNameGroups {
    /// Compute the Root Name of every track and group them
    ///
    /// Fails on the first track whose `Location` is not a usable URI.
    pub fn from_tracks(tracks: &[Track]) -> Result<Self> {
        let mut root_names = Vec::with_capacity(tracks.len());
        let mut groups: HashMap<String, Vec<usize>> = HashMap::new();

        for (position, track) in tracks.iter().enumerate() {
            let name = track.root_name()?;
            groups.entry(name.clone()).or_default().push(position);
            root_names.push(name);
        }

        Ok(Self { root_names, groups })
    }

    /// Root Name of the track at `position`
    pub fn root_name_of(&self, position: usize) -> Option<&str> {
        self.root_names.get(position).map(String::as_str)
    }

    /// Track positions sharing `root_name`, in collection order
    pub fn group(&self, root_name: &str) -> &[usize] {
        self.groups.get(root_name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Groups holding more than one track
    pub fn duplicate_groups(&self) -> impl Iterator<Item = (&str, &[usize])> {
        self.groups
            .iter()
            .filter(|(_, positions)| positions.len() > 1)
            .map(|(name, positions)| (name.as_str(), positions.as_slice()))
    }

    /// Number of distinct Root Names
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Per-track Root Names, consuming the grouping
    pub fn into_root_names(self) -> Vec<String> {
        self.root_names
    }
}
