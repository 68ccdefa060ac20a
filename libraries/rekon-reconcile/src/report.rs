//! Summary of one reconciliation run

use crate::dedup::DuplicateMap;
use rekon_core::TrackId;
use serde::Serialize;

/// What a reconciliation run did to the collection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReconcileReport {
    /// Tracks in the collection before reconciliation
    pub total_tracks: usize,

    /// Tracks written back
    pub kept: usize,

    /// Tracks whose location changed when rewritten
    pub relocated: usize,

    /// Ids removed because no file on disk shares their Root Name
    pub missing_source: Vec<TrackId>,

    /// Every duplicate take removed, mapped to the take that replaced it
    pub duplicates: DuplicateMap,

    /// Playlist changes, when remapping was enabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playlists: Option<PlaylistRemapStats>,
}

/// Playlist changes made while remapping
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistRemapStats {
    /// Playlists visited
    pub playlists: usize,

    /// Entries pointed at a winning take instead of a removed duplicate
    pub remapped: usize,

    /// Entries removed: track gone, or winner already in the playlist
    pub dropped: usize,
}

impl ReconcileReport {
    pub fn new(total_tracks: usize) -> Self {
        Self {
            total_tracks,
            ..Self::default()
        }
    }

    /// Tracks removed for any reason
    pub fn removed(&self) -> usize {
        self.total_tracks - self.kept
    }

    /// Every removed id, duplicates first
    pub fn removed_ids(&self) -> impl Iterator<Item = &TrackId> {
        self.duplicates.keys().chain(self.missing_source.iter())
    }

    /// Get summary as human-readable text
    pub fn summary_text(&self) -> String {
        let mut parts = vec![format!("{} of {} tracks kept", self.kept, self.total_tracks)];

        if !self.duplicates.is_empty() {
            parts.push(format!("{} duplicates removed", self.duplicates.len()));
        }
        if !self.missing_source.is_empty() {
            parts.push(format!("{} missing from disk", self.missing_source.len()));
        }
        if self.relocated > 0 {
            parts.push(format!("{} relocated", self.relocated));
        }
        if let Some(stats) = self.playlists {
            parts.push(format!(
                "{} playlist entries remapped, {} dropped",
                stats.remapped, stats.dropped
            ));
        }

        parts.join(", ")
    }
}
