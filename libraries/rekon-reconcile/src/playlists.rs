//! Playlist remapping after duplicates and missing tracks are removed

use crate::dedup::DuplicateMap;
use crate::report::PlaylistRemapStats;
use rekon_core::{PlaylistEntry, PlaylistNode, Playlists};
use std::collections::HashSet;

/// Point playlist entries at surviving tracks
///
/// Entries keyed by a duplicate loser are rewritten to the winner, unless the
/// playlist already references the winner. Entries whose track is not in
/// `surviving` are dropped. Playlists keyed by location are left alone.
pub fn remap_playlists(
    playlists: &mut Playlists,
    duplicates: &DuplicateMap,
    surviving: &HashSet<&str>,
) -> PlaylistRemapStats {
    let mut stats = PlaylistRemapStats::default();

    for node in playlists.playlists_mut() {
        if !node.keyed_by_track_id() {
            tracing::debug!(
                "Skipping playlist {:?}: not keyed by track id",
                node.name().unwrap_or_default()
            );
            continue;
        }

        stats.playlists += 1;
        remap_node(node, duplicates, surviving, &mut stats);
    }

    stats
}

fn remap_node(
    node: &mut PlaylistNode,
    duplicates: &DuplicateMap,
    surviving: &HashSet<&str>,
    stats: &mut PlaylistRemapStats,
) {
    // Keys referenced directly, so a remapped loser never doubles its winner
    let mut present: HashSet<String> = node
        .tracks()
        .filter(|track| !duplicates.contains_key(track.key.as_str()))
        .map(|track| track.key.clone())
        .collect();

    let before = node.entries.len();
    let mut remapped = 0;

    node.entries.retain_mut(|entry| {
        let PlaylistEntry::Track(track) = entry else {
            return true;
        };

        match duplicates.get(track.key.as_str()) {
            Some(winner) => {
                if !surviving.contains(winner.as_str()) || !present.insert(winner.to_string()) {
                    return false;
                }
                track.key = winner.to_string();
                remapped += 1;
                true
            }
            None => surviving.contains(track.key.as_str()),
        }
    });

    let dropped = before - node.entries.len();
    if remapped > 0 || dropped > 0 {
        tracing::debug!(
            "Playlist {:?}: {} entries remapped, {} dropped",
            node.name().unwrap_or_default(),
            remapped,
            dropped
        );
    }

    stats.remapped += remapped;
    stats.dropped += dropped;
    node.sync_counts();
}
