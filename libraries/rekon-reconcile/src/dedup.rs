//! Duplicate take resolution
//!
//! Tracks sharing a Root Name are takes of the same recording. The highest
//! rated take survives; the rest map to it.

use crate::group::RootNameGroups;
use rekon_core::{RatingOrder, Track, TrackId};
use std::collections::BTreeMap;

/// Loser track id → winner track id
pub type DuplicateMap = BTreeMap<TrackId, TrackId>;

/// Pick a winner for every group with more than one track
///
/// Within a group tracks are ordered by rating, highest first, with a stable
/// sort so that equal ratings keep collection order.
pub fn resolve_duplicates(
    tracks: &[Track],
    groups: &RootNameGroups,
    order: RatingOrder,
) -> DuplicateMap {
    let mut duplicates = DuplicateMap::new();

    for (root_name, positions) in groups.duplicate_groups() {
        let mut ranked: Vec<&Track> = positions.iter().map(|&i| &tracks[i]).collect();
        ranked.sort_by(|a, b| b.rating.compare(&a.rating, order));

        let (winner, losers) = match ranked.split_first() {
            Some(split) => split,
            None => continue,
        };

        for loser in losers {
            tracing::debug!(
                "Duplicate take of {}: track {} (rating {:?}) loses to {} (rating {:?})",
                root_name,
                loser.id,
                loser.rating.as_str(),
                winner.id,
                winner.rating.as_str()
            );
            duplicates.insert(loser.id.clone(), winner.id.clone());
        }
    }

    duplicates
}
