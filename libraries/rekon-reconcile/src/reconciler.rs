//! The reconciliation pass over a parsed library

use crate::dedup::resolve_duplicates;
use crate::group::RootNameGroups;
use crate::playlists::remap_playlists;
use crate::report::ReconcileReport;
use rekon_core::{location_for_path, LibraryDocument, RatingOrder, Result, Track};
use rekon_scanner::SourceIndex;

/// Reconciles a library against the files found on disk
///
/// A run groups tracks by Root Name, keeps the highest rated take of each
/// group, drops tracks with no file in the [`SourceIndex`] and points every
/// survivor's `Location` at the indexed file.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reconciler {
    rating_order: RatingOrder,
    remap_playlists: bool,
}

impl Reconciler {
    /// Create a reconciler with string rating order and playlists untouched
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how ratings are compared when picking a winning take
    pub fn rating_order(mut self, order: RatingOrder) -> Self {
        self.rating_order = order;
        self
    }

    /// Set whether playlist entries are rewritten to follow removed tracks
    pub fn remap_playlists(mut self, remap: bool) -> Self {
        self.remap_playlists = remap;
        self
    }

    /// Reconcile `document` in place
    ///
    /// Fails without modifying the document if a track id repeats or a
    /// `Location` cannot be decoded.
    pub fn reconcile(
        &self,
        document: &mut LibraryDocument,
        index: &SourceIndex,
    ) -> Result<ReconcileReport> {
        let collection = &mut document.collection;
        collection.validate_unique_ids()?;

        let groups = RootNameGroups::from_tracks(&collection.tracks)?;
        let duplicates = resolve_duplicates(&collection.tracks, &groups, self.rating_order);

        let mut report = ReconcileReport::new(collection.len());
        let tracks = std::mem::take(&mut collection.tracks);
        let mut kept = Vec::with_capacity(tracks.len());

        for (mut track, root_name) in tracks.into_iter().zip(groups.into_root_names()) {
            if duplicates.contains_key(&track.id) {
                continue;
            }

            let Some(path) = index.get(&root_name) else {
                tracing::debug!("Track {} has no file named like {}", track.id, root_name);
                report.missing_source.push(track.id);
                continue;
            };

            if relocate(&mut track, path) {
                report.relocated += 1;
            }
            kept.push(track);
        }

        collection.tracks = kept;
        collection.sync_entries();
        report.kept = collection.len();

        if self.remap_playlists {
            if let Some(playlists) = document.playlists.as_mut() {
                let surviving = document.collection.track_ids();
                report.playlists = Some(remap_playlists(playlists, &duplicates, &surviving));
            }
        }

        report.duplicates = duplicates;

        tracing::info!(
            "Reconciled {} tracks: {} kept, {} duplicates, {} missing",
            report.total_tracks,
            report.kept,
            report.duplicates.len(),
            report.missing_source.len()
        );
        Ok(report)
    }
}

fn relocate(track: &mut Track, path: &str) -> bool {
    let location = location_for_path(path);
    if location == track.location {
        return false;
    }
    track.location = location;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use rekon_core::Collection;

    fn document(tracks: Vec<Track>) -> LibraryDocument {
        LibraryDocument::new(Collection::new(tracks))
    }

    fn ids(document: &LibraryDocument) -> Vec<&str> {
        document
            .collection
            .tracks
            .iter()
            .map(|t| t.id.as_str())
            .collect()
    }

    #[test]
    fn test_duplicate_missing_and_relocated() {
        let mut doc = document(vec![
            Track::new("1", "file://localhost/old/a.mp3", "51"),
            Track::new("2", "file://localhost/old/a-1.mp3", "255"),
            Track::new("3", "file://localhost/old/gone.mp3", "0"),
        ]);
        let index = SourceIndex::from_paths(["/music/a.mp3"]);

        let report = Reconciler::new().reconcile(&mut doc, &index).unwrap();

        assert_eq!(ids(&doc), vec!["2"]);
        assert_eq!(
            doc.collection.tracks[0].location,
            "file://localhost/music/a.mp3"
        );
        assert_eq!(doc.collection.attribute("Entries"), Some("1"));
        assert_eq!(report.total_tracks, 3);
        assert_eq!(report.kept, 1);
        assert_eq!(report.relocated, 1);
        assert_eq!(report.missing_source, vec![rekon_core::TrackId::new("3")]);
        assert_eq!(report.duplicates.len(), 1);
    }

    #[test]
    fn test_unchanged_location_is_not_counted() {
        let mut doc = document(vec![Track::new("1", "file://localhost/m/a.mp3", "0")]);
        let index = SourceIndex::from_paths(["/m/a.mp3"]);

        let report = Reconciler::new().reconcile(&mut doc, &index).unwrap();

        assert_eq!(report.kept, 1);
        assert_eq!(report.relocated, 0);
    }

    #[test]
    fn test_invalid_location_leaves_document_untouched() {
        let mut doc = document(vec![
            Track::new("1", "file://localhost/m/a.mp3", "0"),
            Track::new("2", "::not a uri::", "0"),
        ]);
        let before = doc.clone();

        let result = Reconciler::new().reconcile(&mut doc, &SourceIndex::new());

        assert!(result.is_err());
        assert_eq!(doc, before);
    }

    #[test]
    fn test_playlists_untouched_unless_enabled() {
        use rekon_core::{PlaylistEntry, PlaylistNode, Playlists};

        let playlists = Playlists {
            attributes: vec![],
            entries: vec![PlaylistEntry::Node(PlaylistNode::folder(
                "ROOT",
                vec![PlaylistEntry::Node(PlaylistNode::playlist("Set", &["1", "2"]))],
            ))],
        };
        let tracks = vec![
            Track::new("1", "file://localhost/m/a.mp3", "0"),
            Track::new("2", "file://localhost/m/a-1.mp3", "255"),
        ];
        let index = SourceIndex::from_paths(["/m/a.mp3"]);

        let mut doc = document(tracks.clone()).with_playlists(playlists.clone());
        let report = Reconciler::new().reconcile(&mut doc, &index).unwrap();
        assert_eq!(doc.playlists.as_ref(), Some(&playlists));
        assert!(report.playlists.is_none());

        let mut doc = document(tracks).with_playlists(playlists);
        let report = Reconciler::new()
            .remap_playlists(true)
            .reconcile(&mut doc, &index)
            .unwrap();
        let stats = report.playlists.unwrap();
        assert_eq!(stats.playlists, 1);
        assert_eq!(stats.dropped, 1);
    }
}
