//! Decoration session
//!
//! A [`Session`] owns the palette and the bucket table for one editor
//! view. Each pass classifies the document into the table, then paints
//! every bucket through a [`DecorationSink`] and empties the table for
//! the next pass.

use crate::palette::{Palette, PaletteColor};
use crate::syntax::{classify_into, BucketTable, Span};

/// Host side of decoration: something that can paint spans in a color
pub trait DecorationSink {
    /// Replace whatever is painted for `bucket` with `spans`, in `color`
    fn set_decorations(&mut self, bucket: usize, color: &PaletteColor, spans: &[Span]);
}

/// Long-lived colorizer state for one view
pub struct Session {
    palette: Palette,
    table: BucketTable,
    /// Buckets the host may still show spans for
    painted_buckets: usize,
    enabled: bool,
}

impl Session {
    /// Create a session for a palette
    pub fn create(palette: Palette) -> Self {
        let table = BucketTable::new(palette.len());
        Self {
            palette,
            table,
            painted_buckets: 0,
            enabled: true,
        }
    }

    /// Current palette
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Spans waiting to be applied
    pub fn pending(&self) -> &BucketTable {
        &self.table
    }

    /// Whether colorizing is on
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Turn colorizing on or off. Takes effect on the next pass.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Flip the enabled flag, returning the new value
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }

    /// Switch palettes. Pending spans are dropped since their buckets
    /// belong to the old palette. Buckets past the new palette's end are
    /// cleared on the host by the next [`Session::apply`].
    pub fn set_palette(&mut self, palette: Palette) {
        self.table.resize(palette.len());
        self.palette = palette;
    }

    /// Classify `text` into the pending table, replacing anything left
    /// from an unapplied pass. A disabled session leaves it empty.
    pub fn reclassify(&mut self, text: &str, tab_size: usize) {
        self.table.clear();
        if self.enabled {
            classify_into(&mut self.table, text, tab_size);
        }
    }

    /// Paint every bucket, then empty the table. Empty buckets are
    /// painted too so no highlight from an earlier pass survives, including
    /// buckets a larger palette used.
    pub fn apply(&mut self, sink: &mut dyn DecorationSink) {
        for (bucket, spans) in self.table.iter() {
            sink.set_decorations(bucket, self.palette.color(bucket), spans);
        }
        for bucket in self.table.bucket_count()..self.painted_buckets {
            sink.set_decorations(bucket, self.palette.color(bucket), &[]);
        }
        self.painted_buckets = self.table.bucket_count();
        self.table.clear();
    }

    /// Remove every highlight this session painted
    pub fn dispose(mut self, sink: &mut dyn DecorationSink) {
        self.table.clear();
        self.apply(sink);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Records what the host would show
    #[derive(Default)]
    struct RecordingSink {
        painted: HashMap<usize, Vec<Span>>,
        calls: usize,
    }

    impl DecorationSink for RecordingSink {
        fn set_decorations(&mut self, bucket: usize, _color: &PaletteColor, spans: &[Span]) {
            self.painted.insert(bucket, spans.to_vec());
            self.calls += 1;
        }
    }

    impl RecordingSink {
        fn visible(&self) -> usize {
            self.painted.values().map(Vec::len).sum()
        }
    }

    const DOC: &str = "a:\n  - b: 1\n    c: 2\n";

    #[test]
    fn test_apply_paints_every_bucket() {
        let mut session = Session::create(Palette::default());
        let mut sink = RecordingSink::default();
        session.reclassify(DOC, 2);
        session.apply(&mut sink);

        assert_eq!(sink.calls, 3);
        assert_eq!(sink.visible(), 4);
        assert_eq!(sink.painted[&0].len(), 1);
        assert!(session.pending().is_empty());
        assert_eq!(session.pending().bucket_count(), 3);
    }

    #[test]
    fn test_stale_spans_replaced() {
        let mut session = Session::create(Palette::default());
        let mut sink = RecordingSink::default();
        session.reclassify(DOC, 2);
        session.apply(&mut sink);

        session.reclassify("a: 1\n", 2);
        session.apply(&mut sink);
        assert_eq!(sink.visible(), 1);
        assert!(sink.painted[&2].is_empty());
    }

    #[test]
    fn test_reclassify_twice_without_apply() {
        let mut session = Session::create(Palette::default());
        session.reclassify(DOC, 2);
        session.reclassify(DOC, 2);
        assert_eq!(session.pending().total_spans(), 4);
    }

    #[test]
    fn test_disabled_session_clears_highlights() {
        let mut session = Session::create(Palette::default());
        let mut sink = RecordingSink::default();
        session.reclassify(DOC, 2);
        session.apply(&mut sink);

        assert!(!session.toggle());
        session.reclassify(DOC, 2);
        session.apply(&mut sink);
        assert_eq!(sink.visible(), 0);

        session.set_enabled(true);
        session.reclassify(DOC, 2);
        session.apply(&mut sink);
        assert_eq!(sink.visible(), 4);
    }

    #[test]
    fn test_set_palette_resizes() {
        let mut session = Session::create(Palette::default());
        session.reclassify(DOC, 2);
        session.set_palette(Palette::from_custom(&["#111", "#222"]));
        assert!(session.pending().is_empty());
        assert_eq!(session.pending().bucket_count(), 2);

        let mut sink = RecordingSink::default();
        session.reclassify("a:\n  b:\n    c:\n", 2);
        session.apply(&mut sink);
        // c wraps back to the first color
        assert_eq!(sink.painted[&0].len(), 2);
        assert_eq!(sink.painted[&1].len(), 1);
    }

    #[test]
    fn test_shrinking_palette_clears_dropped_buckets() {
        let mut session = Session::create(Palette::default());
        let mut sink = RecordingSink::default();
        session.reclassify("a:\n  b:\n    c: 1\n", 2);
        session.apply(&mut sink);
        assert_eq!(sink.painted[&2].len(), 1);

        session.set_palette(Palette::from_custom(&["#111", "#222"]));
        session.reclassify("x: 1\n", 2);
        session.apply(&mut sink);
        assert_eq!(sink.visible(), 1);
        assert!(sink.painted[&2].is_empty());

        // Only cleared once
        let calls = sink.calls;
        session.reclassify("x: 1\n", 2);
        session.apply(&mut sink);
        assert_eq!(sink.calls, calls + 2);
    }

    #[test]
    fn test_palette_shrunk_twice_before_apply() {
        let mut session = Session::create(Palette::from_custom(&["#111", "#222", "#333", "#444"]));
        let mut sink = RecordingSink::default();
        session.reclassify("a:\n  b:\n    c:\n      d:\n", 2);
        session.apply(&mut sink);
        assert_eq!(sink.visible(), 4);

        session.set_palette(Palette::default());
        session.set_palette(Palette::from_custom(&["#111", "#222"]));
        session.reclassify("", 2);
        session.apply(&mut sink);
        assert_eq!(sink.visible(), 0);
        assert!(sink.painted[&3].is_empty());
    }

    #[test]
    fn test_dispose_clears_host() {
        let mut session = Session::create(Palette::default());
        let mut sink = RecordingSink::default();
        session.reclassify(DOC, 2);
        session.apply(&mut sink);
        session.reclassify(DOC, 2);

        session.dispose(&mut sink);
        assert_eq!(sink.visible(), 0);
    }
}
