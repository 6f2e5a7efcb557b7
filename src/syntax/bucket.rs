//! Decoration bucket table
//!
//! One ordered list of spans per palette color. A session fills it on
//! each classification pass, hands it to the host, then clears it. The
//! lists keep their allocations across passes.

use super::span::Span;

/// Spans grouped by color bucket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketTable {
    buckets: Vec<Vec<Span>>,
}

impl BucketTable {
    /// Create a table with one bucket per palette color (at least one)
    pub fn new(bucket_count: usize) -> Self {
        Self {
            buckets: vec![Vec::new(); bucket_count.max(1)],
        }
    }

    /// Number of buckets
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Append a span. Out-of-range indices wrap around.
    pub fn push(&mut self, bucket: usize, span: Span) {
        let count = self.buckets.len();
        self.buckets[bucket % count].push(span);
    }

    /// Spans in one bucket, in document order
    pub fn spans(&self, bucket: usize) -> &[Span] {
        self.buckets.get(bucket).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterate over every bucket, including empty ones
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[Span])> + '_ {
        self.buckets.iter().enumerate().map(|(idx, spans)| (idx, spans.as_slice()))
    }

    /// Total number of spans across all buckets
    pub fn total_spans(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    /// Check if no bucket holds a span
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }

    /// Empty every bucket, keeping the table and its allocations
    pub fn clear(&mut self) {
        for spans in &mut self.buckets {
            spans.clear();
        }
    }

    /// Empty one bucket
    pub fn clear_bucket(&mut self, bucket: usize) {
        if let Some(spans) = self.buckets.get_mut(bucket) {
            spans.clear();
        }
    }

    /// Change the number of buckets (palette changed). Clears all spans.
    pub fn resize(&mut self, bucket_count: usize) {
        self.clear();
        self.buckets.resize(bucket_count.max(1), Vec::new());
    }
}
