//! Page attribution for offsets into a page-marked text blob.

use serde::Serialize;

/// Byte offsets where each page marker begins. `offsets[i]` belongs to page `i + 1`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageOffsets(Vec<usize>);

impl PageOffsets {
    /// Offsets must be non-decreasing; callers building blobs push them in page order.
    pub fn new(offsets: Vec<usize>) -> Self {
        debug_assert!(offsets.windows(2).all(|w| w[0] <= w[1]));
        Self(offsets)
    }

    pub fn push(&mut self, offset: usize) {
        debug_assert!(self.0.last().is_none_or(|&last| last <= offset));
        self.0.push(offset);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn page_of(&self, offset: usize) -> usize {
        page_of(offset, &self.0)
    }
}

/// 1-based page holding `offset`: the rightmost page start `<= offset`.
/// Offsets before the first recorded page start resolve to page 1.
pub fn page_of(offset: usize, page_offsets: &[usize]) -> usize {
    page_offsets.partition_point(|&start| start <= offset).max(1)
}
