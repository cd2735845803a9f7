//! Paged response envelope shared by the patient API and its consumers.

use serde::{Deserialize, Serialize};

/// One page of results plus enough bookkeeping to draw a pager.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Page<T> {
    pub content: Vec<T>,
    /// Zero-based index of this page.
    pub number: usize,
    /// Requested page size.
    pub size: usize,
    pub total_elements: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    #[must_use]
    pub fn new(content: Vec<T>, number: usize, size: usize, total_elements: usize) -> Self {
        let total_pages = total_elements.div_ceil(size);
        Self {
            content,
            number,
            size,
            total_elements,
            total_pages,
        }
    }
}
