//! Nested list state: depth and per-depth ordinals

use log::trace;
use std::collections::HashMap;

/// Tracks list nesting for one rendering pass.
///
/// Every ordered list that starts resets the counter of its depth, so sibling lists at the
/// same depth each count from 1.
#[derive(Debug, Default)]
pub struct ListTracker {
    depth: usize,
    counters: HashMap<usize, usize>,
}

impl ListTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter a list and return the new depth.
    pub fn enter(&mut self, ordered: bool) -> usize {
        self.depth += 1;
        if ordered {
            self.counters.insert(self.depth, 1);
        }
        trace!("enter list depth={} ordered={ordered}", self.depth);
        self.depth
    }

    /// Ordinal for the next item at the current depth.
    pub fn next(&mut self) -> usize {
        let counter = self.counters.entry(self.depth).or_insert(1);
        let ordinal = *counter;
        *counter += 1;
        ordinal
    }

    pub fn exit(&mut self) {
        trace!("exit list depth={}", self.depth);
        self.depth = self.depth.saturating_sub(1);
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn in_list(&self) -> bool {
        self.depth > 0
    }

    /// Leading spaces for an item at the current depth.
    pub fn indent(&self, unit: usize) -> String {
        " ".repeat(self.depth.saturating_sub(1) * unit)
    }
}
