// src/domain/display.rs

use crate::domain::filter::{derive, SortKey};
use crate::domain::listing::Listing;
use std::sync::Arc;

/// Where the one-shot dataset load stands. `Ready` and `Error` are terminal.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadPhase {
    #[default]
    Loading,
    Ready,
    Error(String),
}

/// The loaded records and the slice of them currently on screen.
#[derive(Debug, Clone, Default)]
pub struct DisplayState {
    all: Arc<Vec<Listing>>,
    displayed: Vec<Listing>,
}

impl DisplayState {
    pub fn new(all: Arc<Vec<Listing>>) -> Self {
        let displayed = all.as_ref().clone();
        Self { all, displayed }
    }

    pub fn all(&self) -> &[Listing] {
        &self.all
    }

    pub fn displayed(&self) -> &[Listing] {
        &self.displayed
    }

    /// Replaces `displayed` wholesale.
    pub fn recompute(&mut self, query: &str, key: SortKey) {
        self.displayed = derive(&self.all, query, key);
    }
}
