// src/gallery.rs

use crate::dataset::{DatasetLoader, DatasetSource};
use crate::domain::{CardView, DisplayState, Listing, LoadPhase, SortKey};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

pub const LOADING_MESSAGE: &str = "Loading listings...";
pub const LOAD_ERROR_MESSAGE: &str = "Error loading listings. Please try again.";

#[derive(Debug, Default)]
struct GalleryState {
    phase: LoadPhase,
    all: Arc<Vec<Listing>>,
}

/// Owns the load lifecycle and the full dataset. Cheap to clone; every clone
/// sees the same state.
#[derive(Clone, Default)]
pub struct Gallery {
    state: Arc<RwLock<GalleryState>>,
}

/// Snapshot handed to the templates for one request.
#[derive(Debug, Clone)]
pub struct GalleryView {
    pub phase: LoadPhase,
    pub query: String,
    pub sort: SortKey,
    pub display: DisplayState,
}

impl GalleryView {
    pub fn cards(&self) -> Vec<CardView> {
        self.display
            .displayed()
            .iter()
            .map(CardView::from_listing)
            .collect()
    }
}

impl Gallery {
    pub fn new() -> Self {
        Self::default()
    }

    /// A gallery that is already `Ready` with the given records.
    #[cfg(test)]
    pub fn with_listings(listings: Vec<Listing>) -> Self {
        let gallery = Self::new();
        gallery.finish_load(Ok(listings));
        gallery
    }

    /// Loads in the background; the page shows the loading message until done.
    pub fn spawn_load(&self, source: DatasetSource, limit: usize) {
        let gallery = self.clone(); // shares state

        std::thread::spawn(move || {
            tracing::info!(%source, limit, "loading dataset");
            gallery.load_blocking(&source, limit);
        });
    }

    pub fn load_blocking(&self, source: &DatasetSource, limit: usize) {
        let result = DatasetLoader::new(limit).and_then(|loader| loader.load(source));

        if let Err(e) = &result {
            tracing::error!(%source, error = %e, "dataset load failed");
        }
        self.finish_load(result.map_err(|e| e.to_string()));
    }

    fn finish_load(&self, result: Result<Vec<Listing>, String>) {
        let mut state = self.write();
        if state.phase != LoadPhase::Loading {
            tracing::warn!("dataset already loaded, ignoring second load");
            return;
        }

        match result {
            Ok(listings) => {
                state.all = Arc::new(listings);
                state.phase = LoadPhase::Ready;
            }
            Err(_) => {
                state.phase = LoadPhase::Error(LOAD_ERROR_MESSAGE.to_string());
            }
        }
    }

    pub fn phase(&self) -> LoadPhase {
        self.read().phase.clone()
    }

    /// Derives the displayed list for one query/sort pair.
    pub fn view(&self, query: &str, sort: SortKey) -> GalleryView {
        let (phase, all) = {
            let state = self.read();
            (state.phase.clone(), state.all.clone())
        };

        let mut display = DisplayState::new(all);
        display.recompute(query, sort);

        GalleryView {
            phase,
            query: query.to_string(),
            sort,
            display,
        }
    }

    /// The listing at a dataset position, if loaded.
    pub fn listing(&self, index: usize) -> Option<Listing> {
        self.read().all.get(index).cloned()
    }

    fn read(&self) -> RwLockReadGuard<'_, GalleryState> {
        self.state.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, GalleryState> {
        self.state.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
