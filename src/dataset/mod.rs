mod load_error;
mod loader;

pub use load_error::LoadError;
pub use loader::{DatasetLoader, DatasetSource, DEFAULT_LIMIT};

#[cfg(test)]
pub use loader::parse_dataset;
