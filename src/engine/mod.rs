mod engine;
mod options;
pub mod rails;
pub mod repetition;
mod search;

pub use engine::Engine;
pub use options::EngineOptions;
pub use repetition::RepetitionGuard;
pub use search::{search, SearchOptions, SearchResult};
