// Library entry so integration tests and external tools can reference internal modules.
// Re-export the same modules used by the binary (`main.rs`).
pub mod database;
pub mod handler;
pub mod jokes;
pub mod model;

// Convenient re-exports for frequently used types.
pub use model::AppState;
