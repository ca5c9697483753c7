//! This module defines the shared data structures used throughout the application.
//! These structs are used as `TypeMapKey`s to store shared state in Serenity's global context.

use crate::jokes::JokeRegistry;
use serenity::prelude::TypeMapKey;
use sqlx::PgPool;
use std::sync::Arc;
use tokio::sync::RwLock;

/// The central, shared state of the application.
/// An `Arc<AppState>` is stored in the global context for easy and safe access
/// from any command or event handler.
pub struct AppState {
    /// The connection pool for the PostgreSQL database backing the point ledger.
    pub db: PgPool,
    /// The current command prefix, which can be changed at runtime.
    pub prefix: Arc<RwLock<String>>,
    /// The dispatch table of every joke this bot knows how to make.
    pub jokes: JokeRegistry,
}

impl AppState {
    pub fn new(db: PgPool, prefix: &str) -> Self {
        Self {
            db,
            prefix: Arc::new(RwLock::new(prefix.to_string())),
            jokes: JokeRegistry::standard(),
        }
    }

    pub async fn from_ctx(ctx: &serenity::prelude::Context) -> Option<Arc<Self>> {
        ctx.data.read().await.get::<AppState>().cloned()
    }
}

impl TypeMapKey for AppState {
    type Value = Arc<AppState>;
}
