//! The joke system. Each joke variant implements the `Joke` capability and is
//! registered in a `JokeRegistry`, which the event handler consults both for
//! random chance rolls on incoming messages and for direct dispatch by name.

pub mod chore;

use crate::AppState;
use async_trait::async_trait;
use serenity::client::Context;
use serenity::model::channel::Message;
use std::sync::Arc;

/// A single joke the bot can make in response to a message.
///
/// Implementations derive whatever they need (channel, target member) from the
/// originating message. `make_joke` reports whether the joke was delivered;
/// in-universe failure (nobody did the chore) still counts as delivered.
#[async_trait]
pub trait Joke: Send + Sync {
    /// Name used for direct dispatch, e.g. `!joke chore`.
    fn name(&self) -> &'static str;

    /// Percent chance (0..=100) that this joke fires on any given message.
    fn chance(&self) -> u32;

    async fn make_joke(&self, ctx: &Context, state: Arc<AppState>, msg: &Message) -> bool;
}

/// The dispatch table of registered jokes.
pub struct JokeRegistry {
    jokes: Vec<Box<dyn Joke>>,
}

impl JokeRegistry {
    /// Builds the registry with every joke this bot ships with.
    pub fn standard() -> Self {
        Self {
            jokes: vec![Box::new(chore::ChoreJoke)],
        }
    }

    pub fn get(&self, name: &str) -> Option<&dyn Joke> {
        self.jokes
            .iter()
            .find(|j| j.name() == name)
            .map(|j| j.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Joke> {
        self.jokes.iter().map(|j| j.as_ref())
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.jokes.iter().map(|j| j.name()).collect()
    }
}
