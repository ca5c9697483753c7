//! The chore joke: the bot asks a member to "do a chore", which members
//! complete by reacting with a matching emoji before the request expires.

pub mod logic;
pub mod run;
pub mod tables;

use crate::AppState;
use crate::jokes::Joke;
use serenity::async_trait;
use serenity::client::Context;
use serenity::model::channel::Message;
use std::sync::Arc;

pub struct ChoreJoke;

#[async_trait]
impl Joke for ChoreJoke {
    fn name(&self) -> &'static str {
        "chore"
    }

    fn chance(&self) -> u32 {
        1
    }

    async fn make_joke(&self, ctx: &Context, state: Arc<AppState>, msg: &Message) -> bool {
        run::request_chore(ctx, &state.db, msg.channel_id, &msg.author).await
    }
}
