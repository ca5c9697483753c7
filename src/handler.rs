use crate::{AppState, database, jokes};
use rand::{Rng, rng};
use serenity::async_trait;
use serenity::client::Context;
use serenity::model::{channel::Message, gateway::Ready, id::GuildId};
use serenity::prelude::EventHandler;
use std::str::FromStr;

enum Command {
    Chore,
    Joke,
    Points,
    Prefix,
    Unknown,
}

impl FromStr for Command {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "chore" => Ok(Command::Chore),
            "joke" | "j" => Ok(Command::Joke),
            "points" | "score" => Ok(Command::Points),
            "prefix" => Ok(Command::Prefix),
            _ => Ok(Command::Unknown),
        }
    }
}

pub struct Handler {
    /// When set, the bot only responds inside this guild.
    pub allowed_guild_id: Option<GuildId>,
}

#[async_trait]
impl EventHandler for Handler {
    async fn message(&self, ctx: Context, msg: Message) {
        if msg.author.bot {
            return;
        }
        if let Some(allowed) = self.allowed_guild_id {
            if msg.guild_id != Some(allowed) {
                return;
            }
        }
        let Some(app_state) = AppState::from_ctx(&ctx).await else {
            return;
        };
        let prefix_string = app_state.prefix.read().await.clone();

        if let Some(command_body) = msg.content.strip_prefix(&prefix_string) {
            let mut args = command_body.split_whitespace();
            let Some(command_str) = args.next() else {
                return;
            };
            let command = Command::from_str(command_str).unwrap_or(Command::Unknown);
            let args_vec: Vec<&str> = args.collect();
            match command {
                Command::Chore => {
                    let target = msg.mentions.first().unwrap_or(&msg.author);
                    jokes::chore::run::request_chore(&ctx, &app_state.db, msg.channel_id, target)
                        .await;
                }
                Command::Joke => {
                    let Some(name) = args_vec.first() else {
                        let listing =
                            format!("Available jokes: {}", app_state.jokes.names().join(", "));
                        msg.reply(&ctx.http, listing).await.ok();
                        return;
                    };
                    match app_state.jokes.get(name) {
                        Some(joke) => {
                            joke.make_joke(&ctx, app_state.clone(), &msg).await;
                        }
                        None => {
                            msg.reply(&ctx.http, "I don't know that joke.").await.ok();
                        }
                    }
                }
                Command::Points => {
                    let target = msg.mentions.first().unwrap_or(&msg.author);
                    match database::points::get_points(&app_state.db, target.id).await {
                        Ok(points) => {
                            let reply =
                                format!("{} has {} points.", target.display_name(), points);
                            msg.reply(&ctx.http, reply).await.ok();
                        }
                        Err(e) => {
                            println!("[HANDLER] Error fetching points: {:?}", e);
                        }
                    }
                }
                Command::Prefix => {
                    let Some(new_prefix) = args_vec.first() else {
                        msg.reply(&ctx.http, format!("Current prefix: `{}`", prefix_string))
                            .await
                            .ok();
                        return;
                    };
                    *app_state.prefix.write().await = new_prefix.to_string();
                    msg.reply(&ctx.http, format!("Prefix changed to `{}`.", new_prefix))
                        .await
                        .ok();
                }
                Command::Unknown => {}
            }
            return;
        }

        // Not a command: give every registered joke its chance roll.
        // The rng handle must not be held across an await point.
        let fired: Vec<&'static str> = {
            let mut roller = rng();
            app_state
                .jokes
                .iter()
                .filter(|j| roller.random_range(0..100) < j.chance())
                .map(|j| j.name())
                .collect()
        };
        for name in fired {
            if let Some(joke) = app_state.jokes.get(name) {
                joke.make_joke(&ctx, app_state.clone(), &msg).await;
            }
        }
    }

    async fn ready(&self, _ctx: Context, ready: Ready) {
        println!("{} is connected and ready!", ready.user.name);
    }
}
