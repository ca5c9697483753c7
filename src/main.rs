use std::env;
use std::sync::Arc;

use serenity::model::gateway::GatewayIntents;
use serenity::model::id::GuildId;
use serenity::prelude::*;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

use dadbot::{AppState, database, handler};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let token = env::var("DISCORD_TOKEN").expect("Expected DISCORD_TOKEN in the environment.");
    let database_url = env::var("DATABASE_URL").expect("Expected DATABASE_URL in the environment.");
    // Optional allow-list: when SERVER_ID is unset the bot answers in any guild.
    let allowed_guild_id = env::var("SERVER_ID").ok().map(|raw| {
        GuildId::new(
            raw.parse::<u64>()
                .expect("SERVER_ID must be a valid number."),
        )
    });

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("Error connecting to the database.");
    database::points::ensure_schema(&pool)
        .await
        .expect("Error creating the point ledger table.");

    let app_state = Arc::new(AppState::new(pool, "!"));

    // Chore completion arrives as reaction events, so the reaction intent is
    // required alongside the usual message intents.
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::GUILD_MESSAGE_REACTIONS;

    let mut client = Client::builder(&token, intents)
        .event_handler(handler::Handler { allowed_guild_id })
        .await
        .expect("Error creating the Discord client.");

    {
        let mut data = client.data.write().await;
        data.insert::<AppState>(app_state);
    }

    if let Err(why) = client.start().await {
        println!("Client error: {:?}", why);
    }
}
