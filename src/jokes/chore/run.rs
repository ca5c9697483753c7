//! This module implements the Discord side of a chore request: posting the
//! request message, waiting on the reaction collector, and applying the
//! resolved outcome (reaction marker, point mutations, logging).

use super::logic::{ChoreEvent, ChoreOutcome};
use super::tables::RESPONSE_TIMEOUT_SECS;
use crate::database;
use serenity::model::channel::ReactionType;
use serenity::model::id::{ChannelId, UserId};
use serenity::model::user::User;
use serenity::prelude::*;
use sqlx::PgPool;
use std::time::Duration;

/// Posts a chore request in `channel` aimed at `member`, waits up to ten
/// minutes for a qualifying reaction, and settles points accordingly.
///
/// Always returns `true`: an ignored or sniped chore is a valid outcome of the
/// joke, not a failure to make it.
pub async fn request_chore(
    ctx: &Context,
    pool: &PgPool,
    channel: ChannelId,
    member: &User,
) -> bool {
    let mut event = ChoreEvent::roll(member.id);

    let request_text = event.request_text(&member.mention().to_string());
    let chore_msg = match channel.say(&ctx.http, request_text).await {
        Ok(msg) => msg,
        Err(e) => {
            tracing::warn!(
                target = "joke.chore",
                user_id = member.id.get(),
                error = ?e,
                "failed to post chore request"
            );
            return true;
        }
    };

    tracing::info!(
        target = "joke.chore",
        user = %member.display_name(),
        user_id = member.id.get(),
        task = event.task.description,
        "requested chore"
    );

    // The collector predicate must own its data; non-matching emoji never
    // resolve the wait.
    let accepted: Vec<&'static str> = event.task.accepted.to_vec();
    let reaction = chore_msg
        .await_reaction(ctx.shard.clone())
        .timeout(Duration::from_secs(RESPONSE_TIMEOUT_SECS))
        .filter(move |r| accepted.iter().any(|e| r.emoji.unicode_eq(e)))
        .await;

    match reaction {
        Some(reaction) => event.complete(reaction.user_id),
        None => event.expire(),
    }

    match event.outcome {
        ChoreOutcome::TimedOut => {
            tracing::info!(
                target = "joke.chore",
                user = %member.display_name(),
                user_id = member.id.get(),
                "failed to complete the chore"
            );
        }
        ChoreOutcome::CompletedByTarget => {
            tracing::info!(
                target = "joke.chore",
                user = %member.display_name(),
                user_id = member.id.get(),
                "succeeded to complete the chore"
            );
        }
        ChoreOutcome::CompletedByOther { responder } => {
            let responder_name = display_name_of(ctx, responder).await;
            tracing::info!(
                target = "joke.chore",
                sniper = %responder_name,
                sniper_id = responder.get(),
                user = %member.display_name(),
                user_id = member.id.get(),
                "sniped chore"
            );
        }
        ChoreOutcome::Pending => unreachable!("chore wait resolved without an outcome"),
    }

    if let Some(emoji) = event.outcome_emoji() {
        chore_msg
            .react(&ctx.http, ReactionType::Unicode(emoji.to_string()))
            .await
            .ok();
    }

    // The point ledger is fire-and-forget from here; a failed write is logged
    // and the joke still counts as made. The two writes of the sniped branch
    // are not grouped, so one can land without the other.
    for (user, delta) in event.point_deltas() {
        if let Err(e) = database::points::add_points(pool, user, delta).await {
            tracing::error!(
                target = "joke.chore",
                user_id = user.get(),
                delta,
                error = ?e,
                "failed to apply point change"
            );
        }
    }

    true
}

async fn display_name_of(ctx: &Context, user_id: UserId) -> String {
    match user_id.to_user(&ctx.http).await {
        Ok(user) => user.display_name().to_string(),
        Err(_) => user_id.to_string(),
    }
}
