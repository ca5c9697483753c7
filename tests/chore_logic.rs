use dadbot::jokes::chore::logic::{ChoreEvent, ChoreOutcome};
use dadbot::jokes::chore::tables::{
    CHORE_TASKS, COMPLETION_REWARD, ChoreTask, FAILURE_EMOJI, NEGLECT_PENALTY, REQUEST_PHRASES,
    RESPONSE_TIMEOUT_SECS, RequestPhrase,
};
use serenity::model::id::UserId;

fn task(description: &str) -> &'static ChoreTask {
    CHORE_TASKS
        .iter()
        .find(|t| t.description == description)
        .expect("task should exist in the table")
}

fn phrase(text: &str) -> &'static RequestPhrase {
    REQUEST_PHRASES
        .iter()
        .find(|p| p.text == text)
        .expect("phrase should exist in the table")
}

fn event_for(target: UserId, phrase_text: &str, task_description: &str) -> ChoreEvent {
    ChoreEvent {
        phrase: phrase(phrase_text),
        task: task(task_description),
        target,
        outcome: ChoreOutcome::Pending,
    }
}

#[test]
fn target_completion_rewards_target() {
    let target = UserId::new(100);
    let mut event = event_for(target, "go", "fold the laundry");

    event.complete(Some(target));

    assert_eq!(event.outcome, ChoreOutcome::CompletedByTarget);
    assert_eq!(event.point_deltas(), vec![(target, COMPLETION_REWARD)]);
    assert_eq!(event.outcome_emoji(), Some("👍"));
}

#[test]
fn sniped_chore_rewards_responder_and_penalizes_target() {
    // Worked example: A is asked to walk the dog, B reacts with 🐕 first.
    let target = UserId::new(100);
    let sniper = UserId::new(200);
    let mut event = event_for(target, "help me", "walk the dog");

    assert!(event.accepts("🐕"));
    event.complete(Some(sniper));

    assert_eq!(
        event.outcome,
        ChoreOutcome::CompletedByOther { responder: sniper }
    );
    assert_eq!(
        event.point_deltas(),
        vec![(sniper, COMPLETION_REWARD), (target, NEGLECT_PENALTY)]
    );
    assert_eq!(event.outcome_emoji(), Some("👍"));
}

#[test]
fn timeout_penalizes_target_and_marks_failure() {
    let target = UserId::new(100);
    let mut event = event_for(target, "before dinner, please", "wash the car");

    event.expire();

    assert_eq!(event.outcome, ChoreOutcome::TimedOut);
    assert_eq!(event.point_deltas(), vec![(target, NEGLECT_PENALTY)]);
    assert_eq!(event.outcome_emoji(), Some(FAILURE_EMOJI));
}

#[test]
fn pending_event_has_no_effects() {
    let event = event_for(UserId::new(100), "go", "clean your room");

    assert_eq!(event.outcome, ChoreOutcome::Pending);
    assert!(event.point_deltas().is_empty());
    assert_eq!(event.outcome_emoji(), None);
}

#[test]
fn missing_responder_id_is_credited_to_target() {
    let target = UserId::new(100);
    let mut event = event_for(target, "go", "rake the leaves");

    event.complete(None);

    assert_eq!(event.outcome, ChoreOutcome::CompletedByTarget);
    assert_eq!(event.point_deltas(), vec![(target, COMPLETION_REWARD)]);
}

#[test]
fn allowance_phrase_rewards_with_cash_emoji() {
    let target = UserId::new(100);
    let mut event = event_for(target, "if you want your allowance, ", "mow the lawn");

    event.complete(Some(target));

    assert_eq!(event.outcome_emoji(), Some("💵"));
}

#[test]
fn non_matching_emoji_is_rejected() {
    let event = event_for(UserId::new(100), "go", "walk the dog");

    assert!(!event.accepts("🍕"));
    assert!(!event.accepts("👍"));
    // Accepted emoji of a different task do not carry over.
    assert!(!event.accepts("🚗"));
}

#[test]
fn request_text_mentions_member_phrase_and_task() {
    let event = event_for(UserId::new(100), "help me", "clean up the yard");

    assert_eq!(
        event.request_text("<@100>"),
        "<@100> help me clean up the yard."
    );
}

#[test]
fn rolled_events_always_pair_exact_table_rows() {
    let target = UserId::new(100);
    for _ in 0..200 {
        let event = ChoreEvent::roll(target);
        assert!(
            REQUEST_PHRASES
                .iter()
                .any(|p| p.text == event.phrase.text && p.reward == event.phrase.reward)
        );
        assert!(
            CHORE_TASKS
                .iter()
                .any(|t| t.description == event.task.description
                    && t.accepted == event.task.accepted)
        );
        assert_eq!(event.outcome, ChoreOutcome::Pending);
        assert_eq!(event.target, target);
    }
}

#[test]
fn table_contents_match_the_fixed_data() {
    assert_eq!(REQUEST_PHRASES.len(), 4);
    assert_eq!(CHORE_TASKS.len(), 7);
    assert_eq!(
        REQUEST_PHRASES.iter().filter(|p| p.reward == "👍").count(),
        3
    );
    assert_eq!(
        REQUEST_PHRASES.iter().filter(|p| p.reward == "💵").count(),
        1
    );
    assert_eq!(
        task("walk the dog").accepted,
        &["🐶", "🐕", "🦮", "🐕‍🦺"]
    );
    assert!(CHORE_TASKS.iter().all(|t| !t.accepted.is_empty()));
    assert_eq!(RESPONSE_TIMEOUT_SECS, 600);
    assert_eq!(COMPLETION_REWARD, 5);
    assert_eq!(NEGLECT_PENALTY, -10);
}
