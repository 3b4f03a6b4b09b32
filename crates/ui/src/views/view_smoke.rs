use mentor_core::model::{Assessment, LearningSession, ResultsPayload, UserProfile};
use mentor_core::time::fixed_now;
use services::FALLBACK_QUESTIONS;

use super::test_harness::{StubApi, ViewHarness, ViewKind, setup_view_harness};

async fn settle(harness: &mut ViewHarness) {
    harness.rebuild();
    for _ in 0..3 {
        harness.drive_async().await;
    }
}

fn session(topic: &str) -> LearningSession {
    let results = ResultsPayload {
        topic: topic.to_string(),
        assessment: Assessment::default(),
        explanation: "Some explanation.".into(),
        resources: Vec::new(),
        quiz: Vec::new(),
    };
    LearningSession::new(topic, Assessment::default(), results, fixed_now())
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_onboarding_for_new_user() {
    let mut harness = setup_view_harness(ViewKind::Home, StubApi::default());
    settle(&mut harness).await;

    let html = harness.render();
    assert!(html.contains("Welcome to Mentor"), "missing wizard in {html}");
    assert!(html.contains("Step 1 of 3"), "missing step label in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_greets_named_profile_and_shows_topics() {
    let mut harness = setup_view_harness(ViewKind::Home, StubApi::default());
    let profile = UserProfile::new("Ada", None, Vec::new()).unwrap();
    harness.profile_store().save(&profile).await.unwrap();

    settle(&mut harness).await;

    let html = harness.render();
    assert!(html.contains("Hi Ada"), "missing greeting in {html}");
    assert!(html.contains("Rust ownership"), "missing stub topic in {html}");
    assert!(
        html.contains("Intro to Everything"),
        "missing stub course in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_shows_fallback_topics_when_backend_is_down() {
    let api = StubApi {
        fail: true,
        ..StubApi::default()
    };
    let mut harness = setup_view_harness(ViewKind::Home, api);
    let profile =
        UserProfile::new("Ada", None, vec!["Art".into(), "Math".into()]).unwrap();
    harness.profile_store().save(&profile).await.unwrap();

    settle(&mut harness).await;

    let html = harness.render();
    assert!(
        html.contains("Suggestions are offline right now"),
        "missing fallback warning in {html}"
    );
    assert!(html.contains("Art"), "missing interest topic in {html}");
    assert!(
        html.contains(FALLBACK_QUESTIONS[0]),
        "missing static question in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_lists_recent_sessions() {
    let mut harness = setup_view_harness(ViewKind::Home, StubApi::default());
    let profile = UserProfile::new("Ada", None, Vec::new()).unwrap();
    harness.profile_store().save(&profile).await.unwrap();
    harness
        .session_store()
        .persist(&[session("pottery"), session("astronomy")])
        .await
        .unwrap();

    settle(&mut harness).await;

    let html = harness.render();
    assert!(
        html.contains("Pick up where you left off"),
        "missing history heading in {html}"
    );
    assert!(html.contains("pottery"), "missing session topic in {html}");
    assert!(html.contains("astronomy"), "missing session topic in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn profile_view_smoke_renders_saved_values() {
    let mut harness = setup_view_harness(ViewKind::Profile, StubApi::default());
    let profile =
        UserProfile::new("Ada", Some("12".into()), vec!["Art".into()]).unwrap();
    harness.profile_store().save(&profile).await.unwrap();

    settle(&mut harness).await;

    let html = harness.render();
    assert!(html.contains("Ada"), "missing name in {html}");
    assert!(html.contains("Art"), "missing interest chip in {html}");
}
