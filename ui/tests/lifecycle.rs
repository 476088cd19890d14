use std::cell::RefCell;
use std::rc::Rc;

use ui::state::{EMPTY_JOKE_TEXT, FAILURE_TEXT};
use ui::{DisplayState, MountGuard, fetch_display_state, request_joke};

use test_helpers::{MockReply, spawn_joke_api, unreachable_client};

#[tokio::test]
async fn success_loads_joke() {
    let api = spawn_joke_api().await;
    api.set_reply(MockReply::joke("This is a test joke."));

    let state = fetch_display_state(&api.client).await;

    assert_eq!(state, DisplayState::Loaded("This is a test joke.".into()));
    assert_eq!(state.output_text(), "This is a test joke.");
    assert_eq!(state.button_label(), "New Joke");
    assert!(!state.is_loading());
}

#[tokio::test]
async fn requests_programming_single_joke() {
    let api = spawn_joke_api().await;

    fetch_display_state(&api.client).await;

    let requests = api.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].category, "Programming");
    assert_eq!(requests[0].joke_type.as_deref(), Some("single"));
}

#[tokio::test]
async fn empty_joke_uses_fallback_text() {
    let api = spawn_joke_api().await;
    api.set_reply(MockReply::joke(""));

    let state = fetch_display_state(&api.client).await;

    assert_eq!(state.output_text(), EMPTY_JOKE_TEXT);
}

#[tokio::test]
async fn absent_joke_uses_fallback_text() {
    let api = spawn_joke_api().await;
    api.set_reply(MockReply::json(serde_json::json!({
        "error": false,
        "category": "Programming",
    })));

    let state = fetch_display_state(&api.client).await;

    assert_eq!(state, DisplayState::Loaded(EMPTY_JOKE_TEXT.into()));
}

#[tokio::test]
async fn non_success_status_fails() {
    let api = spawn_joke_api().await;
    api.set_reply(MockReply::status(500));

    let state = fetch_display_state(&api.client).await;

    assert_eq!(state, DisplayState::Failed(FAILURE_TEXT.into()));
    assert_eq!(
        state.output_text(),
        "Sorry, something went wrong. Please try again."
    );
    assert_eq!(state.button_label(), "New Joke");
}

#[tokio::test]
async fn malformed_body_fails_without_panicking() {
    let api = spawn_joke_api().await;
    api.set_reply(MockReply::garbage());

    let state = fetch_display_state(&api.client).await;

    assert_eq!(state, DisplayState::Failed(FAILURE_TEXT.into()));
}

#[tokio::test]
async fn unreachable_server_fails() {
    let client = unreachable_client();

    let state = fetch_display_state(&client).await;

    assert_eq!(state, DisplayState::Failed(FAILURE_TEXT.into()));
}

#[tokio::test]
async fn retry_after_failure_recovers() {
    let api = spawn_joke_api().await;
    api.set_reply(MockReply::status(502));
    let first = fetch_display_state(&api.client).await;

    api.set_reply(MockReply::joke("Second time lucky."));
    let second = fetch_display_state(&api.client).await;

    assert!(matches!(first, DisplayState::Failed(_)));
    assert_eq!(second, DisplayState::Loaded("Second time lucky.".into()));
}

#[tokio::test]
async fn sequential_requests_settle_to_one_outcome() {
    let api = spawn_joke_api().await;

    let replies = [
        MockReply::joke("one"),
        MockReply::status(404),
        MockReply::joke("two"),
        MockReply::garbage(),
    ];
    for reply in replies {
        api.set_reply(reply);
        let state = fetch_display_state(&api.client).await;
        assert!(!state.is_loading());
        assert!(matches!(
            state,
            DisplayState::Loaded(_) | DisplayState::Failed(_)
        ));
    }

    // one network call per invocation, no retries
    assert_eq!(api.hits(), 4);
}

#[tokio::test]
async fn odd_side_fields_still_show_joke() {
    let api = spawn_joke_api().await;

    let bodies = [
        serde_json::json!({ "joke": "hi", "safe": null }),
        serde_json::json!({ "id": -1, "joke": "hi" }),
        serde_json::json!({ "joke": "hi", "type": "Single" }),
    ];
    for body in bodies {
        api.set_reply(MockReply::json(body.clone()));
        let state = fetch_display_state(&api.client).await;
        assert_eq!(state, DisplayState::Loaded("hi".into()), "{body}");
    }
}

#[tokio::test]
async fn non_string_joke_uses_fallback_text() {
    let api = spawn_joke_api().await;
    api.set_reply(MockReply::json(serde_json::json!({ "joke": 42 })));

    let state = fetch_display_state(&api.client).await;

    assert_eq!(state, DisplayState::Loaded(EMPTY_JOKE_TEXT.into()));
}

/// Records every state handed to the view, in order.
fn recorder() -> (Rc<RefCell<Vec<DisplayState>>>, impl Fn(DisplayState)) {
    let shown = Rc::new(RefCell::new(Vec::new()));
    let sink = {
        let shown = shown.clone();
        move |state: DisplayState| shown.borrow_mut().push(state)
    };
    (shown, sink)
}

#[tokio::test]
async fn request_shows_loading_then_joke() {
    let api = spawn_joke_api().await;
    api.set_reply(MockReply::joke("This is a test joke."));
    let (shown, sink) = recorder();

    let request = request_joke(api.client.clone(), MountGuard::new(), sink);

    // the loading state is set before the request goes out
    assert_eq!(*shown.borrow(), vec![DisplayState::Loading]);
    assert_eq!(api.hits(), 0);

    request.await;

    assert_eq!(
        *shown.borrow(),
        vec![
            DisplayState::Loading,
            DisplayState::Loaded("This is a test joke.".into()),
        ]
    );
    assert_eq!(api.hits(), 1);
}

#[tokio::test]
async fn request_after_failure_goes_back_through_loading() {
    let api = spawn_joke_api().await;
    let guard = MountGuard::new();
    let (shown, sink) = recorder();
    let sink = Rc::new(sink);

    api.set_reply(MockReply::status(500));
    let set = sink.clone();
    request_joke(api.client.clone(), guard.clone(), move |s| set(s)).await;

    api.set_reply(MockReply::joke("Second time lucky."));
    let set = sink.clone();
    request_joke(api.client.clone(), guard.clone(), move |s| set(s)).await;

    assert_eq!(
        *shown.borrow(),
        vec![
            DisplayState::Loading,
            DisplayState::Failed(FAILURE_TEXT.into()),
            DisplayState::Loading,
            DisplayState::Loaded("Second time lucky.".into()),
        ]
    );
    assert_eq!(api.hits(), 2);
}

#[tokio::test]
async fn response_after_unmount_is_discarded() {
    let api = spawn_joke_api().await;
    let guard = MountGuard::new();
    let (shown, sink) = recorder();

    let request = request_joke(api.client.clone(), guard.clone(), sink);
    // the view is torn down while the request is in flight
    guard.unmount();
    request.await;

    // the request still went out, its result was dropped
    assert_eq!(api.hits(), 1);
    assert_eq!(*shown.borrow(), vec![DisplayState::Loading]);
}
