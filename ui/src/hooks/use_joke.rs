use yew::prelude::*;

use crate::get_api_client;
use crate::state::{DisplayState, MountGuard, request_joke};

/// Joke hook return type
pub struct JokeHookReturn {
    pub state: DisplayState,
    pub request_new_joke: Callback<()>,
}

/// Owns the view's [`DisplayState`] and the action that refreshes it.
///
/// Requests one joke when the component mounts and then only when
/// `request_new_joke` is emitted. Overlapping requests are not serialized:
/// whichever response resolves last is shown.
#[hook]
pub fn use_joke() -> JokeHookReturn {
    let state = use_state(DisplayState::default);
    let guard = use_memo((), |_| MountGuard::new());

    let request_new_joke = {
        let state = state.clone();
        let guard = (*guard).clone();

        use_callback((), move |_, _| {
            let state = state.clone();
            // sets Loading now, the result when the task completes
            let request = request_joke(
                get_api_client(),
                guard.clone(),
                move |next| state.set(next),
            );
            yew::platform::spawn_local(request);
        })
    };

    // Fetch once on mount; the empty deps keep re-renders from refetching.
    // Unmounting flips the guard every in-flight request holds.
    {
        let request_new_joke = request_new_joke.clone();
        let guard = (*guard).clone();

        use_effect_with((), move |_| {
            request_new_joke.emit(());
            move || guard.unmount()
        });
    }

    JokeHookReturn {
        state: (*state).clone(),
        request_new_joke,
    }
}
