use yew::prelude::*;

use crate::components::JokePanel;
use crate::hooks::use_joke;

/// Fetches a programming joke on mount and on every button press.
#[function_component]
pub fn JokeView() -> Html {
    let joke = use_joke();

    html! {
        <JokePanel state={joke.state} on_request={joke.request_new_joke} />
    }
}
