use yew::prelude::*;

use crate::state::DisplayState;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub state: DisplayState,
    pub on_request: Callback<()>,
}

/// The joke button and its live region, rendered purely from `state`.
///
/// Always exactly one button and one paragraph, whatever the state.
#[function_component]
pub fn JokePanel(props: &Props) -> Html {
    let onclick = {
        let on_request = props.on_request.clone();
        Callback::from(move |_: MouseEvent| on_request.emit(()))
    };

    html! {
        <section class="space-y-3">
            <button
                type="button"
                {onclick}
                disabled={props.state.is_loading()}
                class="px-4 py-2 bg-blue-600 dark:bg-blue-700 text-white rounded
                       hover:bg-blue-700 dark:hover:bg-blue-600 transition
                       disabled:opacity-50 disabled:cursor-not-allowed"
            >
                {props.state.button_label()}
            </button>
            <p
                aria-live="polite"
                class="text-neutral-700 dark:text-neutral-300"
            >
                {props.state.output_text().to_string()}
            </p>
        </section>
    }
}
