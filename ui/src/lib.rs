use payloads::{APIClient, JOKE_API_ADDRESS};
use yew::prelude::*;

pub mod components;
pub mod hooks;
mod logs;
pub mod state;

pub use state::{DisplayState, MountGuard, fetch_display_state, request_joke};

use components::JokeView;

// The joke endpoint is fixed; there is no runtime configuration.
pub fn get_api_client() -> APIClient {
    APIClient::new(JOKE_API_ADDRESS)
}

/// Browser entry point: set up console logging and mount the app.
pub fn start() {
    logs::init_logging();
    yew::Renderer::<App>::new().render();
}

#[function_component]
pub fn App() -> Html {
    html! {
        <div class="min-h-screen bg-white dark:bg-gray-900 text-gray-900 dark:text-gray-100 transition-colors">
            <main class="max-w-2xl mx-auto px-4 py-10 leading-relaxed">
                <h1 class="text-3xl font-bold text-gray-900 dark:text-white mb-4">
                    {"Programming Jokes"}
                </h1>
                <JokeView />
            </main>
        </div>
    }
}
