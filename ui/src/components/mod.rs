pub mod joke_panel;
pub mod joke_view;

pub use joke_panel::JokePanel;
pub use joke_view::JokeView;
