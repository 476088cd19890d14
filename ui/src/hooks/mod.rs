pub mod use_joke;

pub use use_joke::{JokeHookReturn, use_joke};
