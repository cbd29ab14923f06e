pub mod anchor;
pub mod config;
pub mod counter;
pub mod cursor;
pub mod error;
pub mod log;
pub mod reveal;
pub mod schedule;
pub mod scroll;
pub mod toggle;
pub mod view;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod frontend;

#[cfg(target_arch = "wasm32")]
pub use frontend::{run, PageLayer};
