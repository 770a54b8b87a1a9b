//! HTTP Handlers

mod docs;
mod nomination;
mod ping;

pub use docs::*;
pub use nomination::*;
pub use ping::*;
