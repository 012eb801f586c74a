pub mod client;

pub use client::{MAX_TEXT_BYTES, Translator};
