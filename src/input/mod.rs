//! Keyboard input adapter.
//!
//! Maps browser-style key names onto calculator actions and splits typed
//! key lines into individual keys.

mod keymap;

pub use keymap::{action_for_key, actions_for_line, tokenize_keys};
