pub mod terminal;

pub use terminal::{DisplayRenderer, JsonRenderer, TerminalRenderer};
