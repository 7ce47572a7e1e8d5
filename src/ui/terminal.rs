//! Display renderers for the calculator.
//!
//! The engine never writes output itself; a [`DisplayRenderer`] reads a
//! [`DisplaySnapshot`] after each batch of input and paints it.

use crate::calculator::{DisplaySnapshot, MAX_DISPLAY_LEN};
use serde::Serialize;
use serde_json::json;
use std::io::{self, Write};

/// Something that can show the calculator displays.
pub trait DisplayRenderer {
    /// Paint the current value and equation.
    fn render(&mut self, display: &DisplaySnapshot) -> io::Result<()>;

    /// Signal that a keypress was rejected because the display is full.
    fn flash(&mut self) -> io::Result<()>;
}

/// Plain text renderer: equation line above a right-aligned value.
pub struct TerminalRenderer<W: Write> {
    out: W,
    show_equation: bool,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, show_equation: bool) -> Self {
        Self { out, show_equation }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DisplayRenderer for TerminalRenderer<W> {
    fn render(&mut self, display: &DisplaySnapshot) -> io::Result<()> {
        if self.show_equation {
            writeln!(self.out, "{}", display.equation.trim_end())?;
        }
        writeln!(
            self.out,
            "{:>width$}",
            display.value,
            width = MAX_DISPLAY_LEN
        )?;
        self.out.flush()
    }

    fn flash(&mut self) -> io::Result<()> {
        // terminal bell
        self.out.write_all(b"\x07")?;
        self.out.flush()
    }
}

/// Newline-delimited JSON renderer.
pub struct JsonRenderer<W: Write> {
    out: W,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line<T: Serialize>(&mut self, value: &T) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, value)?;
        self.out.write_all(b"\n")?;
        self.out.flush()
    }
}

impl<W: Write> DisplayRenderer for JsonRenderer<W> {
    fn render(&mut self, display: &DisplaySnapshot) -> io::Result<()> {
        self.write_line(display)
    }

    fn flash(&mut self) -> io::Result<()> {
        self.write_line(&json!({ "event": "display_full" }))
    }
}
