//! Glue between the input adapter, the engine and a renderer.

use crate::calculator::{Action, CalculatorEngine, InputOutcome, Mode, copy_to_clipboard};
use crate::input::actions_for_line;
use crate::ui::DisplayRenderer;
use anyhow::Result;
use tracing::warn;

/// A calculator session: one engine painted through one renderer.
pub struct Session<R: DisplayRenderer> {
    engine: CalculatorEngine,
    renderer: R,
    copy_on_equals: bool,
}

impl<R: DisplayRenderer> Session<R> {
    pub fn new(renderer: R, copy_on_equals: bool) -> Self {
        Self {
            engine: CalculatorEngine::new(),
            renderer,
            copy_on_equals,
        }
    }

    pub fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Apply a single action, flashing the display when it is full.
    pub fn press(&mut self, action: Action) -> Result<()> {
        let copy = self.copy_on_equals && self.completes_calculation(action);

        if self.engine.handle(action) == InputOutcome::DisplayFull {
            self.renderer.flash()?;
        }

        if copy && self.engine.mode() == Mode::ResultShown {
            let value = self.engine.display_value();
            if let Err(e) = copy_to_clipboard(value) {
                warn!("Failed to copy result: {e:#}");
            }
        }

        Ok(())
    }

    /// Whether `action` is an equals press that will produce a result.
    fn completes_calculation(&self, action: Action) -> bool {
        action == Action::Equals && self.engine.mode() == Mode::Accumulating
    }

    /// Feed a typed key line and render the resulting displays once.
    pub fn feed_line(&mut self, line: &str) -> Result<()> {
        for action in actions_for_line(line) {
            self.press(action)?;
        }
        self.renderer.render(&self.engine.current_display())?;
        Ok(())
    }
}
