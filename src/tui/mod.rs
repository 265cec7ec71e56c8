//! Terminal interaction
//!
//! The controller only talks to the terminal through [`Interaction`], so it
//! can be driven by a script in tests.

use std::io::Write;

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};

use crate::core::error::DashboardError;

/// Prompts and screen control used by the dashboard loop.
pub trait Interaction {
    /// Show a single-select list and return the index of the chosen entry.
    fn select_one(&mut self, prompt: &str, options: &[String]) -> Result<usize, DashboardError>;

    /// Block until the user submits a line. The input is discarded.
    fn wait_for_acknowledgment(&mut self) -> Result<(), DashboardError>;

    /// Clear the whole screen and home the cursor.
    fn clear_screen(&mut self) -> Result<(), DashboardError>;
}

/// `Interaction` on the real terminal via `dialoguer`.
pub struct DialoguerInteraction {
    theme: ColorfulTheme,
}

impl DialoguerInteraction {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerInteraction {
    fn default() -> Self {
        Self::new()
    }
}

impl Interaction for DialoguerInteraction {
    fn select_one(&mut self, prompt: &str, options: &[String]) -> Result<usize, DashboardError> {
        let index = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(options)
            .default(0)
            .max_length(10)
            .interact()?;
        Ok(index)
    }

    fn wait_for_acknowledgment(&mut self) -> Result<(), DashboardError> {
        let _: String = Input::with_theme(&self.theme)
            .with_prompt("Press Enter to continue...")
            .allow_empty(true)
            .interact_text()?;
        Ok(())
    }

    fn clear_screen(&mut self) -> Result<(), DashboardError> {
        let mut stdout = std::io::stdout();
        write!(stdout, "\x1B[2J\x1B[1;1H")?;
        stdout.flush()?;
        Ok(())
    }
}
