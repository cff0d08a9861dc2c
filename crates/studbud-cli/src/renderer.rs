//! Markdown output for the terminal.
//!
//! The core display layer emits plans, tasks, and the dashboard as
//! markdown; this renderer either styles that markdown with a termimad
//! skin or passes it through untouched when color is disabled.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Writes markdown to stdout, styled or plain.
pub struct TerminalRenderer {
    styled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a renderer; `styled = false` disables all terminal styling.
    pub fn new(styled: bool) -> Self {
        Self {
            styled,
            skin: Self::studbud_skin(),
        }
    }

    /// Skin tuned to the planner's output: cyan plan and task headers,
    /// green field labels (the bolded parts of summaries), dimmed italics,
    /// and matching list bullets.
    fn studbud_skin() -> MadSkin {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Cyan);
        skin.bold.set_fg(Color::Green);
        skin.italic.set_fg(Color::AnsiValue(245));
        skin.bullet.set_fg(Color::Cyan);
        skin
    }

    /// Render markdown to stdout.
    pub fn render(&self, markdown: &str) -> Result<()> {
        if self.styled {
            self.skin.print_text(markdown);
        } else {
            print!("{markdown}");
        }
        Ok(())
    }
}
