use dialoguer::{Input, console::Style, theme::ColorfulTheme};

use crate::errors::Result;

/// One line of user input per call.
pub trait Prompt {
    fn prompt_line(&self, message: &str) -> Result<String>;
}

pub struct TerminalPrompt {
    theme: ColorfulTheme,
}

impl Default for TerminalPrompt {
    fn default() -> Self {
        Self {
            theme: ColorfulTheme {
                prompt_style: Style::new().yellow(),
                ..Default::default()
            },
        }
    }
}

impl Prompt for TerminalPrompt {
    fn prompt_line(&self, message: &str) -> Result<String> {
        let line: String = Input::with_theme(&self.theme)
            .with_prompt(message)
            .allow_empty(true)
            .interact_text()?;
        Ok(line.trim().to_string())
    }
}

pub fn status(message: &str) {
    println!("{}", Style::new().green().apply_to(message));
}

pub fn listing(message: &str) {
    println!("{}", Style::new().white().apply_to(message));
}
