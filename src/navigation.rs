//! Next / previous / quit loop around an opened chapter.

use log::debug;

use crate::{
    errors::{Error, Result},
    external::Viewer,
    models::Title,
    pipeline::ChapterSource,
    prompt::{self, Prompt},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavState {
    Viewing,
    AwaitingInput,
    Advancing,
    Retreating,
    Quit,
}

impl NavState {
    /// Transition out of `AwaitingInput` for one line of input. Matching is exact.
    pub fn from_input(input: &str) -> Self {
        match input {
            "n" => NavState::Advancing,
            "p" => NavState::Retreating,
            "q" => NavState::Quit,
            _ => NavState::AwaitingInput,
        }
    }
}

fn step(chapter: i64, delta: i64) -> Result<i64> {
    chapter
        .checked_add(delta)
        .ok_or_else(|| Error::InvalidSelection(format!("chapter {chapter} {delta:+}")))
}

pub struct Navigator<'a, S, V, P> {
    source: &'a S,
    viewer: &'a V,
    prompt: &'a P,
}

impl<'a, S: ChapterSource, V: Viewer, P: Prompt> Navigator<'a, S, V, P> {
    pub fn new(source: &'a S, viewer: &'a V, prompt: &'a P) -> Self {
        Self {
            source,
            viewer,
            prompt,
        }
    }

    async fn show(&self, title: &Title, chapter: i64) -> Result<()> {
        let archive = self.source.acquire(title, chapter).await?;
        self.viewer.open(&archive).await
    }

    /// Opens `chapter`, then loops on the menu until the user quits.
    /// Returns the chapter that was being viewed at quit time.
    ///
    /// There is no lower bound on the chapter number: going below 1 is left to the
    /// remote fetch to reject.
    pub async fn run(&self, title: &Title, mut chapter: i64) -> Result<i64> {
        self.show(title, chapter).await?;

        let mut state = NavState::Viewing;
        loop {
            debug!("{state:?} at chapter {chapter}");
            state = match state {
                NavState::Viewing => NavState::AwaitingInput,
                NavState::AwaitingInput => {
                    prompt::listing("Next chapter (n)");
                    prompt::listing("Quit (q)");
                    prompt::listing("Previous chapter (p)");
                    NavState::from_input(&self.prompt.prompt_line("Enter Option")?)
                }
                NavState::Advancing => {
                    chapter = step(chapter, 1)?;
                    self.show(title, chapter).await?;
                    NavState::Viewing
                }
                NavState::Retreating => {
                    chapter = step(chapter, -1)?;
                    self.show(title, chapter).await?;
                    NavState::Viewing
                }
                NavState::Quit => return Ok(chapter),
            };
        }
    }
}
