//! Interactive prompt capability.
//!
//! Every workflow that mutates a store blocks on an injected [`Prompt`]
//! before committing. The terminal binding uses dialoguer; tests inject
//! a scripted implementation.

use dialoguer::{Confirm, Select};

use crate::error::Result;

/// Outcome of a selection prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectAction {
    /// The highlighted choice was accepted.
    Default,
    /// The choice was accepted via the inspect/show binding.
    Show,
    /// The operator backed out of the selection.
    Abort,
}

/// Synchronous operator interaction.
pub trait Prompt {
    /// Yes/no confirmation. Escaping the prompt counts as a decline.
    fn confirm(&mut self, prompt: &str) -> Result<bool>;

    /// Pick one of `choices`. The returned index is only meaningful for
    /// [`SelectAction::Default`] and [`SelectAction::Show`].
    fn select_one(
        &mut self,
        title: &str,
        help: &str,
        choices: &[String],
    ) -> Result<(SelectAction, usize)>;
}

/// Terminal prompts via dialoguer.
#[derive(Debug, Default)]
pub struct TermPrompt;

impl Prompt for TermPrompt {
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        let answer = Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact_opt()?;
        Ok(answer.unwrap_or(false))
    }

    fn select_one(
        &mut self,
        title: &str,
        help: &str,
        choices: &[String],
    ) -> Result<(SelectAction, usize)> {
        let selection = Select::new()
            .with_prompt(format!("{title} ({help})"))
            .items(choices)
            .default(0)
            .interact_opt()?;

        Ok(match selection {
            Some(index) => (SelectAction::Default, index),
            None => (SelectAction::Abort, 0),
        })
    }
}
