mod execute;
mod output;

pub use execute::{LanguageInfo, LanguagesResult};

use clap::Args;

/// List supported target languages and their type spellings
#[derive(Args, Debug)]
pub struct LanguagesCmd {
    /// Show only this language
    #[arg(short, long)]
    pub lang: Option<String>,
}
