use std::error::Error;

use serde::Serialize;

use super::LanguagesCmd;
use crate::commands::{Execute, Session};
use crate::generator::{Language, LanguageProfile};

/// One registered language
#[derive(Debug, Serialize)]
pub struct LanguageInfo {
    pub id: &'static str,
    pub aliases: &'static [&'static str],
    pub profile: &'static LanguageProfile,
}

impl From<Language> for LanguageInfo {
    fn from(language: Language) -> Self {
        Self {
            id: language.id(),
            aliases: language.aliases(),
            profile: language.profile(),
        }
    }
}

/// Result of the languages command execution
#[derive(Debug, Serialize)]
pub struct LanguagesResult {
    pub languages: Vec<LanguageInfo>,
}

impl Execute for LanguagesCmd {
    type Output = LanguagesResult;

    fn execute(self, _session: &Session) -> Result<Self::Output, Box<dyn Error>> {
        let languages = match self.lang {
            Some(lang) => vec![lang.parse::<Language>()?.into()],
            None => Language::ALL.into_iter().map(LanguageInfo::from).collect(),
        };

        Ok(LanguagesResult { languages })
    }
}
