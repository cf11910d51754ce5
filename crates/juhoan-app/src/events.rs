use juhoan_core::{Language, LanguagePair, TranslationMode};

use crate::cli::{Command, LanguageArgs};
use crate::controller::AppController;

pub mod dictionary;
pub mod history;
pub mod interactive;
pub mod translate;

use dictionary::handle_dictionary_action;
use history::handle_history_action;
use interactive::run_interactive;
use translate::handle_translation;

/// Run one CLI command against the session
pub async fn handle_command(controller: &AppController, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Words {
            text,
            languages,
            save,
        } => {
            let pair = resolve_pair(controller, languages).await;
            handle_translation(controller, text, pair, TranslationMode::Words, save).await?;
        }
        Command::Sentence {
            text,
            languages,
            save,
        } => {
            let pair = resolve_pair(controller, languages).await;
            handle_translation(controller, text, pair, TranslationMode::Sentences, save).await?;
        }
        Command::History { action } => {
            handle_history_action(controller, action).await?;
        }
        Command::Dictionary { action } => {
            handle_dictionary_action(controller, action).await?;
        }
        Command::Languages => {
            for lang in Language::ALL {
                let voice = lang.speech_locale().unwrap_or("no speech voice");
                println!("{:<10} {:<11} {voice}", lang.code(), lang.display_name());
            }
        }
        Command::Interactive { languages, mode } => {
            let pair = resolve_pair(controller, languages).await;
            let mode = match mode {
                Some(mode) => mode.into(),
                None => controller.default_mode().await,
            };
            run_interactive(controller, pair, mode).await?;
        }
        Command::Config { write } => {
            let config = controller.state().config.read().await.clone();
            match write {
                Some(path) => {
                    crate::profile::write_config(&config, &path)?;
                    println!("Config written to: {}", path.display());
                }
                None => println!("{}", serde_json::to_string_pretty(&config)?),
            }
        }
    }

    Ok(())
}

/// Command line languages, falling back to the configured defaults
async fn resolve_pair(controller: &AppController, languages: LanguageArgs) -> LanguagePair {
    let default = controller.default_pair().await;
    LanguagePair::new(
        languages.from.unwrap_or(default.source),
        languages.to.unwrap_or(default.target),
    )
}
