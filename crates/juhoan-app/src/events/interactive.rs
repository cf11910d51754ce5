use juhoan_core::{LanguagePair, TranslationMode};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::controller::AppController;
use crate::events::history::format_entry;

const HELP: &str = "\
:swap       swap source and target language
:words      word-by-word mode
:sentences  sentence service mode
:save       add the last translation to history
:history    show history
:star <id>  star or unstar a history entry
:quit       exit";

/// Line-oriented session state, kept separate from stdin so it can be driven
/// directly
pub struct InteractiveSession {
    pub pair: LanguagePair,
    pub mode: TranslationMode,
    /// Last (input, output) pair, what `:save` commits
    pub last: Option<(String, String)>,
}

/// What the caller should do after a line was handled
#[derive(Debug, PartialEq, Eq)]
pub enum Reply {
    Print(String),
    Nothing,
    Quit,
}

impl InteractiveSession {
    pub fn new(pair: LanguagePair, mode: TranslationMode) -> Self {
        Self {
            pair,
            mode,
            last: None,
        }
    }

    pub async fn handle_line(
        &mut self,
        controller: &AppController,
        line: &str,
    ) -> anyhow::Result<Reply> {
        let command = line.trim();
        let reply = match command {
            "" => Reply::Nothing,
            ":q" | ":quit" => Reply::Quit,
            ":help" => Reply::Print(HELP.to_string()),
            ":swap" => {
                self.pair = self.pair.swapped();
                // Output becomes the new input, like swapping the two text boxes
                self.last = self.last.take().map(|(input, output)| (output, input));
                Reply::Print(self.describe())
            }
            ":words" => {
                self.mode = TranslationMode::Words;
                Reply::Print(self.describe())
            }
            ":sentences" => {
                self.mode = TranslationMode::Sentences;
                Reply::Print(self.describe())
            }
            ":save" => match &self.last {
                Some((input, output)) => {
                    if controller.commit(self.pair, input, output).await? {
                        Reply::Print("Saved to history.".to_string())
                    } else {
                        Reply::Print("Already in history.".to_string())
                    }
                }
                None => Reply::Print("Nothing to save yet.".to_string()),
            },
            ":history" => {
                let history = controller.state().history.lock().await;
                let lines: Vec<String> = history.entries().iter().map(format_entry).collect();
                if lines.is_empty() {
                    Reply::Print("History is empty.".to_string())
                } else {
                    Reply::Print(lines.join("\n"))
                }
            }
            _ if command.starts_with(":star ") => {
                let id: u64 = command[":star ".len()..].trim().parse()?;
                if controller.state().history.lock().await.toggle_saved(id)? {
                    Reply::Print(format!("Toggled {id}."))
                } else {
                    Reply::Print(format!("No history entry with id {id}."))
                }
            }
            _ if command.starts_with(':') => {
                Reply::Print(format!("Unknown command {command}, try :help"))
            }
            _ => {
                let output = controller.translate(line, self.pair, self.mode).await?;
                self.last = Some((line.to_string(), output.clone()));
                Reply::Print(output)
            }
        };
        Ok(reply)
    }

    fn describe(&self) -> String {
        let mode = match self.mode {
            TranslationMode::Words => "words",
            TranslationMode::Sentences => "sentences",
        };
        format!(
            "{} -> {} ({mode})",
            self.pair.source.display_name(),
            self.pair.target.display_name()
        )
    }
}

pub async fn run_interactive(
    controller: &AppController,
    pair: LanguagePair,
    mode: TranslationMode,
) -> anyhow::Result<()> {
    let mut session = InteractiveSession::new(pair, mode);
    println!("{}  (:help for commands)", session.describe());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match session.handle_line(controller, &line).await {
            Ok(Reply::Print(text)) => println!("{text}"),
            Ok(Reply::Nothing) => {}
            Ok(Reply::Quit) => break,
            // A failed line should not end the session
            Err(e) => {
                tracing::error!("{e:#}");
                println!("error: {e:#}");
            }
        }
    }

    Ok(())
}
