use juhoan_core::{HistoryEntry, LanguagePair};

use crate::cli::HistoryAction;
use crate::controller::AppController;

pub async fn handle_history_action(
    controller: &AppController,
    action: HistoryAction,
) -> anyhow::Result<()> {
    let state = controller.state();

    match action {
        HistoryAction::List { saved } => {
            let history = state.history.lock().await;
            let entries: Vec<&HistoryEntry> = if saved {
                history.saved().collect()
            } else {
                history.entries().iter().collect()
            };
            if entries.is_empty() {
                println!("History is empty.");
            }
            for entry in entries {
                println!("{}", format_entry(entry));
            }
        }
        HistoryAction::Add {
            from,
            to,
            original,
            translated,
        } => {
            let added = controller
                .commit(LanguagePair::new(from, to), &original, &translated)
                .await?;
            if !added {
                println!("Nothing added (blank text or already in history).");
            }
        }
        HistoryAction::Save { id } => {
            let mut history = state.history.lock().await;
            if !history.toggle_saved(id)? {
                anyhow::bail!("no history entry with id {id}");
            }
            if let Some(entry) = history.get(id) {
                println!("{}", format_entry(entry));
            }
        }
        HistoryAction::Delete { id } => {
            if !state.history.lock().await.remove(id)? {
                anyhow::bail!("no history entry with id {id}");
            }
        }
        HistoryAction::Clear => {
            state.history.lock().await.clear()?;
        }
    }

    Ok(())
}

/// One line per entry: id, star, direction, texts
pub fn format_entry(entry: &HistoryEntry) -> String {
    format!(
        "{} {} {} -> {}: {} => {}",
        entry.id,
        if entry.saved { "*" } else { " " },
        entry.source.display_name(),
        entry.target.display_name(),
        entry.original,
        entry.translated
    )
}
