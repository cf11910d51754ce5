use juhoan_core::{LanguagePair, TranslationMode};
use tokio::io::AsyncReadExt;

use crate::controller::AppController;

pub async fn handle_translation(
    controller: &AppController,
    text: Option<String>,
    pair: LanguagePair,
    mode: TranslationMode,
    save: bool,
) -> anyhow::Result<()> {
    let text = match text {
        Some(text) => text,
        None => read_stdin().await?,
    };

    let output = controller.translate(&text, pair, mode).await?;
    println!("{output}");

    if save {
        if controller.commit(pair, &text, &output).await? {
            tracing::info!("Saved translation to history");
        } else {
            tracing::info!("Translation not saved (blank or already in history)");
        }
    }

    Ok(())
}

async fn read_stdin() -> anyhow::Result<String> {
    let mut text = String::new();
    tokio::io::stdin().read_to_string(&mut text).await?;
    // Drop the newline the shell appends, keep everything else as typed
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    Ok(text)
}
