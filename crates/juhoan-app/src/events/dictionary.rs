use juhoan_core::{Language, TranslationIndex};
use juhoan_dictionary::DictionaryCache;

use crate::cli::DictionaryAction;
use crate::controller::AppController;
use crate::status::DictionaryStatus;

pub async fn handle_dictionary_action(
    controller: &AppController,
    action: DictionaryAction,
) -> anyhow::Result<()> {
    match action {
        DictionaryAction::Refresh => {
            let index = controller.load_dictionary(true).await?;
            print_counts(&index);
        }
        DictionaryAction::Status => {
            // Loading here makes the status reflect this session
            if let Err(e) = controller.index().await {
                tracing::debug!("Dictionary load failed: {e}");
            }
            match controller.state().status.dictionary().await {
                DictionaryStatus::NotLoaded => println!("Dictionary not loaded."),
                DictionaryStatus::Loading => println!("Dictionary loading..."),
                DictionaryStatus::Ready { word_counts } => {
                    for (lang, count) in word_counts {
                        println!("{:<11} {count} words", lang.display_name());
                    }
                }
                DictionaryStatus::Failed(e) => println!("Dictionary unavailable: {e}"),
            }
        }
        DictionaryAction::Lookup { word, from } => {
            let index = controller.index().await?;
            match index.lookup(from, &word) {
                None => println!("{word}: not in the {} dictionary", from.display_name()),
                Some(translations) => {
                    for target in from.others() {
                        match translations.get(&target) {
                            Some(value) => println!("{:<11} {value}", target.display_name()),
                            None => println!("{:<11} -", target.display_name()),
                        }
                    }
                }
            }
        }
        DictionaryAction::ClearCache => {
            let key = controller.state().config.read().await.dictionary.cache_key.clone();
            DictionaryCache::with_key(controller.state().storage.clone(), key).invalidate()?;
            println!("Dictionary cache cleared.");
        }
    }

    Ok(())
}

fn print_counts(index: &TranslationIndex) {
    for lang in Language::ALL {
        println!("{:<11} {} words", lang.display_name(), index.word_count(lang));
    }
}
