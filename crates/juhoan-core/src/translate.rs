use crate::index::TranslationIndex;
use crate::language::Language;
use crate::preprocess::{Token, tokenize};

/// Suffix appended to a known word that has no translation into `target`
pub fn no_translation_marker(target: Language) -> String {
    format!(" (*no {} translation)", target.code())
}

/// Translate `text` word by word.
///
/// Unknown words pass through with their original casing. Known words without
/// a `target` value keep their spelling and get the fallback marker.
/// Whitespace is copied through unchanged.
pub fn translate(
    text: &str,
    source: Language,
    target: Language,
    index: &TranslationIndex,
) -> String {
    if text.is_empty() || source == target {
        return text.to_string();
    }

    let Some(bucket) = index.bucket(source) else {
        tracing::warn!("Translation index has no {source} words, returning input unchanged");
        return text.to_string();
    };

    let mut out = String::with_capacity(text.len());
    for token in tokenize(text) {
        let word = match token {
            Token::Space(space) => {
                out.push_str(space);
                continue;
            }
            Token::Word(word) => word,
        };

        match bucket.get(&word.to_lowercase()) {
            None => out.push_str(word),
            Some(translations) => match translations.get(&target) {
                Some(value) => out.push_str(value),
                None => {
                    out.push_str(word);
                    out.push_str(&no_translation_marker(target));
                }
            },
        }
    }

    out
}

/// Same as [`translate`] but with raw language codes.
/// An empty or unrecognised code leaves the text unchanged.
pub fn translate_codes(text: &str, source: &str, target: &str, index: &TranslationIndex) -> String {
    match (Language::from_code(source), Language::from_code(target)) {
        (Some(source), Some(target)) => translate(text, source, target, index),
        _ => {
            tracing::debug!("Missing or unknown language code ({source:?} -> {target:?})");
            text.to_string()
        }
    }
}
