/// A slice of input text: either a word or a run of whitespace
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    Word(&'a str),
    Space(&'a str),
}

impl<'a> Token<'a> {
    pub fn as_str(&self) -> &'a str {
        match self {
            Token::Word(s) | Token::Space(s) => s,
        }
    }
}

/// Split text into alternating word and whitespace tokens.
///
/// Whitespace runs are kept as tokens so concatenating `as_str()` of every
/// token gives back the input exactly.
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut in_space: Option<bool> = None;

    for (i, c) in text.char_indices() {
        let space = is_separator(c);
        if let Some(prev) = in_space {
            if prev != space {
                tokens.push(make_token(&text[start..i], prev));
                start = i;
            }
        }
        in_space = Some(space);
    }

    if let Some(prev) = in_space {
        tokens.push(make_token(&text[start..], prev));
    }

    tokens
}

/// Word separator: Unicode whitespace and the byte order mark, but not NEL
/// (U+0085)
fn is_separator(c: char) -> bool {
    match c {
        '\u{FEFF}' => true,
        '\u{0085}' => false,
        c => c.is_whitespace(),
    }
}

fn make_token(s: &str, space: bool) -> Token<'_> {
    if space { Token::Space(s) } else { Token::Word(s) }
}
