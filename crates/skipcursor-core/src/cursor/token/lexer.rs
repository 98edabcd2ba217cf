use crate::cursor::token::{LITERAL_SEPARATOR, TokenSyntaxError};

const QUOTE: char = '\'';

/// Split skiptoken text into trimmed literal fragments.
///
/// Separators inside a quoted section belong to the literal; `''` inside
/// quotes is an escaped quote. A quote may only open at the start of a
/// fragment or directly after an alphabetic type prefix (`guid'…'`), and
/// nothing but whitespace may follow the closing quote.
pub(super) fn split_literals(token: &str) -> Result<Vec<&str>, TokenSyntaxError> {
    let mut fragments = Vec::new();
    let mut start = 0;
    let mut in_quote = false;
    let mut closed = false;
    let mut chars = token.char_indices().peekable();

    while let Some((at, c)) = chars.next() {
        let position = fragments.len();

        if in_quote {
            if c == QUOTE {
                if chars.peek().is_some_and(|&(_, next)| next == QUOTE) {
                    chars.next();
                } else {
                    in_quote = false;
                    closed = true;
                }
            }
            continue;
        }

        match c {
            LITERAL_SEPARATOR => {
                fragments.push(fragment(token, start, at, position)?);
                start = at + c.len_utf8();
                closed = false;
            }
            QUOTE => {
                let prefix = token[start..at].trim_start();
                if closed || !prefix.chars().all(|p| p.is_ascii_alphabetic()) {
                    return Err(TokenSyntaxError::MisplacedQuote { position });
                }
                in_quote = true;
            }
            c if closed && !c.is_whitespace() => {
                return Err(TokenSyntaxError::TrailingAfterQuote { position });
            }
            _ => {}
        }
    }

    let position = fragments.len();
    if in_quote {
        return Err(TokenSyntaxError::UnterminatedQuote { position });
    }
    fragments.push(fragment(token, start, token.len(), position)?);

    Ok(fragments)
}

fn fragment(
    token: &str,
    start: usize,
    end: usize,
    position: usize,
) -> Result<&str, TokenSyntaxError> {
    let fragment = token[start..end].trim();
    if fragment.is_empty() {
        return Err(TokenSyntaxError::EmptyLiteral { position });
    }

    Ok(fragment)
}

///
/// TESTS
///
