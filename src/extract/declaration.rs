//! Array declaration lookup.

use super::ElementKind;

/// Locate the first `[const] <type> NAME [ ] = {` declaration in `text`.
///
/// Returns the byte offset just past the opening brace.
pub(super) fn find_body_start(text: &str, name: &str, kind: ElementKind) -> Option<usize> {
    let keyword = kind.type_keyword();

    text.match_indices(keyword)
        .filter(|&(pos, _)| at_identifier_start(text, pos))
        .find_map(|(pos, _)| {
            let after_keyword = pos + keyword.len();
            match_declarator(&text[after_keyword..], name).map(|len| after_keyword + len)
        })
}

/// True if no identifier character precedes `pos`, so `uint16_t` is never
/// taken for `int16_t`.
fn at_identifier_start(text: &str, pos: usize) -> bool {
    text[..pos]
        .chars()
        .next_back()
        .is_none_or(|c| !is_identifier_char(c))
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Match `<ws>+ NAME <ws>* [ <ws>* ] <ws>* = <ws>* {` at the start of `rest`.
///
/// Returns the number of bytes consumed.
fn match_declarator(rest: &str, name: &str) -> Option<usize> {
    let mut cursor = Cursor::new(rest);

    if cursor.skip_whitespace() == 0 || !cursor.eat(name) {
        return None;
    }

    for token in ["[", "]", "=", "{"] {
        cursor.skip_whitespace();
        if !cursor.eat(token) {
            return None;
        }
    }

    Some(cursor.consumed)
}

struct Cursor<'a> {
    rest: &'a str,
    consumed: usize,
}

impl<'a> Cursor<'a> {
    fn new(rest: &'a str) -> Self {
        Self { rest, consumed: 0 }
    }

    fn advance(&mut self, len: usize) {
        self.rest = &self.rest[len..];
        self.consumed += len;
    }

    fn skip_whitespace(&mut self) -> usize {
        let len = self.rest.len() - self.rest.trim_start().len();
        self.advance(len);
        len
    }

    fn eat(&mut self, token: &str) -> bool {
        if self.rest.starts_with(token) {
            self.advance(token.len());
            true
        } else {
            false
        }
    }
}
