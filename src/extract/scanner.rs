//! Comment-aware scanning of an array initializer body.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Code,
    LineComment,
    BlockComment,
}

/// Isolate the initializer body that starts right after an opening brace.
///
/// Tracks brace depth so nested sub-lists do not end the body early, and
/// drops `/* ... */` and `// ...` comments. Each comment is replaced by a
/// single space. Braces inside comments are ignored.
///
/// Returns `None` if the text ends before the matching closing brace.
pub(super) fn isolate_body(text: &str) -> Option<String> {
    let mut body = String::new();
    let mut depth = 1_usize;
    let mut state = State::Code;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match state {
            State::Code => match c {
                '/' if chars.peek() == Some(&'*') => {
                    chars.next();
                    state = State::BlockComment;
                    body.push(' ');
                }
                '/' if chars.peek() == Some(&'/') => {
                    chars.next();
                    state = State::LineComment;
                    body.push(' ');
                }
                '{' => {
                    depth += 1;
                    body.push(c);
                }
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(body);
                    }
                    body.push(c);
                }
                _ => body.push(c),
            },
            State::LineComment => {
                if c == '\n' {
                    state = State::Code;
                    body.push('\n');
                }
            }
            State::BlockComment => {
                if c == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    state = State::Code;
                }
            }
        }
    }

    None
}

/// Collect integer literals in order of appearance.
///
/// A literal is a maximal run of ASCII digits, optionally preceded by `-`
/// when `signed` is set.
pub(super) fn integer_literals(body: &str, signed: bool) -> Vec<&str> {
    let bytes = body.as_bytes();
    let mut literals = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        let start = pos;
        if signed && bytes[pos] == b'-' && bytes.get(pos + 1).is_some_and(u8::is_ascii_digit) {
            pos += 1;
        }

        if bytes[pos].is_ascii_digit() {
            while pos < bytes.len() && bytes[pos].is_ascii_digit() {
                pos += 1;
            }
            literals.push(&body[start..pos]);
        } else {
            pos = start + 1;
        }
    }

    literals
}
