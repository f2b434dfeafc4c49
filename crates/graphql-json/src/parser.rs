//! Reader for GraphQL value literal syntax.
//!
//! Parses the text of one inline value, as it would appear as an argument in
//! a query document, into a [`Literal`] tree. Supports every literal form of
//! the grammar:
//!
//! - Integers (`-?(0|[1-9][0-9]*)`) and floats (fraction and/or exponent)
//! - Strings with escapes (`\"`, `\\`, `\/`, `\b`, `\f`, `\n`, `\r`, `\t`,
//!   `\uXXXX` incl. surrogate pairs, `\u{X...}`)
//! - Block strings (`"""..."""`) with common-indent stripping
//! - `true`, `false`, `null`, enum names and `$variable` references
//! - Lists and objects
//!
//! Whitespace, commas and `#` comments are insignificant. The reader does not
//! reject enums or variables; deciding which kinds are JSON is coercion's job.
//! Nesting deeper than [`MAX_DEPTH`] lists and objects is a syntax error.

use serde_json::Value;
use tracing::trace;

use crate::coerce::parse_literal;
use crate::error::{JsonScalarError, Result};
use crate::literal::Literal;

/// Deepest list/object nesting the reader accepts.
pub const MAX_DEPTH: usize = 128;

/// Parse the text of a single value literal.
///
/// The whole input must be consumed: anything other than whitespace, commas
/// or comments after the value is an error.
pub fn parse_literal_str(input: &str) -> Result<Literal> {
    trace!(len = input.len(), "parsing literal text");
    let mut parser = Parser::new(input);
    parser.skip_ignored();
    let literal = parser.parse_value()?;
    parser.skip_ignored();
    if let Some(c) = parser.peek() {
        return Err(parser.error(format!("Unexpected {c:?} after value")));
    }
    Ok(literal)
}

/// Parse literal text and coerce it into a JSON value in one step.
pub fn coerce_str(input: &str) -> Result<Value> {
    parse_literal(&parse_literal_str(input)?)
}

/// Whether `s` matches the GraphQL `Name` production.
pub(crate) fn is_name(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if is_name_start(c) => chars.all(is_name_continue),
        _ => false,
    }
}

fn is_name_start(c: char) -> bool {
    c == '_' || c.is_ascii_alphabetic()
}

fn is_name_continue(c: char) -> bool {
    c == '_' || c.is_ascii_alphanumeric()
}

/// Cursor over the source text. `line` and `column` are 1-based and counted
/// in characters.
struct Parser<'a> {
    src: &'a str,
    pos: usize,
    line: usize,
    column: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str) -> Self {
        Parser {
            src,
            pos: 0,
            line: 1,
            column: 1,
            depth: 0,
        }
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        match c {
            '\n' => {
                self.line += 1;
                self.column = 1;
            }
            // "\r\n" counts as one line break, taken at the '\n'.
            '\r' if self.peek() == Some('\n') => {}
            '\r' => {
                self.line += 1;
                self.column = 1;
            }
            _ => self.column += 1,
        }
        Some(c)
    }

    fn advance(&mut self, n: usize) {
        for _ in 0..n {
            self.bump();
        }
    }

    fn error(&self, message: impl Into<String>) -> JsonScalarError {
        JsonScalarError::Syntax {
            line: self.line,
            column: self.column,
            message: message.into(),
        }
    }

    /// Skip whitespace, commas, byte order marks and comments.
    fn skip_ignored(&mut self) {
        while let Some(c) = self.peek() {
            match c {
                ' ' | '\t' | '\n' | '\r' | ',' | '\u{feff}' => {
                    self.bump();
                }
                '#' => {
                    while let Some(c) = self.peek() {
                        if c == '\n' || c == '\r' {
                            break;
                        }
                        self.bump();
                    }
                }
                _ => break,
            }
        }
    }

    fn expect(&mut self, expected: char) -> Result<()> {
        match self.peek() {
            Some(c) if c == expected => {
                self.bump();
                Ok(())
            }
            Some(c) => Err(self.error(format!("Expected {expected:?}, found {c:?}"))),
            None => Err(self.error(format!("Expected {expected:?}, found end of input"))),
        }
    }

    fn parse_value(&mut self) -> Result<Literal> {
        match self.peek() {
            None => Err(self.error("Unexpected end of input, expected a value")),
            Some('[') => self.parse_list(),
            Some('{') => self.parse_object(),
            Some('$') => {
                self.bump();
                let name = self.parse_name()?;
                Ok(Literal::Variable(name))
            }
            Some('"') if self.rest().starts_with("\"\"\"") => self.parse_block_string(),
            Some('"') => self.parse_string().map(Literal::String),
            Some(c) if c == '-' || c.is_ascii_digit() => self.parse_number(),
            Some(c) if is_name_start(c) => {
                let name = self.parse_name()?;
                Ok(match name.as_str() {
                    "true" => Literal::Boolean(true),
                    "false" => Literal::Boolean(false),
                    "null" => Literal::Null,
                    _ => Literal::Enum(name),
                })
            }
            Some(c) => Err(self.error(format!("Unexpected character {c:?}"))),
        }
    }

    fn parse_name(&mut self) -> Result<String> {
        match self.peek() {
            Some(c) if is_name_start(c) => {}
            Some(c) => return Err(self.error(format!("Expected name, found {c:?}"))),
            None => return Err(self.error("Expected name, found end of input")),
        }
        let start = self.pos;
        while self.peek().is_some_and(is_name_continue) {
            self.bump();
        }
        Ok(self.src[start..self.pos].to_string())
    }

    fn enter(&mut self) -> Result<()> {
        if self.depth >= MAX_DEPTH {
            return Err(self.error(format!("Nesting too deep, limit is {MAX_DEPTH}")));
        }
        self.depth += 1;
        Ok(())
    }

    fn parse_list(&mut self) -> Result<Literal> {
        self.enter()?;
        self.expect('[')?;
        let mut items = Vec::new();
        loop {
            self.skip_ignored();
            match self.peek() {
                Some(']') => {
                    self.bump();
                    self.depth -= 1;
                    return Ok(Literal::List(items));
                }
                None => return Err(self.error("Unterminated list, expected ']'")),
                Some(_) => items.push(self.parse_value()?),
            }
        }
    }

    fn parse_object(&mut self) -> Result<Literal> {
        self.enter()?;
        self.expect('{')?;
        let mut fields = Vec::new();
        loop {
            self.skip_ignored();
            match self.peek() {
                Some('}') => {
                    self.bump();
                    self.depth -= 1;
                    return Ok(Literal::Object(fields));
                }
                None => return Err(self.error("Unterminated object, expected '}'")),
                Some(_) => {
                    let name = self.parse_name()?;
                    self.skip_ignored();
                    self.expect(':')?;
                    self.skip_ignored();
                    let value = self.parse_value()?;
                    fields.push((name, value));
                }
            }
        }
    }

    /// IntValue or FloatValue. The token may not be directly followed by a
    /// digit, `.` or a name character.
    fn parse_number(&mut self) -> Result<Literal> {
        let start = self.pos;
        let mut is_float = false;

        if self.peek() == Some('-') {
            self.bump();
        }
        match self.peek() {
            Some('0') => {
                self.bump();
                if self.peek().is_some_and(|c| c.is_ascii_digit()) {
                    return Err(self.error("Invalid number, unexpected digit after 0"));
                }
            }
            Some(c) if c.is_ascii_digit() => self.skip_digits(),
            _ => return Err(self.error("Invalid number, expected digit")),
        }

        if self.peek() == Some('.') {
            self.bump();
            self.expect_digits()?;
            is_float = true;
        }
        if matches!(self.peek(), Some('e' | 'E')) {
            self.bump();
            if matches!(self.peek(), Some('+' | '-')) {
                self.bump();
            }
            self.expect_digits()?;
            is_float = true;
        }
        if let Some(c) = self.peek() {
            if c == '.' || is_name_start(c) {
                return Err(self.error(format!("Invalid number, unexpected {c:?}")));
            }
        }

        let text = self.src[start..self.pos].to_string();
        Ok(if is_float {
            Literal::Float(text)
        } else {
            Literal::Int(text)
        })
    }

    fn skip_digits(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.bump();
        }
    }

    fn expect_digits(&mut self) -> Result<()> {
        if !self.peek().is_some_and(|c| c.is_ascii_digit()) {
            return Err(self.error("Invalid number, expected digit"));
        }
        self.skip_digits();
        Ok(())
    }

    /// Reject source characters below U+0020 other than tab and line breaks.
    fn check_source_char(&self) -> Result<()> {
        match self.peek() {
            Some(c) if c < ' ' && !matches!(c, '\t' | '\n' | '\r') => Err(self.error(format!(
                "Invalid character U+{:04X} in string",
                u32::from(c)
            ))),
            _ => Ok(()),
        }
    }

    fn parse_string(&mut self) -> Result<String> {
        self.expect('"')?;
        let mut out = String::new();
        loop {
            self.check_source_char()?;
            match self.bump() {
                None | Some('\n') | Some('\r') => return Err(self.error("Unterminated string")),
                Some('"') => return Ok(out),
                Some('\\') => out.push(self.parse_escape()?),
                Some(c) => out.push(c),
            }
        }
    }

    /// Parse the character after a backslash inside a quoted string.
    fn parse_escape(&mut self) -> Result<char> {
        match self.bump() {
            Some('"') => Ok('"'),
            Some('\\') => Ok('\\'),
            Some('/') => Ok('/'),
            Some('b') => Ok('\u{8}'),
            Some('f') => Ok('\u{c}'),
            Some('n') => Ok('\n'),
            Some('r') => Ok('\r'),
            Some('t') => Ok('\t'),
            Some('u') => self.parse_unicode_escape(),
            Some(c) => Err(self.error(format!("Invalid escape sequence \\{c}"))),
            None => Err(self.error("Unterminated string")),
        }
    }

    fn parse_unicode_escape(&mut self) -> Result<char> {
        if self.peek() == Some('{') {
            self.bump();
            let src = self.src;
            let start = self.pos;
            while self.peek().is_some_and(|c| c.is_ascii_hexdigit()) {
                self.bump();
            }
            let hex = &src[start..self.pos];
            self.expect('}')?;
            return u32::from_str_radix(hex, 16)
                .ok()
                .and_then(char::from_u32)
                .ok_or_else(|| self.error(format!("Invalid Unicode escape \\u{{{hex}}}")));
        }

        let code = self.read_hex4()?;
        match code {
            0xD800..=0xDBFF => {
                if !self.rest().starts_with("\\u") {
                    return Err(self.error(format!("Unpaired surrogate \\u{code:04X}")));
                }
                self.advance(2);
                let low = self.read_hex4()?;
                if !(0xDC00..=0xDFFF).contains(&low) {
                    return Err(self.error(format!("Unpaired surrogate \\u{code:04X}")));
                }
                let combined = 0x10000 + ((code - 0xD800) << 10) + (low - 0xDC00);
                char::from_u32(combined)
                    .ok_or_else(|| self.error(format!("Invalid Unicode escape \\u{code:04X}")))
            }
            0xDC00..=0xDFFF => Err(self.error(format!("Unpaired surrogate \\u{code:04X}"))),
            _ => char::from_u32(code)
                .ok_or_else(|| self.error(format!("Invalid Unicode escape \\u{code:04X}"))),
        }
    }

    fn read_hex4(&mut self) -> Result<u32> {
        let mut code = 0;
        for _ in 0..4 {
            let digit = self
                .peek()
                .and_then(|c| c.to_digit(16))
                .ok_or_else(|| self.error("Invalid Unicode escape, expected 4 hex digits"))?;
            self.bump();
            code = code * 16 + digit;
        }
        Ok(code)
    }

    fn parse_block_string(&mut self) -> Result<Literal> {
        self.advance(3);
        let mut raw = String::new();
        loop {
            if self.rest().starts_with("\\\"\"\"") {
                raw.push_str("\"\"\"");
                self.advance(4);
            } else if self.rest().starts_with("\"\"\"") {
                self.advance(3);
                return Ok(Literal::String(block_string_value(&raw)));
            } else {
                self.check_source_char()?;
                match self.bump() {
                    Some(c) => raw.push(c),
                    None => return Err(self.error("Unterminated block string")),
                }
            }
        }
    }
}

/// Indentation stripping for block strings: the common indent of all lines
/// but the first is removed, then leading and trailing blank lines. `\r\n`,
/// `\n` and a lone `\r` all end a line.
fn block_string_value(raw: &str) -> String {
    let normalized = raw.replace("\r\n", "\n").replace('\r', "\n");
    let lines: Vec<&str> = normalized.split('\n').collect();

    let common_indent = lines
        .iter()
        .skip(1)
        .filter_map(|line| {
            let indent = leading_whitespace(line);
            (indent < line.len()).then_some(indent)
        })
        .min();

    let mut stripped: Vec<&str> = lines
        .iter()
        .enumerate()
        .map(|(i, line)| match common_indent {
            Some(indent) if i > 0 => &line[indent.min(line.len())..],
            _ => line,
        })
        .collect();

    while stripped.first().is_some_and(|l| is_blank(l)) {
        stripped.remove(0);
    }
    while stripped.last().is_some_and(|l| is_blank(l)) {
        stripped.pop();
    }
    stripped.join("\n")
}

fn leading_whitespace(line: &str) -> usize {
    line.len() - line.trim_start_matches([' ', '\t']).len()
}

fn is_blank(line: &str) -> bool {
    leading_whitespace(line) == line.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_production() {
        assert!(is_name("_a1"));
        assert!(is_name("true"));
        assert!(!is_name("1a"));
        assert!(!is_name(""));
        assert!(!is_name("with space"));
    }

    #[test]
    fn block_string_strips_common_indent() {
        let raw = "\n    Hello,\n      World!\n\n    Yours,\n      GraphQL.\n  ";
        assert_eq!(
            block_string_value(raw),
            "Hello,\n  World!\n\nYours,\n  GraphQL."
        );
    }

    #[test]
    fn block_string_keeps_first_line_indent() {
        assert_eq!(block_string_value("  first\n    second"), "  first\nsecond");
    }

    #[test]
    fn block_string_splits_on_every_line_terminator() {
        assert_eq!(block_string_value("a\r  b\r  c"), "a\nb\nc");
        assert_eq!(block_string_value("a\r\n  b\n  c"), "a\nb\nc");
    }

    #[test]
    fn depth_returns_to_zero_between_siblings() {
        let input = format!("[{}]", "[[]],".repeat(MAX_DEPTH * 2));
        assert!(parse_literal_str(&input).is_ok());
    }

    #[test]
    fn crlf_counts_as_one_line() {
        let err = parse_literal_str("[\r\n1,\r\n@]").unwrap_err();
        assert!(matches!(err, JsonScalarError::Syntax { line: 3, column: 1, .. }));
    }
}
