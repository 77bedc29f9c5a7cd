//! Literal parsing.
//!
//! This module turns the value part of a parameter segment back into a
//! [`ParamValue`]. It is a small recursive-descent parser over the literal
//! grammar only; nothing in the input is ever evaluated.
//!
//! ## Grammar
//!
//! ```text
//! literal   := item ("," item)* ","?          (top level: a comma list is a tuple)
//! item      := signed | number | strings | "None" | "True" | "False" | "set()"
//!            | "(" items? ")" | "[" items? "]" | "{" entries? "}" | "{" items "}"
//! signed    := sign operand
//! operand   := number | "(" operand ")"
//! number    := decimal | "0x" hex | "0o" oct | "0b" bin | float
//! float     := digits "." digits? exp? | "." digits exp? | digits exp
//! strings   := string+                        (adjacent strings are concatenated)
//! string    := prefix? ("'" chars "'" | '"' chars '"')
//! prefix    := "u" | "U" | "r" | "R"          (raw strings keep backslashes)
//! ```
//!
//! `nan` and `inf` are names, not literals; only the codec's special-token
//! rule turns them into floats.
//!
//! Not supported: bytes (`b'..'`), complex numbers, triple-quoted strings,
//! `_` digit separators and the `ur`/`br` prefix combinations.
//!
//! Dict keys and set elements are deduplicated by value, with numbers compared
//! numerically: `{1, True, 1.0}` is `{1}`. The first key is kept and the last
//! value wins.
//!
//! ## Examples
//!
//! ```rust
//! use param_ident::{parse_literal, ParamValue};
//!
//! assert_eq!(parse_literal("-3").unwrap(), ParamValue::from(-3));
//! assert_eq!(
//!     parse_literal("(1, 'a')").unwrap(),
//!     ParamValue::Tuple(vec![ParamValue::from(1), ParamValue::from("a")])
//! );
//! assert!(parse_literal("__import__('os')").is_err());
//! ```

use crate::{Error, Number, ParamValue, Result};
use num_bigint::BigInt;

/// Nesting depth at which parsing gives up instead of recursing further.
pub const MAX_DEPTH: usize = 128;

/// Parses `text` as a single literal value.
///
/// # Errors
///
/// Returns [`Error::ValueParse`] with the 1-based column of the offending
/// character when `text` is not a well-formed literal.
pub fn parse_literal(text: &str) -> Result<ParamValue> {
    LiteralParser::new(text).parse()
}

/// Recursive-descent parser over one literal string.
pub struct LiteralParser<'a> {
    input: &'a str,
    position: usize,
    column: usize,
    depth: usize,
}

impl<'a> LiteralParser<'a> {
    pub fn new(input: &'a str) -> Self {
        LiteralParser {
            input,
            position: 0,
            column: 1,
            depth: 0,
        }
    }

    /// Parses the whole input, rejecting trailing text.
    pub fn parse(mut self) -> Result<ParamValue> {
        self.skip_whitespace();
        if self.at_end() {
            return Err(self.error("empty literal"));
        }

        let first = self.parse_value()?;
        self.skip_whitespace();

        let value = if self.peek_char() == Some(',') {
            // `1, 2` is a tuple without parentheses
            let mut items = vec![first];
            while self.peek_char() == Some(',') {
                self.next_char();
                self.skip_whitespace();
                if self.at_end() {
                    break;
                }
                items.push(self.parse_value()?);
                self.skip_whitespace();
            }
            ParamValue::Tuple(items)
        } else {
            first
        };

        if !self.at_end() {
            return Err(self.error("unexpected trailing input"));
        }
        Ok(value)
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.position += ch.len_utf8();
        self.column += 1;
        Some(ch)
    }

    fn at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek_char() {
            if ch.is_whitespace() {
                self.next_char();
            } else {
                break;
            }
        }
    }

    fn error(&self, msg: &str) -> Error {
        Error::value_parse(self.input, self.column, msg)
    }

    fn expect(&mut self, expected: char) -> Result<()> {
        match self.next_char() {
            Some(ch) if ch == expected => Ok(()),
            Some(ch) => Err(self.error(&format!("expected '{}', found '{}'", expected, ch))),
            None => Err(self.error(&format!("expected '{}', found end of input", expected))),
        }
    }

    fn parse_value(&mut self) -> Result<ParamValue> {
        self.skip_whitespace();
        match self.peek_char() {
            None => Err(self.error("unexpected end of input")),
            Some('(') => self.nested(Self::parse_tuple),
            Some('[') => self.nested(Self::parse_list),
            Some('{') => self.nested(Self::parse_braces),
            Some(sign @ ('+' | '-')) => {
                self.next_char();
                self.parse_signed(sign == '-')
            }
            Some(ch) if ch.is_ascii_digit() || ch == '.' => self.parse_number(false),
            Some(_) if self.string_start().is_some() => self.parse_strings(),
            Some(ch) if ch.is_alphabetic() || ch == '_' => self.parse_name(),
            Some(ch) => Err(self.error(&format!("unexpected character '{}'", ch))),
        }
    }

    /// Parses the operand of a unary sign: a number, possibly parenthesised.
    fn parse_signed(&mut self, negative: bool) -> Result<ParamValue> {
        self.skip_whitespace();
        match self.peek_char() {
            Some(ch) if ch.is_ascii_digit() || ch == '.' => self.parse_number(negative),
            Some('(') => {
                if self.depth >= MAX_DEPTH {
                    return Err(self.error("literal nested too deeply"));
                }
                self.next_char();
                self.depth += 1;
                let value = self.parse_signed(negative);
                self.depth -= 1;
                let value = value?;
                self.skip_whitespace();
                self.expect(')')?;
                Ok(value)
            }
            _ => Err(self.error("unary sign must be applied to a number")),
        }
    }

    fn nested(&mut self, parse: fn(&mut Self) -> Result<ParamValue>) -> Result<ParamValue> {
        if self.depth >= MAX_DEPTH {
            return Err(self.error("literal nested too deeply"));
        }
        self.depth += 1;
        let value = parse(self);
        self.depth -= 1;
        value
    }

    fn parse_name(&mut self) -> Result<ParamValue> {
        let input = self.input;
        let start = self.position;
        while let Some(ch) = self.peek_char() {
            if ch.is_alphanumeric() || ch == '_' {
                self.next_char();
            } else {
                break;
            }
        }

        match &input[start..self.position] {
            "None" => Ok(ParamValue::None),
            "True" => Ok(ParamValue::Bool(true)),
            "False" => Ok(ParamValue::Bool(false)),
            "set" => {
                // only the empty set has no literal syntax of its own
                self.skip_whitespace();
                self.expect('(')?;
                self.skip_whitespace();
                self.expect(')')?;
                Ok(ParamValue::Set(Vec::new()))
            }
            name => Err(self.error(&format!("'{}' is not a literal", name))),
        }
    }

    fn parse_number(&mut self, negative: bool) -> Result<ParamValue> {
        let rest = &self.input[self.position..];
        let radix = match rest.get(..2) {
            Some("0x" | "0X") => 16,
            Some("0o" | "0O") => 8,
            Some("0b" | "0B") => 2,
            _ => 10,
        };

        let value = if radix == 10 {
            self.parse_decimal(negative)?
        } else {
            self.next_char();
            self.next_char();
            let start = self.position;
            while matches!(self.peek_char(), Some(ch) if ch.is_digit(radix)) {
                self.next_char();
            }
            let digits = &self.input[start..self.position];
            if digits.is_empty() {
                return Err(self.error("missing digits after radix prefix"));
            }
            self.integer(digits, radix, negative)?
        };

        if matches!(self.peek_char(), Some(ch) if ch.is_alphanumeric() || ch == '_' || ch == '.') {
            return Err(self.error("invalid numeric literal"));
        }
        Ok(value)
    }

    fn parse_decimal(&mut self, negative: bool) -> Result<ParamValue> {
        let start = self.position;
        let int_digits = self.consume_digits();
        let mut is_float = false;

        if self.peek_char() == Some('.') {
            self.next_char();
            let frac_digits = self.consume_digits();
            if int_digits == 0 && frac_digits == 0 {
                return Err(self.error("invalid numeric literal"));
            }
            is_float = true;
        }

        if matches!(self.peek_char(), Some('e' | 'E')) {
            self.next_char();
            if matches!(self.peek_char(), Some('+' | '-')) {
                self.next_char();
            }
            if self.consume_digits() == 0 {
                return Err(self.error("missing exponent digits"));
            }
            is_float = true;
        }

        let text = &self.input[start..self.position];
        if is_float {
            let parsed: f64 = text
                .parse()
                .map_err(|_| self.error("invalid float literal"))?;
            Ok(ParamValue::from(if negative { -parsed } else { parsed }))
        } else {
            if text.len() > 1 && text.starts_with('0') && text.bytes().any(|b| b != b'0') {
                return Err(self.error("leading zeros in decimal integer literals are not permitted"));
            }
            self.integer(text, 10, negative)
        }
    }

    fn consume_digits(&mut self) -> usize {
        let mut count = 0;
        while matches!(self.peek_char(), Some(ch) if ch.is_ascii_digit()) {
            self.next_char();
            count += 1;
        }
        count
    }

    fn integer(&self, digits: &str, radix: u32, negative: bool) -> Result<ParamValue> {
        let magnitude = BigInt::parse_bytes(digits.as_bytes(), radix)
            .ok_or_else(|| self.error("invalid integer literal"))?;
        Ok(ParamValue::from(if negative { -magnitude } else { magnitude }))
    }

    /// At the start of a string, returns whether it is raw.
    fn string_start(&self) -> Option<bool> {
        let mut chars = self.input[self.position..].chars();
        match (chars.next(), chars.next()) {
            (Some('\'' | '"'), _) => Some(false),
            (Some('u' | 'U'), Some('\'' | '"')) => Some(false),
            (Some('r' | 'R'), Some('\'' | '"')) => Some(true),
            _ => None,
        }
    }

    /// Parses one or more adjacent strings into a single value.
    fn parse_strings(&mut self) -> Result<ParamValue> {
        let mut result = String::new();
        while let Some(raw) = self.string_start() {
            if !matches!(self.peek_char(), Some('\'' | '"')) {
                self.next_char(); // prefix
            }
            self.parse_string(raw, &mut result)?;
            self.skip_whitespace();
        }
        Ok(ParamValue::Str(result))
    }

    fn parse_string(&mut self, raw: bool, out: &mut String) -> Result<()> {
        let quote = self
            .next_char()
            .ok_or_else(|| self.error("unterminated string literal"))?;

        loop {
            match self.next_char() {
                None | Some('\n') => return Err(self.error("unterminated string literal")),
                Some(ch) if ch == quote => return Ok(()),
                Some('\\') if raw => {
                    // the escaped character is kept and never closes the string
                    let escaped = self
                        .next_char()
                        .ok_or_else(|| self.error("unterminated string literal"))?;
                    out.push('\\');
                    out.push(escaped);
                }
                Some('\\') => self.parse_escape(out)?,
                Some(ch) => out.push(ch),
            }
        }
    }

    fn parse_escape(&mut self, out: &mut String) -> Result<()> {
        match self.next_char() {
            None => return Err(self.error("unterminated string literal")),
            Some('\n') => {} // line continuation
            Some('\\') => out.push('\\'),
            Some('\'') => out.push('\''),
            Some('"') => out.push('"'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('a') => out.push('\u{0007}'),
            Some('b') => out.push('\u{0008}'),
            Some('f') => out.push('\u{000C}'),
            Some('v') => out.push('\u{000B}'),
            Some('x') => out.push(self.hex_escape(2)?),
            Some('u') => out.push(self.hex_escape(4)?),
            Some('U') => out.push(self.hex_escape(8)?),
            Some(first @ '0'..='7') => {
                let mut code = first.to_digit(8).unwrap_or(0);
                for _ in 0..2 {
                    match self.peek_char().and_then(|ch| ch.to_digit(8)) {
                        Some(digit) => {
                            self.next_char();
                            code = code * 8 + digit;
                        }
                        None => break,
                    }
                }
                out.push(char::from_u32(code).ok_or_else(|| self.error("invalid octal escape"))?);
            }
            Some(other) => {
                // unknown escapes are kept verbatim
                out.push('\\');
                out.push(other);
            }
        }
        Ok(())
    }

    fn hex_escape(&mut self, len: usize) -> Result<char> {
        let mut code = 0u32;
        for _ in 0..len {
            let digit = self
                .next_char()
                .and_then(|ch| ch.to_digit(16))
                .ok_or_else(|| self.error("truncated hex escape"))?;
            code = code * 16 + digit;
        }
        char::from_u32(code).ok_or_else(|| self.error("escape is not a valid code point"))
    }

    /// Parses comma-separated items up to `close`.
    ///
    /// Returns the items and whether a comma followed the last one.
    fn parse_items(&mut self, close: char) -> Result<(Vec<ParamValue>, bool)> {
        let mut items = Vec::new();
        let mut trailing_comma = false;
        loop {
            self.skip_whitespace();
            if self.peek_char() == Some(close) {
                self.next_char();
                return Ok((items, trailing_comma));
            }
            items.push(self.parse_value()?);
            self.skip_whitespace();
            match self.next_char() {
                Some(',') => trailing_comma = true,
                Some(ch) if ch == close => return Ok((items, false)),
                Some(ch) => {
                    return Err(self.error(&format!("expected ',' or '{}', found '{}'", close, ch)))
                }
                None => return Err(self.error(&format!("expected '{}'", close))),
            }
        }
    }

    fn parse_tuple(&mut self) -> Result<ParamValue> {
        self.next_char();
        let (mut items, trailing_comma) = self.parse_items(')')?;
        if items.len() == 1 && !trailing_comma {
            // `(x)` is just a parenthesised `x`
            return Ok(items.remove(0));
        }
        Ok(ParamValue::Tuple(items))
    }

    fn parse_list(&mut self) -> Result<ParamValue> {
        self.next_char();
        let (items, _) = self.parse_items(']')?;
        Ok(ParamValue::List(items))
    }

    fn parse_braces(&mut self) -> Result<ParamValue> {
        self.next_char();
        self.skip_whitespace();
        if self.peek_char() == Some('}') {
            self.next_char();
            return Ok(ParamValue::Dict(Vec::new()));
        }

        let first = self.parse_value()?;
        self.skip_whitespace();
        if self.peek_char() == Some(':') {
            self.parse_dict(first)
        } else {
            self.parse_set(first)
        }
    }

    fn parse_dict(&mut self, first_key: ParamValue) -> Result<ParamValue> {
        let mut entries: Vec<(ParamValue, ParamValue)> = Vec::new();
        let mut key = first_key;
        loop {
            if !is_hashable(&key) {
                return Err(self.error(&format!("unhashable dict key of type {}", key.kind())));
            }
            self.skip_whitespace();
            self.expect(':')?;
            let value = self.parse_value()?;
            match entries.iter_mut().find(|(existing, _)| same_key(existing, &key)) {
                Some(slot) => slot.1 = value,
                None => entries.push((key, value)),
            }

            self.skip_whitespace();
            match self.next_char() {
                Some('}') => break,
                Some(',') => {
                    self.skip_whitespace();
                    if self.peek_char() == Some('}') {
                        self.next_char();
                        break;
                    }
                    key = self.parse_value()?;
                }
                Some(ch) => return Err(self.error(&format!("expected ',' or '}}', found '{}'", ch))),
                None => return Err(self.error("expected '}'")),
            }
        }
        Ok(ParamValue::Dict(entries))
    }

    fn parse_set(&mut self, first: ParamValue) -> Result<ParamValue> {
        let mut elements = vec![first];
        match self.next_char() {
            Some('}') => {}
            Some(',') => {
                let (rest, _) = self.parse_items('}')?;
                elements.extend(rest);
            }
            Some(ch) => return Err(self.error(&format!("expected ',' or '}}', found '{}'", ch))),
            None => return Err(self.error("expected '}'")),
        }

        let mut unique: Vec<ParamValue> = Vec::with_capacity(elements.len());
        for element in elements {
            if !is_hashable(&element) {
                return Err(self.error(&format!("unhashable set element of type {}", element.kind())));
            }
            if !unique.iter().any(|seen| same_key(seen, &element)) {
                unique.push(element);
            }
        }
        Ok(ParamValue::Set(unique))
    }
}

fn is_hashable(value: &ParamValue) -> bool {
    match value {
        ParamValue::List(_) | ParamValue::Dict(_) | ParamValue::Set(_) => false,
        ParamValue::Tuple(items) => items.iter().all(is_hashable),
        _ => true,
    }
}

enum Numeric {
    Int(BigInt),
    Float(f64),
}

fn numeric(value: &ParamValue) -> Option<Numeric> {
    match value {
        ParamValue::Bool(b) => Some(Numeric::Int(BigInt::from(u8::from(*b)))),
        ParamValue::BigInt(bi) => Some(Numeric::Int(bi.clone())),
        ParamValue::Number(n) => Some(match n {
            Number::Integer(i) => Numeric::Int(BigInt::from(*i)),
            other => Numeric::Float(other.as_f64()),
        }),
        _ => None,
    }
}

/// Key equality for dicts and sets: `True`, `1` and `1.0` are the same key.
fn same_key(a: &ParamValue, b: &ParamValue) -> bool {
    if let (Some(x), Some(y)) = (numeric(a), numeric(b)) {
        return match (x, y) {
            (Numeric::Int(x), Numeric::Int(y)) => x == y,
            (Numeric::Float(x), Numeric::Float(y)) => x == y,
            (Numeric::Int(i), Numeric::Float(f)) | (Numeric::Float(f), Numeric::Int(i)) => {
                f.is_finite()
                    && f.fract() == 0.0
                    && format!("{:.0}", f).parse::<BigInt>().map_or(false, |fi| fi == i)
            }
        };
    }

    match (a, b) {
        (ParamValue::Tuple(xs), ParamValue::Tuple(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| same_key(x, y))
        }
        _ => a == b,
    }
}
