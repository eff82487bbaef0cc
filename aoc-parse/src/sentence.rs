//! Template-based line parsing, in the style of a format string.
//!
//! `sentence("The {item} scores {points:d}")` parses
//! `"The apple scores 5"` into fields `item = "apple"` and `points = 5`.

use crate::error::{ParseError, ParseResult};
use regex::Regex;
use std::collections::HashMap;

/// A single extracted field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    Int(i64),
    Text(String),
}

/// The fields extracted from one matched line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    fields: HashMap<String, Field>,
}

impl Sentence {
    /// Get a `{name:d}` field
    pub fn int(&self, name: &str) -> ParseResult<i64> {
        match self.fields.get(name) {
            Some(Field::Int(value)) => Ok(*value),
            Some(Field::Text(_)) => Err(ParseError::FieldType(name.to_string())),
            None => Err(ParseError::MissingField(name.to_string())),
        }
    }

    /// Get a `{name}` field
    pub fn text(&self, name: &str) -> ParseResult<&str> {
        match self.fields.get(name) {
            Some(Field::Text(value)) => Ok(value),
            Some(Field::Int(_)) => Err(ParseError::FieldType(name.to_string())),
            None => Err(ParseError::MissingField(name.to_string())),
        }
    }

    /// Get a field of either type
    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }
}

#[derive(Debug, Clone, Copy)]
enum Kind {
    Int,
    Text,
}

/// Build a parser that matches a line against a template string.
///
/// Placeholders are `{name}` for text and `{name:d}` for integers; everything
/// else must match literally. The whole line must match. Compiling the
/// template itself can fail, so construction is fallible.
pub fn sentence(template: &str) -> ParseResult<impl Fn(&str) -> ParseResult<Sentence>> {
    let (regex, kinds) = compile_template(template)?;
    let template = template.to_string();
    Ok(move |raw: &str| {
        let caps = regex
            .captures(raw)
            .ok_or_else(|| ParseError::TemplateMismatch {
                template: template.clone(),
                input: raw.to_string(),
            })?;
        let mut fields = HashMap::new();
        for (name, kind) in &kinds {
            let value = match caps.name(name) {
                Some(m) => m.as_str(),
                None => continue,
            };
            let field = match kind {
                Kind::Int => Field::Int(
                    value
                        .parse()
                        .map_err(|_| ParseError::Int(value.to_string()))?,
                ),
                Kind::Text => Field::Text(value.to_string()),
            };
            fields.insert(name.clone(), field);
        }
        Ok(Sentence { fields })
    })
}

/// Translate a template into an anchored regex with one named group per placeholder
fn compile_template(template: &str) -> ParseResult<(Regex, Vec<(String, Kind)>)> {
    let mut pattern = String::from("^");
    let mut kinds = Vec::new();
    let mut literal = String::new();
    let mut stream = template.chars();
    while let Some(c) = stream.next() {
        if c != '{' {
            literal.push(c);
            continue;
        }
        pattern.push_str(&regex::escape(&literal));
        literal.clear();
        let mut spec = String::new();
        loop {
            match stream.next() {
                Some('}') => break,
                Some(inner) => spec.push(inner),
                None => return Err(bad_template(template, "unterminated '{'")),
            }
        }
        let (name, kind) = match spec.split_once(':') {
            Some((name, "d")) => (name.to_string(), Kind::Int),
            Some((_, ty)) => {
                return Err(bad_template(template, &format!("unsupported type '{ty}'")));
            }
            None => (spec, Kind::Text),
        };
        if name.is_empty()
            || name.starts_with(|c: char| c.is_ascii_digit())
            || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(bad_template(template, &format!("invalid field name '{name}'")));
        }
        match kind {
            Kind::Int => pattern.push_str(&format!(r"(?P<{name}>-?\d+)")),
            Kind::Text => pattern.push_str(&format!(r"(?P<{name}>.+?)")),
        }
        kinds.push((name, kind));
    }
    pattern.push_str(&regex::escape(&literal));
    pattern.push('$');
    let regex = Regex::new(&pattern).map_err(|e| bad_template(template, &e.to_string()))?;
    Ok((regex, kinds))
}

fn bad_template(template: &str, reason: &str) -> ParseError {
    ParseError::BadTemplate {
        template: template.to_string(),
        reason: reason.to_string(),
    }
}
