//! ## logline-core::template
//! **Compiled `%(field)s` format templates**
//!
//! Grammar, scanned left to right:
//! - `%(<name>)s`, `%(<name>)d` and `%(<name>)f` are placeholders. The
//!   conversion letter does not change the rendered text.
//! - `%(<name>)` followed by any other character is copied literally and
//!   scanning resumes after the `)`.
//! - An unterminated `%(` copies the rest of the template literally.
//! - `%` followed by any other character emits that character, so `%%` is
//!   a literal percent sign. A lone trailing `%` is dropped.
//!
//! Placeholder names must be identifiers. Names that are not built-in
//! attributes resolve to the event's own fields at render time.

use std::fmt;
use std::str::FromStr;

use crate::error::TemplateError;
use crate::field::{build_template, FieldName};
use crate::record::{Attribute, LogRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    Str,
    Int,
    Float,
}

impl Conversion {
    fn from_char(c: char) -> Option<Self> {
        match c {
            's' => Some(Conversion::Str),
            'd' => Some(Conversion::Int),
            'f' => Some(Conversion::Float),
            _ => None,
        }
    }

    fn as_char(self) -> char {
        match self {
            Conversion::Str => 's',
            Conversion::Int => 'd',
            Conversion::Float => 'f',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Field {
        attribute: Attribute,
        conversion: Conversion,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

impl Template {
    pub fn parse(source: &str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = source;
        let mut offset = 0;

        while let Some(pos) = rest.find('%') {
            literal.push_str(&rest[..pos]);
            let after = &rest[pos + 1..];

            let consumed = match after.chars().next() {
                None => {
                    rest = "";
                    break;
                }
                Some('(') => match after.find(')') {
                    None => {
                        literal.push_str(&rest[pos..]);
                        rest = "";
                        break;
                    }
                    Some(close) => {
                        let name = &after[1..close];
                        match after[close + 1..].chars().next().and_then(Conversion::from_char) {
                            Some(conversion) => {
                                if !is_identifier(name) {
                                    return Err(TemplateError::InvalidFieldName {
                                        name: name.to_string(),
                                        offset: offset + pos,
                                    });
                                }
                                if !literal.is_empty() {
                                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                                }
                                segments.push(Segment::Field {
                                    attribute: Attribute::from_name(name),
                                    conversion,
                                });
                                pos + close + 3
                            }
                            None => {
                                literal.push_str(&rest[pos..pos + close + 2]);
                                pos + close + 2
                            }
                        }
                    }
                },
                Some(c) => {
                    literal.push(c);
                    pos + 1 + c.len_utf8()
                }
            };

            offset += consumed;
            rest = &rest[consumed..];
        }

        literal.push_str(rest);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self {
            source: source.to_string(),
            segments,
        })
    }

    /// Compiles the template [`build_template`] makes from `fields`.
    ///
    /// Each field has to come out as its own placeholder, so names the
    /// grammar would otherwise copy as literal text (`a)b`) are rejected.
    pub fn from_fields(fields: &[FieldName]) -> Result<Self, TemplateError> {
        let mut offset = 0;
        for field in fields {
            if !is_identifier(field.as_str()) {
                return Err(TemplateError::InvalidFieldName {
                    name: field.to_string(),
                    offset,
                });
            }
            offset += field.placeholder().len() + 1;
        }
        Template::parse(&build_template(fields))
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Attributes named by placeholders, in template order.
    pub fn attributes(&self) -> impl Iterator<Item = &Attribute> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Field { attribute, .. } => Some(attribute),
            Segment::Literal(_) => None,
        })
    }

    pub fn placeholder_count(&self) -> usize {
        self.attributes().count()
    }

    pub fn uses(&self, attribute: &Attribute) -> bool {
        self.attributes().any(|a| a == attribute)
    }

    /// Renders one line, newline included.
    pub fn render_into(&self, record: &LogRecord, out: &mut String) {
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Field { attribute, .. } => record.write_attribute(attribute, out),
            }
        }
        out.push('\n');
    }

    pub fn render(&self, record: &LogRecord) -> String {
        let mut out = String::with_capacity(self.source.len() + record.message.len() + 64);
        self.render_into(record, &mut out);
        out
    }
}

impl FromStr for Template {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Template::parse(s)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Literal(text) => f.write_str(text),
            Segment::Field {
                attribute,
                conversion,
            } => write!(f, "%({}){}", attribute.as_str(), conversion.as_char()),
        }
    }
}
