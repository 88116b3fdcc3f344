//! Template rendering.
//!
//! Placeholder syntax is `{NAME}` where `NAME` is an identifier; `{{` and
//! `}}` produce literal braces. Any other use of a brace is an error, so a
//! body that renders successfully never carries an unresolved marker.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

use crate::error::RenderError;
use crate::params::Params;
use crate::template::Template;

/// Strip the common leading whitespace of all non-blank lines.
///
/// Only spaces and tabs count as indentation. Whitespace-only lines are
/// emptied and do not count toward the margin.
pub fn dedent(text: &str) -> String {
    let indent = |line: &str| line.len() - line.trim_start_matches([' ', '\t']).len();
    let is_blank = |line: &str| line.trim_matches([' ', '\t', '\r']).is_empty();

    let margin = text
        .split('\n')
        .filter(|line| !is_blank(*line))
        .map(indent)
        .min()
        .unwrap_or(0);

    text.split('\n')
        .map(|line| {
            if is_blank(line) {
                ""
            } else {
                &line[margin..]
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

enum Segment<'a> {
    Text(&'a str),
    Placeholder(&'a str),
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

fn parse(body: &str) -> Result<Vec<Segment<'_>>, RenderError> {
    let bytes = body.as_bytes();
    let mut segments = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'{' if bytes.get(i + 1) == Some(&b'{') => {
                segments.push(Segment::Text(&body[start..=i]));
                i += 2;
                start = i;
            }
            b'}' if bytes.get(i + 1) == Some(&b'}') => {
                segments.push(Segment::Text(&body[start..=i]));
                i += 2;
                start = i;
            }
            b'{' => {
                let close = body[i + 1..]
                    .find(|c| c == '}' || c == '{' || c == '\n')
                    .map(|rel| i + 1 + rel)
                    .filter(|&end| bytes[end] == b'}')
                    .ok_or(RenderError::UnclosedPlaceholder { offset: i })?;
                let name = &body[i + 1..close];
                if !is_identifier(name) {
                    return Err(RenderError::InvalidPlaceholder {
                        offset: i,
                        name: name.to_string(),
                    });
                }
                segments.push(Segment::Text(&body[start..i]));
                segments.push(Segment::Placeholder(name));
                i = close + 1;
                start = i;
            }
            b'}' => return Err(RenderError::UnmatchedBrace { offset: i }),
            _ => i += 1,
        }
    }
    segments.push(Segment::Text(&body[start..]));
    Ok(segments)
}

/// Placeholder names referenced by `body`, in order of first use.
pub fn placeholders(body: &str) -> Result<Vec<String>, RenderError> {
    let mut names: Vec<String> = Vec::new();
    for segment in parse(body)? {
        if let Segment::Placeholder(name) = segment {
            if !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
        }
    }
    Ok(names)
}

/// Replace every placeholder in `body` with the literal form of its value.
pub fn substitute(body: &str, params: &Params) -> Result<String, RenderError> {
    let mut out = String::with_capacity(body.len());
    for segment in parse(body)? {
        match segment {
            Segment::Text(text) => out.push_str(text),
            Segment::Placeholder(name) => {
                let value = params
                    .get(name)
                    .ok_or_else(|| RenderError::MissingParameter {
                        placeholder: name.to_string(),
                    })?;
                out.push_str(&value.to_string());
            }
        }
    }
    Ok(out)
}

/// Docstring block prepended to every generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub title: String,
    pub date: NaiveDate,
    pub description: String,
    pub provenance: String,
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\"\"\"")?;
        writeln!(f, "Title: {}", self.title)?;
        writeln!(f, "Date: {}", self.date.format("%Y-%m-%d"))?;
        writeln!(f, "Description: {}", self.description)?;
        writeln!(f, "{}", self.provenance)?;
        writeln!(f, "\"\"\"")
    }
}

/// A fully rendered source file, not yet written anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rendered {
    pub title: String,
    pub content: String,
}

/// Render `template` with `params` into a complete source file.
pub fn render(
    template: &Template,
    params: &Params,
    date: NaiveDate,
    provenance: &str,
) -> Result<Rendered, RenderError> {
    let body = substitute(&dedent(template.code), params)?;
    let header = Header {
        title: template.title(),
        date,
        description: template.description.to_string(),
        provenance: provenance.to_string(),
    };
    Ok(Rendered {
        title: header.title.clone(),
        content: format!("{header}{}", body.trim_start_matches('\n')),
    })
}
