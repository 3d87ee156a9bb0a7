//! `{name}` placeholder substitution for prompt templates.
//!
//! `{{` and `}}` render as literal braces. Every placeholder in the template
//! must have a value, otherwise rendering fails.

use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("no value supplied for placeholder '{name}' at position {position}")]
    MissingValue { name: String, position: usize },

    #[error("unmatched '{{' at position {0}")]
    UnmatchedBrace(usize),

    #[error("empty placeholder '{{}}' at position {0}")]
    EmptyPlaceholder(usize),
}

pub fn render(template: &str, values: &HashMap<&str, &str>) -> Result<String, TemplateError> {
    let mut rendered = String::with_capacity(template.len());
    let mut chars = template.char_indices().peekable();

    while let Some((pos, ch)) = chars.next() {
        match ch {
            '{' if matches!(chars.peek(), Some((_, '{'))) => {
                chars.next();
                rendered.push('{');
            }
            '{' => {
                let mut name = String::new();
                loop {
                    match chars.next() {
                        Some((_, '}')) => break,
                        Some((_, c)) => name.push(c),
                        None => return Err(TemplateError::UnmatchedBrace(pos)),
                    }
                }

                let name = name.trim();
                if name.is_empty() {
                    return Err(TemplateError::EmptyPlaceholder(pos));
                }

                let value = values.get(name).ok_or_else(|| TemplateError::MissingValue {
                    name: name.to_string(),
                    position: pos,
                })?;
                rendered.push_str(value);
            }
            '}' => {
                if matches!(chars.peek(), Some((_, '}'))) {
                    chars.next();
                }
                rendered.push('}');
            }
            c => rendered.push(c),
        }
    }

    Ok(rendered)
}
