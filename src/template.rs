//! Caption template parsing and substitution.
//!
//! Templates use shell-style placeholders: `$index` and `$basename`, with
//! `${index}` / `${basename}` as the braced forms and `$$` as a literal
//! dollar sign. Substitution errors — an unknown placeholder name, an
//! unclosed brace, or a dangling `$` — surface per thumbnail, so one bad
//! template reference skips a file rather than aborting the run.
//!
//! ## Placeholders
//!
//! | Placeholder | Value |
//! |---|---|
//! | `$index` | zero-based position in enumeration order |
//! | `$basename` | file name with `.jpg` removed |

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TemplateError {
    #[error("Unknown placeholder: ${0}")]
    UnknownPlaceholder(String),
    #[error("Unclosed ${{ in template")]
    UnclosedBrace,
    #[error("Dangling $ in template (use $$ for a literal dollar sign)")]
    DanglingDollar,
}

/// A caption template, substituted once per thumbnail.
#[derive(Debug, Clone)]
pub struct CaptionTemplate {
    raw: String,
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

impl CaptionTemplate {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// Fill in `$index` and `$basename` for one thumbnail.
    pub fn substitute(&self, index: usize, basename: &str) -> Result<String, TemplateError> {
        let mut out = String::with_capacity(self.raw.len() + basename.len());
        let mut chars = self.raw.chars().peekable();

        while let Some(c) = chars.next() {
            if c != '$' {
                out.push(c);
                continue;
            }
            match chars.peek() {
                Some('$') => {
                    chars.next();
                    out.push('$');
                }
                Some('{') => {
                    chars.next();
                    let mut name = String::new();
                    loop {
                        match chars.next() {
                            Some('}') => break,
                            Some(c) => name.push(c),
                            None => return Err(TemplateError::UnclosedBrace),
                        }
                    }
                    out.push_str(&resolve(&name, index, basename)?);
                }
                Some(&c) if is_ident_start(c) => {
                    let mut name = String::new();
                    while let Some(&c) = chars.peek() {
                        if !is_ident_char(c) {
                            break;
                        }
                        name.push(c);
                        chars.next();
                    }
                    out.push_str(&resolve(&name, index, basename)?);
                }
                _ => return Err(TemplateError::DanglingDollar),
            }
        }
        Ok(out)
    }
}

fn resolve(name: &str, index: usize, basename: &str) -> Result<String, TemplateError> {
    match name {
        "index" => Ok(index.to_string()),
        "basename" => Ok(basename.to_string()),
        other => Err(TemplateError::UnknownPlaceholder(other.to_string())),
    }
}
