use regex::{Captures, Regex};

use crate::error::Result;

const HEADER_LINE: &str = " * Version:           ";
const CONSTANT_NAME: &str = "WP_SMART_SLUG_VERSION";

/// Compiled matchers for the version header line and the version constant.
#[derive(Debug, Clone)]
pub struct VersionPatterns {
    header: Regex,
    constant: Regex,
}

/// Text produced by [`VersionPatterns::rewrite`].
#[derive(Debug, Clone, PartialEq)]
pub struct Rewrite {
    pub content: String,
    pub header_replacements: usize,
    pub constant_replacements: usize,
    pub previous_version: Option<String>,
}

impl VersionPatterns {
    pub fn new() -> Result<Self> {
        // `[^\r\n]*` keeps the rewrite on one line and leaves CRLF endings alone.
        let header = Regex::new(r"(?m)^[ \t]*\* Version:(?P<value>[^\r\n]*)")?;
        let constant = Regex::new(&format!(
            r"define\('{}', '(?P<value>[^']*)'\);",
            CONSTANT_NAME
        ))?;

        tracing::debug!("Header pattern: {}", header.as_str());
        tracing::debug!("Constant pattern: {}", constant.as_str());

        Ok(Self { header, constant })
    }

    pub fn header_pattern(&self) -> &str {
        self.header.as_str()
    }

    pub fn constant_pattern(&self) -> &str {
        self.constant.as_str()
    }

    /// Replaces every header line and every constant definition with `version`.
    ///
    /// Header lines are rewritten whole, to ` * Version:` plus fixed padding,
    /// whatever their indentation was. The version is inserted literally; `$`
    /// is never treated as a group reference.
    pub fn rewrite(&self, content: &str, version: &str) -> Rewrite {
        let previous_version = self
            .constant
            .captures(content)
            .or_else(|| self.header.captures(content))
            .map(|caps| caps["value"].trim().to_string());

        let mut header_replacements = 0;
        let content = self.header.replace_all(content, |_: &Captures| {
            header_replacements += 1;
            format!("{}{}", HEADER_LINE, version)
        });

        let mut constant_replacements = 0;
        let content = self.constant.replace_all(&content, |_: &Captures| {
            constant_replacements += 1;
            format!("define('{}', '{}');", CONSTANT_NAME, version)
        });

        Rewrite {
            content: content.into_owned(),
            header_replacements,
            constant_replacements,
            previous_version,
        }
    }
}
