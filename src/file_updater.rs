use std::path::{Path, PathBuf};

use crate::confirmation::{confirmation_lines, ConfirmationLine, CONFIRMATION_KEYS};
use crate::error::{Result, UpdateError};
use crate::patterns::{Rewrite, VersionPatterns};

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateReport {
    pub path: PathBuf,
    pub version: String,
    pub previous_version: Option<String>,
    pub header_replacements: usize,
    pub constant_replacements: usize,
    pub changed: bool,
    pub confirmation: Vec<ConfirmationLine>,
}

pub async fn update_file_version(
    path: &Path,
    version: &str,
    patterns: &VersionPatterns,
) -> Result<UpdateReport> {
    let content = read_text(path).await?;

    let Rewrite {
        content: updated_content,
        header_replacements,
        constant_replacements,
        previous_version,
    } = patterns.rewrite(&content, version);

    tracing::info!(
        "Replaced {} header line(s) and {} constant definition(s) in {:?}",
        header_replacements,
        constant_replacements,
        path
    );
    if let Some(previous) = &previous_version {
        tracing::info!("Previous version: {}", previous);
    }

    warn_on_missing(path, patterns, header_replacements, constant_replacements);

    let changed = content != updated_content;

    // Always rewritten, even when nothing matched.
    tokio::fs::write(path, &updated_content)
        .await
        .map_err(|e| UpdateError::io(path, e))?;
    let written = read_text(path).await?;

    Ok(UpdateReport {
        path: path.to_path_buf(),
        version: version.to_string(),
        previous_version,
        header_replacements,
        constant_replacements,
        changed,
        confirmation: confirmation_lines(&written, &CONFIRMATION_KEYS),
    })
}

async fn read_text(path: &Path) -> Result<String> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| UpdateError::io(path, e))?;

    String::from_utf8(bytes).map_err(|_| UpdateError::Decode {
        path: path.to_path_buf(),
    })
}

/// A pattern that matched nothing is not an error, only a warning on stderr.
fn warn_on_missing(
    path: &Path,
    patterns: &VersionPatterns,
    header_replacements: usize,
    constant_replacements: usize,
) {
    let counts = [
        (header_replacements, patterns.header_pattern()),
        (constant_replacements, patterns.constant_pattern()),
    ];

    for (count, pattern) in counts {
        if count == 0 {
            tracing::warn!("Pattern {:?} not found in {:?}", pattern, path);
        }
    }
}
