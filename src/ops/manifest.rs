//! The manifest mutation itself.
//!
//! Two strategies, tried in order:
//!
//! 1. **Line patch** — rewrite the `version = "..."` assignment inside
//!    `[package]` in place. Every other byte of the file is preserved exactly,
//!    including comments, key order, and whitespace.
//! 2. **Re-encode** — parse the whole document with `toml_edit` and set
//!    `package.version` structurally. Used when the patcher cannot locate the
//!    assignment (no `version` key yet, unusual formatting).

use crate::error::{PrepareError, Result};
use regex::Regex;
use std::fs;
use std::path::Path;
use toml_edit::{DocumentMut, Item, Value};

/// How the new manifest text was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Single line rewritten in place; the rest of the file is byte-identical.
    LinePatch,
    /// Full decode and re-encode through `toml_edit`.
    Reencode,
}

/// A computed (and possibly applied) version change.
#[derive(Debug)]
pub struct Update {
    /// Version string the manifest carried before, if any.
    pub previous: Option<String>,
    /// Complete new manifest text.
    pub new_content: String,
    pub strategy: Strategy,
}

/// Sets `package.version` in the manifest at `manifest_path`.
///
/// Returns `None` without touching the file when the manifest already carries
/// the requested version. With `dry_run` the change is computed and returned
/// but not written.
pub fn set_package_version(
    manifest_path: &Path,
    version: &str,
    dry_run: bool,
) -> Result<Option<Update>> {
    let content = fs::read_to_string(manifest_path)?;

    let update = match render_update(manifest_path, &content, version)? {
        Some(update) => update,
        None => return Ok(None),
    };

    if !dry_run {
        fs::write(manifest_path, &update.new_content)?;
        log::debug!("wrote {}", manifest_path.display());
    }

    Ok(Some(update))
}

fn render_update(manifest_path: &Path, content: &str, version: &str) -> Result<Option<Update>> {
    let patcher = VersionPatcher::new(content, version);
    if let Some((patched, previous)) = patcher.patch()? {
        if patched == content {
            log::debug!("manifest already at version {}", version);
            return Ok(None);
        }
        log::debug!("patched version line in place");
        return Ok(Some(Update {
            previous: Some(previous),
            new_content: patched,
            strategy: Strategy::LinePatch,
        }));
    }

    log::debug!(
        "no patchable version line in {}, re-encoding",
        manifest_path.display()
    );

    let mut doc: DocumentMut = content.parse()?;
    let Some(package) = doc.get("package").and_then(Item::as_table_like) else {
        return Err(PrepareError::MissingPackageTable(
            manifest_path.to_path_buf(),
        ));
    };

    let previous = package
        .get("version")
        .and_then(Item::as_str)
        .map(str::to_string);

    doc["package"]["version"] = Item::Value(Value::from(version));

    let new_content = doc.to_string();
    if new_content == content {
        return Ok(None);
    }

    Ok(Some(Update {
        previous,
        new_content,
        strategy: Strategy::Reencode,
    }))
}

/// Line-level patcher for the `version` assignment in `[package]`.
///
/// Tracks the current section while walking the file and rewrites only the
/// first matching assignment, keeping indentation, the `=` spacing, and any
/// trailing comment as found. Untouched lines are copied through with their
/// own terminator, so LF and CRLF files both survive byte-for-byte.
struct VersionPatcher<'a> {
    content: &'a str,
    version: &'a str,
}

impl<'a> VersionPatcher<'a> {
    fn new(content: &'a str, version: &'a str) -> Self {
        Self { content, version }
    }

    /// Returns the patched text and the previous version value, or `None` if
    /// no `version = "..."` assignment was found inside `[package]`.
    fn patch(&self) -> Result<Option<(String, String)>> {
        // Captures: (1) everything up to the value, (2/3) old value per quote
        // style, (4) trailing rest of the line.
        let re = Regex::new(r#"^(\s*version\s*=\s*)(?:"([^"]*)"|'([^']*)')(.*)$"#)?;

        let mut in_package = false;
        let mut previous = None;
        let mut result = String::with_capacity(self.content.len());

        for segment in self.content.split_inclusive('\n') {
            let (line, terminator) = Self::split_terminator(segment);
            let trimmed = line.trim();

            if Self::is_section_header(trimmed) {
                in_package = Self::is_package_header(trimmed);
                result.push_str(segment);
                continue;
            }

            if in_package && previous.is_none() {
                if let Some(caps) = re.captures(line) {
                    previous = Some(
                        caps.get(2)
                            .or_else(|| caps.get(3))
                            .map(|m| m.as_str().to_string())
                            .unwrap_or_default(),
                    );
                    result.push_str(&caps[1]);
                    result.push('"');
                    result.push_str(self.version);
                    result.push('"');
                    result.push_str(&caps[4]);
                    result.push_str(terminator);
                    continue;
                }
            }

            result.push_str(segment);
        }

        let Some(previous) = previous else {
            return Ok(None);
        };

        Ok(Some((result, previous)))
    }

    /// Splits a `split_inclusive` segment into the line content and its
    /// terminator (`"\n"`, `"\r\n"`, or `""` on the last line).
    fn split_terminator(segment: &str) -> (&str, &str) {
        let Some(rest) = segment.strip_suffix('\n') else {
            return (segment, "");
        };
        match rest.strip_suffix('\r') {
            Some(line) => (line, "\r\n"),
            None => (rest, "\n"),
        }
    }

    fn is_section_header(trimmed: &str) -> bool {
        trimmed.starts_with('[') && trimmed.ends_with(']')
    }

    fn is_package_header(trimmed: &str) -> bool {
        trimmed
            .strip_prefix('[')
            .and_then(|s| s.strip_suffix(']'))
            .is_some_and(|s| s.trim() == "package")
    }
}
