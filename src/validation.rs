use crate::error::{PrepareError, Result};
use semver::Version;
use std::path::Path;

/// Checks that a `--version` value was supplied and parses as a semantic
/// version.
///
/// The parsed form is discarded; the manifest receives the caller's string
/// verbatim so that build metadata and pre-release tags keep their exact
/// spelling.
pub fn validate_version(value: Option<&str>) -> Result<&str> {
    let value = value.ok_or(PrepareError::MissingVersion)?;

    if value.trim().is_empty() {
        return Err(PrepareError::MissingVersion);
    }

    Version::parse(value)
        .map_err(|e| PrepareError::InvalidVersion(value.to_string(), e))?;

    Ok(value)
}

/// Checks that the manifest exists and is a file before any mutation starts.
pub fn validate_manifest_path(path: &Path) -> Result<()> {
    if !path.is_file() {
        return Err(PrepareError::ManifestNotFound(path.to_path_buf()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_semver() {
        assert_eq!(validate_version(Some("1.2.3")).unwrap(), "1.2.3");
    }

    #[test]
    fn accepts_prerelease_and_build_metadata() {
        assert!(validate_version(Some("2.0.0-rc.1")).is_ok());
        assert!(validate_version(Some("1.0.0+build.5")).is_ok());
    }

    #[test]
    fn rejects_missing_value() {
        assert!(matches!(
            validate_version(None),
            Err(PrepareError::MissingVersion)
        ));
        assert!(matches!(
            validate_version(Some("")),
            Err(PrepareError::MissingVersion)
        ));
    }

    #[test]
    fn rejects_non_semver() {
        assert!(matches!(
            validate_version(Some("1.2")),
            Err(PrepareError::InvalidVersion(..))
        ));
        assert!(matches!(
            validate_version(Some("not-a-version")),
            Err(PrepareError::InvalidVersion(..))
        ));
    }
}
