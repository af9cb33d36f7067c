//! Coercion policy files.
//!
//! A policy is an [`Options`] record stored as TOML:
//!
//! ```toml
//! convert_strings = true
//! reflection = true
//! marshaler_check = false
//!
//! [fallback]
//! int = -1
//! ```
//!
//! Missing keys take their defaults.

use std::path::Path;

use fs_err as fs;

use crate::types::{CoerceError, Options};

impl Options {
    /// Parse a policy from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, CoerceError> {
        Ok(toml::from_str(content)?)
    }

    /// Render this policy as TOML.
    pub fn to_toml_string(&self) -> Result<String, CoerceError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load a policy file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CoerceError> {
        let path = path.as_ref();
        log::debug!("Loading coercion policy from {}", path.display());
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            CoerceError::config_error(format!("failed to parse {}: {}", path.display(), e))
        })
    }

    /// Write this policy to `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), CoerceError> {
        let path = path.as_ref();
        fs::write(path, self.to_toml_string()?)?;
        log::info!("Coercion policy saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Fallback, Flag};

    #[test]
    fn policy_save_and_load_roundtrip() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("coax.toml");

        let original = Options::new()
            .convert_strings()
            .without_marshaler_check()
            .with_fallback(-1isize);
        original.save(&path).unwrap();

        let loaded = Options::load(&path).unwrap();
        assert_eq!(original, loaded);
    }

    #[test]
    fn missing_keys_use_defaults() {
        let options = Options::from_toml_str("convert_strings = true\n").unwrap();
        assert!(options.has(Flag::ConvertStrings));
        assert!(options.uses_reflection());
        assert!(options.checks_marshaler());
        assert!(options.fallback().is_none());
    }

    #[test]
    fn fallback_table() {
        let policy = "[fallback]\nstring = \"n/a\"\n";
        let options = Options::from_toml_str(policy).unwrap();
        assert_eq!(options.fallback(), Some(&Fallback::String("n/a".into())));
    }

    #[test]
    fn invalid_policy_is_a_config_error() {
        let policy = "convert_strings = \"yes\"";
        let err = Options::from_toml_str(policy).unwrap_err();
        assert!(err.is_config_error());

        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("broken.toml");
        fs::write(&path, "reflection = 3").unwrap();
        let err = Options::load(&path).unwrap_err();
        assert!(err.to_string().contains("broken.toml"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = Options::load(tmp.path().join("nope.toml")).unwrap_err();
        assert_eq!(err.error_type(), "io_error");
    }
}
