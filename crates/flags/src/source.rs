//! Build-environment sourcing for the flag resolver.
//!
//! The mapping in [`crate::resolve`] deliberately takes the product name as
//! a parameter; this module owns the lookup side. Values are layered the
//! usual way: an optional TOML file supplies defaults, and the
//! `TARGET_PRODUCT` environment variable overrides it.

use crate::error::{SourceError, SourceErrorExt};
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// Fixed configuration key the product name is read from.
///
/// The matching environment variable is `TARGET_PRODUCT`.
pub const TARGET_PRODUCT_KEY: &str = "target_product";

/// The slice of the build environment this crate consumes.
///
/// Unknown keys in the underlying store are ignored; a missing product name
/// behaves like an empty one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BuildEnv {
    pub target_product: String,
}

/// Loads the build environment from an optional TOML file plus environment
/// overrides.
///
/// The file is not required to exist; with neither file nor `TARGET_PRODUCT`
/// set, the product name defaults to the empty string (which resolves to no
/// flags).
///
/// # Errors
/// Returns [`SourceError::Config`] if the file is malformed or the layered
/// values cannot be deserialized.
pub fn load_build_env(path: Option<&Path>) -> Result<BuildEnv, SourceError> {
    load_with_env(path, Environment::default())
}

fn load_with_env(path: Option<&Path>, env: Environment) -> Result<BuildEnv, SourceError> {
    let mut builder = Config::builder()
        .set_default(TARGET_PRODUCT_KEY, "")
        .context("Failed to set the target product default")?;

    if let Some(path) = path {
        info!("Loading build environment from {}", path.display());
        builder = builder.add_source(File::from(path).required(false));
    }

    builder
        .add_source(env)
        .build()
        .context("Failed to build the environment config")?
        .try_deserialize::<BuildEnv>()
        .context("Failed to deserialize the build environment")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn fake_env(pairs: &[(&str, &str)]) -> Environment {
        let mut map = config::Map::new();
        for (key, value) in pairs {
            map.insert((*key).to_owned(), (*value).to_owned());
        }
        Environment::default().source(Some(map))
    }

    #[test]
    fn defaults_to_empty_product() {
        let env = load_with_env(None, fake_env(&[])).unwrap();
        assert_eq!(env, BuildEnv::default());
        assert_eq!(env.target_product, "");
    }

    #[test]
    fn environment_variable_supplies_the_product() {
        let env = load_with_env(None, fake_env(&[("TARGET_PRODUCT", "salvator")])).unwrap();
        assert_eq!(env.target_product, "salvator");
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-file.toml");
        let env = load_with_env(Some(&path), fake_env(&[])).unwrap();
        assert_eq!(env.target_product, "");
    }

    #[test]
    fn file_supplies_the_product() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("build.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "target_product = \"kingfisher\"").unwrap();

        let env = load_with_env(Some(&path), fake_env(&[])).unwrap();
        assert_eq!(env.target_product, "kingfisher");
    }

    #[test]
    fn environment_overrides_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("build.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "target_product = \"kingfisher\"").unwrap();

        let env =
            load_with_env(Some(&path), fake_env(&[("TARGET_PRODUCT", "salvator")])).unwrap();
        assert_eq!(env.target_product, "salvator");
    }

    #[test]
    fn malformed_file_reports_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("build.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "target_product = [not toml").unwrap();

        let err = load_with_env(Some(&path), fake_env(&[])).unwrap_err();
        assert!(matches!(err, SourceError::Config { .. }));
    }
}
