//! # Target-product flag defaults
//!
//! This crate maps a target product identifier (a board/hardware name
//! supplied by the build environment) to the compiler defines a dependent
//! native build target should receive. It is the portable core of a
//! build-system "defaults" module: the host build pipeline sources the
//! product name, calls [`resolve`], and merges the resulting flags into the
//! consuming target's compile properties.
//!
//! ## Architecture
//!
//! 1. **Mapping ([`resolve`]):** a pure, total function from product string
//!    to [`FlagSet`]. Unknown products yield an empty set, never an error.
//! 2. **Sourcing ([`source`]):** layered lookup of the product name from an
//!    optional TOML file and the `TARGET_PRODUCT` environment variable. Kept
//!    separate from the mapping so the mapping stays independently testable.
//!
//! Matching is exact and case-sensitive; no trimming or normalization is
//! applied to the incoming identifier.
//!
//! ## Example
//!
//! ```rust
//! use haldef_flags::resolve;
//!
//! let flags = resolve("salvator");
//! assert_eq!(flags.as_slice(), ["-DTARGET_PRODUCT_SALVATOR=1"]);
//! assert!(resolve("unknown-board").is_empty());
//! ```

mod error;
pub mod source;

pub use crate::error::{SourceError, SourceErrorExt};

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum_macros::{Display, EnumString};

/// Target products with board-specific compile-time definitions.
///
/// Parsing via [`FromStr`] is exact and case-sensitive; any other string is
/// simply not a recognized product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Product {
    Salvator,
    Kingfisher,
}

impl Product {
    /// All recognized target products, in mapping order.
    pub const ALL: [Self; 2] = [Self::Salvator, Self::Kingfisher];

    /// The preprocessor define emitted for this product.
    #[must_use]
    pub const fn cflag(self) -> &'static str {
        match self {
            Self::Salvator => "-DTARGET_PRODUCT_SALVATOR=1",
            Self::Kingfisher => "-DTARGET_PRODUCT_KINGFISHER=1",
        }
    }
}

/// An ordered list of compiler flags.
///
/// Flags keep insertion order and are not deduplicated; the resolver only
/// ever produces zero or one entry per call, so ordering questions never
/// arise in practice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlagSet(Vec<String>);

impl FlagSet {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends a flag, preserving insertion order.
    pub fn push(&mut self, flag: impl Into<String>) {
        self.0.push(flag.into());
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }
}

impl From<Vec<String>> for FlagSet {
    fn from(flags: Vec<String>) -> Self {
        Self(flags)
    }
}

impl IntoIterator for FlagSet {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a FlagSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Properties a defaults module contributes to its consumers.
///
/// The external build pipeline appends `cflags` to the consuming target's
/// own flag list; this crate only constructs the record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DefaultsProperties {
    pub cflags: FlagSet,
}

impl DefaultsProperties {
    /// Builds the defaults record for the given target product.
    #[must_use]
    pub fn for_product(product: &str) -> Self {
        Self { cflags: resolve(product) }
    }
}

/// Resolves the compiler defines for a target product identifier.
///
/// Total over all string inputs: the two recognized products map to their
/// single define, everything else (including the empty string) maps to an
/// empty [`FlagSet`]. Unknown input is not a fault.
#[must_use]
pub fn resolve(product: &str) -> FlagSet {
    let mut cflags = FlagSet::new();
    if let Ok(product) = Product::from_str(product) {
        cflags.push(product.cflag());
    }
    cflags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn salvator_maps_to_its_define() {
        assert_eq!(resolve("salvator").as_slice(), ["-DTARGET_PRODUCT_SALVATOR=1"]);
    }

    #[test]
    fn kingfisher_maps_to_its_define() {
        assert_eq!(resolve("kingfisher").as_slice(), ["-DTARGET_PRODUCT_KINGFISHER=1"]);
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert!(resolve("Salvator").is_empty());
        assert!(resolve("KINGFISHER").is_empty());
    }

    #[test]
    fn empty_and_unknown_products_resolve_to_nothing() {
        assert!(resolve("").is_empty());
        assert!(resolve("other_board").is_empty());
        assert!(resolve(" salvator").is_empty());
        assert!(resolve("salvator ").is_empty());
    }

    #[test]
    fn resolve_is_pure() {
        let first = resolve("salvator");
        let second = resolve("salvator");
        assert_eq!(first, second);
    }

    #[test]
    fn every_product_parses_back_from_its_display_form() {
        for product in Product::ALL {
            let parsed = product.to_string().parse::<Product>().unwrap();
            assert_eq!(parsed, product);
        }
    }

    #[test]
    fn defaults_properties_wrap_the_resolved_flags() {
        let props = DefaultsProperties::for_product("kingfisher");
        assert_eq!(props.cflags.len(), 1);
        assert_eq!(props.cflags.as_slice(), ["-DTARGET_PRODUCT_KINGFISHER=1"]);

        let props = DefaultsProperties::for_product("nope");
        assert!(props.cflags.is_empty());
    }
}
