//! Case-insensitive owner comparison
//!
//! Owner text is stored exactly as given, but every read that matches on an
//! owner (counting, listing, the no-op transfer check, the owner index)
//! goes through [`OwnerName`] so that all of them agree on what "the same
//! owner" means.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Owner text folded for comparison.
///
/// Folding lowercases every character, then applies the simple case folds
/// that lowercasing misses: final sigma becomes `σ`, long s becomes `s`, and
/// the Greek symbol variants become their letters. Characters are never
/// expanded, so `ß` and `ss` stay distinct. For ASCII this is plain
/// case-insensitive comparison. The empty name stands for "no owner".
///
/// # Examples
///
/// ```
/// use landreg_core::OwnerName;
///
/// assert_eq!(OwnerName::new("CvUT"), OwnerName::new("cvut"));
/// assert!(OwnerName::matches("CVUT", "cvut"));
/// assert!(OwnerName::new("").is_unowned());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct OwnerName(String);

impl OwnerName {
    /// Fold `owner` into its comparison form
    pub fn new(owner: &str) -> Self {
        OwnerName(Self::folded(owner).collect())
    }

    /// Compare two owner texts without allocating
    pub fn matches(a: &str, b: &str) -> bool {
        Self::folded(a).eq(Self::folded(b))
    }

    /// True for the name of unowned parcels
    pub fn is_unowned(&self) -> bool {
        self.0.is_empty()
    }

    /// Folded text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn folded(owner: &str) -> impl Iterator<Item = char> + '_ {
        owner.chars().flat_map(char::to_lowercase).map(fold_variant)
    }
}

/// Map lowercase letters with a distinct case fold onto it
fn fold_variant(c: char) -> char {
    match c {
        'ς' => 'σ',
        'ſ' => 's',
        'ϐ' => 'β',
        'ϑ' => 'θ',
        'ϕ' => 'φ',
        'ϖ' => 'π',
        'ϰ' => 'κ',
        'ϱ' => 'ρ',
        'ϵ' => 'ε',
        _ => c,
    }
}

impl fmt::Display for OwnerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
