//! Syntactic Bitcoin address validation.
//!
//! # Supported Formats
//! - Legacy P2PKH / P2SH: `1` or `3` followed by 25-34 Base58 characters
//! - Native SegWit (bech32): `bc1` followed by 39-59 lowercase alphanumerics
//!
//! # Limitations
//! Only the shape of the string is checked. Base58Check and bech32 checksums
//! are not verified, and the bech32 character set is approximated by
//! `[a-z0-9]`. Whether an address actually exists on chain is left to the
//! blockchain provider.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

/// Base58 alphabet without the ambiguous `0`, `O`, `I` and `l`.
static LEGACY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[13][a-km-zA-HJ-NP-Z1-9]{25,34}$").expect("static regex"));

static SEGWIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^bc1[a-z0-9]{39,59}$").expect("static regex"));

/// Address encoding family recognised by [`classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressKind {
    Legacy,
    Segwit,
}

/// Classify a candidate string, or `None` if it matches neither format.
pub fn classify(candidate: &str) -> Option<AddressKind> {
    if LEGACY.is_match(candidate) {
        Some(AddressKind::Legacy)
    } else if SEGWIT.is_match(candidate) {
        Some(AddressKind::Segwit)
    } else {
        None
    }
}

/// Returns true if `candidate` has the shape of a supported Bitcoin address.
pub fn is_valid_btc_address(candidate: &str) -> bool {
    classify(candidate).is_some()
}

/// Validate an arbitrary JSON value. Anything that is not a string is rejected.
pub fn validate_value(candidate: &Value) -> bool {
    candidate.as_str().is_some_and(is_valid_btc_address)
}
