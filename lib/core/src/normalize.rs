//! Text normalization for diacritic- and case-insensitive comparison.
//!
//! Query tokens and product fields must go through the same normalization,
//! otherwise "Café" and "cafe" would never match each other.

/// Accented characters handled by the folding table.
const FOLD_FROM: &str =
    "ÀàÈèÌìÒòÙùÁáÉéÍíÓóÚúÝýÂâÊêÎîÔôÛûŶŷÃãÕõÑñÄäËëÏïÖöÜüŸÿÅåÇçŐőŰű";

/// Plain-ASCII replacements, positionally paired with [`FOLD_FROM`].
const FOLD_TO: &str =
    "AaEeIiOoUuAaEeIiOoUuYyAaEeIiOoUuYyAaOoNnAaEeIiOoUuYyAaCcOoUu";

/// Replace each accented character in the folding table with its plain-ASCII
/// counterpart. Characters outside the table pass through unchanged.
#[must_use]
pub fn fold_diacritics(text: &str) -> String {
    text.chars()
        .map(|c| {
            FOLD_FROM
                .chars()
                .position(|u| u == c)
                .and_then(|i| FOLD_TO.chars().nth(i))
                .unwrap_or(c)
        })
        .collect()
}

/// Fold diacritics and lowercase, producing the comparable form used for all
/// token/field containment checks.
#[inline]
#[must_use]
pub fn to_comparable(text: &str) -> String {
    fold_diacritics(text).to_lowercase()
}
