//! The utility scorer: one product, one query, one number.
//!
//! A score of [`DISQUALIFIED`] means a hard filter failed; any non-negative
//! value is accumulated text relevance (zero = eligible, no phrase match).

use crate::normalize::to_comparable;
use crate::product::Product;
use crate::query::Query;

/// Sentinel returned when any hard filter fails. Not an error: it is a normal
/// scoring outcome consumed by the ranking engine's threshold.
pub const DISQUALIFIED: f64 = -1.0;

/// Score one product against one query.
///
/// Hard filters are checked in a fixed order and the first failure
/// disqualifies outright; there is no partial credit and failures do not
/// accumulate. Survivors earn `+1` for every (token, field) containment, a
/// token may hit several fields and a field may be hit by several tokens.
#[must_use]
pub fn score(product: &Product, query: &Query) -> f64 {
    let filters = query.filters();

    if let Some(min) = filters.price_min {
        if min > product.price {
            return DISQUALIFIED;
        }
    }
    if let Some(max) = filters.price_max {
        if max < product.price {
            return DISQUALIFIED;
        }
    }
    if filters.free_shipping_only && !product.is_shipping_free() {
        return DISQUALIFIED;
    }
    if let Some(max) = filters.max_shipping_time {
        if max < product.shipping_time {
            return DISQUALIFIED;
        }
    }
    if filters.available_only && !product.is_available() {
        return DISQUALIFIED;
    }
    if let Some(min) = filters.min_rating {
        if min > product.rating {
            return DISQUALIFIED;
        }
    }

    let mut utility = 0.0;
    for token in tokenize(&query.phrase) {
        let token = to_comparable(&token);
        for field in product.text_fields().into_iter().flatten() {
            if to_comparable(field).contains(&token) {
                utility += 1.0;
            }
        }
    }
    utility
}

/// Split a phrase into match tokens.
///
/// Characters other than whitespace (including vertical tab), ASCII letters,
/// and digits are stripped, then each maximal whitespace run becomes one
/// separator. Trailing empty
/// tokens are dropped but leading ones are kept, and an empty or
/// all-whitespace phrase yields exactly one empty token. An empty token is a
/// substring of every present field, so such phrases still score (typically
/// +4); callers upstream rely on that quirk.
fn tokenize(phrase: &str) -> Vec<String> {
    let mut tokens = vec![String::new()];
    let mut in_separator = false;
    for c in phrase.chars() {
        // Separator class is [ \t\n\x0B\f\r]; vertical tab is not covered
        // by is_ascii_whitespace.
        if c.is_ascii_whitespace() || c == '\x0B' {
            if !in_separator {
                tokens.push(String::new());
                in_separator = true;
            }
        } else if c.is_ascii_alphanumeric() {
            // Unwrap is fine: `tokens` always holds at least one entry.
            tokens.last_mut().unwrap().push(c);
            in_separator = false;
        }
        // Everything else is stripped without ending the current token.
    }
    while tokens.len() > 1 && tokens.last().is_some_and(|t| t.is_empty()) {
        tokens.pop();
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mug() -> Product {
        Product {
            name: Some("Café Mug".to_string()),
            kind: Some("mug".to_string()),
            brand: Some("Acme".to_string()),
            price: 10.0,
            stock: 2,
            description: Some("ceramic cup".to_string()),
            rating: 4.5,
            shipping_price: 0.0,
            shipping_time: 1,
            ..Product::default()
        }
    }

    fn phrase(text: &str) -> Query {
        Query { phrase: text.to_string(), ..Query::default() }
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(tokenize("cafe mug"), vec!["cafe", "mug"]);
        assert_eq!(tokenize("  a   b "), vec!["", "a", "b"]);
        assert_eq!(tokenize("c@fe-mug!"), vec!["cfemug"]);
        assert_eq!(tokenize(""), vec![""]);
        assert_eq!(tokenize("   "), vec![""]);
    }

    #[test]
    fn test_vertical_tab_separates_tokens() {
        assert_eq!(tokenize("red\x0Bmug"), vec!["red", "mug"]);
        assert_eq!(tokenize("\x0B"), vec![""]);
    }

    #[test]
    fn test_cafe_mug_scenario() {
        // Rating 4.5 >= 4.0 so the product qualifies. Token "cafe" hits the
        // normalized name (+1); token "mug" hits name and type (+2).
        let query = Query { min_rating: 4.0, ..phrase("cafe mug") };
        assert_eq!(score(&mug(), &query), 3.0);
    }

    #[test]
    fn test_each_hard_filter_disqualifies() {
        let p = mug();
        let cases = [
            Query { price_min: 50.0, ..Query::default() },
            Query { price_max: 5.0, ..Query::default() },
            Query { max_shipping_time: 1, ..Query::default() }, // vs a slow product below
            Query { min_rating: 4.9, ..Query::default() },
        ];
        assert_eq!(score(&p, &cases[0]), DISQUALIFIED);
        assert_eq!(score(&p, &cases[1]), DISQUALIFIED);
        assert_eq!(score(&p, &cases[3]), DISQUALIFIED);

        let slow = Product { shipping_time: 7, ..mug() };
        assert_eq!(score(&slow, &cases[2]), DISQUALIFIED);

        let paid_shipping = Product { shipping_price: 3.0, ..mug() };
        let q = Query { free_shipping_only: true, ..Query::default() };
        assert_eq!(score(&paid_shipping, &q), DISQUALIFIED);

        let sold_out = Product { stock: 0, ..mug() };
        let q = Query { available_only: true, ..Query::default() };
        assert_eq!(score(&sold_out, &q), DISQUALIFIED);
    }

    #[test]
    fn test_sentinel_is_binary_not_cumulative() {
        // Several failing filters still yield exactly -1.
        let sold_out_dud = Product { stock: 0, rating: 1.0, shipping_price: 9.0, ..mug() };
        let q = Query {
            free_shipping_only: true,
            available_only: true,
            min_rating: 4.0,
            price_max: 5.0,
            ..phrase("cafe mug")
        };
        assert_eq!(score(&sold_out_dud, &q), DISQUALIFIED);
    }

    #[test]
    fn test_disqualification_ignores_phrase_relevance() {
        let q = Query { price_max: 5.0, ..phrase("cafe mug ceramic acme") };
        assert_eq!(score(&mug(), &q), DISQUALIFIED);
    }

    #[test]
    fn test_boundary_values_qualify() {
        // Filters are strict comparisons: equality passes.
        let q = Query { price_min: 10.0, price_max: 10.0, min_rating: 4.5, max_shipping_time: 1, ..Query::default() };
        assert!(score(&mug(), &q) >= 0.0);
    }

    #[test]
    fn test_empty_phrase_scores_plus_one_per_field() {
        // The empty token is a substring of every present field.
        assert_eq!(score(&mug(), &phrase("")), 4.0);
        assert_eq!(score(&mug(), &phrase("   ")), 4.0);
    }

    #[test]
    fn test_leading_whitespace_adds_empty_token() {
        // " mug" tokenizes to ["", "mug"]: +4 for the empty token, +2 for "mug".
        assert_eq!(score(&mug(), &phrase(" mug")), 6.0);
    }

    #[test]
    fn test_missing_fields_never_match_and_never_fault() {
        let bare = Product { name: None, kind: None, brand: None, description: None, ..mug() };
        assert_eq!(score(&bare, &phrase("")), 0.0);
        assert_eq!(score(&bare, &phrase("mug")), 0.0);
    }

    #[test]
    fn test_diacritic_and_case_invariance() {
        let plain = mug();
        let accented = Product {
            name: Some("CAFÉ MÜG".to_string()),
            kind: Some("MÛG".to_string()),
            ..mug()
        };
        // Accented query against the plain product and vice versa land on
        // the same normalized comparison.
        assert_eq!(score(&plain, &phrase("café")), score(&plain, &phrase("cafe")));
        assert_eq!(score(&accented, &phrase("cafe mug")), score(&plain, &phrase("cafe mug")));
    }

    #[test]
    fn test_token_matches_count_per_field_without_dedup() {
        let q = phrase("mug mug");
        // Each "mug" token hits name and type independently.
        assert_eq!(score(&mug(), &q), 4.0);
    }

    #[test]
    fn test_eligible_with_no_match_scores_zero() {
        assert_eq!(score(&mug(), &phrase("zeppelin")), 0.0);
    }
}
