use serde::{Deserialize, Serialize};

/// A catalog entry supplied per ranking request.
///
/// Text fields are optional: upstream feeds occasionally omit them, and a
/// missing field simply never matches a query token. `utility` is derived,
/// request-scoped state set by the ranking engine; it is never serialized
/// and is overwritten on every scoring pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Product {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Product type (wire name `type`).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    /// Non-negative, currency-agnostic unit.
    #[serde(default)]
    pub price: f64,
    /// Units on hand.
    #[serde(default)]
    pub stock: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Conventionally 0.0 to 5.0, unenforced.
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub shipping_price: f64,
    /// Measured in days.
    #[serde(default)]
    pub shipping_time: u32,
    /// Utility for the query being processed. Computation artifact, not part
    /// of the product's identity.
    #[serde(skip)]
    pub utility: f64,
}

impl Product {
    #[inline]
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.stock > 0
    }

    #[inline]
    #[must_use]
    pub fn is_shipping_free(&self) -> bool {
        self.shipping_price == 0.0
    }

    /// The four free-text fields matched against query tokens, in the fixed
    /// order the scorer checks them.
    #[inline]
    pub(crate) fn text_fields(&self) -> [Option<&str>; 4] {
        [
            self.name.as_deref(),
            self.kind.as_deref(),
            self.brand.as_deref(),
            self.description.as_deref(),
        ]
    }
}
