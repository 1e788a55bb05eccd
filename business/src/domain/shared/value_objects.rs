use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

static PRODUCT_CODE: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]{1,128}$").ok());

/// Represents a catalog product identifier.
/// This is the value encoded in the product's QR code and the key of a cart line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(String);

impl ProductId {
    /// Creates a new ProductId from any type that can be converted into a String.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a fresh identifier for a newly created product.
    pub fn generate() -> Self {
        Self(format!("product_{}", Uuid::new_v4().simple()))
    }

    /// Parses a scanned or user-supplied code.
    ///
    /// Surrounding whitespace is ignored. Returns `None` when the code is empty
    /// or contains characters that never appear in generated identifiers.
    pub fn parse(raw: &str) -> Option<Self> {
        let code = raw.trim();
        let valid = PRODUCT_CODE
            .as_ref()
            .is_some_and(|re| re.is_match(code));

        valid.then(|| Self(code.to_string()))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_product_id_from_str() {
        let product_id = ProductId::new("product_123");
        assert_eq!(product_id.as_str(), "product_123");
    }

    #[test]
    fn should_display_product_id() {
        let product_id = ProductId::new("p1");
        assert_eq!(format!("{}", product_id), "p1");
    }

    #[test]
    fn should_compare_product_ids_for_equality() {
        assert_eq!(ProductId::new("same"), ProductId::from("same"));
        assert_ne!(ProductId::new("same"), ProductId::new("other"));
    }

    #[test]
    fn should_generate_parseable_ids() {
        let generated = ProductId::generate();

        assert!(generated.as_str().starts_with("product_"));
        assert_eq!(ProductId::parse(generated.as_str()), Some(generated));
    }

    #[test]
    fn should_trim_scanned_code() {
        let parsed = ProductId::parse("  product_abc\n");
        assert_eq!(parsed, Some(ProductId::new("product_abc")));
    }

    #[test]
    fn should_reject_empty_code() {
        assert!(ProductId::parse("").is_none());
        assert!(ProductId::parse("   ").is_none());
    }

    #[test]
    fn should_reject_code_with_foreign_characters() {
        assert!(ProductId::parse("https://example.com/p1").is_none());
        assert!(ProductId::parse("p 1").is_none());
    }
}
