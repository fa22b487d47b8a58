use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use validator::ValidationError;

lazy_static! {
    /// Regex for media URLs supplied by clients
    /// Must be an absolute http(s) URL without whitespace
    /// - Valid: "https://cdn.example.com/a.png", "http://img.host/x?y=1"
    /// - Invalid: "ftp://host/a.png", "javascript:alert(1)", "/relative.png"
    pub static ref MEDIA_URL_REGEX: Regex = Regex::new(r"^https?://[^\s/$.?#][^\s]*$").unwrap();

    /// Upper bound for NUMERIC(14, 2) money columns
    static ref MAX_MONEY: Decimal = Decimal::new(99_999_999_999_999, 2);
}

/// Money amounts must be positive, fit NUMERIC(14, 2) and carry at most two decimals.
pub fn validate_money(amount: &Decimal) -> Result<(), ValidationError> {
    if amount.is_sign_negative() || amount.is_zero() {
        return Err(ValidationError::new("positive_amount")
            .with_message("Amount must be greater than zero".into()));
    }
    if *amount > *MAX_MONEY {
        return Err(ValidationError::new("amount_too_large")
            .with_message("Amount exceeds the supported maximum".into()));
    }
    if amount.normalize().scale() > 2 {
        return Err(ValidationError::new("amount_precision")
            .with_message("Amount must have at most two decimal places".into()));
    }
    Ok(())
}

/// Rejects strings made only of whitespace (length checks alone accept them).
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("Must not be blank".into()));
    }
    Ok(())
}
