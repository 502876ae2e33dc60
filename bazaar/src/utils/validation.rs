/// Validation utilities for addresses and displayed numbers

pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }
}

/// Validate an EVM contract or account address (`0x` followed by 40 hex digits).
pub fn validate_address(address: &str) -> ValidationResult {
    if address.is_empty() {
        return ValidationResult::err("Address is required");
    }

    let Some(digits) = address.strip_prefix("0x").or_else(|| address.strip_prefix("0X")) else {
        return ValidationResult::err("Address must start with 0x");
    };

    if digits.len() != 40 {
        return ValidationResult::err("Address must have 40 hex digits after 0x");
    }

    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return ValidationResult::err("Address can only contain hex digits");
    }

    ValidationResult::ok()
}

/// Format a price or discount for a table cell.
///
/// At most four decimals, trailing zeros trimmed, `-0` shown as `0`.
pub fn format_amount(value: f64) -> String {
    let formatted = format!("{:.4}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "" => "0".to_string(),
        other => other.to_string(),
    }
}

/// Format a discount for a table cell.
///
/// Like [`format_amount`], but a non-zero discount that would round to `0`
/// is shown in scientific notation so its sign stays visible.
pub fn format_discount(value: f64) -> String {
    match format_amount(value) {
        zero if zero == "0" && value != 0.0 => format!("{:.1e}", value),
        other => other,
    }
}
