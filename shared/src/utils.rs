//! # Shared Utility Functions
//!
//! ## Address Formatting
//!
//! Functions for formatting contract and account addresses for display:
//! - [`format_address`] - Format address with ellipsis (first N and last M characters)
//! - [`truncate_address`] - `format_address` with the defaults used in the UI
//!
//! ```rust
//! use shared::utils::format_address;
//!
//! let address = "0xb47e3cd837ddf8e4c57f05d70ab865de6e193bbb";
//! assert_eq!(format_address(address, 6, 4), "0xb47e...3bbb");
//! ```

/// Format an address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// If the address is shorter than `prefix_len + suffix_len`, or is not ASCII,
/// it is returned as-is.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0xbc4ca0eda7647a8ab7c2061c2e118a18a936f13d";
/// assert_eq!(format_address(addr, 6, 4), "0xbc4c...f13d");
/// assert_eq!(format_address("short", 4, 4), "short");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let address_len = address.len();

    if !address.is_ascii()
        || address_len <= prefix_len + suffix_len
        || prefix_len >= address_len
        || suffix_len >= address_len
    {
        return address.to_string();
    }

    let prefix = &address[..prefix_len];
    let suffix = &address[address_len - suffix_len..];

    format!("{}...{}", prefix, suffix)
}

/// Format an address with a 6-character prefix (`0x` plus four digits) and a 4-character suffix.
///
/// ```rust
/// use shared::utils::truncate_address;
///
/// assert_eq!(truncate_address("0xed5af388653567af2f388e6224dc7c4b3241c544"), "0xed5a...c544");
/// ```
pub fn truncate_address(address: &str) -> String {
    format_address(address, 6, 4)
}
