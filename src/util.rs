//! Unit formatting helpers

use alloy_primitives::U256;

/// Decimals of the native currency of EVM chains (wei per ether)
pub const ETHER_DECIMALS: usize = 18;

/// Format an integer amount with the given number of decimals
///
/// Trailing zeros of the fraction are dropped, but at least one fractional
/// digit is kept, so whole amounts read as `1.0`.
///
/// # Examples
///
/// ```
/// use estate_deploy::util::format_units;
/// use estate_deploy::alloy_primitives::U256;
///
/// assert_eq!(format_units(U256::from(1_500_000u64), 6), "1.5");
/// assert_eq!(format_units(U256::from(42u64), 0), "42");
/// assert_eq!(format_units(U256::from(1u64), 6), "0.000001");
/// ```
#[must_use]
pub fn format_units(amount: U256, decimals: usize) -> String {
    let digits = amount.to_string();
    if decimals == 0 {
        return digits;
    }

    let padded = format!("{digits:0>width$}", width = decimals + 1);
    let (whole, fraction) = padded.split_at(padded.len() - decimals);
    let fraction = fraction.trim_end_matches('0');

    if fraction.is_empty() {
        format!("{whole}.0")
    } else {
        format!("{whole}.{fraction}")
    }
}

/// Format a wei amount as ether
///
/// # Examples
///
/// ```
/// use estate_deploy::util::format_ether;
/// use estate_deploy::alloy_primitives::U256;
///
/// let one_ether = U256::from(10u64).pow(U256::from(18u64));
/// assert_eq!(format_ether(one_ether), "1.0");
/// assert_eq!(format_ether(U256::ZERO), "0.0");
/// ```
#[must_use]
pub fn format_ether(wei: U256) -> String {
    format_units(wei, ETHER_DECIMALS)
}
