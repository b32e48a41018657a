//! Ether-denominated amount parsing and formatting.
//!
//! Both tokens use 18 decimals. Amounts travel as [`U256`] wei on the wire
//! and as decimal strings everywhere in the UI. Unit conversion goes through
//! `alloy_primitives::utils`; this module adds the input rules of the form.

use alloy_primitives::{U256, utils};

use super::error::BridgeError;

// ============================================================================
// Constants
// ============================================================================

/// Number of decimals of RUPX and BRUPX.
pub const ETHER_DECIMALS: usize = 18;

/// Decimal places shown for balances.
pub const DISPLAY_DECIMALS: usize = 4;

/// Placeholder balance used when nothing could be read.
pub const ZERO_BALANCE: &str = "0";

/// Whole-ether digits that always fit in 256-bit wei.
const MAX_WHOLE_DIGITS: usize = 59;

/// Half a display unit, for round-half-up.
const HALF_DISPLAY_UNIT: U256 = U256::from_limbs([50_000_000_000_000, 0, 0, 0]);

// ============================================================================
// Parsing
// ============================================================================

/// Parses a decimal string into wei, accepting zero.
fn parse_wei(input: &str) -> Result<U256, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("amount is empty".to_string());
    }
    if input.starts_with('-') {
        return Err("amount must not be negative".to_string());
    }

    let (whole, fraction) = input.split_once('.').unwrap_or((input, ""));
    let is_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if (whole.is_empty() && fraction.is_empty()) || !is_digits(whole) || !is_digits(fraction) {
        return Err(format!("'{input}' is not a decimal number"));
    }
    if fraction.len() > ETHER_DECIMALS {
        return Err(format!(
            "at most {ETHER_DECIMALS} decimal places are supported"
        ));
    }
    if whole.trim_start_matches('0').len() > MAX_WHOLE_DIGITS {
        return Err(format!("'{input}' is too large"));
    }

    utils::parse_ether(input).map_err(|e| format!("'{input}' is not a valid amount: {e}"))
}

/// Parses a user-entered ether amount into wei.
///
/// # Errors
///
/// Returns [`BridgeError::InvalidAmount`] if the input is empty, negative,
/// not a plain decimal number, has more than 18 fractional digits, overflows,
/// or is zero.
pub fn parse_ether(input: &str) -> Result<U256, BridgeError> {
    let wei = parse_wei(input).map_err(BridgeError::invalid_amount)?;
    if wei.is_zero() {
        return Err(BridgeError::invalid_amount("amount must be greater than zero"));
    }
    Ok(wei)
}

// ============================================================================
// Formatting
// ============================================================================

/// Formats wei as an ether decimal string with trailing zeros trimmed.
///
/// Always keeps one fractional digit: `1.0`, `0.5`, `12.000000000000000001`.
#[must_use]
pub fn format_ether(wei: U256) -> String {
    let formatted = utils::format_ether(wei);
    match formatted.split_once('.') {
        Some((whole, fraction)) => {
            let fraction = fraction.trim_end_matches('0');
            let fraction = if fraction.is_empty() { "0" } else { fraction };
            format!("{whole}.{fraction}")
        }
        None => format!("{formatted}.0"),
    }
}

/// Formats wei rounded to four decimal places.
#[must_use]
pub fn format_ether_display(wei: U256) -> String {
    let formatted = utils::format_ether(wei.saturating_add(HALF_DISPLAY_UNIT));
    let (whole, fraction) = formatted.split_once('.').unwrap_or((&formatted, ""));
    let fraction: String = fraction.chars().take(DISPLAY_DECIMALS).collect();
    format!("{whole}.{fraction:0<DISPLAY_DECIMALS$}")
}

/// Formats a stored decimal balance string for display.
///
/// Anything unparseable is shown as zero.
#[must_use]
pub fn display_balance(balance: &str) -> String {
    parse_wei(balance)
        .map(format_ether_display)
        .unwrap_or_else(|_| format_ether_display(U256::ZERO))
}

/// Returns `true` if the amount-input buffer may accept `c`.
#[must_use]
pub fn accepts_amount_char(current: &str, c: char) -> bool {
    c.is_ascii_digit() || (c == '.' && !current.contains('.'))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn ether(n: u64) -> U256 {
        U256::from(n) * U256::from(10).pow(U256::from(ETHER_DECIMALS))
    }

    #[rstest]
    #[case::integer("10", ether(10))]
    #[case::fraction("0.5", ether(1) / U256::from(2))]
    #[case::leading_dot(".25", ether(1) / U256::from(4))]
    #[case::trailing_dot("3.", ether(3))]
    #[case::padded(" 1.0 ", ether(1))]
    #[case::one_wei("0.000000000000000001", U256::from(1))]
    fn test_parse_ether_valid(#[case] input: &str, #[case] expected: U256) {
        assert_eq!(parse_ether(input).unwrap(), expected);
    }

    #[rstest]
    #[case::empty("")]
    #[case::dot(".")]
    #[case::negative("-1")]
    #[case::negative_fraction("-0.5")]
    #[case::letters("1e18")]
    #[case::two_dots("1.2.3")]
    #[case::too_precise("0.0000000000000000001")]
    #[case::too_precise_nonzero("1.0000000000000000001")]
    #[case::zero("0")]
    #[case::zero_fraction("0.000")]
    fn test_parse_ether_invalid(#[case] input: &str) {
        assert!(matches!(
            parse_ether(input),
            Err(BridgeError::InvalidAmount(_))
        ));
    }

    #[rstest]
    #[case::beyond_u256(80)]
    #[case::wraps_when_scaled(60)]
    fn test_parse_ether_overflow(#[case] digits: usize) {
        let err = parse_ether(&"9".repeat(digits)).unwrap_err();
        assert!(err.to_string().contains("too large"));
    }

    #[test]
    fn test_parse_ether_largest_whole_part() {
        let wei = parse_ether(&"9".repeat(MAX_WHOLE_DIGITS)).unwrap();
        assert_eq!(format_ether(wei), format!("{}.0", "9".repeat(MAX_WHOLE_DIGITS)));
    }

    #[test]
    fn test_negative_amount_message() {
        let err = parse_ether("-2").unwrap_err();
        assert!(err.to_string().contains("negative"));
    }

    #[rstest]
    #[case::zero(U256::ZERO, "0.0")]
    #[case::one(ether(1), "1.0")]
    #[case::half(ether(1) / U256::from(2), "0.5")]
    #[case::one_wei(U256::from(1), "0.000000000000000001")]
    #[case::mixed(ether(12) + U256::from(1), "12.000000000000000001")]
    fn test_format_ether(#[case] wei: U256, #[case] expected: &str) {
        assert_eq!(format_ether(wei), expected);
    }

    #[rstest]
    #[case::zero(U256::ZERO, "0.0000")]
    #[case::whole(ether(10), "10.0000")]
    #[case::rounds_down(parse_wei("1.23454").unwrap(), "1.2345")]
    #[case::rounds_up(parse_wei("1.23455").unwrap(), "1.2346")]
    #[case::carry(parse_wei("0.99999").unwrap(), "1.0000")]
    fn test_format_ether_display(#[case] wei: U256, #[case] expected: &str) {
        assert_eq!(format_ether_display(wei), expected);
    }

    #[test]
    fn test_display_balance() {
        assert_eq!(display_balance(ZERO_BALANCE), "0.0000");
        assert_eq!(display_balance("2.5"), "2.5000");
        assert_eq!(display_balance("garbage"), "0.0000");
    }

    #[test]
    fn test_format_then_parse_keeps_value() {
        let wei = parse_wei("123.456789").unwrap();
        assert_eq!(parse_wei(&format_ether(wei)).unwrap(), wei);
    }

    #[test]
    fn test_accepts_amount_char() {
        assert!(accepts_amount_char("", '1'));
        assert!(accepts_amount_char("1", '.'));
        assert!(!accepts_amount_char("1.5", '.'));
        assert!(!accepts_amount_char("1", 'a'));
        assert!(!accepts_amount_char("1", '-'));
    }
}
