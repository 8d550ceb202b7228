//! RUT (Rol Único Tributario) validation
//!
//! Chilean national identity numbers have the shape `NNNNNNNN-C`: a 7 or 8 digit
//! body, optionally grouped with `.` thousand separators, followed by a hyphen
//! and a modulo-11 check character (`0-9` or `K`).

use serde::Serialize;

/// Smallest body accepted (7 digits, no leading zero)
const MIN_BODY: u32 = 1_000_000;
/// Largest body accepted (8 digits)
const MAX_BODY: u32 = 99_999_999;

/// Outcome category of a RUT validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RutStatus {
    /// Well formed and the check digit matches
    Valid,
    /// Nothing but whitespace was supplied
    Empty,
    /// Shape is not `NNNNNNNN-C`
    InvalidFormat,
    /// Shape is fine but the check digit does not match the body
    InvalidCheckDigit,
}

impl RutStatus {
    /// Translation key for the user-facing message
    pub fn message_key(self) -> &'static str {
        match self {
            RutStatus::Valid => "login.rut_valid",
            RutStatus::Empty => "login.rut_required",
            RutStatus::InvalidFormat => "login.rut_invalid_format",
            RutStatus::InvalidCheckDigit => "login.rut_invalid_check_digit",
        }
    }

    fn default_message(self) -> &'static str {
        match self {
            RutStatus::Valid => "Valid RUT",
            RutStatus::Empty => "RUT is required",
            RutStatus::InvalidFormat => "Invalid RUT format",
            RutStatus::InvalidCheckDigit => "Invalid RUT check digit",
        }
    }
}

/// Structured result of [`validate_rut`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RutValidation {
    pub valid: bool,
    pub message: String,
    pub status: RutStatus,
}

impl RutValidation {
    fn from_status(status: RutStatus) -> Self {
        Self {
            valid: status == RutStatus::Valid,
            message: status.default_message().to_string(),
            status,
        }
    }
}

/// A parsed RUT: numeric body and check character as written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ParsedRut {
    body: u32,
    check: char,
}

/// Validate a candidate RUT string
pub fn validate_rut(input: &str) -> RutValidation {
    let input = input.trim();
    if input.is_empty() {
        return RutValidation::from_status(RutStatus::Empty);
    }

    let Some(parsed) = parse(input) else {
        return RutValidation::from_status(RutStatus::InvalidFormat);
    };

    if compute_check_digit(parsed.body) == parsed.check {
        RutValidation::from_status(RutStatus::Valid)
    } else {
        RutValidation::from_status(RutStatus::InvalidCheckDigit)
    }
}

/// Compute the modulo-11 check character for a RUT body
///
/// Digits are weighted right to left with the cycle `2..=7`.
pub fn compute_check_digit(body: u32) -> char {
    let mut remaining = body;
    let mut weight = 2;
    let mut sum = 0;

    while remaining > 0 {
        sum += (remaining % 10) * weight;
        remaining /= 10;
        weight = if weight == 7 { 2 } else { weight + 1 };
    }

    match 11 - (sum % 11) {
        11 => '0',
        10 => 'K',
        digit => char::from_digit(digit, 10).unwrap_or('0'),
    }
}

/// Canonical form `NNNNNNNN-C` (no dots, uppercase `K`) of a valid RUT
pub fn normalize_rut(input: &str) -> Option<String> {
    let parsed = parse(input.trim())?;
    (compute_check_digit(parsed.body) == parsed.check)
        .then(|| format!("{}-{}", parsed.body, parsed.check))
}

/// Dotted display form `NN.NNN.NNN-C` of a valid RUT
pub fn format_rut(input: &str) -> Option<String> {
    let parsed = parse(input.trim())?;
    if compute_check_digit(parsed.body) != parsed.check {
        return None;
    }

    let digits = parsed.body.to_string();
    let mut grouped = String::with_capacity(digits.len() + 2);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    Some(format!("{grouped}-{}", parsed.check))
}

fn parse(input: &str) -> Option<ParsedRut> {
    let (body, check) = input.rsplit_once('-')?;

    let mut check_chars = check.chars();
    let check = check_chars.next()?.to_ascii_uppercase();
    if check_chars.next().is_some() || !(check.is_ascii_digit() || check == 'K') {
        return None;
    }

    let digits = strip_separators(body)?;
    if !(7..=8).contains(&digits.len())
        || digits.starts_with('0')
        || !digits.chars().all(|c| c.is_ascii_digit())
    {
        return None;
    }

    let body: u32 = digits.parse().ok()?;
    if !(MIN_BODY..=MAX_BODY).contains(&body) {
        return None;
    }

    Some(ParsedRut { body, check })
}

/// Remove `.` grouping, rejecting misplaced separators
fn strip_separators(body: &str) -> Option<String> {
    if !body.contains('.') {
        return Some(body.to_string());
    }

    let groups: Vec<&str> = body.split('.').collect();
    let (head, tail) = groups.split_first()?;
    if head.is_empty() || head.len() > 3 || tail.iter().any(|g| g.len() != 3) {
        return None;
    }

    Some(groups.concat())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_digit() {
        assert_eq!(compute_check_digit(12_345_678), '5');
        assert_eq!(compute_check_digit(11_111_111), '1');
        assert_eq!(compute_check_digit(7_654_321), '6');
        assert_eq!(compute_check_digit(10_000_013), 'K');
        assert_eq!(compute_check_digit(10_000_004), '0');
    }

    #[test]
    fn test_valid_ruts() {
        for rut in [
            "12345678-5",
            "12.345.678-5",
            "7654321-6",
            "7.654.321-6",
            "10000013-K",
            "10000013-k",
            "10000004-0",
            "  11111111-1  ",
        ] {
            let result = validate_rut(rut);
            assert!(result.valid, "{rut} should be valid");
            assert_eq!(result.status, RutStatus::Valid);
            assert_eq!(result.message, "Valid RUT");
        }
    }

    #[test]
    fn test_empty_rut() {
        let result = validate_rut("   ");
        assert!(!result.valid);
        assert_eq!(result.status, RutStatus::Empty);
        assert_eq!(result.message, "RUT is required");
    }

    #[test]
    fn test_invalid_format() {
        for rut in [
            "123456785",
            "12345678-",
            "-5",
            "12345678-55",
            "12345678-X",
            "123456-0",
            "123456789-2",
            "01234567-8",
            "12.34.5678-5",
            "1234.5678-5",
            ".345.678-5",
            "12,345,678-5",
            "abcdefgh-1",
            "12 345 678-5",
        ] {
            let result = validate_rut(rut);
            assert!(!result.valid, "{rut} should be rejected");
            assert_eq!(result.status, RutStatus::InvalidFormat, "{rut}");
        }
    }

    #[test]
    fn test_invalid_check_digit() {
        for rut in ["12345678-4", "12.345.678-K", "10000013-0", "11111111-2"] {
            let result = validate_rut(rut);
            assert!(!result.valid, "{rut} should be rejected");
            assert_eq!(result.status, RutStatus::InvalidCheckDigit, "{rut}");
            assert_eq!(result.message, "Invalid RUT check digit");
        }
    }

    #[test]
    fn test_normalize_rut() {
        assert_eq!(normalize_rut("12.345.678-5").as_deref(), Some("12345678-5"));
        assert_eq!(normalize_rut("10000013-k").as_deref(), Some("10000013-K"));
        assert_eq!(normalize_rut("12345678-4"), None);
        assert_eq!(normalize_rut("garbage"), None);
    }

    #[test]
    fn test_format_rut() {
        assert_eq!(format_rut("12345678-5").as_deref(), Some("12.345.678-5"));
        assert_eq!(format_rut("7654321-6").as_deref(), Some("7.654.321-6"));
        assert_eq!(format_rut("10000013-k").as_deref(), Some("10.000.013-K"));
        assert_eq!(format_rut("7654321-5"), None);
    }

    #[test]
    fn test_status_message_keys() {
        assert_eq!(RutStatus::Empty.message_key(), "login.rut_required");
        assert_eq!(
            RutStatus::InvalidCheckDigit.message_key(),
            "login.rut_invalid_check_digit"
        );
    }
}
