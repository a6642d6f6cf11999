//! CPF normalization and check-digit validation.
//!
//! A CPF is eleven decimal digits, the last two of which are mod-11 check
//! digits over the preceding ones. Input may carry the usual `.` and `-`
//! separators (`123.456.789-09`); nothing else is tolerated.

use std::fmt;

pub const CPF_LENGTH: usize = 11;

const SEPARATORS: [char; 2] = ['.', '-'];

/// Strips the `.` and `-` separators. Any other character is left in place
/// so that the digit gate rejects it.
pub fn normalize(raw: &str) -> String {
    raw.chars().filter(|c| !SEPARATORS.contains(c)).collect()
}

/// Returns whether `raw` is a structurally valid CPF. Total: never panics,
/// malformed input is simply `false`.
pub fn validate(raw: &str) -> bool {
    Cpf::parse(raw).is_some()
}

/// The pair of check digits derived from the leading digits of a CPF.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckDigits {
    pub first: u8,
    pub second: u8,
}

impl CheckDigits {
    /// Computes both check digits. The second pass weights the tenth digit as
    /// supplied, not the computed first digit; a mismatch there already fails
    /// acceptance on the first digit.
    pub fn compute(digits: &[u8; CPF_LENGTH]) -> Self {
        Self {
            first: check_digit(&digits[..9], 10),
            second: check_digit(&digits[..10], 11),
        }
    }

    pub fn matches(&self, digits: &[u8; CPF_LENGTH]) -> bool {
        digits[9] == self.first && digits[10] == self.second
    }
}

fn check_digit(digits: &[u8], top_weight: u32) -> u8 {
    let sum: u32 = digits
        .iter()
        .zip((2..=top_weight).rev())
        .map(|(&d, weight)| u32::from(d) * weight)
        .sum();

    match sum % 11 {
        rem if rem < 2 => 0,
        rem => (11 - rem) as u8,
    }
}

/// A CPF that passed every validation gate, held in normalized form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cpf {
    normalized: String,
}

impl Cpf {
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = normalize(raw);

        if normalized.len() != CPF_LENGTH {
            return None;
        }

        if !normalized.bytes().all(|b| b.is_ascii_digit()) || normalized.parse::<u64>().is_err()
        {
            return None;
        }

        let mut digits = [0u8; CPF_LENGTH];
        for (slot, b) in digits.iter_mut().zip(normalized.bytes()) {
            *slot = b - b'0';
        }

        // Repeated digits satisfy the checksum for some values (all zeros).
        if digits.iter().all(|&d| d == digits[0]) {
            return None;
        }

        if !CheckDigits::compute(&digits).matches(&digits) {
            return None;
        }

        Some(Self { normalized })
    }

    /// The eleven digits without separators.
    pub fn as_str(&self) -> &str {
        &self.normalized
    }

    /// Renders the conventional `ddd.ddd.ddd-dd` form.
    pub fn formatted(&self) -> String {
        let n = &self.normalized;
        format!("{}.{}.{}-{}", &n[..3], &n[3..6], &n[6..9], &n[9..])
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalized)
    }
}

impl AsRef<str> for Cpf {
    fn as_ref(&self) -> &str {
        &self.normalized
    }
}
