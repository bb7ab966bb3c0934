#![deny(clippy::all)]
// #![deny(clippy::pedantic)]

use std::cmp::Ordering;
use std::convert::TryFrom;
use std::ops::{Add, Mul};

#[macro_use]
mod r#macro;
mod error;
mod service;

#[cfg(feature = "rayon")]
mod rayon;
#[cfg(not(feature = "rayon"))]
mod not_rayon;

pub use error::{Error, InputError, ParseError, Result};
pub use service::{compute_power_timed, InputBounds, PowerReport, TimedPower};

const U128_DIGITS: usize = 39;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Arbitrary-precision unsigned integer stored as decimal digits
///
/// Digits are kept least-significant first and the most significant digit is
/// never zero, except for the value zero itself which is a single `0`.
///
/// ```rust
/// use big_unsigned::BigUnsigned;
///
/// let two = BigUnsigned::from(2u32);
/// let number = two.power(64).unwrap();
///
/// assert_eq!("18446744073709551616", number.to_string());
/// assert_eq!(20, number.len());
/// ```
pub struct BigUnsigned {
    digits: Vec<u8>,
}

impl BigUnsigned {
    /// Creates a BigUnsigned with the value 0
    ///
    /// ```rust
    /// use big_unsigned::BigUnsigned;
    ///
    /// assert_eq!("0", BigUnsigned::zero().to_string())
    /// ```
    pub fn zero() -> BigUnsigned {
        BigUnsigned { digits: vec![0] }
    }

    /// Creates a BigUnsigned with the value 1
    ///
    /// ```rust
    /// use big_unsigned::BigUnsigned;
    ///
    /// assert_eq!("1", BigUnsigned::one().to_string())
    /// ```
    pub fn one() -> BigUnsigned {
        BigUnsigned { digits: vec![1] }
    }

    fn from_integer(mut input: u128) -> BigUnsigned {
        if input == 0 {
            return Self::zero();
        }

        let mut digits = Vec::with_capacity(U128_DIGITS);
        while input > 0 {
            digits.push((input % 10) as u8);
            input /= 10;
        }

        BigUnsigned { digits }
    }

    pub fn is_zero(&self) -> bool {
        self.digits == [0]
    }

    /// Number of decimal digits
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Always false, the value zero still has one digit
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Decimal digits, least significant first
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// parses a plain decimal string to a `BigUnsigned`
    ///
    /// Leading zeros are dropped. Signs, whitespace and radix prefixes are
    /// rejected.
    ///
    /// ```rust
    /// use big_unsigned::{BigUnsigned, ParseError};
    ///
    /// let number = BigUnsigned::parse("000123").expect("invalid format");
    /// assert_eq!("123", number.to_string());
    ///
    /// assert_eq!(BigUnsigned::parse("-1"), Err(ParseError::InvalidDigit('-')));
    /// ```
    pub fn parse(input: &str) -> std::result::Result<BigUnsigned, ParseError> {
        if input.is_empty() {
            return Err(ParseError::Empty);
        }

        let mut digits = Vec::with_capacity(input.len());
        for c in input.chars().rev() {
            match c.to_digit(10) {
                Some(d) => digits.push(d as u8),
                None => return Err(ParseError::InvalidDigit(c)),
            }
        }

        Self::normalize(&mut digits);

        Ok(BigUnsigned { digits })
    }

    // operations

    /// Schoolbook addition, carrying from the least significant digit up
    ///
    /// ```rust
    /// use big_unsigned::BigUnsigned;
    ///
    /// let sum = BigUnsigned::from(999u32).add(&BigUnsigned::from(1u32));
    /// assert_eq!("1000", sum.to_string());
    /// ```
    pub fn add(&self, rhs: &BigUnsigned) -> BigUnsigned {
        let mut digits = Vec::with_capacity(self.len().max(rhs.len()) + 1);
        let mut left = self.digits.iter();
        let mut right = rhs.digits.iter();
        let mut carry = 0;

        loop {
            let (a, b) = (left.next(), right.next());
            if a.is_none() && b.is_none() && carry == 0 {
                break;
            }

            let sum = carry + a.copied().unwrap_or(0) + b.copied().unwrap_or(0);
            digits.push(sum % 10);
            carry = sum / 10;
        }

        BigUnsigned { digits }
    }

    /// Schoolbook long multiplication
    ///
    /// ```rust
    /// use big_unsigned::BigUnsigned;
    ///
    /// let product = BigUnsigned::from(123u32).multiply(&BigUnsigned::from(45u32));
    /// assert_eq!("5535", product.to_string());
    /// ```
    pub fn multiply(&self, rhs: &BigUnsigned) -> BigUnsigned {
        let mut digits = Vec::with_capacity(self.len() + rhs.len());
        Self::long_multiply(&self.digits, &rhs.digits, &mut digits);

        BigUnsigned { digits }
    }

    /// Calculates self to the power of `exponent` by repeated squaring
    ///
    /// Any value to the power of zero is one, zero included. Room for the
    /// result is reserved up front so that running out of memory is reported
    /// as [`Error::ResourceExhaustion`].
    ///
    /// ```rust
    /// use big_unsigned::BigUnsigned;
    ///
    /// assert_eq!("1024", BigUnsigned::from(2u8).power(10).unwrap().to_string());
    /// assert_eq!("1", BigUnsigned::zero().power(0).unwrap().to_string());
    /// assert_eq!("0", BigUnsigned::zero().power(u32::MAX).unwrap().to_string());
    /// ```
    pub fn power(&self, exponent: u32) -> Result<BigUnsigned> {
        if exponent == 0 || self.digits == [1] {
            return Ok(Self::one());
        }
        if self.is_zero() {
            return Ok(Self::zero());
        }

        let bound = self.power_digit_bound(exponent)?;
        let mut result = Self::reserve_digits(bound)?;
        let mut current = Self::reserve_digits(bound)?;
        let mut scratch = Vec::new();
        result.push(1);
        current.extend_from_slice(&self.digits);

        let mut remaining = exponent;
        loop {
            if remaining & 1 == 1 {
                Self::long_multiply(&result, &current, &mut scratch);
                std::mem::swap(&mut result, &mut scratch);
            }

            remaining >>= 1;
            // the last square would never be used
            if remaining == 0 {
                break;
            }

            Self::long_multiply(&current, &current, &mut scratch);
            std::mem::swap(&mut current, &mut scratch);
        }

        Ok(BigUnsigned { digits: result })
    }

    /// Upper bound on the digit count of `self^exponent`
    ///
    /// `self < (top + 1) * 10^(len - 1)`, so the power has at most
    /// `(len - 1) * exponent + ceil(exponent * log10(top + 1))` digits.
    fn power_digit_bound(&self, exponent: u32) -> Result<usize> {
        let top = self.digits.last().copied().unwrap_or(0);
        let leading = (f64::from(exponent) * f64::from(top + 1).log10()).ceil() as usize + 1;

        (self.len() - 1)
            .checked_mul(exponent as usize)
            .and_then(|tail| tail.checked_add(leading))
            .ok_or(Error::ResourceExhaustion { digits: None })
    }

    /// Same as `power` but takes a signed exponent, rejecting negative ones
    ///
    /// ```rust
    /// use big_unsigned::{BigUnsigned, Error, InputError};
    ///
    /// let three = BigUnsigned::from(3u8);
    ///
    /// assert_eq!("27", three.try_power(3).unwrap().to_string());
    /// assert_eq!(
    ///     three.try_power(-1),
    ///     Err(Error::InvalidInput(InputError::NegativeExponent(-1)))
    /// );
    /// ```
    pub fn try_power(&self, exponent: i64) -> Result<BigUnsigned> {
        if exponent < 0 {
            return Err(InputError::NegativeExponent(exponent).into());
        }

        let exponent =
            u32::try_from(exponent).map_err(|_| Error::ResourceExhaustion { digits: None })?;

        self.power(exponent)
    }

    fn reserve_digits(bound: usize) -> Result<Vec<u8>> {
        let mut digits = Vec::new();
        digits
            .try_reserve(bound)
            .map_err(|_| Error::ResourceExhaustion {
                digits: Some(bound),
            })?;

        Ok(digits)
    }

    /// `lhs` times a single digit, carry propagated past the last digit
    pub(crate) fn scalar_product(lhs: &[u8], digit: u8) -> Vec<u8> {
        let mut partial = Vec::with_capacity(lhs.len() + 1);
        let mut carry = 0;

        for &d in lhs {
            let product = carry + d * digit;
            partial.push(product % 10);
            carry = product / 10;
        }
        if carry > 0 {
            partial.push(carry);
        }

        partial
    }

    /// Adds `partial * 10^offset` into `total` in place
    pub(crate) fn add_shifted(total: &mut Vec<u8>, partial: &[u8], offset: usize) {
        if total.len() < offset {
            total.resize(offset, 0);
        }

        let mut carry = 0;
        let mut i = 0;
        while i < partial.len() || carry > 0 {
            let sum = carry
                + partial.get(i).copied().unwrap_or(0)
                + total.get(offset + i).copied().unwrap_or(0);

            match total.get_mut(offset + i) {
                Some(slot) => *slot = sum % 10,
                None => total.push(sum % 10),
            }
            carry = sum / 10;
            i += 1;
        }
    }

    /// Drops most significant zeros, keeping a single `0` for zero
    pub(crate) fn normalize(digits: &mut Vec<u8>) {
        while digits.len() > 1 && digits.last() == Some(&0) {
            digits.pop();
        }
        if digits.is_empty() {
            digits.push(0);
        }
    }
}

impl_uint!(u8, u16, u32, u64, u128, usize);
impl_int!(i8, i16, i32, i64, i128, isize);

impl TryFrom<&BigUnsigned> for u128 {
    type Error = Error;

    fn try_from(input: &BigUnsigned) -> Result<u128> {
        input.digits.iter().rev().try_fold(0u128, |acc, &d| {
            acc.checked_mul(10)
                .and_then(|acc| acc.checked_add(u128::from(d)))
                .ok_or(Error::Overflow)
        })
    }
}

impl TryFrom<&BigUnsigned> for u64 {
    type Error = Error;

    fn try_from(input: &BigUnsigned) -> Result<u64> {
        let wide = u128::try_from(input)?;
        u64::try_from(wide).map_err(|_| Error::Overflow)
    }
}

impl TryFrom<String> for BigUnsigned {
    type Error = ParseError;

    fn try_from(input: String) -> std::result::Result<Self, Self::Error> {
        Self::try_from(input.as_str())
    }
}

impl TryFrom<&str> for BigUnsigned {
    type Error = ParseError;

    fn try_from(input: &str) -> std::result::Result<Self, Self::Error> {
        BigUnsigned::parse(input)
    }
}

impl std::str::FromStr for BigUnsigned {
    type Err = ParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        BigUnsigned::parse(s)
    }
}

impl Default for BigUnsigned {
    fn default() -> BigUnsigned {
        Self::zero()
    }
}

impl Ord for BigUnsigned {
    fn cmp(&self, other: &Self) -> Ordering {
        self.len()
            .cmp(&other.len())
            .then_with(|| self.digits.iter().rev().cmp(other.digits.iter().rev()))
    }
}

impl PartialOrd for BigUnsigned {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add for BigUnsigned {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        BigUnsigned::add(&self, &rhs)
    }
}

impl<'a> Add<&'a BigUnsigned> for &'a BigUnsigned {
    type Output = BigUnsigned;

    fn add(self, rhs: Self) -> Self::Output {
        BigUnsigned::add(self, rhs)
    }
}

impl Mul for BigUnsigned {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl<'a> Mul<&'a BigUnsigned> for &'a BigUnsigned {
    type Output = BigUnsigned;

    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(rhs)
    }
}

impl std::fmt::Display for BigUnsigned {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.digits.is_empty() {
            return write!(f, "0");
        }

        let rendered: String = self
            .digits
            .iter()
            .rev()
            .map(|&d| char::from(b'0' + d))
            .collect();

        f.pad_integral(true, "", &rendered)
    }
}




#[cfg(test)]
mod power {
    use crate::{BigUnsigned, Error, InputError};

    fn pow(base: u32, exponent: u32) -> String {
        BigUnsigned::from(base).power(exponent).unwrap().to_string()
    }

    #[test]
    fn small_powers() {
        assert_eq!(pow(2, 2), "4");
        assert_eq!(pow(3, 3), "27");
        assert_eq!(pow(5, 5), "3125");
        assert_eq!(pow(2, 10), "1024");
        assert_eq!(pow(10, 5), "100000");
    }

    #[test]
    fn two_to_the_twentieth() {
        let result = BigUnsigned::from(2u8).power(20).unwrap();

        assert_eq!(result.to_string(), "1048576");
        assert_eq!(result.len(), 7)
    }

    #[test]
    fn zero_exponent() {
        for base in &[0u32, 1, 2, 99, 100] {
            assert_eq!(pow(*base, 0), "1")
        }
    }

    #[test]
    fn zero_base() {
        for exponent in 1..20 {
            assert_eq!(pow(0, exponent), "0")
        }
    }

    #[test]
    fn one_base() {
        for exponent in 0..50 {
            assert_eq!(pow(1, exponent), "1")
        }
    }

    #[test]
    fn hundred_to_the_hundredth() {
        let expected = format!("1{}", "0".repeat(200));

        assert_eq!(pow(100, 100), expected)
    }

    #[test]
    fn two_to_the_hundredth() {
        assert_eq!(pow(2, 100), "1267650600228229401496703205376")
    }

    #[test]
    fn no_leading_zero() {
        for base in 0..30u32 {
            for exponent in 0..30 {
                let result = BigUnsigned::from(base).power(exponent).unwrap();
                let top = *result.digits().last().unwrap();

                assert!(top != 0 || result.len() == 1)
            }
        }
    }

    #[test]
    fn law_of_exponents() {
        let base = BigUnsigned::from(7u8);

        for (e1, e2) in &[(13, 29), (64, 1), (0, 77), (50, 50)] {
            let combined = base.power(e1 + e2).unwrap();
            let split = base.power(*e1).unwrap() * base.power(*e2).unwrap();

            assert_eq!(combined, split)
        }
    }

    #[test]
    fn negative_exponent() {
        assert_eq!(
            BigUnsigned::from(2u8).try_power(-3),
            Err(Error::InvalidInput(InputError::NegativeExponent(-3)))
        )
    }

    #[test]
    fn exponent_too_large() {
        assert_eq!(
            BigUnsigned::from(2u8).try_power(i64::MAX),
            Err(Error::ResourceExhaustion { digits: None })
        )
    }

    #[test]
    fn zero_base_huge_exponent() {
        assert_eq!(BigUnsigned::zero().power(u32::MAX), Ok(BigUnsigned::zero()))
    }

    #[test]
    fn one_base_huge_exponent() {
        assert_eq!(BigUnsigned::one().power(u32::MAX), Ok(BigUnsigned::one()))
    }

    #[test]
    fn digit_bound_covers_result() {
        let ten = BigUnsigned::from(10u8);
        let two = BigUnsigned::from(2u8);

        // 10^100 has 101 digits, 2^100 has 31
        assert_eq!(ten.power_digit_bound(100), Ok(132));
        assert_eq!(two.power_digit_bound(100), Ok(49));
        assert!(ten.power(100).unwrap().len() <= 132);
        assert!(two.power(100).unwrap().len() <= 49)
    }

    #[test]
    fn reserve_failure() {
        assert_eq!(
            BigUnsigned::reserve_digits(usize::MAX),
            Err(Error::ResourceExhaustion {
                digits: Some(usize::MAX)
            })
        )
    }
}
