use crate::{BigUnsigned, Error, Result};
use std::convert::TryFrom;
use std::ops::RangeInclusive;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq)]
/// Result of a timed exponentiation
pub struct TimedPower {
    pub value: BigUnsigned,
    pub elapsed: Duration,
}

impl TimedPower {
    /// Elapsed wall-clock time in seconds
    pub fn seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Computes `base^exponent`, measuring the time spent on a monotonic clock
///
/// The clock covers both building `base` and the exponentiation itself.
/// Negative inputs are rejected with [`Error::InvalidInput`].
///
/// ```rust
/// use big_unsigned::compute_power_timed;
///
/// let timed = compute_power_timed(5, 5).unwrap();
///
/// assert_eq!("3125", timed.value.to_string());
/// assert!(timed.seconds() >= 0.0);
/// ```
pub fn compute_power_timed(base: i64, exponent: i64) -> Result<TimedPower> {
    let _span = tracing::debug_span!("compute_power_timed", base, exponent).entered();

    let start = Instant::now();
    let value = BigUnsigned::try_from(base)?.try_power(exponent)?;
    let elapsed = start.elapsed();

    tracing::debug!(
        digits = value.len(),
        seconds = elapsed.as_secs_f64(),
        "power computed"
    );

    Ok(TimedPower { value, elapsed })
}

#[derive(Debug, Clone, PartialEq)]
/// Accepted input ranges of a host application
///
/// The core accepts any non-negative input; hosts that want to keep result
/// sizes small check their inputs against bounds like these first.
///
/// ```rust
/// use big_unsigned::{Error, InputBounds};
///
/// assert_eq!(Ok(()), InputBounds::REFERENCE.check(100, 0));
/// assert_eq!(
///     Err(Error::OutOfBounds { base: 0, exponent: 3 }),
///     InputBounds::REFERENCE.check(0, 3)
/// );
/// ```
pub struct InputBounds {
    pub base: RangeInclusive<i64>,
    pub exponent: RangeInclusive<i64>,
}

impl InputBounds {
    pub const REFERENCE: InputBounds = InputBounds {
        base: 1..=100,
        exponent: 0..=100,
    };

    pub fn check(&self, base: i64, exponent: i64) -> Result<()> {
        if self.base.contains(&base) && self.exponent.contains(&exponent) {
            Ok(())
        } else {
            Err(Error::OutOfBounds { base, exponent })
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Human readable summary of one timed exponentiation
///
/// Renders two lines, the equation and the computation time with six decimals.
pub struct PowerReport {
    pub base: i64,
    pub exponent: i64,
    pub timed: TimedPower,
}

impl PowerReport {
    /// Runs `compute_power_timed` and keeps the inputs next to the result
    pub fn compute(base: i64, exponent: i64) -> Result<PowerReport> {
        let timed = compute_power_timed(base, exponent)?;

        Ok(PowerReport {
            base,
            exponent,
            timed,
        })
    }

    /// Renders the report as a delimited log entry headed by `timestamp`
    ///
    /// The timestamp is formatted by the caller, the report only places it.
    pub fn block<T: std::fmt::Display>(&self, timestamp: T) -> String {
        format!(
            "{rule}\n{}\n{}\n{rule}\n\n",
            timestamp,
            self,
            rule = BLOCK_RULE
        )
    }
}

const BLOCK_RULE: &str = "=====================";

impl std::fmt::Display for PowerReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}^{} = {}", self.base, self.exponent, self.timed.value)?;
        write!(f, "Computation time: {:.6} seconds", self.timed.seconds())
    }
}
