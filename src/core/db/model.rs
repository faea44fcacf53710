use std::{fmt, str::FromStr};

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of fractional digits every [`Hours`] value carries.
pub const HOURS_SCALE: u32 = 2;

/// A fixed-point hour count, always held at exactly two fractional digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hours(Decimal);

#[derive(Debug, thiserror::Error)]
pub enum HoursError {
    #[error(transparent)]
    Parse(#[from] rust_decimal::Error),

    #[error("{0} is too large to carry two fractional digits")]
    TooLarge(Decimal),
}

impl Hours {
    /// Rounds half away from zero to two fractional digits. Values with too
    /// many integer digits to keep both fractional digits are rejected.
    pub fn new(value: Decimal) -> Result<Self, HoursError> {
        let mut scaled = value.round_dp_with_strategy(HOURS_SCALE, RoundingStrategy::MidpointAwayFromZero);
        scaled.rescale(HOURS_SCALE);
        if scaled.scale() != HOURS_SCALE {
            return Err(HoursError::TooLarge(value));
        }
        Ok(Hours(scaled))
    }
}

impl FromStr for Hours {
    type Err = HoursError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Hours::new(Decimal::from_str(s)?)
    }
}

impl fmt::Display for Hours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Hours {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid stored hours value {:?}: {}", value, e))
    }
}

impl From<Hours> for String {
    fn from(hours: Hours) -> Self {
        hours.to_string()
    }
}
