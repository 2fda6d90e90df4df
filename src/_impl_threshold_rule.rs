use crate::ThresholdRule;
use std::convert::TryFrom;
use std::fmt::{Display, Error, Formatter};

impl ThresholdRule {
    /// Compute the next value of a node from its threshold-shifted weighted input
    /// (`excitation`) and its `current` value.
    ///
    /// The rules only differ when `excitation` is exactly zero; see `ThresholdRule`.
    pub fn apply(self, excitation: f64, current: bool) -> bool {
        if excitation < 0.0 {
            false
        } else if excitation > 0.0 {
            true
        } else {
            match self {
                ThresholdRule::Split => current,
                ThresholdRule::Negative => false,
                ThresholdRule::Positive => true,
            }
        }
    }
}

impl TryFrom<&str> for ThresholdRule {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "split" => Ok(ThresholdRule::Split),
            "negative" => Ok(ThresholdRule::Negative),
            "positive" => Ok(ThresholdRule::Positive),
            _ => Err(format!("String \"{}\" is not a valid threshold rule.", value)),
        }
    }
}

impl Display for ThresholdRule {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match self {
            ThresholdRule::Split => write!(f, "split"),
            ThresholdRule::Negative => write!(f, "negative"),
            ThresholdRule::Positive => write!(f, "positive"),
        }
    }
}
