use billsplit_domain::{MatchStrategy, ShareRounding};
use billsplit_infrastructure::PayloadFormat;
use std::env;
use thiserror::Error;

pub const MATCH_STRATEGY_VAR: &str = "BILLSPLIT_MATCH_STRATEGY";
pub const SHARE_ROUNDING_VAR: &str = "BILLSPLIT_SHARE_ROUNDING";
pub const INPUT_FORMAT_VAR: &str = "BILLSPLIT_INPUT_FORMAT";

#[derive(Debug, Error, PartialEq, Eq)]
#[error("{var}={value} is not recognized; expected one of: {expected}")]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
    pub expected: &'static str,
}

/// Interpreter configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InterpreterConfig {
    pub match_strategy: MatchStrategy,
    pub share_rounding: ShareRounding,
    /// `None` means detect from the payload keys.
    pub input_format: Option<PayloadFormat>,
}

impl InterpreterConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|var| env::var(var).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let match_strategy = lookup(MATCH_STRATEGY_VAR)
            .map(|value| parse_match_strategy(&value))
            .transpose()?
            .unwrap_or_default();
        let share_rounding = lookup(SHARE_ROUNDING_VAR)
            .map(|value| parse_share_rounding(&value))
            .transpose()?
            .unwrap_or_default();
        let input_format = lookup(INPUT_FORMAT_VAR)
            .map(|value| parse_input_format(&value))
            .transpose()?;

        Ok(Self {
            match_strategy,
            share_rounding,
            input_format,
        })
    }
}

pub fn parse_match_strategy(value: &str) -> Result<MatchStrategy, ConfigError> {
    match value.trim() {
        "order" => Ok(MatchStrategy::OrderPreserving),
        "largest" => Ok(MatchStrategy::LargestFirst),
        _ => Err(ConfigError {
            var: MATCH_STRATEGY_VAR,
            value: value.to_owned(),
            expected: "order, largest",
        }),
    }
}

pub fn parse_share_rounding(value: &str) -> Result<ShareRounding, ConfigError> {
    match value.trim() {
        "per-participant" => Ok(ShareRounding::PerParticipant),
        "zero-sum" => Ok(ShareRounding::ZeroSum),
        _ => Err(ConfigError {
            var: SHARE_ROUNDING_VAR,
            value: value.to_owned(),
            expected: "per-participant, zero-sum",
        }),
    }
}

pub fn parse_input_format(value: &str) -> Result<PayloadFormat, ConfigError> {
    match value.trim() {
        "ui" => Ok(PayloadFormat::Ui),
        "wire" => Ok(PayloadFormat::Wire),
        _ => Err(ConfigError {
            var: INPUT_FORMAT_VAR,
            value: value.to_owned(),
            expected: "ui, wire",
        }),
    }
}
