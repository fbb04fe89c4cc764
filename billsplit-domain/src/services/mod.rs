pub mod input_validator;
pub mod settlement_matcher;
pub mod share_calculator;

pub use input_validator::{InputValidator, PERCENTAGE_SUM_TOLERANCE};
pub use settlement_matcher::{MatchStrategy, SettlementMatcher, settlement_epsilon};
pub use share_calculator::{ShareCalculator, ShareRounding};
