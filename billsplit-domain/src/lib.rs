#![warn(clippy::uninlined_format_args)]

pub mod error;
pub mod model;
pub mod services;

pub use error::InvalidInput;
pub use model::{
    Item, Money, Participant, ParticipantBalance, PaymentInstruction, PaymentsByDebtor,
    SplitPolicy, SplitResult,
};
pub use services::{
    InputValidator, MatchStrategy, SettlementMatcher, ShareCalculator, ShareRounding,
};
