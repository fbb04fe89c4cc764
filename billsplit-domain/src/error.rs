use rust_decimal::Decimal;
use thiserror::Error;

/// Input rejected before any share or payment is computed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("At least one participant is required")]
    NoParticipants,
    #[error("Unrecognized split policy '{0}'")]
    UnknownPolicy(String),
    #[error("Percentages must sum to 100 (found {actual})")]
    PercentageSum { actual: Decimal },
    #[error("Percentage for '{name}' must be between 0 and 100 (found {percentage})")]
    PercentageOutOfRange { name: String, percentage: Decimal },
    #[error("Amount paid by '{name}' must not be negative")]
    NegativePaid { name: String },
    #[error("Item '{description}' of '{name}' must not have a negative amount")]
    NegativeItemAmount { name: String, description: String },
    #[error("Participant name '{0}' is used more than once")]
    DuplicateName(String),
    #[error("Amount for '{name}' cannot be represented as a currency value")]
    AmountOutOfRange { name: String },
}
