use crate::{
    error::InvalidInput,
    model::{Participant, SplitPolicy},
};
use fxhash::FxHashSet;
use rust_decimal::Decimal;

/// Allowed distance between the percentage sum and 100.
pub const PERCENTAGE_SUM_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Policy preconditions checked before shares are computed.
pub struct InputValidator;

impl InputValidator {
    pub fn validate(participants: &[Participant], policy: SplitPolicy) -> Result<(), InvalidInput> {
        if participants.is_empty() {
            return Err(InvalidInput::NoParticipants);
        }

        let mut seen: FxHashSet<&str> = FxHashSet::default();
        for participant in participants {
            if !seen.insert(participant.name.as_str()) {
                return Err(InvalidInput::DuplicateName(participant.name.clone()));
            }
            if participant.paid.is_negative() {
                return Err(InvalidInput::NegativePaid {
                    name: participant.name.clone(),
                });
            }
        }

        if policy == SplitPolicy::Percentage {
            Self::validate_percentages(participants)?;
        }

        Ok(())
    }

    fn validate_percentages(participants: &[Participant]) -> Result<(), InvalidInput> {
        for participant in participants {
            let percentage = participant.percentage.unwrap_or(Decimal::ZERO);
            if percentage < Decimal::ZERO || percentage > Decimal::ONE_HUNDRED {
                return Err(InvalidInput::PercentageOutOfRange {
                    name: participant.name.clone(),
                    percentage,
                });
            }
        }

        let actual: Decimal = participants
            .iter()
            .map(|participant| participant.percentage.unwrap_or(Decimal::ZERO))
            .sum();
        if (actual - Decimal::ONE_HUNDRED).abs() > PERCENTAGE_SUM_TOLERANCE {
            tracing::warn!(
                reject_reason = "percentage_sum",
                member_count = participants.len(),
                percentage_sum = %actual,
                "Split input rejected"
            );
            return Err(InvalidInput::PercentageSum { actual });
        }

        Ok(())
    }
}
