use crate::model::BillSplitState;
use billsplit_domain::{
    InputValidator, InvalidInput, Participant, ParticipantBalance, SettlementMatcher,
    ShareCalculator, SplitResult,
};

/// Runs one bill split: normalize input, compute shares, match payments.
#[derive(Clone, Copy, Debug, Default)]
pub struct BillSplitService {
    calculator: ShareCalculator,
    matcher: SettlementMatcher,
}

impl BillSplitService {
    pub fn new(calculator: ShareCalculator, matcher: SettlementMatcher) -> Self {
        Self {
            calculator,
            matcher,
        }
    }

    pub fn calculate(&self, state: &BillSplitState) -> Result<Vec<SplitResult>, InvalidInput> {
        let participants = state
            .participants
            .iter()
            .enumerate()
            .map(|(position, input)| input.to_participant(position))
            .collect::<Result<Vec<Participant>, _>>()?;

        if state.num_people != participants.len() {
            tracing::warn!(
                num_people = state.num_people,
                member_count = participants.len(),
                "Declared participant count differs from supplied participants; using supplied"
            );
        }

        InputValidator::validate(&participants, state.split_mode)?;

        let shares = self
            .calculator
            .compute_shares(&participants, state.split_mode)?;

        let balances: Vec<ParticipantBalance> = participants
            .into_iter()
            .zip(shares)
            .map(|(participant, share)| {
                ParticipantBalance::new(participant.name, participant.paid, share)
            })
            .collect();

        let mut payments = self.matcher.compute_payments(&balances);

        let results: Vec<SplitResult> = balances
            .into_iter()
            .map(|balance| {
                let instructions = payments
                    .swap_remove(balance.name.as_str())
                    .unwrap_or_default();
                SplitResult::from_balance(balance, instructions)
            })
            .collect();

        tracing::debug!(
            policy = %state.split_mode,
            member_count = results.len(),
            "Bill split calculated"
        );

        Ok(results)
    }
}
