//! Share computation for the three split policies.
//!
//! Every share is rounded to the currency scale half away from zero. With
//! [`ShareRounding::ZeroSum`] the cents lost or gained by that rounding are handed back
//! deterministically so that the shares add up to the amount actually paid.

use crate::{
    error::InvalidInput,
    model::{Money, Participant, SplitPolicy},
};
use rust_decimal::{Decimal, prelude::ToPrimitive};

const ONE_HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// How per-share rounding residue is treated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ShareRounding {
    /// Each share is rounded on its own; the sum may drift from the total by a few cents.
    #[default]
    PerParticipant,
    /// Residual cents are redistributed so the shares sum exactly to the total paid.
    ZeroSum,
}

/// Share calculation service
#[derive(Clone, Copy, Debug, Default)]
pub struct ShareCalculator {
    rounding: ShareRounding,
}

impl ShareCalculator {
    pub fn new(rounding: ShareRounding) -> Self {
        Self { rounding }
    }

    /// Computes each participant's share of the total paid.
    ///
    /// The returned shares are aligned by position with `participants`. Percentage sums
    /// are not checked here; see [`crate::services::InputValidator`].
    pub fn compute_shares(
        &self,
        participants: &[Participant],
        policy: SplitPolicy,
    ) -> Result<Vec<Money>, InvalidInput> {
        if participants.is_empty() {
            return Err(InvalidInput::NoParticipants);
        }

        let total = participants
            .iter()
            .try_fold(Money::ZERO, |acc, participant| {
                acc.checked_add(participant.paid)
                    .ok_or_else(|| out_of_range(participant))
            })?;
        let weights: Vec<Decimal> = participants
            .iter()
            .map(|participant| policy_weight(participant, policy))
            .collect();

        let count = Decimal::from(participants.len());
        let exact: Vec<Decimal> = participants
            .iter()
            .zip(&weights)
            .map(|(participant, weight)| {
                let share = match policy {
                    SplitPolicy::Equal => Some(total.as_decimal() / count),
                    SplitPolicy::Percentage => total
                        .as_decimal()
                        .checked_mul(*weight / ONE_HUNDRED),
                    SplitPolicy::Solo => total.as_decimal().checked_mul(*weight),
                };
                share.ok_or_else(|| out_of_range(participant))
            })
            .collect::<Result<_, _>>()?;

        let mut shares: Vec<Money> = exact
            .iter()
            .map(|value| Money::from_decimal(*value).round_to_cents())
            .collect();

        if self.rounding == ShareRounding::ZeroSum && policy != SplitPolicy::Solo {
            distribute_residue(total, &exact, &weights, &mut shares);
        }

        tracing::debug!(
            member_count = participants.len(),
            policy = %policy,
            rounding = ?self.rounding,
            total = %total,
            "Shares computed"
        );

        Ok(shares)
    }
}

fn out_of_range(participant: &Participant) -> InvalidInput {
    tracing::warn!(
        reject_reason = "amount_overflow",
        name = %participant.name,
        "Split input rejected"
    );
    InvalidInput::AmountOutOfRange {
        name: participant.name.clone(),
    }
}

fn policy_weight(participant: &Participant, policy: SplitPolicy) -> Decimal {
    match policy {
        SplitPolicy::Equal => Decimal::ONE,
        SplitPolicy::Percentage => participant.percentage.unwrap_or(Decimal::ZERO),
        SplitPolicy::Solo => {
            if participant.is_payer.unwrap_or(false) {
                Decimal::ONE
            } else {
                Decimal::ZERO
            }
        }
    }
}

/// Hands the cents between `total` and the rounded share sum back one at a time.
///
/// Candidates are shares with a positive weight. When cents are missing, shares that were
/// rounded down the most receive them first; when there are cents too many, shares that
/// were rounded up the most give them back first. Ties keep input order.
fn distribute_residue(total: Money, exact: &[Decimal], weights: &[Decimal], shares: &mut [Money]) {
    let Some(rounded_sum) = Money::checked_sum(shares.iter().copied()) else {
        tracing::error!("Rounded share sum overflows; residue left in place");
        return;
    };
    let residue = total - rounded_sum;
    if residue.is_zero() {
        return;
    }

    let residue_cents = residue
        .as_decimal()
        .checked_mul(ONE_HUNDRED)
        .and_then(|cents| cents.to_i64());
    let Some(residue_cents) = residue_cents else {
        tracing::error!(
            residue = %residue,
            "Share rounding residue does not fit in cents"
        );
        return;
    };

    let direction: i64 = residue_cents.signum();
    let mut ranked: Vec<(usize, Decimal)> = weights
        .iter()
        .enumerate()
        .filter(|(_, weight)| **weight > Decimal::ZERO)
        .map(|(idx, _)| {
            let diff = shares[idx].as_decimal() - exact[idx];
            (idx, diff * Decimal::from(direction))
        })
        .collect();

    if ranked.is_empty() {
        tracing::warn!(
            residue = %residue,
            "No weighted share can absorb rounding residue"
        );
        return;
    }

    ranked.sort_by(|(a_idx, a_key), (b_idx, b_key)| a_key.cmp(b_key).then(a_idx.cmp(b_idx)));

    let adjustment_count = residue_cents.unsigned_abs() as usize;
    if adjustment_count > ranked.len() {
        tracing::warn!(
            adjustment_count,
            candidate_count = ranked.len(),
            residue = %residue,
            "Rounding residue exceeds candidate count; cycling adjustments"
        );
    }

    let step = Money::from_cents(direction);
    for (idx, _) in ranked.iter().cycle().take(adjustment_count) {
        shares[*idx] += step;
    }

    tracing::debug!(
        adjustment_count,
        residue = %residue,
        "Share rounding residue redistributed"
    );
}
