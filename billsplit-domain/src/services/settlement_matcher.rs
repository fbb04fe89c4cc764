use crate::model::{Money, ParticipantBalance, PaymentInstruction, PaymentsByDebtor};

/// Order in which debtors and creditors are walked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MatchStrategy {
    /// Walk both lists in the order participants were supplied.
    #[default]
    OrderPreserving,
    /// Walk both lists by descending outstanding amount. Ties keep supplied order.
    LargestFirst,
}

/// Remaining amounts below this are treated as settled.
pub fn settlement_epsilon() -> Money {
    Money::new(5, 3)
}

struct Position<'a> {
    name: &'a str,
    remaining: Money,
}

/// Settlement matching service
#[derive(Clone, Copy, Debug, Default)]
pub struct SettlementMatcher {
    strategy: MatchStrategy,
}

impl SettlementMatcher {
    pub fn new(strategy: MatchStrategy) -> Self {
        Self { strategy }
    }

    /// Matches debtors against creditors with a greedy two-pointer walk.
    ///
    /// Every debtor gets an entry in the returned map, in supplied order, even when no
    /// creditor is left to pay. Settled participants and creditors get no entry.
    ///
    /// # Arguments
    /// * `balances` - Paid, share, and signed balance of each participant
    ///
    /// # Returns
    /// Payment instructions grouped by debtor name
    pub fn compute_payments(&self, balances: &[ParticipantBalance]) -> PaymentsByDebtor {
        let mut debtors: Vec<Position<'_>> = balances
            .iter()
            .filter(|entry| entry.balance.is_negative())
            .map(|entry| Position {
                name: &entry.name,
                remaining: -entry.balance,
            })
            .collect();
        let mut creditors: Vec<Position<'_>> = balances
            .iter()
            .filter(|entry| entry.balance.is_positive())
            .map(|entry| Position {
                name: &entry.name,
                remaining: entry.balance,
            })
            .collect();

        let mut payments: PaymentsByDebtor = debtors
            .iter()
            .map(|debtor| (debtor.name.to_owned(), Vec::new()))
            .collect();

        if self.strategy == MatchStrategy::LargestFirst {
            debtors.sort_by(|a, b| b.remaining.cmp(&a.remaining));
            creditors.sort_by(|a, b| b.remaining.cmp(&a.remaining));
        }

        let epsilon = settlement_epsilon();
        let (mut i, mut j) = (0usize, 0usize);
        while i < debtors.len() && j < creditors.len() {
            let debtor = &mut debtors[i];
            let creditor = &mut creditors[j];

            let amount = debtor.remaining.min(creditor.remaining);
            let rounded = amount.round_to_cents();
            if !rounded.is_zero() {
                if let Some(instructions) = payments.get_mut(debtor.name) {
                    instructions.push(PaymentInstruction {
                        to: creditor.name.to_owned(),
                        amount: rounded,
                    });
                }
            }

            debtor.remaining -= amount;
            creditor.remaining -= amount;

            if debtor.remaining < epsilon {
                i += 1;
            }
            if creditor.remaining < epsilon {
                j += 1;
            }
        }

        let unmatched_debt = debtors[i..]
            .iter()
            .fold(Money::ZERO, |acc, d| acc.saturating_add(d.remaining));
        let unmatched_credit = creditors[j..]
            .iter()
            .fold(Money::ZERO, |acc, c| acc.saturating_add(c.remaining));
        if unmatched_debt >= Money::from_cents(1) || unmatched_credit >= Money::from_cents(1) {
            tracing::warn!(
                residue_kind = "rounding_residue",
                unmatched_debt = %unmatched_debt,
                unmatched_credit = %unmatched_credit,
                strategy = ?self.strategy,
                "Settlement finished with unmatched balance"
            );
        }

        tracing::debug!(
            member_count = balances.len(),
            debtor_count = debtors.len(),
            creditor_count = creditors.len(),
            instruction_count = payments.values().map(Vec::len).sum::<usize>(),
            strategy = ?self.strategy,
            "Settlement payments computed"
        );

        payments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use rust_decimal::{Decimal, prelude::ToPrimitive};

    #[fixture]
    fn matcher() -> SettlementMatcher {
        SettlementMatcher::default()
    }

    fn balances(entries: &[(&str, i64)]) -> Vec<ParticipantBalance> {
        entries
            .iter()
            .map(|(name, balance)| ParticipantBalance {
                name: (*name).to_owned(),
                paid: Money::ZERO,
                share: Money::ZERO,
                balance: Money::from_cents(*balance),
            })
            .collect()
    }

    fn flatten(payments: &PaymentsByDebtor) -> Vec<(String, String, i64)> {
        payments
            .iter()
            .flat_map(|(from, instructions)| {
                instructions.iter().map(move |instruction| {
                    let cents = (instruction.amount.as_decimal() * Decimal::ONE_HUNDRED)
                        .to_i64()
                        .unwrap_or_default();
                    (from.clone(), instruction.to.clone(), cents)
                })
            })
            .collect()
    }

    fn expected(entries: &[(&str, &str, i64)]) -> Vec<(String, String, i64)> {
        entries
            .iter()
            .map(|(from, to, cents)| ((*from).to_owned(), (*to).to_owned(), *cents))
            .collect()
    }

    #[rstest]
    #[case::single_pair(&[("A", 5_000), ("B", -5_000)], &[("B", "A", 5_000)])]
    #[case::one_creditor_two_debtors(
        &[("A", 3_000), ("B", -1_000), ("C", -2_000)],
        &[("B", "A", 1_000), ("C", "A", 2_000)]
    )]
    #[case::debtors_first(
        &[("B", -1_000), ("C", -2_000), ("A", 3_000)],
        &[("B", "A", 1_000), ("C", "A", 2_000)]
    )]
    #[case::debtor_split_across_creditors(
        &[("A", 1_000), ("B", 2_000), ("C", -3_000)],
        &[("C", "A", 1_000), ("C", "B", 2_000)]
    )]
    #[case::order_preserving_chain(
        &[("A", -1_000), ("B", -4_000), ("C", 3_000), ("D", 2_000)],
        &[("A", "C", 1_000), ("B", "C", 2_000), ("B", "D", 2_000)]
    )]
    #[case::all_settled(&[("A", 0), ("B", 0)], &[])]
    #[case::no_creditors(&[("A", -1_000), ("B", 0)], &[])]
    fn order_preserving_cases(
        matcher: SettlementMatcher,
        #[case] entries: &[(&str, i64)],
        #[case] transfers: &[(&str, &str, i64)],
    ) {
        let payments = matcher.compute_payments(&balances(entries));
        assert_eq!(flatten(&payments), expected(transfers));
    }

    #[rstest]
    fn every_debtor_gets_an_entry(matcher: SettlementMatcher) {
        let payments = matcher.compute_payments(&balances(&[
            ("A", 0),
            ("B", -1_000),
            ("C", 500),
            ("D", -500),
        ]));

        let debtors: Vec<&str> = payments.keys().map(String::as_str).collect();
        assert_eq!(debtors, vec!["B", "D"]);
        assert!(!payments.contains_key("A"));
        assert!(!payments.contains_key("C"));
        assert_eq!(payments["D"], Vec::new());
    }

    #[test]
    fn largest_first_pairs_biggest_balances() {
        let matcher = SettlementMatcher::new(MatchStrategy::LargestFirst);
        let payments = matcher.compute_payments(&balances(&[
            ("A", -1_000),
            ("B", -4_000),
            ("C", 1_000),
            ("D", 4_000),
        ]));

        assert_eq!(
            flatten(&payments),
            expected(&[("A", "C", 1_000), ("B", "D", 4_000)])
        );
        let debtors: Vec<&str> = payments.keys().map(String::as_str).collect();
        assert_eq!(debtors, vec!["A", "B"]);
    }

    #[rstest]
    fn sub_cent_residue_does_not_emit_instructions(matcher: SettlementMatcher) {
        let entries = vec![
            ParticipantBalance {
                name: "A".to_owned(),
                paid: Money::ZERO,
                share: Money::ZERO,
                balance: Money::new(10_003, 3),
            },
            ParticipantBalance {
                name: "B".to_owned(),
                paid: Money::ZERO,
                share: Money::ZERO,
                balance: Money::new(-10_000, 3),
            },
        ];

        let payments = matcher.compute_payments(&entries);

        assert_eq!(flatten(&payments), expected(&[("B", "A", 1_000)]));
    }

    #[rstest]
    fn leftover_credit_is_tolerated(matcher: SettlementMatcher) {
        let payments = matcher.compute_payments(&balances(&[("A", 10_001), ("B", -10_000)]));

        assert_eq!(flatten(&payments), expected(&[("B", "A", 10_000)]));
    }
}
