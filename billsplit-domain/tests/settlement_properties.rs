use billsplit_domain::{
    MatchStrategy, Money, Participant, ParticipantBalance, SettlementMatcher, ShareCalculator,
    ShareRounding, SplitPolicy,
};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn settle(
    participants: &[Participant],
    policy: SplitPolicy,
    calculator: ShareCalculator,
    matcher: SettlementMatcher,
) -> (Vec<ParticipantBalance>, billsplit_domain::PaymentsByDebtor) {
    let shares = calculator
        .compute_shares(participants, policy)
        .expect("shares should compute");
    let balances: Vec<ParticipantBalance> = participants
        .iter()
        .zip(shares)
        .map(|(participant, share)| {
            ParticipantBalance::new(participant.name.clone(), participant.paid, share)
        })
        .collect();
    let payments = matcher.compute_payments(&balances);
    (balances, payments)
}

fn participants_from_cents(cents: &[i64]) -> Vec<Participant> {
    cents
        .iter()
        .enumerate()
        .map(|(idx, cents)| Participant::new(format!("P{}", idx + 1), Money::from_cents(*cents)))
        .collect()
}

/// Splits 100 percent into `count` integral weights.
fn percentages(count: usize) -> Vec<Decimal> {
    let base = 100 / count as i64;
    let remainder = 100 % count as i64;
    (0..count as i64)
        .map(|idx| Decimal::from(base + i64::from(idx < remainder)))
        .collect()
}

#[test]
fn equal_split_between_two() {
    let participants = participants_from_cents(&[10_000, 0]);
    let (balances, payments) = settle(
        &participants,
        SplitPolicy::Equal,
        ShareCalculator::default(),
        SettlementMatcher::default(),
    );

    let shares: Vec<Money> = balances.iter().map(|b| b.share).collect();
    let signed: Vec<Money> = balances.iter().map(|b| b.balance).collect();
    assert_eq!(shares, vec![Money::from_cents(5_000), Money::from_cents(5_000)]);
    assert_eq!(signed, vec![Money::from_cents(5_000), Money::from_cents(-5_000)]);
    assert_eq!(payments.len(), 1);
    assert_eq!(payments["P2"].len(), 1);
    assert_eq!(payments["P2"][0].to, "P1");
    assert_eq!(payments["P2"][0].amount, Money::from_cents(5_000));
}

#[test]
fn percentage_split_sixty_forty() {
    let participants = vec![
        Participant::new("P1", Money::from_cents(15_000)).with_percentage(dec!(60)),
        Participant::new("P2", Money::ZERO).with_percentage(dec!(40)),
    ];
    let (balances, payments) = settle(
        &participants,
        SplitPolicy::Percentage,
        ShareCalculator::default(),
        SettlementMatcher::default(),
    );

    assert_eq!(balances[0].share, Money::from_cents(9_000));
    assert_eq!(balances[1].share, Money::from_cents(6_000));
    assert_eq!(balances[0].balance, Money::from_cents(6_000));
    assert_eq!(balances[1].balance, Money::from_cents(-6_000));
    assert_eq!(payments["P2"].len(), 1);
    assert_eq!(payments["P2"][0].amount, Money::from_cents(6_000));
}

#[test]
fn solo_split_with_payer_already_paid_needs_no_payments() {
    let participants = vec![
        Participant::new("P1", Money::from_cents(3_000)).with_payer(true),
        Participant::new("P2", Money::ZERO).with_payer(false),
        Participant::new("P3", Money::ZERO).with_payer(false),
    ];
    let (balances, payments) = settle(
        &participants,
        SplitPolicy::Solo,
        ShareCalculator::default(),
        SettlementMatcher::default(),
    );

    let shares: Vec<Money> = balances.iter().map(|b| b.share).collect();
    assert_eq!(shares, vec![Money::from_cents(3_000), Money::ZERO, Money::ZERO]);
    assert!(balances.iter().all(|b| b.balance.is_zero()));
    assert!(payments.is_empty());
}

#[test]
fn multi_party_settlement_pays_single_creditor() {
    let balances = vec![
        ParticipantBalance::new("A", Money::from_cents(3_000), Money::ZERO),
        ParticipantBalance::new("B", Money::ZERO, Money::from_cents(1_000)),
        ParticipantBalance::new("C", Money::ZERO, Money::from_cents(2_000)),
    ];
    let payments = SettlementMatcher::default().compute_payments(&balances);

    assert_eq!(payments["B"].len(), 1);
    assert_eq!(payments["C"].len(), 1);
    assert_eq!(payments["B"][0].amount, Money::from_cents(1_000));
    assert_eq!(payments["C"][0].amount, Money::from_cents(2_000));
    let received: Money = payments
        .values()
        .flatten()
        .filter(|instruction| instruction.to == "A")
        .map(|instruction| instruction.amount)
        .sum();
    assert_eq!(received, Money::from_cents(3_000));
}

fn policy_strategy() -> impl Strategy<Value = SplitPolicy> {
    prop_oneof![Just(SplitPolicy::Equal), Just(SplitPolicy::Percentage)]
}

fn match_strategy() -> impl Strategy<Value = MatchStrategy> {
    prop_oneof![
        Just(MatchStrategy::OrderPreserving),
        Just(MatchStrategy::LargestFirst)
    ]
}

fn weighted_participants(cents: &[i64]) -> Vec<Participant> {
    participants_from_cents(cents)
        .into_iter()
        .zip(percentages(cents.len()))
        .map(|(participant, pct)| participant.with_percentage(pct))
        .collect()
}

proptest! {
    #[test]
    fn shares_conserve_total_within_rounding(
        cents in prop::collection::vec(0i64..=1_000_000, 1..=8),
        policy in policy_strategy(),
    ) {
        let participants = weighted_participants(&cents);
        let shares = ShareCalculator::default()
            .compute_shares(&participants, policy)
            .expect("shares should compute");

        let total: Money = participants.iter().map(|p| p.paid).sum();
        let drift = (shares.iter().sum::<Money>() - total).abs();
        let tolerance = Money::new(5 * participants.len() as i64, 3);
        prop_assert!(drift <= tolerance, "drift {} exceeds {}", drift, tolerance);
    }

    #[test]
    fn zero_sum_shares_conserve_total_exactly(
        cents in prop::collection::vec(0i64..=1_000_000, 1..=8),
        policy in policy_strategy(),
    ) {
        let participants = weighted_participants(&cents);
        let shares = ShareCalculator::new(ShareRounding::ZeroSum)
            .compute_shares(&participants, policy)
            .expect("shares should compute");

        let total: Money = participants.iter().map(|p| p.paid).sum();
        prop_assert_eq!(shares.iter().sum::<Money>(), total);
    }

    #[test]
    fn single_payer_solo_conserves_total(
        (cents, payer) in prop::collection::vec(0i64..=1_000_000, 1..=8)
            .prop_flat_map(|cents| {
                let len = cents.len();
                (Just(cents), 0..len)
            }),
        rounding in prop_oneof![Just(ShareRounding::PerParticipant), Just(ShareRounding::ZeroSum)],
    ) {
        let participants: Vec<Participant> = participants_from_cents(&cents)
            .into_iter()
            .enumerate()
            .map(|(idx, participant)| participant.with_payer(idx == payer))
            .collect();
        let shares = ShareCalculator::new(rounding)
            .compute_shares(&participants, SplitPolicy::Solo)
            .expect("shares should compute");

        let total: Money = participants.iter().map(|p| p.paid).sum();
        prop_assert_eq!(shares.iter().sum::<Money>(), total);
        prop_assert_eq!(shares[payer], total);
        prop_assert!(shares.iter().enumerate().all(|(idx, share)| idx == payer || share.is_zero()));
    }

    #[test]
    fn debtors_are_fully_settled(
        cents in prop::collection::vec(0i64..=1_000_000, 1..=8),
        strategy in match_strategy(),
    ) {
        let participants = participants_from_cents(&cents);
        let (balances, payments) = settle(
            &participants,
            SplitPolicy::Equal,
            ShareCalculator::new(ShareRounding::ZeroSum),
            SettlementMatcher::new(strategy),
        );

        for entry in balances.iter().filter(|b| b.balance.is_negative()) {
            let issued: Money = payments[entry.name.as_str()].iter().map(|p| p.amount).sum();
            prop_assert_eq!(issued, -entry.balance);
        }
        for entry in balances.iter().filter(|b| b.balance.is_positive()) {
            let received: Money = payments
                .values()
                .flatten()
                .filter(|p| p.to == entry.name)
                .map(|p| p.amount)
                .sum();
            prop_assert_eq!(received, entry.balance);
        }
        for (from, instructions) in &payments {
            for instruction in instructions {
                prop_assert_ne!(from, &instruction.to);
                prop_assert!(instruction.amount.is_positive());
            }
        }
    }

    #[test]
    fn settled_participants_never_appear(
        cents in prop::collection::vec(0i64..=100_000, 2..=8),
    ) {
        let participants = participants_from_cents(&cents);
        let (balances, payments) = settle(
            &participants,
            SplitPolicy::Equal,
            ShareCalculator::default(),
            SettlementMatcher::default(),
        );

        for entry in balances.iter().filter(|b| b.balance.is_zero()) {
            prop_assert!(!payments.contains_key(entry.name.as_str()));
            prop_assert!(payments.values().flatten().all(|p| p.to != entry.name));
        }
    }

    #[test]
    fn repeated_runs_are_identical(
        cents in prop::collection::vec(0i64..=1_000_000, 1..=8),
        policy in policy_strategy(),
        strategy in match_strategy(),
    ) {
        let participants = weighted_participants(&cents);
        let calculator = ShareCalculator::default();
        let matcher = SettlementMatcher::new(strategy);

        let first = settle(&participants, policy, calculator, matcher);
        let second = settle(&participants, policy, calculator, matcher);
        prop_assert_eq!(first, second);
    }
}
