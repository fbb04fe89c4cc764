use crate::text_table::{Alignment, TextTableBuilder};
use billsplit_domain::{Money, SplitResult};
use billsplit_i18n as i18n;
use std::{borrow::Cow, fmt};

pub struct SplitPresenter;

pub struct SplitView {
    pub share_table: String,
    pub payment_table: Option<String>,
}

impl fmt::Display for SplitView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.share_table)?;
        writeln!(f)?;
        match &self.payment_table {
            Some(table) => f.write_str(table),
            None => writeln!(f, "{}", i18n::NO_PAYMENTS_NEEDED),
        }
    }
}

impl SplitPresenter {
    pub fn render(results: &[SplitResult]) -> SplitView {
        let share_table = Self::build_share_table(results);
        let has_payments = results.iter().any(|result| !result.payments.is_empty());

        SplitView {
            share_table,
            payment_table: has_payments.then(|| Self::build_payment_table(results)),
        }
    }

    pub fn build_share_table(results: &[SplitResult]) -> String {
        TextTableBuilder::new()
            .alignments(&[
                Alignment::Left,
                Alignment::Right,
                Alignment::Right,
                Alignment::Right,
            ])
            .headers(&[
                Cow::Borrowed(i18n::MEMBER),
                Cow::Borrowed(i18n::PAID),
                Cow::Borrowed(i18n::SHARE),
                Cow::Borrowed(i18n::BALANCE),
            ])
            .rows(results.iter().map(|result| {
                [
                    Cow::Borrowed(result.name.as_str()),
                    Cow::Owned(result.paid.to_string()),
                    Cow::Owned(result.share.to_string()),
                    Cow::Owned(format_signed(result.balance)),
                ]
            }))
            .build()
    }

    /// Payments in debtor order, each debtor's instructions in match order.
    pub fn build_payment_table(results: &[SplitResult]) -> String {
        TextTableBuilder::new()
            .alignments(&[Alignment::Left, Alignment::Left, Alignment::Right])
            .headers(&[
                Cow::Borrowed(i18n::FROM),
                Cow::Borrowed(i18n::TO),
                Cow::Borrowed(i18n::AMOUNT),
            ])
            .rows(results.iter().flat_map(|result| {
                result.payments.iter().map(|payment| {
                    [
                        Cow::Borrowed(result.name.as_str()),
                        Cow::Borrowed(payment.to.as_str()),
                        Cow::Owned(payment.amount.to_string()),
                    ]
                })
            }))
            .build()
    }
}

fn format_signed(amount: Money) -> String {
    let sign = if amount.is_negative() { "" } else { "+" };
    format!("{sign}{amount}")
}
