#[cfg(all(feature = "ja", feature = "en"))]
compile_error!("Cannot enable both 'ja' and 'en' features at the same time");

use std::fmt::Display;

#[cfg(feature = "ja")]
pub mod strings {
    pub const MEMBER: &str = "メンバー";
    pub const PAID: &str = "支払額";
    pub const SHARE: &str = "負担額";
    pub const BALANCE: &str = "収支";
    pub const FROM: &str = "支払人";
    pub const TO: &str = "受取人";
    pub const AMOUNT: &str = "金額";
    pub const NO_PAYMENTS_NEEDED: &str = "精算は不要です";
    pub const CALCULATION_FAILED: &str = "割り勘の計算に失敗しました";
    pub const NO_PARTICIPANTS: &str = "参加者が1人以上必要です";
}

#[cfg(not(feature = "ja"))]
pub mod strings {
    pub const MEMBER: &str = "Member";
    pub const PAID: &str = "Paid";
    pub const SHARE: &str = "Share";
    pub const BALANCE: &str = "Balance";
    pub const FROM: &str = "From";
    pub const TO: &str = "To";
    pub const AMOUNT: &str = "Amount";
    pub const NO_PAYMENTS_NEEDED: &str = "No payments needed";
    pub const CALCULATION_FAILED: &str = "Bill split calculation failed";
    pub const NO_PARTICIPANTS: &str = "At least one participant is required";
}

pub use strings::*;

#[cfg(feature = "ja")]
pub fn unknown_policy(policy: impl Display) -> String {
    format!("不明な割り方 '{policy}' です (equal / percentage / solo)")
}

#[cfg(feature = "ja")]
pub fn percentage_sum(actual: impl Display) -> String {
    format!("割合の合計は100である必要があります (現在: {actual})")
}

#[cfg(feature = "ja")]
pub fn percentage_out_of_range(name: impl Display, percentage: impl Display) -> String {
    format!("'{name}' の割合は0から100の間である必要があります (現在: {percentage})")
}

#[cfg(feature = "ja")]
pub fn negative_paid(name: impl Display) -> String {
    format!("'{name}' の支払額を負にすることはできません")
}

#[cfg(feature = "ja")]
pub fn negative_item_amount(name: impl Display, description: impl Display) -> String {
    format!("'{name}' の品目 '{description}' の金額を負にすることはできません")
}

#[cfg(feature = "ja")]
pub fn duplicate_name(name: impl Display) -> String {
    format!("参加者名 '{name}' が重複しています")
}

#[cfg(feature = "ja")]
pub fn amount_out_of_range(name: impl Display) -> String {
    format!("'{name}' の金額を通貨として扱えません")
}

#[cfg(not(feature = "ja"))]
pub fn unknown_policy(policy: impl Display) -> String {
    format!("Unknown split mode '{policy}' (expected equal, percentage, or solo)")
}

#[cfg(not(feature = "ja"))]
pub fn percentage_sum(actual: impl Display) -> String {
    format!("Percentages must sum to 100 (currently {actual})")
}

#[cfg(not(feature = "ja"))]
pub fn percentage_out_of_range(name: impl Display, percentage: impl Display) -> String {
    format!("Percentage for '{name}' must be between 0 and 100 (currently {percentage})")
}

#[cfg(not(feature = "ja"))]
pub fn negative_paid(name: impl Display) -> String {
    format!("Amount paid by '{name}' cannot be negative")
}

#[cfg(not(feature = "ja"))]
pub fn negative_item_amount(name: impl Display, description: impl Display) -> String {
    format!("Item '{description}' of '{name}' cannot have a negative amount")
}

#[cfg(not(feature = "ja"))]
pub fn duplicate_name(name: impl Display) -> String {
    format!("Participant name '{name}' is used more than once")
}

#[cfg(not(feature = "ja"))]
pub fn amount_out_of_range(name: impl Display) -> String {
    format!("Amount for '{name}' is not a valid currency value")
}
