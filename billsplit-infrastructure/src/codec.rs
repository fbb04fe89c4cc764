//! Payload codec between the form UI and the calculation service.
//!
//! The UI speaks camelCase (`splitMode`, `isPayer`), the service speaks snake_case
//! (`split_mode`, `is_payer`). Both shapes carry the same fields; conversion between them
//! never drops or defaults a field, and absent optionals stay absent.

use crate::error::CodecError;
use billsplit_application::{BillSplitState, ParticipantInput};
use billsplit_domain::{InvalidInput, Item, Money, SplitPolicy, SplitResult};
use rust_decimal::{Decimal, prelude::FromPrimitive};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayloadItem {
    pub description: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiParticipant {
    pub name: String,
    pub paid: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_payer: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<PayloadItem>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiBillSplitState {
    pub split_mode: String,
    pub num_people: usize,
    pub participants: Vec<UiParticipant>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireParticipant {
    pub name: String,
    pub paid: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_payer: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<PayloadItem>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireBillSplitState {
    pub split_mode: String,
    pub num_people: usize,
    pub participants: Vec<WireParticipant>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WirePayment {
    pub to: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireSplitResult {
    pub name: String,
    pub paid: f64,
    pub share: f64,
    pub balance: f64,
    pub payments: Vec<WirePayment>,
}

/// Naming convention of an incoming payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadFormat {
    Ui,
    Wire,
}

impl PayloadFormat {
    /// Detects the convention from the top-level split mode key.
    pub fn detect(json: &str) -> Result<Self, CodecError> {
        let value: Value = serde_json::from_str(json)?;
        let Some(object) = value.as_object() else {
            return Err(CodecError::UnknownFormat);
        };
        if object.contains_key("splitMode") {
            Ok(PayloadFormat::Ui)
        } else if object.contains_key("split_mode") {
            Ok(PayloadFormat::Wire)
        } else {
            Err(CodecError::UnknownFormat)
        }
    }
}

pub fn to_wire(state: &UiBillSplitState) -> WireBillSplitState {
    WireBillSplitState {
        split_mode: state.split_mode.clone(),
        num_people: state.num_people,
        participants: state
            .participants
            .iter()
            .map(|p| WireParticipant {
                name: p.name.clone(),
                paid: p.paid,
                percentage: p.percentage,
                is_payer: p.is_payer,
                items: p.items.clone(),
            })
            .collect(),
    }
}

pub fn from_wire(state: &WireBillSplitState) -> UiBillSplitState {
    UiBillSplitState {
        split_mode: state.split_mode.clone(),
        num_people: state.num_people,
        participants: state
            .participants
            .iter()
            .map(|p| UiParticipant {
                name: p.name.clone(),
                paid: p.paid,
                percentage: p.percentage,
                is_payer: p.is_payer,
                items: p.items.clone(),
            })
            .collect(),
    }
}

pub fn transcode_ui_json_to_wire(json: &str) -> Result<String, CodecError> {
    let state: UiBillSplitState = serde_json::from_str(json)?;
    Ok(serde_json::to_string(&to_wire(&state))?)
}

pub fn transcode_wire_json_to_ui(json: &str) -> Result<String, CodecError> {
    let state: WireBillSplitState = serde_json::from_str(json)?;
    Ok(serde_json::to_string(&from_wire(&state))?)
}

/// Parses a payload in either convention into the application input model.
pub fn decode_state(json: &str, format: PayloadFormat) -> Result<BillSplitState, CodecError> {
    let state = match format {
        PayloadFormat::Ui => serde_json::from_str::<UiBillSplitState>(json)?,
        PayloadFormat::Wire => from_wire(&serde_json::from_str::<WireBillSplitState>(json)?),
    };
    tracing::debug!(
        ?format,
        split_mode = %state.split_mode,
        member_count = state.participants.len(),
        "Decoded bill split payload"
    );
    Ok(BillSplitState::try_from(&state)?)
}

pub fn encode_results(results: &[SplitResult]) -> Result<String, CodecError> {
    let wire: Vec<WireSplitResult> = results.iter().map(WireSplitResult::from).collect();
    Ok(serde_json::to_string_pretty(&wire)?)
}

impl TryFrom<&UiBillSplitState> for BillSplitState {
    type Error = InvalidInput;

    fn try_from(state: &UiBillSplitState) -> Result<Self, Self::Error> {
        let split_mode: SplitPolicy = state.split_mode.parse()?;
        let participants = state
            .participants
            .iter()
            .map(participant_input)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(BillSplitState {
            split_mode,
            num_people: state.num_people,
            participants,
        })
    }
}

fn participant_input(participant: &UiParticipant) -> Result<ParticipantInput, InvalidInput> {
    let out_of_range = || InvalidInput::AmountOutOfRange {
        name: participant.name.clone(),
    };

    let paid = Money::from_f64(participant.paid).ok_or_else(out_of_range)?;
    let percentage = participant
        .percentage
        .map(|pct| Decimal::from_f64(pct).ok_or_else(out_of_range))
        .transpose()?;
    let items = participant
        .items
        .iter()
        .flatten()
        .map(|item| {
            Money::from_f64(item.amount)
                .map(|amount| Item::new(item.description.clone(), amount))
                .ok_or_else(out_of_range)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ParticipantInput {
        name: participant.name.clone(),
        paid,
        percentage,
        is_payer: participant.is_payer,
        items,
    })
}

impl From<&SplitResult> for WireSplitResult {
    fn from(result: &SplitResult) -> Self {
        Self {
            name: result.name.clone(),
            paid: result.paid.to_f64(),
            share: result.share.to_f64(),
            balance: result.balance.to_f64(),
            payments: result
                .payments
                .iter()
                .map(|payment| WirePayment {
                    to: payment.to.clone(),
                    amount: payment.amount.to_f64(),
                })
                .collect(),
        }
    }
}
