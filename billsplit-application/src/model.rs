use billsplit_domain::{InvalidInput, Item, Money, Participant, SplitPolicy, model::sum_items};
use rust_decimal::Decimal;

/// One participant row as entered in the form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParticipantInput {
    pub name: String,
    pub paid: Money,
    pub percentage: Option<Decimal>,
    pub is_payer: Option<bool>,
    pub items: Vec<Item>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BillSplitState {
    pub split_mode: SplitPolicy,
    pub num_people: usize,
    pub participants: Vec<ParticipantInput>,
}

pub fn default_participant_name(position: usize) -> String {
    format!("Person {}", position + 1)
}

pub fn default_item_description(position: usize) -> String {
    format!("Item {}", position + 1)
}

impl ParticipantInput {
    pub fn new(name: impl Into<String>, paid: Money) -> Self {
        Self {
            name: name.into(),
            paid,
            ..Self::default()
        }
    }

    /// Fills blank names and item descriptions from the row position.
    pub fn with_defaults(mut self, position: usize) -> Self {
        let name = self.name.trim();
        self.name = if name.is_empty() {
            default_participant_name(position)
        } else {
            name.to_owned()
        };

        for (idx, item) in self.items.iter_mut().enumerate() {
            let description = item.description.trim();
            item.description = if description.is_empty() {
                default_item_description(idx)
            } else {
                description.to_owned()
            };
        }
        self
    }

    /// Amount paid, derived from the items when any are present. `None` when the item
    /// total overflows.
    pub fn effective_paid(&self) -> Option<Money> {
        if self.items.is_empty() {
            Some(self.paid)
        } else {
            sum_items(&self.items)
        }
    }

    /// Builds the core participant for the row at `position`.
    pub fn to_participant(&self, position: usize) -> Result<Participant, InvalidInput> {
        let normalized = self.clone().with_defaults(position);

        if let Some(item) = normalized.items.iter().find(|item| item.amount.is_negative()) {
            return Err(InvalidInput::NegativeItemAmount {
                name: normalized.name,
                description: item.description.clone(),
            });
        }

        let Some(paid) = normalized.effective_paid() else {
            return Err(InvalidInput::AmountOutOfRange {
                name: normalized.name,
            });
        };

        Ok(Participant {
            paid,
            name: normalized.name,
            percentage: normalized.percentage,
            is_payer: normalized.is_payer,
        })
    }
}

impl BillSplitState {
    pub fn new(split_mode: SplitPolicy, participants: Vec<ParticipantInput>) -> Self {
        Self {
            split_mode,
            num_people: participants.len(),
            participants,
        }
    }
}
