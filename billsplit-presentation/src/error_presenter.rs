use billsplit_domain::InvalidInput;
use billsplit_i18n as i18n;

pub fn format_invalid_input(error: &InvalidInput) -> String {
    let detail = match error {
        InvalidInput::NoParticipants => i18n::NO_PARTICIPANTS.to_owned(),
        InvalidInput::UnknownPolicy(policy) => i18n::unknown_policy(policy),
        InvalidInput::PercentageSum { actual } => i18n::percentage_sum(actual),
        InvalidInput::PercentageOutOfRange { name, percentage } => {
            i18n::percentage_out_of_range(name, percentage)
        }
        InvalidInput::NegativePaid { name } => i18n::negative_paid(name),
        InvalidInput::NegativeItemAmount { name, description } => {
            i18n::negative_item_amount(name, description)
        }
        InvalidInput::DuplicateName(name) => i18n::duplicate_name(name),
        InvalidInput::AmountOutOfRange { name } => i18n::amount_out_of_range(name),
    };
    format!("{}: {detail}", i18n::CALCULATION_FAILED)
}
