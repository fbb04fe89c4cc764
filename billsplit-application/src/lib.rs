#![warn(clippy::uninlined_format_args)]

pub mod model;
pub mod service;

pub use billsplit_domain::InvalidInput;
pub use model::{BillSplitState, ParticipantInput};
pub use service::BillSplitService;
