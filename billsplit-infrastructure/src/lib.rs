pub mod codec;
pub mod error;

pub use codec::{
    PayloadFormat, PayloadItem, UiBillSplitState, UiParticipant, WireBillSplitState,
    WireParticipant, WirePayment, WireSplitResult, decode_state, encode_results, from_wire,
    to_wire, transcode_ui_json_to_wire, transcode_wire_json_to_ui,
};
pub use error::CodecError;
