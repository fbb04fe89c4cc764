#![warn(clippy::uninlined_format_args)]

pub mod error_presenter;
pub mod split_presenter;
pub mod text_table;

pub use error_presenter::format_invalid_input;
pub use split_presenter::{SplitPresenter, SplitView};
