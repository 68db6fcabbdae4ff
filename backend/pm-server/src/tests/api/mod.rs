mod double_option;
mod error;
mod json_value;
mod sync_warning;
