//! User input hook.

use std::fmt::{Debug, Display};

use tracing::info;

pub const USER_INPUT_PREFIX: &str = "User input received:";

/// Log `input` as one `info` event using its `Debug` form, so strings
/// appear quoted. Nothing is stored.
pub fn log_user_input<T: Debug + ?Sized>(input: &T) {
    info!("{USER_INPUT_PREFIX} {input:?}");
}

/// Like `log_user_input` but with the `Display` form: `"hello"` is logged
/// bare as `hello`.
pub fn log_user_input_display<T: Display + ?Sized>(input: &T) {
    info!("{USER_INPUT_PREFIX} {input}");
}
