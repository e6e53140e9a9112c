//! Terminal output for the `coge` binary and the console logger
//!
//! Uses `cliclack` for prompts and spinners in an interactive terminal,
//! falling back to plain lines in CI or when output is piped.

mod context;
mod output;
mod progress;
mod prompts;
mod theme;

pub use context::UiContext;
pub use output::{
    intro, key_value, key_value_status, message, outro_success, remark, step_ok_detail,
    step_warn_hint,
};
pub use progress::TaskSpinner;
pub use prompts::confirm;
pub use theme::{init_theme, CogeTheme};
