mod cli_mode;
mod editor_utils;

pub use cli_mode::CliModeResult;
pub use editor_utils::{create_editor_buffer, resolve_editor};
