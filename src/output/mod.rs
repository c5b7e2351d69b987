pub mod json;
pub mod shell;

pub use json::to_json;
pub use shell::{Shell, format_prompt};
