pub mod exit_prompt;
pub mod header;
