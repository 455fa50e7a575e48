/// Plain message error used during start-up.
pub mod custom_error;
