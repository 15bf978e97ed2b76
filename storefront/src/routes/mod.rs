pub mod assets;
pub mod catalog;
pub mod error_message_erasure;
pub mod register;
