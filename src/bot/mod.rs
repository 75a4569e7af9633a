//! Bot module for handling Telegram interactions
//!
//! - `message_handler`: routes incoming command, photo and text updates
//!   and drives the photo-analysis pipeline

pub mod message_handler;

// Re-export the main handler function for use in main.rs
pub use message_handler::message_handler;
