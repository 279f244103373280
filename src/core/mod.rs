//! Core library components.
//!
//! Secret lookup, notification dispatch, machine identity, and network
//! interface detection. Nothing here prints to the terminal.

pub mod config;
pub mod constants;
pub mod interface;
pub mod machine;
pub mod notify;
pub mod secrets;
