//! Utilities shared by the Zashiki server and client.

pub mod logger;
pub mod time;
