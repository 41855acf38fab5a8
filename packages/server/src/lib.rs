//! Real-time room server for collaborative diagram editing.
//!
//! Peers join a named room over WebSocket, see who else is present and
//! receive every diagram mutation broadcast by the other peers.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

pub mod bootstrap;
pub mod config;
