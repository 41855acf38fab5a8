//! Presence and fan-out target selection.
//!
//! Pure functions over a room snapshot, kept free of side effects so they
//! are easy to test.

use super::{entity::Participant, value_object::ConnectionId};

/// Build the presence list of a room.
///
/// Names are returned in registration order. Duplicate names are kept.
pub fn build_presence_list(participants: &[Participant]) -> Vec<String> {
    participants
        .iter()
        .map(|p| p.name.as_str().to_string())
        .collect()
}

/// Get broadcast targets (all connections except the excluded one).
pub fn get_broadcast_targets(
    participants: &[Participant],
    exclude: Option<&ConnectionId>,
) -> Vec<ConnectionId> {
    participants
        .iter()
        .map(|p| p.connection_id)
        .filter(|id| Some(id) != exclude)
        .collect()
}
