//! UseCase layer: one use case per protocol operation.

pub mod broadcast;
pub mod connect_participant;
pub mod disconnect_participant;
pub mod draw_component;
pub mod error;
pub mod get_room_detail;
pub mod get_rooms;
pub mod refresh_presence;
pub mod save_component;

#[cfg(test)]
pub(crate) mod test_support;

pub use broadcast::RoomBroadcaster;
pub use connect_participant::ConnectParticipantUseCase;
pub use disconnect_participant::DisconnectParticipantUseCase;
pub use draw_component::DrawComponentUseCase;
pub use error::{GetRoomDetailError, SaveComponentError};
pub use get_room_detail::GetRoomDetailUseCase;
pub use get_rooms::GetRoomsUseCase;
pub use refresh_presence::RefreshPresenceUseCase;
pub use save_component::SaveComponentUseCase;
