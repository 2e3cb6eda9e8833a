//! Core domain types.

mod connection;
mod room;
mod user;

pub use connection::{Connection, DocumentMeta, EdgeDocument};
pub use room::{NewRoom, Room, RoomPatch};
pub use user::User;
