//! Data Transfer Objects
//!
//! DTOs for API request/response serialization.

pub mod request;
pub mod response;

pub use request::{CreateSongRequest, ListSongsQuery, SongInfoQuery, SongTextQuery, UpdateSongRequest};
pub use response::{EmptyTextResponse, MessageResponse, SongDetailResponse, SongResponse};
