//! Application Layer
//!
//! Contains the song service and the data transfer objects (DTOs) that
//! carry request and response bodies between the presentation and domain
//! layers.

pub mod services;
pub mod dto;
