//! Network layer: auth DTOs and the REST client.

pub mod api;
pub mod types;
