//! Dojo member portal library root.
//! Exposes the portal handlers, the sheet store seam, and the PIN batch
//! hashing used by the `hash_pins` binary.

pub mod api;
pub mod auth;
pub mod config;
pub mod errors;
pub mod model;
pub mod pinhash;
pub mod routes;
pub mod sheets;
