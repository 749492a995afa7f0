//! The data layer shared by every screen: the metal catalog, the Metal
//! Price API client, and the configuration and error types around them.

pub mod client;
pub mod config;
pub mod currency;
pub mod error;
pub mod metal;
pub mod quote;
