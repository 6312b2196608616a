//! AWS EC2 interaction.
//!
//! This module handles all provider calls:
//! - [`client`] - The [`NetworkApi`] seam and its EC2 implementation
//! - [`error`] - Error taxonomy for failed list queries

mod client;
mod error;

// Re-export public types and functions
pub use client::{vpc_filter, Ec2NetworkApi, NetworkApi};
pub use error::FetchError;
