pub mod client;
mod requests;
pub mod types;

pub use client::*;
pub use types::*;
