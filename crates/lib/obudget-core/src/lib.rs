//! Core types and services for obudget-mcp.
//!
//! This crate owns the fixed query templates for the budget transparency API,
//! builds upstream requests from caller arguments, and provides the async
//! client that forwards those requests and returns the JSON bodies untouched.

pub mod client;
pub mod request;
pub mod search;
pub mod templates;

pub use client::{ClientConfig, ClientError, ClientResult, ObudgetClient};
pub use request::UpstreamRequest;
pub use search::{SearchType, UnknownSearchType};
