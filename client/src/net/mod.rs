//! Networking modules for the prediction endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the multipart request and interprets the reply, and `types`
//! defines the wire schema.

pub mod api;
pub mod types;
