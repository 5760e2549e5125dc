//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep HTTP/console layers decoupled from storage details.

pub mod contact_service;
pub mod user_service;
