//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository and generator calls into use-case level APIs.
//! - Keep presentation layers decoupled from storage details.

pub mod person_service;
