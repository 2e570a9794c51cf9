//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep rendering layers decoupled from storage details.

pub mod habit_service;
