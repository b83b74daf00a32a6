//! # gly-core
//!
//! Core types for Galley, a client and project tracker for a freelance
//! document-formatting studio.
//!
//! This crate provides the foundational types shared across all Galley crates:
//! - Entity structs for all domain objects (clients, projects, files, communications)
//! - Status enums, with a state machine on the project pipeline
//! - Display-hint mappings consumed by the presentation layer
//! - ID prefix constants
//! - Cross-cutting error types
//! - CLI and webhook payload/response types

pub mod display;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod responses;
