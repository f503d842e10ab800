//! # gp-core
//!
//! Core types and error types for GovPro.
//!
//! This crate provides the foundational types shared across all GovPro crates:
//! - Entity structs for the proposal domain (tasks, team members, roles,
//!   workflow templates, analysis results)
//! - Status enums for tasks, derived workflow steps and Kanban lanes
//! - View/response types returned by the workflow controllers and the CLI
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod responses;
