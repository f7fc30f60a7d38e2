//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **employee_api**: reqwest client for the upstream employee service
//!
//! Adapters are thin translators between domain types and transport
//! representations. They contain no business logic.

pub mod employee_api;
