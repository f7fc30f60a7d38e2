//! Upstream employee service adapters.
//!
//! This module provides a thin HTTP implementation of the `EmployeeUpstream`
//! port.

mod dto;
mod http_source;

pub use http_source::EmployeeHttpUpstream;
