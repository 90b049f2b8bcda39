//! Core Kernel - Foundational types and utilities for the ledger engine
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Money with precise fixed-point arithmetic in minor units
//! - Strongly-typed identifiers
//! - Port infrastructure for persistence collaborators

pub mod identifiers;
pub mod money;
pub mod ports;

pub use identifiers::{DocumentId, EntryId, InstallmentId, PartyId};
pub use money::{Money, MoneyError};
pub use ports::{DomainPort, PortError};
