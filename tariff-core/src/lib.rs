//! Tariff Core
//!
//! Core types for the Tariff service catalog.
//!
//! This crate contains:
//! - Domain types: service records, identifiers and prices
//! - DTOs: form drafts and validated services
//! - Validation: per-field checks that turn a draft into a storable service

pub mod domain;
pub mod dto;
pub mod validation;
