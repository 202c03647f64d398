//! Core domain types
//!
//! This module contains the structures shared by the store, the editor and
//! the command-line front end. They carry no persistence or I/O logic.

pub mod service;

pub use service::{Field, Price, PriceError, ServiceId, ServiceRecord};
