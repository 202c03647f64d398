//! Data Transfer Objects between the form and the store
//!
//! A [`service::ServiceDraft`] is what a form holds while the user types; a
//! [`service::NewService`] is what validation hands to the store.

pub mod service;
