//! # Gurbani Common Library
//!
//! Shared code for the gurbani view service:
//! - Read-only storage layer over the scripture corpus database
//! - Text pipeline (vishraam stripping, larivaar reflow, translation and
//!   transliteration selection)
//! - Line and shabad view builders
//! - Canonical-order navigation
//! - Configuration loading

pub mod config;
pub mod db;
pub mod error;
pub mod navigation;
pub mod text;
pub mod views;

pub use error::{Error, Result};
