//! Overhead line models.
//!
//! This module contains models for overhead conductor spans: loading,
//! catenary geometry, and change-of-state tension.

pub mod sag_tension;
