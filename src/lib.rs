//! Business Valuation - Rules-based valuation engine
//!
//! This crate scores qualitative value-driver questionnaires, reconstructs
//! adjusted EBITDA from raw financials, and applies grade, industry or
//! score-band EBITDA multiples to produce a valuation range with
//! improvement recommendations.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
