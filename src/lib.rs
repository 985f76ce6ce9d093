//! Alzheimer-type dementia risk calculator.
//!
//! Risk factors and preventive interventions are fixed, weighted catalogs.
//! A [`selection::Selection`] of ids is scored into a multiplicative risk
//! index, a multiplicative protection index, and their product, each
//! classified into a [`scoring::RiskTier`].

pub mod catalog;
pub mod config;
pub mod output;
pub mod scoring;
pub mod selection;
pub mod tui;
