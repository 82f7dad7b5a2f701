//! Pricing, occupancy, and hotel price storage for the HimYatra companion dashboard.

pub mod config;
pub mod error;
pub mod hotels;
pub mod occupancy;
pub mod pricing;
pub mod telemetry;
