//! Data models for reviews, extracted signals and configuration.

pub mod config;
pub mod review;
