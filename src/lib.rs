//! Shift payroll engine.
//!
//! This crate prices employee work logs against time-of-day pay tiers. Each
//! log line names an employee and lists the intervals they worked; every
//! interval is priced at the hourly rate of the tier it falls in, split
//! across adjacent tiers where it crosses a boundary, and the totals are
//! reported per employee.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod ingest;
pub mod logging;
pub mod models;
pub mod service;
