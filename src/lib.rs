//! Weekly employee shift scheduler.
//!
//! This crate assigns employees to the morning, afternoon and evening shifts
//! of a seven-day week from their daily preferences and optional priority
//! rankings, then backfills understaffed shifts. The heuristic is a bounded
//! random-greedy pass: it never backtracks and makes no optimality claim.

#![warn(missing_docs)]

pub mod config;
pub mod console;
pub mod demo;
pub mod error;
pub mod models;
pub mod render;
pub mod scheduling;
