//! Report construction and period-over-period comparison.
//!
//! This module turns a survey definition plus a window of collected
//! responses into per-question statistics, and annotates a report with
//! deltas against the report for an earlier window.

pub mod aggregate;
pub mod delta;
pub mod utility;
