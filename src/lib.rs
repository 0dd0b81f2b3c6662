//----------------------------------------
// Root lib
//----------------------------------------
//! The purpose of this library is to generate synthetic survey cohorts for two
//! measurement weeks and to check whether the weeks differ, using the
//! Mann-Whitney U test, the median test, and a Monte Carlo estimate of the
//! power of the Mann-Whitney test.

/// This module houses the public API for generating, storing, comparing and
/// reporting on cohorts
pub mod compute;
/// This module contains error types
pub mod error;
mod generator;
mod hypothesis;
mod hypothesis_type;
/// Tracing subscriber setup for the binary
pub mod logging;
mod observation;
mod power;
mod report;
mod storage;
