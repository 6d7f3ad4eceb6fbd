// ABOUTME: Core types and constants for the Trainlog training analytics engine
// ABOUTME: Foundation crate with error handling, domain models, date parsing and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Trainlog Core
//!
//! Foundation crate providing shared types and constants for the Trainlog
//! analytics engine. It changes rarely, so the algorithm crate and the CLI
//! recompile independently of it.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode` and `AppResult`
//! - **constants**: formula coefficients and cycle reference partition
//! - **models**: training history, personal records and cycle configuration
//! - **dates**: lenient date and instant parsing

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (sets, sessions, events, cycle configuration)
pub mod models;

/// Date and instant parsing helpers
pub mod dates;
