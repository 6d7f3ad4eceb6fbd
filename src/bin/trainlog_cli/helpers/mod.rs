// ABOUTME: Re-exports helper modules for trainlog-cli
// ABOUTME: Provides JSON output and shared argument parsing utilities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod args;
pub mod display;
