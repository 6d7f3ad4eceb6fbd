// ABOUTME: Re-exports command modules for trainlog-cli
// ABOUTME: Provides strength, progression and cycle phase commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod cycle;
pub mod progression;
pub mod strength;
