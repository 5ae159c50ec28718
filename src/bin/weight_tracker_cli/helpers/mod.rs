// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Helper modules for the weight-tracker CLI
// ABOUTME: Provides terminal display formatting

pub mod display;
