// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: runtime invariant checks and debug contracts.
//!
//! Two complementary approaches to catching bugs:
//!
//! 1. **Invariant checks** (`validate_catalogue`, `VerificationReport`) that return
//!    an [`InvariantError`] describing what went wrong. The `verify` subcommand
//!    runs all of them against a configuration.
//!
//! 2. **Contracts** that panic in debug builds when a builder produces output
//!    that breaks its own invariant. Zero-cost in release, but catch bugs
//!    during development.

pub mod contracts;
mod types;

pub use types::*;
