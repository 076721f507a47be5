// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Common test utilities for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - Hour and date factories (fixtures)
//! - Window assertion helpers

mod assertions;
mod fixtures;

#[allow(unused_imports)]
pub use assertions::{assert_one_hour_wide, hms};
#[allow(unused_imports)]
pub use fixtures::{all_hours, days_of_year, hour};
