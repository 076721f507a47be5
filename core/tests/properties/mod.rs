// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Property tests over the conversion paths.

mod availability;
mod egypt_round_trip;
mod fixed_offset;
mod zone_database;
