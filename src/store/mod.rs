// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Persistence of hierarchy snapshots.
//!
//! Snapshots stay at the string level; where the JSON lives (file, embedded
//! fixture, wire) is the caller's business.

pub mod snapshot;

pub use snapshot::{from_json_str, to_json_string, SnapshotError};
