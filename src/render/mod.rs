// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rendering of hierarchies and traversals to external formats.

pub mod dot;

pub use dot::{export_dot, export_hierarchy_dot};
