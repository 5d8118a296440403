// SPDX-FileCopyrightText: 2026 Gutenlens Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain model types for storage entities.
//!
//! The canonical types live in `gutenlens-core::types` for use across
//! crate boundaries. This module re-exports them for convenience within
//! the storage crate.

pub use gutenlens_core::types::SearchedBook;
