// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Rank-based dependency measures.

pub mod rank_utils;
pub mod spearman;
