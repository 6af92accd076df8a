// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// kNN-based estimators (Kraskov entropy and the dependency measures built on it) and shared utilities.

pub mod interaction_information;
pub mod kraskov;
pub mod total_correlation;
pub mod utils;
