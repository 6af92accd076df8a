// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod digamma;

/// Multiply a value in nats by this to get bits (1 / ln 2).
pub const NATS_TO_BITS: f64 = std::f64::consts::LOG2_E;

/// Express a value given in nats in logarithm base `base`.
pub fn nats_to_base(nats: f64, base: f64) -> f64 {
    nats / base.ln()
}
