// ─────────────────────────────────────────────────────────────────────
// RippleTruth — Scoring Pipeline
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Deterministic narrative scoring pipeline.
//!
//! Stage order (leaves first):
//!
//! 1. [`classifier`] — keyword rules → `NarrativeProfile`
//! 2. [`features`] — token heuristics → `FeatureVector`
//! 3. [`intention`] — FILS → UCIP → TTCF → Drift → RippleScore
//! 4. [`traceback`] — actor reweighting + reliability index
//! 5. [`interpret`] — banded narrative paragraphs
//! 6. [`report`] — structured report + markdown rendering
//!
//! [`force`], [`fact_stack`] and [`human`] are supplementary stages wired
//! in by [`pipeline::RipplePipeline`].
//!
//! # Invariants
//!
//! 1. **Totality**: every stage accepts any string, including the empty
//!    string, and returns a defined value. There is no error channel.
//! 2. **Bounded outputs**: all features and metrics land in [0, 1], the
//!    reliability index in [1, 99], actor probabilities sum to 1.
//! 3. **Determinism**: no randomness, no clocks, no shared mutable state.
//!    Identical input yields byte-identical reports.

pub mod classifier;
pub mod fact_stack;
pub mod features;
pub mod force;
pub mod human;
pub mod intention;
pub mod interpret;
pub mod pipeline;
pub mod report;
pub mod tables;
pub mod text;
pub mod traceback;

pub use classifier::classify;
pub use features::extract;
pub use intention::score;
pub use interpret::compose;
pub use pipeline::RipplePipeline;
pub use report::{assemble, render_markdown, ReportParts};
pub use traceback::traceback;
