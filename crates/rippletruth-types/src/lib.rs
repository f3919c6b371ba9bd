// ─────────────────────────────────────────────────────────────────────
// RippleTruth — Kernel Types
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Type definitions, configuration, error hierarchy and the collaborator
//! sentinel contract for the RippleTruth narrative-intelligence kernel.

pub mod config;
pub mod error;
pub mod narrative;
pub mod report;
pub mod score;
pub mod sentinel;

pub use config::RippleConfig;
pub use error::{RippleError, RippleResult};
pub use narrative::{NarrativeProfile, Polarity, Structure, Tone, Topic};
pub use report::Report;
pub use score::{
    clamp_score, round_to, Actor, ActorDistribution, FactStack, FeatureVector, IntentionMetrics,
    LinguisticForce, TracebackResult,
};
pub use sentinel::is_sentinel;
