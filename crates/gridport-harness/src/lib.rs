#![forbid(unsafe_code)]

//! Deterministic test harness for the GridPort scroll engine.
//!
//! The engine itself is pure; what needs exercising is the conversation with
//! its host: native scroll notifications, programmatic scrolls and their
//! confirmations, and event storms. This crate provides the host side of
//! that conversation in scripted form:
//!
//! - [`SimViewport`](viewport::SimViewport) stands in for the real scroll
//!   container, with browser-like clamping.
//! - [`GridDriver`](viewport::GridDriver) wires a viewport to a
//!   [`GridScroller`](gridport_core::GridScroller) and executes scroll plans
//!   the way an embedder would.
//! - [`ScrollCoalescer`](coalescer::ScrollCoalescer) batches high-frequency
//!   scroll notifications, latest position wins.
//! - [`ActionLog`](replay::ActionLog) records actions and snapshots as JSONL
//!   with blake3 digests for replay determinism checks.

pub mod coalescer;
pub mod replay;
pub mod viewport;

pub use coalescer::ScrollCoalescer;
pub use replay::ActionLog;
pub use viewport::{GridDriver, SimViewport};
