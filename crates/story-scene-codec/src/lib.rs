// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! SVG surface and test harness for story-scene-port.
//!
//! This crate provides:
//! - SvgSurface: retains draw batches and serializes them as SVG
//! - MockSurface for headless testing of the narrative engine
//!
//! # Design
//!
//! Serialization is deliberately separated from the port contract.
//! This keeps story-scene-port pure and dependency-free.

mod mock_adapter;
mod retained;
mod svg;

pub use mock_adapter::*;
pub use svg::*;
