// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared application services for the story viewer (config, settings, notices).
//! Keeps front ends thin and framework-agnostic.

pub mod config;
pub mod config_port;
pub mod notice;
pub mod settings;
