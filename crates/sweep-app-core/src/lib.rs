// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared application services for Sweep tools.
//! Keeps host adapters thin: storage backends implement [`config::ConfigStore`],
//! typed values go through [`config::ConfigService`].

pub mod config;
