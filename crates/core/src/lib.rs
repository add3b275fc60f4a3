// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Card hand widget core shared by hosts.
//!
//! The [hand::Hand] type keeps a set of declarative configuration
//! attributes mirrored into typed options, and routes pointer presses to
//! one or all of the card children of a [hand::CardHost].
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod attr;
pub mod hand;
