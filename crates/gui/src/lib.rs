// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cardhand widget demo GUI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod hand_view;

pub mod gui;
pub use gui::{AppFrame, Config};
