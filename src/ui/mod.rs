// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! egui frontend drawing the page and reporting gestures.

pub mod board;
pub mod details;
pub mod menu;
