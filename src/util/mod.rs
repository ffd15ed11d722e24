// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Pure helpers over film collections.

pub mod filter;
pub mod sort;
