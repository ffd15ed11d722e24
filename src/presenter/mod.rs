// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Presenters mediating between the models and the page.

pub mod authors;
pub mod draft;
pub mod film;
pub mod filter;
pub mod site;

pub use site::SitePresenter;
