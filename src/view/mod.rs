// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! View layer: the retained page tree, key listeners and user gestures.

pub mod events;
pub mod keys;
pub mod page;

pub use events::{CardGesture, CardRegion, DetailsGesture, FilterGesture, PageEvent};
pub use keys::{CancelGuard, CancelKeys, Key, KeyPress};
pub use page::{ComponentId, MenuSection, Page};
