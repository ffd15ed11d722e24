// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Board sort orders.

use crate::models::Film;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKind {
    /// Collection order.
    #[default]
    Default,
    /// Newest production year first.
    Date,
    /// Highest rating first.
    Rating,
}

impl SortKind {
    pub const ALL: [SortKind; 3] = [SortKind::Default, SortKind::Date, SortKind::Rating];

    pub fn label(self) -> &'static str {
        match self {
            SortKind::Default => "Sort by default",
            SortKind::Date => "Sort by date",
            SortKind::Rating => "Sort by rating",
        }
    }
}

/// Sort in place. Stable, so ties keep collection order.
pub fn apply(kind: SortKind, films: &mut [&Film]) {
    match kind {
        SortKind::Default => {}
        SortKind::Date => films.sort_by(|a, b| b.year().cmp(&a.year())),
        SortKind::Rating => films.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
    }
}
