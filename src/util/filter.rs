// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Filtering films by their user flags.

use crate::models::{Film, FilterKind};

/// Whether a film belongs to the given filter.
pub fn matches(kind: FilterKind, film: &Film) -> bool {
    match kind {
        FilterKind::All => true,
        FilterKind::Watchlist => film.in_watchlist,
        FilterKind::History => film.is_watched,
        FilterKind::Favorites => film.is_favorite,
    }
}

/// Films matching the filter, in collection order.
pub fn apply(kind: FilterKind, films: &[Film]) -> Vec<&Film> {
    films.iter().filter(|film| matches(kind, film)).collect()
}

/// Number of films matching the filter.
pub fn count(kind: FilterKind, films: &[Film]) -> usize {
    films.iter().filter(|film| matches(kind, film)).count()
}

#[cfg(test)]
mod tests {
    use crate::models::{fixtures, FilmFlag};

    use super::*;

    fn flagged() -> Vec<Film> {
        let mut films = fixtures::films(6);
        films[0] = films[0].toggled(FilmFlag::Watchlist);
        films[1] = films[1].toggled(FilmFlag::Watchlist).toggled(FilmFlag::Watched);
        films[2] = films[2].toggled(FilmFlag::Favorite);
        films[4] = films[4]
            .toggled(FilmFlag::Watched)
            .toggled(FilmFlag::Favorite)
            .toggled(FilmFlag::Watchlist);
        films
    }

    fn ids(films: Vec<&Film>) -> Vec<u32> {
        films.iter().map(|f| f.id.0).collect()
    }

    #[test]
    fn test_all_returns_everything() {
        let films = flagged();
        let all: Vec<Film> = apply(FilterKind::All, &films).into_iter().cloned().collect();
        assert_eq!(all, films);
    }

    #[test]
    fn test_filters_follow_flags() {
        let films = flagged();

        assert_eq!(ids(apply(FilterKind::Watchlist, &films)), vec![0, 1, 4]);
        assert_eq!(ids(apply(FilterKind::History, &films)), vec![1, 4]);
        assert_eq!(ids(apply(FilterKind::Favorites, &films)), vec![2, 4]);

        for kind in FilterKind::ALL {
            for film in apply(kind, &films) {
                assert!(matches(kind, film));
            }
        }
    }

    #[test]
    fn test_counts_match_flag_totals() {
        let films = flagged();

        assert_eq!(count(FilterKind::All, &films), 6);
        assert_eq!(count(FilterKind::Watchlist, &films), films.iter().filter(|f| f.in_watchlist).count());
        assert_eq!(count(FilterKind::History, &films), films.iter().filter(|f| f.is_watched).count());
        assert_eq!(count(FilterKind::Favorites, &films), films.iter().filter(|f| f.is_favorite).count());
    }

    #[test]
    fn test_empty_collection() {
        for kind in FilterKind::ALL {
            assert!(apply(kind, &[]).is_empty());
        }
    }
}
