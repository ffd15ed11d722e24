// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Author names for newly posted comments.

use crate::config::default_authors;
use rand::Rng;

/// Picks an index in `0..len`. `len` is never zero.
pub trait IndexPicker {
    fn pick(&mut self, len: usize) -> usize;
}

/// Uniform random picks from the thread-local generator.
#[derive(Debug, Default)]
pub struct RandomPicker;

impl IndexPicker for RandomPicker {
    fn pick(&mut self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

pub struct AuthorPool {
    names: Vec<String>,
    picker: Box<dyn IndexPicker>,
}

impl AuthorPool {
    /// Pool with random picks. An empty name list falls back to the default authors.
    pub fn new(names: Vec<String>) -> Self {
        Self::with_picker(names, Box::new(RandomPicker))
    }

    pub fn with_picker(mut names: Vec<String>, picker: Box<dyn IndexPicker>) -> Self {
        if names.is_empty() {
            log::warn!("Empty author pool, using defaults");
            names = default_authors();
        }
        Self { names, picker }
    }

    pub fn next_author(&mut self) -> String {
        // Out-of-range picks wrap instead of panicking
        let index = self.picker.pick(self.names.len()) % self.names.len();
        self.names[index].clone()
    }
}
