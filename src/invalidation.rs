//! Per-collection invalidation counters.
//!
//! SYSTEM CONTEXT
//! ==============
//! A completed mutation bumps the generation of every collection it affects.
//! Each collection has exactly one subscriber that re-fetches when its
//! generation changes. Nothing orders the resulting fetches.

#[cfg(test)]
#[path = "invalidation_test.rs"]
mod invalidation_test;

/// Remote collections the dashboard displays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Collection {
    Entries,
    Exits,
    Products,
    Inventory,
    TotalStock,
}

impl Collection {
    pub const ALL: [Collection; 5] = [
        Collection::Entries,
        Collection::Exits,
        Collection::Products,
        Collection::Inventory,
        Collection::TotalStock,
    ];

    fn index(self) -> usize {
        match self {
            Self::Entries => 0,
            Self::Exits => 1,
            Self::Products => 2,
            Self::Inventory => 3,
            Self::TotalStock => 4,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Invalidations {
    generations: [u64; 5],
}

impl Invalidations {
    pub fn invalidate(&mut self, collection: Collection) {
        let slot = &mut self.generations[collection.index()];
        *slot = slot.wrapping_add(1);
    }

    pub fn invalidate_all(&mut self, collections: &[Collection]) {
        for c in collections {
            self.invalidate(*c);
        }
    }

    pub fn generation(&self, collection: Collection) -> u64 {
        self.generations[collection.index()]
    }
}
