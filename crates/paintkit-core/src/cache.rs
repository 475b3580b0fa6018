// cache.rs
// Author: Dustin Pilgrim
// License: MIT
//
// Memoised shade lookups.
//
// Every (colour, direction, percent) triple maps to exactly one output, so the
// cache never needs invalidation. A miss is computed outside the lock; two
// threads racing on the same key both compute the same value and the first
// insert wins.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use once_cell::sync::OnceCell;

use crate::colour::Colour;
use crate::shade::{self, Direction, Shade};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct ShadeKey {
    colour: Colour,
    direction: Direction,
    percent_bits: u32,
}

impl ShadeKey {
    fn new(colour: Colour, direction: Direction, percent: f32) -> Self {
        // -0.0 and 0.0 are the same request
        let percent = if percent == 0.0 { 0.0 } else { percent };
        Self {
            colour,
            direction,
            percent_bits: percent.to_bits(),
        }
    }
}

/// Unbounded, thread-safe memo table for the shade functions.
#[derive(Debug, Default)]
pub struct ShadeCache {
    entries: RwLock<HashMap<ShadeKey, Colour>>,
}

static GLOBAL: OnceCell<ShadeCache> = OnceCell::new();

impl ShadeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide instance behind the free functions.
    pub fn global() -> &'static ShadeCache {
        GLOBAL.get_or_init(ShadeCache::new)
    }

    pub fn adjust(&self, colour: Colour, direction: Direction, percent: f32) -> Colour {
        let key = ShadeKey::new(colour, direction, percent);

        if let Some(hit) = self.read_entry(&key) {
            return hit;
        }

        let computed = shade::adjust(colour, direction, percent);

        // a poisoned lock still holds valid entries; keep serving
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        *entries.entry(key).or_insert(computed)
    }

    pub fn shade(&self, colour: Colour, shade: Shade) -> Colour {
        self.adjust(colour, shade.direction(), shade.percent())
    }

    pub fn light(&self, colour: Colour) -> Colour {
        self.shade(colour, Shade::Light)
    }

    pub fn light_by(&self, colour: Colour, percent: f32) -> Colour {
        self.adjust(colour, Direction::Lighter, percent)
    }

    pub fn light_light(&self, colour: Colour) -> Colour {
        self.shade(colour, Shade::LightLight)
    }

    pub fn dark(&self, colour: Colour) -> Colour {
        self.shade(colour, Shade::Dark)
    }

    pub fn dark_by(&self, colour: Colour, percent: f32) -> Colour {
        self.adjust(colour, Direction::Darker, percent)
    }

    pub fn dark_dark(&self, colour: Colour) -> Colour {
        self.shade(colour, Shade::DarkDark)
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    fn read_entry(&self, key: &ShadeKey) -> Option<Colour> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .copied()
    }
}

/// Half-way toward the highlight.
pub fn light(colour: Colour) -> Colour {
    ShadeCache::global().light(colour)
}

pub fn light_by(colour: Colour, percent: f32) -> Colour {
    ShadeCache::global().light_by(colour, percent)
}

/// The highlight itself.
pub fn light_light(colour: Colour) -> Colour {
    ShadeCache::global().light_light(colour)
}

/// Half-way from the shadow anchor toward black.
pub fn dark(colour: Colour) -> Colour {
    ShadeCache::global().dark(colour)
}

pub fn dark_by(colour: Colour, percent: f32) -> Colour {
    ShadeCache::global().dark_by(colour, percent)
}

/// Black, for every chromatic or achromatic input.
pub fn dark_dark(colour: Colour) -> Colour {
    ShadeCache::global().dark_dark(colour)
}

pub fn is_dark(colour: Colour) -> bool {
    shade::is_dark(colour)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;

    #[test]
    fn repeated_lookup_is_identical_and_cached_once() {
        let cache = ShadeCache::new();
        let base = Colour::rgb(125, 40, 200);

        let first = cache.dark(base);
        let second = cache.dark(base);

        assert_eq!(first, Colour::rgb(41, 14, 67));
        assert_eq!(first, second);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn alpha_is_part_of_the_key() {
        let cache = ShadeCache::new();
        let base = Colour::rgb(255, 200, 255);

        let opaque = cache.light(base);
        let clear = cache.light(base.with_alpha(0));

        assert_eq!(opaque, clear);
        assert_eq!(clear.a, 255);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn direction_is_part_of_the_key() {
        let cache = ShadeCache::new();
        let light = cache.light_by(Colour::RED, 0.5);
        let dark = cache.dark_by(Colour::RED, 0.5);

        assert_eq!(light, Colour::rgb(255, 64, 64));
        assert_eq!(dark, Colour::rgb(85, 0, 0));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn signed_zero_shares_an_entry() {
        let cache = ShadeCache::new();
        assert_eq!(cache.dark_by(Colour::RED, 0.0), cache.dark_by(Colour::RED, -0.0));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn named_shades_match_general_form() {
        let cache = ShadeCache::new();
        let base = Colour::rgb(0, 85, 0);

        assert_eq!(cache.light(base), cache.light_by(base, 0.5));
        assert_eq!(cache.light_light(base), cache.light_by(base, 1.0));
        assert_eq!(cache.dark(base), cache.dark_by(base, 0.5));
        assert_eq!(cache.dark_dark(base), Colour::BLACK);
    }

    #[test]
    fn clear_empties_the_table() {
        let cache = ShadeCache::new();
        cache.light(Colour::RED);
        assert!(!cache.is_empty());

        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.light(Colour::RED), Colour::rgb(255, 64, 64));
    }

    #[test]
    fn global_functions_agree_with_a_private_cache() {
        let private = ShadeCache::new();
        let base = Colour::rgb(0, 28, 0);

        assert_eq!(light(base), private.light(base));
        assert_eq!(light_light(base), private.light_light(base));
        assert_eq!(dark(base), private.dark(base));
        assert_eq!(dark_dark(base), private.dark_dark(base));
        assert_eq!(light_by(base, 0.25), private.light_by(base, 0.25));
        assert_eq!(dark_by(base, 0.25), private.dark_by(base, 0.25));
        assert!(is_dark(base));
    }

    #[test]
    fn concurrent_lookups_agree() {
        let cache = Arc::new(ShadeCache::new());
        let colours: Vec<Colour> = (0..=255u8)
            .step_by(15)
            .map(|v| Colour::rgb(v, 255 - v, v / 2))
            .collect();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let cache = Arc::clone(&cache);
                let colours = colours.clone();
                thread::spawn(move || {
                    colours
                        .iter()
                        .map(|&c| (cache.dark(c), cache.light_light(c)))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let results: Vec<_> = handles
            .into_iter()
            .map(|h| h.join().expect("worker panicked"))
            .collect();

        for r in &results[1..] {
            assert_eq!(r, &results[0]);
        }
        for (i, &c) in colours.iter().enumerate() {
            assert_eq!(results[0][i].0, shade::adjust(c, Direction::Darker, 0.5));
        }
        assert_eq!(cache.len(), colours.len() * 2);
    }
}
