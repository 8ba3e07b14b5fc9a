use std::sync::{Mutex, PoisonError};

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use tracing::debug;

use mindset_core::catalog;

/// Draws quotes uniformly at random from a fixed list.
///
/// The RNG is injected so demos and tests can pin the sequence with a seed.
#[derive(Debug)]
pub struct QuotePicker {
    quotes: &'static [&'static str],
    rng: Mutex<StdRng>,
}

impl QuotePicker {
    /// Picks from the built-in quotes, seeded from OS entropy unless `seed` is set.
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Self::with_rng(catalog::quotes(), rng)
    }

    #[must_use]
    pub fn with_rng(quotes: &'static [&'static str], rng: StdRng) -> Self {
        Self {
            quotes,
            rng: Mutex::new(rng),
        }
    }

    #[must_use]
    pub fn quotes(&self) -> &'static [&'static str] {
        self.quotes
    }

    /// Returns one quote, or `None` when the list is empty.
    pub fn pick(&self) -> Option<&'static str> {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        let quote = self.quotes.choose(&mut *rng).copied();
        debug!(found = quote.is_some(), "quote drawn");
        quote
    }
}
