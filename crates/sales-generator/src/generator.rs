//! Main generator for producing sales events.

use crate::generators::numeric::generate_int_range;
use crate::generators::timestamp::generate_timestamp_now_millis;
use crate::generators::uuid::generate_uuid_v4;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sales_types::{SalesEvent, QTY_RANGE, SKU_RANGE, STORE_ID_RANGE};

/// Generator that produces random sales events.
pub struct EventGenerator {
    /// Uniform, non-cryptographic random source
    rng: StdRng,
    /// Number of events generated so far
    index: u64,
}

impl EventGenerator {
    /// Create a generator seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            index: 0,
        }
    }

    /// Create a generator with a fixed seed.
    ///
    /// Two generators with the same seed yield the same sequence of events,
    /// apart from the `ts` field which always reads the wall clock.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            index: 0,
        }
    }

    /// Get the number of events generated so far.
    pub fn current_index(&self) -> u64 {
        self.index
    }

    /// Generate the next event.
    pub fn next_event(&mut self) -> SalesEvent {
        let event = SalesEvent {
            event_id: generate_uuid_v4(&mut self.rng),
            store_id: generate_int_range(&mut self.rng, &STORE_ID_RANGE),
            sku: generate_int_range(&mut self.rng, &SKU_RANGE),
            qty: generate_int_range(&mut self.rng, &QTY_RANGE),
            ts: generate_timestamp_now_millis(),
        };

        self.index += 1;
        event
    }

    /// Generate `count` events lazily.
    pub fn events(&mut self, count: u64) -> EventIterator<'_> {
        EventIterator {
            generator: self,
            remaining: count,
        }
    }
}

impl Default for EventGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator that lazily generates events.
pub struct EventIterator<'a> {
    generator: &'a mut EventGenerator,
    remaining: u64,
}

impl Iterator for EventIterator<'_> {
    type Item = SalesEvent;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        Some(self.generator.next_event())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for EventIterator<'_> {}
