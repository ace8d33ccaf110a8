//! Message id sequencer for outbound chats.

use std::sync::atomic::{AtomicU64, Ordering};

/// Draws the correlation ids (`msgId`) attached to `WRITE` and `FORWARD`.
///
/// Starts at a base (1 by default) and counts up by one per draw. Ids are
/// strictly increasing and never repeat for the lifetime of the instance;
/// the only way to restart the sequence is to build a new generator.
///
/// Each [`TalkChannelSession`](crate::TalkChannelSession) owns its own
/// generator. Nothing else can see or advance it.
///
/// The counter is an `AtomicU64` so `next` works through `&self` and two
/// sends on the same channel may be in flight at once without handing out
/// the same id.
#[derive(Debug)]
pub struct IdGenerator {
    next: AtomicU64,
}

impl IdGenerator {
    /// A generator whose first id is 1.
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// A generator whose first id is `base`.
    pub fn starting_at(base: u64) -> Self {
        Self {
            next: AtomicU64::new(base),
        }
    }

    /// Draws the next id.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use super::*;

    #[test]
    fn test_next_starts_at_one() {
        let ids = IdGenerator::new();
        assert_eq!(ids.next(), 1);
        assert_eq!(ids.next(), 2);
    }

    #[test]
    fn test_next_strictly_increasing() {
        let ids = IdGenerator::new();
        let drawn: Vec<u64> = (0..1000).map(|_| ids.next()).collect();

        assert!(drawn.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_starting_at_custom_base() {
        let ids = IdGenerator::starting_at(500);
        assert_eq!(ids.next(), 500);
        assert_eq!(ids.next(), 501);
    }

    #[test]
    fn test_instances_are_independent() {
        let a = IdGenerator::new();
        let b = IdGenerator::new();
        a.next();
        a.next();

        assert_eq!(b.next(), 1, "drawing from one must not advance the other");
    }

    #[test]
    fn test_next_from_many_threads_never_repeats() {
        let ids = Arc::new(IdGenerator::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let ids = Arc::clone(&ids);
                std::thread::spawn(move || (0..250).map(|_| ids.next()).collect::<Vec<_>>())
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(seen.insert(id), "id {id} drawn twice");
            }
        }
        assert_eq!(seen.len(), 1000);
    }
}
