//! Id generation
//!
//! Ids are decimal millisecond timestamps, bumped forward whenever the clock
//! has not advanced past the last issued id or an id already in the store.

use std::cell::Cell;

/// Issues timestamp-shaped ids that no caller-known id already uses
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: Cell<Option<i64>>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next free id for a wall-clock reading of `now_ms`.
    ///
    /// Starts past `floor` (the greatest id already in use) and past anything
    /// this generator returned, then steps upward while `is_taken` reports a
    /// clash. A bound with no successor in `i64` is skipped, so a stored id of
    /// `i64::MAX` does not pin every candidate to it. Returns `None` only when
    /// every id from the starting point up to `i64::MAX` is taken.
    pub fn next(
        &self,
        now_ms: i64,
        floor: Option<i64>,
        is_taken: impl Fn(&str) -> bool,
    ) -> Option<String> {
        let mut candidate = [self.last.get(), floor]
            .into_iter()
            .flatten()
            .filter_map(|bound| bound.checked_add(1))
            .fold(now_ms, i64::max);

        loop {
            let id = candidate.to_string();
            if !is_taken(&id) {
                self.last.set(Some(candidate));
                return Some(id);
            }
            candidate = candidate.checked_add(1)?;
        }
    }
}
