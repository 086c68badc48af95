//! A blackjack table shared between threads.

use crate::blackjack::Blackjack;
use crate::sync::Mutex;

/// A [`Blackjack`] table behind a lock.
///
/// The table itself is single-threaded. Holding the lock is the only way to
/// act on it, so one caller at a time owns the turn.
///
/// # Example
///
/// ```
/// use cardtable::{Blackjack, SharedTable};
///
/// let shared = SharedTable::new(Blackjack::new(1, 3).unwrap());
/// let seat = shared.with(|table| table.game().turn());
/// assert_eq!(seat, 0);
/// ```
pub struct SharedTable {
    table: Mutex<Blackjack>,
}

impl SharedTable {
    /// Wraps a table.
    #[must_use]
    pub const fn new(table: Blackjack) -> Self {
        Self {
            table: Mutex::new(table),
        }
    }

    /// Runs `f` with exclusive access to the table.
    pub fn with<T>(&self, f: impl FnOnce(&mut Blackjack) -> T) -> T {
        let mut table = self.table.lock();
        f(&mut *table)
    }

    /// Returns the table, releasing the lock for good.
    #[must_use]
    pub fn into_inner(self) -> Blackjack {
        self.table.into_inner()
    }
}
