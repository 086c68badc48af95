//! Game configuration options.

/// Configuration options for a card game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use cardtable::GameOptions;
///
/// let options = GameOptions::default()
///     .with_players(4)
///     .with_hand_size(7)
///     .with_deal(false);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Number of seats.
    pub players: usize,
    /// Cards dealt to each player by [`Game::deal`](crate::Game::deal).
    pub hand_size: usize,
    /// Whether the game deals as soon as it is created.
    pub deal: bool,
    /// How many times the deck is shuffled at creation and after recycling.
    pub shuffle_passes: u8,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            players: 2,
            hand_size: 5,
            deal: true,
            shuffle_passes: 2,
        }
    }
}

impl GameOptions {
    /// Sets the number of seats.
    ///
    /// # Example
    ///
    /// ```
    /// use cardtable::GameOptions;
    ///
    /// let options = GameOptions::default().with_players(5);
    /// assert_eq!(options.players, 5);
    /// ```
    #[must_use]
    pub const fn with_players(mut self, players: usize) -> Self {
        self.players = players;
        self
    }

    /// Sets the number of cards dealt to each player.
    ///
    /// # Example
    ///
    /// ```
    /// use cardtable::GameOptions;
    ///
    /// let options = GameOptions::default().with_hand_size(2);
    /// assert_eq!(options.hand_size, 2);
    /// ```
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Sets whether the game deals on creation.
    ///
    /// # Example
    ///
    /// ```
    /// use cardtable::GameOptions;
    ///
    /// let options = GameOptions::default().with_deal(false);
    /// assert!(!options.deal);
    /// ```
    #[must_use]
    pub const fn with_deal(mut self, deal: bool) -> Self {
        self.deal = deal;
        self
    }

    /// Sets the number of shuffle passes.
    #[must_use]
    pub const fn with_shuffle_passes(mut self, passes: u8) -> Self {
        self.shuffle_passes = passes;
        self
    }
}
