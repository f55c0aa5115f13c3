//! Table configuration options.

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use blackjack_table::TableOptions;
///
/// let options = TableOptions::default()
///     .with_starting_bankroll(250)
///     .with_seats(2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableOptions {
    /// Money each player starts the session with.
    pub starting_bankroll: u32,
    /// Number of player seats, not counting the dealer.
    pub seats: u8,
}

/// Default number of player seats.
pub const DEFAULT_SEATS: u8 = 4;

/// Default starting bankroll.
pub const DEFAULT_BANKROLL: u32 = 100;

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            starting_bankroll: DEFAULT_BANKROLL,
            seats: DEFAULT_SEATS,
        }
    }
}

impl TableOptions {
    /// Sets the starting bankroll.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_table::TableOptions;
    ///
    /// let options = TableOptions::default().with_starting_bankroll(500);
    /// assert_eq!(options.starting_bankroll, 500);
    /// ```
    #[must_use]
    pub const fn with_starting_bankroll(mut self, bankroll: u32) -> Self {
        self.starting_bankroll = bankroll;
        self
    }

    /// Sets the number of player seats.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_table::TableOptions;
    ///
    /// let options = TableOptions::default().with_seats(1);
    /// assert_eq!(options.seats, 1);
    /// ```
    #[must_use]
    pub const fn with_seats(mut self, seats: u8) -> Self {
        self.seats = seats;
        self
    }
}
