//! Table configuration options.

/// Rounding mode for payouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down.
    Down,
    /// Round to nearest.
    Nearest,
}

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjround::TableOptions;
///
/// let options = TableOptions::default()
///     .with_minimum_bet(25)
///     .with_starting_balance(500)
///     .with_blackjack_pays(1.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TableOptions {
    /// Smallest accepted wager.
    pub minimum_bet: usize,
    /// Balance at the start of a session and after a new game.
    pub starting_balance: usize,
    /// Dealer draws while below this total (hard stand, no soft-17 rule).
    pub dealer_stands_on: u16,
    /// Winnings paid on a natural, as a multiple of the wager.
    ///
    /// The default of 1.0 returns the stake plus an equal amount, the same as
    /// an ordinary win.
    pub blackjack_pays: f64,
    /// Rounding mode for natural payouts.
    pub rounding_blackjack: RoundingMode,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            minimum_bet: 10,
            starting_balance: 1000,
            dealer_stands_on: 17,
            blackjack_pays: 1.0,
            rounding_blackjack: RoundingMode::Down,
        }
    }
}

impl TableOptions {
    /// Sets the table minimum.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::TableOptions;
    ///
    /// let options = TableOptions::default().with_minimum_bet(5);
    /// assert_eq!(options.minimum_bet, 5);
    /// ```
    #[must_use]
    pub const fn with_minimum_bet(mut self, minimum: usize) -> Self {
        self.minimum_bet = minimum;
        self
    }

    /// Sets the starting balance.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::TableOptions;
    ///
    /// let options = TableOptions::default().with_starting_balance(250);
    /// assert_eq!(options.starting_balance, 250);
    /// ```
    #[must_use]
    pub const fn with_starting_balance(mut self, balance: usize) -> Self {
        self.starting_balance = balance;
        self
    }

    /// Sets the total at which the dealer stops drawing.
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, total: u16) -> Self {
        self.dealer_stands_on = total;
        self
    }

    /// Sets the natural payout ratio.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::TableOptions;
    ///
    /// let options = TableOptions::default().with_blackjack_pays(1.5);
    /// assert_eq!(options.blackjack_pays, 1.5);
    /// ```
    #[must_use]
    pub const fn with_blackjack_pays(mut self, ratio: f64) -> Self {
        self.blackjack_pays = ratio;
        self
    }

    /// Sets the rounding mode for natural payouts.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::{TableOptions, RoundingMode};
    ///
    /// let options = TableOptions::default().with_rounding_blackjack(RoundingMode::Up);
    /// assert_eq!(options.rounding_blackjack, RoundingMode::Up);
    /// ```
    #[must_use]
    pub const fn with_rounding_blackjack(mut self, mode: RoundingMode) -> Self {
        self.rounding_blackjack = mode;
        self
    }
}
