//! Round engine and state management.

use crate::card::Card;
use crate::hand::{DealerHand, Hand};
use crate::options::TableOptions;
use crate::result::RoundResult;
use crate::shoe::Shoe;
use crate::snapshot::RoundSnapshot;

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use bet::parse_wager;
pub use state::{Action, Phase};

/// A single-player blackjack engine that drives a round from deal to
/// settlement.
///
/// The engine owns the shoe, both hands, the wager and the balance. Callers
/// drive it with [`RoundEngine::start`], [`RoundEngine::hit`] and
/// [`RoundEngine::stand`]; each command runs to completion and returns a
/// [`RoundSnapshot`] for rendering.
#[derive(Debug, Clone)]
pub struct RoundEngine {
    /// Cards in the shoe.
    pub shoe: Shoe,
    /// Table options.
    pub options: TableOptions,
    phase: Phase,
    balance: usize,
    wager: usize,
    player: Hand,
    dealer: DealerHand,
    last_result: Option<RoundResult>,
    rounds_played: usize,
}

impl RoundEngine {
    /// Creates a new engine with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::{Phase, RoundEngine, TableOptions};
    ///
    /// let engine = RoundEngine::new(TableOptions::default(), 42);
    /// assert_eq!(engine.balance(), 1000);
    /// assert_eq!(engine.phase(), Phase::NotStarted);
    /// ```
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> Self {
        let balance = options.starting_balance;

        Self {
            shoe: Shoe::new(seed),
            options,
            phase: Phase::NotStarted,
            balance,
            wager: 0,
            player: Hand::new(),
            dealer: DealerHand::new(),
            last_result: None,
            rounds_played: 0,
        }
    }

    /// Draws a card from the shoe.
    fn draw(&mut self) -> Card {
        self.shoe.draw()
    }

    /// Starts a fresh session: balance back to the starting balance, hands
    /// cleared, no round in progress.
    ///
    /// An unfinished round is abandoned and its wager is not refunded.
    pub fn new_game(&mut self) {
        if self.phase.is_active() {
            tracing::debug!(wager = self.wager, "abandoning round in progress");
        }
        self.balance = self.options.starting_balance;
        self.wager = 0;
        self.player.clear();
        self.dealer.clear();
        self.last_result = None;
        self.phase = Phase::NotStarted;
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the current balance.
    #[must_use]
    pub const fn balance(&self) -> usize {
        self.balance
    }

    /// Returns the wager of the current or most recent round.
    #[must_use]
    pub const fn wager(&self) -> usize {
        self.wager
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer
    }

    /// Returns the result of the most recent settled round.
    #[must_use]
    pub const fn last_result(&self) -> Option<RoundResult> {
        self.last_result
    }

    /// Returns the number of rounds settled since the engine was created.
    #[must_use]
    pub const fn rounds_played(&self) -> usize {
        self.rounds_played
    }

    /// Returns whether the balance still covers the table minimum.
    #[must_use]
    pub const fn can_cover_minimum(&self) -> bool {
        self.balance >= self.options.minimum_bet
    }

    /// Captures the current table state.
    #[must_use]
    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            player_hand: self.player.cards().to_vec(),
            dealer_hand: self.dealer.cards().to_vec(),
            dealer_hole_revealed: self.dealer.is_hole_revealed(),
            phase: self.phase,
            player_total: self.player.value(),
            dealer_total: self.dealer.value(),
            dealer_visible_total: self.dealer.visible_value(),
            balance: self.balance,
            wager: self.wager,
            last_outcome: self.last_result.map(|result| result.outcome),
            last_result: self.last_result,
        }
    }
}
