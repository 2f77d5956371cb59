//! Read-only view of a round handed to presentation layers.

extern crate alloc;

use alloc::vec::Vec;

use serde::Serialize;

use crate::card::Card;
use crate::game::Phase;
use crate::result::{Outcome, RoundResult};

/// Everything a front end needs to draw the table after a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundSnapshot {
    /// Cards in the player's hand.
    pub player_hand: Vec<Card>,
    /// Cards in the dealer's hand, hole card first.
    pub dealer_hand: Vec<Card>,
    /// Whether the dealer's hole card may be shown.
    pub dealer_hole_revealed: bool,
    /// Current phase.
    pub phase: Phase,
    /// The player's total.
    pub player_total: u16,
    /// The dealer's full total.
    pub dealer_total: u16,
    /// The dealer's total as visible to the player.
    pub dealer_visible_total: u16,
    /// Balance after any deduction or settlement.
    pub balance: usize,
    /// Wager of the current or most recent round (0 before the first deal).
    pub wager: usize,
    /// Outcome of the most recent settled round.
    pub last_outcome: Option<Outcome>,
    /// Full result of the most recent settled round.
    pub last_result: Option<RoundResult>,
}

impl RoundSnapshot {
    /// Returns the dealer total a front end should display.
    #[must_use]
    pub const fn displayed_dealer_total(&self) -> u16 {
        if self.dealer_hole_revealed {
            self.dealer_total
        } else {
            self.dealer_visible_total
        }
    }
}
