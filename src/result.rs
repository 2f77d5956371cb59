//! Round outcome types for settlement.

use serde::Serialize;

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    /// Player was dealt a natural and the dealer was not.
    BlackjackWin,
    /// Player's total beat the dealer's.
    PlayerWin,
    /// Dealer went over 21.
    DealerBust,
    /// Dealer's total beat the player's.
    DealerWin,
    /// Player went over 21.
    PlayerBust,
    /// Equal totals; the wager is returned.
    Push,
}

/// Coarse outcome class used by presentation layers to style the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StatusClass {
    /// No outcome to show.
    Neutral,
    /// Player came out ahead.
    Win,
    /// Player lost the wager (also used for rejected bets).
    Lose,
    /// Wager returned.
    Draw,
}

impl StatusClass {
    /// Returns the class name: `""`, `"win"`, `"lose"` or `"draw"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Neutral => "",
            Self::Win => "win",
            Self::Lose => "lose",
            Self::Draw => "draw",
        }
    }
}

impl Outcome {
    /// Returns the class of the outcome.
    #[must_use]
    pub const fn class(self) -> StatusClass {
        match self {
            Self::BlackjackWin | Self::PlayerWin | Self::DealerBust => StatusClass::Win,
            Self::DealerWin | Self::PlayerBust => StatusClass::Lose,
            Self::Push => StatusClass::Draw,
        }
    }

    /// Returns whether the player is paid winnings.
    #[must_use]
    pub const fn is_player_win(self) -> bool {
        matches!(self.class(), StatusClass::Win)
    }

    /// Returns the outcome name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BlackjackWin => "BlackjackWin",
            Self::PlayerWin => "PlayerWin",
            Self::DealerBust => "DealerBust",
            Self::DealerWin => "DealerWin",
            Self::PlayerBust => "PlayerBust",
            Self::Push => "Push",
        }
    }
}

/// Result of a settled round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoundResult {
    /// The outcome of the round.
    pub outcome: Outcome,
    /// Whether the round was decided on the initial deal.
    pub natural: bool,
    /// The wager for the round.
    pub wager: usize,
    /// Amount credited back to the balance (stake included).
    pub payout: usize,
    /// The player's final total.
    pub player_value: u16,
    /// The dealer's final total.
    pub dealer_value: u16,
}

impl RoundResult {
    /// Net result (positive = profit, negative = loss), clamped to `isize`.
    #[must_use]
    pub fn net(&self) -> isize {
        if self.payout >= self.wager {
            isize::try_from(self.payout - self.wager).unwrap_or(isize::MAX)
        } else {
            isize::try_from(self.wager - self.payout).map_or(isize::MIN, |loss| -loss)
        }
    }

    /// Returns the status line shown to the player.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self.outcome {
            Outcome::BlackjackWin => "Blackjack! You Win!",
            Outcome::Push if self.natural => "Push! Both have Blackjack",
            Outcome::Push => "Push! It's a Tie",
            Outcome::PlayerWin => "You Win!",
            Outcome::DealerBust => "Dealer Bust! You Win!",
            Outcome::DealerWin => "Dealer Wins!",
            Outcome::PlayerBust => "Bust! You Lose!",
        }
    }
}
