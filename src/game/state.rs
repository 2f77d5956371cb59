//! Round phase types.

use core::fmt;

use serde::Serialize;

/// Where the current round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    /// No round has been dealt yet.
    NotStarted,
    /// Waiting for the player to hit or stand.
    PlayerActing,
    /// Dealer plays out their hand.
    DealerActing,
    /// Round has been settled; a new one may start.
    Settled,
}

impl Phase {
    /// Returns whether a round is in progress.
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::PlayerActing | Self::DealerActing)
    }

    /// Returns the phase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "NotStarted",
            Self::PlayerActing => "PlayerActing",
            Self::DealerActing => "DealerActing",
            Self::Settled => "Settled",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A player command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Draw another card.
    Hit,
    /// Keep the current hand and let the dealer play.
    Stand,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hit => f.write_str("hit"),
            Self::Stand => f.write_str("stand"),
        }
    }
}
