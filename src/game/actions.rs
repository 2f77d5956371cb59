use crate::error::ActionError;
use crate::result::Outcome;
use crate::snapshot::RoundSnapshot;

use super::{Action, Phase, RoundEngine};

impl RoundEngine {
    fn ensure_player_acting(&self, action: Action) -> Result<(), ActionError> {
        if self.phase != Phase::PlayerActing {
            tracing::debug!(%action, phase = %self.phase, "illegal transition");
            return Err(ActionError::IllegalTransition {
                action,
                phase: self.phase,
            });
        }

        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// Going over 21 settles the round as a bust. Reaching exactly 21 stands
    /// automatically.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not waiting for the player.
    pub fn hit(&mut self) -> Result<RoundSnapshot, ActionError> {
        self.ensure_player_acting(Action::Hit)?;

        let card = self.draw();
        self.player.add_card(card);

        let total = self.player.value();
        tracing::debug!(%card, total, "player hit");

        if total > 21 {
            self.settle(Outcome::PlayerBust, false);
        } else if total == 21 {
            self.play_out_dealer();
        }

        Ok(self.snapshot())
    }

    /// Player action: Stand (keep current hand).
    ///
    /// Reveals the dealer's hole card, plays out the dealer hand and settles
    /// the round.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not waiting for the player.
    pub fn stand(&mut self) -> Result<RoundSnapshot, ActionError> {
        self.ensure_player_acting(Action::Stand)?;

        self.play_out_dealer();

        Ok(self.snapshot())
    }
}
