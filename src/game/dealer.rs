use crate::options::RoundingMode;
use crate::result::{Outcome, RoundResult};

use super::{Phase, RoundEngine};

#[cfg(feature = "std")]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => amount.ceil() as usize,
        RoundingMode::Down => amount.floor() as usize,
        RoundingMode::Nearest => amount.round() as usize,
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => libm::ceil(amount) as usize,
        RoundingMode::Down => libm::floor(amount) as usize,
        RoundingMode::Nearest => libm::round(amount) as usize,
    }
}

impl RoundEngine {
    /// Reveals the hole card, lets the dealer draw and settles against the
    /// player's total.
    ///
    /// The dealer draws while below `dealer_stands_on` and stands on any
    /// total at or above it, soft or hard.
    pub(super) fn play_out_dealer(&mut self) {
        self.dealer.reveal_hole();
        self.phase = Phase::DealerActing;

        let mut drawn = 0usize;
        while self.dealer.value() < self.options.dealer_stands_on {
            let card = self.draw();
            self.dealer.add_card(card);
            drawn += 1;
        }

        let dealer_value = self.dealer.value();
        let player_value = self.player.value();
        tracing::debug!(drawn, dealer_value, player_value, "dealer played");

        let outcome = if dealer_value > 21 {
            Outcome::DealerBust
        } else if dealer_value > player_value {
            Outcome::DealerWin
        } else if dealer_value < player_value {
            Outcome::PlayerWin
        } else {
            Outcome::Push
        };

        self.settle(outcome, false);
    }

    /// Natural winnings for `wager` under the configured ratio and rounding.
    fn blackjack_winnings(&self, wager: usize) -> usize {
        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for monetary values"
        )]
        let winnings = (wager as f64) * self.options.blackjack_pays;
        round_amount(winnings, self.options.rounding_blackjack)
    }

    /// Ends the round, credits the payout and records the result.
    ///
    /// Wins return the stake plus equal winnings, a push returns the stake and
    /// a loss returns nothing (the wager was taken at the deal). Payouts and
    /// the balance saturate at `usize::MAX`.
    pub(super) fn settle(&mut self, outcome: Outcome, natural: bool) {
        debug_assert!(self.phase.is_active(), "round settled twice");

        let wager = self.wager;
        let payout = match outcome {
            Outcome::BlackjackWin => wager.saturating_add(self.blackjack_winnings(wager)),
            Outcome::PlayerWin | Outcome::DealerBust => wager.saturating_mul(2),
            Outcome::Push => wager,
            Outcome::PlayerBust | Outcome::DealerWin => 0,
        };

        self.balance = self.balance.saturating_add(payout);
        let result = RoundResult {
            outcome,
            natural,
            wager,
            payout,
            player_value: self.player.value(),
            dealer_value: self.dealer.value(),
        };
        self.last_result = Some(result);
        self.rounds_played += 1;
        self.phase = Phase::Settled;

        tracing::info!(
            outcome = outcome.as_str(),
            wager,
            payout,
            balance = self.balance,
            "round settled"
        );
    }
}
