use crate::error::{StartError, WagerError};
use crate::result::Outcome;
use crate::snapshot::RoundSnapshot;

use super::{Phase, RoundEngine};

/// Parses bet input text the way a browser number field is read.
///
/// Leading whitespace and a `+` sign are skipped, then the leading run of
/// digits is taken and anything after it ignored, so `"25"`, `" 25 "` and
/// `"25.9"` all read as 25. A leading `-` reads as zero. Oversized numbers
/// saturate.
///
/// # Errors
///
/// Returns [`WagerError::NotANumber`] if the text does not start with a
/// digit.
///
/// # Example
///
/// ```
/// use bjround::{WagerError, game::parse_wager};
///
/// assert_eq!(parse_wager("100"), Ok(100));
/// assert_eq!(parse_wager("12abc"), Ok(12));
/// assert_eq!(parse_wager("abc"), Err(WagerError::NotANumber));
/// ```
pub fn parse_wager(input: &str) -> Result<usize, WagerError> {
    let trimmed = input.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut digits = unsigned.bytes().take_while(u8::is_ascii_digit).peekable();
    if digits.peek().is_none() {
        return Err(WagerError::NotANumber);
    }
    if negative {
        return Ok(0);
    }

    Ok(digits.fold(0usize, |acc, digit| {
        acc.saturating_mul(10)
            .saturating_add(usize::from(digit - b'0'))
    }))
}

impl RoundEngine {
    fn validate_wager(&self, wager: usize) -> Result<usize, WagerError> {
        if wager < self.options.minimum_bet {
            return Err(WagerError::BelowMinimum {
                minimum: self.options.minimum_bet,
            });
        }

        if wager > self.balance {
            return Err(WagerError::ExceedsBalance {
                balance: self.balance,
            });
        }

        Ok(wager)
    }

    /// Starts a round: takes the wager from the balance and deals two cards
    /// to the player and two to the dealer, alternating, player first.
    ///
    /// If the player is dealt a natural, the dealer's hole card is revealed
    /// and the round settles immediately as a push (dealer natural too) or a
    /// blackjack win. Otherwise the round waits in [`Phase::PlayerActing`].
    ///
    /// # Errors
    ///
    /// Returns an error if a round is already in progress or the wager is
    /// below the table minimum or above the balance. Nothing changes on
    /// error.
    pub fn start(&mut self, wager: usize) -> Result<RoundSnapshot, StartError> {
        if self.phase.is_active() {
            tracing::debug!(phase = %self.phase, "start rejected");
            return Err(StartError::RoundInProgress(self.phase));
        }

        let wager = self.validate_wager(wager).inspect_err(|err| {
            tracing::debug!(wager, balance = self.balance, %err, "wager rejected");
        })?;

        self.balance -= wager;
        self.wager = wager;
        self.player.clear();
        self.dealer.clear();
        self.last_result = None;
        self.phase = Phase::PlayerActing;

        let card = self.draw();
        self.player.add_card(card);
        let card = self.draw();
        self.dealer.add_card(card);
        let card = self.draw();
        self.player.add_card(card);
        let card = self.draw();
        self.dealer.add_card(card);

        tracing::debug!(
            wager,
            balance = self.balance,
            player_total = self.player.value(),
            "round dealt"
        );

        if self.player.value() == 21 {
            self.dealer.reveal_hole();
            let outcome = if self.dealer.value() == 21 {
                Outcome::Push
            } else {
                Outcome::BlackjackWin
            };
            self.settle(outcome, true);
        }

        Ok(self.snapshot())
    }

    /// Parses `input` with [`parse_wager`] and starts a round with it.
    ///
    /// # Errors
    ///
    /// Returns [`StartError::InvalidWager`] for unreadable input, otherwise
    /// the same errors as [`RoundEngine::start`].
    pub fn start_with_input(&mut self, input: &str) -> Result<RoundSnapshot, StartError> {
        if self.phase.is_active() {
            return Err(StartError::RoundInProgress(self.phase));
        }
        let wager = parse_wager(input)?;
        self.start(wager)
    }
}
