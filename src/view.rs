//! Presentation contract and the command adapter that drives it.
//!
//! The engine knows nothing about rendering. A front end implements
//! [`Presenter`] and hands it to a [`Table`], which turns user commands into
//! engine calls and pushes the resulting snapshot back out.

use crate::card::Card;
use crate::error::{ActionError, StartError};
use crate::game::{Phase, RoundEngine};
use crate::result::StatusClass;
use crate::snapshot::RoundSnapshot;

/// Status line shown when a bet cannot be accepted.
pub const INVALID_BET_MESSAGE: &str = "Invalid bet amount!";

/// Which side of the table a hand belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    /// The player.
    Player,
    /// The dealer.
    Dealer,
}

/// Which controls a front end should enable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Controls {
    /// Deal button.
    pub deal: bool,
    /// Hit button.
    pub hit: bool,
    /// Stand button.
    pub stand: bool,
    /// Bet amount input.
    pub bet_input: bool,
}

impl Controls {
    /// Returns the controls that are legal in `phase`.
    #[must_use]
    pub const fn for_phase(phase: Phase) -> Self {
        match phase {
            Phase::PlayerActing => Self {
                deal: false,
                hit: true,
                stand: true,
                bet_input: false,
            },
            Phase::DealerActing => Self {
                deal: false,
                hit: false,
                stand: false,
                bet_input: false,
            },
            Phase::NotStarted | Phase::Settled => Self {
                deal: true,
                hit: false,
                stand: false,
                bet_input: true,
            },
        }
    }
}

/// Rendering callbacks a front end provides.
pub trait Presenter {
    /// Draws a hand. When `hide_first` is set the first card is face down.
    fn render_hand(&mut self, seat: Seat, cards: &[Card], hide_first: bool);

    /// Updates the totals. `dealer_total` only counts visible cards when
    /// `dealer_hidden` is set.
    fn update_totals(&mut self, player_total: u16, dealer_total: u16, dealer_hidden: bool);

    /// Shows a status line. An empty message with [`StatusClass::Neutral`]
    /// clears it.
    fn show_status(&mut self, message: &str, class: StatusClass);

    /// Enables or disables controls.
    fn set_controls(&mut self, controls: Controls);

    /// Shows the balance.
    fn update_balance(&mut self, balance: usize);
}

/// Pushes a full snapshot to `presenter`.
pub fn present<P: Presenter + ?Sized>(snapshot: &RoundSnapshot, presenter: &mut P) {
    let dealer_hidden = !snapshot.dealer_hole_revealed;

    presenter.render_hand(Seat::Player, &snapshot.player_hand, false);
    presenter.render_hand(Seat::Dealer, &snapshot.dealer_hand, dealer_hidden);
    presenter.update_totals(
        snapshot.player_total,
        snapshot.displayed_dealer_total(),
        dealer_hidden,
    );
    match snapshot.last_result {
        Some(result) if snapshot.phase == Phase::Settled => {
            presenter.show_status(result.message(), result.outcome.class());
        }
        _ => presenter.show_status("", StatusClass::Neutral),
    }
    presenter.update_balance(snapshot.balance);
    presenter.set_controls(Controls::for_phase(snapshot.phase));
}

/// A round engine wired to a presenter.
///
/// Every accepted command re-renders the table. A rejected bet only shows
/// [`INVALID_BET_MESSAGE`] and leaves the engine untouched.
#[derive(Debug)]
pub struct Table<P> {
    engine: RoundEngine,
    presenter: P,
}

impl<P: Presenter> Table<P> {
    /// Wires `engine` to `presenter` and draws the initial table.
    pub fn new(engine: RoundEngine, mut presenter: P) -> Self {
        present(&engine.snapshot(), &mut presenter);
        Self { engine, presenter }
    }

    /// Reads the bet input and deals a new round.
    ///
    /// # Errors
    ///
    /// Returns the engine error when the bet is rejected or a round is in
    /// progress.
    pub fn deal(&mut self, bet_input: &str) -> Result<(), StartError> {
        match self.engine.start_with_input(bet_input) {
            Ok(snapshot) => {
                present(&snapshot, &mut self.presenter);
                Ok(())
            }
            Err(err @ StartError::InvalidWager(_)) => {
                self.presenter
                    .show_status(INVALID_BET_MESSAGE, StatusClass::Lose);
                Err(err)
            }
            Err(err) => Err(err),
        }
    }

    /// Hits the player's hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not waiting for the player.
    pub fn hit(&mut self) -> Result<(), ActionError> {
        let snapshot = self.engine.hit()?;
        present(&snapshot, &mut self.presenter);
        Ok(())
    }

    /// Stands on the player's hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not waiting for the player.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        let snapshot = self.engine.stand()?;
        present(&snapshot, &mut self.presenter);
        Ok(())
    }

    /// Resets the session and redraws the empty table.
    pub fn new_game(&mut self) {
        self.engine.new_game();
        present(&self.engine.snapshot(), &mut self.presenter);
    }

    /// Returns the engine.
    pub const fn engine(&self) -> &RoundEngine {
        &self.engine
    }

    /// Returns the engine mutably, e.g. to stack the shoe.
    pub const fn engine_mut(&mut self) -> &mut RoundEngine {
        &mut self.engine
    }

    /// Returns the presenter.
    pub const fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Splits the table into its engine and presenter.
    pub fn into_parts(self) -> (RoundEngine, P) {
        (self.engine, self.presenter)
    }
}
