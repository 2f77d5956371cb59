//! A single-player blackjack round engine with optional `no_std` support,
//! plus a small persisted lead-note tracker.
//!
//! The crate provides a [`RoundEngine`] type that drives a round from the deal
//! through the dealer's turn to settlement, and a [`view::Table`] adapter that
//! wires the engine to any front end implementing [`view::Presenter`].
//!
//! # Example
//!
//! ```
//! use bjround::{Phase, RoundEngine, TableOptions};
//!
//! let mut engine = RoundEngine::new(TableOptions::default(), 42);
//! let snapshot = engine.start(100).unwrap();
//! assert_eq!(snapshot.player_hand.len(), 2);
//!
//! if snapshot.phase == Phase::PlayerActing {
//!     let snapshot = engine.stand().unwrap();
//!     assert_eq!(snapshot.phase, Phase::Settled);
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod leads;
pub mod options;
pub mod result;
pub mod shoe;
pub mod snapshot;
pub mod view;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use error::{ActionError, LeadError, StartError, StoreError, WagerError};
pub use game::{Action, Phase, RoundEngine};
pub use hand::{DealerHand, Hand, card_value, hand_total};
pub use options::{RoundingMode, TableOptions};
pub use result::{Outcome, RoundResult, StatusClass};
pub use shoe::Shoe;
pub use snapshot::RoundSnapshot;
