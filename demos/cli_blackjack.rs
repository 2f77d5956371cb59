//! CLI blackjack example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjround::view::{Controls, Presenter, Seat, Table};
use bjround::{Card, Phase, RoundEngine, StatusClass, TableOptions};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    println!("Blackjack CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let engine = RoundEngine::new(TableOptions::default(), seed);
    let mut table = Table::new(engine, Terminal::default());

    loop {
        let controls = table.presenter().controls;

        if controls.deal {
            if !table.engine().can_cover_minimum() {
                println!("You are out of money. Type 'n' for a new game or 'q' to quit.");
            }
            let input = prompt_line(&format!(
                "Bet amount ({}-{}), 'n' new game, 'q' quit: ",
                table.engine().options.minimum_bet,
                table.engine().balance()
            ));
            match input.as_str() {
                "q" | "quit" => {
                    println!("Goodbye.");
                    break;
                }
                "n" | "new" => table.new_game(),
                bet => {
                    // The presenter already shows the rejection.
                    let _ = table.deal(bet);
                }
            }
            continue;
        }

        let action = prompt_line(&format_actions(controls));
        let result = match action.as_str() {
            "h" | "hit" if controls.hit => table.hit(),
            "s" | "stand" if controls.stand => table.stand(),
            "q" | "quit" => return,
            _ => {
                println!("Unknown action.");
                continue;
            }
        };

        if let Err(err) = result {
            println!("Action error: {err}");
        }
    }
}

/// Prints the table to stdout as the engine reports changes.
#[derive(Debug)]
struct Terminal {
    player: Vec<Card>,
    dealer: Vec<Card>,
    dealer_hidden: bool,
    controls: Controls,
}

impl Default for Terminal {
    fn default() -> Self {
        Self {
            player: Vec::new(),
            dealer: Vec::new(),
            dealer_hidden: true,
            controls: Controls::for_phase(Phase::NotStarted),
        }
    }
}

impl Presenter for Terminal {
    fn render_hand(&mut self, seat: Seat, cards: &[Card], hide_first: bool) {
        match seat {
            Seat::Player => self.player = cards.to_vec(),
            Seat::Dealer => {
                self.dealer = cards.to_vec();
                self.dealer_hidden = hide_first;
            }
        }
    }

    fn update_totals(&mut self, player_total: u16, dealer_total: u16, dealer_hidden: bool) {
        if self.player.is_empty() {
            return;
        }
        let dealer_suffix = if dealer_hidden { " + ?" } else { "" };
        println!(
            "\nDealer: {} (value {dealer_total}{dealer_suffix})",
            format_cards(&self.dealer, self.dealer_hidden)
        );
        println!(
            "You:    {} (value {player_total})\n",
            format_cards(&self.player, false)
        );
    }

    fn show_status(&mut self, message: &str, class: StatusClass) {
        let code = match class {
            StatusClass::Neutral => return,
            StatusClass::Win => "32",
            StatusClass::Lose => "31",
            StatusClass::Draw => "33",
        };
        println!("{}", colorize(message, code));
    }

    fn set_controls(&mut self, controls: Controls) {
        self.controls = controls;
    }

    fn update_balance(&mut self, balance: usize) {
        println!("Balance: {balance}");
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return "q".to_string();
    }
    if input.is_empty() {
        // stdin closed
        return "q".to_string();
    }
    input.trim().to_lowercase()
}

fn format_actions(controls: Controls) -> String {
    let parts = [
        format_action("hit", "h", controls.hit),
        format_action("stand", "s", controls.stand),
        format_action("quit", "q", true),
    ];
    format!("Actions: {} ", parts.join(" "))
}

fn format_action(label: &str, key: &str, allowed: bool) -> String {
    let text = format!("[{key}]{label}");
    if allowed {
        colorize(&text, "32")
    } else {
        colorize(&text, "90")
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_cards(cards: &[Card], hide_first: bool) -> String {
    if cards.is_empty() {
        return "(no cards)".to_string();
    }

    cards
        .iter()
        .enumerate()
        .map(|(index, card)| {
            if hide_first && index == 0 {
                "??".to_string()
            } else {
                format_card(card)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = if card.suit.is_red() { "31" } else { "34" };
    colorize(&card.to_string(), color_code)
}
