use bjround::leads::{KeyValueStore, Lead, LeadColor, LeadTracker, MemoryStore, STORAGE_KEY};
use bjround::{Card, Phase, RoundEngine, RoundResult, RoundSnapshot, TableOptions};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmTable {
    engine: RoundEngine,
}

#[wasm_bindgen]
impl WasmTable {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            engine: RoundEngine::new(TableOptions::default(), seed as u64),
        }
    }

    pub fn reset(&mut self, seed: u32) {
        self.engine = RoundEngine::new(TableOptions::default(), seed as u64);
    }

    pub fn start(&mut self, wager: u32) -> Result<JsValue, JsValue> {
        let snapshot = self.engine.start(wager as usize).map_err(js_err)?;
        to_js_value(&Snapshot::from(snapshot))
    }

    pub fn start_input(&mut self, bet_input: &str) -> Result<JsValue, JsValue> {
        let snapshot = self.engine.start_with_input(bet_input).map_err(js_err)?;
        to_js_value(&Snapshot::from(snapshot))
    }

    pub fn hit(&mut self) -> Result<JsValue, JsValue> {
        let snapshot = self.engine.hit().map_err(js_err)?;
        to_js_value(&Snapshot::from(snapshot))
    }

    pub fn stand(&mut self) -> Result<JsValue, JsValue> {
        let snapshot = self.engine.stand().map_err(js_err)?;
        to_js_value(&Snapshot::from(snapshot))
    }

    pub fn new_game(&mut self) -> Result<JsValue, JsValue> {
        self.engine.new_game();
        self.snapshot()
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        to_js_value(&Snapshot::from(self.engine.snapshot()))
    }
}

#[wasm_bindgen]
pub struct WasmLeads {
    tracker: LeadTracker<MemoryStore>,
}

#[wasm_bindgen]
impl WasmLeads {
    /// Loads the list from the JSON the page kept in local storage.
    #[wasm_bindgen(constructor)]
    pub fn new(saved: Option<String>) -> Result<WasmLeads, JsValue> {
        let mut store = MemoryStore::new();
        if let Some(raw) = saved {
            store.set(STORAGE_KEY, raw).map_err(js_err)?;
        }
        let tracker = LeadTracker::open(store).map_err(js_err)?;
        Ok(Self { tracker })
    }

    pub fn save_input(&mut self, url: &str, notes: &str) -> Result<(), JsValue> {
        self.tracker.save_input(url, notes).map_err(js_err)
    }

    pub fn save_note(&mut self, notes: &str) -> Result<(), JsValue> {
        self.tracker.save_note(notes).map_err(js_err)
    }

    pub fn save_tab(&mut self, url: &str, notes: &str) -> Result<(), JsValue> {
        self.tracker.save_tab(url, notes).map_err(js_err)
    }

    pub fn update(&mut self, index: u32, url: &str, notes: &str) -> Result<(), JsValue> {
        self.tracker
            .update(index as usize, url, notes)
            .map_err(js_err)
    }

    pub fn set_color(&mut self, index: u32, color: Option<String>) -> Result<(), JsValue> {
        let color = match color.as_deref() {
            None | Some("") => None,
            Some(name) => Some(color_from_str(name)?),
        };
        self.tracker
            .set_color(index as usize, color)
            .map_err(js_err)
    }

    pub fn delete(&mut self, index: u32) -> Result<(), JsValue> {
        self.tracker.delete(index as usize).map(|_| ()).map_err(js_err)
    }

    pub fn clear(&mut self) -> Result<(), JsValue> {
        self.tracker.clear().map_err(js_err)
    }

    pub fn leads(&self) -> Result<JsValue, JsValue> {
        let leads: Vec<JsLead> = self.tracker.leads().iter().map(JsLead::from).collect();
        to_js_value(&leads)
    }

    /// JSON to write back to local storage under `myLeads`.
    pub fn to_json(&self) -> Result<String, JsValue> {
        self.tracker.to_json().map_err(js_err)
    }
}

#[derive(Serialize)]
struct Snapshot {
    phase: &'static str,
    player: JsHand,
    dealer: JsDealer,
    balance: u32,
    wager: u32,
    result: Option<JsRoundResult>,
}

impl From<RoundSnapshot> for Snapshot {
    fn from(snapshot: RoundSnapshot) -> Self {
        let hole_revealed = snapshot.dealer_hole_revealed;
        let dealer_cards = snapshot
            .dealer_hand
            .iter()
            .enumerate()
            .map(|(index, card)| {
                if hole_revealed || index != 0 {
                    Some(card_to_js(*card))
                } else {
                    None
                }
            })
            .collect();
        let result = match snapshot.last_result {
            Some(result) if snapshot.phase == Phase::Settled => Some(JsRoundResult::from(result)),
            _ => None,
        };

        Self {
            phase: snapshot.phase.as_str(),
            player: JsHand {
                cards: snapshot.player_hand.iter().copied().map(card_to_js).collect(),
                value: snapshot.player_total,
            },
            dealer: JsDealer {
                cards: dealer_cards,
                visible_value: snapshot.displayed_dealer_total(),
                hole_revealed,
            },
            balance: snapshot.balance as u32,
            wager: snapshot.wager as u32,
            result,
        }
    }
}

#[derive(Serialize)]
struct JsCard {
    suit: &'static str,
    symbol: &'static str,
    rank: &'static str,
}

#[derive(Serialize)]
struct JsHand {
    cards: Vec<JsCard>,
    value: u16,
}

#[derive(Serialize)]
struct JsDealer {
    cards: Vec<Option<JsCard>>,
    visible_value: u16,
    hole_revealed: bool,
}

#[derive(Serialize)]
struct JsRoundResult {
    outcome: &'static str,
    class: &'static str,
    message: &'static str,
    payout: u32,
    net: i32,
}

impl From<RoundResult> for JsRoundResult {
    fn from(result: RoundResult) -> Self {
        Self {
            outcome: result.outcome.as_str(),
            class: result.outcome.class().as_str(),
            message: result.message(),
            payout: result.payout as u32,
            net: result.net() as i32,
        }
    }
}

#[derive(Serialize)]
struct JsLead {
    url: String,
    notes: String,
    color: Option<&'static str>,
    blank: bool,
}

impl From<&Lead> for JsLead {
    fn from(lead: &Lead) -> Self {
        Self {
            url: lead.url.clone(),
            notes: lead.notes.clone(),
            color: lead.color.map(color_to_str),
            blank: lead.is_blank(),
        }
    }
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        suit: card.suit.name(),
        symbol: card.suit.symbol(),
        rank: card.label(),
    }
}

fn color_to_str(color: LeadColor) -> &'static str {
    match color {
        LeadColor::Red => "red",
        LeadColor::Orange => "orange",
        LeadColor::Yellow => "yellow",
        LeadColor::Green => "green",
        LeadColor::Blue => "blue",
        LeadColor::Purple => "purple",
    }
}

fn color_from_str(name: &str) -> Result<LeadColor, JsValue> {
    match name {
        "red" => Ok(LeadColor::Red),
        "orange" => Ok(LeadColor::Orange),
        "yellow" => Ok(LeadColor::Yellow),
        "green" => Ok(LeadColor::Green),
        "blue" => Ok(LeadColor::Blue),
        "purple" => Ok(LeadColor::Purple),
        _ => Err(JsValue::from_str("unknown color")),
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
