/*
Game: Bluff
Three players race to shed cards of a required rank that cycles 2 through 8.
A play may lie about its rank; any opponent may call the claim and force a
showdown over the face-down pile.
*/

use std::{
    cmp::{Ordering, Reverse},
    collections::HashSet,
    fmt,
};

use enum_iterator::{all, next_cycle, Sequence};
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::{chance, split_front_back};

const PLAYER_COUNT: usize = 3;
const CARDS_PER_RANK: usize = 6;
const TOTAL_CARDS: usize = CARDS_PER_RANK * Rank::CARDINALITY;
const HAND_SIZE: usize = TOTAL_CARDS / PLAYER_COUNT;
// A hand this small ends the game in that player's favor
const WIN_THRESHOLD: usize = 5;
// Time units the human has to preempt a scripted call on an automated play
const CALL_WINDOW: i32 = 1000;
const BLUFF_CHANCE: f64 = 0.3;
const DOUBLE_PLAY_CHANCE: f64 = 0.5;

// The deck must deal evenly across the three seats
const _: () = assert!(TOTAL_CARDS % PLAYER_COUNT == 0);

// Pseudo-move id for the call-bluff action button
pub const CALL_BLUFF: i32 = -2;

#[derive(
    Debug,
    Clone,
    Default,
    Serialize,
    Sequence,
    Deserialize,
    PartialEq,
    Eq,
    Copy,
    Hash,
    PartialOrd,
    Ord,
)]
#[serde(rename_all = "camelCase")]
pub enum Rank {
    #[default]
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", *self as i32)
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: i32,
    pub rank: Rank,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum State {
    // Waiting on the current seat to commit a play
    #[default]
    AwaitingPlay,
    // A play is on the table and may still be called
    AwaitingCall,
    GameOver,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, Hash, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Location {
    #[default]
    Deck,
    Hand,
    Pile,
    ReorderHand,
    Message,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, Hash, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ChangeType {
    #[default]
    Deal,
    Shuffle,
    Play,
    PileToHand,
    ShowPlayable,
    HidePlayable,
    Reorder,
    Message,
    GameOver,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Change {
    #[serde(rename(serialize = "type", deserialize = "type"))]
    pub change_type: ChangeType,
    #[serde(rename(serialize = "id", deserialize = "id"))]
    pub object_id: i32,
    pub dest: Location,
    pub player: usize,
    pub offset: usize,
    pub length: usize,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum EventKind {
    #[default]
    Played,
    Called,
    Resolved,
    WinDeclared,
}

/// Structured record of what a turn did, for animation cues and drivers.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub kind: EventKind,
    // Seat that played (or stands accused)
    pub player: usize,
    pub rank: Option<Rank>,
    // Cards played for Played, pile size for Resolved
    pub count: usize,
    pub caller: Option<usize>,
    pub was_bluff: Option<bool>,
    pub winner: Option<usize>,
}

/// The most recent play, kept until a call resolves against it or the next
/// play overwrites it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PendingPlay {
    pub player: usize,
    pub declared: Rank,
    pub cards: Vec<Card>,
}

/// Per-seat view exposed over the presentation boundary; automated seats
/// only reveal how many cards they hold.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SeatView {
    pub id: usize,
    pub is_automated: bool,
    pub count: usize,
    pub cards: Option<Vec<Card>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub state: State,
    pub current_player: usize,
    pub current_rank: Rank,
    pub pile_size: usize,
    pub call_open: bool,
    pub winner: Option<usize>,
    pub seats: Vec<SeatView>,
    pub events: Vec<Event>,
}

/// A malformed or out-of-turn intent. The rejected operation leaves the game
/// untouched; the message is the rejection reason shown to the player.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IntentError {
    #[error("the game is over; reset to start a new one")]
    GameOver,
    #[error("it is not your turn to play")]
    OutOfTurn,
    #[error("a play must contain at least one card")]
    EmptyPlay,
    #[error("card {0} was selected more than once")]
    DuplicateCard(i32),
    #[error("card {0} is not in your hand")]
    NotInHand(i32),
    #[error("every card in a play must share a single rank")]
    MixedRanks,
    #[error("there is no accusation window open to call into")]
    NothingToCall,
}

fn entropy_rng() -> StdRng {
    StdRng::from_entropy()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BluffGame {
    // Current game state
    pub state: State,
    // Which seat acts next
    pub current_player: usize, // 0 - 2
    // Rank every play this turn must claim
    pub current_rank: Rank,
    // Cards in each player's hand, sorted ascending for display
    pub hands: [Vec<Card>; PLAYER_COUNT],
    // Face-down cards accumulated across uncalled plays
    pub pile: Vec<Card>,
    // The play currently exposed to accusation
    pub pending_play: Option<PendingPlay>,
    // Time units left for the human to preempt a scripted call
    pub call_window: Option<i32>,
    // Automated seat that will call once the window closes
    pub pending_caller: Option<usize>,
    // Game winner
    pub winner: Option<usize>,
    // List of list of animations to run after a move is made to get from the current state to the next state
    pub changes: Vec<Vec<Change>>,
    // When running simulations we save time by not creating vecs and structs to be added to the change animation list
    pub no_changes: bool,
    // Structured events from the most recent operation
    pub events: Vec<Event>,
    // Which player is the human player
    pub human_player: Option<usize>,
    #[serde(skip, default = "entropy_rng")]
    rng: StdRng,
}

impl Default for BluffGame {
    fn default() -> Self {
        Self {
            state: State::default(),
            current_player: 0,
            current_rank: Rank::Two,
            hands: [vec![], vec![], vec![]],
            pile: vec![],
            pending_play: None,
            call_window: None,
            pending_caller: None,
            winner: None,
            changes: vec![],
            no_changes: false,
            events: vec![],
            human_player: None,
            rng: entropy_rng(),
        }
    }
}

impl BluffGame {
    pub fn new() -> Self {
        let mut game = Self {
            ..Default::default()
        };
        game.deal();
        game
    }

    pub fn new_with_human_player(human_player: usize) -> Self {
        let mut game = Self {
            human_player: Some(human_player),
            ..Default::default()
        };
        game.deal();
        game
    }

    pub fn from_seed(seed: u64) -> Self {
        let mut game = Self {
            rng: StdRng::seed_from_u64(seed),
            ..Default::default()
        };
        game.deal();
        game
    }

    // Called at the start of a game and on every reset
    pub fn deal(&mut self) {
        self.state = State::AwaitingPlay;
        self.hands = [vec![], vec![], vec![]];
        self.pile = vec![];
        self.pending_play = None;
        self.call_window = None;
        self.pending_caller = None;
        self.winner = None;
        self.current_rank = Rank::Two;
        self.current_player = self.rng.gen_range(0..PLAYER_COUNT);
        let mut cards = BluffGame::deck();
        cards.shuffle(&mut self.rng);
        let shuffle_index = self.new_change();
        let deal_index = self.new_change();
        self.add_change(
            shuffle_index,
            Change {
                change_type: ChangeType::Shuffle,
                object_id: 0,
                dest: Location::Deck,
                ..Default::default()
            },
        );
        for hand_index in 0..HAND_SIZE {
            for player in 0..PLAYER_COUNT {
                let card = cards.pop().expect("the deck deals out evenly");
                self.add_change(
                    deal_index,
                    Change {
                        change_type: ChangeType::Deal,
                        object_id: card.id,
                        dest: Location::Hand,
                        player,
                        offset: hand_index,
                        length: HAND_SIZE,
                        ..Default::default()
                    },
                );
                self.hands[player].push(card);
            }
        }
        for player in 0..PLAYER_COUNT {
            self.sort_hand(player);
            self.reorder_hand(player, player == 0);
        }
        let index = self.new_change();
        self.set_message(
            Some(format!(
                "{} starts. Rank {} to play.",
                self.player_name(self.current_player),
                self.current_rank
            )),
            index,
        );
        self.show_playable();
    }

    pub fn deck() -> Vec<Card> {
        let mut deck = Vec::new();
        let mut id = 0;

        for rank in all::<Rank>() {
            for _ in 0..CARDS_PER_RANK {
                deck.push(Card { id, rank });
                id += 1;
            }
        }

        deck
    }

    #[inline]
    pub fn is_automated(&self, player: usize) -> bool {
        self.human_player != Some(player)
    }

    /// Ids the presentation layer may highlight: any hand card while the
    /// current seat is choosing a play (every card is a legal part of a
    /// single-rank claim), or the call button while the human may preempt.
    pub fn get_moves(&self) -> Vec<i32> {
        match self.state {
            State::AwaitingPlay => self.hands[self.current_player]
                .iter()
                .map(|c| c.id)
                .collect(),
            State::AwaitingCall if self.human_player.is_some() && self.call_window.is_some() => {
                vec![CALL_BLUFF]
            }
            _ => vec![],
        }
    }

    /// Drive the cooperative loop: automated seats act, and an open
    /// accusation window counts down and resolves once `elapsed` exhausts it.
    pub fn tick(&mut self, elapsed: i32) {
        match self.state {
            State::GameOver => {}
            State::AwaitingPlay => {
                if self.is_automated(self.current_player) {
                    self.changes = vec![vec![]];
                    self.events.clear();
                    self.automated_play();
                    self.show_playable();
                    self.show_message();
                }
            }
            State::AwaitingCall => {
                let remaining = self.call_window.expect("an open accusation window") - elapsed;
                if remaining > 0 {
                    self.call_window = Some(remaining);
                } else {
                    self.changes = vec![vec![]];
                    self.events.clear();
                    self.call_window = None;
                    match self.pending_caller.take() {
                        Some(caller) => self.adjudicate_call(caller),
                        None => self.resolve_no_call(),
                    }
                    self.show_playable();
                    self.show_message();
                }
            }
        }
    }

    /// Human intent: play the cards with the given ids as a claim of the
    /// current rank. Opposing automated seats react immediately; there is no
    /// accusation window when the human is the accused.
    pub fn play_cards(&mut self, ids: &[i32]) -> Result<(), IntentError> {
        if self.state == State::GameOver {
            return Err(IntentError::GameOver);
        }
        let human = self.human_player.ok_or(IntentError::OutOfTurn)?;
        if self.state != State::AwaitingPlay || self.current_player != human {
            return Err(IntentError::OutOfTurn);
        }
        if ids.is_empty() {
            return Err(IntentError::EmptyPlay);
        }
        let mut seen: HashSet<i32> = HashSet::new();
        let mut rank: Option<Rank> = None;
        for &id in ids {
            if !seen.insert(id) {
                return Err(IntentError::DuplicateCard(id));
            }
            let card = self.hands[human]
                .iter()
                .find(|c| c.id == id)
                .ok_or(IntentError::NotInHand(id))?;
            match rank {
                Some(rank) if card.rank != rank => return Err(IntentError::MixedRanks),
                _ => rank = Some(card.rank),
            }
        }

        self.changes = vec![vec![]];
        self.events.clear();
        let declared = self.current_rank;
        self.commit_play(human, ids);
        match self.first_caller(human, declared, ids.len()) {
            Some(caller) => self.adjudicate_call(caller),
            None => self.resolve_no_call(),
        }
        self.show_playable();
        self.show_message();
        Ok(())
    }

    /// Human intent: accuse the automated seat whose play is still inside
    /// the accusation window. Preempts any scripted automated call.
    pub fn call_bluff(&mut self) -> Result<(), IntentError> {
        let human = self.human_player.ok_or(IntentError::NothingToCall)?;
        if self.state != State::AwaitingCall || self.call_window.is_none() {
            return Err(IntentError::NothingToCall);
        }
        self.changes = vec![vec![]];
        self.events.clear();
        self.call_window = None;
        self.pending_caller = None;
        self.adjudicate_call(human);
        self.show_playable();
        self.show_message();
        Ok(())
    }

    /// Discard the whole game and deal a fresh one. Honored in any state,
    /// mid-window included.
    pub fn reset(&mut self) {
        self.changes = vec![];
        self.events.clear();
        self.deal();
    }

    pub fn snapshot(&self) -> Snapshot {
        let seats = (0..PLAYER_COUNT)
            .map(|player| SeatView {
                id: player,
                is_automated: self.is_automated(player),
                count: self.hands[player].len(),
                cards: if self.is_automated(player) {
                    None
                } else {
                    Some(self.hands[player].clone())
                },
            })
            .collect();
        Snapshot {
            state: self.state,
            current_player: self.current_player,
            current_rank: self.current_rank,
            pile_size: self.pile.len(),
            call_open: self.call_window.is_some(),
            winner: self.winner,
            seats,
            events: self.events.clone(),
        }
    }

    fn automated_play(&mut self) {
        let player = self.current_player;
        let declared = self.current_rank;
        let ids = decide_play(&self.hands[player], declared, &mut self.rng);
        self.commit_play(player, &ids);
        // Script the other automated seat's reaction now; it only lands if
        // the human does not preempt it while the window is open.
        self.pending_caller = self.first_caller(player, declared, ids.len());
        self.call_window = Some(CALL_WINDOW);
        self.state = State::AwaitingCall;
    }

    // Move the chosen cards from hand to pile and record the claim
    fn commit_play(&mut self, player: usize, ids: &[i32]) {
        let declared = self.current_rank;
        let mut played: Vec<Card> = Vec::with_capacity(ids.len());
        for &id in ids {
            let pos = self.hands[player]
                .iter()
                .position(|c| c.id == id)
                .expect("played cards come from the player's hand");
            played.push(self.hands[player].remove(pos));
        }
        for (i, card) in played.iter().enumerate() {
            self.add_change(
                0,
                Change {
                    change_type: ChangeType::Play,
                    object_id: card.id,
                    dest: Location::Pile,
                    player,
                    offset: self.pile.len() + i,
                    ..Default::default()
                },
            );
        }
        self.pile.extend(played.iter().copied());
        self.reorder_hand(player, false);
        self.events.push(Event {
            kind: EventKind::Played,
            player,
            rank: Some(declared),
            count: played.len(),
            ..Default::default()
        });
        let message = if self.is_automated(player) {
            format!(
                "{} plays {} card(s) of {}.",
                self.player_name(player),
                played.len(),
                declared
            )
        } else {
            format!("You played {} card(s) of {}.", played.len(), declared)
        };
        let index = self.new_change();
        self.set_message(Some(message), index);
        self.pending_play = Some(PendingPlay {
            player,
            declared,
            cards: played,
        });
    }

    // Eligible automated seats react in a random order; the first to decide
    // to call becomes the caller
    fn first_caller(&mut self, accused: usize, declared: Rank, count_played: usize) -> Option<usize> {
        let mut observers: Vec<usize> = (0..PLAYER_COUNT)
            .filter(|&p| p != accused && self.is_automated(p))
            .collect();
        observers.shuffle(&mut self.rng);
        for player in observers {
            if decide_call(
                &self.hands[player],
                declared,
                count_played,
                CARDS_PER_RANK,
                &mut self.rng,
            ) {
                return Some(player);
            }
        }
        None
    }

    fn adjudicate_call(&mut self, caller: usize) {
        let pending = self.pending_play.take().expect("a play to adjudicate");
        let accused = pending.player;
        let was_bluff = pending.cards.iter().any(|c| c.rank != pending.declared);
        self.events.push(Event {
            kind: EventKind::Called,
            player: accused,
            caller: Some(caller),
            ..Default::default()
        });

        // Win or lose, the pile always splits between the two parties: the
        // front half to the accused, the remainder to the caller.
        let pile = std::mem::take(&mut self.pile);
        let pile_size = pile.len();
        let (to_accused, to_caller) = split_front_back(pile);
        let change_index = self.new_change();
        for (target, cards) in [(accused, &to_accused), (caller, &to_caller)] {
            for card in cards {
                self.add_change(
                    change_index,
                    Change {
                        change_type: ChangeType::PileToHand,
                        object_id: card.id,
                        dest: Location::Hand,
                        player: target,
                        ..Default::default()
                    },
                );
            }
        }
        self.hands[accused].extend(to_accused);
        self.hands[caller].extend(to_caller);
        self.sort_hand(accused);
        self.sort_hand(caller);
        self.reorder_hand(accused, true);
        self.reorder_hand(caller, false);

        let message = if !self.is_automated(caller) {
            if was_bluff {
                format!(
                    "You called bluff on {}! It WAS a bluff.",
                    self.player_name(accused)
                )
            } else {
                format!(
                    "You called bluff on {}, but they were honest.",
                    self.player_name(accused)
                )
            }
        } else if !self.is_automated(accused) {
            if was_bluff {
                format!("{} calls bluff! You were BLUFFING.", self.player_name(caller))
            } else {
                format!(
                    "{} calls bluff, but you were honest.",
                    self.player_name(caller)
                )
            }
        } else if was_bluff {
            format!(
                "{} calls bluff on {}! Bluff confirmed.",
                self.player_name(caller),
                self.player_name(accused)
            )
        } else {
            format!(
                "{} calls bluff on {}, but it was truthful.",
                self.player_name(caller),
                self.player_name(accused)
            )
        };
        let index = self.new_change();
        self.set_message(Some(message), index);

        self.events.push(Event {
            kind: EventKind::Resolved,
            player: accused,
            caller: Some(caller),
            was_bluff: Some(was_bluff),
            count: pile_size,
            ..Default::default()
        });

        self.advance_turn(accused);
        self.check_win(0..PLAYER_COUNT);
    }

    // The pile stays on the table and keeps accumulating
    fn resolve_no_call(&mut self) {
        let player = self
            .pending_play
            .as_ref()
            .map(|p| p.player)
            .expect("a play to resolve");
        self.events.push(Event {
            kind: EventKind::Resolved,
            player,
            count: self.pile.len(),
            ..Default::default()
        });
        self.advance_turn(player);
        self.check_win([player]);
    }

    fn advance_turn(&mut self, from: usize) {
        self.state = State::AwaitingPlay;
        self.current_player = (from + 1) % PLAYER_COUNT;
        self.current_rank = next_cycle(&self.current_rank).expect("the rank cycle is never empty");
    }

    // Lowest seat id wins if one resolution drops several hands below the
    // threshold at once
    fn check_win(&mut self, players: impl IntoIterator<Item = usize>) {
        for player in players {
            if self.hands[player].len() <= WIN_THRESHOLD {
                self.winner = Some(player);
                self.state = State::GameOver;
                self.events.push(Event {
                    kind: EventKind::WinDeclared,
                    player,
                    winner: Some(player),
                    ..Default::default()
                });
                let index = self.new_change();
                self.add_change(
                    index,
                    Change {
                        change_type: ChangeType::GameOver,
                        object_id: 0,
                        dest: Location::Deck,
                        ..Default::default()
                    },
                );
                self.set_message(
                    Some(format!("{} wins!", self.player_name(player))),
                    index,
                );
                return;
            }
        }
    }

    #[inline]
    fn new_change(&mut self) -> usize {
        self.changes.push(vec![]);
        self.changes.len() - 1
    }

    #[inline]
    fn add_change(&mut self, index: usize, change: Change) {
        if self.no_changes {
            return;
        }
        self.changes[index].push(change);
    }

    #[inline]
    pub fn sort_hand(&mut self, player: usize) {
        self.hands[player].sort_by(rank_sorter);
    }

    #[inline]
    pub fn reorder_hand(&mut self, player: usize, force_new_animation: bool) {
        if self.no_changes {
            return;
        }
        if self.changes.is_empty() || force_new_animation {
            self.new_change();
        }
        let length = self.hands[player].len();
        let index = self.changes.len() - 1;
        self.changes[index].extend(self.hands[player].iter().enumerate().map(|(offset, card)| {
            Change {
                change_type: ChangeType::Reorder,
                dest: Location::ReorderHand,
                object_id: card.id,
                player,
                offset,
                length,
                ..Default::default()
            }
        }));
    }

    fn show_playable(&mut self) {
        if self.changes.is_empty() {
            self.changes = vec![vec![]];
        }
        let change_index = self.new_change();
        let human_turn =
            self.state == State::AwaitingPlay && self.human_player == Some(self.current_player);
        let human_call = self.state == State::AwaitingCall
            && self.human_player.is_some()
            && self.call_window.is_some();
        if human_turn || human_call {
            for id in self.get_moves() {
                self.add_change(
                    change_index,
                    Change {
                        object_id: id,
                        change_type: ChangeType::ShowPlayable,
                        dest: Location::Hand,
                        player: self.current_player,
                        ..Default::default()
                    },
                );
            }
        } else {
            self.hide_playable();
        }
    }

    fn show_message(&mut self) {
        let message = match self.state {
            State::AwaitingPlay => Some(format!(
                "{} to play rank {}.",
                self.player_name(self.current_player),
                self.current_rank
            )),
            State::AwaitingCall => None,
            State::GameOver => None,
        };
        let index = self.new_change();
        self.set_message(message, index);
    }

    fn player_name(&self, player: usize) -> String {
        match player {
            0 => "You".to_string(),
            1 => "AI 1".to_string(),
            _ => "AI 2".to_string(),
        }
    }

    fn set_message(&mut self, message: Option<String>, index: usize) {
        self.add_change(
            index,
            Change {
                change_type: ChangeType::Message,
                message,
                object_id: -1,
                dest: Location::Message,
                ..Default::default()
            },
        );
    }

    fn hide_playable(&mut self) {
        if self.changes.is_empty() {
            self.changes = vec![vec![]];
        }
        let change_index = self.changes.len() - 1;
        if let Some(human) = self.human_player {
            let cards = self.hands[human].clone();
            for card in cards {
                self.add_change(
                    change_index,
                    Change {
                        object_id: card.id,
                        change_type: ChangeType::HidePlayable,
                        dest: Location::Hand,
                        player: human,
                        ..Default::default()
                    },
                );
            }
            self.add_change(
                change_index,
                Change {
                    object_id: CALL_BLUFF,
                    change_type: ChangeType::HidePlayable,
                    dest: Location::Hand,
                    player: human,
                    ..Default::default()
                },
            );
        }
    }
}

/// Pick the cards an automated seat throws for the required rank. The
/// declared rank is always `required`, whatever is actually thrown.
pub fn decide_play(hand: &[Card], required: Rank, rng: &mut impl Rng) -> Vec<i32> {
    let copies = count_rank(hand, required);
    let will_bluff = copies == 0 || chance(BLUFF_CHANCE, rng);
    let rank_to_play = if !will_bluff {
        required
    } else {
        // Dump from the deepest stack of off-rank cards; ties go to the
        // lowest rank. A hand that is pure required rank has nothing else
        // to throw.
        all::<Rank>()
            .filter(|&rank| rank != required)
            .map(|rank| (rank, count_rank(hand, rank)))
            .filter(|&(_, count)| count > 0)
            .max_by_key(|&(rank, count)| (count, Reverse(rank)))
            .map(|(rank, _)| rank)
            .unwrap_or(required)
    };
    let available = count_rank(hand, rank_to_play);
    let mut to_play = 1;
    if available > 1 && chance(DOUBLE_PLAY_CHANCE, rng) {
        to_play = 2;
    }
    hand.iter()
        .filter(|c| c.rank == rank_to_play)
        .take(to_play)
        .map(|c| c.id)
        .collect()
}

/// Decide whether an observer calls a play of `count_played` cards claimed
/// to be `declared`, given what the observer holds.
pub fn decide_call(
    hand: &[Card],
    declared: Rank,
    count_played: usize,
    copies_per_rank: usize,
    rng: &mut impl Rng,
) -> bool {
    let held = count_rank(hand, declared);
    if held + count_played > copies_per_rank {
        // More copies claimed than exist: the play cannot be honest
        return true;
    }
    let probability = if held + count_played == copies_per_rank {
        if count_played >= 2 {
            0.5
        } else {
            0.2
        }
    } else if count_played >= 3 {
        0.3
    } else if count_played == 2 {
        0.1
    } else {
        0.0
    };
    chance(probability, rng)
}

fn count_rank(hand: &[Card], rank: Rank) -> usize {
    hand.iter().filter(|c| c.rank == rank).count()
}

fn rank_sorter(a: &Card, b: &Card) -> Ordering {
    match a.rank.cmp(&b.rank) {
        Ordering::Equal => a.id.cmp(&b.id),
        ordering => ordering,
    }
}
