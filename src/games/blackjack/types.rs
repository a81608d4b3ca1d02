//! Blackjack data structures: cards, the deck, hands, and round state.

use std::collections::HashSet;
use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::config::BlackjackConfig;
use crate::core::constants::{BLACKJACK, DECK_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Point value with an Ace counted high.
    pub fn value(self) -> u8 {
        match self {
            Rank::Ace => 11,
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    pub fn code(self) -> &'static str {
        match self {
            Suit::Clubs => "C",
            Suit::Diamonds => "D",
            Suit::Hearts => "H",
            Suit::Spades => "S",
        }
    }

    pub fn is_red(self) -> bool {
        matches!(self, Suit::Diamonds | Suit::Hearts)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub fn value(&self) -> u8 {
        self.rank.value()
    }

    pub fn is_ace(&self) -> bool {
        self.rank == Rank::Ace
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.rank.code(), self.suit.code())
    }
}

/// A stack of cards. Draws come off the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// All 52 cards in suit-major order, unshuffled.
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Self { cards }
    }

    /// A standard deck in uniformly random order.
    pub fn shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::standard();
        deck.shuffle(rng);
        deck
    }

    /// A deck with a fixed order; the last card is drawn first.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// A card that appears more than once, if any.
    pub fn first_duplicate(&self) -> Option<Card> {
        let mut seen = HashSet::with_capacity(self.cards.len());
        self.cards.iter().copied().find(|card| !seen.insert(*card))
    }
}

/// Downgrade Aces from 11 to 1, one at a time, until the sum is at most 21
/// or no Ace is still counted high. Returns the new `(sum, soft_aces)`.
pub fn reduce_aces(mut sum: u16, mut soft_aces: u8) -> (u16, u8) {
    while sum > BLACKJACK as u16 && soft_aces > 0 {
        sum -= 10;
        soft_aces -= 1;
    }
    (sum, soft_aces)
}

/// Cards held by one side, in draw order, with a running total.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
    /// Running sum with `soft_aces` Aces still counted as 11.
    sum: u16,
    /// Aces currently counted as 11.
    soft_aces: u8,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, card: Card) {
        self.sum += card.value() as u16;
        if card.is_ace() {
            self.soft_aces += 1;
        }
        self.cards.push(card);
    }

    /// Apply Ace reduction in place and return the adjusted sum.
    pub fn reduce_aces(&mut self) -> u16 {
        let (sum, soft_aces) = reduce_aces(self.sum, self.soft_aces);
        self.sum = sum;
        self.soft_aces = soft_aces;
        sum
    }

    /// Adjusted sum, without touching the stored total.
    pub fn score(&self) -> u16 {
        reduce_aces(self.sum, self.soft_aces).0
    }

    pub fn is_bust(&self) -> bool {
        self.score() > BLACKJACK as u16
    }

    pub fn sum(&self) -> u16 {
        self.sum
    }

    pub fn soft_aces(&self) -> u8 {
        self.soft_aces
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Where a round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    NotStarted,
    PlayerTurn,
    /// Dealer has revealed the hole card and finished drawing.
    DealerTurn,
    Settled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    PlayerBust,
    DealerBust,
    PlayerWin,
    DealerWin,
    Tie,
}

impl GameOutcome {
    /// `Some(true)` if the player won, `Some(false)` if they lost, `None` on a tie.
    pub fn player_won(self) -> Option<bool> {
        match self {
            GameOutcome::DealerBust | GameOutcome::PlayerWin => Some(true),
            GameOutcome::PlayerBust | GameOutcome::DealerWin => Some(false),
            GameOutcome::Tie => None,
        }
    }

    pub fn message(self) -> &'static str {
        match self.player_won() {
            Some(true) => "You Win!",
            Some(false) => "You Lose!",
            None => "Tie!",
        }
    }
}

/// What the table shows the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlackjackView {
    pub phase: RoundPhase,
    pub player_cards: Vec<Card>,
    pub player_score: u16,
    pub player_bust: bool,
    /// Dealer cards in deal order; `None` is the face-down hole card.
    pub dealer_cards: Vec<Option<Card>>,
    pub hole_revealed: bool,
    /// Only known once the hole card is revealed.
    pub dealer_score: Option<u16>,
    pub outcome: Option<GameOutcome>,
}

/// One Blackjack table: a deck, a dealer hand, and a player hand.
#[derive(Debug, Clone)]
pub struct BlackjackGame {
    pub config: BlackjackConfig,
    pub deck: Deck,
    /// First card is the hole card.
    pub dealer: Hand,
    pub player: Hand,
    pub phase: RoundPhase,
    /// Set once a hit pushes the player over 21. Further hits are refused.
    pub player_bust: bool,
    pub outcome: Option<GameOutcome>,
    pub rounds_played: u32,
}

impl BlackjackGame {
    /// An empty table waiting for its first deal.
    pub fn new(config: BlackjackConfig) -> Self {
        Self {
            config,
            deck: Deck::from_cards(Vec::new()),
            dealer: Hand::new(),
            player: Hand::new(),
            phase: RoundPhase::NotStarted,
            player_bust: false,
            outcome: None,
            rounds_played: 0,
        }
    }

    pub fn hole_revealed(&self) -> bool {
        matches!(self.phase, RoundPhase::DealerTurn | RoundPhase::Settled)
    }

    /// Every card on the table or still in the deck.
    pub fn all_cards(&self) -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        cards.extend_from_slice(self.deck.cards());
        cards.extend_from_slice(self.dealer.cards());
        cards.extend_from_slice(self.player.cards());
        cards
    }

    pub fn view(&self) -> BlackjackView {
        let revealed = self.hole_revealed();
        let dealer_cards = self
            .dealer
            .cards()
            .iter()
            .enumerate()
            .map(|(i, card)| if i == 0 && !revealed { None } else { Some(*card) })
            .collect();

        BlackjackView {
            phase: self.phase,
            player_cards: self.player.cards().to_vec(),
            player_score: self.player.score(),
            player_bust: self.player_bust,
            dealer_cards,
            hole_revealed: revealed,
            dealer_score: revealed.then(|| self.dealer.score()),
            outcome: self.outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_card_values() {
        assert_eq!(Card::new(Rank::Ace, Suit::Spades).value(), 11);
        assert_eq!(Card::new(Rank::Seven, Suit::Hearts).value(), 7);
        assert_eq!(Card::new(Rank::King, Suit::Clubs).value(), 10);
        assert!(Card::new(Rank::Ace, Suit::Clubs).is_ace());
        assert!(!Card::new(Rank::Ten, Suit::Clubs).is_ace());
    }

    #[test]
    fn test_card_display() {
        assert_eq!(Card::new(Rank::Ten, Suit::Hearts).to_string(), "10-H");
        assert_eq!(Card::new(Rank::Ace, Suit::Spades).to_string(), "A-S");
    }

    #[test]
    fn test_standard_deck_has_52_unique_cards() {
        let deck = Deck::standard();
        assert_eq!(deck.len(), 52);
        let unique: HashSet<_> = deck.cards().iter().collect();
        assert_eq!(unique.len(), 52);
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let canonical: HashSet<_> = Deck::standard().cards().iter().copied().collect();
        for _ in 0..50 {
            let deck = Deck::shuffled(&mut rng);
            assert_eq!(deck.len(), 52);
            let seen: HashSet<_> = deck.cards().iter().copied().collect();
            assert_eq!(seen, canonical);
        }
    }

    #[test]
    fn test_shuffle_changes_order() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_ne!(Deck::shuffled(&mut rng), Deck::standard());
    }

    #[test]
    fn test_deck_draws_from_end() {
        let a = Card::new(Rank::Two, Suit::Clubs);
        let b = Card::new(Rank::Three, Suit::Clubs);
        let mut deck = Deck::from_cards(vec![a, b]);
        assert_eq!(deck.draw(), Some(b));
        assert_eq!(deck.draw(), Some(a));
        assert_eq!(deck.draw(), None);
        assert!(deck.is_empty());
    }

    #[test]
    fn test_first_duplicate() {
        assert_eq!(Deck::standard().first_duplicate(), None);
        let two = Card::new(Rank::Two, Suit::Clubs);
        let deck = Deck::from_cards(vec![two, Card::new(Rank::Three, Suit::Clubs), two]);
        assert_eq!(deck.first_duplicate(), Some(two));
    }

    #[test]
    fn test_two_aces_and_nine_is_21() {
        let mut hand = Hand::new();
        hand.push(Card::new(Rank::Ace, Suit::Clubs));
        hand.push(Card::new(Rank::Ace, Suit::Hearts));
        hand.push(Card::new(Rank::Nine, Suit::Spades));
        assert_eq!(hand.sum(), 31);
        assert_eq!(hand.reduce_aces(), 21);
        assert_eq!(hand.soft_aces(), 1);
        assert!(!hand.is_bust());
    }

    #[test]
    fn test_reduce_aces_is_idempotent() {
        for sum in 0..=60u16 {
            for aces in 0..=4u8 {
                let once = reduce_aces(sum, aces);
                assert_eq!(reduce_aces(once.0, once.1), once);
            }
        }
    }

    #[test]
    fn test_reduce_aces_stops_when_no_ace_left() {
        assert_eq!(reduce_aces(25, 0), (25, 0));
        assert_eq!(reduce_aces(35, 1), (25, 0));
        assert_eq!(reduce_aces(21, 2), (21, 2));
    }

    #[test]
    fn test_score_does_not_mutate() {
        let mut hand = Hand::new();
        hand.push(Card::new(Rank::Ace, Suit::Clubs));
        hand.push(Card::new(Rank::King, Suit::Clubs));
        hand.push(Card::new(Rank::Five, Suit::Clubs));
        assert_eq!(hand.score(), 16);
        assert_eq!(hand.sum(), 26);
        assert_eq!(hand.soft_aces(), 1);
    }

    #[test]
    fn test_outcome_messages() {
        assert_eq!(GameOutcome::PlayerWin.message(), "You Win!");
        assert_eq!(GameOutcome::DealerBust.message(), "You Win!");
        assert_eq!(GameOutcome::PlayerBust.message(), "You Lose!");
        assert_eq!(GameOutcome::DealerWin.message(), "You Lose!");
        assert_eq!(GameOutcome::Tie.message(), "Tie!");
    }

    #[test]
    fn test_new_table_is_not_started() {
        let game = BlackjackGame::new(BlackjackConfig::default());
        assert_eq!(game.phase, RoundPhase::NotStarted);
        assert!(game.all_cards().is_empty());
        assert!(game.outcome.is_none());
    }
}
