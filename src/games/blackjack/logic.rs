//! Round flow for Blackjack: deal, hit, stand, settle.
//!
//! Commands are refused with a [`BlackjackError`] when the round is not in
//! a state that accepts them. A player who busts must still stand before
//! the round can be settled, unless `auto_stand_on_bust` is configured.

use log::{debug, info};
use rand::Rng;

use super::types::*;
use crate::core::constants::BLACKJACK;
use crate::core::error::BlackjackError;

/// Discrete commands from the table buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlackjackInput {
    Hit,
    /// Stand and let the dealer play, then settle.
    Stand,
    Restart,
}

/// Decide a round from adjusted sums.
///
/// Precedence: player bust, dealer bust, tie, higher sum.
pub fn settle(player_score: u16, dealer_score: u16) -> GameOutcome {
    let limit = BLACKJACK as u16;
    if player_score > limit {
        GameOutcome::PlayerBust
    } else if dealer_score > limit {
        GameOutcome::DealerBust
    } else if player_score == dealer_score {
        GameOutcome::Tie
    } else if player_score > dealer_score {
        GameOutcome::PlayerWin
    } else {
        GameOutcome::DealerWin
    }
}

fn draw_into(deck: &mut Deck, hand: &mut Hand) -> Result<Card, BlackjackError> {
    let card = deck.draw().ok_or(BlackjackError::DeckExhausted)?;
    hand.push(card);
    Ok(card)
}

impl BlackjackGame {
    /// Shuffle a fresh deck and deal a new round.
    pub fn new_round<R: Rng>(&mut self, rng: &mut R) -> BlackjackView {
        let deck = Deck::shuffled(rng);
        match self.deal_round(deck) {
            Ok(view) => view,
            Err(err) => {
                // A full deck always covers the opening four cards.
                log::error!("opening deal failed: {}", err);
                self.view()
            }
        }
    }

    /// Alias for [`new_round`](Self::new_round); any prior state is discarded.
    pub fn restart<R: Rng>(&mut self, rng: &mut R) -> BlackjackView {
        self.new_round(rng)
    }

    /// Deal a round from `deck` as given.
    ///
    /// Dealer gets the hole card then an up card, player gets two. A deck
    /// with fewer than four cards or any repeated card is refused and the
    /// table is left as it was.
    pub fn deal_round(&mut self, mut deck: Deck) -> Result<BlackjackView, BlackjackError> {
        if deck.len() < 4 {
            return Err(BlackjackError::DeckExhausted);
        }
        if let Some(card) = deck.first_duplicate() {
            return Err(BlackjackError::DuplicateCard(card));
        }

        let mut dealer = Hand::new();
        let mut player = Hand::new();
        draw_into(&mut deck, &mut dealer)?;
        draw_into(&mut deck, &mut dealer)?;
        draw_into(&mut deck, &mut player)?;
        draw_into(&mut deck, &mut player)?;

        self.deck = deck;
        self.dealer = dealer;
        self.player = player;
        self.player_bust = false;
        self.outcome = None;
        self.phase = RoundPhase::PlayerTurn;
        self.rounds_played += 1;

        debug!(
            "round {} dealt: player {} ({}), dealer shows {}",
            self.rounds_played,
            format_cards(self.player.cards()),
            self.player.score(),
            format_cards(&self.dealer.cards()[1..]),
        );

        Ok(self.view())
    }

    fn expect_phase(
        &self,
        command: &'static str,
        phase: RoundPhase,
    ) -> Result<(), BlackjackError> {
        if self.phase == RoundPhase::NotStarted {
            return Err(BlackjackError::RoundNotStarted);
        }
        if self.phase != phase {
            return Err(BlackjackError::WrongPhase {
                command,
                phase: self.phase,
            });
        }
        Ok(())
    }

    /// Draw one card for the player.
    ///
    /// If the adjusted sum goes over 21 the player is marked bust and no
    /// further hits are accepted.
    pub fn player_hit(&mut self) -> Result<Card, BlackjackError> {
        self.expect_phase("hit", RoundPhase::PlayerTurn)?;
        if self.player_bust {
            return Err(BlackjackError::PlayerBust);
        }

        let card = draw_into(&mut self.deck, &mut self.player)?;
        let score = self.player.reduce_aces();
        debug!("player hits {} -> {}", card, score);

        if score > BLACKJACK as u16 {
            self.player_bust = true;
            info!("player busts with {}", score);
            if self.config.auto_stand_on_bust {
                self.player_stand()?;
            }
        }
        Ok(card)
    }

    /// End the player's turn and play out the dealer.
    ///
    /// The dealer draws while the adjusted sum is below `dealer_stands_on`.
    /// Returns how many cards the dealer drew. If the deck runs dry first,
    /// nothing changes and the player is still to act.
    pub fn player_stand(&mut self) -> Result<usize, BlackjackError> {
        self.expect_phase("stand", RoundPhase::PlayerTurn)?;
        debug!(
            "dealer reveals {} -> {}",
            format_cards(self.dealer.cards()),
            self.dealer.score()
        );

        let mut deck = self.deck.clone();
        let mut dealer = self.dealer.clone();
        let threshold = self.config.dealer_stands_on as u16;
        let mut drawn = 0;
        while dealer.reduce_aces() < threshold {
            let card = draw_into(&mut deck, &mut dealer)?;
            drawn += 1;
            debug!("dealer draws {} -> {}", card, dealer.score());
        }

        self.deck = deck;
        self.dealer = dealer;
        self.phase = RoundPhase::DealerTurn;
        Ok(drawn)
    }

    /// Compare adjusted sums once the dealer has played.
    ///
    /// Calling again after settlement returns the same outcome.
    pub fn settle_round(&mut self) -> Result<GameOutcome, BlackjackError> {
        if let (RoundPhase::Settled, Some(outcome)) = (self.phase, self.outcome) {
            return Ok(outcome);
        }
        self.expect_phase("settle", RoundPhase::DealerTurn)?;

        let player_score = self.player.reduce_aces();
        let dealer_score = self.dealer.reduce_aces();
        let outcome = settle(player_score, dealer_score);

        self.outcome = Some(outcome);
        self.phase = RoundPhase::Settled;
        info!(
            "round {} settled: player {} vs dealer {} -> {:?}",
            self.rounds_played, player_score, dealer_score, outcome
        );
        Ok(outcome)
    }
}

fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Apply a table command. `Stand` plays the dealer and settles in one go.
pub fn process_input<R: Rng>(
    game: &mut BlackjackGame,
    input: BlackjackInput,
    rng: &mut R,
) -> Result<(), BlackjackError> {
    match input {
        BlackjackInput::Hit => {
            game.player_hit()?;
            if game.phase == RoundPhase::DealerTurn {
                game.settle_round()?;
            }
        }
        BlackjackInput::Stand => {
            game.player_stand()?;
            game.settle_round()?;
        }
        BlackjackInput::Restart => {
            game.restart(rng);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::BlackjackConfig;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn c(rank: Rank) -> Card {
        Card::new(rank, Suit::Spades)
    }

    /// Build a deck that deals hole, up, player, player, then `rest` in order.
    ///
    /// Hole is a club, up a diamond, player cards spades, the rest hearts.
    fn rigged(hole: Rank, up: Rank, p1: Rank, p2: Rank, rest: &[Rank]) -> Deck {
        let mut order = vec![
            Card::new(hole, Suit::Clubs),
            Card::new(up, Suit::Diamonds),
            c(p1),
            c(p2),
        ];
        order.extend(rest.iter().map(|r| Card::new(*r, Suit::Hearts)));
        order.reverse();
        Deck::from_cards(order)
    }

    fn table() -> BlackjackGame {
        BlackjackGame::new(BlackjackConfig::default())
    }

    #[test]
    fn test_settle_precedence() {
        assert_eq!(settle(22, 25), GameOutcome::PlayerBust);
        assert_eq!(settle(18, 22), GameOutcome::DealerBust);
        assert_eq!(settle(19, 19), GameOutcome::Tie);
        assert_eq!(settle(20, 19), GameOutcome::PlayerWin);
        assert_eq!(settle(17, 19), GameOutcome::DealerWin);
    }

    #[test]
    fn test_deal_order() {
        let mut game = table();
        let view = game
            .deal_round(rigged(Rank::Ten, Rank::Seven, Rank::Ten, Rank::Nine, &[]))
            .unwrap();

        assert_eq!(view.phase, RoundPhase::PlayerTurn);
        assert_eq!(view.player_cards, vec![c(Rank::Ten), c(Rank::Nine)]);
        assert_eq!(view.player_score, 19);
        assert_eq!(
            view.dealer_cards,
            vec![None, Some(Card::new(Rank::Seven, Suit::Diamonds))]
        );
        assert_eq!(view.dealer_score, None);
        assert!(game.deck.is_empty());
    }

    #[test]
    fn test_short_deck_is_rejected() {
        let mut game = table();
        let deck = Deck::from_cards(vec![c(Rank::Two), c(Rank::Three)]);
        assert_eq!(game.deal_round(deck), Err(BlackjackError::DeckExhausted));
        assert_eq!(game.phase, RoundPhase::NotStarted);
    }

    #[test]
    fn test_deck_with_repeated_card_is_rejected() {
        let mut game = table();
        let ace = Card::new(Rank::Ace, Suit::Spades);
        let deck = Deck::from_cards(vec![ace; 5]);
        assert_eq!(
            game.deal_round(deck),
            Err(BlackjackError::DuplicateCard(ace))
        );
        assert_eq!(game.phase, RoundPhase::NotStarted);
        assert!(game.all_cards().is_empty());
    }

    #[test]
    fn test_failed_deal_keeps_current_round() {
        let mut game = table();
        game.deal_round(rigged(Rank::Ten, Rank::Seven, Rank::Ten, Rank::Nine, &[]))
            .unwrap();
        let before = game.view();

        let two = c(Rank::Two);
        let deck = Deck::from_cards(vec![two, two, c(Rank::Three), c(Rank::Four)]);
        assert!(game.deal_round(deck).is_err());
        assert_eq!(game.view(), before);
        assert_eq!(game.rounds_played, 1);
    }

    #[test]
    fn test_stand_on_empty_deck_changes_nothing() {
        let mut game = table();
        // Dealer 14 must draw, but the deck is empty after the deal.
        game.deal_round(rigged(Rank::Ten, Rank::Four, Rank::Ten, Rank::Eight, &[]))
            .unwrap();

        assert_eq!(game.player_stand(), Err(BlackjackError::DeckExhausted));
        assert_eq!(game.phase, RoundPhase::PlayerTurn);
        assert_eq!(game.dealer.len(), 2);
        assert_eq!(game.dealer.score(), 14);
        assert!(!game.view().hole_revealed);
        assert!(matches!(
            game.settle_round(),
            Err(BlackjackError::WrongPhase { .. })
        ));
        assert!(game.outcome.is_none());
    }

    #[test]
    fn test_player_wins_19_against_17() {
        let mut game = table();
        game.deal_round(rigged(Rank::Ten, Rank::Seven, Rank::Ten, Rank::Nine, &[]))
            .unwrap();
        assert_eq!(game.player_stand(), Ok(0));
        assert_eq!(game.settle_round(), Ok(GameOutcome::PlayerWin));
        assert_eq!(game.phase, RoundPhase::Settled);
    }

    #[test]
    fn test_dealer_draws_below_17() {
        let mut game = table();
        game.deal_round(rigged(
            Rank::Ten,
            Rank::Four,
            Rank::Ten,
            Rank::Eight,
            &[Rank::Two, Rank::Five],
        ))
        .unwrap();
        // 14 -> 16 -> 21
        assert_eq!(game.player_stand(), Ok(2));
        assert_eq!(game.dealer.score(), 21);
        assert_eq!(game.settle_round(), Ok(GameOutcome::DealerWin));
    }

    #[test]
    fn test_dealer_soft_aces_reduce_while_drawing() {
        let mut game = table();
        // Dealer A+5 = 16 soft, draws K -> 26 reduced to 16, draws 3 -> 19.
        game.deal_round(rigged(
            Rank::Ace,
            Rank::Five,
            Rank::Ten,
            Rank::Seven,
            &[Rank::King, Rank::Three],
        ))
        .unwrap();
        assert_eq!(game.player_stand(), Ok(2));
        assert_eq!(game.dealer.score(), 19);
    }

    #[test]
    fn test_dealer_stands_on_soft_17() {
        let mut game = table();
        game.deal_round(rigged(
            Rank::Ace,
            Rank::Six,
            Rank::Ten,
            Rank::Seven,
            &[Rank::Two],
        ))
        .unwrap();
        assert_eq!(game.player_stand(), Ok(0));
        assert_eq!(game.settle_round(), Ok(GameOutcome::Tie));
    }

    #[test]
    fn test_hit_then_bust_blocks_further_hits() {
        let mut game = table();
        game.deal_round(rigged(
            Rank::Ten,
            Rank::Seven,
            Rank::Ten,
            Rank::Six,
            &[Rank::King, Rank::Two],
        ))
        .unwrap();

        assert_eq!(game.player_hit(), Ok(Card::new(Rank::King, Suit::Hearts)));
        assert!(game.player_bust);
        assert_eq!(game.player_hit(), Err(BlackjackError::PlayerBust));
        // Bust player still has to stand before the round settles.
        assert_eq!(game.phase, RoundPhase::PlayerTurn);
        assert!(matches!(
            game.settle_round(),
            Err(BlackjackError::WrongPhase { .. })
        ));

        game.player_stand().unwrap();
        assert_eq!(game.settle_round(), Ok(GameOutcome::PlayerBust));
    }

    #[test]
    fn test_auto_stand_on_bust() {
        let mut game = BlackjackGame::new(BlackjackConfig {
            auto_stand_on_bust: true,
            ..BlackjackConfig::default()
        });
        game.deal_round(rigged(
            Rank::Ten,
            Rank::Seven,
            Rank::Ten,
            Rank::Six,
            &[Rank::King],
        ))
        .unwrap();
        game.player_hit().unwrap();
        assert_eq!(game.phase, RoundPhase::DealerTurn);
        assert_eq!(game.settle_round(), Ok(GameOutcome::PlayerBust));
    }

    #[test]
    fn test_commands_before_deal_are_rejected() {
        let mut game = table();
        assert_eq!(game.player_hit(), Err(BlackjackError::RoundNotStarted));
        assert_eq!(game.player_stand(), Err(BlackjackError::RoundNotStarted));
        assert_eq!(game.settle_round(), Err(BlackjackError::RoundNotStarted));
    }

    #[test]
    fn test_hit_after_stand_is_rejected() {
        let mut game = table();
        game.deal_round(rigged(Rank::Ten, Rank::Seven, Rank::Ten, Rank::Nine, &[]))
            .unwrap();
        game.player_stand().unwrap();
        assert_eq!(
            game.player_hit(),
            Err(BlackjackError::WrongPhase {
                command: "hit",
                phase: RoundPhase::DealerTurn,
            })
        );
        assert!(game.player_stand().is_err());
    }

    #[test]
    fn test_settle_is_repeatable() {
        let mut game = table();
        game.deal_round(rigged(Rank::Ten, Rank::Seven, Rank::Ten, Rank::Nine, &[]))
            .unwrap();
        game.player_stand().unwrap();
        let first = game.settle_round().unwrap();
        assert_eq!(game.settle_round(), Ok(first));
    }

    #[test]
    fn test_hole_card_revealed_after_stand() {
        let mut game = table();
        game.deal_round(rigged(Rank::Queen, Rank::Seven, Rank::Ten, Rank::Nine, &[]))
            .unwrap();
        game.player_stand().unwrap();
        let view = game.view();
        assert!(view.hole_revealed);
        assert_eq!(view.dealer_cards[0], Some(Card::new(Rank::Queen, Suit::Clubs)));
        assert_eq!(view.dealer_score, Some(17));
    }

    #[test]
    fn test_new_round_conserves_cards() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut game = table();
        for _ in 0..20 {
            game.new_round(&mut rng);
            let _ = game.player_hit();
            let mut all = game.all_cards();
            all.sort();
            all.dedup();
            assert_eq!(all.len(), 52);
        }
    }

    #[test]
    fn test_process_input_stand_settles() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut game = table();
        game.new_round(&mut rng);
        process_input(&mut game, BlackjackInput::Stand, &mut rng).unwrap();
        assert_eq!(game.phase, RoundPhase::Settled);
        assert!(game.outcome.is_some());

        process_input(&mut game, BlackjackInput::Restart, &mut rng).unwrap();
        assert_eq!(game.phase, RoundPhase::PlayerTurn);
        assert!(game.outcome.is_none());
        assert_eq!(game.player.len(), 2);
        assert_eq!(game.dealer.len(), 2);
    }
}
