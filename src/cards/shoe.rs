use super::card::Card;
use super::hand::Hand;
use rand::Rng;
use rand::seq::SliceRandom;

/// Half a deck. Below this the discard pile is shuffled back in between
/// rounds, which keeps a full hand's worth of draws available and makes
/// an exhausted shoe unreachable in normal play.
const LOW_WATER: usize = 26;

/// An ordered single-deck shoe with its discard pile.
///
/// Cards come off the front in order; randomness enters only through
/// [`Shoe::shuffle`], whose RNG is injected so play is seedable. Together
/// with the two live hands, the shoe and discard pile always partition
/// the full 52-card set: no card is ever in two piles at once.
#[derive(Debug, Clone)]
pub struct Shoe {
    cards: Vec<Card>,
    discard: Vec<Card>,
}

impl Default for Shoe {
    fn default() -> Self {
        Self::new()
    }
}

/// scripted draw order, used to rig decks in tests
impl From<Vec<Card>> for Shoe {
    fn from(cards: Vec<Card>) -> Self {
        Self {
            cards,
            discard: Vec::new(),
        }
    }
}

impl Shoe {
    /// The full ordered 52-card set, no duplicates, empty discard pile.
    pub fn new() -> Self {
        Self::from((0u8..52).map(Card::from).collect::<Vec<Card>>())
    }

    /// Removes and returns the next card in order. None once exhausted;
    /// the replenish rule keeps that unobservable in normal play.
    pub fn draw(&mut self) -> Option<Card> {
        match self.cards.is_empty() {
            true => None,
            false => Some(self.cards.remove(0)),
        }
    }

    /// Randomly permutes the shoe in place.
    pub fn shuffle(&mut self, rng: &mut impl Rng) {
        self.cards.shuffle(rng);
    }

    /// Moves every card from a finished hand onto the discard pile,
    /// leaving the hand empty.
    pub fn discard_all(&mut self, hand: &mut Hand) {
        self.discard.extend(hand.clear());
    }

    /// Shuffles the discard pile back in once fewer than half a deck
    /// remains. Checked once per round after discarding, never mid-draw.
    pub fn replenish_if_low(&mut self, rng: &mut impl Rng) {
        if self.cards.len() < LOW_WATER {
            log::debug!(
                "replenishing shoe: {} left, {} discarded",
                self.cards.len(),
                self.discard.len()
            );
            self.cards.append(&mut self.discard);
            self.shuffle(rng);
        }
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }
    pub fn discarded(&self) -> usize {
        self.discard.len()
    }
    pub fn discards(&self) -> &[Card] {
        &self.discard
    }
}
