use super::card::Card;
use super::rank::Rank;

/// A card's membership in a hand, carrying its current scoring weight.
///
/// The weight is scoped to one hand lifetime: it is assigned when the card
/// is drawn and dropped with the slot when the hand is discarded. An Ace
/// enters soft (11) when the hand can afford it and is demoted to hard (1)
/// by [`Hand::reduce`] when the hand would otherwise bust. Every other
/// rank keeps its base weight for the whole membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    card: Card,
    weight: u8,
}

impl Slot {
    pub fn card(&self) -> Card {
        self.card
    }
    pub fn weight(&self) -> u8 {
        self.weight
    }
    fn soft(&self) -> bool {
        self.card.rank() == Rank::Ace && self.weight == 11
    }
}

/// An ordered sequence of drawn cards with a running total.
///
/// The total is maintained incrementally: bumped on every draw and
/// corrected downward on every soft→hard Ace demotion, never recomputed
/// from scratch.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    slots: Vec<Slot>,
    total: u8,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws a card into the hand, assigning its weight on the spot.
    ///
    /// An Ace is promoted to its soft weight of 11 whenever that still
    /// fits under 21, greedily favoring the best non-busting total at the
    /// moment of the draw. Everything else scores its base weight.
    pub fn draw(&mut self, card: Card) {
        let weight = match card.rank() {
            Rank::Ace if self.total + 11 <= 21 => 11,
            rank => rank.weight(),
        };
        self.total += weight;
        self.slots.push(Slot { card, weight });
    }

    /// Demotes soft Aces, in draw order, until the total drops to 21 or
    /// below or no soft Aces remain. Each demotion subtracts ten from the
    /// running total. True iff the hand stands at 21 or less afterwards.
    pub fn reduce(&mut self) -> bool {
        while self.total > 21 {
            match self.slots.iter_mut().find(|slot| slot.soft()) {
                Some(slot) => {
                    slot.weight = 1;
                    self.total -= 10;
                }
                None => break,
            }
        }
        self.total <= 21
    }

    /// A natural: exactly two cards totalling exactly 21. A 21 reached
    /// with three or more cards is not a blackjack.
    pub fn blackjack(&self) -> bool {
        self.slots.len() == 2 && self.total == 21
    }

    /// The total with the first card dealt excluded. The dealer's first
    /// card is the hole card, so this is what the player sees before the
    /// dealer's turn resolves.
    pub fn showing(&self) -> u8 {
        self.total - self.slots.first().map(|slot| slot.weight).unwrap_or(0)
    }

    /// Empties the hand, returning the bare cards for the discard pile.
    /// Weight overrides die with the slots.
    pub fn clear(&mut self) -> Vec<Card> {
        self.total = 0;
        self.slots.drain(..).map(|slot| slot.card).collect()
    }

    pub fn total(&self) -> u8 {
        self.total
    }
    pub fn size(&self) -> usize {
        self.slots.len()
    }
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            self.slots
                .iter()
                .map(|slot| slot.card().to_string())
                .collect::<Vec<String>>()
                .join(" ")
        )
    }
}
