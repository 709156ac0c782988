use super::rank::Rank;
use super::suit::Suit;

/// A playing card: a (rank, suit) pair.
///
/// Cards are identity only. Two cards are equal iff both fields match, and
/// the suit never influences scoring. A card's contribution to a hand's
/// total is tracked by the hand itself (see [`Slot`]), since the same Ace
/// must score differently depending on the hand it currently sits in.
///
/// [`Slot`]: super::hand::Slot
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub fn rank(&self) -> Rank {
        self.rank
    }
    pub fn suit(&self) -> Suit {
        self.suit
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((rank, suit): (Rank, Suit)) -> Self {
        Self { rank, suit }
    }
}

/// u8 isomorphism
/// each card is mapped to its location in a sorted deck 0-51
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        u8::from(c.suit) + u8::from(c.rank) * 4
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        Self {
            rank: Rank::from(n / 4),
            suit: Suit::from(n % 4),
        }
    }
}

/// str isomorphism
impl TryFrom<&str> for Card {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().len() {
            2 => {
                let rank = Rank::try_from(&s.trim()[0..1])?;
                let suit = Suit::try_from(&s.trim()[1..2])?;
                Ok(Card::from((rank, suit)))
            }
            _ => Err(anyhow::anyhow!("expected 2 characters: {}", s)),
        }
    }
}

impl Card {
    /// Parses a string of concatenated card notations into a vector of
    /// cards. Whitespace is ignored. Each card is two characters: rank
    /// then suit, e.g. "As Td 9h".
    pub fn parse(s: &str) -> anyhow::Result<Vec<Self>> {
        s.replace(char::is_whitespace, "")
            .chars()
            .collect::<Vec<_>>()
            .chunks(2)
            .map(|pair| pair.iter().collect::<String>())
            .map(|pair| Self::try_from(pair.as_str()))
            .collect::<anyhow::Result<Vec<Self>>>()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}
