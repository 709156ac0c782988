use super::state::State;
use crate::cards::hand::Hand;
use colored::Colorize;

/// How the round ended, for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verdict {
    /// Won with a natural two-card 21.
    Natural,
    /// Dealer stood lower, or kept playing while the player won.
    Outdrew,
    /// Dealer went over 21.
    DealerBust,
    /// Player went over 21. Decisive even when the dealer busts too.
    Bust,
    /// Dealer's natural two-card 21.
    DealerNatural,
    /// Dealer stood at or above the player's total. Ties go to the house.
    Outdrawn,
}

/// A resolved round: the player's terminal state plus both final totals.
///
/// Derived once from the frozen state pair and the two hands, after the
/// player machine reaches its fixed point. Busts are decisive, a natural
/// outranks a drawn-out 21, and equal totals favor the dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    state: State,
    player: u8,
    dealer: u8,
    verdict: Verdict,
}

impl From<(State, &Hand, &Hand)> for Outcome {
    fn from((state, player, dealer): (State, &Hand, &Hand)) -> Self {
        let verdict = match state {
            State::Win if dealer.total() > 21 => Verdict::DealerBust,
            State::Win if player.blackjack() => Verdict::Natural,
            State::Win => Verdict::Outdrew,
            _ if player.total() > 21 => Verdict::Bust,
            _ if dealer.blackjack() => Verdict::DealerNatural,
            _ => Verdict::Outdrawn,
        };
        Self {
            state,
            player: player.total(),
            dealer: dealer.total(),
            verdict,
        }
    }
}

impl Outcome {
    pub fn won(&self) -> bool {
        self.state == State::Win
    }
    pub fn player(&self) -> u8 {
        self.player
    }
    pub fn dealer(&self) -> u8 {
        self.dealer
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let headline = match self.won() {
            true => "You won!".green().bold(),
            false => "You lost!".red().bold(),
        };
        let detail = match self.verdict {
            Verdict::Natural => "blackjack pays 3 to 2".to_string(),
            Verdict::Outdrew => format!("{} beats {}", self.player, self.dealer),
            Verdict::DealerBust => format!("dealer busts at {}", self.dealer),
            Verdict::Bust => format!("busted at {}", self.player),
            Verdict::DealerNatural => "dealer has blackjack".to_string(),
            Verdict::Outdrawn if self.player == self.dealer => {
                format!("{} apiece, house takes the tie", self.dealer)
            }
            Verdict::Outdrawn => format!("{} falls to {}", self.player, self.dealer),
        };
        write!(f, "{} {}", headline, detail)
    }
}
