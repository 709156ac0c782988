/// One side's position in the round.
///
/// Player and dealer each run their own copy of this machine. The two
/// evolve independently but read each other: a side's transition takes
/// its own state plus, for the player, the dealer's current state by
/// value. Stepping a fixed point returns it unchanged, so the transition
/// functions are total over the enumeration.
///
/// # Variants
///
/// - `Start`: round begins; immediately re-enters as `Continue`
/// - `Continue`: drawing the forced initial deal, or holding for input
/// - `Hit`: committed to drawing one card this step
/// - `Stay`: standing; the player waits here on the dealer's result
/// - `Blackjack`: two-card 21, resolves to `Win`
/// - `Win` / `Lose`: terminal
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
pub enum State {
    Start,
    Continue,
    Hit,
    Stay,
    Blackjack,
    Win,
    Lose,
}

impl State {
    /// True once this side's round can no longer change.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Win | Self::Lose)
    }
    /// Fixed points of the dealer machine: stepping one of these returns
    /// it unchanged, so the dealer's hand is settled.
    pub fn is_fixed(&self) -> bool {
        matches!(self, Self::Stay | Self::Win | Self::Lose)
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Continue => write!(f, "continue"),
            Self::Hit => write!(f, "hit"),
            Self::Stay => write!(f, "stay"),
            Self::Blackjack => write!(f, "blackjack"),
            Self::Win => write!(f, "win"),
            Self::Lose => write!(f, "lose"),
        }
    }
}
