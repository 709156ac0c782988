use super::decision::Decision;
use super::error::TableError;
use super::outcome::Outcome;
use super::state::State;
use crate::cards::card::Card;
use crate::cards::hand::Hand;
use crate::cards::shoe::Shoe;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// A blackjack table: one shoe, two hands, two state machines.
///
/// The table owns every shared resource of the round in progress and is
/// the only thing that touches them, so play is fully synchronous: the
/// outer loop alternates [`Table::step_dealer`] and [`Table::step_player`]
/// until the player reaches a fixed point, feeding in a [`Decision`]
/// whenever the player holds at `Continue` with a complete initial deal.
/// The engine never blocks; decisions arrive as complete values between
/// steps.
///
/// The dealer plays fixed house rules: draw to at least two cards and
/// while strictly below 17, stand on all 17s including soft ones. The
/// dealer's first card is the hole card, hidden from the player's view
/// but counted in the total that drives the dealer's own transitions.
pub struct Table {
    rng: SmallRng,
    shoe: Shoe,
    player: Hand,
    dealer: Hand,
    player_state: State,
    dealer_state: State,
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

/// scripted draw order, used to rig rounds in tests
impl From<Shoe> for Table {
    fn from(shoe: Shoe) -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
            shoe,
            player: Hand::new(),
            dealer: Hand::new(),
            player_state: State::Start,
            dealer_state: State::Start,
        }
    }
}

impl Table {
    /// A fresh table over the full ordered 52-card shoe. Call
    /// [`Table::shuffle`] before the first round.
    pub fn new() -> Self {
        Self::from(Shoe::new())
    }

    /// Same, but with a deterministic shuffle stream for reproducible
    /// sessions.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            ..Self::new()
        }
    }

    pub fn shuffle(&mut self) {
        self.shoe.shuffle(&mut self.rng);
    }

    /// Resets both hands to empty and rewinds both machines to `Start`.
    /// Any leftover cards go through the discard pile, so the 52-card
    /// partition survives even an abandoned round.
    pub fn start_round(&mut self) {
        self.shoe.discard_all(&mut self.player);
        self.shoe.discard_all(&mut self.dealer);
        self.player_state = State::Start;
        self.dealer_state = State::Start;
    }

    /// Advances the dealer machine by exactly one transition.
    pub fn step_dealer(&mut self) -> Result<State, TableError> {
        self.dealer_state = self.next_dealer(self.dealer_state)?;
        Ok(self.dealer_state)
    }

    /// Advances the player machine by exactly one transition, reading the
    /// dealer's current state.
    pub fn step_player(&mut self) -> Result<State, TableError> {
        self.player_state = self.next_player(self.player_state, self.dealer_state)?;
        Ok(self.player_state)
    }

    /// Feeds the shell's answer into the player machine. Only meaningful
    /// while the player holds at `Continue` with the initial deal
    /// complete; at any other point the state is returned unchanged.
    pub fn decide(&mut self, decision: Decision) -> State {
        if self.awaiting() {
            self.player_state = match decision {
                Decision::Hit => State::Hit,
                Decision::Stay => State::Stay,
            };
        }
        self.player_state
    }

    /// True while the round is blocked on an external hit/stay answer.
    pub fn awaiting(&self) -> bool {
        self.player_state == State::Continue && self.player.size() >= 2
    }

    /// The resolved round. Meaningful once the player machine is frozen.
    pub fn outcome(&self) -> Outcome {
        Outcome::from((self.player_state, &self.player, &self.dealer))
    }

    /// Discards both hands, then shuffles the discard pile back in if
    /// the shoe has dropped below half a deck.
    pub fn end_round(&mut self) {
        self.shoe.discard_all(&mut self.player);
        self.shoe.discard_all(&mut self.dealer);
        self.shoe.replenish_if_low(&mut self.rng);
    }

    pub fn player(&self) -> &Hand {
        &self.player
    }
    pub fn dealer(&self) -> &Hand {
        &self.dealer
    }
    pub fn shoe(&self) -> &Shoe {
        &self.shoe
    }
    pub fn player_state(&self) -> State {
        self.player_state
    }
    pub fn dealer_state(&self) -> State {
        self.dealer_state
    }
}

impl Table {
    fn draw(&mut self) -> Result<Card, TableError> {
        self.shoe.draw().ok_or(TableError::EmptyShoe)
    }

    /// The dealer machine. Total over its states; `Stay`, `Win` and
    /// `Lose` are fixed points.
    fn next_dealer(&mut self, state: State) -> Result<State, TableError> {
        match state {
            State::Start => Ok(State::Continue),
            State::Continue => match self.dealer.total() < 17 || self.dealer.size() < 2 {
                true => Ok(State::Hit),
                false => Ok(State::Stay),
            },
            State::Hit => {
                let card = self.draw()?;
                self.dealer.draw(card);
                log::debug!("dealer draws {} ({})", card, self.dealer.total());
                if self.dealer.blackjack() {
                    Ok(State::Blackjack)
                } else if self.dealer.reduce() {
                    Ok(State::Continue)
                } else {
                    Ok(State::Lose)
                }
            }
            State::Blackjack => Ok(State::Win),
            State::Stay => Ok(State::Stay),
            State::Win => Ok(State::Win),
            State::Lose => Ok(State::Lose),
        }
    }

    /// The player machine. Reads the dealer's state by value when the
    /// player stands; otherwise the two sides evolve independently.
    fn next_player(&mut self, state: State, dealer: State) -> Result<State, TableError> {
        match state {
            State::Start => Ok(State::Continue),
            State::Continue => {
                // forced initial deal, one card per step
                if self.player.size() < 2 {
                    let card = self.draw()?;
                    self.player.draw(card);
                    log::debug!("player draws {} ({})", card, self.player.total());
                }
                Ok(State::Continue)
            }
            State::Hit => {
                let card = self.draw()?;
                self.player.draw(card);
                log::debug!("player draws {} ({})", card, self.player.total());
                if self.player.blackjack() {
                    Ok(State::Blackjack)
                } else if self.player.reduce() {
                    Ok(State::Continue)
                } else {
                    Ok(State::Lose)
                }
            }
            State::Stay => match dealer {
                State::Win => Ok(State::Lose),
                State::Lose => Ok(State::Win),
                State::Stay => match self.player.total() > self.dealer.total() {
                    true => Ok(State::Win),
                    false => Ok(State::Lose),
                },
                _ => Ok(State::Stay),
            },
            State::Blackjack => Ok(State::Win),
            State::Win => Ok(State::Win),
            State::Lose => Ok(State::Lose),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::card::Card;

    fn rigged(s: &str) -> Table {
        Table::from(Shoe::from(Card::parse(s).unwrap()))
    }

    /// Mirrors the shell's driver: alternate single steps, answer the
    /// prompt only once the dealer's hand is settled, stand once the
    /// script runs dry.
    fn drive(table: &mut Table, script: &[Decision]) -> Outcome {
        let mut script = script.iter().copied();
        table.start_round();
        loop {
            let dealer = table.step_dealer().unwrap();
            let player = table.step_player().unwrap();
            if player.is_terminal() {
                break;
            }
            if table.awaiting() && dealer.is_fixed() {
                let decision = script.next().unwrap_or(Decision::Stay);
                table.decide(decision);
            }
        }
        table.outcome()
    }

    fn accounted(table: &Table) -> usize {
        table.shoe().remaining()
            + table.shoe().discarded()
            + table.player().size()
            + table.dealer().size()
    }

    #[test]
    fn deal_alternates_player_first() {
        let mut table = rigged("Ts 6d 9h Tc 5s");
        drive(&mut table, &[]);
        let player = table.player().slots();
        let dealer = table.dealer().slots();
        assert!(player[0].card() == Card::try_from("Ts").unwrap());
        assert!(player[1].card() == Card::try_from("9h").unwrap());
        assert!(dealer[0].card() == Card::try_from("6d").unwrap());
        assert!(dealer[1].card() == Card::try_from("Tc").unwrap());
    }

    #[test]
    fn dealer_draws_through_sixteen() {
        // dealer sits at 16 after two cards, must draw again, lands a
        // three-card 21 that is not a blackjack, and takes the round
        let mut table = rigged("Ts 6d 9h Tc 5s");
        let outcome = drive(&mut table, &[Decision::Stay]);
        assert!(!outcome.won());
        assert!(outcome.player() == 19);
        assert!(outcome.dealer() == 21);
        assert!(table.dealer().size() == 3);
        assert!(!table.dealer().blackjack());
    }

    #[test]
    fn dealer_stands_on_hard_seventeen() {
        let mut table = rigged("Ts 7d 9h Th");
        let outcome = drive(&mut table, &[Decision::Stay]);
        assert!(outcome.won());
        assert!(outcome.dealer() == 17);
        assert!(table.dealer().size() == 2);
    }

    #[test]
    fn dealer_stands_on_soft_seventeen() {
        let mut table = rigged("Ts Ah 9h 6c 5d");
        let outcome = drive(&mut table, &[Decision::Stay]);
        assert!(outcome.won());
        assert!(outcome.dealer() == 17);
        assert!(table.dealer().size() == 2);
    }

    #[test]
    fn dealer_natural_beats_standing_player() {
        let mut table = rigged("Ts Ah 9h Kc");
        let outcome = drive(&mut table, &[Decision::Stay]);
        assert!(!outcome.won());
        assert!(table.dealer().blackjack());
        assert!(table.dealer_state() == State::Win);
    }

    #[test]
    fn dealer_bust_hands_the_round_over() {
        let mut table = rigged("Ts 6d 9h Th 8c");
        let outcome = drive(&mut table, &[Decision::Stay]);
        assert!(outcome.won());
        assert!(outcome.dealer() == 24);
        assert!(table.dealer_state() == State::Lose);
    }

    #[test]
    fn tie_goes_to_the_house() {
        let mut table = rigged("Ts 9d 9h Th");
        let outcome = drive(&mut table, &[Decision::Stay]);
        assert!(!outcome.won());
        assert!(outcome.player() == 19);
        assert!(outcome.dealer() == 19);
    }

    #[test]
    fn player_natural_beats_dealer_twenty() {
        let mut table = rigged("As Td Kd Th");
        let outcome = drive(&mut table, &[Decision::Stay]);
        assert!(outcome.won());
        assert!(table.player().blackjack());
        assert!(outcome.dealer() == 20);
    }

    #[test]
    fn player_bust_loses_on_the_spot() {
        let mut table = rigged("Ts 6d 9h Th 5s 8c");
        let outcome = drive(&mut table, &[Decision::Hit]);
        assert!(!outcome.won());
        assert!(outcome.player() == 27);
        assert!(table.player_state() == State::Lose);
    }

    #[test]
    fn player_hits_twice_and_outdraws() {
        // dealer lands 17 with a hard Ace third card; player builds 19
        let mut table = rigged("5s 6d 2h Th Ac 3d 9h");
        let outcome = drive(&mut table, &[Decision::Hit, Decision::Hit, Decision::Stay]);
        assert!(outcome.won());
        assert!(outcome.player() == 19);
        assert!(outcome.dealer() == 17);
        assert!(table.player().size() == 4);
    }

    #[test]
    fn decide_is_a_noop_before_the_deal_completes() {
        let mut table = rigged("Ts 6d 9h Tc 5s");
        table.start_round();
        assert!(table.decide(Decision::Hit) == State::Start);
        table.step_player().unwrap();
        assert!(table.decide(Decision::Hit) == State::Continue);
    }

    #[test]
    fn empty_shoe_surfaces_as_an_error() {
        let mut table = rigged("Ts 6d");
        table.start_round();
        table.step_dealer().unwrap();
        table.step_player().unwrap();
        table.step_dealer().unwrap();
        table.step_player().unwrap();
        table.step_dealer().unwrap();
        assert!(matches!(table.step_player(), Err(TableError::EmptyShoe)));
    }

    #[test]
    fn every_card_is_always_accounted_for() {
        let mut table = Table::seeded(42);
        table.shuffle();
        for _ in 0..10 {
            table.start_round();
            loop {
                let dealer = table.step_dealer().unwrap();
                let player = table.step_player().unwrap();
                assert!(accounted(&table) == 52);
                if player.is_terminal() {
                    break;
                }
                if table.awaiting() && dealer.is_fixed() {
                    table.decide(Decision::Stay);
                }
            }
            table.end_round();
            assert!(accounted(&table) == 52);
        }
    }

    #[test]
    fn dealer_always_draws_to_two_cards() {
        let mut table = Table::seeded(7);
        table.shuffle();
        for _ in 0..10 {
            table.start_round();
            drive(&mut table, &[]);
            assert!(table.dealer().size() >= 2);
            assert!(table.dealer().total() >= 17 || table.dealer_state() == State::Lose);
            table.end_round();
        }
    }

    #[test]
    fn shoe_never_runs_dry_across_rounds() {
        let mut table = Table::seeded(3);
        table.shuffle();
        for _ in 0..40 {
            table.start_round();
            drive(&mut table, &[]);
            table.end_round();
            assert!(table.shoe().remaining() >= 26);
        }
    }

    #[test]
    fn abandoned_round_cards_survive_through_start() {
        let mut table = Table::seeded(9);
        table.shuffle();
        table.start_round();
        table.step_dealer().unwrap();
        table.step_player().unwrap();
        table.step_dealer().unwrap();
        table.step_player().unwrap();
        // walk away mid-deal and start over
        table.start_round();
        assert!(accounted(&table) == 52);
        assert!(table.player().size() == 0);
        assert!(table.dealer().size() == 0);
    }
}
