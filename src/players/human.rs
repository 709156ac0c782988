pub struct Human;

impl Human {
    /// Runs rounds at the table until the player declines another.
    pub fn play(table: &mut Table) -> Result<()> {
        Self::banner();
        loop {
            Self::round(table)?;
            table.end_round();
            Self::dump(table);
            if !Self::again()? {
                break Ok(());
            }
        }
    }

    /// One round: alternate single steps of the two machines, prompting
    /// only once the dealer's hand is settled, until the player's state
    /// freezes.
    fn round(table: &mut Table) -> Result<()> {
        table.start_round();
        loop {
            let dealer = table.step_dealer()?;
            let player = table.step_player()?;
            if player.is_terminal() {
                break;
            }
            if table.awaiting() && dealer.is_fixed() {
                Self::render(table);
                let decision = Self::decision()?;
                table.decide(decision);
            }
        }
        Self::reveal(table);
        println!("\n{}\n", table.outcome());
        Ok(())
    }

    /// The table as the player may see it: the dealer's hole card and
    /// its weight stay hidden until the round is over.
    fn render(table: &Table) {
        let upcards = table
            .dealer()
            .slots()
            .iter()
            .skip(1)
            .map(|slot| slot.card().to_string())
            .collect::<Vec<String>>()
            .join(" ");
        println!("\nDealer's showing {:<2}  ?? {}", table.dealer().showing(), upcards);
        println!("You're at        {:<2}  {}", table.player().total(), table.player());
    }

    /// Both hands face up once the round is settled.
    fn reveal(table: &Table) {
        println!("\nDealer had {:<2}  {}", table.dealer().total(), table.dealer());
        println!("You had    {:<2}  {}", table.player().total(), table.player());
    }

    fn decision() -> Result<Decision> {
        let input: String = Input::new()
            .with_prompt("Do you want to hit? 'yes' or 'no'")
            .report(false)
            .validate_with(|i: &String| -> Result<(), String> {
                match Decision::try_from(i.as_str()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(e.to_string()),
                }
            })
            .interact()?;
        Ok(Decision::try_from(input.as_str())?)
    }

    fn again() -> Result<bool> {
        Ok(Confirm::new()
            .with_prompt("Another round?")
            .default(true)
            .interact()?)
    }

    fn banner() {
        println!("+----------------------------------------------+");
        println!("|             {}            |", "LET'S PLAY BLACKJACK!".bold());
        println!("| ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~ |");
        println!("| RULES:                                       |");
        println!("| 1. Dealer draws to 16, and stands on all 17s |");
        println!("| 2. Blackjack pays 3 to 2                     |");
        println!("| 3. The house takes ties                      |");
        println!("+----------------------------------------------+");
    }

    /// Post-round bookkeeping, visible under --debug.
    fn dump(table: &Table) {
        log::debug!("shoe holds {} cards", table.shoe().remaining());
        log::debug!(
            "discard pile: {}",
            table
                .shoe()
                .discards()
                .iter()
                .map(|card| card.to_string())
                .collect::<Vec<String>>()
                .join(" ")
        );
    }
}

use crate::gameplay::decision::Decision;
use crate::gameplay::table::Table;
use anyhow::Result;
use colored::Colorize;
use dialoguer::{Confirm, Input};
