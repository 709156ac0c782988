use clap::Parser;
use robojack::gameplay::table::Table;
use robojack::players::human::Human;

/// Single-deck blackjack at the terminal.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Deterministic shuffle stream for reproducible sessions
    #[arg(long)]
    seed: Option<u64>,
    /// Show per-draw traces and post-round table dumps
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    robojack::log(args.debug);
    let mut table = match args.seed {
        Some(seed) => Table::seeded(seed),
        None => Table::new(),
    };
    table.shuffle();
    Human::play(&mut table)
}
