//! Command-line card table.
//!
//! `cargo run --example cli -- blackjack 2` plays blackjack against the dealer;
//! `cargo run --example cli -- play --players 5` plays the generic card game.
//! Set `RUST_LOG=debug` to follow the engine.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use cardtable::{Blackjack, Game, GameOptions, PlayOutcome, RoundState, hand_value};
use clap::{Parser, Subcommand};

type BoxErr = Box<dyn std::error::Error>;

#[derive(Parser)]
#[command(name = "cardtable", about = "Turn-based card games in the terminal")]
struct Cli {
    /// Seed for the shuffle; defaults to the clock.
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play blackjack against the dealer.
    Blackjack {
        /// Number of players besides the dealer.
        players: usize,
    },
    /// Take turns playing cards onto the discard pile.
    Play {
        /// Number of players.
        #[arg(long, default_value_t = 5)]
        players: usize,

        /// Cards dealt to each player.
        #[arg(long, default_value_t = 2)]
        hand_size: usize,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let seed = cli.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });

    let outcome = match cli.command {
        Command::Blackjack { players } => run_blackjack(players, seed),
        Command::Play { players, hand_size } => run_play(players, hand_size, seed),
    };

    if let Err(err) = outcome {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run_blackjack(players: usize, seed: u64) -> Result<(), BoxErr> {
    let mut table = Blackjack::new(players, seed)?;
    println!("{}", table.game());
    print_status(&table, "'s TURN", table.game().turn());

    loop {
        match table.state() {
            RoundState::PlayerTurn => {
                let seat = table.game().turn();
                match prompt_line("Hit or stay?\n").as_str() {
                    command if command.contains("hit") => {
                        let hit = table.hit()?;
                        if hit.recycled {
                            println!("Deck empty, discard shuffled in");
                        }
                        if hit.bust {
                            // `hit` has already passed the turn on.
                            let game = table.game();
                            println!("{} HITS -> {}", game.players()[hit.seat], hit.card);
                            print_hand(game, hit.seat, hit.value);
                            println!("-----BUST-----");
                            println!();
                            print_status(&table, "STAYS", hit.seat);
                        } else {
                            print_status(&table, &format!("HITS -> {}", hit.card), seat);
                        }
                    }
                    command if command.contains("stay") => {
                        table.stay()?;
                        print_status(&table, "STAYS", seat);
                    }
                    command if command.contains("exit") => return Ok(()),
                    _ => println!("Unknown command."),
                }
            }
            RoundState::DealerTurn => {
                let seat = table.dealer_seat();
                for card in table.dealer_play()? {
                    println!("{} HITS -> {card}", table.game().players()[seat]);
                }
                print_status(&table, "STAYS, end", seat);
                print_results(&table)?;

                if prompt_line("Another round? y/n\n") != "y" {
                    println!("{}", table.game());
                    return Ok(());
                }
                table.next_round()?;
                println!("{}", table.game());
                print_status(&table, "'s TURN", table.game().turn());
            }
            RoundState::AwaitingDeal => table.deal()?,
            RoundState::RoundOver => table.next_round()?,
        }
    }
}

fn print_status(table: &Blackjack, message: &str, seat: usize) {
    let game = table.game();
    println!("{} {message}", game.players()[seat]);

    if !table.is_dealer_turn() {
        if let Some(card) = table.dealer_up_card() {
            println!("Dealer shows: {card}");
        }
    }

    let turn = game.turn();
    print_hand(game, turn, hand_value(game.current_player().hand()));
    println!();
}

fn print_hand(game: &Game, seat: usize, value: u16) {
    let player = &game.players()[seat];
    println!("{player}:     {}", player.describe_hand());
    println!("\t Value: {value}");
}

fn print_results(table: &Blackjack) -> Result<(), BoxErr> {
    let result = table.showdown()?;
    let game = table.game();
    let dealer = &game.players()[table.dealer_seat()];

    println!("------Done------");
    println!(
        "{dealer}: {}\t-> {}",
        dealer.describe_hand(),
        result.dealer_value
    );
    for player in &result.players {
        let hand = game.players()[player.seat].describe_hand();
        println!(
            "{}: {hand}\t-> {}  {}",
            player.name,
            player.value,
            player.outcome.label()
        );
    }
    println!();
    Ok(())
}

fn run_play(players: usize, hand_size: usize, seed: u64) -> Result<(), BoxErr> {
    let options = GameOptions::default()
        .with_players(players)
        .with_hand_size(hand_size);
    let mut game = Game::new(options, seed)?;

    loop {
        println!("{game}");
        println!("{}", game.current_player().describe_hand());

        let input = prompt_line(&format!(
            "enter the number of the card you want to play, 1-{}\n",
            game.current_player().hand().len()
        ));
        if input == "exit" {
            break;
        }

        let outcome = input
            .parse::<usize>()
            .ok()
            .and_then(|number| number.checked_sub(1))
            .map_or(PlayOutcome::TryAgain, |index| game.play(index));

        match outcome {
            PlayOutcome::Played(card) => println!("===== {card} ====="),
            PlayOutcome::TryAgain => println!("===== try again ====="),
        }
        println!();
    }

    println!("{}", game.deck());
    println!("{}", game.discard_pile());

    game.recycle_discard();
    game.sort_deck();
    println!("{}", game.deck());

    game.discard_all_hands();
    println!("{}", game.discard_pile());
    game.recycle_discard();
    game.sort_deck();
    println!("{}", game.deck());

    Ok(())
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => String::from("exit"),
        Ok(_) => input.trim().to_lowercase(),
    }
}
