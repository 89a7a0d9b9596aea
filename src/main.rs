use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use chess_duel::chess_errors::ChessErrors;
use chess_duel::game_logic::game_config::{GameConfig, PromotionPolicy};
use chess_duel::game_logic::player::Player;
use chess_duel::game_logic::turn_engine::GameLogic;
use chess_duel::game_state::board::Board;
use chess_duel::input_sources::bot_input::BotInput;

const MAX_SKIPPED_PROMOTIONS: u32 = 64;

fn flag_value<T: std::str::FromStr>(args: &[String], flag: &str) -> Option<T> {
    let position = args.iter().position(|a| a == flag)?;
    let raw = args.get(position + 1)?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            eprintln!("ignoring {flag} {raw}: not a number");
            None
        }
    }
}

fn config_from_args(args: &[String]) -> GameConfig {
    let mut config = GameConfig::default();
    if let Some(plies) = flag_value(args, "--plies") {
        config.max_plies = plies;
    }
    if let Some(ms) = flag_value(args, "--think-ms") {
        config.bot_thinking_time = Duration::from_millis(ms);
    }
    config.seed = flag_value(args, "--seed");
    if args.iter().any(|a| a == "--strict-promotion") {
        config.promotion_policy = PromotionPolicy::Unsupported;
    }
    config.verbose = args.iter().any(|a| a == "--verbose" || a == "-v");
    config
}

fn run(config: GameConfig) -> Result<(), ChessErrors> {
    let white_seed = config.seed;
    let black_seed = config.seed.map(|seed| seed.wrapping_add(1));
    let white = Player::new(
        "White bot",
        "white",
        Box::new(BotInput::new(config.bot_thinking_time, white_seed)),
    )?;
    let black = Player::new(
        "Black bot",
        "black",
        Box::new(BotInput::new(config.bot_thinking_time, black_seed)),
    )?;

    let max_plies = u32::from(config.max_plies);
    let verbose = config.verbose;
    let mut game = GameLogic::new(Board::new_game(), white, black, config)?;
    println!("{}\n", game.board());

    let stdout = io::stdout();
    let mut skipped_promotions = 0u32;
    while game.ply() < max_plies {
        match game.process_input(&[]) {
            Ok(Some(_)) => {
                skipped_promotions = 0;
                if verbose {
                    println!("{}\n", game.board());
                }
            }
            Ok(None) => {
                let color = game.active_player().color();
                if BotInput::candidate_moves(game.board(), color).is_empty() {
                    println!("{color} has no moves left");
                    break;
                }
            }
            Err(ChessErrors::PromotionNotSupported(at)) => {
                // The bot picks again on the next poll.
                eprintln!("promotion on {at} skipped");
                skipped_promotions += 1;
                if skipped_promotions > MAX_SKIPPED_PROMOTIONS {
                    println!("only promotions are left and they are disabled");
                    break;
                }
            }
            Err(err) => return Err(err),
        }

        let mut out = stdout.lock();
        while let Some(line) = game.pop_next_string_to_log() {
            writeln!(out, "{line}").ok();
        }
        out.flush().ok();

        // Sleep briefly to avoid busy-waiting
        thread::sleep(Duration::from_millis(10));
    }

    println!("{}", game.board());
    for player in game.players() {
        println!(
            "{} ({}): {} moves, {} captures",
            player.name(),
            player.color(),
            player.moves().len(),
            player.captured().len()
        );
    }
    Ok(())
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if let Err(err) = run(config_from_args(&args)) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
