use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chess_duel::game_logic::game_config::GameConfig;
use chess_duel::game_logic::player::Player;
use chess_duel::game_logic::turn_engine::GameLogic;
use chess_duel::game_state::board::Board;
use chess_duel::input_sources::bot_input::BotInput;

fn new_bot_game(seed: u64) -> GameLogic {
    let white = Player::new(
        "white bot",
        "white",
        Box::new(BotInput::new(Duration::ZERO, Some(seed))),
    )
    .expect("white is a valid color");
    let black = Player::new(
        "black bot",
        "black",
        Box::new(BotInput::new(Duration::ZERO, Some(seed.wrapping_add(1)))),
    )
    .expect("black is a valid color");
    GameLogic::new(Board::new_game(), white, black, GameConfig::default())
        .expect("players have distinct colors")
}

fn bench_self_play(c: &mut Criterion) {
    let mut group = c.benchmark_group("self_play");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for plies in [20u32, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(plies), &plies, |b, &plies| {
            b.iter(|| {
                let mut game = new_bot_game(black_box(7));
                // Zero thinking time still needs an arming poll per move.
                for _ in 0..plies * 2 {
                    game.process_input(&[]).expect("auto-queen never errors");
                    while game.pop_next_string_to_log().is_some() {}
                }
                black_box(game.ply())
            });
        });
    }

    group.finish();
}

criterion_group!(self_play_benches, bench_self_play);
criterion_main!(self_play_benches);
