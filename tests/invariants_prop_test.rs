//! Property tests over random command streams.
//!
//! Invariants covered:
//! - the active piece always sits inside the columns, above the bottom edge,
//!   and never overlaps a locked cell
//! - score and cleared-line counters never decrease
//! - once the game is over nothing changes
//! - four clockwise rotations restore any catalog matrix

use proptest::prelude::*;

use blockfall::core::{spawn_matrix, GameState, ShapeSource};
use blockfall::types::{Command, GameStatus, PieceKind};

#[derive(Debug, Clone, Copy)]
enum Step {
    Command(Command),
    Tick,
    HardDrop,
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        3 => prop_oneof![
            Just(Command::MoveLeft),
            Just(Command::MoveRight),
            Just(Command::SoftDrop),
            Just(Command::RotateCw),
        ]
        .prop_map(Step::Command),
        2 => Just(Step::Tick),
        1 => Just(Step::HardDrop),
    ]
}

fn assert_active_fits<S: ShapeSource>(game: &GameState<S>) {
    let Some(active) = game.active() else {
        return;
    };
    let board = game.board();
    for (x, y) in active.cells() {
        assert!(x >= 0 && x < board.width() as i16, "column {x} out of range");
        assert!(y < board.height() as i16, "row {y} below the floor");
        assert!(!board.is_occupied(x, y), "active overlaps ({x}, {y})");
    }
}

proptest! {
    #[test]
    fn random_play_respects_invariants(
        seed in any::<u32>(),
        steps in prop::collection::vec(step_strategy(), 1..400),
    ) {
        let mut game = GameState::new(seed);
        game.start();

        let mut score = game.score();
        let mut lines = game.lines();
        for step in steps {
            let was_over = game.status() == GameStatus::GameOver;
            let before = game.snapshot();

            match step {
                Step::Command(c) => {
                    game.apply(c);
                }
                Step::Tick => {
                    game.gravity_tick();
                }
                Step::HardDrop => {
                    game.hard_drop();
                }
            }

            assert_active_fits(&game);
            prop_assert!(game.score() >= score);
            prop_assert!(game.lines() >= lines);
            score = game.score();
            lines = game.lines();

            if was_over {
                prop_assert_eq!(game.snapshot(), before);
            } else {
                prop_assert_eq!(game.active().is_some(), game.status().is_running());
            }
        }
    }

    #[test]
    fn four_rotations_restore_catalog_shapes(index in 0usize..PieceKind::COUNT) {
        let m = spawn_matrix(PieceKind::ALL[index]);
        let back = m.rotate_cw().rotate_cw().rotate_cw().rotate_cw();
        prop_assert_eq!(back, m);
    }
}
