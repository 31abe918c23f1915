//! Game session integration tests - commands, gravity, landing and clearing

use blockfall::core::{
    spawn_at, GameSession, Grid, Outcome, Phase, Piece, SessionEvent, SimpleRng,
};
use blockfall::types::{Color, Command, Pos, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};

const GRAY: Color = Color::hex(0x808080);

fn session(grid: Grid, active: Piece) -> GameSession {
    GameSession::from_parts(grid, active, spawn_at(ShapeKind::O, 4), SimpleRng::new(77))
}

#[test]
fn test_same_seed_same_game() {
    let mut a = GameSession::seeded(2024);
    let mut b = GameSession::seeded(2024);
    for i in 0..300 {
        let command = match i % 5 {
            0 => Command::MoveLeft,
            1 => Command::Rotate,
            2 => Command::MoveRight,
            _ => Command::MoveDown,
        };
        assert_eq!(a.apply(command), b.apply(command));
        a.finish_clear();
        b.finish_clear();
    }
    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn test_gravity_drops_piece_until_it_lands() {
    let mut game = session(Grid::new(), spawn_at(ShapeKind::T, 4));
    let mut ticks = 0;
    loop {
        match game.tick() {
            Outcome::Moved => ticks += 1,
            Outcome::Landed { cleared_rows } => {
                assert!(cleared_rows.is_empty());
                break;
            }
            other => panic!("unexpected {:?}", other),
        }
    }
    // T spawns two rows above the grid and lands with its flat row on the floor.
    assert_eq!(ticks, BOARD_HEIGHT as usize);
    assert!(game.grid().is_occupied(Pos::new(19, 4)));
    assert!(game.grid().is_occupied(Pos::new(18, 5)));
    assert_eq!(game.active().map(|p| p.kind()), Some(ShapeKind::O));
    assert!(matches!(game.take_last_event(), Some(SessionEvent::Landed { .. })));
    assert_eq!(game.take_last_event(), None);
}

#[test]
fn test_side_moves_ignore_walls() {
    let mut game = session(Grid::new(), Piece::new(ShapeKind::O, Pos::new(5, 0)));
    assert!(matches!(game.apply(Command::MoveLeft), Outcome::Rejected(_)));
    assert_eq!(game.active().unwrap().origin(), Pos::new(5, 0));
    assert_eq!(game.apply(Command::MoveRight), Outcome::Moved);
    assert_eq!(game.active().unwrap().origin(), Pos::new(5, 1));
}

#[test]
fn test_full_row_is_staged_then_cleared() {
    let last = BOARD_HEIGHT as i8 - 1;
    let mut grid = Grid::new();
    for col in 0..BOARD_WIDTH as i8 {
        if col != 4 && col != 5 {
            grid.set(Pos::new(last, col), Some(GRAY));
        }
    }
    let mut game = session(grid, Piece::new(ShapeKind::O, Pos::new(last - 1, 4)));

    let outcome = game.apply(Command::MoveDown);
    assert_eq!(
        outcome,
        Outcome::Landed {
            cleared_rows: [last as usize].into_iter().collect()
        }
    );
    assert_eq!(game.phase(), &Phase::Clearing([last as usize].into_iter().collect()));
    assert!(game.active().is_none());
    assert!(game.snapshot().clearing[last as usize]);

    // Nothing moves while the clear is pending.
    for command in [Command::MoveLeft, Command::Rotate, Command::MoveDown] {
        assert_eq!(game.apply(command), Outcome::Ignored);
    }

    game.finish_clear();
    assert_eq!(game.lines(), 1);
    assert_eq!(game.phase(), &Phase::Playing);
    assert_eq!(game.active().map(|p| p.kind()), Some(ShapeKind::O));
    assert!(game.grid().is_occupied(Pos::new(last, 4)));
    assert!(game.grid().is_occupied(Pos::new(last, 5)));
    assert!(!game.snapshot().is_clearing());
}

#[test]
fn test_stack_to_the_top_ends_game() {
    let mut game = GameSession::seeded(3);
    let mut landed = 0;
    for _ in 0..10_000 {
        if game.game_over() {
            break;
        }
        if game.is_clearing() {
            game.finish_clear();
            continue;
        }
        if matches!(game.tick(), Outcome::Landed { .. }) {
            landed += 1;
        }
    }
    assert!(game.game_over());
    assert!(landed > 0);
    assert!(game.active().is_none());
    assert!(game.snapshot().game_over);

    assert_eq!(game.tick(), Outcome::Ignored);
    assert_eq!(game.apply(Command::Restart), Outcome::Restarted);
    assert!(!game.game_over());
    assert_eq!(game.lines(), 0);
    assert_eq!(game.pieces(), 1);
}

#[test]
fn test_pause_blocks_gravity_and_moves() {
    let mut game = GameSession::seeded(11);
    let start = game.snapshot();
    game.apply(Command::TogglePause);
    assert!(game.paused());
    assert_eq!(game.tick(), Outcome::Ignored);
    assert_eq!(game.apply(Command::Rotate), Outcome::Ignored);

    let mut paused = game.snapshot();
    paused.paused = false;
    assert_eq!(paused, start);

    assert_eq!(game.apply(Command::TogglePause), Outcome::PauseToggled { paused: false });
    assert_eq!(game.tick(), Outcome::Moved);
}

#[test]
fn test_new_piece_overlapping_stack_ends_game() {
    // A flat I enters on row 0, which is filled except for its last column.
    let mut grid = Grid::new();
    for col in 0..BOARD_WIDTH as i8 - 1 {
        grid.set(Pos::new(0, col), Some(GRAY));
    }
    let active = Piece::new(ShapeKind::O, Pos::new(17, 0));
    let mut game = GameSession::from_parts(grid, active, spawn_at(ShapeKind::I, 0), SimpleRng::new(1));

    // O lands on the floor, then the I cannot enter.
    assert_eq!(game.tick(), Outcome::Moved);
    assert_eq!(game.tick(), Outcome::GameOver);
    assert!(game.game_over());
    assert_eq!(game.take_last_event(), Some(SessionEvent::GameOver));
}
