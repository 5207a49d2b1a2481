use clap::ValueEnum;

use crate::engine::board::Board;
use crate::engine::grid::{Score, Tile};

/// How the headless player picks its moves.
#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub(crate) enum Strategy {
    /// One-ply look-ahead that prefers open space, then score.
    #[default]
    Greedy,
    /// Uniformly random directions.
    Random,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Summary {
    pub(crate) moves: usize,
    pub(crate) score: Score,
    pub(crate) max_tile: Tile,
    pub(crate) game_over: bool,
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} after {} moves: score {}, best tile {}",
            if self.game_over { "game over" } else { "stopped" },
            self.moves,
            self.score,
            self.max_tile
        )
    }
}

/// Play until no move is possible or `max_moves` moves have been made.
pub(crate) fn run(board: &mut Board, strategy: Strategy, max_moves: Option<usize>) -> Summary {
    let mut moves = 0;
    while board.can_move() && max_moves.map_or(true, |max| moves < max) {
        let direction = match strategy {
            Strategy::Greedy => board.auto_move(),
            Strategy::Random => board.random_move(),
        };
        moves += 1;
        log::debug!("move {}: {}, score {}", moves, direction, board.score());
    }
    let summary = Summary {
        moves,
        score: board.score(),
        max_tile: board.max_tile(),
        game_over: !board.can_move(),
    };
    log::info!("{}", summary);
    summary
}

#[cfg(test)]
mod test {
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use rstest::*;

    use super::*;
    use crate::engine::board::test::{board, init_logger};

    #[rstest]
    #[case::greedy(Strategy::Greedy)]
    #[case::random(Strategy::Random)]
    fn plays_until_game_over(#[case] strategy: Strategy) {
        init_logger();
        let mut b = Board::new(SmallRng::seed_from_u64(3));
        let summary = run(&mut b, strategy, None);
        assert!(summary.game_over);
        assert!(!b.can_move());
        assert!(summary.moves > 0);
        assert_eq!(summary.score, b.score());
        assert!(b
            .tiles()
            .iter()
            .flatten()
            .all(|v| *v == 0 || (*v >= 2 && v.is_power_of_two())));
    }

    #[test]
    fn greedy_outscores_a_handful_of_moves() {
        init_logger();
        let mut b = Board::new(SmallRng::seed_from_u64(11));
        let summary = run(&mut b, Strategy::Greedy, None);
        assert!(summary.max_tile >= 64, "{}", summary);
    }

    #[test]
    fn stops_at_move_limit() {
        init_logger();
        let mut b = Board::new(SmallRng::seed_from_u64(5));
        let summary = run(&mut b, Strategy::Greedy, Some(3));
        assert_eq!(summary.moves, 3);
        assert!(!summary.game_over);
        assert_eq!(b.history_len(), 3);
        assert!(format!("{}", summary).starts_with("stopped after 3 moves"));
    }

    #[test]
    fn dead_board_makes_no_moves() {
        let mut b = board([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]], 20);
        let summary = run(&mut b, Strategy::Greedy, None);
        assert_eq!(
            summary,
            Summary {
                moves: 0,
                score: 20,
                max_tile: 4,
                game_over: true,
            }
        );
    }
}
