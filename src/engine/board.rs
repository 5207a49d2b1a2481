use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::IteratorRandom;
use rand::{Rng, RngCore};

use super::grid::{self, Grid, Score, Tile, N};
use super::history::{History, Snapshot};
use super::Direction;

const NEW_TILE_CHOICES: [Tile; 2] = [2, 4];
const NEW_TILE_WEIGHTS: [u8; 2] = [9, 1];

/// Board represents a 2048 board: the grid of tiles, the score, the largest tile produced so far
/// and the history of snapshots used to undo moves.
pub(crate) struct Board {
    rng: Box<dyn RngCore>,
    grid: Grid,
    score: Score,
    max_tile: Tile,
    history: History,
    save_needed: bool,
    new_tile_weighted_index: WeightedIndex<u8>,
}

impl Board {
    /// Initialize new board using the given random number generator.
    pub(crate) fn new(rng: impl RngCore + 'static) -> Self {
        let mut board = Self {
            rng: Box::new(rng),
            grid: Grid::default(),
            score: 0,
            max_tile: 0,
            history: History::default(),
            save_needed: true,
            new_tile_weighted_index: WeightedIndex::new(NEW_TILE_WEIGHTS)
                .expect("NEW_TILE_WEIGHTS should never be empty"),
        };
        board.reset();
        board
    }

    pub(crate) fn tiles(&self) -> &[[Tile; N]; N] {
        self.grid.tiles()
    }

    pub(crate) fn score(&self) -> Score {
        self.score
    }

    pub(crate) fn max_tile(&self) -> Tile {
        self.max_tile
    }

    pub(crate) fn dimensions(&self) -> (usize, usize) {
        (N, N)
    }

    pub(crate) fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Start a new game: empty grid with two fresh tiles, zeroed counters and no history.
    pub(crate) fn reset(&mut self) {
        self.grid = Grid::default();
        self.spawn_tile();
        self.spawn_tile();
        self.score = 0;
        self.max_tile = 0;
        self.history.clear();
        self.save_needed = true;
        log::info!("new game started");
    }

    /// Place a 2 (or, one time in ten, a 4) on a random empty cell. Does nothing on a full
    /// board.
    pub(crate) fn spawn_tile(&mut self) {
        let Some((x, y)) = self.grid.empty_cells().into_iter().choose(&mut *self.rng) else {
            log::trace!("no empty cell to spawn a tile in");
            return;
        };
        let value = NEW_TILE_CHOICES[self.new_tile_weighted_index.sample(&mut *self.rng)];
        self.grid.set(x, y, value);
        log::trace!("spawned {} at ({}, {})", value, x, y);
    }

    pub(crate) fn shift(&mut self, direction: Direction) {
        match direction {
            Direction::Left => self.move_left(),
            Direction::Right => self.move_right(),
            Direction::Up => self.move_up(),
            Direction::Down => self.move_down(),
        }
    }

    pub(crate) fn move_left(&mut self) {
        self.slide_left();
    }

    pub(crate) fn move_right(&mut self) {
        self.rotated_move(Direction::Right);
    }

    pub(crate) fn move_up(&mut self) {
        self.rotated_move(Direction::Up);
    }

    pub(crate) fn move_down(&mut self) {
        self.rotated_move(Direction::Down);
    }

    /// Commit a uniformly random move and return its direction.
    pub(crate) fn random_move(&mut self) -> Direction {
        let direction = Direction::ALL[self.rng.gen_range(0..Direction::ALL.len())];
        self.shift(direction);
        direction
    }

    /// Restore the state saved before the most recent move. Does nothing if there is no history.
    pub(crate) fn rollback(&mut self) {
        if let Some(snapshot) = self.history.pop() {
            self.grid = snapshot.grid;
            self.score = snapshot.score;
            self.max_tile = snapshot.max_tile;
            log::trace!("rolled back to score {}", self.score);
        }
    }

    /// Whether the sum of tile values differs from the one recorded in the newest snapshot.
    pub(crate) fn has_board_changed(&self) -> bool {
        self.history
            .peek()
            .map_or(false, |s| s.grid.tile_sum() != self.grid.tile_sum())
    }

    pub(crate) fn can_move(&self) -> bool {
        self.grid.can_move()
    }

    pub(crate) fn empty_tiles(&self) -> usize {
        self.grid.empty_cells().len()
    }
}

// private methods
impl Board {
    fn save_state(&mut self) {
        self.history.push(Snapshot {
            grid: self.grid,
            score: self.score,
            max_tile: self.max_tile,
        });
        self.save_needed = false;
    }

    // The outer rotation saves first so the inner slide_left doesn't push a second snapshot.
    fn rotated_move(&mut self, direction: Direction) {
        let (before, after) = direction.rotations();
        self.save_state();
        self.grid.rotate_cw_times(before);
        self.slide_left();
        self.grid.rotate_cw_times(after);
    }

    fn slide_left(&mut self) {
        if self.save_needed {
            self.save_state();
        }
        let mut changed = false;
        let mut gained = grid::Merged::default();
        for row in self.grid.rows_mut() {
            let moved = grid::consolidate(row);
            let merged = grid::merge(row);
            if let Some(m) = merged {
                gained.points += m.points;
                gained.largest = gained.largest.max(m.largest);
            }
            changed |= moved || merged.is_some();
        }
        self.score += gained.points;
        self.max_tile = self.max_tile.max(gained.largest);
        if changed {
            self.spawn_tile();
        }
        self.save_needed = true;
    }

    #[cfg(test)]
    pub(crate) fn set_state(&mut self, slots: [[Tile; N]; N], score: Score) {
        self.grid = Grid::from(slots);
        self.score = score;
        self.max_tile = slots.iter().flatten().copied().max().unwrap_or(0);
        self.history.clear();
        self.save_needed = true;
    }
}
