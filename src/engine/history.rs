use super::grid::{Grid, Score, Tile};

/// An owned copy of everything a move can change.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Snapshot {
    pub(crate) grid: Grid,
    pub(crate) score: Score,
    pub(crate) max_tile: Tile,
}

/// History is the LIFO stack of snapshots taken before each move. Entries accumulate until they
/// are popped by a rollback.
#[derive(Debug, Default)]
pub(crate) struct History {
    snapshots: Vec<Snapshot>,
}

impl History {
    pub(crate) fn push(&mut self, snapshot: Snapshot) {
        self.snapshots.push(snapshot);
    }

    pub(crate) fn pop(&mut self) -> Option<Snapshot> {
        self.snapshots.pop()
    }

    pub(crate) fn peek(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }

    pub(crate) fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub(crate) fn clear(&mut self) {
        self.snapshots.clear();
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn snapshot(first: Tile, score: Score) -> Snapshot {
        let mut grid = Grid::default();
        grid.set(0, 0, first);
        Snapshot {
            grid,
            score,
            max_tile: first,
        }
    }

    #[test]
    fn pops_newest_first() {
        let mut history = History::default();
        history.push(snapshot(2, 0));
        history.push(snapshot(4, 4));
        assert_eq!(history.len(), 2);
        assert_eq!(history.peek(), Some(&snapshot(4, 4)));
        assert_eq!(history.pop(), Some(snapshot(4, 4)));
        assert_eq!(history.pop(), Some(snapshot(2, 0)));
        assert_eq!(history.pop(), None);
        assert_eq!(history.len(), 0);
    }

    #[test]
    fn snapshot_is_independent_of_live_grid() {
        let mut history = History::default();
        let mut live = Grid::default();
        live.set(1, 1, 8);
        history.push(Snapshot {
            grid: live,
            score: 0,
            max_tile: 0,
        });
        live.set(1, 1, 16);
        live.rotate_cw();
        let stored = history.peek().map(|s| s.grid.get(1, 1));
        assert_eq!(stored, Some(8));
    }

    #[test]
    fn clear_empties_the_stack() {
        let mut history = History::default();
        history.push(snapshot(2, 0));
        history.clear();
        assert_eq!(history.peek(), None);
    }
}
