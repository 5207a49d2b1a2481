/// Side length of the square board.
pub(crate) const N: usize = 4;

/// A single cell value; 0 is an empty cell.
pub(crate) type Tile = u32;

pub(crate) type Score = u32;

pub(crate) type Row = [Tile; N];

/// Points and largest tile produced by the merges of a single row.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Merged {
    pub(crate) points: Score,
    pub(crate) largest: Tile,
}

/// Grid is the N×N array of tile values. It is `Copy`, so every snapshot of it is an independent
/// deep copy of the values.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub(crate) struct Grid {
    slots: [[Tile; N]; N],
}

impl From<[[Tile; N]; N]> for Grid {
    fn from(slots: [[Tile; N]; N]) -> Self {
        Self { slots }
    }
}

impl Grid {
    pub(crate) fn tiles(&self) -> &[[Tile; N]; N] {
        &self.slots
    }

    #[cfg(test)]
    pub(crate) fn get(&self, x: usize, y: usize) -> Tile {
        self.slots[y][x]
    }

    pub(crate) fn set(&mut self, x: usize, y: usize, value: Tile) {
        self.slots[y][x] = value;
    }

    pub(crate) fn rows_mut(&mut self) -> impl Iterator<Item = &mut Row> {
        self.slots.iter_mut()
    }

    /// Rotate the whole grid one quarter turn clockwise.
    pub(crate) fn rotate_cw(&mut self) {
        let prev = self.slots;
        for (y, row) in self.slots.iter_mut().enumerate() {
            for (x, slot) in row.iter_mut().enumerate() {
                *slot = prev[N - 1 - x][y];
            }
        }
    }

    pub(crate) fn rotate_cw_times(&mut self, times: usize) {
        for _ in 0..times % 4 {
            self.rotate_cw();
        }
    }

    /// Coordinates `(x, y)` of every empty cell in row-major order.
    pub(crate) fn empty_cells(&self) -> Vec<(usize, usize)> {
        self.slots
            .iter()
            .enumerate()
            .flat_map(|(y, row)| {
                row.iter()
                    .enumerate()
                    .filter(|(_, value)| **value == 0)
                    .map(move |(x, _)| (x, y))
            })
            .collect()
    }

    pub(crate) fn tile_sum(&self) -> u64 {
        self.slots.iter().flatten().map(|v| u64::from(*v)).sum()
    }

    #[cfg(test)]
    pub(crate) fn occupied(&self) -> usize {
        self.slots.iter().flatten().filter(|v| **v != 0).count()
    }

    /// Whether some adjacent pair can either merge (equal and non-zero) or slide (exactly one of
    /// the two is empty).
    pub(crate) fn can_move(&self) -> bool {
        let movable = |a: Tile, b: Tile| (a != 0 && a == b) || ((a == 0) != (b == 0));
        for y in 0..N {
            for x in 0..N {
                let value = self.slots[y][x];
                if x + 1 < N && movable(value, self.slots[y][x + 1]) {
                    return true;
                }
                if y + 1 < N && movable(value, self.slots[y + 1][x]) {
                    return true;
                }
            }
        }
        false
    }
}

/// Slide every non-empty tile of the row to the left, preserving order, by repeatedly swapping
/// an empty cell with the non-empty cell that follows it. Returns true if anything moved.
pub(crate) fn consolidate(row: &mut Row) -> bool {
    let mut moved = false;
    for i in 0..N {
        for j in 0..N - i - 1 {
            if row[j] == 0 && row[j + 1] != 0 {
                row.swap(j, j + 1);
                moved = true;
            }
        }
    }
    moved
}

/// Merge equal neighbours of an already consolidated row from left to right. The merged tile
/// doubles and everything to its right shifts one slot left, so the scan never sees the new tile
/// against its former neighbour. Returns `None` if nothing merged.
pub(crate) fn merge(row: &mut Row) -> Option<Merged> {
    let mut merged: Option<Merged> = None;
    for i in 0..N - 1 {
        if row[i] == 0 || row[i] != row[i + 1] {
            continue;
        }
        let value = row[i] * 2;
        row[i] = value;
        row.copy_within(i + 2.., i + 1);
        row[N - 1] = 0;

        let m = merged.get_or_insert_with(Merged::default);
        m.points += value;
        m.largest = m.largest.max(value);
    }
    merged
}
