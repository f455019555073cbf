use crate::board::Board;

/// FNV-1a 64-bit over the kind codes, the board's identity for observers
pub fn board_hash(codes: &[u8]) -> u64 {
    let mut h: u64 = 0xcbf29ce484222325;
    for &b in codes {
        h ^= b as u64;
        h = h.wrapping_mul(0x00000100000001B3);
    }
    h
}

/// Plain-data copy of a board
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct BoardSnapshot {
    pub rows: usize,
    pub cols: usize,
    /// Kind code per cell, row-major (0 = empty)
    pub kinds: Vec<u8>,
    /// Tile id per cell, row-major (0 = empty)
    pub ids: Vec<u32>,
    pub board_hash: u64,
}

impl BoardSnapshot {
    pub fn capture(board: &Board) -> Self {
        let mut snap = Self::default();
        snap.capture_into(board);
        snap
    }

    /// Refresh in place, reusing the buffers
    pub fn capture_into(&mut self, board: &Board) {
        self.rows = board.rows();
        self.cols = board.cols();
        self.kinds.clear();
        self.ids.clear();
        for cell in board.cells() {
            self.kinds.push(cell.map(|tile| tile.kind.code()).unwrap_or(0));
            self.ids.push(cell.map(|tile| tile.id).unwrap_or(0));
        }
        self.board_hash = board_hash(&self.kinds);
    }

    /// Kind codes of one row
    pub fn row(&self, row: usize) -> &[u8] {
        let start = (row * self.cols).min(self.kinds.len());
        let end = (start + self.cols).min(self.kinds.len());
        &self.kinds[start..end]
    }
}
