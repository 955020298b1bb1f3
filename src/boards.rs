use crate::pieces::*;
use crate::squares::*;
use std::ops;

// ---------------------------------------------
// Occupancy Grid & Piece Registry
// ---------------------------------------------
//
// The grid is the single source of truth for placement. It stores piece
// handles only; the registry owns the piece values. A piece's cached
// `position` must always match the cell holding its handle - the
// maintainer updates both inside the same move step.

pub struct Grid {
    cells: [[Option<PieceId>; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl Grid {
    pub fn empty() -> Grid {
        Grid {
            cells: [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize],
        }
    }

    pub fn get(&self, sq: Square) -> Option<PieceId> {
        self.cells[sq.row() as usize][sq.col() as usize]
    }

    /// Sets the occupant of a square. The only way grid state changes.
    /// Bounds are guaranteed by `Square`; occupancy is not validated here,
    /// the maintainer clears the target first when capturing.
    pub fn place(&mut self, sq: Square, occupant: Option<PieceId>) {
        self.cells[sq.row() as usize][sq.col() as usize] = occupant;
    }
}

impl ops::Index<Square> for Grid {
    type Output = Option<PieceId>;

    fn index(&self, sq: Square) -> &Option<PieceId> {
        &self.cells[sq.row() as usize][sq.col() as usize]
    }
}

/// Owns every piece ever registered and hands out stable `PieceId`s.
/// Captured pieces stay registered (their handle must remain valid), they
/// are just no longer referenced by the grid.
pub struct PieceTable {
    pieces: Vec<Piece>,
}

impl PieceTable {
    pub fn new() -> PieceTable {
        PieceTable { pieces: Vec::new() }
    }

    pub fn register(&mut self, kind: PieceKind, color: Color, position: Square) -> PieceId {
        let id = PieceId::new(self.pieces.len());
        self.pieces.push(Piece::new(id, kind, color, position));
        id
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn ids(&self) -> impl Iterator<Item = PieceId> {
        (0..self.pieces.len()).map(PieceId::new)
    }
}

impl ops::Index<PieceId> for PieceTable {
    type Output = Piece;

    fn index(&self, id: PieceId) -> &Piece {
        &self.pieces[id.index()]
    }
}

impl ops::IndexMut<PieceId> for PieceTable {
    fn index_mut(&mut self, id: PieceId) -> &mut Piece {
        &mut self.pieces[id.index()]
    }
}
