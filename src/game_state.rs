use crate::boards::*;
use crate::errors::*;
use crate::moves::*;
use crate::pieces::*;
use crate::reach::*;
use crate::squares::*;
use log::debug;
use std::collections::{HashMap, HashSet};
use std::fmt::{self, Display};

// -------------------------------------
// BoardState
// -------------------------------------

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The session-scoped tracker. Owns the occupancy grid, the piece
/// registry and the two indexes:
///
/// * blocking map: piece -> pieces whose travel is currently cut short
///   at this piece's square;
/// * move map: piece -> currently reachable squares, in sweep order.
///
/// Both are filled once by a full scan at setup. Afterwards only
/// `process_move` mutates them, recomputing just the pieces whose lines
/// run through the vacated or occupied square instead of rescanning the
/// board.
pub struct BoardState {
    grid: Grid,
    pieces: PieceTable,
    blocking_map: HashMap<PieceId, HashSet<PieceId>>,
    move_map: HashMap<PieceId, Vec<Square>>,
}

// Public interface
impl BoardState {
    /// Returns a tracker with the figures placed on standard chess
    /// starting positions, both indexes fully built.
    pub fn standard_setup() -> BoardState {
        let mut state = BoardState {
            grid: Grid::empty(),
            pieces: PieceTable::new(),
            blocking_map: HashMap::new(),
            move_map: HashMap::new(),
        };

        for col in 0..BOARD_SIZE {
            state.add_piece(PieceKind::Pawn, Color::White, Square::new(1, col));
            state.add_piece(PieceKind::Pawn, Color::Black, Square::new(6, col));
        }
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            state.add_piece(kind, Color::White, Square::new(0, col as u8));
            state.add_piece(kind, Color::Black, Square::new(7, col as u8));
        }

        state.rebuild_maps();
        state
    }

    pub fn get_piece(&self, sq: Square) -> Option<&Piece> {
        self.grid.get(sq).map(|id| &self.pieces[id])
    }

    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.pieces[id]
    }

    /// The cached reach of a piece, in direction-sweep order. Captured
    /// pieces have no entry and report no moves.
    pub fn legal_moves(&self, id: PieceId) -> &[Square] {
        self.move_map.get(&id).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Every move currently offered to one side, in grid scan order.
    pub fn all_moves(&self, color: Color) -> Vec<Move> {
        let mut res = Vec::new();
        for sq in Square::all_squares() {
            if let Some(id) = self.grid.get(sq) {
                if self.pieces[id].color() != color {
                    continue;
                }
                for &dest in self.legal_moves(id) {
                    res.push(Move::new(id, sq, dest));
                }
            }
        }
        res
    }

    /// Validating entry point for interactive play: the piece on `from`
    /// must belong to `color` and `to` must be among its cached moves.
    pub fn player_move(&mut self, color: Color, from: Square, to: Square) -> TrackerResult<Move> {
        let id = self
            .grid
            .get(from)
            .ok_or_else(|| TrackerError::from(format!("No piece on {}", from)))?;
        if self.pieces[id].color() != color {
            return Err(format!("Piece on {} does not belong to {}", from, color).into());
        }
        if !self.legal_moves(id).contains(&to) {
            return Err(format!("Illegal move {}-{}", from, to).into());
        }
        self.process_move(id, to);
        Ok(Move::new(id, from, to))
    }

    /// Applies a move and incrementally repairs both indexes. The caller
    /// is responsible for having checked `dest` against `legal_moves`;
    /// this routine recomputes post-move reach unconditionally and does
    /// not re-validate. Moving onto an occupied square captures the
    /// occupant: its index entries are deleted and never re-enter.
    pub fn process_move(&mut self, id: PieceId, dest: Square) {
        let from = self.pieces[id].position();

        // Whose travel the mover used to cut short, before anything
        // changes.
        let old_blocked = self.blocking_map.get(&id).cloned().unwrap_or_default();

        let victim = self.grid.get(dest);
        if let Some(victim) = victim {
            self.remove_captured(victim);
        }

        // Grid first, cached position in the same step; the two must
        // never be observable out of sync.
        self.grid.place(from, None);
        self.grid.place(dest, Some(id));
        let piece = &mut self.pieces[id];
        piece.update_position(dest);
        piece.mark_moved();

        // Whose travel the mover cuts short from the new square.
        let new_blocked: HashSet<PieceId> = cut_off(&self.grid, dest).into_iter().collect();

        // Every piece that stopped or started being blocked by the
        // mover, plus the mover itself, gets a fresh sweep. Nothing else
        // is touched.
        let mut impacted: HashSet<PieceId> = old_blocked.union(&new_blocked).cloned().collect();
        if let Some(victim) = victim {
            impacted.remove(&victim);
        }
        impacted.insert(id);

        debug!(
            "move {}-{}: recomputing {} of {} pieces",
            from,
            dest,
            impacted.len(),
            self.pieces.len()
        );

        for &p in impacted.iter() {
            self.refresh(p);
        }
    }
}

// Index maintenance
impl BoardState {
    fn add_piece(&mut self, kind: PieceKind, color: Color, sq: Square) -> PieceId {
        let id = self.pieces.register(kind, color, sq);
        self.grid.place(sq, Some(id));
        id
    }

    /// The only full-board scan, run once at setup.
    fn rebuild_maps(&mut self) {
        for sq in Square::all_squares() {
            if let Some(id) = self.grid.get(sq) {
                let reach = piece_reach(&self.grid, &self.pieces[id]);
                self.blocking_map
                    .insert(id, cut_off(&self.grid, sq).into_iter().collect());
                self.pieces[id].set_legal_moves(reach.free.clone());
                self.move_map.insert(id, reach.free);
            }
        }
    }

    /// Recomputes one piece against the current grid, replacing its move
    /// map entry, its cached legal moves and its blocking entry. Entries
    /// are replaced wholesale, never merged.
    fn refresh(&mut self, id: PieceId) {
        let reach = piece_reach(&self.grid, &self.pieces[id]);
        let at = self.pieces[id].position();
        self.blocking_map
            .insert(id, cut_off(&self.grid, at).into_iter().collect());
        self.pieces[id].set_legal_moves(reach.free.clone());
        self.move_map.insert(id, reach.free);
    }

    fn remove_captured(&mut self, victim: PieceId) {
        debug!("captured {} on {}", self.pieces[victim], self.pieces[victim].position());
        self.blocking_map.remove(&victim);
        self.move_map.remove(&victim);
        self.pieces[victim].set_legal_moves(Vec::new());
    }
}

impl Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " ")?;
        for c in 'a'..'i' {
            write!(f, " {}", c)?;
        }
        for row in (0..BOARD_SIZE).rev() {
            write!(f, "\n{} ", row + 1)?;
            for col in 0..BOARD_SIZE {
                match self.get_piece(Square::new(row, col)) {
                    Some(p) => write!(f, "{} ", p)?,
                    None => write!(f, ". ")?,
                }
            }
            write!(f, "{}", row + 1)?;
        }
        write!(f, "\n ")?;
        for c in 'a'..'i' {
            write!(f, " {}", c)?;
        }
        Ok(())
    }
}
