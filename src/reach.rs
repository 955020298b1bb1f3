use crate::boards::*;
use crate::pieces::*;
use crate::squares::*;
use array_init::array_init;
use lazy_static::lazy_static;

// Reach computation: given the occupancy grid and a square, find the
// squares a piece standing there could travel to and the first occupant
// met in every direction. Rays stop at the first occupant; the occupant
// is never a free square, it is recorded as a blocker. Blockers are NOT
// filtered by color - an own-color neighbor ends a ray exactly like an
// enemy would, and both land in the blocker set.
//
// ---------------------------------------------------------------------
// Sweep geometries
// ---------------------------------------------------------------------
//
// The sweep orders below are observable through the move maps, so they
// are fixed: free squares come out in exactly this direction order.

const DIAGONAL_STEPS: [Step; 4] = [Step(1, -1), Step(-1, 1), Step(-1, -1), Step(1, 1)];
const STRAIGHT_STEPS: [Step; 4] = [Step(0, -1), Step(0, 1), Step(-1, 0), Step(1, 0)];

const KNIGHT_STEPS: [Step; 8] = [
    Step(-2, -1),
    Step(-2, 1),
    Step(-1, -2),
    Step(-1, 2),
    Step(1, -2),
    Step(1, 2),
    Step(2, -1),
    Step(2, 1),
];

const KING_STEPS: [Step; 8] = [
    Step(-1, -1),
    Step(0, -1),
    Step(-1, 0),
    Step(-1, 1),
    Step(0, 1),
    Step(1, -1),
    Step(1, 0),
    Step(1, 1),
];

/// What a sweep from one square found: the free squares, in sweep order,
/// and the first occupant per direction.
#[derive(Debug, Clone, PartialEq)]
pub struct Reach {
    pub free: Vec<Square>,
    pub blockers: Vec<PieceId>,
}

impl Reach {
    fn new() -> Reach {
        Reach {
            free: Vec::new(),
            blockers: Vec::new(),
        }
    }

    fn extend(&mut self, other: Reach) {
        self.free.extend(other.free);
        self.blockers.extend(other.blockers);
    }
}

// ---------------------------------------------------------------------
// Jump target tables
// ---------------------------------------------------------------------

// Knight and king probes use fixed offsets, so the bounds checks can be
// done once per square up front. Table slot i holds the on-board targets
// of square index i, in offset order.
type JumpTargetTable = [Vec<Square>; 64];

fn jump_target_table(steps: &[Step; 8]) -> JumpTargetTable {
    array_init(|i| {
        let from = Square::new(i as u8 / BOARD_SIZE, i as u8 % BOARD_SIZE);
        steps.iter().filter_map(|s| from + *s).collect()
    })
}

lazy_static! {
    static ref KNIGHT_TARGETS: JumpTargetTable = jump_target_table(&KNIGHT_STEPS);
    static ref KING_TARGETS: JumpTargetTable = jump_target_table(&KING_STEPS);
}

// ---------------------------------------------------------------------
// Sweeps
// ---------------------------------------------------------------------

/// Casts a ray per direction, collecting free squares until the board
/// edge or the first occupant, which terminates the ray as a blocker.
fn ray_sweep(grid: &Grid, from: Square, directions: &[Step; 4]) -> Reach {
    let mut reach = Reach::new();
    for dir in directions.iter() {
        let mut k: i16 = 1;
        while let Some(sq) = from + *dir * k {
            match grid.get(sq) {
                None => reach.free.push(sq),
                Some(id) => {
                    reach.blockers.push(id);
                    break;
                }
            }
            k += 1;
        }
    }
    reach
}

/// Probes fixed offsets; no ray continuation, every occupied target is a
/// blocker and every empty one is free.
fn jump_probe(grid: &Grid, targets: &[Square]) -> Reach {
    let mut reach = Reach::new();
    for &sq in targets {
        match grid.get(sq) {
            None => reach.free.push(sq),
            Some(id) => reach.blockers.push(id),
        }
    }
    reach
}

pub fn diagonal_reach(grid: &Grid, from: Square) -> Reach {
    ray_sweep(grid, from, &DIAGONAL_STEPS)
}

pub fn straight_reach(grid: &Grid, from: Square) -> Reach {
    ray_sweep(grid, from, &STRAIGHT_STEPS)
}

pub fn knight_reach(grid: &Grid, from: Square) -> Reach {
    jump_probe(grid, &KNIGHT_TARGETS[from.index()])
}

pub fn king_reach(grid: &Grid, from: Square) -> Reach {
    jump_probe(grid, &KING_TARGETS[from.index()])
}

/// One square forward if empty; a second one if the pawn has not moved
/// yet. The first occupant ahead ends the probe and becomes a blocker.
/// Diagonal pawn captures are not modeled.
pub fn pawn_reach(grid: &Grid, from: Square, color: Color, has_moved: bool) -> Reach {
    let mut reach = Reach::new();
    let forward = color.forward();

    let one = match from + forward {
        Some(sq) => sq,
        // Back rank; promotion is not modeled, the pawn just has nowhere
        // to go.
        None => return reach,
    };

    match grid.get(one) {
        Some(id) => reach.blockers.push(id),
        None => {
            reach.free.push(one);
            if !has_moved {
                if let Some(two) = from + forward * 2 {
                    match grid.get(two) {
                        Some(id) => reach.blockers.push(id),
                        None => reach.free.push(two),
                    }
                }
            }
        }
    }
    reach
}

// ---------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------

/// Full reach of a piece from its current position. The kind set is
/// closed, so the dispatch table is exhaustive and compiler-checked.
pub fn piece_reach(grid: &Grid, piece: &Piece) -> Reach {
    let from = piece.position();
    match piece.kind() {
        PieceKind::Bishop => diagonal_reach(grid, from),
        PieceKind::Rook => straight_reach(grid, from),
        PieceKind::Queen => {
            let mut reach = diagonal_reach(grid, from);
            reach.extend(straight_reach(grid, from));
            reach
        }
        PieceKind::Knight => knight_reach(grid, from),
        PieceKind::King => king_reach(grid, from),
        PieceKind::Pawn => pawn_reach(grid, from, piece.color(), piece.has_moved()),
    }
}

/// Every piece whose travel is currently cut short at `at`: the blockers
/// of the diagonal, straight and knight sweeps from that square. The
/// relation is symmetric, so these are exactly the pieces that would see
/// `at` as the first occupant along one of their lines. King-step and
/// pawn-forward victims are covered too, both being prefixes of the ray
/// sweeps.
pub fn cut_off(grid: &Grid, at: Square) -> Vec<PieceId> {
    let mut blocked = diagonal_reach(grid, at).blockers;
    blocked.extend(straight_reach(grid, at).blockers);
    blocked.extend(knight_reach(grid, at).blockers);
    blocked
}

// ---------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::squares;

    fn put(
        grid: &mut Grid,
        table: &mut PieceTable,
        kind: PieceKind,
        color: Color,
        row: u8,
        col: u8,
    ) -> PieceId {
        let id = table.register(kind, color, Square::new(row, col));
        grid.place(Square::new(row, col), Some(id));
        id
    }

    #[test]
    fn test_diagonal_ray_termination() {
        let mut grid = Grid::empty();
        let mut table = PieceTable::new();
        let blocker = put(&mut grid, &mut table, PieceKind::Pawn, Color::Black, 5, 5);

        let reach = diagonal_reach(&grid, Square::new(3, 3));
        assert_eq!(
            reach.free,
            squares![
                (4, 2),
                (5, 1),
                (6, 0),
                (2, 4),
                (1, 5),
                (0, 6),
                (2, 2),
                (1, 1),
                (0, 0),
                (4, 4)
            ]
        );
        assert_eq!(reach.blockers, vec![blocker]);
        // Nothing beyond the blocker
        assert!(!reach.free.contains(&Square::new(6, 6)));
        assert!(!reach.free.contains(&Square::new(5, 5)));
    }

    #[test]
    fn test_straight_sweep_empty_board() {
        let grid = Grid::empty();
        let reach = straight_reach(&grid, Square::new(0, 0));
        assert_eq!(
            reach.free,
            squares![
                (0, 1),
                (0, 2),
                (0, 3),
                (0, 4),
                (0, 5),
                (0, 6),
                (0, 7),
                (1, 0),
                (2, 0),
                (3, 0),
                (4, 0),
                (5, 0),
                (6, 0),
                (7, 0)
            ]
        );
        assert!(reach.blockers.is_empty());
    }

    #[test]
    fn test_straight_blockers_both_ways() {
        let mut grid = Grid::empty();
        let mut table = PieceTable::new();
        let right = put(&mut grid, &mut table, PieceKind::Pawn, Color::White, 4, 6);
        let below = put(&mut grid, &mut table, PieceKind::Rook, Color::Black, 1, 4);

        let reach = straight_reach(&grid, Square::new(4, 4));
        assert_eq!(
            reach.free,
            squares![
                (4, 3),
                (4, 2),
                (4, 1),
                (4, 0),
                (4, 5),
                (3, 4),
                (2, 4),
                (5, 4),
                (6, 4),
                (7, 4)
            ]
        );
        assert_eq!(reach.blockers, vec![right, below]);
    }

    #[test]
    fn test_knight_corner() {
        let grid = Grid::empty();
        let reach = knight_reach(&grid, Square::new(0, 0));
        assert_eq!(reach.free, squares![(1, 2), (2, 1)]);
        assert!(reach.blockers.is_empty());
    }

    #[test]
    fn test_knight_jumps_over_neighbors() {
        let mut grid = Grid::empty();
        let mut table = PieceTable::new();
        // Crowd the adjacent squares; none of them is a knight target.
        put(&mut grid, &mut table, PieceKind::Pawn, Color::White, 0, 1);
        put(&mut grid, &mut table, PieceKind::Pawn, Color::White, 1, 0);
        put(&mut grid, &mut table, PieceKind::Pawn, Color::White, 1, 1);

        let reach = knight_reach(&grid, Square::new(0, 0));
        assert_eq!(reach.free, squares![(1, 2), (2, 1)]);
        assert!(reach.blockers.is_empty());
    }

    #[test]
    fn test_knight_occupied_target_is_blocker() {
        let mut grid = Grid::empty();
        let mut table = PieceTable::new();
        let target = put(&mut grid, &mut table, PieceKind::Pawn, Color::Black, 1, 2);

        let reach = knight_reach(&grid, Square::new(0, 0));
        assert_eq!(reach.free, squares![(2, 1)]);
        assert_eq!(reach.blockers, vec![target]);
    }

    #[test]
    fn test_king_edge() {
        let grid = Grid::empty();
        let reach = king_reach(&grid, Square::new(0, 4));
        // All eight offsets are probed independently; three are off-board.
        assert_eq!(
            reach.free,
            squares![(0, 3), (0, 5), (1, 3), (1, 4), (1, 5)]
        );
    }

    #[test]
    fn test_king_center() {
        let grid = Grid::empty();
        let reach = king_reach(&grid, Square::new(4, 4));
        assert_eq!(
            reach.free,
            squares![
                (3, 3),
                (4, 3),
                (3, 4),
                (3, 5),
                (4, 5),
                (5, 3),
                (5, 4),
                (5, 5)
            ]
        );
    }

    #[test]
    fn test_pawn_double_step() {
        let grid = Grid::empty();
        let reach = pawn_reach(&grid, Square::new(1, 4), Color::White, false);
        assert_eq!(reach.free, squares![(2, 4), (3, 4)]);
        assert!(reach.blockers.is_empty());
    }

    #[test]
    fn test_pawn_single_step_after_moving() {
        let grid = Grid::empty();
        let reach = pawn_reach(&grid, Square::new(3, 4), Color::White, true);
        assert_eq!(reach.free, squares![(4, 4)]);
    }

    #[test]
    fn test_pawn_second_square_occupied() {
        let mut grid = Grid::empty();
        let mut table = PieceTable::new();
        let ahead = put(&mut grid, &mut table, PieceKind::Knight, Color::Black, 3, 4);

        let reach = pawn_reach(&grid, Square::new(1, 4), Color::White, false);
        assert_eq!(reach.free, squares![(2, 4)]);
        assert_eq!(reach.blockers, vec![ahead]);
    }

    #[test]
    fn test_pawn_first_square_occupied() {
        let mut grid = Grid::empty();
        let mut table = PieceTable::new();
        let ahead = put(&mut grid, &mut table, PieceKind::Knight, Color::Black, 2, 4);

        let reach = pawn_reach(&grid, Square::new(1, 4), Color::White, false);
        assert!(reach.free.is_empty());
        assert_eq!(reach.blockers, vec![ahead]);
    }

    #[test]
    fn test_black_pawn_direction() {
        let grid = Grid::empty();
        let reach = pawn_reach(&grid, Square::new(6, 3), Color::Black, false);
        assert_eq!(reach.free, squares![(5, 3), (4, 3)]);
    }

    #[test]
    fn test_pawn_on_last_rank() {
        let grid = Grid::empty();
        let reach = pawn_reach(&grid, Square::new(7, 0), Color::White, true);
        assert!(reach.free.is_empty());
        assert!(reach.blockers.is_empty());
    }

    #[test]
    fn test_queen_diagonal_then_straight() {
        let grid = Grid::empty();
        let mut table = PieceTable::new();
        let queen = table.register(PieceKind::Queen, Color::White, Square::new(0, 0));

        let reach = piece_reach(&grid, &table[queen]);
        assert_eq!(
            reach.free,
            squares![
                (1, 1),
                (2, 2),
                (3, 3),
                (4, 4),
                (5, 5),
                (6, 6),
                (7, 7),
                (0, 1),
                (0, 2),
                (0, 3),
                (0, 4),
                (0, 5),
                (0, 6),
                (0, 7),
                (1, 0),
                (2, 0),
                (3, 0),
                (4, 0),
                (5, 0),
                (6, 0),
                (7, 0)
            ]
        );
    }

    #[test]
    fn test_cut_off_finds_ray_and_jump_watchers() {
        let mut grid = Grid::empty();
        let mut table = PieceTable::new();
        let rook = put(&mut grid, &mut table, PieceKind::Rook, Color::White, 0, 3);
        let knight = put(&mut grid, &mut table, PieceKind::Knight, Color::Black, 1, 2);

        // A piece standing on (3,3) cuts the rook's file and sits a
        // knight-jump away from the knight.
        let blocked = cut_off(&grid, Square::new(3, 3));
        assert_eq!(blocked, vec![rook, knight]);
    }

    #[test]
    fn test_cut_off_empty_board() {
        let grid = Grid::empty();
        assert!(cut_off(&grid, Square::new(4, 4)).is_empty());
    }
}
