use super::SquareSet;

/// Knight jump offsets as (file, rank) deltas.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (-1, 2),
    (2, 1),
    (-2, 1),
    (2, -1),
    (-2, -1),
    (1, -2),
    (-1, -2),
];

/// King step offsets as (file, rank) deltas.
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

/// Rook ray directions: north, south, east, west.
pub const ORTHOGONAL: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Bishop ray directions: north-east, north-west, south-east, south-west.
pub const DIAGONAL: [(i8, i8); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

/// KNIGHT_TARGETS[square] is every square a knight on `square` jumps to, ignoring occupancy
pub static KNIGHT_TARGETS: [SquareSet; 64] = generate_leaper_table(&KNIGHT_OFFSETS);

/// KING_TARGETS[square] is every square adjacent to `square`
pub static KING_TARGETS: [SquareSet; 64] = generate_leaper_table(&KING_OFFSETS);

/// Generate a fixed-offset target table at compile time
const fn generate_leaper_table(offsets: &[(i8, i8); 8]) -> [SquareSet; 64] {
    let mut table = [SquareSet::EMPTY; 64];
    let mut sq = 0;

    while sq < 64 {
        let rank = (sq / 8) as i8;
        let file = (sq % 8) as i8;
        let mut bits = 0u64;

        let mut i = 0;
        while i < 8 {
            let (df, dr) = offsets[i];
            let new_rank = rank + dr;
            let new_file = file + df;

            if new_rank >= 0 && new_rank < 8 && new_file >= 0 && new_file < 8 {
                bits |= 1u64 << (new_rank * 8 + new_file);
            }

            i += 1;
        }

        table[sq] = SquareSet::from_bits(bits);
        sq += 1;
    }

    table
}
