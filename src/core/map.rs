//! Fixed board geometry: camps, headquarters, rails and which lines connect
//! neighbouring squares.

use lazy_static::lazy_static;

use super::{
    loc::{Dir, Loc, BOARD_HEIGHT, BOARD_SIZE, BOARD_WIDTH},
    side::{Side, SideArray},
};

pub const CAMPS: SideArray<[Loc; 5]> = SideArray::new(
    [Loc::new(1, 2), Loc::new(3, 2), Loc::new(2, 3), Loc::new(1, 4), Loc::new(3, 4)],
    [Loc::new(1, 7), Loc::new(3, 7), Loc::new(2, 8), Loc::new(1, 9), Loc::new(3, 9)],
);

pub const HEADQUARTERS: SideArray<[Loc; 2]> = SideArray::new(
    [Loc::new(1, 0), Loc::new(3, 0)],
    [Loc::new(1, 11), Loc::new(3, 11)],
);

/// Squares directly in front of each enemy headquarters, in the same order
/// as `HEADQUARTERS[Side::Enemy]`.
pub const ENEMY_GATES: [Loc; 2] = [Loc::new(1, 10), Loc::new(3, 10)];

/// Rail squares where a sliding engineer may change direction.
pub const INTERSECTIONS: [Loc; 10] = [
    Loc::new(0, 1),
    Loc::new(4, 1),
    Loc::new(0, 5),
    Loc::new(2, 5),
    Loc::new(4, 5),
    Loc::new(0, 6),
    Loc::new(2, 6),
    Loc::new(4, 6),
    Loc::new(0, 10),
    Loc::new(4, 10),
];

pub fn is_camp(loc: Loc) -> bool {
    CAMPS.iter().any(|camps| camps.contains(&loc))
}

pub fn is_camp_of(loc: Loc, side: Side) -> bool {
    CAMPS[side].contains(&loc)
}

pub fn is_headquarters(loc: Loc) -> bool {
    HEADQUARTERS.iter().any(|hq| hq.contains(&loc))
}

pub fn is_headquarters_of(loc: Loc, side: Side) -> bool {
    HEADQUARTERS[side].contains(&loc)
}

pub fn is_intersection(loc: Loc) -> bool {
    INTERSECTIONS.contains(&loc)
}

/// Two horizontal trunks per side (rows 1, 5, 6, 10), the side columns
/// between them and the short central spur joining rows 5 and 6.
pub fn is_on_rail(loc: Loc) -> bool {
    if !loc.in_bounds() {
        return false;
    }
    let Loc { x, y } = loc;
    matches!(y, 1 | 5 | 6 | 10)
        || ((x == 0 || x == BOARD_WIDTH - 1) && y > 0 && y < BOARD_HEIGHT - 1)
        || (x == 2 && (5..=6).contains(&y))
}

/// Whether a line on the board connects `loc` with its neighbour in `dir`.
///
/// Orthogonal lines exist everywhere except across the front at columns 1
/// and 3. Diagonal lines only run into and out of camps.
pub fn is_direction_available(loc: Loc, dir: Dir) -> bool {
    let Some(next) = loc.offset(dir) else {
        return false;
    };

    match dir {
        Dir::Up => !is_front_seam(loc, Side::Enemy),
        Dir::Down => !is_front_seam(loc, Side::Ally),
        Dir::Left | Dir::Right => true,
        _ => is_camp(loc) || is_camp(next),
    }
}

/// The neighbour in `dir` when a line connects the two squares.
pub fn step(loc: Loc, dir: Dir) -> Option<Loc> {
    if is_direction_available(loc, dir) {
        loc.offset(dir)
    } else {
        None
    }
}

/// Front-row squares at columns 1 and 3 have no line across the front.
fn is_front_seam(loc: Loc, side: Side) -> bool {
    let front_row = match side {
        Side::Ally => 5,
        Side::Enemy => 6,
    };
    loc.y == front_row && (loc.x == 1 || loc.x == 3)
}

lazy_static!(
    static ref RAIL_DISTANCE: [i32; BOARD_SIZE] = {
        let rails: Vec<Loc> = Loc::all().filter(|&loc| is_on_rail(loc)).collect();
        let mut table = [0; BOARD_SIZE];
        for loc in Loc::all() {
            table[loc.index()] = rails.iter()
                .map(|rail| loc.dist(rail))
                .min()
                .unwrap_or(0);
        }
        table
    };
);

/// Manhattan distance from `loc` to the closest rail square.
pub fn min_rail_distance(loc: Loc) -> i32 {
    RAIL_DISTANCE[loc.index()]
}
