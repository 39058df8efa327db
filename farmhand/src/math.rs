/// Grid cell of the unbounded farm map.
pub type Tile = [i32; 2];

/// Continuous pixel coordinates.
pub type Position = [f32; 2];

pub trait TileMath {
    fn manhattan(self, other: Self) -> i32;
    fn position(self, cell_size: f32) -> Position;
    fn diamond(self, radius: i32) -> Vec<Tile>;
}

impl TileMath for Tile {
    #[inline]
    fn manhattan(self, other: Self) -> i32 {
        (self[0] - other[0]).abs() + (self[1] - other[1]).abs()
    }

    #[inline]
    fn position(self, cell_size: f32) -> Position {
        [self[0] as f32 * cell_size, self[1] as f32 * cell_size]
    }

    /// All tiles within Manhattan `radius`, the center included.
    fn diamond(self, radius: i32) -> Vec<Tile> {
        let mut tiles = vec![];
        for dx in -radius..=radius {
            let span = radius - dx.abs();
            for dy in -span..=span {
                tiles.push([self[0] + dx, self[1] + dy]);
            }
        }
        tiles
    }
}

pub trait VectorMath {
    fn to_tile(self, cell_size: f32) -> Tile;
    fn step_towards(self, target: Self, speed: f32) -> (Self, bool)
    where
        Self: Sized;
}

impl VectorMath for Position {
    #[inline]
    fn to_tile(self, cell_size: f32) -> Tile {
        [
            (self[0] / cell_size).floor() as i32,
            (self[1] / cell_size).floor() as i32,
        ]
    }

    /// Moves each axis independently by `speed`, snaps onto `target` once both
    /// axes are within one step. Returns new position and arrival flag.
    fn step_towards(self, target: Self, speed: f32) -> (Self, bool) {
        let [x, y] = self;
        let distance_x = (x - target[0]).abs();
        let distance_y = (y - target[1]).abs();
        if distance_x <= speed && distance_y <= speed {
            return (target, true);
        }
        let mut next = self;
        if distance_x > speed {
            next[0] += if x < target[0] { speed } else { -speed };
        }
        if distance_y > speed {
            next[1] += if y < target[1] { speed } else { -speed };
        }
        (next, false)
    }
}
