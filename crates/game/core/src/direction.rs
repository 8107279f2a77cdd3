//! Compass directions on the tile grid.
//!
//! Directions are indexed 0..=7 counterclockwise starting at east, so even
//! indices are orthogonal and odd indices are diagonal. Wire formats submit
//! the raw index; [`Direction::try_from`] rejects anything out of range
//! instead of wrapping.

/// One of the eight compass directions an entity can face or move in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    East,
    Northeast,
    North,
    Northwest,
    West,
    Southwest,
    South,
    Southeast,
}

impl Direction {
    /// All directions in index order.
    pub const ALL: [Direction; 8] = [
        Direction::East,
        Direction::Northeast,
        Direction::North,
        Direction::Northwest,
        Direction::West,
        Direction::Southwest,
        Direction::South,
        Direction::Southeast,
    ];

    /// Wire index of this direction.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Row/column offset of a single step in this direction.
    ///
    /// Rows grow southward, columns grow eastward.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::East => (0, 1),
            Direction::Northeast => (-1, 1),
            Direction::North => (-1, 0),
            Direction::Northwest => (-1, -1),
            Direction::West => (0, -1),
            Direction::Southwest => (1, -1),
            Direction::South => (1, 0),
            Direction::Southeast => (1, 1),
        }
    }

    /// True for the four diagonal directions (odd indices).
    pub const fn is_diagonal(self) -> bool {
        self.index() % 2 == 1
    }
}

impl TryFrom<u8> for Direction {
    type Error = DirectionError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(value as usize)
            .copied()
            .ok_or(DirectionError::OutOfRange(value))
    }
}

/// Rejection of a malformed direction index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DirectionError {
    #[error("direction index {0} is out of range (expected 0..=7)")]
    OutOfRange(u8),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_the_full_compass_table() {
        let expected = [
            (0, 1),
            (-1, 1),
            (-1, 0),
            (-1, -1),
            (0, -1),
            (1, -1),
            (1, 0),
            (1, 1),
        ];
        for (index, delta) in expected.into_iter().enumerate() {
            let direction = Direction::try_from(index as u8).unwrap();
            assert_eq!(direction.delta(), delta, "direction {index}");
            assert_eq!(direction.index(), index as u8);
        }
    }

    #[test]
    fn odd_indices_are_diagonal() {
        for direction in Direction::ALL {
            assert_eq!(direction.is_diagonal(), direction.index() % 2 == 1);
        }
    }

    #[test]
    fn rejects_out_of_range_indices() {
        assert_eq!(Direction::try_from(8), Err(DirectionError::OutOfRange(8)));
        assert_eq!(
            Direction::try_from(255),
            Err(DirectionError::OutOfRange(255))
        );
    }
}
