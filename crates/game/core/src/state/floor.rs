//! Floor geometry: locations, tiles, and the per-floor grid.

use crate::direction::Direction;

/// Discrete grid location expressed as row/column tile coordinates.
///
/// Rows grow southward, columns grow eastward. Locations may sit outside the
/// current floor; bounds are checked wherever it matters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub row: i32,
    pub col: i32,
}

impl Location {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Chebyshev distance: diagonal steps count the same as orthogonal ones.
    pub fn distance(self, other: Location) -> u32 {
        let dr = self.row.abs_diff(other.row);
        let dc = self.col.abs_diff(other.col);
        dr.max(dc)
    }

    /// The location one step away in `direction`.
    pub fn step(self, direction: Direction) -> Location {
        let (dr, dc) = direction.delta();
        Location::new(self.row + dr, self.col + dc)
    }
}

/// Room membership tag baked into each tile at generation time.
///
/// Zero marks corridor tiles; positive values identify rooms. Stable for the
/// lifetime of a floor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoomId(pub u16);

impl RoomId {
    pub const CORRIDOR: Self = Self(0);

    pub const fn is_room(self) -> bool {
        self.0 != 0
    }

    pub const fn is_corridor(self) -> bool {
        self.0 == 0
    }
}

/// Base terrain class of a tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TileKind {
    Floor,
    Wall,
    /// Not yet revealed (fog maps) or outside the grid entirely.
    Unknown,
}

/// One cell of a floor grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DungeonTile {
    pub kind: TileKind,
    pub room: RoomId,
    pub stairs: bool,
}

impl DungeonTile {
    /// The tile reported for any location outside the grid, and the initial
    /// content of fog maps.
    pub const UNKNOWN: Self = Self {
        kind: TileKind::Unknown,
        room: RoomId::CORRIDOR,
        stairs: false,
    };

    pub const fn floor(room: RoomId) -> Self {
        Self {
            kind: TileKind::Floor,
            room,
            stairs: false,
        }
    }

    pub const fn wall() -> Self {
        Self {
            kind: TileKind::Wall,
            room: RoomId::CORRIDOR,
            stairs: false,
        }
    }

    pub const fn is_wall(self) -> bool {
        matches!(self.kind, TileKind::Wall)
    }
}

/// Row-major tile grid with fixed dimensions.
///
/// Used both for the authoritative floor layout and for each entity's private
/// fog-of-war copy; the two are required to share dimensions.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FloorMap {
    width: u32,
    height: u32,
    tiles: Vec<DungeonTile>,
}

impl FloorMap {
    /// Creates a grid with every cell set to `tile`.
    pub fn filled(width: u32, height: u32, tile: DungeonTile) -> Self {
        Self {
            width,
            height,
            tiles: vec![tile; (width as usize) * (height as usize)],
        }
    }

    /// Creates a fully fogged grid, the starting point for an entity map.
    pub fn unknown(width: u32, height: u32) -> Self {
        Self::filled(width, height, DungeonTile::UNKNOWN)
    }

    /// Builds a grid from pre-laid-out row-major tiles.
    pub fn from_tiles(
        width: u32,
        height: u32,
        tiles: Vec<DungeonTile>,
    ) -> Result<Self, MapError> {
        let expected = (width as usize) * (height as usize);
        if tiles.len() != expected {
            return Err(MapError::TileCountMismatch {
                width,
                height,
                actual: tiles.len(),
            });
        }
        Ok(Self {
            width,
            height,
            tiles,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn contains(&self, location: Location) -> bool {
        location.row >= 0
            && location.col >= 0
            && location.row < self.height as i32
            && location.col < self.width as i32
    }

    pub fn same_dimensions(&self, other: &FloorMap) -> bool {
        self.width == other.width && self.height == other.height
    }

    fn index(&self, location: Location) -> Option<usize> {
        if self.contains(location) {
            Some(location.row as usize * self.width as usize + location.col as usize)
        } else {
            None
        }
    }

    pub fn tile(&self, location: Location) -> Option<&DungeonTile> {
        self.index(location).map(|i| &self.tiles[i])
    }

    /// Tile lookup that resolves out-of-bounds reads to [`DungeonTile::UNKNOWN`].
    pub fn tile_or_unknown(&self, location: Location) -> DungeonTile {
        self.tile(location).copied().unwrap_or(DungeonTile::UNKNOWN)
    }

    /// Writes a tile, returning false if the location is outside the grid.
    pub fn set(&mut self, location: Location, tile: DungeonTile) -> bool {
        match self.index(location) {
            Some(i) => {
                self.tiles[i] = tile;
                true
            }
            None => false,
        }
    }

    /// True if the tile at `location` belongs to a room (not corridor, not wall).
    pub fn in_room(&self, location: Location) -> bool {
        let tile = self.tile_or_unknown(location);
        matches!(tile.kind, TileKind::Floor) && tile.room.is_room()
    }

    /// True if both locations are inside the same room.
    pub fn same_room(&self, a: Location, b: Location) -> bool {
        self.in_room(a) && self.in_room(b) && self.tile_or_unknown(a).room == self.tile_or_unknown(b).room
    }
}

/// One floor of a crawl: 1-indexed depth plus the authoritative grid.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Floor {
    pub number: u32,
    pub map: FloorMap,
}

impl Floor {
    pub fn new(number: u32, map: FloorMap) -> Self {
        Self { number, map }
    }
}

/// Grid construction failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MapError {
    #[error("expected {width}x{height} tiles, got {actual}")]
    TileCountMismatch {
        width: u32,
        height: u32,
        actual: usize,
    },
}
