//! Deterministic room-grid floor generator.
//!
//! Floors are laid out on a coarse grid of cells, one room per cell, with
//! L-shaped corridors stitching neighboring rooms together. Generation is a
//! pure function of `(dungeon, floor_number, config)`: the RNG is seeded from
//! those inputs, so re-running advancement always rebuilds the same floor.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crawl_core::{
    ConcludedCrawl, CrawlEntity, CrawlState, CrawlSummary, Dungeon, DungeonTile, Floor,
    FloorGenerator, FloorMap, GenerateError, InProgressCrawl, Location, LogEvent, RoomId,
    compute_seed, update_entity_map,
};

/// Layout parameters for [`GridFloorGenerator`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Room cells per row.
    pub rooms_wide: u32,
    /// Room cells per column.
    pub rooms_tall: u32,
    /// Edge length of one cell in tiles; rooms are carved inside it.
    pub cell_size: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            rooms_wide: 3,
            rooms_tall: 2,
            cell_size: 8,
        }
    }
}

impl GeneratorConfig {
    const MIN_ROOM_EDGE: u32 = 3;

    fn map_width(&self) -> u32 {
        self.rooms_wide * self.cell_size + 1
    }

    fn map_height(&self) -> u32 {
        self.rooms_tall * self.cell_size + 1
    }
}

/// One carved room: its cell, rectangle, and id.
#[derive(Clone, Copy, Debug)]
struct Room {
    id: RoomId,
    top: i32,
    left: i32,
    height: i32,
    width: i32,
}

impl Room {
    fn center(&self) -> Location {
        Location::new(self.top + self.height / 2, self.left + self.width / 2)
    }

    fn tiles(&self) -> impl Iterator<Item = Location> + '_ {
        let (top, left, height, width) = (self.top, self.left, self.height, self.width);
        (top..top + height)
            .flat_map(move |row| (left..left + width).map(move |col| Location::new(row, col)))
    }
}

/// The default floor generator.
#[derive(Clone, Copy, Debug, Default)]
pub struct GridFloorGenerator {
    pub config: GeneratorConfig,
}

impl GridFloorGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Stable seed for one floor of one dungeon.
    fn floor_seed(dungeon: &Dungeon, floor_number: u32) -> u64 {
        // FNV-1a over the dungeon name keeps the seed independent of hasher
        // internals, then the floor number is mixed in.
        let mut hash: u64 = 0xcbf29ce484222325;
        for byte in dungeon.name.bytes() {
            hash ^= byte as u64;
            hash = hash.wrapping_mul(0x100000001b3);
        }
        compute_seed(hash, floor_number as u64, dungeon.floors, 0)
    }

    fn carve_rooms(&self, rng: &mut StdRng, map: &mut FloorMap) -> Vec<Room> {
        let config = &self.config;
        let mut rooms = Vec::new();
        for cell_row in 0..config.rooms_tall {
            for cell_col in 0..config.rooms_wide {
                let id = RoomId((cell_row * config.rooms_wide + cell_col + 1) as u16);
                let span = config.cell_size - 2;
                let height = rng.gen_range(GeneratorConfig::MIN_ROOM_EDGE..=span);
                let width = rng.gen_range(GeneratorConfig::MIN_ROOM_EDGE..=span);
                let row_slack = span - height;
                let col_slack = span - width;
                let top = cell_row * config.cell_size + 1 + rng.gen_range(0..=row_slack);
                let left = cell_col * config.cell_size + 1 + rng.gen_range(0..=col_slack);

                let room = Room {
                    id,
                    top: top as i32,
                    left: left as i32,
                    height: height as i32,
                    width: width as i32,
                };
                for tile in room.tiles() {
                    map.set(tile, DungeonTile::floor(id));
                }
                rooms.push(room);
            }
        }
        rooms
    }

    /// Connects each room to its right and bottom neighbors with an L-shaped
    /// corridor. Corridors only carve through walls; room tiles keep their id.
    fn carve_corridors(&self, map: &mut FloorMap, rooms: &[Room]) {
        let wide = self.config.rooms_wide as usize;
        for (index, room) in rooms.iter().enumerate() {
            let right = (index % wide + 1 < wide).then(|| &rooms[index + 1]);
            let below = (index + wide < rooms.len()).then(|| &rooms[index + wide]);
            for neighbor in [right, below].into_iter().flatten() {
                carve_l_corridor(map, room.center(), neighbor.center());
            }
        }
    }
}

fn carve_l_corridor(map: &mut FloorMap, from: Location, to: Location) {
    let mut cursor = from;
    while cursor.col != to.col {
        cursor.col += (to.col - cursor.col).signum();
        carve_corridor_tile(map, cursor);
    }
    while cursor.row != to.row {
        cursor.row += (to.row - cursor.row).signum();
        carve_corridor_tile(map, cursor);
    }
}

fn carve_corridor_tile(map: &mut FloorMap, location: Location) {
    if map.tile_or_unknown(location).is_wall() {
        map.set(location, DungeonTile::floor(RoomId::CORRIDOR));
    }
}

impl FloorGenerator for GridFloorGenerator {
    fn advance_to_floor(
        &self,
        dungeon: &Dungeon,
        floor_number: u32,
        advancers: Vec<CrawlEntity>,
    ) -> Result<CrawlState, GenerateError> {
        if floor_number > dungeon.floors {
            tracing::info!(
                dungeon = %dungeon.name,
                floors = dungeon.floors,
                "dungeon cleared"
            );
            return Ok(CrawlState::Concluded(ConcludedCrawl {
                success: true,
                summary: CrawlSummary {
                    dungeon: dungeon.name.clone(),
                    floors_cleared: dungeon.floors,
                },
            }));
        }

        let config = &self.config;
        if config.rooms_wide == 0
            || config.rooms_tall == 0
            || config.cell_size < GeneratorConfig::MIN_ROOM_EDGE + 2
        {
            return Err(GenerateError::Failed(format!(
                "unusable layout config: {config:?}"
            )));
        }

        let seed = Self::floor_seed(dungeon, floor_number);
        let mut rng = StdRng::seed_from_u64(seed);
        let mut map = FloorMap::filled(
            self.config.map_width(),
            self.config.map_height(),
            DungeonTile::wall(),
        );

        let rooms = self.carve_rooms(&mut rng, &mut map);
        self.carve_corridors(&mut map, &rooms);

        // Stairs land somewhere in a room other than the entry room when the
        // layout allows it.
        let stairs_room = if rooms.len() > 1 {
            &rooms[rng.gen_range(1..rooms.len())]
        } else {
            &rooms[0]
        };
        let stairs = Location::new(
            stairs_room.top + rng.gen_range(0..stairs_room.height),
            stairs_room.left + rng.gen_range(0..stairs_room.width),
        );
        let mut stairs_tile = map.tile_or_unknown(stairs);
        stairs_tile.stairs = true;
        map.set(stairs, stairs_tile);

        // Entry room must be able to seat everyone.
        let entry = &rooms[0];
        let spawn_tiles: Vec<Location> = entry.tiles().collect();
        if spawn_tiles.len() < advancers.len() {
            return Err(GenerateError::Failed(format!(
                "entry room of floor {floor_number} seats {} but {} entities advanced",
                spawn_tiles.len(),
                advancers.len()
            )));
        }

        let mut entities = advancers;
        for (entity, spawn) in entities.iter_mut().zip(spawn_tiles) {
            entity.location = spawn;
            entity.map = FloorMap::unknown(map.width(), map.height());
        }

        tracing::debug!(
            dungeon = %dungeon.name,
            floor = floor_number,
            rooms = rooms.len(),
            entities = entities.len(),
            "generated floor"
        );

        let mut crawl = InProgressCrawl {
            dungeon: dungeon.clone(),
            floor: Floor::new(floor_number, map),
            entities,
            seed,
            nonce: 0,
        };

        // Everyone starts with their surroundings revealed and a start event
        // describing where they came in.
        for index in 0..crawl.entities.len() {
            let (floor, entity) = (&crawl.floor, &mut crawl.entities[index]);
            update_entity_map(&floor.map, entity)
                .map_err(|error| GenerateError::Failed(error.to_string()))?;
            let event = LogEvent::Start {
                floor_number,
                width: floor.map.width(),
                height: floor.map.height(),
                location: entity.location,
            };
            entity.push_event(event);
        }

        Ok(CrawlState::InProgress(crawl))
    }
}
