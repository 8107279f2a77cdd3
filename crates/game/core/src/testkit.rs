//! Shared fixtures for unit tests: ASCII maps, entity builders, and stub
//! collaborators.

use std::cell::RefCell;
use std::rc::Rc;

use crate::combat::Attack;
use crate::env::{FloorGenerator, GenerateError, RngOracle};
use crate::event::{Controller, LogEvent};
use crate::item::{EquipEffect, Item, ItemBlueprint};
use crate::state::{
    Alignment, BoostedStat, ConcludedCrawl, CrawlEntity, CrawlState, CrawlSummary, Dungeon,
    DungeonTile, EntityId, EntityStats, Floor, FloorMap, InProgressCrawl, Location, ResourceMeter,
    RoomId, StatKind, TileKind,
};

pub(crate) type EventLog = Rc<RefCell<Vec<LogEvent>>>;

/// Controller that appends everything to a shared buffer.
pub(crate) struct RecordingController(pub EventLog);

impl Controller for RecordingController {
    fn push_event(&mut self, event: LogEvent) {
        self.0.borrow_mut().push(event);
    }
}

/// Builds a floor grid from ASCII rows: `#` wall, `.` corridor, `>` corridor
/// stairs, digits room tiles with that room id.
pub(crate) fn map_from_rows(rows: &[&str]) -> FloorMap {
    let height = rows.len() as u32;
    let width = rows[0].len() as u32;
    let mut tiles = Vec::with_capacity((width * height) as usize);
    for row in rows {
        assert_eq!(row.len() as u32, width, "ragged test map");
        for ch in row.chars() {
            tiles.push(match ch {
                '#' => DungeonTile::wall(),
                '.' => DungeonTile::floor(RoomId::CORRIDOR),
                '>' => DungeonTile {
                    kind: TileKind::Floor,
                    room: RoomId::CORRIDOR,
                    stairs: true,
                },
                digit => {
                    let id = digit.to_digit(10).expect("test map tiles are #/./>/digits");
                    DungeonTile::floor(RoomId(id as u16))
                }
            });
        }
    }
    FloorMap::from_tiles(width, height, tiles).expect("test map dimensions")
}

/// Flags the tile at `location` as stairs in place.
pub(crate) fn set_stairs(map: &mut FloorMap, location: Location) {
    let mut tile = map.tile_or_unknown(location);
    tile.stairs = true;
    map.set(location, tile);
}

pub(crate) struct EntityBuilder {
    id: u32,
    name: String,
    location: Location,
    stats: EntityStats,
    alignment: Option<Alignment>,
    advances: bool,
    map: FloorMap,
    attacks: Vec<Attack>,
    held_items: Vec<Item>,
}

/// Starts an entity fixture at the given (row, col) with unremarkable stats.
pub(crate) fn entity(id: u32, name: &str, location: (i32, i32)) -> EntityBuilder {
    EntityBuilder {
        id,
        name: name.into(),
        location: Location::new(location.0, location.1),
        stats: EntityStats::new(50, 10, 10, 100, 5),
        alignment: None,
        advances: false,
        map: FloorMap::unknown(1, 1),
        attacks: Vec::new(),
        held_items: Vec::new(),
    }
}

impl EntityBuilder {
    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    pub fn advances(mut self) -> Self {
        self.advances = true;
        self
    }

    pub fn with_stats(mut self, attack: u32, defense: u32, level: u32) -> Self {
        self.stats.attack = BoostedStat::new(attack);
        self.stats.defense = BoostedStat::new(defense);
        self.stats.level = level;
        self
    }

    pub fn hp(mut self, current: u32, max: u32) -> Self {
        self.stats.hp = ResourceMeter::new(current, max);
        self
    }

    pub fn with_map_of(mut self, floor: &FloorMap) -> Self {
        self.map = FloorMap::unknown(floor.width(), floor.height());
        self
    }

    pub fn held(mut self, item: Item) -> Self {
        self.held_items.push(item);
        self
    }

    pub fn build(self) -> CrawlEntity {
        self.build_logged().0
    }

    /// Builds the entity along with a handle onto its recorded event stream.
    pub fn build_logged(self) -> (CrawlEntity, EventLog) {
        let log: EventLog = Rc::new(RefCell::new(Vec::new()));
        let entity = CrawlEntity {
            id: EntityId(self.id),
            name: self.name,
            location: self.location,
            stats: self.stats,
            alignment: self.alignment,
            advances: self.advances,
            map: self.map,
            attacks: self.attacks,
            held_items: self.held_items,
            controller: Box::new(RecordingController(log.clone())),
        };
        (entity, log)
    }
}

/// Wraps a map and entities into a floor-1 crawl, sizing each entity's fog
/// map to the floor.
pub(crate) fn crawl(map: FloorMap, mut entities: Vec<CrawlEntity>) -> InProgressCrawl {
    for entity in &mut entities {
        if !map.same_dimensions(&entity.map) {
            entity.map = FloorMap::unknown(map.width(), map.height());
        }
    }
    InProgressCrawl {
        dungeon: Dungeon {
            name: "Test Caves".into(),
            floors: 99,
        },
        floor: Floor::new(1, map),
        entities,
        seed: 0,
        nonce: 0,
    }
}

/// An item whose only behavior is a passive stat override while held.
pub(crate) fn equip_item(name: &str, stat: StatKind, delta: i32) -> Item {
    ItemBlueprint {
        name: name.into(),
        description: String::new(),
        actions: Default::default(),
        handlers: Default::default(),
        equip: Some(EquipEffect::ModifierDelta { stat, delta }),
    }
    .instantiate()
}

/// RNG oracle that ignores the seed and always produces the same raw value.
pub(crate) struct FixedRoll(pub u32);

impl RngOracle for FixedRoll {
    fn next_u32(&self, _seed: u64) -> u32 {
        self.0
    }
}

/// Generator producing a bare 5x5 corridor floor, or a success conclusion
/// past the dungeon's depth.
pub(crate) struct StubGenerator;

impl FloorGenerator for StubGenerator {
    fn advance_to_floor(
        &self,
        dungeon: &Dungeon,
        floor_number: u32,
        advancers: Vec<CrawlEntity>,
    ) -> Result<CrawlState, GenerateError> {
        if floor_number > dungeon.floors {
            return Ok(CrawlState::Concluded(ConcludedCrawl {
                success: true,
                summary: CrawlSummary {
                    dungeon: dungeon.name.clone(),
                    floors_cleared: dungeon.floors,
                },
            }));
        }
        let map = map_from_rows(&[".....", ".....", ".....", ".....", "....."]);
        let mut entities = advancers;
        for entity in &mut entities {
            entity.map = FloorMap::unknown(map.width(), map.height());
        }
        Ok(CrawlState::InProgress(InProgressCrawl {
            dungeon: dungeon.clone(),
            floor: Floor::new(floor_number, map),
            entities,
            seed: 0,
            nonce: 0,
        }))
    }
}
