//! Single-writer turn session.
//!
//! A [`Session`] owns one crawl's state between turns and is the only writer
//! to it, which is the concurrency contract the engine core assumes. Callers
//! (a socket handler, an AI loop, a test) feed it `(entity, action)` pairs;
//! turn ordering and authentication are their problem, not the session's.

use crawl_core::{
    Action, Alignment, ConcludedCrawl, Controller, CrawlEntity, CrawlEnv, CrawlState, Dungeon,
    EntityId, ExecuteError, FloorGenerator, FloorMap, Location, LogEvent, PcgRng,
};
use crawl_content::PlayerSpec;

/// Failure of one session turn.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The crawl already ended; the state is still readable, never mutable.
    #[error("crawl is over; no further turns are accepted")]
    CrawlOver,

    /// The acting entity is not on the current floor.
    #[error("entity {0} is not part of this crawl")]
    UnknownEntity(EntityId),

    /// The engine rejected the turn. The session is poisoned afterwards:
    /// engine errors past the precondition checks mean a broken invariant,
    /// and the state that broke it has been torn down.
    #[error(transparent)]
    Engine(#[from] ExecuteError),

    /// A previous engine error already tore the state down.
    #[error("session was poisoned by an earlier engine error")]
    Poisoned,
}

/// Owns a crawl from first floor to conclusion.
pub struct Session<G: FloorGenerator> {
    generator: G,
    rng: PcgRng,
    state: Option<CrawlState>,
}

impl<G: FloorGenerator> Session<G> {
    /// Generates floor 1 and seats the given entities on it.
    pub fn begin(
        generator: G,
        dungeon: Dungeon,
        entities: Vec<CrawlEntity>,
    ) -> Result<Self, crawl_core::GenerateError> {
        let state = generator.advance_to_floor(&dungeon, 1, entities)?;
        Ok(Self {
            generator,
            rng: PcgRng,
            state: Some(state),
        })
    }

    pub fn state(&self) -> Option<&CrawlState> {
        self.state.as_ref()
    }

    /// Terminal outcome, once there is one.
    pub fn outcome(&self) -> Option<&ConcludedCrawl> {
        self.state.as_ref().and_then(CrawlState::as_concluded)
    }

    pub fn is_over(&self) -> bool {
        self.outcome().is_some()
    }

    /// Resolves one turn and broadcasts the end-of-turn sync event.
    pub fn process(
        &mut self,
        entity: EntityId,
        action: &Action,
    ) -> Result<&CrawlState, SessionError> {
        let span = tracing::debug_span!("turn", entity = %entity, action = action.as_snake_case());
        let _guard = span.enter();

        let state = self.state.take().ok_or(SessionError::Poisoned)?;

        // Engine errors consume the state, so the recoverable refusals are
        // checked up front and leave the session intact.
        let crawl = match &state {
            CrawlState::Concluded(_) => {
                self.state = Some(state);
                return Err(SessionError::CrawlOver);
            }
            CrawlState::InProgress(crawl) => crawl,
        };
        if crawl.entity(entity).is_none() {
            self.state = Some(state);
            return Err(SessionError::UnknownEntity(entity));
        }
        let floor_before = crawl.floor.number;

        let env = CrawlEnv::with_all(&self.generator, &self.rng);
        let next = crawl_core::execute(&env, state, entity, action)?;

        match next {
            CrawlState::InProgress(mut crawl) => {
                if crawl.floor.number != floor_before {
                    tracing::info!(floor = crawl.floor.number, "advanced to next floor");
                }
                crawl.propagate(LogEvent::Done);
                self.state = Some(CrawlState::InProgress(crawl));
            }
            CrawlState::Concluded(concluded) => {
                tracing::info!(
                    success = concluded.success,
                    floors_cleared = concluded.summary.floors_cleared,
                    "crawl concluded"
                );
                self.state = Some(CrawlState::Concluded(concluded));
            }
        }

        match self.state.as_ref() {
            Some(state) => Ok(state),
            None => Err(SessionError::Poisoned),
        }
    }
}

/// Builds a spawnable entity from a content loadout.
///
/// Location and fog map are placeholders; the floor generator re-seats both
/// the moment the entity enters a floor.
pub fn spawn_player(
    spec: PlayerSpec,
    id: EntityId,
    alignment: Option<Alignment>,
    controller: Box<dyn Controller>,
) -> CrawlEntity {
    CrawlEntity {
        id,
        name: spec.name,
        location: Location::new(0, 0),
        stats: spec.stats,
        alignment,
        advances: true,
        map: FloorMap::unknown(1, 1),
        attacks: spec.attacks,
        held_items: spec
            .held_items
            .iter()
            .map(|blueprint| blueprint.instantiate())
            .collect(),
        controller,
    }
}
