//! Turn resolution pipeline.
//!
//! [`execute`] is the single entry point through which state changes: it
//! dispatches on the action kind, then runs the post-resolution pass (death
//! filter, conclusion checks, floor advancement, fog refresh) in a fixed
//! order. The caller owns the state exclusively for the duration of one call
//! and receives the successor state back, which on floor advancement is a
//! wholesale replacement.

mod errors;

pub use errors::ExecuteError;

use crate::action::{Action, get_targets, is_valid_move};
use crate::combat::{Accuracy, Attack, OnHitEffect, compute_damage};
use crate::config::CrawlConfig;
use crate::direction::Direction;
use crate::env::{CrawlEnv, compute_seed};
use crate::event::LogEvent;
use crate::fog;
use crate::item::{ItemEffect, ItemHook};
use crate::state::{
    ConcludedCrawl, CrawlEntity, CrawlState, CrawlSummary, EntityId, InProgressCrawl, StatKind,
};

/// Resolves one submitted turn.
///
/// Invalid-but-submitted actions (an impossible move) resolve to a no-op with
/// an honest log event; malformed calls (unknown entity, concluded state) and
/// invariant violations fail with a descriptive error instead.
pub fn execute(
    env: &CrawlEnv<'_>,
    state: CrawlState,
    entity: EntityId,
    action: &Action,
) -> Result<CrawlState, ExecuteError> {
    let CrawlState::InProgress(mut crawl) = state else {
        return Err(ExecuteError::CrawlConcluded);
    };

    let actor = crawl
        .entities
        .iter()
        .position(|candidate| candidate.id == entity)
        .ok_or(ExecuteError::EntityNotFound(entity))?;

    match action {
        Action::Wait => execute_wait(&mut crawl, actor),
        Action::Move { direction } => execute_move(&mut crawl, actor, *direction),
        Action::Attack { attack, direction } => {
            execute_attack(env, &mut crawl, actor, attack, *direction)?;
        }
        Action::Item { .. } => {
            // Dispatch point for direct item invocation (use/throw/drop).
            // The capability registry is live (the death filter drives the
            // EntityDefeat hook below) but turn-action invocation is inert in
            // this core: the state passes through unchanged.
        }
    }

    crawl.nonce += 1;
    post_resolution(env, crawl)
}

fn execute_wait(crawl: &mut InProgressCrawl, actor: usize) {
    let entity = &crawl.entities[actor];
    let event = LogEvent::Wait {
        entity: entity.entity_ref(),
        location: entity.location,
    };
    crawl.propagate(event);
}

/// Applies a move, or honestly reports that nothing happened.
///
/// The event always goes out; a blocked attempt keeps `start == end`, which
/// is what lets clients render a bump animation.
fn execute_move(crawl: &mut InProgressCrawl, actor: usize, direction: Direction) {
    let start = crawl.entities[actor].location;

    if is_valid_move(crawl, &crawl.entities[actor], direction) {
        crawl.entities[actor].location = start.step(direction);
    }

    let entity = &crawl.entities[actor];
    let event = LogEvent::Move {
        entity: entity.entity_ref(),
        start,
        end: entity.location,
    };
    crawl.propagate(event);
}

fn execute_attack(
    env: &CrawlEnv<'_>,
    crawl: &mut InProgressCrawl,
    actor: usize,
    attack: &Attack,
    direction: Direction,
) -> Result<(), ExecuteError> {
    let (attacker_ref, attacker_location, attacker_id) = {
        let attacker = &crawl.entities[actor];
        (attacker.entity_ref(), attacker.location, attacker.id)
    };

    // Flat energy drain; attacks never gate on an empty meter.
    crawl.entities[actor]
        .stats
        .energy
        .change(-(CrawlConfig::ATTACK_ENERGY_COST as i32));

    crawl.propagate(LogEvent::Attack {
        entity: attacker_ref,
        attack: attack.name.clone(),
        location: attacker_location,
        direction,
    });

    let targets = get_targets(crawl, &crawl.entities[actor], direction, &attack.target);

    for (roll_index, target_id) in targets.into_iter().enumerate() {
        let hit = match attack.accuracy {
            Accuracy::Always => true,
            Accuracy::Percent(percent) => {
                let seed = compute_seed(crawl.seed, crawl.nonce, attacker_id.0, roll_index as u32);
                env.rng()?.roll_d100(seed) <= percent as u32
            }
        };

        let Some(target) = crawl
            .entities
            .iter()
            .position(|candidate| candidate.id == target_id)
        else {
            continue;
        };
        let (target_ref, target_location) = {
            let entity = &crawl.entities[target];
            (entity.entity_ref(), entity.location)
        };

        if !hit {
            crawl.propagate(LogEvent::Miss {
                entity: target_ref,
                location: target_location,
            });
            continue;
        }

        if attack.power.is_some() {
            let damage = compute_damage(&crawl.entities[actor], &crawl.entities[target]);
            let applied = crawl.entities[target].stats.hp.change(-damage);
            crawl.propagate(LogEvent::Stat {
                entity: target_ref.clone(),
                location: target_location,
                stat: StatKind::Hp,
                change: applied,
            });
        }

        for effect in &attack.on_hit {
            let OnHitEffect::StatChange { stat, amount } = *effect;
            let applied = apply_stat_change(&mut crawl.entities[target], stat, amount);
            crawl.propagate(LogEvent::Stat {
                entity: target_ref.clone(),
                location: target_location,
                stat,
                change: applied,
            });
        }
    }

    Ok(())
}

fn apply_stat_change(entity: &mut CrawlEntity, stat: StatKind, amount: i32) -> i32 {
    match stat {
        StatKind::Hp => entity.stats.hp.change(amount),
        StatKind::Energy => entity.stats.energy.change(amount),
        StatKind::Attack => entity.stats.attack.adjust(amount),
        StatKind::Defense => entity.stats.defense.adjust(amount),
    }
}

/// The fixed-order pass that follows every action.
fn post_resolution(
    env: &CrawlEnv<'_>,
    mut crawl: InProgressCrawl,
) -> Result<CrawlState, ExecuteError> {
    // 1. Death filter. Defeat hooks run first so a held reviver can pull its
    //    holder back before removal.
    let mut index = 0;
    while index < crawl.entities.len() {
        if !crawl.entities[index].is_defeated() {
            index += 1;
            continue;
        }

        run_defeat_hooks(&mut crawl, index);
        if !crawl.entities[index].is_defeated() {
            index += 1;
            continue;
        }

        let (entity_ref, location) = {
            let entity = &crawl.entities[index];
            (entity.entity_ref(), entity.location)
        };
        crawl.propagate(LogEvent::Defeat {
            entity: entity_ref,
            location,
        });
        crawl.entities.remove(index);
    }

    // 2. Nobody left who could clear the floor: the crawl is lost.
    if !crawl.entities.iter().any(|entity| entity.advances) {
        return Ok(CrawlState::Concluded(ConcludedCrawl {
            success: false,
            summary: CrawlSummary {
                dungeon: crawl.dungeon.name.clone(),
                floors_cleared: crawl.floor.number.saturating_sub(1),
            },
        }));
    }

    // 3. Floor-clear check: first qualifying entity in iteration order wins.
    let cleared = crawl
        .entities
        .iter()
        .find(|entity| {
            entity.advances && crawl.floor.map.tile_or_unknown(entity.location).stairs
        })
        .map(|entity| entity.entity_ref());
    if let Some(entity_ref) = cleared {
        crawl.propagate(LogEvent::Stairs { entity: entity_ref });
        let next_floor = crawl.floor.number + 1;
        let advancers: Vec<CrawlEntity> = crawl
            .entities
            .drain(..)
            .filter(|entity| entity.advances)
            .collect();
        let next = env
            .generator()?
            .advance_to_floor(&crawl.dungeon, next_floor, advancers)?;
        return Ok(next);
    }

    // 4. Fog refresh for every survivor.
    let InProgressCrawl { floor, entities, .. } = &mut crawl;
    for entity in entities.iter_mut() {
        fog::update_entity_map(&floor.map, entity)?;
    }

    Ok(CrawlState::InProgress(crawl))
}

/// Invokes the `EntityDefeat` capability of every held item, in slot order,
/// stopping early once the holder is back on its feet.
fn run_defeat_hooks(crawl: &mut InProgressCrawl, index: usize) {
    // Effect programs are data; cloning them out unties the item borrow from
    // the entity they are about to heal.
    let programs: Vec<(usize, Vec<ItemEffect>)> = crawl.entities[index]
        .held_items
        .iter()
        .enumerate()
        .filter_map(|(slot, item)| {
            item.effects(ItemHook::EntityDefeat)
                .map(|effects| (slot, effects.to_vec()))
        })
        .collect();

    for (slot, effects) in programs {
        if !crawl.entities[index].is_defeated() {
            break;
        }
        apply_item_effects(crawl, index, slot, &effects);
    }
}

/// Interprets one capability's effect program against its holder.
fn apply_item_effects(
    crawl: &mut InProgressCrawl,
    index: usize,
    slot: usize,
    effects: &[ItemEffect],
) {
    for effect in effects {
        let (entity_ref, location) = {
            let entity = &crawl.entities[index];
            (entity.entity_ref(), entity.location)
        };
        match effect {
            ItemEffect::RestoreHp(amount) => {
                let applied = crawl.entities[index].stats.hp.change(*amount as i32);
                crawl.propagate(LogEvent::Stat {
                    entity: entity_ref,
                    location,
                    stat: StatKind::Hp,
                    change: applied,
                });
            }
            ItemEffect::RestoreEnergy(amount) => {
                let applied = crawl.entities[index].stats.energy.change(*amount as i32);
                crawl.propagate(LogEvent::Stat {
                    entity: entity_ref,
                    location,
                    stat: StatKind::Energy,
                    change: applied,
                });
            }
            ItemEffect::InflictDamage(amount) => {
                let applied = crawl.entities[index].stats.hp.change(-(*amount as i32));
                crawl.propagate(LogEvent::Stat {
                    entity: entity_ref,
                    location,
                    stat: StatKind::Hp,
                    change: applied,
                });
            }
            ItemEffect::ReviveFull => {
                let stats = &mut crawl.entities[index].stats;
                stats.hp.current = stats.hp.max;
            }
            ItemEffect::Announce(template) => {
                let text = template.replace("{name}", &crawl.entities[index].name);
                crawl.propagate(LogEvent::Message { text });
            }
            ItemEffect::TransformInto(blueprint) => {
                if let Some(item) = crawl.entities[index].held_items.get_mut(slot) {
                    item.transform_into(blueprint);
                }
            }
        }
    }
}
