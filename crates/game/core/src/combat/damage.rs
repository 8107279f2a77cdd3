//! The damage formula.

use crate::state::CrawlEntity;

// Fixed-point weights inherited from the original balance tables. Kept as
// exact rationals so damage numbers stay reproducible; do not fold into
// rounded decimals.
const LEVEL_WEIGHT: f64 = 43690.0 / 65536.0;
const QUADRATIC_WEIGHT: f64 = 3276.0 / 65536.0;

/// Damage dealt by one landed hit.
///
/// Pure in the attacker's effective attack and level and the defender's
/// effective defense:
///
/// ```text
/// d = (attack - defense) / 8 + level * (43690 / 65536)
/// damage = round((2d - defense + 10) + d^2 * (3276 / 65536))
/// ```
///
/// Weak attackers against heavily buffed defenders can drive the result
/// negative; applying it through the hp meter clamps whatever actually lands.
pub fn compute_damage(attacker: &CrawlEntity, defender: &CrawlEntity) -> i32 {
    let a = attacker.modified_attack();
    let b = attacker.stats.level as f64;
    let c = defender.modified_defense();
    let d = (a - c) / 8.0 + b * LEVEL_WEIGHT;
    ((2.0 * d - c + 10.0) + d * d * QUADRATIC_WEIGHT).round() as i32
}
