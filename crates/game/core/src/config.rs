/// Engine constants and tunable balance parameters.
///
/// Everything here is a compile-time constant: the engine has no runtime
/// configuration surface of its own, and callers that want different balance
/// values are expected to fork the catalog, not the rules.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CrawlConfig;

impl CrawlConfig {
    /// Lower bound for stat modifier stages.
    pub const MODIFIER_MIN: i32 = -6;
    /// Upper bound for stat modifier stages.
    pub const MODIFIER_MAX: i32 = 6;

    /// Chebyshev distance within which entities see each other outside of
    /// shared room membership.
    pub const SIGHT_RANGE: u32 = 2;

    /// Half-width of the always-revealed box around an entity in the fog map.
    pub const FOG_REVEAL_RADIUS: i32 = 2;

    /// Candidate range for room-targeted attacks launched from a corridor.
    pub const CORRIDOR_TARGET_RANGE: u32 = 2;

    /// Flat energy drained from the attacker by any attack action.
    pub const ATTACK_ENERGY_COST: u32 = 1;
}
