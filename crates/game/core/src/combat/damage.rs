//! Damage calculation and application.

/// Breakdown of a single damage application.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageReport {
    /// Damage before block.
    pub incoming: u32,
    /// Damage soaked up by block.
    pub absorbed: u32,
    /// Health actually removed.
    pub health_lost: u32,
    /// True if this hit took health from above zero to exactly zero.
    pub depleted: bool,
}

/// Apply damage to a block/health pair.
///
/// # Formula
///
/// ```text
/// if block >= amount:
///     block -= amount
/// else:
///     health -= (amount - block)   (clamped to 0)
///     block = 0
/// ```
pub fn apply_blocked_damage(block: &mut u32, health: &mut u32, amount: u32) -> DamageReport {
    let absorbed = amount.min(*block);
    *block -= absorbed;

    let remaining = amount - absorbed;
    let before = *health;
    *health = apply_damage(before, remaining);

    DamageReport {
        incoming: amount,
        absorbed,
        health_lost: before - *health,
        depleted: before > 0 && *health == 0,
    }
}

/// Apply damage to current HP.
///
/// Returns the new HP value (clamped to 0).
pub fn apply_damage(current_hp: u32, damage: u32) -> u32 {
    current_hp.saturating_sub(damage)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_absorbs_before_health() {
        let mut block = 5;
        let mut health = 10;

        let report = apply_blocked_damage(&mut block, &mut health, 8);

        assert_eq!(block, 0);
        assert_eq!(health, 7);
        assert_eq!(report.absorbed, 5);
        assert_eq!(report.health_lost, 3);
        assert!(!report.depleted);
    }

    #[test]
    fn block_covers_whole_hit() {
        let mut block = 10;
        let mut health = 10;

        let report = apply_blocked_damage(&mut block, &mut health, 4);

        assert_eq!(block, 6);
        assert_eq!(health, 10);
        assert_eq!(report.health_lost, 0);
    }

    #[test]
    fn health_floors_at_zero() {
        let mut block = 0;
        let mut health = 3;

        let report = apply_blocked_damage(&mut block, &mut health, 50);

        assert_eq!(health, 0);
        assert_eq!(report.health_lost, 3);
        assert!(report.depleted);
    }

    #[test]
    fn zero_damage_changes_nothing() {
        let mut block = 2;
        let mut health = 4;

        let report = apply_blocked_damage(&mut block, &mut health, 0);

        assert_eq!((block, health), (2, 4));
        assert_eq!(report, DamageReport::default());
    }
}
