use crate::combat::DamageReport;
use crate::template::{ConstructionError, EnemyTemplate};

use super::EnemyPart;

/// Enemy made of independently destructible parts.
///
/// Built only through [`Enemy::from_template`], so the part list is never
/// empty and holds exactly one core part.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Enemy {
    name: String,
    parts: Vec<EnemyPart>,
    is_dead: bool,
}

impl Enemy {
    /// Validates the template and instantiates every part at full health.
    pub fn from_template(template: &EnemyTemplate) -> Result<Self, ConstructionError> {
        template.validate()?;

        let parts: Vec<EnemyPart> = template.parts.iter().map(EnemyPart::from_template).collect();
        for (index, part) in parts.iter().enumerate() {
            tracing::debug!(
                enemy = %template.name,
                index,
                part = %part.name(),
                health = part.max_health(),
                core = part.is_core(),
                intents = part.repertoire().len(),
                "spawned enemy part"
            );
        }

        Ok(Self {
            name: template.name.clone(),
            parts,
            is_dead: false,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parts(&self) -> &[EnemyPart] {
        &self.parts
    }

    pub fn part(&self, index: usize) -> Option<&EnemyPart> {
        self.parts.get(index)
    }

    pub fn is_dead(&self) -> bool {
        self.is_dead
    }

    /// Index of the core part.
    pub fn core_index(&self) -> Option<usize> {
        self.parts.iter().position(EnemyPart::is_core)
    }

    /// Indices of every undestroyed part, in part order. Empty once dead.
    pub fn targetable_indices(&self) -> Vec<usize> {
        if self.is_dead {
            return Vec::new();
        }
        self.parts
            .iter()
            .enumerate()
            .filter(|(_, part)| !part.is_destroyed())
            .map(|(index, _)| index)
            .collect()
    }

    /// Routes damage to one part.
    ///
    /// No-op (`None`) if the enemy is dead, the index is out of range, or the
    /// part is already destroyed.
    pub fn take_damage_to_part(&mut self, index: usize, amount: u32) -> Option<DamageReport> {
        if self.is_dead {
            tracing::debug!(enemy = %self.name, "ignored damage to dead enemy");
            return None;
        }
        let part = self.parts.get_mut(index)?;
        part.take_damage(amount)
    }

    /// Clears block on every undestroyed part.
    pub fn reset_all_part_blocks(&mut self) {
        for part in self.parts.iter_mut().filter(|part| !part.is_destroyed()) {
            part.reset_block();
        }
    }

    /// Adds block to one part. Returns false if the index is invalid or the
    /// part is destroyed.
    pub fn add_block_to_part(&mut self, index: usize, amount: u32) -> bool {
        self.parts
            .get_mut(index)
            .is_some_and(|part| part.add_block(amount))
    }

    /// Defeat rule, evaluated in order:
    ///
    /// 1. the core part has no health left → defeated;
    /// 2. at least one non-core part exists and none has health left → defeated;
    /// 3. otherwise alive.
    ///
    /// An enemy already marked dead is always defeated.
    pub fn is_defeated(&self) -> bool {
        if self.is_dead {
            return true;
        }

        if self
            .parts
            .iter()
            .any(|part| part.is_core() && part.is_destroyed())
        {
            return true;
        }

        let mut non_core = self.parts.iter().filter(|part| !part.is_core()).peekable();
        non_core.peek().is_some() && non_core.all(EnemyPart::is_destroyed)
    }

    /// Marks the enemy dead and cancels every intent.
    ///
    /// Idempotent: returns true only on the call that actually killed it.
    pub fn die(&mut self, reason: &str) -> bool {
        if self.is_dead {
            return false;
        }
        self.is_dead = true;
        for part in &mut self.parts {
            part.clear_intent();
        }
        tracing::info!(enemy = %self.name, reason, "enemy died");
        true
    }

    pub(crate) fn parts_mut(&mut self) -> &mut [EnemyPart] {
        &mut self.parts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combatant::EnemyIntent;
    use crate::template::PartTemplate;

    fn three_part_enemy() -> Enemy {
        let template = EnemyTemplate::new("Crab")
            .with_part(PartTemplate::core("Shell", 1))
            .with_part(PartTemplate::limb("Left Claw", 1, vec![EnemyIntent::attack(3)]))
            .with_part(PartTemplate::limb("Right Claw", 1, vec![EnemyIntent::defend(3)]));
        Enemy::from_template(&template).unwrap()
    }

    #[test]
    fn construction_rejects_invalid_template() {
        let template = EnemyTemplate::new("Blob").with_part(PartTemplate::limb("Arm", 3, vec![]));

        assert!(matches!(
            Enemy::from_template(&template),
            Err(ConstructionError::NoCorePart { .. })
        ));
    }

    #[test]
    fn one_arm_down_is_not_defeat() {
        let mut enemy = three_part_enemy();

        enemy.take_damage_to_part(1, 1);

        assert!(!enemy.is_defeated());
    }

    #[test]
    fn all_non_core_parts_down_is_defeat() {
        let mut enemy = three_part_enemy();

        enemy.take_damage_to_part(1, 1);
        enemy.take_damage_to_part(2, 1);

        assert!(enemy.is_defeated());
    }

    #[test]
    fn core_down_is_defeat_with_arms_alive() {
        let mut enemy = three_part_enemy();

        enemy.take_damage_to_part(0, 1);

        assert!(enemy.is_defeated());
        assert!(!enemy.part(1).unwrap().is_destroyed());
    }

    #[test]
    fn core_only_enemy_judged_by_core() {
        let template = EnemyTemplate::new("Eye").with_part(PartTemplate::core("Eye", 4));
        let mut enemy = Enemy::from_template(&template).unwrap();

        assert!(!enemy.is_defeated());
        enemy.take_damage_to_part(0, 4);
        assert!(enemy.is_defeated());
    }

    #[test]
    fn damage_ignored_when_dead_or_out_of_range() {
        let mut enemy = three_part_enemy();

        assert!(enemy.take_damage_to_part(9, 5).is_none());
        enemy.die("test");
        assert!(enemy.take_damage_to_part(1, 1).is_none());
        assert_eq!(enemy.part(1).unwrap().current_health(), 1);
    }

    #[test]
    fn die_is_idempotent_and_clears_intents() {
        let mut enemy = three_part_enemy();
        enemy.parts_mut()[1].set_intent(Some(EnemyIntent::attack(3)));

        assert!(enemy.die("first"));
        assert!(!enemy.die("second"));
        assert!(enemy.is_dead());
        assert!(enemy.parts().iter().all(|part| part.current_intent().is_none()));
        assert!(enemy.targetable_indices().is_empty());
    }

    #[test]
    fn block_reset_and_add() {
        let mut enemy = three_part_enemy();

        assert!(enemy.add_block_to_part(2, 5));
        assert!(!enemy.add_block_to_part(7, 5));
        enemy.reset_all_part_blocks();

        assert_eq!(enemy.part(2).unwrap().current_block(), 0);
    }

    #[test]
    fn targetable_skips_destroyed_parts() {
        let mut enemy = three_part_enemy();

        enemy.take_damage_to_part(1, 1);

        assert_eq!(enemy.targetable_indices(), vec![0, 2]);
        assert_eq!(enemy.core_index(), Some(0));
    }
}
