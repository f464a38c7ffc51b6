//! Enemy intent selection.
//!
//! Each enemy turn starts by giving every active part a fresh intent drawn
//! uniformly from its repertoire. Nothing carries over between turns.

use crate::combatant::{Enemy, EnemyIntent};
use crate::rng::RandomSource;

/// Intent assigned to one part during planning.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlannedIntent {
    pub part_index: usize,
    pub intent: EnemyIntent,
}

/// Picks the next action of every enemy part.
#[derive(Clone, Copy, Debug, Default)]
pub struct EnemyIntentPlanner;

impl EnemyIntentPlanner {
    /// Assigns a new intent to every undestroyed non-core part and clears the
    /// intent of every other part.
    ///
    /// Returns the assignments in part order. A dead enemy plans nothing.
    pub fn plan(enemy: &mut Enemy, rng: &mut dyn RandomSource) -> Vec<PlannedIntent> {
        if enemy.is_dead() {
            return Vec::new();
        }

        let mut planned = Vec::new();
        for (part_index, part) in enemy.parts_mut().iter_mut().enumerate() {
            if !part.can_act() {
                part.set_intent(None);
                continue;
            }

            let intent = Self::choose(part.repertoire(), rng).cloned();
            tracing::debug!(
                part = %part.name(),
                intent = intent.as_ref().map_or("none", |intent| intent.description.as_str()),
                "selected intent"
            );
            part.set_intent(intent.clone());

            if let Some(intent) = intent {
                planned.push(PlannedIntent { part_index, intent });
            }
        }

        planned
    }

    /// Uniformly picks one intent, or `None` for an empty repertoire.
    pub fn choose<'r>(
        repertoire: &'r [EnemyIntent],
        rng: &mut dyn RandomSource,
    ) -> Option<&'r EnemyIntent> {
        if repertoire.is_empty() {
            return None;
        }
        repertoire.get(rng.below(repertoire.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combatant::IntentKind;
    use crate::rng::PcgRng;
    use crate::template::{EnemyTemplate, PartTemplate};

    fn enemy() -> Enemy {
        Enemy::from_template(
            &EnemyTemplate::new("Hydra")
                .with_part(PartTemplate::core("Heart", 30))
                .with_part(PartTemplate::limb(
                    "Head A",
                    10,
                    vec![
                        EnemyIntent::attack(5),
                        EnemyIntent::defend(4),
                        EnemyIntent::new(IntentKind::Buff, 2, "Roar"),
                    ],
                ))
                .with_part(PartTemplate::limb(
                    "Head B",
                    10,
                    vec![EnemyIntent::attack(7), EnemyIntent::defend(6)],
                ))
                .with_part(PartTemplate::limb("Tail", 8, Vec::new())),
        )
        .unwrap()
    }

    #[test]
    fn same_seed_same_plan() {
        let mut first = enemy();
        let mut second = enemy();

        let a = EnemyIntentPlanner::plan(&mut first, &mut PcgRng::new(17));
        let b = EnemyIntentPlanner::plan(&mut second, &mut PcgRng::new(17));

        assert_eq!(a, b);
        assert_eq!(first, second);
    }

    #[test]
    fn chosen_intents_come_from_repertoire() {
        let mut rng = PcgRng::new(3);
        let mut hydra = enemy();

        for _ in 0..50 {
            for planned in EnemyIntentPlanner::plan(&mut hydra, &mut rng) {
                let part = hydra.part(planned.part_index).unwrap();
                assert!(part.repertoire().contains(&planned.intent));
                assert_eq!(part.current_intent(), Some(&planned.intent));
            }
        }
    }

    #[test]
    fn core_destroyed_and_empty_parts_get_no_intent() {
        let mut rng = PcgRng::new(8);
        let mut hydra = enemy();
        hydra.take_damage_to_part(2, 10);

        let planned = EnemyIntentPlanner::plan(&mut hydra, &mut rng);

        assert_eq!(planned.len(), 1);
        assert_eq!(planned[0].part_index, 1);
        assert!(hydra.part(0).unwrap().current_intent().is_none());
        assert!(hydra.part(2).unwrap().current_intent().is_none());
        assert!(hydra.part(3).unwrap().current_intent().is_none());
    }

    #[test]
    fn dead_enemy_plans_nothing() {
        let mut rng = PcgRng::new(8);
        let mut hydra = enemy();
        hydra.die("test");

        assert!(EnemyIntentPlanner::plan(&mut hydra, &mut rng).is_empty());
    }

    #[test]
    fn every_repertoire_entry_is_reachable() {
        let mut rng = PcgRng::new(21);
        let repertoire = vec![
            EnemyIntent::attack(1),
            EnemyIntent::attack(2),
            EnemyIntent::defend(3),
        ];
        let mut seen = [false; 3];

        for _ in 0..200 {
            let chosen = EnemyIntentPlanner::choose(&repertoire, &mut rng).unwrap();
            let index = repertoire.iter().position(|entry| entry == chosen).unwrap();
            seen[index] = true;
        }

        assert!(seen.iter().all(|hit| *hit));
        assert!(EnemyIntentPlanner::choose(&[], &mut rng).is_none());
    }
}
