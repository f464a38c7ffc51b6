//! Enemy turn resolution.

use crate::combatant::{EnemyIntent, IntentKind};
use crate::event::{BlockTarget, CombatEvent};
use crate::planner::EnemyIntentPlanner;

use super::CombatEngine;

impl CombatEngine<'_> {
    /// Runs one full enemy turn. No command can interleave with it.
    ///
    /// 1. reset block on every part
    /// 2. plan a fresh intent for every active part
    /// 3. execute the intents in part order against the player
    /// 4. Defeat, then Victory, otherwise the next player turn
    pub(super) fn run_enemy_turn(&mut self) {
        self.session.enemy.reset_all_part_blocks();

        let planned = EnemyIntentPlanner::plan(&mut self.session.enemy, &mut *self.rng);
        for entry in &planned {
            self.emit(CombatEvent::IntentChosen {
                part_index: entry.part_index,
                intent: entry.intent.clone(),
            });
        }

        for entry in planned {
            let active = self
                .session
                .enemy
                .part(entry.part_index)
                .is_some_and(|part| part.can_act());
            if active {
                self.execute_intent(entry.part_index, entry.intent);
            }
        }

        if self.check_defeat() || self.check_victory() {
            return;
        }
        self.start_player_turn();
    }

    fn execute_intent(&mut self, part_index: usize, intent: EnemyIntent) {
        tracing::debug!(part_index, intent = %intent.description, "executing intent");

        match intent.kind {
            IntentKind::Attack => {
                let report = self.session.player.take_damage(intent.magnitude);
                self.emit(CombatEvent::PlayerDamaged { part_index, report });
            }
            IntentKind::Defend => {
                if self
                    .session
                    .enemy
                    .add_block_to_part(part_index, intent.magnitude)
                {
                    let total = self
                        .session
                        .enemy
                        .part(part_index)
                        .map_or(0, |part| part.current_block());
                    self.emit(CombatEvent::BlockGained {
                        target: BlockTarget::Part(part_index),
                        amount: intent.magnitude,
                        total,
                    });
                }
            }
            IntentKind::Buff | IntentKind::Debuff => {
                self.emit(CombatEvent::EffectAcknowledged {
                    description: intent.description.clone(),
                });
            }
        }

        self.emit(CombatEvent::IntentExecuted { part_index, intent });
    }
}

#[cfg(test)]
mod tests {
    use crate::combatant::{EnemyIntent, IntentKind};
    use crate::config::CombatConfig;
    use crate::engine::{CombatCommand, CombatEngine};
    use crate::event::{BlockTarget, CombatEvent};
    use crate::rng::PcgRng;
    use crate::state::{CombatPhase, CombatSession};
    use crate::template::{EnemyTemplate, PartTemplate, PlayerTemplate};

    fn run_first_enemy_turn(
        player: PlayerTemplate,
        arm: Vec<EnemyIntent>,
    ) -> (CombatSession, Vec<CombatEvent>, CombatPhase) {
        let mut rng = PcgRng::new(2);
        let mut session = CombatSession::new(
            &player,
            &EnemyTemplate::new("Golem")
                .with_part(PartTemplate::core("Heart", 30))
                .with_part(PartTemplate::limb("Fist", 12, arm)),
            &mut rng,
        )
        .unwrap();
        let config = CombatConfig::default();
        let mut engine = CombatEngine::new(&mut session, &config, &mut rng);
        engine.begin().unwrap();
        let outcome = engine.execute(CombatCommand::EndPlayerTurn).unwrap();
        (session, outcome.events, outcome.phase)
    }

    #[test]
    fn defend_intent_blocks_the_part() {
        let (session, events, phase) =
            run_first_enemy_turn(PlayerTemplate::starter(), vec![EnemyIntent::defend(5)]);

        assert_eq!(phase, CombatPhase::PlayerTurn);
        assert_eq!(session.enemy().part(1).unwrap().current_block(), 5);
        assert!(events.contains(&CombatEvent::BlockGained {
            target: BlockTarget::Part(1),
            amount: 5,
            total: 5,
        }));
    }

    #[test]
    fn buff_intent_is_only_acknowledged() {
        let roar = EnemyIntent::new(IntentKind::Buff, 2, "Roar");
        let (session, events, _) =
            run_first_enemy_turn(PlayerTemplate::starter(), vec![roar.clone()]);

        assert_eq!(session.player().current_health(), 100);
        assert!(events.contains(&CombatEvent::EffectAcknowledged {
            description: "Roar".into(),
        }));
        assert!(events.contains(&CombatEvent::IntentExecuted {
            part_index: 1,
            intent: roar,
        }));
    }

    #[test]
    fn lethal_intent_ends_in_defeat() {
        let fragile = PlayerTemplate::new(4, 3, PlayerTemplate::starter().deck);
        let (session, events, phase) = run_first_enemy_turn(fragile, vec![EnemyIntent::attack(9)]);

        assert_eq!(phase, CombatPhase::Defeat);
        assert_eq!(session.player().current_health(), 0);
        assert_eq!(session.turn_number(), 1);
        assert!(!events
            .iter()
            .any(|event| matches!(event, CombatEvent::TurnStarted { .. })));
    }
}
