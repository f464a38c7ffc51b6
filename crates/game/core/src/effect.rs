//! Card effect resolution.
//!
//! [`CardEffectResolver`] turns an already-paid card into a mutation of the
//! player or of one enemy part. Cost payment and the hand → discard move
//! happen before resolution, so the resolver never sees or depends on them.

use crate::card::{CardDefinition, CardEffectKind};
use crate::combat::DamageReport;
use crate::combatant::{Enemy, Player};
use crate::deck::DrawReport;
use crate::error::{ErrorSeverity, GameError};
use crate::rng::RandomSource;

/// Enemy part an attack is aimed at.
pub struct EffectTarget<'a> {
    pub enemy: &'a mut Enemy,
    pub part_index: usize,
}

impl<'a> EffectTarget<'a> {
    pub fn new(enemy: &'a mut Enemy, part_index: usize) -> Self {
        Self { enemy, part_index }
    }
}

/// What a resolved card did.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EffectOutcome {
    /// Attack reached the part. `report` is `None` when the hit was ignored
    /// (dead enemy or destroyed part).
    Damage {
        part_index: usize,
        report: Option<DamageReport>,
    },
    /// Player gained block.
    Block { gained: u32, total: u32 },
    /// Player drew cards.
    Draw(DrawReport),
    /// Reserved effect kind; nothing changed.
    Acknowledged(CardEffectKind),
}

/// Errors raised when the resolver is called against its contract.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EffectError {
    #[error("attack card '{card}' resolved without a target part")]
    MissingTarget { card: String },
}

impl GameError for EffectError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingTarget { .. } => "EFFECT_MISSING_TARGET",
        }
    }
}

/// Maps a card's effect kind to its mutation.
#[derive(Clone, Copy, Debug, Default)]
pub struct CardEffectResolver;

impl CardEffectResolver {
    /// Resolves `card` for `player`.
    ///
    /// Attack cards need `target`; callers must have chosen one already.
    pub fn resolve(
        card: &CardDefinition,
        player: &mut Player,
        target: Option<EffectTarget<'_>>,
        rng: &mut dyn RandomSource,
    ) -> Result<EffectOutcome, EffectError> {
        let outcome = match card.effect {
            CardEffectKind::Attack => {
                let target = target.ok_or_else(|| EffectError::MissingTarget {
                    card: card.name.clone(),
                })?;
                let report = target
                    .enemy
                    .take_damage_to_part(target.part_index, card.magnitude);
                EffectOutcome::Damage {
                    part_index: target.part_index,
                    report,
                }
            }
            CardEffectKind::Defend => EffectOutcome::Block {
                gained: card.magnitude,
                total: player.gain_block(card.magnitude),
            },
            CardEffectKind::Draw => {
                EffectOutcome::Draw(player.draw(card.magnitude as usize, rng))
            }
            CardEffectKind::Buff | CardEffectKind::Debuff => {
                EffectOutcome::Acknowledged(card.effect)
            }
        };

        tracing::debug!(card = %card.name, ?outcome, "resolved card effect");
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combatant::EnemyIntent;
    use crate::rng::PcgRng;
    use crate::template::{EnemyTemplate, PartTemplate, PlayerTemplate};

    fn setup() -> (Player, Enemy, PcgRng) {
        let mut rng = PcgRng::new(1);
        let player = Player::from_template(&PlayerTemplate::starter(), &mut rng).unwrap();
        let enemy = Enemy::from_template(
            &EnemyTemplate::new("Slime")
                .with_part(PartTemplate::core("Body", 20))
                .with_part(PartTemplate::limb("Arm", 10, vec![EnemyIntent::attack(4)])),
        )
        .unwrap();
        (player, enemy, rng)
    }

    #[test]
    fn attack_damages_target_part() {
        let (mut player, mut enemy, mut rng) = setup();
        let card = CardDefinition::attack("Strike", 1, 6);

        let outcome = CardEffectResolver::resolve(
            &card,
            &mut player,
            Some(EffectTarget::new(&mut enemy, 1)),
            &mut rng,
        )
        .unwrap();

        assert!(matches!(
            outcome,
            EffectOutcome::Damage {
                part_index: 1,
                report: Some(_)
            }
        ));
        assert_eq!(enemy.part(1).unwrap().current_health(), 4);
    }

    #[test]
    fn attack_without_target_is_contract_violation() {
        let (mut player, _, mut rng) = setup();
        let card = CardDefinition::attack("Strike", 1, 6);

        let err = CardEffectResolver::resolve(&card, &mut player, None, &mut rng).unwrap_err();

        assert_eq!(err.severity(), ErrorSeverity::Internal);
    }

    #[test]
    fn defend_adds_block() {
        let (mut player, _, mut rng) = setup();
        player.gain_block(2);

        let outcome = CardEffectResolver::resolve(
            &CardDefinition::defend("Defend", 1, 5),
            &mut player,
            None,
            &mut rng,
        )
        .unwrap();

        assert_eq!(
            outcome,
            EffectOutcome::Block {
                gained: 5,
                total: 7
            }
        );
        assert_eq!(player.current_block(), 7);
    }

    #[test]
    fn draw_pulls_cards_into_hand() {
        let (mut player, _, mut rng) = setup();

        let outcome = CardEffectResolver::resolve(
            &CardDefinition::draw("Insight", 0, 2),
            &mut player,
            None,
            &mut rng,
        )
        .unwrap();

        assert!(matches!(outcome, EffectOutcome::Draw(report) if report.drawn == 2));
        assert_eq!(player.hand().len(), 2);
    }

    #[test]
    fn buff_and_debuff_change_nothing() {
        let (mut player, _, mut rng) = setup();
        let before = player.clone();

        for kind in [CardEffectKind::Buff, CardEffectKind::Debuff] {
            let card = CardDefinition::new("Chant", 0, "Reserved.", kind, 3);
            let outcome = CardEffectResolver::resolve(&card, &mut player, None, &mut rng).unwrap();
            assert_eq!(outcome, EffectOutcome::Acknowledged(kind));
        }

        assert_eq!(player, before);
    }
}
