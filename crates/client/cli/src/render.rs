//! Text rendering of queries and events.

use std::fmt::Write;

use combat_core::{
    BlockTarget, CombatEvent, CombatPhase, CombatSession, DeckCount, EnemyStatusSummary,
    HandSummary, TargetablePart,
};

pub fn hand(summary: &HandSummary) -> String {
    let mut out = format!(
        "HP {}/{}  Block {}  Energy {}/{}\n",
        summary.health, summary.max_health, summary.block, summary.energy, summary.max_energy
    );
    if summary.cards.is_empty() {
        out.push_str("  (hand is empty)\n");
    }
    for card in &summary.cards {
        let marker = if card.affordable { ' ' } else { 'x' };
        let _ = writeln!(
            out,
            " {marker}{}. {} [{}] - {}",
            card.index + 1,
            card.name,
            card.cost,
            card.description
        );
    }
    out
}

pub fn enemy(status: &EnemyStatusSummary) -> String {
    if status.is_dead {
        return format!("{} (dead)\n", status.name);
    }

    let mut out = format!("== {} ==\n", status.name);
    for part in &status.parts {
        let _ = write!(
            out,
            "  {}: {} [{}/{}]",
            part.index + 1,
            part.name,
            part.health,
            part.max_health
        );
        if part.is_core {
            out.push_str(" (core)");
        }
        if part.block > 0 {
            let _ = write!(out, " (block {})", part.block);
        }
        if part.destroyed {
            out.push_str(" - destroyed");
        } else if let Some(intent) = &part.intent {
            let _ = write!(out, " -> {}", intent.description);
        }
        out.push('\n');
    }
    out
}

pub fn deck(counts: &[DeckCount]) -> String {
    let mut out = String::from("Deck:\n");
    for entry in counts {
        let _ = writeln!(out, "  {} x{} (cost {})", entry.name, entry.count, entry.cost);
    }
    out
}

pub fn targets(parts: &[TargetablePart]) -> String {
    let mut out = String::from("Targets:\n");
    for (slot, part) in parts.iter().enumerate() {
        let _ = writeln!(
            out,
            "  {}. {} [{}/{}]{}",
            slot + 1,
            part.name,
            part.health,
            part.max_health,
            if part.is_core { " (core)" } else { "" }
        );
    }
    out
}

/// One line per event. Events with nothing worth printing yield `None`.
pub fn event(session: &CombatSession, event: &CombatEvent) -> Option<String> {
    let part_name = |index: usize| {
        session
            .enemy()
            .part(index)
            .map_or_else(|| format!("part {}", index + 1), |part| part.name().to_owned())
    };

    let line = match event {
        CombatEvent::CombatStarted { enemy, deck_size } => {
            format!("A wild {enemy} appears! ({deck_size} cards in deck)")
        }
        CombatEvent::TurnStarted { turn, energy } => {
            format!("--- Turn {turn} --- energy {energy}")
        }
        CombatEvent::CardsDrawn { requested, drawn } if drawn < requested => {
            format!("Drew {drawn} of {requested} cards; the deck is exhausted.")
        }
        CombatEvent::CardsDrawn { drawn, .. } => format!("Drew {drawn} cards."),
        CombatEvent::DeckRecycled { cards } => {
            format!("Shuffled {cards} cards from the discard pile into the draw pile.")
        }
        CombatEvent::CardPlayed {
            name, energy_left, ..
        } => format!("Played {name}. Energy left: {energy_left}"),
        CombatEvent::TargetSelectionStarted { card, .. } => {
            format!(
                "Choose a target for {card} (target N, or cancel):\n{}",
                targets(&session.targetable_parts()).trim_end()
            )
        }
        CombatEvent::TargetSelectionCancelled { card } => format!("{card} cancelled."),
        CombatEvent::PartDamaged { part_index, report } => format!(
            "{} takes {} damage ({} blocked).",
            part_name(*part_index),
            report.health_lost,
            report.absorbed
        ),
        CombatEvent::PartDestroyed { name, .. } => format!("{name} is destroyed!"),
        CombatEvent::DamageIgnored { part_index } => {
            format!("{} cannot be damaged.", part_name(*part_index))
        }
        CombatEvent::BlockGained {
            target: BlockTarget::Player,
            amount,
            total,
        } => format!("You gain {amount} block ({total} total)."),
        CombatEvent::BlockGained {
            target: BlockTarget::Part(index),
            amount,
            total,
        } => format!("{} gains {amount} block ({total} total).", part_name(*index)),
        CombatEvent::PlayerDamaged { part_index, report } => format!(
            "{} hits you: {} damage, {} blocked.",
            part_name(*part_index),
            report.health_lost,
            report.absorbed
        ),
        CombatEvent::EffectAcknowledged { description } => format!("{description} (no effect)"),
        CombatEvent::IntentChosen { .. } => return None,
        CombatEvent::IntentExecuted { part_index, intent } => {
            format!("{}: {}", part_name(*part_index), intent.description)
        }
        CombatEvent::HandDiscarded { cards } => format!("Discarded {cards} cards."),
        CombatEvent::EnemyDied { name, reason } => format!("{name} dies: {reason}."),
        CombatEvent::PhaseChanged { to, .. } => match to {
            CombatPhase::Victory => "Victory!".to_owned(),
            CombatPhase::Defeat => "Defeat...".to_owned(),
            CombatPhase::EnemyTurn => "Enemy turn.".to_owned(),
            _ => return None,
        },
        CombatEvent::OverlayOpened => "Paused. Type 'resume' to continue.".to_owned(),
        CombatEvent::OverlayClosed => "Resumed.".to_owned(),
    };
    Some(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use combat_core::{CardEffectKind, EnemyIntent, HandCard, PartStatus};

    #[test]
    fn hand_marks_unaffordable_cards() {
        let summary = HandSummary {
            health: 90,
            max_health: 100,
            block: 0,
            energy: 1,
            max_energy: 3,
            cards: vec![HandCard {
                index: 0,
                name: "Bash".into(),
                cost: 2,
                description: "Deal 12 damage.".into(),
                effect: CardEffectKind::Attack,
                affordable: false,
            }],
        };

        let text = hand(&summary);

        assert!(text.starts_with("HP 90/100"));
        assert!(text.contains(" x1. Bash [2]"));
    }

    #[test]
    fn enemy_shows_core_block_and_intent() {
        let status = EnemyStatusSummary {
            name: "Slime".into(),
            is_dead: false,
            parts: vec![
                PartStatus {
                    index: 0,
                    name: "Body".into(),
                    health: 30,
                    max_health: 30,
                    block: 0,
                    is_core: true,
                    destroyed: false,
                    intent: None,
                },
                PartStatus {
                    index: 1,
                    name: "Arm".into(),
                    health: 4,
                    max_health: 10,
                    block: 5,
                    is_core: false,
                    destroyed: false,
                    intent: Some(EnemyIntent::defend(5)),
                },
            ],
        };

        let text = enemy(&status);

        assert!(text.contains("1: Body [30/30] (core)"));
        assert!(text.contains("2: Arm [4/10] (block 5) -> Gain 5 block"));
    }
}
