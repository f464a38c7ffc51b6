use crate::combat::{DamageReport, apply_blocked_damage};
use crate::template::PartTemplate;

use super::EnemyIntent;

/// One independently destructible piece of an enemy.
///
/// A part is destroyed exactly when its health is zero. Core parts never act,
/// so their repertoire is empty and their intent is always `None`; destroyed
/// parts also carry no intent.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyPart {
    name: String,
    max_health: u32,
    current_health: u32,
    current_block: u32,
    is_core: bool,
    repertoire: Vec<EnemyIntent>,
    current_intent: Option<EnemyIntent>,
}

impl EnemyPart {
    /// Builds a fresh part at full health from its template.
    ///
    /// Intents listed for a core part are dropped.
    pub fn from_template(template: &PartTemplate) -> Self {
        let repertoire = if template.is_core {
            Vec::new()
        } else {
            template.intents.clone()
        };

        Self {
            name: template.name.clone(),
            max_health: template.max_health,
            current_health: template.max_health,
            current_block: 0,
            is_core: template.is_core,
            repertoire,
            current_intent: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    pub fn current_health(&self) -> u32 {
        self.current_health
    }

    pub fn current_block(&self) -> u32 {
        self.current_block
    }

    pub fn is_core(&self) -> bool {
        self.is_core
    }

    pub fn is_destroyed(&self) -> bool {
        self.current_health == 0
    }

    pub fn repertoire(&self) -> &[EnemyIntent] {
        &self.repertoire
    }

    pub fn current_intent(&self) -> Option<&EnemyIntent> {
        self.current_intent.as_ref()
    }

    /// Returns true if the part takes part in intent planning and execution.
    pub fn can_act(&self) -> bool {
        !self.is_core && !self.is_destroyed()
    }

    /// Applies damage, block first. No-op (returns `None`) if already destroyed.
    pub fn take_damage(&mut self, amount: u32) -> Option<DamageReport> {
        if self.is_destroyed() {
            return None;
        }

        let report =
            apply_blocked_damage(&mut self.current_block, &mut self.current_health, amount);

        tracing::debug!(
            part = %self.name,
            absorbed = report.absorbed,
            health_lost = report.health_lost,
            health = self.current_health,
            block = self.current_block,
            "part took damage"
        );

        if report.depleted {
            self.current_intent = None;
            tracing::debug!(part = %self.name, "part destroyed");
        }

        Some(report)
    }

    /// Adds block. Returns false (no-op) if the part is destroyed.
    pub fn add_block(&mut self, amount: u32) -> bool {
        if self.is_destroyed() {
            return false;
        }
        self.current_block = self.current_block.saturating_add(amount);
        true
    }

    pub fn reset_block(&mut self) {
        self.current_block = 0;
    }

    /// Replaces the current intent. Ignored for core and destroyed parts,
    /// which always keep `None`.
    pub(crate) fn set_intent(&mut self, intent: Option<EnemyIntent>) {
        self.current_intent = if self.can_act() { intent } else { None };
    }

    pub(crate) fn clear_intent(&mut self) {
        self.current_intent = None;
    }
}
