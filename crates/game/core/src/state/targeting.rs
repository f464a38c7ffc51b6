use crate::card::CardDefinition;

/// Pending attack waiting for a target.
///
/// `targets` is the snapshot of undestroyed part indices taken when the
/// selection began; `ChooseTarget(i)` indexes into this list.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetSelection {
    pub hand_index: usize,
    pub card: CardDefinition,
    pub targets: Vec<usize>,
}

impl TargetSelection {
    /// Enemy part index behind snapshot slot `choice`.
    pub fn part_index(&self, choice: usize) -> Option<usize> {
        self.targets.get(choice).copied()
    }
}
