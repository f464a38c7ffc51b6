//! Combat state machine.
//!
//! The [`CombatEngine`] is the authoritative reducer for a [`CombatSession`].
//! The current [`CombatPhase`] alone decides which commands are accepted;
//! every command is validated completely before the first mutation, so a
//! rejected command leaves the session untouched.
//!
//! | phase            | accepted commands                                        |
//! |------------------|----------------------------------------------------------|
//! | NotStarted       | StartCombat (via [`CombatEngine::begin`])                |
//! | PlayerTurn       | PlayCard, EndPlayerTurn, OpenOverlay                     |
//! | SelectingTarget  | ChooseTarget, CancelTargetSelection, OpenOverlay         |
//! | Paused           | CloseOverlay                                             |
//! | EnemyTurn        | none (resolved inside EndPlayerTurn)                     |
//! | Victory, Defeat  | none                                                     |

mod command;
mod errors;
mod turns;

pub use command::{CombatCommand, CommandOutcome};
pub use errors::CombatError;

use crate::card::CardDefinition;
use crate::config::CombatConfig;
use crate::deck::DrawReport;
use crate::effect::{CardEffectResolver, EffectOutcome, EffectTarget};
use crate::event::{BlockTarget, CombatEvent};
use crate::rng::RandomSource;
use crate::state::{CombatPhase, CombatSession, ResumePhase, TargetSelection};

/// Drives one session through its phases.
///
/// The engine borrows everything it needs for the duration of a command and
/// collects the emitted events; it holds no state of its own between calls.
pub struct CombatEngine<'a> {
    session: &'a mut CombatSession,
    config: &'a CombatConfig,
    rng: &'a mut dyn RandomSource,
    events: Vec<CombatEvent>,
}

impl<'a> CombatEngine<'a> {
    pub fn new(
        session: &'a mut CombatSession,
        config: &'a CombatConfig,
        rng: &'a mut dyn RandomSource,
    ) -> Self {
        Self {
            session,
            config,
            rng,
            events: Vec::new(),
        }
    }

    /// Starts the first player turn of a freshly built session.
    pub fn begin(&mut self) -> Result<CommandOutcome, CombatError> {
        self.require_phase(CombatCommand::StartCombat, CombatPhase::NotStarted)?;

        self.emit(CombatEvent::CombatStarted {
            enemy: self.session.enemy.name().to_owned(),
            deck_size: self.session.player.deck().len(),
        });
        self.start_player_turn();
        Ok(self.finish())
    }

    /// Applies one command.
    pub fn execute(&mut self, command: CombatCommand) -> Result<CommandOutcome, CombatError> {
        tracing::debug!(
            command = command.name(),
            phase = %self.session.phase(),
            "executing command"
        );

        let result = match command {
            CombatCommand::PlayCard(hand_index) => self.play_card(hand_index),
            CombatCommand::ChooseTarget(choice) => self.choose_target(choice),
            CombatCommand::CancelTargetSelection => self.cancel_target_selection(),
            CombatCommand::EndPlayerTurn => self.end_player_turn(),
            CombatCommand::OpenOverlay => self.open_overlay(),
            CombatCommand::CloseOverlay => self.close_overlay(),
            CombatCommand::StartCombat => Err(self.wrong_phase(command)),
        };

        match result {
            Ok(()) => Ok(self.finish()),
            Err(error) => {
                self.events.clear();
                Err(error)
            }
        }
    }

    fn play_card(&mut self, hand_index: usize) -> Result<(), CombatError> {
        self.require_phase(CombatCommand::PlayCard(hand_index), CombatPhase::PlayerTurn)?;

        let card = self.affordable_card(hand_index)?.clone();
        if !card.effect.requires_target() {
            return self.commit_play(hand_index, None);
        }

        let enemy = &self.session.enemy;
        if enemy.is_dead() {
            return Err(CombatError::AlreadyDefeated {
                name: enemy.name().to_owned(),
            });
        }
        let targets = enemy.targetable_indices();
        if targets.is_empty() {
            return Err(CombatError::NoValidTarget);
        }

        self.emit(CombatEvent::TargetSelectionStarted {
            card: card.name.clone(),
            targets: targets.clone(),
        });
        self.session.selection = Some(TargetSelection {
            hand_index,
            card,
            targets,
        });
        self.set_phase(CombatPhase::SelectingTarget);
        Ok(())
    }

    fn choose_target(&mut self, choice: usize) -> Result<(), CombatError> {
        let command = CombatCommand::ChooseTarget(choice);
        self.require_phase(command, CombatPhase::SelectingTarget)?;

        let selection = self
            .session
            .selection
            .as_ref()
            .ok_or_else(|| self.wrong_phase(command))?;
        let part_index = selection
            .part_index(choice)
            .ok_or(CombatError::InvalidIndex {
                index: choice,
                len: selection.targets.len(),
            })?;
        let hand_index = selection.hand_index;

        if self.session.enemy.is_dead() {
            return Err(CombatError::AlreadyDefeated {
                name: self.session.enemy.name().to_owned(),
            });
        }
        self.affordable_card(hand_index)?;

        self.session.selection = None;
        self.set_phase(CombatPhase::PlayerTurn);
        self.commit_play(hand_index, Some(part_index))
    }

    fn cancel_target_selection(&mut self) -> Result<(), CombatError> {
        self.require_phase(
            CombatCommand::CancelTargetSelection,
            CombatPhase::SelectingTarget,
        )?;

        if let Some(selection) = self.session.selection.take() {
            self.emit(CombatEvent::TargetSelectionCancelled {
                card: selection.card.name,
            });
        }
        self.set_phase(CombatPhase::PlayerTurn);
        Ok(())
    }

    fn end_player_turn(&mut self) -> Result<(), CombatError> {
        self.require_phase(CombatCommand::EndPlayerTurn, CombatPhase::PlayerTurn)?;

        let discarded = self.session.player.end_turn();
        self.emit(CombatEvent::HandDiscarded { cards: discarded });
        self.set_phase(CombatPhase::EnemyTurn);
        self.run_enemy_turn();
        Ok(())
    }

    fn open_overlay(&mut self) -> Result<(), CombatError> {
        let resume_to = match self.session.phase() {
            CombatPhase::PlayerTurn => ResumePhase::PlayerTurn,
            CombatPhase::SelectingTarget => ResumePhase::SelectingTarget,
            _ => return Err(self.wrong_phase(CombatCommand::OpenOverlay)),
        };

        self.set_phase(CombatPhase::Paused { resume_to });
        self.emit(CombatEvent::OverlayOpened);
        Ok(())
    }

    fn close_overlay(&mut self) -> Result<(), CombatError> {
        let CombatPhase::Paused { resume_to } = self.session.phase() else {
            return Err(self.wrong_phase(CombatCommand::CloseOverlay));
        };

        self.emit(CombatEvent::OverlayClosed);
        self.set_phase(resume_to.into());
        Ok(())
    }

    /// Looks up a hand card and checks its cost without spending anything.
    fn affordable_card(&self, hand_index: usize) -> Result<&CardDefinition, CombatError> {
        let player = &self.session.player;
        let card = player
            .hand()
            .get(hand_index)
            .ok_or(CombatError::InvalidIndex {
                index: hand_index,
                len: player.hand().len(),
            })?;

        if !player.can_afford(card) {
            return Err(CombatError::InsufficientEnergy {
                required: card.cost,
                available: player.current_energy(),
            });
        }
        Ok(card)
    }

    /// Pays for the card, moves it to the discard pile, then resolves it.
    ///
    /// Callers have already validated the index, the cost, and the target.
    fn commit_play(
        &mut self,
        hand_index: usize,
        target: Option<usize>,
    ) -> Result<(), CombatError> {
        let hand_len = self.session.player.hand().len();
        let card = self
            .session
            .player
            .spend_card(hand_index)
            .ok_or(CombatError::InvalidIndex {
                index: hand_index,
                len: hand_len,
            })?;

        tracing::debug!(card = %card.name, cost = card.cost, target, "card played");
        self.emit(CombatEvent::CardPlayed {
            name: card.name.clone(),
            effect: card.effect,
            cost: card.cost,
            energy_left: self.session.player.current_energy(),
        });

        let session = &mut *self.session;
        let target = target.map(|part_index| EffectTarget::new(&mut session.enemy, part_index));
        let outcome =
            CardEffectResolver::resolve(&card, &mut session.player, target, &mut *self.rng)?;
        self.record_effect(&card, outcome);

        if !self.check_victory() {
            self.check_defeat();
        }
        Ok(())
    }

    fn record_effect(&mut self, card: &CardDefinition, outcome: EffectOutcome) {
        match outcome {
            EffectOutcome::Damage {
                part_index,
                report: Some(report),
            } => {
                self.emit(CombatEvent::PartDamaged { part_index, report });
                if report.depleted {
                    let name = self
                        .session
                        .enemy
                        .part(part_index)
                        .map(|part| part.name().to_owned())
                        .unwrap_or_default();
                    self.emit(CombatEvent::PartDestroyed { part_index, name });
                }
            }
            EffectOutcome::Damage {
                part_index,
                report: None,
            } => self.emit(CombatEvent::DamageIgnored { part_index }),
            EffectOutcome::Block { gained, total } => self.emit(CombatEvent::BlockGained {
                target: BlockTarget::Player,
                amount: gained,
                total,
            }),
            EffectOutcome::Draw(report) => self.record_draw(report),
            EffectOutcome::Acknowledged(_) => self.emit(CombatEvent::EffectAcknowledged {
                description: card.description.clone(),
            }),
        }
    }

    fn record_draw(&mut self, report: DrawReport) {
        if report.recycled > 0 {
            self.emit(CombatEvent::DeckRecycled {
                cards: report.recycled,
            });
        }
        if report.is_partial() {
            tracing::debug!(
                requested = report.requested,
                drawn = report.drawn,
                "draw and discard piles ran dry"
            );
        }
        self.emit(CombatEvent::CardsDrawn {
            requested: report.requested,
            drawn: report.drawn,
        });
    }

    /// Moves to Victory and kills the enemy if the defeat rule holds.
    fn check_victory(&mut self) -> bool {
        let enemy = &mut self.session.enemy;
        if !enemy.is_defeated() {
            return false;
        }

        let reason = match enemy.core_index().and_then(|index| enemy.part(index)) {
            Some(core) if core.is_destroyed() => "core destroyed",
            _ => "all limbs destroyed",
        };
        if enemy.die(reason) {
            self.emit(CombatEvent::EnemyDied {
                name: self.session.enemy.name().to_owned(),
                reason: reason.to_owned(),
            });
        }
        self.set_phase(CombatPhase::Victory);
        true
    }

    fn check_defeat(&mut self) -> bool {
        if !self.session.player.is_defeated() {
            return false;
        }
        self.set_phase(CombatPhase::Defeat);
        true
    }

    /// Refills energy, clears block, and draws a fresh hand.
    fn start_player_turn(&mut self) {
        self.set_phase(CombatPhase::PlayerTurn);
        self.session.turn.number += 1;

        let report = self
            .session
            .player
            .start_turn(self.config.hand_size, &mut *self.rng);
        self.emit(CombatEvent::TurnStarted {
            turn: self.session.turn.number,
            energy: self.session.player.current_energy(),
        });
        self.record_draw(report);
    }

    fn set_phase(&mut self, to: CombatPhase) {
        let from = self.session.turn.phase;
        if from == to {
            return;
        }

        self.session.turn.phase = to;
        if to.is_terminal() {
            tracing::info!(%from, %to, turn = self.session.turn.number, "combat finished");
        } else {
            tracing::debug!(%from, %to, "phase changed");
        }
        self.emit(CombatEvent::PhaseChanged { from, to });
    }

    fn require_phase(
        &self,
        command: CombatCommand,
        expected: CombatPhase,
    ) -> Result<(), CombatError> {
        if self.session.phase() == expected {
            Ok(())
        } else {
            Err(self.wrong_phase(command))
        }
    }

    fn wrong_phase(&self, command: CombatCommand) -> CombatError {
        CombatError::WrongPhase {
            command: command.name(),
            phase: self.session.phase(),
        }
    }

    fn emit(&mut self, event: CombatEvent) {
        self.events.push(event);
    }

    fn finish(&mut self) -> CommandOutcome {
        CommandOutcome {
            phase: self.session.phase(),
            events: std::mem::take(&mut self.events),
        }
    }
}
