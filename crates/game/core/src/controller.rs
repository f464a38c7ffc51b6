//! Single dispatch entry point.
//!
//! [`CombatController`] owns the configured templates, the random source, and
//! at most one [`CombatSession`]. Presentation layers call [`dispatch`] once
//! per external event and read state through [`session`].
//!
//! [`dispatch`]: CombatController::dispatch
//! [`session`]: CombatController::session

use crate::config::CombatConfig;
use crate::engine::{CombatCommand, CombatEngine, CombatError, CommandOutcome};
use crate::error::GameError;
use crate::rng::{PcgRng, RandomSource};
use crate::state::{CombatPhase, CombatSession};
use crate::template::{ConstructionError, EnemyTemplate, PlayerTemplate};

/// Everything needed to build sessions.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatSetup {
    pub config: CombatConfig,
    pub player: PlayerTemplate,
    pub enemy: EnemyTemplate,
}

impl CombatSetup {
    pub fn new(config: CombatConfig, player: PlayerTemplate, enemy: EnemyTemplate) -> Self {
        Self {
            config,
            player,
            enemy,
        }
    }

    pub fn validate(&self) -> Result<(), ConstructionError> {
        self.player.validate()?;
        self.enemy.validate()
    }
}

pub struct CombatController<R: RandomSource = PcgRng> {
    setup: CombatSetup,
    rng: R,
    session: Option<CombatSession>,
}

impl CombatController<PcgRng> {
    /// Controller using the PCG generator seeded from the config (0 if unset).
    pub fn seeded(setup: CombatSetup) -> Result<Self, ConstructionError> {
        let rng = PcgRng::new(setup.config.seed.unwrap_or_default());
        Self::new(setup, rng)
    }
}

impl<R: RandomSource> CombatController<R> {
    /// Validates the templates up front so a bad configuration never reaches
    /// a running combat.
    pub fn new(setup: CombatSetup, rng: R) -> Result<Self, ConstructionError> {
        setup.validate()?;
        Ok(Self {
            setup,
            rng,
            session: None,
        })
    }

    pub fn setup(&self) -> &CombatSetup {
        &self.setup
    }

    /// Current session, including a finished one that has not been replaced.
    pub fn session(&self) -> Option<&CombatSession> {
        self.session.as_ref()
    }

    pub fn phase(&self) -> Option<CombatPhase> {
        self.session.as_ref().map(CombatSession::phase)
    }

    /// Applies one command.
    ///
    /// `StartCombat` builds a new session when none exists or the current one
    /// is finished. Every other command needs a session.
    pub fn dispatch(&mut self, command: CombatCommand) -> Result<CommandOutcome, CombatError> {
        let result = match command {
            CombatCommand::StartCombat => self.start_combat(),
            _ => match self.session.as_mut() {
                Some(session) => {
                    CombatEngine::new(session, &self.setup.config, &mut self.rng).execute(command)
                }
                None => Err(CombatError::NoSession),
            },
        };

        if let Err(error) = &result {
            tracing::warn!(
                command = command.name(),
                code = error.error_code(),
                severity = error.severity().as_str(),
                %error,
                "command rejected"
            );
        }
        result
    }

    fn start_combat(&mut self) -> Result<CommandOutcome, CombatError> {
        if let Some(session) = &self.session {
            if !session.is_finished() {
                return Err(CombatError::WrongPhase {
                    command: CombatCommand::StartCombat.name(),
                    phase: session.phase(),
                });
            }
        }

        let mut session =
            CombatSession::new(&self.setup.player, &self.setup.enemy, &mut self.rng)?;
        let outcome = CombatEngine::new(&mut session, &self.setup.config, &mut self.rng).begin()?;
        tracing::info!(
            enemy = %self.setup.enemy.name,
            hand_size = self.setup.config.hand_size,
            "combat started"
        );
        self.session = Some(session);
        Ok(outcome)
    }
}
