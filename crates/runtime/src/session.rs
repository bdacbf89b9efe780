//! Session orchestration: party assembly, the opening spawn wave, and the
//! submit/finish loop around [`valor_core::GameEngine`].

use tracing::{info, warn};
use valor_core::{
    ActionReport, BoardState, GameConfig, GameEngine, GameError, GameState, HeroAction, HeroId,
    HeroOracle, Position, RoundPhase, RoundReport, Victory, compute_seed,
};
use valor_core::env::context;

use crate::error::{Result, RuntimeError};
use crate::oracle::OracleManager;

/// Builds a [`Session`]: pick heroes by name, optionally fix the seed.
///
/// Without an explicit seed one is drawn from OS entropy; the chosen value
/// is recorded in the state, so any session can be replayed.
pub struct SessionBuilder {
    seed: Option<u64>,
    party: Vec<String>,
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self {
            seed: None,
            party: Vec::new(),
        }
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Adds a hero by template name. Heroes occupy lanes in the order
    /// they are added.
    pub fn hero(mut self, name: impl Into<String>) -> Self {
        self.party.push(name.into());
        self
    }

    pub fn build(self, oracles: OracleManager) -> Result<Session> {
        if self.party.is_empty() || self.party.len() > GameConfig::MAX_PARTY {
            return Err(RuntimeError::InvalidPartySize {
                got: self.party.len(),
                max: GameConfig::MAX_PARTY,
            });
        }

        let seed = self.seed.unwrap_or_else(rand::random);
        let board = BoardState::generate(oracles.config(), &valor_core::PcgRng, seed);
        let mut state = GameState::new(seed, board);

        for (lane, name) in self.party.iter().enumerate() {
            let template = oracles
                .heroes()
                .by_name(name)
                .ok_or_else(|| RuntimeError::UnknownHero(name.clone()))?
                .clone();
            state
                .add_hero(&template, lane)
                .map_err(RuntimeError::PartySetup)?;
        }

        opening_wave(&mut state, &oracles)?;

        info!(
            seed,
            party = self.party.len(),
            monsters = state.monsters.len(),
            "session started"
        );
        Ok(Session { state, oracles })
    }
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Spawns the opening monster per lane on the monster nexus, mirroring
/// the recurring wave's seed derivation so replays line up.
fn opening_wave(state: &mut GameState, oracles: &OracleManager) -> Result<()> {
    let env = oracles.env();
    let rng = env.rng().map_err(valor_core::ExecuteError::from)?;
    let templates = env.monsters().map_err(valor_core::ExecuteError::from)?;

    for lane in 0..GameConfig::LANE_COUNT {
        let position = Position::new(
            state.board.monster_nexus_row(),
            BoardState::lane_anchor(lane),
        );
        let nonce = state.turn.nonce;
        state.turn.nonce += 1;
        let seed = compute_seed(state.game_seed, nonce, lane as u32, context::SPAWN);
        let template = templates
            .pick(rng.next_u32(seed))
            .ok_or(valor_core::OracleError::NoMonsterTemplates)
            .map_err(valor_core::ExecuteError::from)?
            .clone();
        state
            .spawn_monster(&template, 1, position)
            .map_err(RuntimeError::OpeningWave)?;
    }
    Ok(())
}

/// One running game: owns the state and the oracles feeding it.
#[derive(Debug)]
pub struct Session {
    state: GameState,
    oracles: OracleManager,
}

impl Session {
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn oracles(&self) -> &OracleManager {
        &self.oracles
    }

    pub fn victory(&self) -> Option<Victory> {
        self.state.victory
    }

    /// The hero expected to act next, if the hero phase is running.
    pub fn current_hero(&self) -> Option<HeroId> {
        match self.state.turn.phase {
            RoundPhase::Heroes if self.state.victory.is_none() => self.state.current_hero(),
            _ => None,
        }
    }

    /// Submits one hero action to the engine.
    pub fn submit(&mut self, action: HeroAction) -> Result<ActionReport> {
        let span = tracing::info_span!(
            "action",
            hero = %action.actor(),
            kind = action.as_snake_case(),
            round = self.state.turn.round,
        );
        let _guard = span.enter();

        let env = self.oracles.env();
        let mut engine = GameEngine::new(&mut self.state);
        match engine.execute(action, &env) {
            Ok(report) => {
                info!(nonce = report.nonce, outcome = ?report.outcome, "executed");
                Ok(report)
            }
            Err(err) => {
                warn!(
                    code = err.error_code(),
                    severity = err.severity().as_str(),
                    %err,
                    "rejected"
                );
                Err(err.into())
            }
        }
    }

    /// Finishes the round once every hero has acted.
    pub fn finish_round(&mut self) -> Result<RoundReport> {
        let round = self.state.turn.round;
        let span = tracing::info_span!("round", round);
        let _guard = span.enter();

        let env = self.oracles.env();
        let mut engine = GameEngine::new(&mut self.state);
        match engine.finish_round(&env) {
            Ok(report) => {
                info!(
                    events = report.events.len(),
                    spawned = report.spawned.len(),
                    respawned = report.respawned.len(),
                    victory = ?report.victory,
                    "finished"
                );
                Ok(report)
            }
            Err(err) => {
                warn!(code = err.error_code(), %err, "round not finished");
                Err(err.into())
            }
        }
    }
}
