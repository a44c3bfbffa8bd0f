//! The game engine: the only place that mutates `GameState`.
//!
//! One `GameEngine` owns one game. Each operation runs to completion and
//! returns what changed:
//! - `throw`: roll unlocked dice, use up one throw
//! - `toggle_die_selection`: hold or release dice, grouped by face
//! - `select_category`: score a category, start the next round
//! - `reset`: start over
//!
//! Presses that break a rule are not errors. They leave the board alone,
//! set `status` and come back with `accepted == false`.

use im::Vector;
use log::{debug, info, trace};
use smallvec::SmallVec;

use crate::core::{
    Action, ActionRecord, BonusStatus, CategoryId, DiceRoller, DiceSet, GameConfig, GameRng,
    GameState, Scorecard, Status, NUM_DICE,
};
use crate::error::EngineError;

use super::outcome::{CategoryOutcome, Outcome, SelectionOutcome, ThrowOutcome};

/// Rules engine for one game.
///
/// ## Example
///
/// ```
/// use rust_yatzy::{GameConfig, GameEngine};
///
/// let mut engine = GameEngine::new(GameConfig::default().with_seed(42)).unwrap();
///
/// let outcome = engine.throw();
/// assert!(outcome.accepted);
/// assert_eq!(outcome.throws_left, 2);
///
/// // Scoring has to wait until every throw is used.
/// let early = engine.select_category(0).unwrap();
/// assert!(!early.accepted);
/// ```
#[derive(Clone, Debug)]
pub struct GameEngine<R: DiceRoller = GameRng> {
    config: GameConfig,
    state: GameState,
    roller: R,
    history: Vector<ActionRecord>,
    sequence: u32,
}

impl GameEngine<GameRng> {
    /// Create an engine rolling with a `GameRng` seeded from `config.seed`.
    pub fn new(config: GameConfig) -> Result<Self, EngineError> {
        let rng = GameRng::new(config.seed);
        Self::with_roller(config, rng)
    }
}

impl<R: DiceRoller> GameEngine<R> {
    /// Create an engine with a custom dice source.
    pub fn with_roller(config: GameConfig, roller: R) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self {
            state: GameState::new(config.throws_per_round),
            config,
            roller,
            history: Vector::new(),
            sequence: 0,
        })
    }

    /// Rebuild a game by applying `actions` in order to a fresh engine.
    ///
    /// With the same config and roller seed, the result matches the game
    /// the actions were recorded from. Resets are part of the history, so
    /// the roller's stream lines up across them.
    pub fn replay<'a, I>(config: GameConfig, roller: R, actions: I) -> Result<Self, EngineError>
    where
        I: IntoIterator<Item = &'a Action>,
    {
        let mut engine = Self::with_roller(config, roller)?;
        for action in actions {
            engine.apply(action)?;
        }
        Ok(engine)
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn dice(&self) -> &DiceSet {
        &self.state.dice
    }

    #[must_use]
    pub fn throws_left(&self) -> u8 {
        self.state.throws_left
    }

    #[must_use]
    pub fn total_points(&self) -> u32 {
        self.state.total_points
    }

    #[must_use]
    pub fn categories(&self) -> &Scorecard {
        &self.state.scorecard
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.state.status
    }

    #[must_use]
    pub fn bonus_status(&self) -> BonusStatus {
        self.state.bonus_status
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.state.game_over
    }

    /// Actions applied since the engine was created, resets included.
    ///
    /// Presses ignored because the game is over change nothing and are not
    /// recorded.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// The dice source.
    #[must_use]
    pub fn roller(&self) -> &R {
        &self.roller
    }

    // === Operations ===

    /// Roll every unlocked die and use up one throw.
    pub fn throw(&mut self) -> ThrowOutcome {
        if self.state.game_over {
            debug!("throw ignored: game over");
            return ThrowOutcome::capture(&self.state, false);
        }
        self.record(Action::Throw);

        if self.state.throws_left == 0 {
            self.state.status = Status::SelectPoints;
            debug!("throw rejected: no throws left in round {}", self.state.round);
            return ThrowOutcome::capture(&self.state, false);
        }

        let rolled = self.state.dice.roll_unlocked(&mut self.roller);
        self.state.throws_left -= 1;
        self.state.status = Status::ThrowAgain;

        trace!("rolled {} dice: {:?}", rolled, self.state.dice.faces());
        debug!(
            "throw accepted: round {}, {} throws left",
            self.state.round, self.state.throws_left
        );
        ThrowOutcome::capture(&self.state, true)
    }

    /// Press the die at `index`.
    ///
    /// Pressing a held die releases every hold. Pressing a free die holds
    /// exactly the dice showing the same face, releasing any others.
    pub fn toggle_die_selection(&mut self, index: usize) -> Result<SelectionOutcome, EngineError> {
        if index >= NUM_DICE {
            return Err(EngineError::die_index(index));
        }
        if self.state.game_over {
            debug!("toggle ignored: game over");
            return Ok(SelectionOutcome::capture(&self.state, false));
        }
        self.record(Action::ToggleDie(index));

        if self.state.is_round_start() {
            self.state.status = Status::ThrowFirst;
            debug!("toggle rejected: no throw yet in round {}", self.state.round);
            return Ok(SelectionOutcome::capture(&self.state, false));
        }

        let die = self.state.dice[index];
        match die.face {
            Some(face) if !die.locked => self.state.dice.lock_matching(face),
            _ => self.state.dice.unlock_all(),
        }

        debug!(
            "toggle accepted: die {}, locked {:?}",
            index,
            self.state.dice.locked_flags()
        );
        Ok(SelectionOutcome::capture(&self.state, true))
    }

    /// Score the category at `index` with the current dice.
    pub fn select_category(&mut self, index: usize) -> Result<CategoryOutcome, EngineError> {
        let id = CategoryId::new(index).ok_or_else(|| EngineError::category_index(index))?;
        if self.state.game_over {
            debug!("category {} ignored: game over", id);
            return Ok(CategoryOutcome::capture(&self.state, false));
        }
        self.record(Action::SelectCategory(index));

        if self.state.throws_left != 0 {
            self.state.status = Status::ThrowAllFirst {
                throws: self.state.throws_per_round(),
            };
            debug!(
                "category {} rejected: {} throws left",
                id, self.state.throws_left
            );
            return Ok(CategoryOutcome::capture(&self.state, false));
        }
        if self.state.scorecard.is_filled(id) {
            self.state.status = Status::AlreadySelected(id);
            debug!("category {} rejected: already filled", id);
            return Ok(CategoryOutcome::capture(&self.state, false));
        }

        let points = id.score(&self.state.dice);
        self.state.scorecard.fill(id, points);
        self.state.total_points += points;
        self.state.bonus_status =
            BonusStatus::evaluate(self.state.total_points, self.config.bonus_threshold);
        self.state.status = Status::ThrowDice;
        debug!(
            "category {} scored {} in round {}, total {}",
            id, points, self.state.round, self.state.total_points
        );
        self.state.start_next_round();

        self.check_game_over();
        Ok(CategoryOutcome::capture(&self.state, true))
    }

    /// Start a new game. The dice stay blank until the next throw.
    pub fn reset(&mut self) -> GameState {
        self.record(Action::Reset);
        self.state = GameState::new(self.config.throws_per_round);
        debug!("game reset");
        self.state.clone()
    }

    /// Apply any action.
    pub fn apply(&mut self, action: &Action) -> Result<Outcome, EngineError> {
        Ok(match *action {
            Action::Throw => Outcome::Throw(self.throw()),
            Action::ToggleDie(i) => Outcome::Selection(self.toggle_die_selection(i)?),
            Action::SelectCategory(i) => Outcome::Category(self.select_category(i)?),
            Action::Reset => Outcome::Reset(self.reset()),
        })
    }

    /// Actions the board currently offers that the rules would accept.
    ///
    /// `Reset` is only offered once the game is over.
    #[must_use]
    pub fn legal_actions(&self) -> SmallVec<[Action; 12]> {
        let mut actions = SmallVec::new();

        if self.state.game_over {
            actions.push(Action::Reset);
            return actions;
        }
        if self.state.throws_left > 0 {
            actions.push(Action::Throw);
        }
        if !self.state.is_round_start() {
            actions.extend((0..NUM_DICE).map(Action::ToggleDie));
        }
        if self.state.throws_left == 0 {
            actions.extend(self.state.scorecard.open().map(|id| Action::SelectCategory(id.index())));
        }

        actions
    }

    // === Internals ===

    fn record(&mut self, action: Action) {
        let record = ActionRecord::new(action, self.state.round, self.sequence);
        self.sequence += 1;
        self.history.push_back(record);
    }

    fn check_game_over(&mut self) {
        if self.state.scorecard.is_complete() {
            self.state.finish();
            info!(
                "game over: {} points, bonus {}",
                self.state.total_points,
                if self.state.bonus_status.is_achieved() { "achieved" } else { "missed" }
            );
        }
    }
}
