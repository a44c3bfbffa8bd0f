//! Property tests over random press sequences.
//!
//! Whatever the player presses, in whatever order, the engine must keep
//! its counters in range and its totals consistent.

use proptest::prelude::*;

use rust_yatzy::{
    Action, CategoryId, GameConfig, GameEngine, GameState, BONUS_POINTS, NUM_CATEGORIES,
    NUM_THROWS,
};

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        6 => Just(Action::Throw),
        4 => (0..6usize).prop_map(Action::ToggleDie),
        4 => (0..7usize).prop_map(Action::SelectCategory),
        1 => Just(Action::Reset),
    ]
}

fn check_invariants(state: &GameState) -> Result<(), TestCaseError> {
    prop_assert!(state.throws_left <= NUM_THROWS);
    prop_assert_eq!(state.total_points, state.scorecard.total());
    prop_assert_eq!(state.game_over, state.scorecard.is_complete());
    if state.game_over {
        prop_assert_eq!(state.throws_left, 0);
    }
    if state.scorecard.filled_count() > 0 {
        prop_assert_eq!(
            state.bonus_status.is_achieved(),
            state.total_points >= BONUS_POINTS
        );
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Invariants hold after every press, accepted or not.
    #[test]
    fn prop_invariants_hold(seed in any::<u64>(), actions in prop::collection::vec(action_strategy(), 0..300)) {
        let mut engine = GameEngine::new(GameConfig::default().with_seed(seed)).unwrap();

        for action in &actions {
            let before = engine.state().clone();
            let result = engine.apply(action);

            match result {
                Err(_) => {
                    // Only out-of-range indices fail, and they touch nothing.
                    prop_assert!(matches!(action, Action::ToggleDie(i) | Action::SelectCategory(i) if *i >= 5));
                    prop_assert_eq!(engine.state(), &before);
                }
                Ok(outcome) if !outcome.is_accepted() => {
                    prop_assert!(engine.state().same_board(&before));
                }
                Ok(_) => {
                    if let Action::SelectCategory(i) = action {
                        let id = CategoryId::new(*i).unwrap();
                        prop_assert_eq!(engine.categories()[id].points, id.score(&before.dice));
                        prop_assert_eq!(
                            engine.total_points(),
                            before.total_points + id.score(&before.dice)
                        );
                    }
                    if let Action::Throw = action {
                        prop_assert_eq!(engine.throws_left() + 1, before.throws_left);
                        prop_assert!(engine.dice().is_rolled());
                        for (old, new) in before.dice.iter().zip(engine.dice().iter()) {
                            if old.locked {
                                prop_assert_eq!(old.face, new.face);
                            }
                        }
                    }
                }
            }

            if before.game_over && !matches!(action, Action::Reset) {
                prop_assert_eq!(engine.state(), &before);
            }
            check_invariants(engine.state())?;
        }
    }

    /// Playing only offered actions always finishes in six rounds.
    #[test]
    fn prop_legal_play_finishes(seed in any::<u64>(), picks in prop::collection::vec(any::<prop::sample::Index>(), 200)) {
        let mut engine = GameEngine::new(GameConfig::default().with_seed(seed)).unwrap();

        for pick in &picks {
            if engine.is_game_over() {
                break;
            }
            let legal = engine.legal_actions();
            let action = legal[pick.index(legal.len())];
            let outcome = engine.apply(&action).unwrap();
            prop_assert!(outcome.is_accepted(), "offered action {} was rejected", action);
        }

        // Finish deterministically if the random walk ran out of picks.
        let mut next = 0;
        while !engine.is_game_over() {
            while engine.throws_left() > 0 {
                engine.throw();
            }
            while engine.categories().is_filled(CategoryId::new(next).unwrap()) {
                next += 1;
            }
            engine.select_category(next).unwrap();
        }

        prop_assert!(engine.state().round as usize <= NUM_CATEGORIES + 1);
        check_invariants(engine.state())?;
    }

    /// Holding by face never locks dice with a different face.
    #[test]
    fn prop_holds_share_one_face(seed in any::<u64>(), presses in prop::collection::vec(0..5usize, 1..20)) {
        let mut engine = GameEngine::new(GameConfig::default().with_seed(seed)).unwrap();
        engine.throw();

        for index in presses {
            engine.toggle_die_selection(index).unwrap();
            let locked: Vec<_> = engine.dice().iter().filter(|d| d.locked).map(|d| d.face).collect();
            if let Some(first) = locked.first() {
                prop_assert!(locked.iter().all(|f| f == first));
                let matching = engine.dice().iter().filter(|d| d.face == *first).count();
                prop_assert_eq!(matching, locked.len());
            }
        }
    }
}
