use proptest::prelude::*;

use flappy_pixel::consts::*;
use flappy_pixel::sim::{
    Avatar, DifficultyId, GamePhase, SessionState, TickInput, Transition, gap_for, is_spawn_tick,
    tick, transition,
};

fn difficulty() -> impl Strategy<Value = DifficultyId> {
    prop_oneof![
        Just(DifficultyId::Easy),
        Just(DifficultyId::Normal),
        Just(DifficultyId::Hard),
    ]
}

/// Mostly quiet ticks, some flaps, rare difficulty switches
fn tick_input() -> impl Strategy<Value = TickInput> {
    (prop::bool::weighted(0.12), 0u8..200).prop_map(|(flap, roll)| TickInput {
        flap,
        set_difficulty: match roll {
            0 => Some(DifficultyId::Easy),
            1 => Some(DifficultyId::Normal),
            2 => Some(DifficultyId::Hard),
            _ => None,
        },
    })
}

fn inputs() -> impl Strategy<Value = Vec<TickInput>> {
    prop::collection::vec(tick_input(), 1..1500)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn score_only_moves_by_pass_edges(seed in any::<u64>(), start in difficulty(), inputs in inputs()) {
        let mut state = SessionState::new(start, seed);

        for input in &inputs {
            let prev = state.clone();
            tick(&mut state, input);

            let stepped = matches!(transition(prev.phase, input.event()), Transition::Step { .. });
            if !stepped {
                continue;
            }

            prop_assert!(state.score >= prev.score);

            let spawned = usize::from(
                state.frame_counter == prev.frame_counter + 1 && is_spawn_tick(state.frame_counter),
            );
            let retired = prev.obstacles.len() + spawned - state.obstacles.len();

            // Surviving obstacles keep their order; passed never reverts
            let mut flips = 0;
            for (before, after) in prev.obstacles.iter().skip(retired).zip(state.obstacles.iter()) {
                prop_assert!(!before.passed || after.passed);
                if !before.passed && after.passed {
                    flips += 1;
                }
            }
            prop_assert_eq!(state.score - prev.score, flips);
        }
    }

    #[test]
    fn high_score_is_best_ended_score(seed in any::<u64>(), start in difficulty(), inputs in inputs()) {
        let mut state = SessionState::new(start, seed);
        let mut best = 0;

        for input in &inputs {
            let prev_phase = state.phase;
            tick(&mut state, input);
            if prev_phase == GamePhase::Running && state.phase == GamePhase::Ended {
                best = best.max(state.score);
            }
            prop_assert_eq!(state.high_score, best);
        }
    }

    #[test]
    fn spawned_obstacles_respect_gap_and_margins(seed in any::<u64>(), start in difficulty(), inputs in inputs()) {
        let mut state = SessionState::new(start, seed);

        for input in &inputs {
            let prev = state.clone();
            tick(&mut state, input);

            let spawned = prev.phase == GamePhase::Running
                && state.frame_counter == prev.frame_counter + 1
                && is_spawn_tick(state.frame_counter);
            if !spawned {
                continue;
            }

            let newest = state.obstacles.iter().last().copied();
            prop_assert!(newest.is_some());
            if let Some(o) = newest {
                let expected = gap_for(&prev.profile(), prev.score);
                prop_assert!((o.gap() - expected).abs() < 1e-3);
                prop_assert!(o.top_edge >= PIPE_MARGIN);
                prop_assert!(o.bottom_edge <= PLAY_HEIGHT - PIPE_MARGIN);
            }
        }
    }

    #[test]
    fn avatar_stays_in_bounds(seed in any::<u64>(), start in difficulty(), inputs in inputs()) {
        let mut state = SessionState::new(start, seed);
        for input in &inputs {
            tick(&mut state, input);
            prop_assert!(state.avatar.y >= AVATAR_HALF);
            prop_assert!(state.avatar.y <= PLAY_HEIGHT - AVATAR_HALF);
        }
    }

    #[test]
    fn ended_is_frozen(seed in any::<u64>(), start in difficulty(), inputs in inputs(), quiet in 1usize..50) {
        let mut state = SessionState::new(start, seed);
        for input in &inputs {
            tick(&mut state, input);
        }
        // Fly into the ground if the run is still going
        while state.phase == GamePhase::Running {
            tick(&mut state, &TickInput::default());
        }
        if state.phase == GamePhase::Ended {
            let frozen = state.clone();
            for _ in 0..quiet {
                tick(&mut state, &TickInput::default());
            }
            prop_assert_eq!(state, frozen);
        }
    }

    #[test]
    fn reset_yields_canonical_idle(seed in any::<u64>(), start in difficulty(), inputs in inputs()) {
        let mut state = SessionState::new(start, seed);
        for input in &inputs {
            tick(&mut state, input);
        }
        let high_score = state.high_score;
        let difficulty = state.difficulty;

        state.reset();
        prop_assert_eq!(state.phase, GamePhase::Idle);
        prop_assert_eq!(state.score, 0);
        prop_assert_eq!(state.frame_counter, 0);
        prop_assert!(state.obstacles.is_empty());
        prop_assert_eq!(state.avatar, Avatar::default());
        prop_assert_eq!(state.avatar.y, WORLD_HEIGHT / 2.0);
        prop_assert_eq!(state.high_score, high_score);
        prop_assert_eq!(state.difficulty, difficulty);
    }
}
