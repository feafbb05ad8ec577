use flappy_pixel::consts::*;
use flappy_pixel::sim::{
    Avatar, DifficultyId, GamePhase, Obstacle, SessionState, TickInput, gap_for, speed_for, tick,
    update,
};

/// Hold the avatar still at `y` for the next tick under `gravity`
fn hover(state: &mut SessionState, y: f32) {
    let gravity = state.profile().gravity;
    state.avatar = Avatar { y, v_y: -gravity };
}

fn running(difficulty: DifficultyId) -> SessionState {
    let state = SessionState::new(difficulty, 2024);
    update(&state, &TickInput::flap())
}

#[test]
fn test_idle_flap_starts_run() {
    let state = SessionState::new(DifficultyId::Normal, 1);
    let next = update(&state, &TickInput::flap());

    assert_eq!(next.phase, GamePhase::Running);
    assert!(next.started());
    assert!(!next.over());
    assert_eq!(next.avatar.v_y, FLAP_VELOCITY);
    assert_eq!(next.avatar.y, WORLD_HEIGHT / 2.0);
}

#[test]
fn test_ground_contact_ends_run_and_commits_high_score() {
    let mut state = running(DifficultyId::Normal);
    state.high_score = 6;
    state.score = 7;
    state.avatar = Avatar {
        y: PLAY_HEIGHT - AVATAR_HALF,
        v_y: 3.0,
    };

    let next = update(&state, &TickInput::default());
    assert!(next.over());
    assert_eq!(next.high_score, 7);

    // Lower score leaves the previous best alone
    let mut state = running(DifficultyId::Normal);
    state.high_score = 6;
    state.score = 2;
    state.avatar.y = PLAY_HEIGHT - AVATAR_HALF;
    state.avatar.v_y = 3.0;
    let next = update(&state, &TickInput::default());
    assert!(next.over());
    assert_eq!(next.high_score, 6);
}

#[test]
fn test_pass_edge_scores_exactly_once() {
    let mut state = running(DifficultyId::Normal);
    let leading_edge = AVATAR_X - AVATAR_HALF;
    state
        .obstacles
        .push(Obstacle::new(leading_edge - 1.0, 150.0, 100.0));

    // Trailing edge starts at 99 and moves 2px per tick; it is still at or
    // ahead of the leading edge for the first 25 ticks
    for _ in 0..25 {
        hover(&mut state, 200.0);
        tick(&mut state, &TickInput::default());
        let o = state.obstacles.front().copied().unwrap();
        assert!(o.trailing_edge() >= leading_edge);
        assert!(!o.passed);
        assert_eq!(state.score, 0);
    }

    hover(&mut state, 200.0);
    tick(&mut state, &TickInput::default());
    assert!(state.obstacles.front().unwrap().passed);
    assert_eq!(state.score, 1);

    hover(&mut state, 200.0);
    tick(&mut state, &TickInput::default());
    assert_eq!(state.score, 1);
    assert_eq!(state.phase, GamePhase::Running);
}

#[test]
fn test_speed_after_ten_points_on_normal() {
    let mut state = running(DifficultyId::Normal);
    state.score = 10;
    assert_eq!(speed_for(&state.profile(), state.score), 2.5);

    state.obstacles.push(Obstacle::new(200.0, 150.0, 100.0));
    hover(&mut state, 200.0);
    tick(&mut state, &TickInput::default());
    assert_eq!(state.obstacles.front().map(|o| o.x), Some(197.5));
}

#[test]
fn test_gap_after_five_points_on_easy() {
    let mut state = running(DifficultyId::Easy);
    state.score = 5;
    assert_eq!(gap_for(&state.profile(), state.score), 110.0);

    state.frame_counter = SPAWN_INTERVAL_TICKS - 1;
    hover(&mut state, 200.0);
    tick(&mut state, &TickInput::default());

    let spawned = state.obstacles.front().copied().unwrap();
    assert_eq!(spawned.gap(), 110.0);
    assert!(spawned.top_edge >= PIPE_MARGIN);
    assert!(spawned.bottom_edge <= PLAY_HEIGHT - PIPE_MARGIN);
}

#[test]
fn test_scaling_follows_current_score() {
    // A score change between spawns affects the very next obstacle
    let mut state = running(DifficultyId::Hard);
    state.frame_counter = SPAWN_INTERVAL_TICKS - 1;
    hover(&mut state, 200.0);
    tick(&mut state, &TickInput::default());
    assert_eq!(state.obstacles.front().unwrap().gap(), 80.0);

    state.score = 15;
    state.frame_counter = 2 * SPAWN_INTERVAL_TICKS - 1;
    hover(&mut state, 200.0);
    tick(&mut state, &TickInput::default());
    let gaps: Vec<f32> = state.obstacles.iter().map(|o| o.gap()).collect();
    assert_eq!(gaps, vec![80.0, 60.0]);
}

#[test]
fn test_obstacle_collision_ends_run() {
    let mut state = running(DifficultyId::Normal);
    state.score = 4;
    state.obstacles.push(Obstacle::new(AVATAR_X - 10.0, 150.0, 100.0));
    hover(&mut state, 100.0);

    tick(&mut state, &TickInput::default());
    assert_eq!(state.phase, GamePhase::Ended);
    assert_eq!(state.high_score, 4);

    // Frozen afterwards
    let frozen = state.clone();
    for _ in 0..30 {
        tick(&mut state, &TickInput::default());
    }
    assert_eq!(state, frozen);
}

#[test]
fn test_reset_preserves_high_score_only() {
    let mut state = running(DifficultyId::Normal);
    state.score = 9;
    state.obstacles.push(Obstacle::new(200.0, 150.0, 100.0));
    state.end_session();

    let reset = update(&state, &TickInput::flap());
    assert_eq!(reset.phase, GamePhase::Idle);
    assert_eq!(reset.score, 0);
    assert_eq!(reset.high_score, 9);
    assert_eq!(reset.frame_counter, 0);
    assert!(reset.obstacles.is_empty());
    assert_eq!(reset.avatar, Avatar::default());
    assert_eq!(reset.difficulty, DifficultyId::Normal);
}

#[test]
fn test_difficulty_change_mid_run() {
    let mut state = running(DifficultyId::Normal);
    state.score = 3;
    for _ in 0..5 {
        tick(&mut state, &TickInput::default());
    }

    tick(&mut state, &TickInput::difficulty(DifficultyId::Hard));
    assert_eq!(state.phase, GamePhase::Idle);
    assert_eq!(state.difficulty, DifficultyId::Hard);
    assert_eq!(state.score, 0);
    // Never reached Ended, so nothing committed
    assert_eq!(state.high_score, 0);
}

#[test]
fn test_best_score_across_sessions() {
    let mut state = SessionState::new(DifficultyId::Normal, 5);
    let mut best = 0;
    for score in [3, 8, 2, 8, 5] {
        tick(&mut state, &TickInput::flap());
        assert_eq!(state.phase, GamePhase::Running);
        state.score = score;
        state.end_session();
        best = best.max(score);
        assert_eq!(state.high_score, best);
        tick(&mut state, &TickInput::flap());
        assert_eq!(state.phase, GamePhase::Idle);
    }
    assert_eq!(state.high_score, 8);
}

#[test]
fn test_point_scored_on_collision_tick_counts() {
    let mut state = running(DifficultyId::Normal);
    state.score = 4;
    let leading_edge = AVATAR_X - AVATAR_HALF;
    // Trailing edge crosses the leading edge on this tick
    state
        .obstacles
        .push(Obstacle::new(leading_edge + 1.0 - OBSTACLE_WIDTH, 150.0, 100.0));
    // Younger obstacle's top segment lands on the avatar
    state.obstacles.push(Obstacle::new(AVATAR_X - 8.0, 150.0, 100.0));
    hover(&mut state, 100.0);

    tick(&mut state, &TickInput::default());
    assert_eq!(state.phase, GamePhase::Ended);
    assert!(state.obstacles.front().unwrap().passed);
    assert_eq!(state.score, 5);
    assert_eq!(state.high_score, 5);
}
