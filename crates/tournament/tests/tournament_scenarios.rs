use game_tree::{
    search, strength, PlayerStrength, ScriptedPerturbation, SearchConfig, SeededPerturbation,
};
use tournament::{run_tournament, GameOutcome, Side, TournamentConfig, TournamentRunner};

fn player(name: &str, strength: f64) -> PlayerStrength {
    PlayerStrength::new(name, strength).unwrap()
}

#[test]
fn depth_one_game_value() {
    let runner = TournamentRunner::new(
        SearchConfig::with_depth(1),
        TournamentConfig {
            games: 1,
            ..Default::default()
        },
    );
    let result = runner
        .run_with(&player("nine", 9.0), &player("eight", 8.0), 0, |_| {
            ScriptedPerturbation::new(vec![0.3, 0.2])
        })
        .unwrap();

    let gap = strength(9.0).unwrap() - strength(8.0).unwrap();
    let game = &result.games[0];
    assert_eq!(game.maximizer, Side::A);
    assert_eq!(game.result.value, (gap + 0.3).max(gap - 0.2));
    assert_eq!(game.result.path, vec![0]);
    assert_eq!(game.outcome, GameOutcome::MaximizerWin);
    assert_eq!(result.wins_a, 1);
}

#[test]
fn equal_players_draw() {
    let runner = TournamentRunner::new(SearchConfig::with_depth(1), TournamentConfig::default());
    let result = runner
        .run_with(&player("x", 8.5), &player("y", 8.5), 0, |_| {
            ScriptedPerturbation::constant(0.0)
        })
        .unwrap();

    assert_eq!(result.draws, result.total_games());
    assert_eq!(result.wins_a, 0);
    assert_eq!(result.wins_b, 0);
    assert_eq!(result.score_a(), 0.5);
}

#[test]
fn four_games_alternate_roles() {
    let config = SearchConfig::with_depth(5).seeded(1);
    let result = run_tournament(&config, &player("a", 9.0), &player("b", 8.0), 0, 4).unwrap();

    let roles: Vec<Side> = result.games.iter().map(|g| g.maximizer).collect();
    assert_eq!(roles, vec![Side::A, Side::B, Side::A, Side::B]);
    for (index, game) in result.games.iter().enumerate() {
        assert_eq!(game.game_index, index as u32);
    }
}

#[test]
fn each_game_matches_a_standalone_search() {
    let config = SearchConfig::with_depth(6).seeded(77);
    let a = player("a", 4.0);
    let b = player("b", 5.0);
    let result = run_tournament(&config, &a, &b, 1, 6).unwrap();

    for game in &result.games {
        let (max, min) = match game.maximizer {
            Side::A => (a.strength, b.strength),
            Side::B => (b.strength, a.strength),
        };
        let source = SeededPerturbation::for_game(77, game.game_index);
        let expected = search(&config, max, min, &source).unwrap();
        assert_eq!(game.result, expected);
    }
}

#[test]
fn pruning_ratio_positive_on_depth_five() {
    let config = SearchConfig::with_depth(5).seeded(2024);
    let result = run_tournament(&config, &player("a", 30.0), &player("b", 0.0), 0, 20).unwrap();
    assert!(result.summary.pruning_ratio > 0.0);
    assert!(result.summary.mean_leaves_evaluated < 32.0);
    assert_eq!(result.wins_a, 20);
}
