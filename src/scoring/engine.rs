use std::cmp::Ordering;

use crate::model::{GameScores, MatchFormat, MatchResult, SetScore, Side};

/// Set and match rules for recreational play.
///
/// Any final tally with at least one game is accepted: there is no
/// win-by-two or six-game minimum, and drawn sets and matches are allowed.
pub struct TennisScoring;

impl TennisScoring {
    pub fn is_valid_set_score(team1_games: i32, team2_games: i32) -> bool {
        team1_games >= 0 && team2_games >= 0 && (team1_games > 0 || team2_games > 0)
    }

    /// Whether the UI should prompt for tie-break points. Not enforced.
    pub fn needs_tie_breaker(team1_games: i32, team2_games: i32) -> bool {
        team1_games == 6 && team2_games == 6
    }

    pub fn is_valid_tie_breaker(team1_points: i32, team2_points: i32) -> bool {
        team1_points >= 0 && team2_points >= 0 && (team1_points > 0 || team2_points > 0)
    }

    /// A recorded tie-break decides the set, whatever the game counts say.
    pub fn get_set_winner(set: &SetScore) -> Option<Side> {
        let (team1, team2) = match set.tie_breaker {
            Some(tb) => (tb.team1_points, tb.team2_points),
            None => (set.team1_games, set.team2_games),
        };
        match team1.cmp(&team2) {
            Ordering::Greater => Some(Side::One),
            Ordering::Less => Some(Side::Two),
            Ordering::Equal => None,
        }
    }

    /// Tally sets and pick a winner. Total over any number of sets.
    ///
    /// A team reaching the format's set count wins outright; otherwise the
    /// team with more sets wins, and equal tallies leave no winner.
    pub fn calculate_match_result(sets: &[SetScore], match_format: MatchFormat) -> MatchResult {
        let (team1_sets_won, team2_sets_won) = sets
            .iter()
            .filter_map(Self::get_set_winner)
            .fold((0u32, 0u32), |(t1, t2), side| match side {
                Side::One => (t1 + 1, t2),
                Side::Two => (t1, t2 + 1),
            });

        let needed = match_format.sets_to_win();
        let winner = if team1_sets_won >= needed {
            Some(Side::One)
        } else if team2_sets_won >= needed {
            Some(Side::Two)
        } else {
            match team1_sets_won.cmp(&team2_sets_won) {
                Ordering::Greater => Some(Side::One),
                Ordering::Less => Some(Side::Two),
                Ordering::Equal => None,
            }
        };

        MatchResult {
            team1_sets_won,
            team2_sets_won,
            winner,
            game_scores: GameScores {
                sets: sets.to_vec(),
                match_format,
            },
        }
    }

    /// `"g1-g2"`, plus the lower tie-break score in parentheses, e.g. `"7-6(4)"`.
    pub fn format_set_score(set: &SetScore) -> String {
        match set.tie_breaker {
            Some(tb) => format!(
                "{}-{}({})",
                set.team1_games,
                set.team2_games,
                tb.team1_points.min(tb.team2_points)
            ),
            None => format!("{}-{}", set.team1_games, set.team2_games),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_set_score_validity() {
        assert!(TennisScoring::is_valid_set_score(6, 4));
        assert!(TennisScoring::is_valid_set_score(0, 1));
        assert!(TennisScoring::is_valid_set_score(3, 3));
        assert!(!TennisScoring::is_valid_set_score(0, 0));
        assert!(!TennisScoring::is_valid_set_score(-1, 3));
        assert!(!TennisScoring::is_valid_set_score(3, -1));
    }

    #[test]
    fn test_needs_tie_breaker() {
        assert!(TennisScoring::needs_tie_breaker(6, 6));
        assert!(!TennisScoring::needs_tie_breaker(7, 5));
        assert!(!TennisScoring::needs_tie_breaker(5, 5));
    }

    #[test]
    fn test_tie_breaker_validity() {
        assert!(TennisScoring::is_valid_tie_breaker(7, 5));
        assert!(TennisScoring::is_valid_tie_breaker(0, 7));
        assert!(!TennisScoring::is_valid_tie_breaker(0, 0));
        assert!(!TennisScoring::is_valid_tie_breaker(-2, 7));
    }

    #[test]
    fn test_set_winner_by_games() {
        assert_eq!(
            TennisScoring::get_set_winner(&SetScore::new(6, 3)),
            Some(Side::One)
        );
        assert_eq!(
            TennisScoring::get_set_winner(&SetScore::new(2, 6)),
            Some(Side::Two)
        );
        assert_eq!(TennisScoring::get_set_winner(&SetScore::new(4, 4)), None);
    }

    #[test]
    fn test_set_winner_by_tie_breaker() {
        let set = SetScore::new(7, 6).with_tie_breaker(7, 5);
        assert_eq!(TennisScoring::get_set_winner(&set), Some(Side::One));

        let set = SetScore::new(6, 6).with_tie_breaker(3, 7);
        assert_eq!(TennisScoring::get_set_winner(&set), Some(Side::Two));

        // tie-break overrides the game tally
        let set = SetScore::new(7, 6).with_tie_breaker(4, 7);
        assert_eq!(TennisScoring::get_set_winner(&set), Some(Side::Two));
    }

    #[test]
    fn test_match_result_best_of_three() {
        let sets = [SetScore::new(6, 4), SetScore::new(4, 6), SetScore::new(6, 2)];
        let result = TennisScoring::calculate_match_result(&sets, MatchFormat::BestOf3);
        assert_eq!(result.team1_sets_won, 2);
        assert_eq!(result.team2_sets_won, 1);
        assert_eq!(result.winner, Some(Side::One));
        assert_eq!(result.game_scores.sets, sets.to_vec());
        assert_eq!(result.game_scores.match_format, MatchFormat::BestOf3);
    }

    #[test]
    fn test_match_result_split_sets_is_tie() {
        let sets = [SetScore::new(6, 4), SetScore::new(4, 6)];
        let result = TennisScoring::calculate_match_result(&sets, MatchFormat::BestOf3);
        assert_eq!(result.team1_sets_won, 1);
        assert_eq!(result.team2_sets_won, 1);
        assert_eq!(result.winner, None);
    }

    #[test]
    fn test_match_result_partial_match_leader_wins() {
        let sets = [SetScore::new(3, 6), SetScore::new(5, 5)];
        let result = TennisScoring::calculate_match_result(&sets, MatchFormat::BestOf5);
        assert_eq!(result.team1_sets_won, 0);
        assert_eq!(result.team2_sets_won, 1);
        assert_eq!(result.winner, Some(Side::Two));
    }

    #[test]
    fn test_match_result_empty_and_overlong() {
        let result = TennisScoring::calculate_match_result(&[], MatchFormat::BestOf3);
        assert_eq!(result.winner, None);
        assert_eq!(result.team1_sets_won + result.team2_sets_won, 0);

        let sets = vec![SetScore::new(1, 6); 5];
        let result = TennisScoring::calculate_match_result(&sets, MatchFormat::BestOf3);
        assert_eq!(result.team2_sets_won, 5);
        assert_eq!(result.winner, Some(Side::Two));
    }

    #[test]
    fn test_match_result_serializes_winner_as_number() {
        let sets = [SetScore::new(6, 1), SetScore::new(6, 2)];
        let result = TennisScoring::calculate_match_result(&sets, MatchFormat::BestOf3);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["winner"], 1);
        assert_eq!(json["game_scores"]["match_format"], "best_of_3");
        assert_eq!(
            json["game_scores"]["sets"][0]["tie_breaker"],
            serde_json::Value::Null
        );
    }

    #[test]
    fn test_format_set_score() {
        let set = SetScore::new(7, 6).with_tie_breaker(7, 5);
        assert_eq!(TennisScoring::format_set_score(&set), "7-6(5)");

        let set = SetScore::new(6, 7).with_tie_breaker(4, 7);
        assert_eq!(TennisScoring::format_set_score(&set), "6-7(4)");

        assert_eq!(TennisScoring::format_set_score(&SetScore::new(6, 2)), "6-2");
    }

    proptest! {
        #[test]
        fn prop_any_positive_tally_is_valid(a in 0i32..100, b in 0i32..100) {
            prop_assume!(a + b > 0);
            prop_assert!(TennisScoring::is_valid_set_score(a, b));
        }

        #[test]
        fn prop_sets_won_never_exceed_sets_played(
            games in proptest::collection::vec((0i32..8, 0i32..8), 0..7)
        ) {
            let sets: Vec<SetScore> = games.iter().map(|&(a, b)| SetScore::new(a, b)).collect();
            let result = TennisScoring::calculate_match_result(&sets, MatchFormat::BestOf5);
            prop_assert!((result.team1_sets_won + result.team2_sets_won) as usize <= sets.len());
        }
    }
}
