use crate::club::Team;
use crate::league::League;
use crate::r#match::PastGame;
use std::cmp::Ordering;

/// Orders teams with the seeding tiebreak cascade: wins, head-to-head wins,
/// in-division wins (same division only), strength of schedule, point
/// differential and finally reverse name order. Only this season's games count.
pub struct TeamRanking<'l> {
    league: &'l League,
}

impl<'l> TeamRanking<'l> {
    pub fn new(league: &'l League) -> Self {
        TeamRanking { league }
    }

    pub fn compare(&self, a: &Team, b: &Team) -> Ordering {
        b.record
            .wins
            .cmp(&a.record.wins)
            .then_with(|| self.head_to_head_wins(&b.name, &a.name).cmp(&self.head_to_head_wins(&a.name, &b.name)))
            .then_with(|| {
                if !a.division.is_empty() && a.division == b.division {
                    self.division_wins(b).cmp(&self.division_wins(a))
                } else {
                    Ordering::Equal
                }
            })
            .then_with(|| self.strength_of_schedule(&b.name).total_cmp(&self.strength_of_schedule(&a.name)))
            .then_with(|| b.point_differential().cmp(&a.point_differential()))
            .then_with(|| b.name.cmp(&a.name))
    }

    /// Stable insertion sort. Head-to-head can form cycles, so the comparator
    /// is not guaranteed to be a total order and std sorts may reject it.
    pub fn sort<'t>(&self, teams: impl IntoIterator<Item = &'t Team>) -> Vec<&'t Team> {
        let mut sorted: Vec<&Team> = Vec::new();

        for team in teams {
            let at = sorted
                .iter()
                .position(|placed| self.compare(team, placed) == Ordering::Less)
                .unwrap_or(sorted.len());

            sorted.insert(at, team);
        }

        sorted
    }

    pub fn head_to_head_wins(&self, team: &str, opponent: &str) -> usize {
        self.season_games()
            .filter(|g| g.between(team, opponent) && g.winner() == team)
            .count()
    }

    pub fn division_wins(&self, team: &Team) -> usize {
        self.season_games()
            .filter(|g| g.won_by(&team.name))
            .filter_map(|g| g.opponent_of(&team.name))
            .filter(|opponent| {
                self.league
                    .team(opponent)
                    .is_some_and(|t| t.division == team.division)
            })
            .count()
    }

    /// Average current win percentage of the opponents faced, rounded to two decimals.
    pub fn strength_of_schedule(&self, team: &str) -> f64 {
        let percentages: Vec<f64> = self
            .season_games()
            .filter_map(|g| g.opponent_of(team))
            .map(|opponent| {
                self.league
                    .team(opponent)
                    .map(|t| t.record.win_percentage())
                    .unwrap_or(0.0)
            })
            .collect();

        if percentages.is_empty() {
            return 0.0;
        }

        let average = percentages.iter().sum::<f64>() / percentages.len() as f64;

        (average * 100.0).round() / 100.0
    }

    fn season_games(&self) -> impl Iterator<Item = &'l PastGame> {
        let season = self.league.season;

        self.league.past_games.iter().filter(move |g| g.season == season)
    }
}

impl League {
    /// Every team, best first, by the seeding comparator.
    pub fn standings(&self) -> Vec<&Team> {
        TeamRanking::new(self).sort(self.all_teams())
    }
}
