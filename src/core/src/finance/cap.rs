use crate::club::Team;
use crate::league::League;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapProjection {
    pub season: u32,
    pub payroll: i64,
}

impl League {
    /// League-wide payroll for the next `seasons` seasons. Standing dead
    /// money counts against the current season only.
    pub fn get_cap_projection(&self, seasons: u32) -> Vec<CapProjection> {
        (0..seasons)
            .map(|offset| {
                let season = self.season + offset;

                let mut payroll: i64 = self.all_teams().map(|t| t.payroll(season)).sum();

                if offset == 0 {
                    payroll += self.dead_money;
                }

                CapProjection { season, payroll }
            })
            .collect()
    }

    pub fn team_payroll(&self, team: &Team) -> i64 {
        team.payroll(self.season)
    }

    /// Cash must cover the cost. With the cap enabled a signing may only push
    /// payroll over the limit for teams that gamble on the cap.
    pub fn can_afford_signing(&self, team: &Team, cost: i64) -> bool {
        if cost > team.balance {
            return false;
        }

        if !self.settings.salary_cap {
            return true;
        }

        if self.team_payroll(team) + cost <= self.settings.salary_cap_amount {
            return true;
        }

        team.persona.gambles_on_cap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::{Contract, Persona, PersonaStyle};
    use crate::league::tests::test_league;

    #[test]
    fn test_projection_counts_dead_money_once() {
        let mut league = test_league();
        let base = league.get_cap_projection(1)[0].payroll;

        league.dead_money = 5000;
        let projection = league.get_cap_projection(3);

        assert_eq!(projection.len(), 3);
        assert_eq!(projection[0].season, 1);
        assert_eq!(projection[0].payroll, base + 5000);
        assert_eq!(projection[1].payroll, base);
        assert_eq!(projection[2].season, 3);
    }

    #[test]
    fn test_projection_drops_bonus_after_term() {
        let mut league = test_league();
        league.user_team.roster[0].contract = Contract::new(2, 5000).with_bonus(4000, 4000).starting(1);

        let projection = league.get_cap_projection(3);

        assert_eq!(projection[0].payroll - projection[2].payroll, 2000);
        assert_eq!(projection[1].payroll, projection[0].payroll);
    }

    #[test]
    fn test_can_afford_signing_respects_cash_and_cap() {
        let mut league = test_league();
        league.settings.salary_cap_amount = league.team_payroll(&league.teams[0]) + 1000;

        let mut team = league.teams[0].clone();
        team.persona = Persona::new(PersonaStyle::Balanced, 0.5);

        assert!(league.can_afford_signing(&team, 1000));
        assert!(!league.can_afford_signing(&team, 2000));
        assert!(!league.can_afford_signing(&team, team.balance + 1));

        team.persona = Persona::new(PersonaStyle::WinNow, 0.9);
        assert!(league.can_afford_signing(&team, 2000));

        team.persona = Persona::new(PersonaStyle::Balanced, 0.5);
        league.settings.salary_cap = false;
        assert!(league.can_afford_signing(&team, 2000));
    }
}
