use crate::club::{Injury, InjuryRisk, InjurySeverity};
use crate::error::{EngineError, EngineResult};
use crate::league::League;
use crate::utils::FloatUtils;
use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InjuryReport {
    pub player_id: u32,
    pub player_name: String,
    pub team: String,
    pub severity: InjurySeverity,
    pub weeks: u32,
}

impl League {
    /// One week of healing for every rostered player.
    pub fn advance_injuries(&mut self) {
        let mut recovered = Vec::new();

        for team in self.all_teams_mut() {
            for player in team.roster.iter_mut() {
                let healed = match player.injury.as_mut() {
                    Some(injury) => injury.heal_week(),
                    None => continue,
                };

                if healed {
                    player.injury = None;
                    recovered.push(player.name.clone());
                }
            }
        }

        for name in recovered {
            self.notify(format!("{} has recovered from injury.", name));
        }
    }

    /// Post-game injury rolls for one team's healthy players.
    pub fn roll_injuries<R: Rng + ?Sized>(&mut self, team_name: &str, rng: &mut R) -> Vec<InjuryReport> {
        let difficulty = self.settings.difficulty;
        let training_risk = self.settings.training_risk;

        let Some(team) = self.team_mut(team_name) else {
            return Vec::new();
        };

        let mut reports = Vec::new();

        for player in team.roster.iter_mut().filter(|p| p.injury.is_none()) {
            let chance = InjuryRisk::chance(
                player.age,
                player.overall,
                player.is_injury_prone(),
                difficulty,
                training_risk,
            );

            if !FloatUtils::chance(rng, chance) {
                continue;
            }

            let injury = Injury::roll(InjurySeverity::roll(rng), rng);
            player.injury = Some(injury);

            reports.push(InjuryReport {
                player_id: player.id,
                player_name: player.name.clone(),
                team: team_name.to_string(),
                severity: injury.severity,
                weeks: injury.weeks_remaining,
            });
        }

        for report in &reports {
            debug!("{} injured: {} for {} weeks", report.player_name, report.severity, report.weeks);
            self.notify(format!(
                "{} suffered a {} injury ({}w)",
                report.player_name, report.severity, report.weeks
            ));
        }

        reports
    }

    /// Sets a player's remaining injury weeks; zero or less clears the injury.
    /// Looks through every roster, the free-agent pool and the prospect pool.
    pub fn set_injury_weeks(&mut self, player_id: u32, weeks: i32) -> EngineResult<()> {
        let League {
            teams,
            user_team,
            free_agents,
            prospects,
            ..
        } = self;

        let injury = teams
            .iter_mut()
            .chain(std::iter::once(user_team))
            .flat_map(|t| t.roster.iter_mut())
            .chain(free_agents.iter_mut())
            .find(|p| p.id == player_id)
            .map(|p| (&mut p.injury, p.name.clone()))
            .or_else(|| {
                prospects
                    .iter_mut()
                    .find(|p| p.id == player_id)
                    .map(|p| (&mut p.injury, p.name.clone()))
            });

        let Some((slot, name)) = injury else {
            return Err(EngineError::PlayerNotFound(player_id));
        };

        let message = if weeks <= 0 {
            *slot = None;
            format!("{} has been marked recovered.", name)
        } else {
            let severity = slot.map(|i| i.severity).unwrap_or(InjurySeverity::Unspecified);
            *slot = Some(Injury::new(severity, weeks as u32));
            format!("{} injury updated: {}w", name, weeks)
        };

        self.notify(message);

        Ok(())
    }

    pub fn clear_injury(&mut self, player_id: u32) -> EngineResult<()> {
        self.set_injury_weeks(player_id, 0)
    }
}
