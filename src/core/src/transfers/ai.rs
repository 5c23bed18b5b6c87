use crate::league::League;
use crate::transfers::PlayerValuation;
use log::{debug, info};
use rand::Rng;
use rand::seq::SliceRandom;

const BASE_SIGNING_THRESHOLD: f64 = 0.12;
const FALLBACK_ANNUAL_COST: i64 = 4000;
const OFFER_CANDIDATES: usize = 3;
const REVERSE_OFFER_CANDIDATES: usize = 2;

impl League {
    /// Each AI team looks at the free-agent pool and signs the candidate with
    /// the best value-to-cost ratio, if it clears the team's persona-scaled
    /// threshold and the team can afford it.
    pub fn auto_sign_free_agents(&mut self) -> usize {
        let mut signed = 0;

        for idx in 0..self.teams.len() {
            if self.free_agents.is_empty() {
                break;
            }

            let team = &self.teams[idx];
            let threshold = BASE_SIGNING_THRESHOLD * (1.0 - (team.persona.aggressiveness - 0.4) * 0.6);

            let best = self
                .free_agents
                .iter()
                .map(|fa| {
                    let value = PlayerValuation::value_for_team(fa, team);
                    let cost = if fa.contract.salary > 0 {
                        fa.contract.salary
                    } else {
                        FALLBACK_ANNUAL_COST
                    };

                    (fa.id, value, cost, value as f64 / cost as f64)
                })
                .max_by(|a, b| a.3.total_cmp(&b.3));

            let Some((player_id, value, cost, score)) = best else {
                continue;
            };

            if score < threshold || !self.can_afford_signing(team, cost) {
                continue;
            }

            let Some(pos) = self.free_agents.iter().position(|p| p.id == player_id) else {
                continue;
            };

            let mut player = self.free_agents.remove(pos);
            player.contract.start_season = Some(self.season);

            let text = format!("{} (AI) signed {} for ${} (value {})", self.teams[idx].name, player.name, cost, value);

            let team = &mut self.teams[idx];
            team.balance -= cost;
            team.add_player(player);

            self.notify(text);
            signed += 1;
        }

        if signed > 0 {
            info!("AI teams signed {} free agents", signed);
        }

        signed
    }

    /// Bounded number of randomized AI-to-AI trade attempts. Team A chases
    /// team B's best player with its low-end depth, B may counter by offering
    /// its own depth for A's best. Declines stay silent.
    pub fn auto_propose_trades<R: Rng + ?Sized>(&mut self, attempts: usize, rng: &mut R) -> usize {
        let names: Vec<String> = self.teams.iter().map(|t| t.name.clone()).collect();
        let mut completed = 0;

        for _ in 0..attempts {
            let (Some(a), Some(b)) = (names.choose(rng), names.choose(rng)) else {
                break;
            };

            if a == b {
                continue;
            }

            if self.attempt_trade_for_best(a, b, OFFER_CANDIDATES, true)
                || self.attempt_trade_for_best(b, a, REVERSE_OFFER_CANDIDATES, false)
            {
                completed += 1;
            }
        }

        if completed > 0 {
            debug!("auto trades: {} of {} attempts completed", completed, attempts);
        }

        completed
    }

    /// `offering` tries its lowest rated players, in turn, for the best player of `receiving`.
    fn attempt_trade_for_best(&mut self, offering: &str, receiving: &str, candidates: usize, escalate: bool) -> bool {
        let (Some(offering_team), Some(receiving_team)) = (self.team(offering), self.team(receiving)) else {
            return false;
        };

        let Some(target) = receiving_team.best_player().map(|p| p.id) else {
            return false;
        };

        let offers: Vec<u32> = offering_team.lowest_rated().iter().map(|p| p.id).collect();
        let aggressive = offering_team.persona.aggressiveness > 0.7 && offers.len() > 2;

        let mut attempts = Vec::with_capacity(candidates + 1);
        if escalate && aggressive {
            attempts.push(offers[1]);
        }
        attempts.extend(offers.iter().take(candidates).copied());

        for offer in attempts {
            let accepted = self
                .evaluate_trade(offering, receiving, offer, target)
                .map(|d| d.accepted)
                .unwrap_or(false);

            if accepted && self.trade_players(offering, offer, receiving, target).is_ok() {
                return true;
            }
        }

        false
    }
}
