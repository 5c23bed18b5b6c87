use crate::club::{Player, PersonaStyle, Team};
use crate::error::{EngineError, EngineResult};
use crate::league::League;
use crate::transfers::PlayerValuation;
use log::{debug, info};
use serde::{Deserialize, Serialize};

const TRADE_NEED_WEIGHT: i64 = 140;
const REBUILD_AGE_WEIGHT: i64 = 6;
const WIN_NOW_AGE_WEIGHT: i64 = 4;
const BASE_TOLERANCE: f64 = 180.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    pub id: u32,
    pub season: u32,
    pub week: u32,
    pub team_a: String,
    pub team_b: String,
    /// Player that left `team_a`.
    pub gave: Player,
    /// Player that left `team_b`.
    pub received: Player,
    pub proposed_by: Option<String>,
}

/// Outcome of a trade evaluation, seen from the receiving team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeDecision {
    pub accepted: bool,
    pub diff: i64,
    pub value_offered: i64,
    pub value_requested: i64,
    pub need_bonus: i64,
    pub persona_bonus: i64,
    pub tolerance: f64,
    pub reason: String,
}

impl League {
    /// Swaps one player between two distinct teams. Both players must be on
    /// their team's roster before anything moves.
    pub fn trade_players(&mut self, team_a: &str, player_a: u32, team_b: &str, player_b: u32) -> EngineResult<u32> {
        if team_a == team_b {
            return Err(EngineError::SameTeam(team_a.to_string()));
        }

        let (first, second) = self.teams_pair_mut(team_a, team_b).ok_or_else(|| {
            EngineError::TeamNotFound(format!("{} / {}", team_a, team_b))
        })?;

        if !first.has_player(player_a) {
            return Err(EngineError::PlayerNotFound(player_a));
        }

        if !second.has_player(player_b) {
            return Err(EngineError::PlayerNotFound(player_b));
        }

        let (Some(gave), Some(received)) = (first.take_player(player_a), second.take_player(player_b)) else {
            return Err(EngineError::PlayerNotFound(player_a));
        };

        first.add_player(received.clone());
        second.add_player(gave.clone());

        let text = format!(
            "{} and {} completed trade: {} ↔ {}",
            team_a, team_b, gave.name, received.name
        );

        let record = TradeRecord {
            id: self.ids.next_id(),
            season: self.season,
            week: self.week,
            team_a: team_a.to_string(),
            team_b: team_b.to_string(),
            gave,
            received,
            proposed_by: None,
        };
        let id = record.id;

        self.trade_history.insert(0, record);
        self.notify(text);

        Ok(id)
    }

    /// Judges `offering_player` for `receiving_player` from the receiving
    /// team's side: incoming value plus need and persona adjustments, minus
    /// what it gives up. Accepted when the net clears the negative tolerance.
    pub fn evaluate_trade(
        &self,
        offering_team: &str,
        receiving_team: &str,
        offering_player: u32,
        receiving_player: u32,
    ) -> EngineResult<TradeDecision> {
        if offering_team == receiving_team {
            return Err(EngineError::SameTeam(offering_team.to_string()));
        }

        let offering = self
            .team(offering_team)
            .ok_or_else(|| EngineError::TeamNotFound(offering_team.to_string()))?;
        let receiving = self
            .team(receiving_team)
            .ok_or_else(|| EngineError::TeamNotFound(receiving_team.to_string()))?;

        let incoming = offering
            .player(offering_player)
            .ok_or(EngineError::PlayerNotFound(offering_player))?;
        let outgoing = receiving
            .player(receiving_player)
            .ok_or(EngineError::PlayerNotFound(receiving_player))?;

        let value_offered = PlayerValuation::value_for_team(incoming, receiving);
        let value_requested = PlayerValuation::value_for_team(outgoing, offering);
        let need_bonus = 2i64.saturating_sub(receiving.count_at(incoming.position) as i64).max(0) * TRADE_NEED_WEIGHT;
        let persona_bonus = determine_persona_bonus(receiving, incoming, outgoing);

        let diff = value_offered + need_bonus - value_requested + persona_bonus;

        let difficulty = self.settings.difficulty as f64;
        let tolerance =
            BASE_TOLERANCE * (1.0 + difficulty * 0.45) * (1.0 + (receiving.persona.aggressiveness - 0.5) * 0.6);

        let accepted = diff as f64 >= -tolerance;

        let reason = if accepted {
            format!("Accepted (net {})", diff)
        } else {
            format!("Declined (would lose {} value)", -diff)
        };

        Ok(TradeDecision {
            accepted,
            diff,
            value_offered,
            value_requested,
            need_bonus,
            persona_bonus,
            tolerance,
            reason,
        })
    }

    /// Evaluates and, on acceptance, executes a 1-for-1 trade. Either way the
    /// league gets a notification.
    pub fn propose_trade(
        &mut self,
        offering_team: &str,
        receiving_team: &str,
        offering_player: u32,
        receiving_player: u32,
    ) -> EngineResult<TradeDecision> {
        let decision = self.evaluate_trade(offering_team, receiving_team, offering_player, receiving_player)?;

        debug!("trade proposal {} -> {}: {}", offering_team, receiving_team, decision.reason);

        if !decision.accepted {
            self.notify(format!("{} proposed trade to {} declined", offering_team, receiving_team));

            return Err(EngineError::TradeDeclined {
                team: receiving_team.to_string(),
                diff: decision.diff,
            });
        }

        self.trade_players(offering_team, offering_player, receiving_team, receiving_player)?;

        if let Some(record) = self.trade_history.first_mut() {
            record.proposed_by = Some(offering_team.to_string());
        }

        info!("trade accepted: {} -> {} ({})", offering_team, receiving_team, decision.reason);

        self.notify(format!("{} proposed trade accepted by {}", offering_team, receiving_team));

        Ok(decision)
    }
}

fn determine_persona_bonus(receiving: &Team, incoming: &Player, outgoing: &Player) -> i64 {
    let incoming_age = incoming.age as i64;
    let outgoing_age = outgoing.age as i64;

    match receiving.persona.style {
        PersonaStyle::Rebuild => (outgoing_age - incoming_age) * REBUILD_AGE_WEIGHT,
        PersonaStyle::WinNow => (incoming_age - outgoing_age) * WIN_NOW_AGE_WEIGHT,
        PersonaStyle::Balanced => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::{Persona, Position};
    use crate::league::tests::test_league;

    fn id_at(league: &League, team: &str, position: Position) -> u32 {
        league.team(team).and_then(|t| t.first_at(position)).map(|p| p.id).expect("player")
    }

    #[test]
    fn test_trade_players_swaps_and_records() {
        let mut league = test_league();
        let qb = id_at(&league, "Ravens", Position::Quarterback);
        let rb = id_at(&league, "Tigers", Position::RunningBack);

        league.trade_players("Ravens", qb, "Tigers", rb).expect("trade");

        assert!(league.user_team.has_player(rb));
        assert!(!league.user_team.has_player(qb));
        assert!(league.teams[0].has_player(qb));

        let record = &league.trade_history[0];
        assert_eq!(record.gave.id, qb);
        assert_eq!(record.received.id, rb);
        assert_eq!(record.team_a, "Ravens");
    }

    #[test]
    fn test_trade_players_rejects_missing_player_without_mutation() {
        let mut league = test_league();
        let qb = id_at(&league, "Ravens", Position::Quarterback);
        let before = league.clone();

        assert_eq!(
            league.trade_players("Ravens", qb, "Tigers", 9999),
            Err(EngineError::PlayerNotFound(9999))
        );
        assert_eq!(league, before);
    }

    #[test]
    fn test_even_swap_is_accepted() {
        let league = test_league();
        let a = id_at(&league, "Tigers", Position::Linebacker);
        let b = id_at(&league, "Warriors", Position::Linebacker);

        let decision = league.evaluate_trade("Tigers", "Warriors", a, b).expect("decision");

        // Warriors carry a single linebacker, so the need bonus is 140
        assert!(decision.accepted);
        assert_eq!(decision.value_offered, decision.value_requested);
        assert_eq!(decision.need_bonus, 140);
        assert_eq!(decision.diff, 140);
    }

    #[test]
    fn test_lopsided_offer_is_declined() {
        let mut league = test_league();
        let weak = id_at(&league, "Tigers", Position::Cornerback);
        let star = id_at(&league, "Warriors", Position::Quarterback);

        if let Some(player) = league.teams[0].player_mut(weak) {
            player.overall = 40;
            player.age = 33;
        }
        if let Some(player) = league.teams[1].player_mut(star) {
            player.overall = 99;
        }
        league.teams[1].persona = Persona::new(PersonaStyle::Balanced, 0.3);

        let decision = league.evaluate_trade("Tigers", "Warriors", weak, star).expect("decision");
        assert!(!decision.accepted);

        let result = league.propose_trade("Tigers", "Warriors", weak, star);
        assert!(matches!(result, Err(EngineError::TradeDeclined { .. })));
        assert!(league.teams[0].has_player(weak));
        assert!(league.trade_history.is_empty());
        assert!(league.notifications.latest().expect("notice").text.contains("declined"));
    }

    #[test]
    fn test_persona_bonus_follows_style() {
        let mut league = test_league();
        let young = id_at(&league, "Tigers", Position::WideReceiver);
        let old = id_at(&league, "Warriors", Position::WideReceiver);

        if let Some(player) = league.teams[0].player_mut(young) {
            player.age = 22;
        }
        if let Some(player) = league.teams[1].player_mut(old) {
            player.age = 30;
        }

        league.teams[1].persona = Persona::new(PersonaStyle::Rebuild, 0.5);
        let rebuild = league.evaluate_trade("Tigers", "Warriors", young, old).expect("decision");
        assert_eq!(rebuild.persona_bonus, 48);

        league.teams[1].persona = Persona::new(PersonaStyle::WinNow, 0.5);
        let win_now = league.evaluate_trade("Tigers", "Warriors", young, old).expect("decision");
        assert_eq!(win_now.persona_bonus, -32);
    }

    #[test]
    fn test_accepted_proposal_marks_proposer() {
        let mut league = test_league();
        let a = id_at(&league, "Tigers", Position::Linebacker);
        let b = id_at(&league, "Warriors", Position::Linebacker);

        let decision = league.propose_trade("Tigers", "Warriors", a, b).expect("accepted");

        assert!(decision.accepted);
        assert_eq!(league.trade_history[0].proposed_by.as_deref(), Some("Tigers"));
        assert!(league.teams[1].has_player(a));
    }
}
