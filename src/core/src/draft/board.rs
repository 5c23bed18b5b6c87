use crate::draft::ProspectSelector;
use crate::error::{EngineError, EngineResult};
use crate::league::League;
use log::{debug, info};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftPick {
    pub id: u32,
    pub round: u32,
    /// Global, 1-based, round by round in team order.
    pub pick_number: u32,
    pub owner: String,
    pub original_owner: String,
    pub player_id: Option<u32>,
}

impl DraftPick {
    pub fn is_used(&self) -> bool {
        self.player_id.is_some()
    }

    /// Earlier picks are worth more.
    pub fn value(&self) -> f64 {
        1000.0 / self.pick_number.max(1) as f64 + (30.0 - self.round as f64)
    }

    pub fn label(&self) -> String {
        format!("{}.{}", self.round, self.pick_number)
    }
}

/// Pre-draft while `started` is false, live once started, complete when
/// every pick holds a player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftState {
    pub rounds: u32,
    pub board: Vec<DraftPick>,
    pub started: bool,
    pub current_pick_index: usize,
}

impl DraftState {
    pub fn current_pick(&self) -> Option<&DraftPick> {
        self.board.get(self.current_pick_index)
    }

    pub fn pick(&self, pick_id: u32) -> Option<&DraftPick> {
        self.board.iter().find(|p| p.id == pick_id)
    }

    pub fn is_complete(&self) -> bool {
        self.board.iter().all(DraftPick::is_used)
    }

    /// Moves the clock to the first open pick, or parks it on the last one.
    fn advance(&mut self) {
        self.current_pick_index = self
            .board
            .iter()
            .position(|p| !p.is_used())
            .unwrap_or(self.board.len().saturating_sub(1));
    }
}

impl League {
    /// `rounds` x team-count picks in round-robin team order, every pick
    /// owned by its original team.
    pub fn create_draft_board(&mut self, rounds: u32) -> Vec<DraftPick> {
        let teams = self.team_names();
        let mut board = Vec::with_capacity(rounds as usize * teams.len());

        for round in 1..=rounds {
            for (idx, team) in teams.iter().enumerate() {
                board.push(DraftPick {
                    id: self.ids.next_id(),
                    round,
                    pick_number: (round - 1) * teams.len() as u32 + idx as u32 + 1,
                    owner: team.clone(),
                    original_owner: team.clone(),
                    player_id: None,
                });
            }
        }

        board
    }

    /// Creates and arms a fresh board without starting the draft.
    pub fn start_draft(&mut self, rounds: u32) -> EngineResult<()> {
        if let Some(draft) = &self.draft {
            if draft.started && !draft.is_complete() {
                return Err(EngineError::DraftAlreadyStarted);
            }
        }

        let board = self.create_draft_board(rounds);

        self.draft = Some(DraftState {
            rounds,
            board,
            started: false,
            current_pick_index: 0,
        });

        debug!("draft board created: {} rounds, {} teams", rounds, self.team_count());

        Ok(())
    }

    pub fn current_pick(&self) -> Option<&DraftPick> {
        self.draft.as_ref().and_then(DraftState::current_pick)
    }

    pub fn draft_board_for_team(&self, team: &str) -> Vec<&DraftPick> {
        self.draft
            .as_ref()
            .map(|d| d.board.iter().filter(|p| p.owner == team).collect())
            .unwrap_or_default()
    }

    /// Swaps the owners of two picks before the draft starts. When the picks
    /// belong to different teams, the side giving up `pick_b` must not lose
    /// more pick value than its tolerance.
    pub fn trade_picks(&mut self, pick_a: u32, pick_b: u32) -> EngineResult<()> {
        let difficulty = self.settings.difficulty as f64;

        let draft = self.draft.as_mut().ok_or(EngineError::NoDraftBoard)?;
        if draft.started {
            return Err(EngineError::DraftAlreadyStarted);
        }

        let a_idx = draft
            .board
            .iter()
            .position(|p| p.id == pick_a)
            .ok_or(EngineError::PickNotFound(pick_a))?;
        let b_idx = draft
            .board
            .iter()
            .position(|p| p.id == pick_b)
            .ok_or(EngineError::PickNotFound(pick_b))?;

        let (a, b) = (&draft.board[a_idx], &draft.board[b_idx]);

        if a.owner != b.owner {
            let receiving_net = a.value() - b.value();
            let tolerance = 20.0 * (1.0 + difficulty * 0.5);

            if receiving_net < -tolerance {
                return Err(EngineError::PickTradeDeclined);
            }
        }

        let a_owner = draft.board[a_idx].owner.clone();
        let b_owner = std::mem::replace(&mut draft.board[b_idx].owner, a_owner);
        draft.board[a_idx].owner = b_owner;

        let message = format!(
            "Picks traded: {} ↔ {}",
            draft.board[a_idx].label(),
            draft.board[b_idx].label()
        );
        self.notify(message);

        Ok(())
    }

    /// Starts the draft and lets the AI pick until the user is on the clock.
    /// Creates a board first if none exists.
    pub fn begin_draft(&mut self) -> EngineResult<usize> {
        if self.draft.is_none() {
            self.start_draft(self.settings.draft_rounds)?;
        }

        let draft = self.draft.as_mut().ok_or(EngineError::NoDraftBoard)?;
        if draft.started {
            return Err(EngineError::DraftAlreadyStarted);
        }

        draft.started = true;
        draft.advance();

        info!("📋 draft started, season {}", self.season);

        Ok(self.run_ai_picks())
    }

    /// AI teams pick until the user's pick comes up, the board runs out, or
    /// a pick fails. Returns the number of picks made.
    pub fn run_ai_picks(&mut self) -> usize {
        let mut made = 0;

        loop {
            let Some(pick) = self.current_pick().filter(|p| !p.is_used()) else {
                break;
            };

            if self.is_user_team(&pick.owner) {
                break;
            }

            let pick_id = pick.id;
            let chosen = self
                .team(&pick.owner)
                .and_then(|team| ProspectSelector::select(team, &self.prospects))
                .or_else(|| self.prospects.first().map(|p| p.id));

            let Some(prospect_id) = chosen else {
                debug!("draft pool exhausted");
                break;
            };

            if let Err(e) = self.perform_draft_pick(pick_id, prospect_id) {
                debug!("ai pick {} failed: {}", pick_id, e);
                break;
            }

            made += 1;
        }

        made
    }

    /// Executes a pick: the prospect is promoted onto the owning team's
    /// roster and leaves the prospect pool. Returns the new player's id.
    pub fn perform_draft_pick(&mut self, pick_id: u32, prospect_id: u32) -> EngineResult<u32> {
        let draft = self.draft.as_ref().ok_or(EngineError::DraftNotStarted)?;
        if !draft.started {
            return Err(EngineError::DraftNotStarted);
        }

        let pick_idx = draft
            .board
            .iter()
            .position(|p| p.id == pick_id)
            .ok_or(EngineError::PickNotFound(pick_id))?;
        let pick = &draft.board[pick_idx];
        if pick.is_used() {
            return Err(EngineError::PickAlreadyUsed);
        }

        let prospect_idx = self
            .prospects
            .iter()
            .position(|p| p.id == prospect_id)
            .ok_or(EngineError::ProspectNotFound(prospect_id))?;

        let owner = pick.owner.clone();
        let label = pick.label();
        if self.team(&owner).is_none() {
            return Err(EngineError::TeamNotFound(owner));
        }

        let player = self.prospects.remove(prospect_idx).promote(self.season);
        let (player_id, name, position) = (player.id, player.name.clone(), player.position);

        if let Some(team) = self.team_mut(&owner) {
            team.add_player(player);
        }

        if let Some(draft) = self.draft.as_mut() {
            draft.board[pick_idx].player_id = Some(player_id);
            draft.advance();
        }

        info!("{} selected {} ({}) with pick {}", owner, name, position, label);
        self.notify(format!("{} selected {} ({}) with pick {}", owner, name, position, label));

        Ok(player_id)
    }

    /// The user's selection with the current pick, followed by AI picks up
    /// to the user's next turn.
    pub fn make_user_pick(&mut self, pick_id: u32, prospect_id: u32) -> EngineResult<u32> {
        let current = self.current_pick().ok_or(EngineError::DraftNotStarted)?;

        if current.id != pick_id || !self.is_user_team(&current.owner) {
            return Err(EngineError::NotOnTheClock(pick_id));
        }

        let player_id = self.perform_draft_pick(pick_id, prospect_id)?;
        self.run_ai_picks();

        Ok(player_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::Position;
    use crate::draft::prospect::tests::prospect;
    use crate::league::tests::test_league;

    fn league_with_prospects(count: u32) -> League {
        let mut league = test_league();
        for offset in 0..count {
            league
                .prospects
                .push(prospect(1000 + offset, Position::ALL[(offset % 8) as usize], 70, 60 + offset as u8));
        }
        league
    }

    #[test]
    fn test_board_layout() {
        let mut league = test_league();
        league.start_draft(3).expect("start");

        let draft = league.draft.as_ref().expect("draft");
        assert_eq!(draft.board.len(), 12);
        assert!(!draft.started);

        let numbers: Vec<u32> = draft.board.iter().map(|p| p.pick_number).collect();
        assert_eq!(numbers, (1..=12).collect::<Vec<u32>>());
        assert_eq!(draft.board[4].owner, "Tigers");
        assert_eq!(draft.board[4].round, 2);
        assert!(draft.board.iter().all(|p| p.owner == p.original_owner));
    }

    #[test]
    fn test_begin_draft_stops_at_user_pick() {
        let mut league = league_with_prospects(20);
        league.start_draft(2).expect("start");

        let made = league.begin_draft().expect("begin");

        // Tigers, Warriors, Panthers, then the user is on the clock
        assert_eq!(made, 3);
        let current = league.current_pick().expect("pick");
        assert_eq!(current.owner, "Ravens");
        assert_eq!(league.prospects.len(), 17);
        assert_eq!(league.teams[0].roster.len(), 9);
    }

    #[test]
    fn test_perform_draft_pick_rejects_used_pick() {
        let mut league = league_with_prospects(20);
        league.start_draft(1).expect("start");
        league.begin_draft().expect("begin");

        let used = league.draft.as_ref().expect("draft").board[0].id;
        let before = league.prospects.clone();

        let result = league.perform_draft_pick(used, before[0].id);

        assert_eq!(result, Err(EngineError::PickAlreadyUsed));
        assert_eq!(league.prospects, before);
    }

    #[test]
    fn test_perform_before_start_fails_without_mutation() {
        let mut league = league_with_prospects(2);
        league.start_draft(1).expect("start");
        let pick = league.draft.as_ref().expect("draft").board[0].id;

        assert_eq!(league.perform_draft_pick(pick, 1000), Err(EngineError::DraftNotStarted));
        assert_eq!(league.prospects.len(), 2);
    }

    #[test]
    fn test_unknown_prospect_leaves_pick_open() {
        let mut league = league_with_prospects(0);
        league.start_draft(1).expect("start");
        league.begin_draft().expect("begin");
        let pick = league.draft.as_ref().expect("draft").board[0].id;

        assert_eq!(league.perform_draft_pick(pick, 4242), Err(EngineError::ProspectNotFound(4242)));
        assert!(!league.draft.as_ref().expect("draft").board[0].is_used());
    }

    #[test]
    fn test_make_user_pick_continues_ai() {
        let mut league = league_with_prospects(20);
        league.start_draft(2).expect("start");
        league.begin_draft().expect("begin");

        let pick = league.current_pick().expect("pick").id;
        let prospect = league.prospects[0].id;

        let player_id = league.make_user_pick(pick, prospect).expect("pick");

        assert!(league.user_team.has_player(player_id));
        assert_eq!(league.current_pick().expect("pick").owner, "Ravens");
        assert_eq!(league.prospects.len(), 20 - 7);
    }

    #[test]
    fn test_make_user_pick_requires_clock() {
        let mut league = league_with_prospects(20);
        league.start_draft(1).expect("start");
        league.begin_draft().expect("begin");

        let first = league.draft.as_ref().expect("draft").board[0].id;

        assert_eq!(league.make_user_pick(first, 1010), Err(EngineError::NotOnTheClock(first)));
    }

    #[test]
    fn test_trade_picks_swaps_owners() {
        let mut league = test_league();
        league.start_draft(2).expect("start");

        let (first, fourth) = {
            let board = &league.draft.as_ref().expect("draft").board;
            (board[0].id, board[3].id)
        };

        // Tigers would give up the first overall pick for the fourth
        assert_eq!(league.trade_picks(fourth, first), Err(EngineError::PickTradeDeclined));

        league.trade_picks(first, fourth).expect("trade");

        let board = &league.draft.as_ref().expect("draft").board;
        assert_eq!(board[0].owner, "Ravens");
        assert_eq!(board[3].owner, "Tigers");
        assert_eq!(board[0].original_owner, "Tigers");
    }

    #[test]
    fn test_trade_picks_after_start_rejected() {
        let mut league = league_with_prospects(10);
        league.start_draft(1).expect("start");
        league.begin_draft().expect("begin");

        let board = &league.draft.as_ref().expect("draft").board;
        let (a, b) = (board[0].id, board[1].id);

        assert_eq!(league.trade_picks(a, b), Err(EngineError::DraftAlreadyStarted));
    }

    #[test]
    fn test_draft_stalls_when_pool_runs_dry() {
        let mut league = league_with_prospects(2);
        league.start_draft(1).expect("start");

        let made = league.begin_draft().expect("begin");

        assert_eq!(made, 2);
        assert!(league.prospects.is_empty());
        assert!(!league.draft.as_ref().expect("draft").is_complete());
    }
}
