use crate::club::Contract;
use crate::error::{EngineError, EngineResult};
use crate::league::League;
use crate::utils::round_i64;
use log::info;

/// Share of the rookie salary paid up front when a prospect is signed outside the draft.
const ROOKIE_SIGNING_SHARE: f64 = 0.5;
/// Default signing bonus as a share of salary when a proposal omits one.
const DEFAULT_BONUS_SHARE: f64 = 0.5;

impl League {
    /// Moves a free agent onto the user roster for the price of one season's salary.
    pub fn sign_free_agent(&mut self, player_id: u32) -> EngineResult<i64> {
        let idx = self
            .free_agents
            .iter()
            .position(|p| p.id == player_id)
            .ok_or(EngineError::PlayerNotFound(player_id))?;

        let cost = self.free_agents[idx].contract.salary;
        let balance = self.user_team.balance;

        if cost > balance {
            let text = format!(
                "Unable to sign {}. Insufficient funds (${})",
                self.free_agents[idx].name, balance
            );
            self.notify(text);

            return Err(EngineError::InsufficientFunds { required: cost, balance });
        }

        let mut player = self.free_agents.remove(idx);
        player.contract.start_season = Some(self.season);

        self.user_team.balance -= cost;

        let text = format!(
            "{} signed for ${}. New balance: ${}",
            player.name, cost, self.user_team.balance
        );

        info!("user signed free agent {} ({})", player.name, player.position);

        self.user_team.add_player(player);
        self.notify(text);

        Ok(cost)
    }

    /// Signs a prospect straight onto the user roster on a rookie deal.
    pub fn sign_draft_pick(&mut self, prospect_id: u32) -> EngineResult<i64> {
        let idx = self
            .prospects
            .iter()
            .position(|p| p.id == prospect_id)
            .ok_or(EngineError::ProspectNotFound(prospect_id))?;

        let rookie = Contract::rookie(self.prospects[idx].true_overall, self.season);
        let cost = round_i64(rookie.salary as f64 * ROOKIE_SIGNING_SHARE);
        let balance = self.user_team.balance;

        if cost > balance {
            let text = format!(
                "Unable to sign draft pick {}. Insufficient funds (${})",
                self.prospects[idx].name, balance
            );
            self.notify(text);

            return Err(EngineError::InsufficientFunds { required: cost, balance });
        }

        let prospect = self.prospects.remove(idx);
        let player = prospect.promote(self.season);

        self.user_team.balance -= cost;

        let text = format!(
            "{} (draft) signed for ${}. New balance: ${}",
            player.name, cost, self.user_team.balance
        );

        self.user_team.add_player(player);
        self.notify(text);

        Ok(cost)
    }

    /// Replaces a user player's contract. The signing bonus is paid in cash
    /// immediately and amortized over the new term on the cap.
    pub fn propose_contract(
        &mut self,
        player_id: u32,
        years: u32,
        salary: i64,
        signing_bonus: Option<i64>,
        guaranteed: Option<i64>,
    ) -> EngineResult<Contract> {
        if years == 0 {
            return Err(EngineError::InvalidContract("contract must run at least one year".into()));
        }

        if salary < 0 {
            return Err(EngineError::InvalidContract("salary cannot be negative".into()));
        }

        let name = self
            .user_team
            .player(player_id)
            .map(|p| p.name.clone())
            .ok_or(EngineError::PlayerNotFound(player_id))?;

        let signing_bonus = signing_bonus.unwrap_or_else(|| round_i64(salary as f64 * DEFAULT_BONUS_SHARE));
        let guaranteed = guaranteed.unwrap_or(signing_bonus);
        let balance = self.user_team.balance;

        if signing_bonus > balance {
            self.notify(format!(
                "Unable to sign {}. Insufficient funds for signing bonus (${})",
                name, balance
            ));

            return Err(EngineError::InsufficientFunds {
                required: signing_bonus,
                balance,
            });
        }

        let contract = Contract::new(years, salary)
            .with_bonus(signing_bonus, guaranteed)
            .starting(self.season);

        self.user_team.balance -= signing_bonus;

        if let Some(player) = self.user_team.player_mut(player_id) {
            player.contract = contract.clone();
        }

        let text = format!(
            "{} signed {}y @ ${} (bonus ${}, guaranteed ${}). New balance: ${}",
            name, years, salary, signing_bonus, guaranteed, self.user_team.balance
        );
        self.notify(text);

        Ok(contract)
    }

    /// Unamortized bonus left on a rostered player's deal as of `season`.
    pub fn calculate_dead_money(&self, player_id: u32, season: u32) -> EngineResult<i64> {
        let player = self
            .all_teams()
            .flat_map(|t| t.roster.iter())
            .chain(self.free_agents.iter())
            .find(|p| p.id == player_id)
            .ok_or(EngineError::PlayerNotFound(player_id))?;

        Ok(player.contract.dead_money(season))
    }

    /// Cuts a user player. Any remaining bonus accelerates into league dead money.
    pub fn release_player(&mut self, player_id: u32) -> EngineResult<i64> {
        let season = self.season;

        let player = self
            .user_team
            .take_player(player_id)
            .ok_or(EngineError::PlayerNotFound(player_id))?;

        let dead = player.contract.dead_money(season);
        self.dead_money += dead;

        info!("released {}, dead money {}", player.name, dead);

        self.notify(format!("Released {}; ${} dead money added.", player.name, dead));

        Ok(dead)
    }

    /// Converts up to `convert_to_bonus` of salary into signing bonus. Cash on
    /// hand is untouched; the extra bonus raises amortization for the remaining term.
    pub fn restructure_contract(&mut self, player_id: u32, new_salary: i64, convert_to_bonus: i64) -> EngineResult<Contract> {
        if new_salary < 0 || convert_to_bonus < 0 {
            return Err(EngineError::InvalidContract("amounts cannot be negative".into()));
        }

        let season = self.season;

        let player = self
            .user_team
            .player_mut(player_id)
            .ok_or(EngineError::PlayerNotFound(player_id))?;

        if player.contract.remaining_years(season) == 0 {
            return Err(EngineError::NoRemainingContractYears);
        }

        let bonus = convert_to_bonus.min(new_salary);

        player.contract.signing_bonus += bonus;
        player.contract.salary = new_salary;

        let contract = player.contract.clone();
        let text = format!(
            "{} contract restructured: new salary ${}, bonus ${}",
            player.name, new_salary, bonus
        );

        self.notify(text);

        Ok(contract)
    }
}
