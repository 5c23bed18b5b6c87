use crate::club::{PersonaStyle, Team};
use crate::draft::Prospect;
use itertools::Itertools;

pub struct ProspectSelector;

impl ProspectSelector {
    /// The prospect `team` would take with its pick, by public grade only.
    pub fn select(team: &Team, prospects: &[Prospect]) -> Option<u32> {
        prospects
            .iter()
            .map(|prospect| (prospect.id, Self::score(team, prospect)))
            .sorted_by(|(_, a), (_, b)| b.total_cmp(a))
            .map(|(id, _)| id)
            .next()
    }

    pub fn score(team: &Team, prospect: &Prospect) -> f64 {
        let mut score = prospect.scout_grade as f64 * 2.0;

        score += match team.persona.style {
            PersonaStyle::Rebuild => (30.0 - prospect.age as f64) * 3.0,
            PersonaStyle::WinNow => (prospect.age as f64 - 24.0) * 1.5,
            PersonaStyle::Balanced => 0.0,
        };

        score += determine_need_bonus(team, prospect);
        score -= prospect.bust_probability * 50.0;

        score
    }
}

fn determine_need_bonus(team: &Team, prospect: &Prospect) -> f64 {
    let count = team.count_at(prospect.position) as f64;

    (2.0 - count).max(0.0) * 20.0
}
