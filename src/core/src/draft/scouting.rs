use crate::draft::{ScoutingEvent, ScoutingSource};
use crate::error::{EngineError, EngineResult};
use crate::league::League;
use serde::{Deserialize, Serialize};

const MAX_REDUCTION: u32 = 20;
const UNCERTAINTY_FLOOR: u8 = 5;
const NATIONAL_THRESHOLD: u32 = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoutReport {
    pub grade: u8,
    /// Conventional confidence, `100 - uncertainty`.
    pub confidence: u8,
    pub sources: Vec<ScoutingEvent>,
}

impl League {
    /// Spends scouting points on a prospect: uncertainty drops by
    /// `min(20, points x 2)` and the public grade moves toward the true
    /// overall by the same percentage.
    pub fn scout_prospect(&mut self, prospect_id: u32, points: u32) -> EngineResult<ScoutingEvent> {
        let available = self.scouting_points;

        let prospect = self
            .prospects
            .iter_mut()
            .find(|p| p.id == prospect_id)
            .ok_or(EngineError::ProspectNotFound(prospect_id))?;

        if points > available {
            return Err(EngineError::NotEnoughScoutingPoints {
                required: points,
                available,
            });
        }

        let reduction = (points * 2).min(MAX_REDUCTION);

        let uncertainty = (prospect.scout_confidence as i32 - reduction as i32).max(UNCERTAINTY_FLOOR as i32);
        prospect.scout_confidence = uncertainty as u8;

        let gap = prospect.true_overall as f64 - prospect.scout_grade as f64;
        let delta = (gap * reduction as f64 / 100.0).round() as i32;
        prospect.scout_grade = (prospect.scout_grade as i32 + delta).clamp(0, 99) as u8;

        let source = if reduction >= NATIONAL_THRESHOLD {
            ScoutingSource::National
        } else {
            ScoutingSource::Regional
        };

        let event = ScoutingEvent {
            points,
            source,
            grade: prospect.scout_grade,
            uncertainty: prospect.scout_confidence,
        };
        prospect.scout_history.push(event);

        let message = format!("Scouted {}: confidence now {}%", prospect.name, 100 - prospect.scout_confidence);

        self.scouting_points -= points;
        self.notify(message);

        Ok(event)
    }

    pub fn get_scout_report(&self, prospect_id: u32) -> EngineResult<ScoutReport> {
        let prospect = self
            .prospects
            .iter()
            .find(|p| p.id == prospect_id)
            .ok_or(EngineError::ProspectNotFound(prospect_id))?;

        Ok(ScoutReport {
            grade: prospect.scout_grade,
            confidence: 100u8.saturating_sub(prospect.scout_confidence.min(100)),
            sources: prospect.scout_history.clone(),
        })
    }
}
