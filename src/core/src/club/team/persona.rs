use crate::utils::FloatUtils;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PersonaStyle {
    WinNow,
    Balanced,
    Rebuild,
}

impl PersonaStyle {
    pub const ALL: [PersonaStyle; 3] = [PersonaStyle::WinNow, PersonaStyle::Balanced, PersonaStyle::Rebuild];
}

impl Display for PersonaStyle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PersonaStyle::WinNow => write!(f, "win-now"),
            PersonaStyle::Balanced => write!(f, "balanced"),
            PersonaStyle::Rebuild => write!(f, "rebuild"),
        }
    }
}

/// How an AI front office trades, drafts and spends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Persona {
    pub style: PersonaStyle,
    pub aggressiveness: f64,
}

impl Persona {
    pub fn new(style: PersonaStyle, aggressiveness: f64) -> Self {
        Persona {
            style,
            aggressiveness: aggressiveness.clamp(0.0, 1.0),
        }
    }

    pub fn balanced() -> Self {
        Persona::new(PersonaStyle::Balanced, 0.5)
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let style = *PersonaStyle::ALL.choose(rng).unwrap_or(&PersonaStyle::Balanced);

        Persona::new(style, FloatUtils::random(rng, 0.3, 1.0))
    }

    /// Teams this aggressive will sign through the cap.
    pub fn gambles_on_cap(&self) -> bool {
        self.aggressiveness > 0.7
    }
}

impl Default for Persona {
    fn default() -> Self {
        Persona::balanced()
    }
}
