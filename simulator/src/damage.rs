//! What state the planet is in.

use crate::impact::ImpactOutcome;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum DamageState {
    #[default]
    Intact,
    Cratered,
    Destroyed,
}

impl DamageState {
    /// The state after an impact outcome. Only an intact planet can change;
    /// a cratered or destroyed one stays that way until it is reset.
    pub fn apply(self, outcome: ImpactOutcome) -> Self {
        match (self, outcome) {
            (DamageState::Intact, ImpactOutcome::Crater) => DamageState::Cratered,
            (DamageState::Intact, ImpactOutcome::Destroy) => DamageState::Destroyed,
            (state, _) => state,
        }
    }

    pub fn is_intact(self) -> bool {
        self == DamageState::Intact
    }
}
