use crate::content::{InfoPanel, INFO_PANELS};

/// Discrete info stage selected by the island's heading
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Greeting = 1,
    Experience = 2,
    Portfolio = 3,
    Contact = 4,
}

/// Angular windows in radians over the normalized heading, first match wins
const STAGE_WINDOWS: [(Stage, &[(f64, f64)]); 4] = [
    (Stage::Contact, &[(0.0, 0.3), (5.9, 6.3)]),
    (Stage::Portfolio, &[(1.2, 1.8)]),
    (Stage::Experience, &[(3.8, 4.1)]),
    (Stage::Greeting, &[(4.25, 4.75)]),
];

impl Stage {
    /// Classifies a heading already normalized into `[0, 2π)`
    pub fn from_normalized(normalized: f64) -> Option<Stage> {
        STAGE_WINDOWS
            .iter()
            .find(|(_, windows)| {
                windows
                    .iter()
                    .any(|&(low, high)| normalized >= low && normalized <= high)
            })
            .map(|&(stage, _)| stage)
    }

    pub fn number(self) -> u8 {
        self as u8
    }

    /// Overlay content shown while this stage is current
    pub fn info(self) -> &'static InfoPanel {
        &INFO_PANELS[usize::from(self.number()) - 1]
    }
}
