//! Encounter module - random events triggered by movement
//!
//! An encounter carries no combat logic; it surfaces a precept drawn from a
//! fixed table plus the coordinates where it happened, and the view shows it
//! on the message line.

use crate::rng::SimpleRng;
use crate::types::Position;

/// The fixed table encounters draw their flavor line from (Musashi's Dokkodo).
pub const PRECEPTS: [&str; 18] = [
    "Accept everything just the way it is.",
    "Do not seek pleasure for its own sake.",
    "Do not, under any circumstances, depend on a partial feeling.",
    "Think lightly about yourself and deeply about the world.",
    "Be detached from desire your whole life long.",
    "Do not regret what you have done.",
    "Never be jealous.",
    "Never let yourself be saddened by separation.",
    "Resentment and complaint are appropriate neither for oneself nor others.",
    "Do not let yourself be guided by the feeling of lust or love.",
    "In all things have no preferences.",
    "Be indifferent to where you live.",
    "Do not pursue the taste of good food.",
    "Do not hold on to possessions you no longer need.",
    "Do not act following customary beliefs.",
    "Do not collect weapons or practice with weapons beyond what is useful.",
    "Do not fear death.",
    "Do not seek to possess either goods or fiefs for your old age.",
];

/// Draw a random precept from the table.
pub fn random_precept(rng: &mut SimpleRng) -> &'static str {
    PRECEPTS[rng.next_range(PRECEPTS.len() as u32) as usize]
}

/// A triggered encounter: the drawn precept and where the player stood.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Encounter {
    pub precept: &'static str,
    pub position: Position,
}

impl Encounter {
    /// Roll a fresh encounter at `position`.
    pub fn roll(rng: &mut SimpleRng, position: Position) -> Self {
        Self {
            precept: random_precept(rng),
            position,
        }
    }
}
