use std::sync::Arc;

use super::noise::NoiseWords;
use super::{PieceFilter, is_single_letter};

/// Fuses a two-piece surname whose first piece is a lone initial
/// (`"o ochoa"` → `"oochoa"`, `"d gutierres"` → `"dgutierres"`).
///
/// Initials that are themselves titles or surname particles are left alone.
#[derive(Clone, Debug)]
pub struct LeadingInitialFilter {
    noise: Arc<NoiseWords>,
}

impl LeadingInitialFilter {
    pub fn new(noise: Arc<NoiseWords>) -> Self {
        LeadingInitialFilter { noise }
    }
}

impl PieceFilter for LeadingInitialFilter {
    fn filter(&self, mut pieces: Vec<String>) -> Vec<String> {
        if pieces.len() == 2
            && is_single_letter(&pieces[0])
            && !self.noise.is_initial_noise(&pieces[0])
        {
            let tail = pieces.pop().unwrap_or_default();
            pieces[0].push_str(&tail);
        }
        pieces
    }

    fn name(&self) -> &'static str {
        "leading_initial"
    }
}
