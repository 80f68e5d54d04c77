use super::{PieceFilter, is_single_letter};

/// Fuses each run of two or more single-letter pieces into one piece.
///
/// Surname fields frequently carry split abbreviations (`"d r jones"`), which
/// only become recognisable as a title or a compound once rejoined.
#[derive(Clone, Debug, Default)]
pub struct InitialRunFilter;

impl InitialRunFilter {
    pub fn new() -> Self {
        InitialRunFilter
    }
}

impl PieceFilter for InitialRunFilter {
    fn filter(&self, pieces: Vec<String>) -> Vec<String> {
        let mut fused: Vec<String> = Vec::with_capacity(pieces.len());
        let mut run_len = 0;

        for piece in pieces {
            if is_single_letter(&piece) {
                run_len += 1;
                if run_len > 1
                    && let Some(last) = fused.last_mut()
                {
                    last.push_str(&piece);
                    continue;
                }
            } else {
                run_len = 0;
            }
            fused.push(piece);
        }

        fused
    }

    fn name(&self) -> &'static str {
        "initial_run"
    }
}
