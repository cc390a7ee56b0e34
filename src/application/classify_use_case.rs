// ============================================================
// Layer 2 — ClassifyUseCase
// ============================================================
// Runs the tone classifier over a list of tokens and collects
// the results, for checking the rule table from the command line.

use crate::layout::tone_classifier::{classify_detailed, Classification};

pub struct ClassifyUseCase;

impl ClassifyUseCase {
    pub fn run<S: AsRef<str>>(tokens: &[S]) -> Vec<(String, Classification)> {
        tokens
            .iter()
            .map(|t| {
                let t = t.as_ref();
                (t.to_string(), classify_detailed(t))
            })
            .collect()
    }

    /// Tokens whose diacritic fell through to the default color.
    pub fn gaps(results: &[(String, Classification)]) -> Vec<(&str, char)> {
        results
            .iter()
            .filter_map(|(t, c)| c.gap.map(|g| (t.as_str(), g)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tone::ToneColor;

    #[test]
    fn test_results_keep_input_order() {
        let results = ClassifyUseCase::run(&["lók", "ma", "uî"]);
        let colors: Vec<_> = results.iter().map(|(_, c)| c.color).collect();
        assert_eq!(colors, vec![ToneColor::Red, ToneColor::Blue, ToneColor::Blue]);
    }

    #[test]
    fn test_gaps_are_collected() {
        let results = ClassifyUseCase::run(&["ma", "lǘ", "ń"]);
        assert_eq!(ClassifyUseCase::gaps(&results), vec![("lǘ", 'ǘ'), ("ń", 'ń')]);
    }
}
