// ---------------------------
// ## Weighted Scoring
// ---------------------------

use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Adjustment {
    pub factor: String,
    pub delta: i32,
}

/// Textual band of a clamped score. Edges are exclusive.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum ScoreBand {
    Challenging,
    Average,
    Good,
    VeryGood,
    Excellent,
}

impl ScoreBand {
    pub fn from_score(score: u32) -> ScoreBand {
        if score > 85 {
            ScoreBand::Excellent
        } else if score > 70 {
            ScoreBand::VeryGood
        } else if score > 55 {
            ScoreBand::Good
        } else if score > 40 {
            ScoreBand::Average
        } else {
            ScoreBand::Challenging
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent",
            ScoreBand::VeryGood => "Very Good",
            ScoreBand::Good => "Good",
            ScoreBand::Average => "Average",
            ScoreBand::Challenging => "Challenging",
        }
    }
}

impl fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for ScoreBand {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// A base value plus an ordered list of signed adjustments.
///
/// Adjustments are kept in the order they were applied so a reading can show
/// why it landed where it did. The final score is clamped to `[0, 100]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scorecard {
    base: i32,
    adjustments: Vec<Adjustment>,
}

impl Scorecard {
    pub fn new(base: i32) -> Self {
        Scorecard {
            base,
            adjustments: Vec::new(),
        }
    }

    pub fn adjust(&mut self, factor: impl Into<String>, delta: i32) -> &mut Self {
        self.adjustments.push(Adjustment {
            factor: factor.into(),
            delta,
        });
        self
    }

    /// Apply `delta` only when `condition` holds.
    pub fn adjust_if(&mut self, condition: bool, factor: impl Into<String>, delta: i32) -> &mut Self {
        if condition {
            self.adjust(factor, delta);
        }
        self
    }

    pub fn base(&self) -> i32 {
        self.base
    }

    pub fn adjustments(&self) -> &[Adjustment] {
        &self.adjustments
    }

    pub fn raw(&self) -> i32 {
        self.base + self.adjustments.iter().map(|a| a.delta).sum::<i32>()
    }

    pub fn score(&self) -> u32 {
        self.raw().clamp(0, 100) as u32
    }

    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_score(self.score())
    }
}

impl Serialize for Scorecard {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Scorecard", 5)?;
        state.serialize_field("score", &self.score())?;
        state.serialize_field("label", &self.band())?;
        state.serialize_field("base", &self.base)?;
        state.serialize_field("raw", &self.raw())?;
        state.serialize_field("adjustments", &self.adjustments)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[test]
    fn marriage_example_clamps_to_excellent() {
        let mut card = Scorecard::new(70);
        card.adjust("Jupiter in 7th house", 20)
            .adjust("Strong Venus", 20);
        assert_eq!(card.raw(), 110);
        assert_eq!(card.score(), 100);
        assert_eq!(card.band(), ScoreBand::Excellent);
    }

    #[rstest]
    #[case(86, ScoreBand::Excellent)]
    #[case(85, ScoreBand::VeryGood)]
    #[case(71, ScoreBand::VeryGood)]
    #[case(70, ScoreBand::Good)]
    #[case(56, ScoreBand::Good)]
    #[case(55, ScoreBand::Average)]
    #[case(41, ScoreBand::Average)]
    #[case(40, ScoreBand::Challenging)]
    #[case(0, ScoreBand::Challenging)]
    fn band_edges_are_exclusive(#[case] score: u32, #[case] band: ScoreBand) {
        assert_eq!(ScoreBand::from_score(score), band);
    }

    #[test]
    fn adjust_if_skips_false_conditions() {
        let mut card = Scorecard::new(50);
        card.adjust_if(false, "never", 30).adjust_if(true, "always", -5);
        assert_eq!(card.adjustments().len(), 1);
        assert_eq!(card.score(), 45);
    }

    #[test]
    fn serializes_label_and_adjustments() {
        let mut card = Scorecard::new(100);
        card.adjust("South facing", -10);
        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(json["score"], 90);
        assert_eq!(json["label"], "Excellent");
        assert_eq!(json["adjustments"][0]["delta"], -10);
    }

    proptest! {
        #[test]
        fn score_always_clamps(base in -500i32..500, deltas in proptest::collection::vec(-80i32..80, 0..12)) {
            let mut card = Scorecard::new(base);
            for (i, delta) in deltas.iter().enumerate() {
                card.adjust(format!("factor {i}"), *delta);
            }
            prop_assert!(card.score() <= 100);
            prop_assert_eq!(card.score() as i32, card.raw().clamp(0, 100));
        }
    }
}
