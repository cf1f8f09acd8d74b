use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoStaticStr};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    IntoStaticStr,
)]
pub enum LetterGrade {
    A,
    #[strum(serialize = "A-")]
    #[serde(rename = "A-")]
    AMinus,
    #[strum(serialize = "B+")]
    #[serde(rename = "B+")]
    BPlus,
    B,
    #[strum(serialize = "B-")]
    #[serde(rename = "B-")]
    BMinus,
    #[strum(serialize = "C+")]
    #[serde(rename = "C+")]
    CPlus,
    C,
    #[strum(serialize = "D+")]
    #[serde(rename = "D+")]
    DPlus,
    D,
    F,
}

/// Descending threshold ladder; the first threshold a score reaches wins.
///
/// 97/93, 73/70 and 63/60 repeat the same grade on purpose.
const LADDER: [(i32, LetterGrade); 12] = [
    (97, LetterGrade::A),
    (93, LetterGrade::A),
    (90, LetterGrade::AMinus),
    (87, LetterGrade::BPlus),
    (83, LetterGrade::B),
    (80, LetterGrade::BMinus),
    (77, LetterGrade::CPlus),
    (73, LetterGrade::C),
    (70, LetterGrade::C),
    (67, LetterGrade::DPlus),
    (63, LetterGrade::D),
    (60, LetterGrade::D),
];

/// Row order of the printed distribution. `C+` has no row.
pub const DISPLAY_ORDER: [LetterGrade; 9] = [
    LetterGrade::A,
    LetterGrade::AMinus,
    LetterGrade::BPlus,
    LetterGrade::B,
    LetterGrade::BMinus,
    LetterGrade::C,
    LetterGrade::DPlus,
    LetterGrade::D,
    LetterGrade::F,
];

impl LetterGrade {
    pub fn from_score(score: i32) -> Self {
        LADDER
            .iter()
            .find(|(threshold, _)| score >= *threshold)
            .map(|&(_, grade)| grade)
            .unwrap_or(Self::F)
    }

    pub fn label(&self) -> &'static str {
        self.into()
    }

    /// Whether this grade gets a row in the printed distribution.
    pub fn is_displayed(&self) -> bool {
        DISPLAY_ORDER.contains(self)
    }
}

impl std::fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // `pad` so width specifiers like `{:<3}` apply to the label
        f.pad(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_grade_from_score_boundaries() {
        assert_eq!(LetterGrade::from_score(100), LetterGrade::A);
        assert_eq!(LetterGrade::from_score(97), LetterGrade::A);
        assert_eq!(LetterGrade::from_score(93), LetterGrade::A);
        assert_eq!(LetterGrade::from_score(92), LetterGrade::AMinus);
        assert_eq!(LetterGrade::from_score(90), LetterGrade::AMinus);
        assert_eq!(LetterGrade::from_score(89), LetterGrade::BPlus);
        assert_eq!(LetterGrade::from_score(87), LetterGrade::BPlus);
        assert_eq!(LetterGrade::from_score(86), LetterGrade::B);
        assert_eq!(LetterGrade::from_score(83), LetterGrade::B);
        assert_eq!(LetterGrade::from_score(82), LetterGrade::BMinus);
        assert_eq!(LetterGrade::from_score(80), LetterGrade::BMinus);
        assert_eq!(LetterGrade::from_score(79), LetterGrade::CPlus);
        assert_eq!(LetterGrade::from_score(77), LetterGrade::CPlus);
        assert_eq!(LetterGrade::from_score(76), LetterGrade::C);
        assert_eq!(LetterGrade::from_score(70), LetterGrade::C);
        assert_eq!(LetterGrade::from_score(69), LetterGrade::DPlus);
        assert_eq!(LetterGrade::from_score(67), LetterGrade::DPlus);
        assert_eq!(LetterGrade::from_score(66), LetterGrade::D);
        assert_eq!(LetterGrade::from_score(60), LetterGrade::D);
        assert_eq!(LetterGrade::from_score(59), LetterGrade::F);
        assert_eq!(LetterGrade::from_score(0), LetterGrade::F);
    }

    #[test]
    fn test_out_of_range_scores_still_classify() {
        assert_eq!(LetterGrade::from_score(150), LetterGrade::A);
        assert_eq!(LetterGrade::from_score(-5), LetterGrade::F);
        assert_eq!(LetterGrade::from_score(i32::MIN), LetterGrade::F);
        assert_eq!(LetterGrade::from_score(i32::MAX), LetterGrade::A);
    }

    #[test]
    fn test_every_score_in_range_classifies_to_a_known_grade() {
        let all: Vec<LetterGrade> = LetterGrade::iter().collect();
        for score in -10..=110 {
            assert!(all.contains(&LetterGrade::from_score(score)));
        }
    }

    #[test]
    fn test_labels() {
        let labels: Vec<&str> = LetterGrade::iter().map(|g| g.label()).collect();
        assert_eq!(
            labels,
            ["A", "A-", "B+", "B", "B-", "C+", "C", "D+", "D", "F"]
        );
        assert_eq!(format!("{:<3}|", LetterGrade::AMinus), "A- |");
    }

    #[test]
    fn test_c_plus_is_not_displayed() {
        assert!(!LetterGrade::CPlus.is_displayed());
        assert_eq!(DISPLAY_ORDER.len(), 9);
        for grade in LetterGrade::iter().filter(|g| *g != LetterGrade::CPlus) {
            assert!(grade.is_displayed(), "{grade} should be displayed");
        }
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&LetterGrade::BPlus).unwrap();
        assert_eq!(json, "\"B+\"");
        let parsed: LetterGrade = serde_json::from_str("\"D+\"").unwrap();
        assert_eq!(parsed, LetterGrade::DPlus);
    }
}
