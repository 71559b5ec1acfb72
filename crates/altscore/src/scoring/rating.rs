use serde::Serialize;

/// Qualitative label derived from the total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CreditRating {
    Excellent,
    #[serde(rename = "Very Good")]
    VeryGood,
    Good,
    Fair,
    Poor,
    /// Only produced by the fallback result for malformed input.
    Error,
}

impl CreditRating {
    /// Lower bounds are inclusive.
    pub const fn from_score(total_score: u16) -> Self {
        if total_score >= 800 {
            Self::Excellent
        } else if total_score >= 740 {
            Self::VeryGood
        } else if total_score >= 670 {
            Self::Good
        } else if total_score >= 580 {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::VeryGood => "Very Good",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
            Self::Error => "Error",
        }
    }
}

impl std::fmt::Display for CreditRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_edges_are_inclusive_on_the_lower_bound() {
        let cases = [
            (850, CreditRating::Excellent),
            (800, CreditRating::Excellent),
            (799, CreditRating::VeryGood),
            (740, CreditRating::VeryGood),
            (739, CreditRating::Good),
            (670, CreditRating::Good),
            (669, CreditRating::Fair),
            (580, CreditRating::Fair),
            (579, CreditRating::Poor),
            (300, CreditRating::Poor),
        ];

        for (score, expected) in cases {
            assert_eq!(CreditRating::from_score(score), expected, "score {score}");
        }
    }

    #[test]
    fn serializes_display_labels() {
        let value = serde_json::to_value(CreditRating::VeryGood).expect("serializes");
        assert_eq!(value, serde_json::json!("Very Good"));
        assert_eq!(CreditRating::Error.to_string(), "Error");
    }
}
