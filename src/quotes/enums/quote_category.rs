use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteCategory {
    Motivation,
    Finance,
    Life,
    Study,
    Work,
    #[default]
    Other,
}

impl QuoteCategory {
    pub fn value(&self) -> &str {
        match *self {
            Self::Motivation => "motivation",
            Self::Finance => "finance",
            Self::Life => "life",
            Self::Study => "study",
            Self::Work => "work",
            Self::Other => "other",
        }
    }
}

impl TryFrom<String> for QuoteCategory {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "motivation" => Ok(Self::Motivation),
            "finance" => Ok(Self::Finance),
            "life" => Ok(Self::Life),
            "study" => Ok(Self::Study),
            "work" => Ok(Self::Work),
            "other" => Ok(Self::Other),
            _ => Err(format!("unknown quote category: {}", value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_matches_column_value() {
        let category = QuoteCategory::try_from("finance".to_string()).unwrap();

        assert_eq!(category, QuoteCategory::Finance);
        assert_eq!(category.value(), "finance");
        assert!(QuoteCategory::try_from("poetry".to_string()).is_err());
    }
}
