use serde::{Deserialize, Serialize};
use std::fmt;

/// Activity category assigned to a single URL.
///
/// The set is closed: `Miscellaneous` is the fallback for anything no rule
/// claims, so every URL maps to exactly one variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Education/Career")]
    EducationCareer,
    #[serde(rename = "Social/Entertainment")]
    SocialEntertainment,
    #[serde(rename = "Shopping")]
    Shopping,
    #[serde(rename = "Finance")]
    Finance,
    #[serde(rename = "Travel")]
    Travel,
    #[serde(rename = "General Search")]
    GeneralSearch,
    #[serde(rename = "Miscellaneous")]
    Miscellaneous,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::EducationCareer,
        Category::SocialEntertainment,
        Category::Shopping,
        Category::Finance,
        Category::Travel,
        Category::GeneralSearch,
        Category::Miscellaneous,
    ];

    /// Human label, also used as the proportion column name.
    pub fn label(&self) -> &'static str {
        match self {
            Category::EducationCareer => "Education/Career",
            Category::SocialEntertainment => "Social/Entertainment",
            Category::Shopping => "Shopping",
            Category::Finance => "Finance",
            Category::Travel => "Travel",
            Category::GeneralSearch => "General Search",
            Category::Miscellaneous => "Miscellaneous",
        }
    }

    /// Parse a label back into a category (case-insensitive).
    pub fn from_label(s: &str) -> Option<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
