//! Category: the closed set of topics a post can be filed under.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// One of the seven fixed post categories.
///
/// Serialized as its human-readable label (e.g. `"Spells & Charms"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Spells & Charms")]
    SpellsAndCharms,
    #[serde(rename = "Magical Creatures")]
    MagicalCreatures,
    #[serde(rename = "Potions")]
    Potions,
    #[serde(rename = "Dark Arts Defense")]
    DarkArtsDefense,
    #[serde(rename = "Wizarding World")]
    WizardingWorld,
    #[serde(rename = "Quidditch")]
    Quidditch,
    #[serde(rename = "Magical History")]
    MagicalHistory,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Self; 7] = [
        Self::SpellsAndCharms,
        Self::MagicalCreatures,
        Self::Potions,
        Self::DarkArtsDefense,
        Self::WizardingWorld,
        Self::Quidditch,
        Self::MagicalHistory,
    ];

    /// Human-readable label, also used as the wire value.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::SpellsAndCharms => "Spells & Charms",
            Self::MagicalCreatures => "Magical Creatures",
            Self::Potions => "Potions",
            Self::DarkArtsDefense => "Dark Arts Defense",
            Self::WizardingWorld => "Wizarding World",
            Self::Quidditch => "Quidditch",
            Self::MagicalHistory => "Magical History",
        }
    }

    /// Badge icon shown next to the label.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::SpellsAndCharms => "✨",
            Self::MagicalCreatures => "🐉",
            Self::Potions => "🧪",
            Self::DarkArtsDefense => "🛡️",
            Self::WizardingWorld => "🏰",
            Self::Quidditch => "🧹",
            Self::MagicalHistory => "📜",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.label() == s)
            .ok_or_else(|| ValidationError::UnknownCategory(s.to_string()))
    }
}
