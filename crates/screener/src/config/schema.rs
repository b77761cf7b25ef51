use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Pass mark used when a requirements document omits `threshold`.
pub const DEFAULT_THRESHOLD: f64 = 6.0;

/// Keyword configuration and pass mark that every upload is scored against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Requirements {
    pub requirements: Keywords,
    #[serde(default)]
    pub search_mode: SearchMode,
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

impl Requirements {
    pub fn flat<I, S>(keywords: I, threshold: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            requirements: Keywords::Flat(keywords.into_iter().map(Into::into).collect()),
            search_mode: SearchMode::Flat,
            threshold,
        }
    }

    pub fn sections<I, K, V, S>(sections: I, threshold: f64) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let sections = sections
            .into_iter()
            .map(|(name, keywords)| (name.into(), keywords.into_iter().map(Into::into).collect()))
            .collect();

        Self {
            requirements: Keywords::Sections(sections),
            search_mode: SearchMode::Section,
            threshold,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    Flat,
    #[default]
    Section,
}

impl std::fmt::Display for SearchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchMode::Flat => write!(f, "flat"),
            SearchMode::Section => write!(f, "section"),
        }
    }
}

/// Keywords either as one flat list or grouped under named sections.
///
/// Grouping only changes how the denominator is assembled; every keyword is
/// matched against the whole document text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Keywords {
    Flat(Vec<String>),
    Sections(BTreeMap<String, Vec<String>>),
}

impl Keywords {
    /// The search mode this shape belongs to.
    pub fn mode(&self) -> SearchMode {
        match self {
            Keywords::Flat(_) => SearchMode::Flat,
            Keywords::Sections(_) => SearchMode::Section,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Keywords::Flat(keywords) => keywords.len(),
            Keywords::Sections(sections) => sections.values().map(Vec::len).sum(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All keywords, section by section.
    pub fn iter(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        match self {
            Keywords::Flat(keywords) => Box::new(keywords.iter().map(String::as_str)),
            Keywords::Sections(sections) => {
                Box::new(sections.values().flatten().map(String::as_str))
            }
        }
    }
}
