use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
#[error(
    "Invalid category '{0}'. Accepted values: 'kids_athletics', 'sports', 'family', 'running', 'fair', 'community', 'entertainment', 'college_sports', 'high_school_sports'"
)]
pub struct CategoryParseError(String);

/// Recommended classification vocabulary for catalogue entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    KidsAthletics,
    Sports,
    Family,
    Running,
    Fair,
    Community,
    Entertainment,
    CollegeSports,
    HighSchoolSports,
}

impl Category {
    pub fn slug(&self) -> &'static str {
        match self {
            Category::KidsAthletics => "kids_athletics",
            Category::Sports => "sports",
            Category::Family => "family",
            Category::Running => "running",
            Category::Fair => "fair",
            Category::Community => "community",
            Category::Entertainment => "entertainment",
            Category::CollegeSports => "college_sports",
            Category::HighSchoolSports => "high_school_sports",
        }
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "kids_athletics" => Ok(Category::KidsAthletics),
            "sports" => Ok(Category::Sports),
            "family" => Ok(Category::Family),
            "running" => Ok(Category::Running),
            "fair" => Ok(Category::Fair),
            "community" => Ok(Category::Community),
            "entertainment" => Ok(Category::Entertainment),
            "college_sports" => Ok(Category::CollegeSports),
            "high_school_sports" => Ok(Category::HighSchoolSports),
            _ => Err(CategoryParseError(s.to_string())),
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

/// Provenance of a group of events: the provider name and its public page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Source {
    pub name: &'static str,
    pub url: &'static str,
}

impl Source {
    pub const fn new(name: &'static str, url: &'static str) -> Self {
        Self { name, url }
    }
}

/// A single catalogue entry.
///
/// Field order is the export column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub title: String,
    pub date: String,
    pub time: Option<String>,
    pub location: String,
    pub venue: Option<String>,
    pub category: String,
    pub subcategory: Option<String>,
    pub source: String,
    pub source_url: String,
    pub description: Option<String>,
    pub city: Option<String>,
    pub teams: Option<String>,
    pub age_group: Option<String>,
    pub registration_url: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} | {} | {}",
            self.title,
            self.date,
            self.city.as_deref().unwrap_or("None")
        )
    }
}
