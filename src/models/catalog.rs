//! Catalog data models.

use serde::{Deserialize, Serialize};

/// Production status of a movie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReleaseStatus {
    Released,
    Rumored,
    PostProduction,
    InProduction,
    Planned,
    Canceled,
}

impl std::fmt::Display for ReleaseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReleaseStatus::Released => write!(f, "Released"),
            ReleaseStatus::Rumored => write!(f, "Rumored"),
            ReleaseStatus::PostProduction => write!(f, "Post production"),
            ReleaseStatus::InProduction => write!(f, "In production"),
            ReleaseStatus::Planned => write!(f, "Planned"),
            ReleaseStatus::Canceled => write!(f, "Canceled"),
        }
    }
}

/// Genre tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    pub id: String,
    pub name: String,
}

/// Spoken language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Language {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
}

/// Production country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
}

/// Image URLs in the sizes the catalog offers. Any size may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageSet {
    #[serde(default)]
    pub small: Option<String>,
    #[serde(default)]
    pub medium: Option<String>,
    #[serde(default)]
    pub large: Option<String>,
}

impl ImageSet {
    /// Largest available image.
    pub fn best(&self) -> Option<&str> {
        self.large
            .as_deref()
            .or(self.medium.as_deref())
            .or(self.small.as_deref())
    }
}

/// One movie as returned by the catalog service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    /// Catalog identifier, the only key used for selection.
    pub id: String,
    /// Display name.
    pub name: String,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub tagline: Option<String>,
    /// ISO-8601 date or date-time.
    #[serde(default)]
    pub release_date: Option<String>,
    /// Rating on a 0-10 scale.
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub votes: Option<u64>,
    /// Runtime in minutes.
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub genres: Vec<Genre>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub languages: Vec<Language>,
    #[serde(default, rename = "country", deserialize_with = "null_as_empty")]
    pub countries: Vec<Country>,
    #[serde(default)]
    pub status: Option<ReleaseStatus>,
    #[serde(default)]
    pub adult: Option<bool>,
    #[serde(default)]
    pub poster: Option<ImageSet>,
    #[serde(default)]
    pub backdrop: Option<ImageSet>,
    /// Related movies, only present when fetched with `similar`.
    #[serde(default)]
    pub similar: Option<Vec<CatalogItem>>,
}

/// GraphQL returns `null` for empty lists as often as `[]`.
fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

impl CatalogItem {
    /// Score with one decimal, or `N/A`.
    pub fn score_label(&self) -> String {
        match self.score {
            Some(score) => format!("{:.1}", score),
            None => "N/A".to_string(),
        }
    }

    /// Comma-separated genre names, or `Unknown`.
    pub fn genre_label(&self) -> String {
        if self.genres.is_empty() {
            "Unknown".to_string()
        } else {
            self.genres
                .iter()
                .map(|g| g.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        }
    }

    /// Parsed release date.
    pub fn release(&self) -> Option<chrono::NaiveDate> {
        let raw = self.release_date.as_deref()?.trim();
        if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
            return Some(dt.date_naive());
        }
        // Date-only values, possibly followed by a time part we don't need
        raw.get(..10)
            .and_then(|d| chrono::NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
    }

    /// Release year.
    pub fn release_year(&self) -> Option<i32> {
        use chrono::Datelike;
        self.release().map(|d| d.year())
    }

    /// Release date as e.g. `October 15, 1999`.
    pub fn release_date_long(&self) -> Option<String> {
        self.release().map(|d| d.format("%B %-d, %Y").to_string())
    }

    /// Embedded related movies, empty when not fetched.
    pub fn similar_items(&self) -> &[CatalogItem] {
        self.similar.as_deref().unwrap_or(&[])
    }

    /// Score scaled to five stars.
    pub fn stars(&self) -> Option<f64> {
        self.score.map(|s| (s / 10.0 * 5.0).clamp(0.0, 5.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_search_record() {
        let json = r#"{
            "id": "550",
            "name": "Fight Club",
            "overview": "A ticking-time-bomb insomniac...",
            "releaseDate": "1999-10-15T00:00:00.000Z",
            "score": 8.4,
            "genres": [{ "id": "18", "name": "Drama" }],
            "poster": { "small": "https://img/s.jpg" },
            "runtime": 139,
            "tagline": null,
            "votes": 26280,
            "adult": false
        }"#;

        let item: CatalogItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, "550");
        assert_eq!(item.genre_label(), "Drama");
        assert_eq!(item.score_label(), "8.4");
        assert_eq!(item.release_year(), Some(1999));
        assert_eq!(item.release_date_long().as_deref(), Some("October 15, 1999"));
        assert!(item.languages.is_empty());
        assert!(item.similar.is_none());
        assert_eq!(item.poster.unwrap().best(), Some("https://img/s.jpg"));
    }

    #[test]
    fn test_decode_related_record() {
        let json = r#"{
            "id": "550",
            "name": "Fight Club",
            "status": "POST_PRODUCTION",
            "languages": [{ "name": "English" }],
            "country": null,
            "genres": null,
            "similar": [{ "id": "807", "name": "Se7en" }]
        }"#;

        let item: CatalogItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.status, Some(ReleaseStatus::PostProduction));
        assert_eq!(item.languages[0].name, "English");
        assert!(item.countries.is_empty());
        assert_eq!(item.genre_label(), "Unknown");
        assert_eq!(item.similar_items().len(), 1);
        assert_eq!(item.similar_items()[0].name, "Se7en");
    }

    #[test]
    fn test_missing_values() {
        let item = CatalogItem {
            id: "1".to_string(),
            name: "Untitled".to_string(),
            release_date: Some("soon".to_string()),
            ..Default::default()
        };
        assert_eq!(item.score_label(), "N/A");
        assert_eq!(item.release_year(), None);
        assert_eq!(item.stars(), None);
        assert!(item.similar_items().is_empty());
    }

    #[test]
    fn test_plain_date_and_stars() {
        let item = CatalogItem {
            release_date: Some("2024-03-01".to_string()),
            score: Some(7.0),
            ..Default::default()
        };
        assert_eq!(item.release_year(), Some(2024));
        assert_eq!(item.stars(), Some(3.5));
    }
}
