use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum ReleaseType {
    Movie,
    #[serde(rename = "TV")]
    Tv,
    EBook,
    #[default]
    Unknown,
}

impl ReleaseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReleaseType::Movie => "Movie",
            ReleaseType::Tv => "TV",
            ReleaseType::EBook => "EBook",
            ReleaseType::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for ReleaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A source tag resolved against the vocabulary, carrying the release type of the table it
/// came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceMatch<'a> {
    name: &'a str,
    release_type: ReleaseType,
}

impl<'a> SourceMatch<'a> {
    pub(crate) fn new(name: &'a str, release_type: ReleaseType) -> Self {
        Self { name, release_type }
    }

    pub fn name(&self) -> &'a str {
        self.name
    }

    pub fn release_type(&self) -> ReleaseType {
        self.release_type
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeasonEpisode {
    pub season: String,
    pub episode: String,
}

/// Metadata extracted from a single release name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SceneName {
    pub title: String,
    pub group: Option<String>,
    pub encoding: Option<String>,
    source: Option<String>,
    release_type: ReleaseType,
    /// Generic tags in the order they were consumed, i.e. right to left.
    pub tags: Vec<String>,
    pub production_year: Option<String>,
    pub cd_number: Option<String>,
    #[serde(flatten)]
    pub episode_number: Option<SeasonEpisode>,
    pub episode_name: Option<String>,
    pub episode_date: Option<NaiveDate>,
}

impl SceneName {
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn release_type(&self) -> ReleaseType {
        self.release_type
    }

    /// Source and release type only ever change together.
    pub fn set_source(&mut self, source: SourceMatch<'_>) {
        self.source = Some(source.name.to_string());
        self.release_type = source.release_type;
    }

    pub fn season(&self) -> Option<&str> {
        self.episode_number.as_ref().map(|n| n.season.as_str())
    }

    pub fn episode(&self) -> Option<&str> {
        self.episode_number.as_ref().map(|n| n.episode.as_str())
    }

    pub fn set_season_episode(&mut self, season: impl Into<String>, episode: impl Into<String>) {
        self.episode_number = Some(SeasonEpisode {
            season: season.into(),
            episode: episode.into(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_type_follows_source() {
        let mut scene = SceneName::default();
        assert_eq!(scene.release_type(), ReleaseType::Unknown);
        assert!(scene.source().is_none());

        scene.set_source(SourceMatch::new("HDTV", ReleaseType::Tv));
        assert_eq!(scene.source(), Some("HDTV"));
        assert_eq!(scene.release_type(), ReleaseType::Tv);

        scene.set_source(SourceMatch::new("BDRip", ReleaseType::Movie));
        assert_eq!(scene.source(), Some("BDRip"));
        assert_eq!(scene.release_type(), ReleaseType::Movie);
    }

    #[test]
    fn season_and_episode_are_set_together() {
        let mut scene = SceneName::default();
        assert_eq!((scene.season(), scene.episode()), (None, None));

        scene.set_season_episode("01", "02");
        assert_eq!((scene.season(), scene.episode()), (Some("01"), Some("02")));
    }

    #[test]
    fn serializes_flat_record() {
        let mut scene = SceneName {
            title: "Show.Name".to_string(),
            episode_date: NaiveDate::from_ymd_opt(2020, 1, 15),
            ..SceneName::default()
        };
        scene.set_source(SourceMatch::new("HDTV", ReleaseType::Tv));
        scene.set_season_episode("01", "02");

        let json = serde_json::to_value(&scene).unwrap();
        assert_eq!(json["release_type"], "TV");
        assert_eq!(json["source"], "HDTV");
        assert_eq!(json["season"], "01");
        assert_eq!(json["episode"], "02");
        assert_eq!(json["episode_date"], "2020-01-15");
        assert!(json["group"].is_null());
    }

    #[test]
    fn release_type_display() {
        assert_eq!(ReleaseType::Tv.to_string(), "TV");
        assert_eq!(ReleaseType::EBook.to_string(), "EBook");
        assert_eq!(ReleaseType::default().to_string(), "Unknown");
    }
}
