use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace};

use crate::config::VocabularyConfig;
use crate::utils::{Error, SceneResult};

use super::types::SceneName;
use super::vocabulary::Vocabulary;

static CD_NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^cd\d+$").unwrap());
static SEASON_EPISODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^S(\d{2,})E(\d{2,})$").unwrap());
static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[12]\d{3}$").unwrap());

// An episode name halts the backward scan before it reaches S01E02
static SEASON_EPISODE_REMAINDER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(.*?)\.S(\d{2,})E(\d{2,})\.(.*?)$").unwrap());
// Same for an air date, with an optional episode name after it
static EPISODE_DATE_REMAINDER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.*?)\.(\d{4})\.(\d{2})\.(\d{2})(\.(.*?))?$").unwrap());

static DEFAULT_PARSER: Lazy<SceneParser> = Lazy::new(SceneParser::default);

/// Parse with the built-in vocabulary.
pub fn parse_scene_name(release_name: &str) -> SceneResult<SceneName> {
    DEFAULT_PARSER.parse(release_name)
}

/// Split a trailing `-GROUP` off the name. A suffix containing a dot is not a group.
pub fn split_group(release_name: &str) -> (&str, Option<&str>) {
    let Some(last_dash) = release_name.rfind('-') else {
        return (release_name, None);
    };

    let candidate = &release_name[last_dash + 1..];
    if candidate.contains('.') {
        (release_name, None)
    } else {
        (&release_name[..last_dash], Some(candidate))
    }
}

#[derive(Debug, Clone, Default)]
pub struct SceneParser {
    vocabulary: Vocabulary,
}

impl SceneParser {
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self { vocabulary }
    }

    pub fn from_config(cfg: &VocabularyConfig) -> Self {
        Self::new(Vocabulary::from(cfg))
    }

    /// Parse a scene release name such as `Show.Name.S01E02.HDTV.x264-GROUP`.
    ///
    /// Only an embedded date that is not a real calendar day fails; anything else that
    /// isn't recognized is simply left unset.
    pub fn parse(&self, release_name: &str) -> SceneResult<SceneName> {
        let mut parsed = SceneName::default();

        let (name, group) = split_group(release_name);
        parsed.group = group.map(str::to_string);

        let mut parts: Vec<&str> = name.split('.').collect();
        self.scan_backward(&mut parts, &mut parsed);
        parsed.title = parts.join(".");

        refine_remainder(&mut parsed)?;

        debug!("Parsed '{}': {:?}", release_name, parsed);
        Ok(parsed)
    }

    /// Consume recognized tokens from the end of `parts`, leaving the title tokens behind.
    fn scan_backward(&self, parts: &mut Vec<&str>, parsed: &mut SceneName) {
        while let Some(part) = parts.pop() {
            if let Some(encoding) = self.vocabulary.encoding(part) {
                if parsed.encoding.is_none() {
                    parsed.encoding = Some(encoding.to_string());
                }
                continue;
            }

            if let Some(source) = self.vocabulary.source(part) {
                parsed.set_source(source);
                continue;
            }

            if let Some(tag) = self.vocabulary.tag(part) {
                parsed.tags.push(tag.to_string());
                continue;
            }

            if CD_NUMBER_RE.is_match(part) {
                parsed.cd_number = Some(part.to_string());
                continue;
            }

            if let Some(caps) = SEASON_EPISODE_RE.captures(part) {
                parsed.set_season_episode(&caps[1], &caps[2]);
                continue;
            }

            if YEAR_RE.is_match(part) {
                parsed.production_year = Some(part.to_string());
                continue;
            }

            trace!("Backward scan stopped at '{}'", part);
            parts.push(part);
            break;
        }
    }
}

struct DateRemainder {
    title: String,
    year: String,
    month: String,
    day: String,
    episode_name: Option<String>,
}

/// Recover season/episode and air date still embedded in the title. Both passes always run,
/// the date pass on whatever title the season pass left.
fn refine_remainder(parsed: &mut SceneName) -> SceneResult<()> {
    let episode = SEASON_EPISODE_REMAINDER_RE
        .captures(&parsed.title)
        .map(|caps| {
            (
                caps[1].to_string(),
                caps[2].to_string(),
                caps[3].to_string(),
                caps[4].to_string(),
            )
        });

    if let Some((title, season, episode, episode_name)) = episode {
        debug!("Season/episode found in title '{}'", parsed.title);
        parsed.title = title;
        parsed.set_season_episode(season, episode);
        parsed.episode_name = Some(episode_name);
    }

    let dated = EPISODE_DATE_REMAINDER_RE
        .captures(&parsed.title)
        .map(|caps| DateRemainder {
            title: caps[1].to_string(),
            year: caps[2].to_string(),
            month: caps[3].to_string(),
            day: caps[4].to_string(),
            episode_name: caps.get(6).map(|m| m.as_str().to_string()),
        });

    if let Some(remainder) = dated {
        debug!("Episode date found in title '{}'", parsed.title);
        parsed.episode_date = Some(episode_date(&remainder)?);
        parsed.title = remainder.title;
        parsed.episode_name = remainder.episode_name;
    }

    Ok(())
}

fn episode_date(remainder: &DateRemainder) -> SceneResult<NaiveDate> {
    let year = remainder.year.parse::<i32>().ok();
    let month = remainder.month.parse::<u32>().ok();
    let day = remainder.day.parse::<u32>().ok();

    match (year, month, day) {
        (Some(y), Some(m), Some(d)) => NaiveDate::from_ymd_opt(y, m, d),
        _ => None,
    }
    .ok_or_else(|| Error::InvalidDate {
        year: remainder.year.clone(),
        month: remainder.month.clone(),
        day: remainder.day.clone(),
    })
}
