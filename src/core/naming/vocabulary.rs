use crate::config::VocabularyConfig;

use super::types::{ReleaseType, SourceMatch};

pub const ENCODINGS: &[&str] = &["XviD", "x264"];

pub const MOVIE_SOURCES: &[&str] = &["DVDRip", "BDRip", "BluRay"];

pub const TV_SOURCES: &[&str] = &["DSR", "PDTV", "HDTV"];

pub const EBOOK_SOURCES: &[&str] = &["EBook"];

/// Generic markers (editions, cuts, resolutions). Order matters: the first case-insensitive hit
/// wins, so `RETAiL` is never returned while `RETAIL` precedes it.
pub const TAGS: &[&str] = &[
    "FESTIVAL",
    "STV",
    "LIMITED",
    "TV",
    "READ.NFO",
    "WS",
    "FS",
    "PROPER",
    "REPACK",
    "RERIP",
    "REAL",
    "RETAIL",
    "EXTENDED",
    "REMASTERED",
    "RATED",
    "UNRATED",
    "CHRONO",
    "THEATRICAL",
    "DC",
    "SE",
    "UNCUT",
    "INTERNAL",
    "DUBBED",
    "SUBBED",
    "FINAL",
    "COLORIZED",
    "1080p",
    "720p",
    "RETAiL",
];

/// An ordered list of canonical tag spellings with case-insensitive lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagTable {
    entries: Vec<String>,
    folded: Vec<String>,
}

impl TagTable {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries: Vec<String> = entries.into_iter().map(Into::into).collect();
        let folded = entries.iter().map(|e| e.to_lowercase()).collect();
        Self { entries, folded }
    }

    /// Canonical spelling of `token`, exact match only.
    pub fn lookup(&self, token: &str) -> Option<&str> {
        let token = token.to_lowercase();
        self.folded
            .iter()
            .position(|f| *f == token)
            .map(|i| self.entries[i].as_str())
    }
}

/// Look `token` up in each table in turn and return the first canonical match.
pub fn classify<'a>(token: &str, tables: &[&'a TagTable]) -> Option<&'a str> {
    tables.iter().find_map(|table| table.lookup(token))
}

/// The full set of tables the parser classifies tokens against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    pub encoding: TagTable,
    pub movie_source: TagTable,
    pub tv_source: TagTable,
    pub ebook_source: TagTable,
    pub tags: TagTable,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::from(&VocabularyConfig::default())
    }
}

impl From<&VocabularyConfig> for Vocabulary {
    fn from(cfg: &VocabularyConfig) -> Self {
        Self {
            encoding: TagTable::new(cfg.encoding.iter().cloned()),
            movie_source: TagTable::new(cfg.movie_source.iter().cloned()),
            tv_source: TagTable::new(cfg.tv_source.iter().cloned()),
            ebook_source: TagTable::new(cfg.ebook_source.iter().cloned()),
            tags: TagTable::new(cfg.tags.iter().cloned()),
        }
    }
}

impl Vocabulary {
    pub fn encoding(&self, token: &str) -> Option<&str> {
        classify(token, &[&self.encoding])
    }

    /// Source tables are checked movie, tv, ebook; the table that matched decides the release type.
    pub fn source(&self, token: &str) -> Option<SourceMatch<'_>> {
        [
            (&self.movie_source, ReleaseType::Movie),
            (&self.tv_source, ReleaseType::Tv),
            (&self.ebook_source, ReleaseType::EBook),
        ]
        .into_iter()
        .find_map(|(table, release_type)| {
            table
                .lookup(token)
                .map(|name| SourceMatch::new(name, release_type))
        })
    }

    pub fn tag(&self, token: &str) -> Option<&str> {
        classify(token, &[&self.tags])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive_and_canonical() {
        let table = TagTable::new(ENCODINGS.iter().copied());
        assert_eq!(table.lookup("X264"), Some("x264"));
        assert_eq!(table.lookup("xvid"), Some("XviD"));
        assert_eq!(table.lookup("x2640"), None);
        assert_eq!(table.lookup("x26"), None);
    }

    #[test]
    fn classify_checks_tables_in_order() {
        let first = TagTable::new(["Proper"]);
        let second = TagTable::new(["PROPER", "REPACK"]);
        assert_eq!(classify("proper", &[&first, &second]), Some("Proper"));
        assert_eq!(classify("proper", &[&second, &first]), Some("PROPER"));
        assert_eq!(classify("repack", &[&first, &second]), Some("REPACK"));
        assert_eq!(classify("nuked", &[&first, &second]), None);
        assert_eq!(classify("anything", &[]), None);
    }

    #[test]
    fn first_retail_spelling_wins() {
        let vocab = Vocabulary::default();
        assert_eq!(vocab.tag("RETAiL"), Some("RETAIL"));
        assert_eq!(vocab.tag("retail"), Some("RETAIL"));
    }

    #[test]
    fn source_reports_release_type() {
        let vocab = Vocabulary::default();

        let hdtv = vocab.source("hdtv").unwrap();
        assert_eq!(hdtv.name(), "HDTV");
        assert_eq!(hdtv.release_type(), ReleaseType::Tv);

        let bluray = vocab.source("BLURAY").unwrap();
        assert_eq!(bluray.name(), "BluRay");
        assert_eq!(bluray.release_type(), ReleaseType::Movie);

        assert_eq!(vocab.source("ebook").unwrap().release_type(), ReleaseType::EBook);
        assert!(vocab.source("x264").is_none());
    }

    #[test]
    fn configured_vocabulary_replaces_defaults() {
        let cfg = VocabularyConfig {
            tv_source: vec!["WEBRip".to_string()],
            ..VocabularyConfig::default()
        };
        let vocab = Vocabulary::from(&cfg);
        assert_eq!(vocab.source("webrip").unwrap().release_type(), ReleaseType::Tv);
        assert!(vocab.source("HDTV").is_none());
    }
}
