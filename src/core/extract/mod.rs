pub mod archives;

use std::path::{Path, PathBuf};

use crate::core::naming::SceneName;

pub use archives::select_archive_volumes;

/// Destination directory for a parsed release:
/// <base>/<release_type>/<title>/Season <season>/Episode <episode>
/// <base>/<release_type>/<title>/<YYYY.MM.DD>
/// <base>/<release_type>/<title>
pub fn extract_path(base: &Path, scene: &SceneName) -> PathBuf {
    let mut path = base.join(scene.release_type().as_str()).join(&scene.title);

    if let Some(number) = &scene.episode_number {
        path.push(format!("Season {}", number.season));
        path.push(format!("Episode {}", number.episode));
    } else if let Some(date) = scene.episode_date {
        path.push(date.format("%Y.%m.%d").to_string());
    }

    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::naming::parse_scene_name;

    #[test]
    fn tv_episode_path() {
        let scene = parse_scene_name("Show.Name.S01E02.HDTV.x264-GROUP").unwrap();
        assert_eq!(
            extract_path(Path::new("/media"), &scene),
            PathBuf::from("/media/TV/Show.Name/Season 01/Episode 02")
        );
    }

    #[test]
    fn dated_episode_path() {
        let scene = parse_scene_name("Show.Name.2020.01.15.Episode.Title.HDTV-GROUP").unwrap();
        assert_eq!(
            extract_path(Path::new("/media"), &scene),
            PathBuf::from("/media/TV/Show.Name/2020.01.15")
        );
    }

    #[test]
    fn movie_and_unknown_paths() {
        let movie = parse_scene_name("Movie.Title.2011.BDRip.XviD-GROUP").unwrap();
        assert_eq!(
            extract_path(Path::new("To Watch"), &movie),
            PathBuf::from("To Watch/Movie/Movie.Title")
        );

        let unknown = parse_scene_name("Some.Thing-GRP").unwrap();
        assert_eq!(
            extract_path(Path::new("To Watch"), &unknown),
            PathBuf::from("To Watch/Unknown/Some.Thing")
        );
    }
}
