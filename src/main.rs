use std::io::BufRead;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::str::FromStr;

use clap::{Parser, Subcommand};
use tracing::Level;

use scene_extractor::config::Config;
use scene_extractor::core::extract;
use scene_extractor::core::naming::{SceneName, SceneParser};

#[derive(Debug, Parser)]
#[command(name = "scene-extractor", version, about = "Extract metadata from scene release names")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse release names (read from stdin when none are given)
    Parse {
        /// Print each record as JSON
        #[arg(long)]
        json: bool,
        names: Vec<String>,
    },
    /// Show where a release would be extracted and which archives would be used
    Plan {
        name: String,
        /// Directory the release was downloaded to
        #[arg(long, default_value = ".")]
        save_path: PathBuf,
        /// Release file, relative to the save path (repeatable)
        #[arg(long = "file")]
        files: Vec<String>,
    },
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = match Config::init() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to initialize configuration: {e}");
            return ExitCode::FAILURE;
        }
    };
    init_logging(&config);

    let parser = SceneParser::from_config(&config.vocabulary);

    let ok = match cli.command {
        Command::Parse { json, names } => {
            let names = if names.is_empty() { read_stdin_names() } else { names };
            let mut ok = true;
            for name in names {
                ok &= parse_and_print(&parser, &name, json);
            }
            ok
        }
        Command::Plan { name, save_path, files } => {
            plan(&parser, &config, &name, &save_path, &files)
        }
    };

    if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

fn init_logging(config: &Config) {
    tracing_subscriber::fmt()
        .with_max_level(Level::from_str(&config.logs.level).unwrap_or(Level::INFO))
        .with_writer(std::io::stderr)
        .init();
}

fn read_stdin_names() -> Vec<String> {
    std::io::stdin()
        .lock()
        .lines()
        .map_while(Result::ok)
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .collect()
}

fn parse_and_print(parser: &SceneParser, name: &str, json: bool) -> bool {
    let scene = match parser.parse(name) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Failed to parse '{}': {e}", name);
            return false;
        }
    };

    if json {
        match serde_json::to_string(&scene) {
            Ok(out) => println!("{out}"),
            Err(e) => {
                tracing::error!("Failed to serialize '{}': {e}", name);
                return false;
            }
        }
    } else {
        print_scene(name, &scene);
    }
    true
}

fn print_scene(name: &str, scene: &SceneName) {
    println!("Release: {}", name);
    println!(
        "  Title: {} | Type: {} | Group: {:?}",
        scene.title,
        scene.release_type(),
        scene.group
    );
    println!(
        "  Source: {:?} | Encoding: {:?} | Year: {:?} | CD: {:?}",
        scene.source(),
        scene.encoding,
        scene.production_year,
        scene.cd_number
    );
    println!(
        "  Season: {:?} | Episode: {:?} | Name: {:?} | Date: {:?}",
        scene.season(),
        scene.episode(),
        scene.episode_name,
        scene.episode_date
    );
    println!("  Tags: {:?}\n", scene.tags);
}

fn plan(
    parser: &SceneParser,
    config: &Config,
    name: &str,
    save_path: &Path,
    files: &[String],
) -> bool {
    let scene = match parser.parse(name) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Failed to parse '{}': {e}", name);
            return false;
        }
    };

    let destination = extract::extract_path(Path::new(&config.extract.base), &scene);
    println!("Destination: {}", destination.display());

    match extract::select_archive_volumes(save_path, files) {
        Ok(volumes) if volumes.is_empty() => {
            tracing::info!("No archives to extract for '{}'", name);
            true
        }
        Ok(volumes) => {
            for volume in volumes {
                println!("  Extract: {}", volume.display());
            }
            true
        }
        Err(e) => {
            tracing::error!("{e}");
            false
        }
    }
}
