use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use galtags::{
    Gallery, GalleryError, ImageRecord, NormalizerConfig, ParsedFilename, ScanError, TagDictionary,
    TagNormalizer, TagStats, extract_main_title, scan_folder, tagger::parse_filename,
};

/// galtags - extract titles and tags from image filenames
#[derive(Parser)]
#[command(name = "galtags")]
#[command(about = "Tag-aware image gallery over a local folder")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// Split filenames into a title and canonical tags
    Parse(ParseCommand),
    /// Show the legacy first-comma title of filenames
    Title(TitleCommand),
    /// Print the canonical form of tags
    Normalize(NormalizeCommand),
    /// Load a folder and list its images
    Scan(ScanCommand),
    /// Show tag statistics for a folder
    Stats(StatsCommand),
    /// List the built-in tag dictionary
    Dictionary(DictionaryCommand),
}

#[derive(Parser)]
struct ParseCommand {
    /// Filenames to parse
    #[arg(value_name = "FILENAME", required = true)]
    filenames: Vec<String>,

    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Parser)]
struct TitleCommand {
    /// Filenames to extract titles from
    #[arg(value_name = "FILENAME", required = true)]
    filenames: Vec<String>,
}

#[derive(Parser)]
struct NormalizeCommand {
    /// Raw tags to normalize
    #[arg(value_name = "TAG", required = true)]
    tags: Vec<String>,
}

#[derive(Parser)]
struct ScanCommand {
    /// Folder to load
    #[arg(value_name = "DIR")]
    dir: PathBuf,

    /// Only show images with a tag containing this text
    #[arg(short, long, value_name = "TAG")]
    tag: Option<String>,

    /// Only show images whose title or tags contain this text
    #[arg(short, long, value_name = "TEXT")]
    search: Option<String>,

    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Parser)]
struct StatsCommand {
    /// Folder to load
    #[arg(value_name = "DIR")]
    dir: PathBuf,

    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Parser)]
struct DictionaryCommand {
    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    let normalizer = TagNormalizer::with_config(NormalizerConfig::from_env());

    let result = match &cli.command {
        Commands::Parse(cmd) => handle_parse(cmd, &normalizer),
        Commands::Title(cmd) => handle_title(cmd),
        Commands::Normalize(cmd) => handle_normalize(cmd, &normalizer),
        Commands::Scan(cmd) => handle_scan(cmd, normalizer),
        Commands::Stats(cmd) => handle_stats(cmd, normalizer),
        Commands::Dictionary(cmd) => handle_dictionary(cmd),
    };

    if let Err(e) = result {
        let exit_code = if is_user_error(&e) { 1 } else { 2 };
        eprintln!("Error: {e:#}");
        std::process::exit(exit_code);
    }
}

/// Determines if an error is a user error (vs internal error).
///
/// User errors are bad folder paths and unknown image ids.
fn is_user_error(error: &anyhow::Error) -> bool {
    error.chain().any(|cause| {
        cause.downcast_ref::<GalleryError>().is_some()
            || matches!(
                cause.downcast_ref::<ScanError>(),
                Some(ScanError::NotFound(_) | ScanError::NotADirectory(_))
            )
    })
}

fn handle_parse(cmd: &ParseCommand, normalizer: &TagNormalizer) -> Result<()> {
    let parsed: Vec<(&str, ParsedFilename)> = cmd
        .filenames
        .iter()
        .map(|name| (name.as_str(), parse_filename(name, normalizer)))
        .collect();

    if cmd.json {
        let values: Vec<serde_json::Value> = parsed
            .iter()
            .map(|(filename, p)| {
                serde_json::json!({ "filename": filename, "title": p.title, "tags": p.tags })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&values)?);
    } else {
        for (filename, p) in &parsed {
            println!("{}", format_parsed(filename, p));
        }
    }
    Ok(())
}

fn handle_title(cmd: &TitleCommand) -> Result<()> {
    for filename in &cmd.filenames {
        println!("{}", extract_main_title(filename));
    }
    Ok(())
}

fn handle_normalize(cmd: &NormalizeCommand, normalizer: &TagNormalizer) -> Result<()> {
    for tag in &cmd.tags {
        println!("{tag}\t{}", normalizer.normalize(tag));
    }
    Ok(())
}

fn handle_scan(cmd: &ScanCommand, normalizer: TagNormalizer) -> Result<()> {
    let mut gallery = load_gallery(&cmd.dir, normalizer)?;
    if let Some(tag) = &cmd.tag {
        gallery.select_tag(tag);
    }
    if let Some(search) = &cmd.search {
        gallery.set_search(search);
    }

    let images = gallery.filtered_images();
    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&images)?);
    } else {
        for image in &images {
            println!("{}", format_image(image));
        }
        println!(
            "{} of {} images in {}",
            images.len(),
            gallery.images().len(),
            gallery.folder_name().unwrap_or_default()
        );
    }
    Ok(())
}

fn handle_stats(cmd: &StatsCommand, normalizer: TagNormalizer) -> Result<()> {
    let gallery = load_gallery(&cmd.dir, normalizer)?;

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(gallery.tag_stats())?);
    } else {
        for stats in gallery.tag_stats() {
            println!("{}", format_stats(stats));
        }
    }
    Ok(())
}

fn handle_dictionary(cmd: &DictionaryCommand) -> Result<()> {
    let dictionary = TagDictionary::builtin();
    if cmd.json {
        let entries: Vec<(&str, &str)> = dictionary.iter().collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        for (variant, canonical) in dictionary.iter() {
            println!("{variant}\t{canonical}");
        }
    }
    Ok(())
}

/// Scans `dir` and loads its images into a fresh gallery.
fn load_gallery(dir: &Path, normalizer: TagNormalizer) -> Result<Gallery> {
    let files = scan_folder(dir)
        .with_context(|| format!("Failed to scan folder: {}", dir.display()))?;

    let mut gallery = Gallery::with_normalizer(normalizer);
    gallery.load_folder(files);
    Ok(gallery)
}

fn format_parsed(filename: &str, parsed: &ParsedFilename) -> String {
    if parsed.tags.is_empty() {
        format!("{filename}\n  title: {}", parsed.title)
    } else {
        format!(
            "{filename}\n  title: {}\n  tags: {}",
            parsed.title,
            parsed.tags.join(", ")
        )
    }
}

fn format_image(image: &ImageRecord) -> String {
    let star = if image.is_favorite() { "*" } else { " " };
    if image.tags().is_empty() {
        format!("{star} {} [{}]", image.title(), image.folder())
    } else {
        format!(
            "{star} {} [{}] ({})",
            image.title(),
            image.folder(),
            image.tags().join(", ")
        )
    }
}

fn format_stats(stats: &TagStats) -> String {
    let mut line = format!("{:>4}  {}", stats.count, stats.canonical);
    let others: Vec<&str> = stats
        .variants
        .iter()
        .map(String::as_str)
        .filter(|variant| *variant != stats.canonical)
        .collect();
    if !others.is_empty() {
        line.push_str(&format!("  (also: {})", others.join(", ")));
    }
    line
}
