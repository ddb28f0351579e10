use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};
use wandermark::imaging::RasterProcessor;
use wandermark::storage::{BookmarkVault, FileStore};
use wandermark::store::BookmarkStore;
use wandermark::types::{BookmarkStatus, NewBookmark, StatusFilter, TravelBookmark};
use wandermark::{config, imaging, output};

/// Shared flag for commands that discard stored data.
#[derive(clap::Args, Clone)]
struct ConfirmArgs {
    /// Skip the confirmation prompt
    #[arg(long)]
    yes: bool,
}

#[derive(Parser)]
#[command(name = "wandermark")]
#[command(about = "Local-first travel bookmark manager")]
#[command(long_about = "\
Local-first travel bookmark manager

Bookmarks live in a single JSON collection under the data directory. Every
photo you attach is decoded, downscaled to a configurable maximum width
(800px by default), re-encoded as JPEG, and stored inline as a data URI, so
the collection stays one self-contained file.

Data layout:

  .wandermark/
  ├── config.toml                   # Optional settings (see gen-config)
  └── wandermark_bookmarks_v1.json  # The whole collection, rewritten on save

Newest bookmarks list first. Status filtering and free-text search over
title and location happen in memory; the collection is persisted after
every mutation.

Run 'wandermark gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Data directory holding the collection and config
    #[arg(long, default_value = ".wandermark", global = true)]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Bookmark a place you plan to visit (or already did)
    Add {
        /// Title, e.g. "Tokyo Trip"
        title: String,
        /// Location, e.g. "Tokyo, Japan"
        location: String,
        /// Mark as already visited instead of planned
        #[arg(long)]
        visited: bool,
        /// Image file to ingest as the cover photo
        #[arg(long)]
        cover: Option<PathBuf>,
    },
    /// List bookmarks, newest first
    List {
        /// Only show bookmarks with this status
        #[arg(long, value_enum, default_value = "all")]
        status: StatusFilter,
        /// Case-insensitive substring match on title or location
        #[arg(long)]
        search: Option<String>,
    },
    /// Show one bookmark in full
    Show {
        /// Bookmark id (see list)
        id: String,
    },
    /// Change a bookmark's status
    SetStatus {
        /// Bookmark id (see list)
        id: String,
        /// New status
        #[arg(value_enum)]
        status: BookmarkStatus,
    },
    /// Set or replace the cover photo
    SetCover {
        /// Bookmark id (see list)
        id: String,
        /// Image file to ingest
        image: PathBuf,
    },
    /// Remove the cover photo
    RemoveCover {
        /// Bookmark id (see list)
        id: String,
        #[command(flatten)]
        confirm: ConfirmArgs,
    },
    /// Ingest image files into a bookmark's photo gallery
    AddPhotos {
        /// Bookmark id (see list)
        id: String,
        /// Image files, processed in the order given
        #[arg(required = true)]
        images: Vec<PathBuf>,
    },
    /// Remove one gallery photo by its position
    RemovePhoto {
        /// Bookmark id (see list)
        id: String,
        /// 1-based photo position (see show)
        index: usize,
    },
    /// Delete a bookmark
    Remove {
        /// Bookmark id (see list)
        id: String,
        #[command(flatten)]
        confirm: ConfirmArgs,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Add {
            title,
            location,
            visited,
            cover,
        } => {
            if title.trim().is_empty() || location.trim().is_empty() {
                return Err("title and location must not be empty".into());
            }
            let (config, mut vault, mut bookmarks) = open_collection(&cli.data_dir)?;
            let cover_image = match cover {
                Some(path) => {
                    let processor = RasterProcessor::new();
                    Some(imaging::ingest_file(
                        &processor,
                        &path,
                        &config.normalize_options(),
                    )?)
                }
                None => None,
            };
            let status = if visited {
                BookmarkStatus::Visited
            } else {
                BookmarkStatus::Planned
            };
            let created = bookmarks.create(NewBookmark {
                title,
                location,
                status,
                cover_image,
            });
            vault.save(bookmarks.records())?;
            output::print_bookmark_detail(&created);
        }
        Command::List { status, search } => {
            let (_config, _vault, bookmarks) = open_collection(&cli.data_dir)?;
            let results = bookmarks.query(status, search.as_deref().unwrap_or(""));
            output::print_bookmark_list(&results);
        }
        Command::Show { id } => {
            let (_config, _vault, bookmarks) = open_collection(&cli.data_dir)?;
            let record = require_bookmark(&bookmarks, &id)?;
            output::print_bookmark_detail(record);
        }
        Command::SetStatus { id, status } => {
            let (_config, mut vault, mut bookmarks) = open_collection(&cli.data_dir)?;
            let mut record = require_bookmark(&bookmarks, &id)?.clone();
            record.status = status;
            let title = record.title.clone();
            bookmarks.update(record);
            vault.save(bookmarks.records())?;
            println!("{} is now {}", title, status);
        }
        Command::SetCover { id, image } => {
            let (config, mut vault, mut bookmarks) = open_collection(&cli.data_dir)?;
            let mut record = require_bookmark(&bookmarks, &id)?.clone();
            let processor = RasterProcessor::new();
            record.cover_image = Some(imaging::ingest_file(
                &processor,
                &image,
                &config.normalize_options(),
            )?);
            let title = record.title.clone();
            bookmarks.update(record);
            vault.save(bookmarks.records())?;
            println!("Cover updated for {}", title);
        }
        Command::RemoveCover { id, confirm: opts } => {
            let (_config, mut vault, mut bookmarks) = open_collection(&cli.data_dir)?;
            let mut record = require_bookmark(&bookmarks, &id)?.clone();
            if record.cover_image.is_none() {
                println!("{} has no cover", record.title);
                return Ok(());
            }
            if !opts.yes && !confirm(&format!("Remove the cover from {}?", record.title))? {
                println!("Cancelled");
                return Ok(());
            }
            record.cover_image = None;
            let title = record.title.clone();
            bookmarks.update(record);
            vault.save(bookmarks.records())?;
            println!("Cover removed from {}", title);
        }
        Command::AddPhotos { id, images } => {
            let (config, mut vault, mut bookmarks) = open_collection(&cli.data_dir)?;
            let mut record = require_bookmark(&bookmarks, &id)?.clone();
            let processor = RasterProcessor::new();
            let encoded = imaging::ingest_files(&processor, &images, &config.normalize_options())?;
            let count = encoded.len();
            record.images.extend(encoded);
            let title = record.title.clone();
            bookmarks.update(record);
            vault.save(bookmarks.records())?;
            println!("Added {} photos to {}", count, title);
        }
        Command::RemovePhoto { id, index } => {
            let (_config, mut vault, mut bookmarks) = open_collection(&cli.data_dir)?;
            let mut record = require_bookmark(&bookmarks, &id)?.clone();
            if record.images.is_empty() {
                return Err(format!("{} has no photos", record.title).into());
            }
            if index == 0 || index > record.images.len() {
                return Err(format!(
                    "photo index {} out of range (1-{})",
                    index,
                    record.images.len()
                )
                .into());
            }
            record.images.remove(index - 1);
            let title = record.title.clone();
            bookmarks.update(record);
            vault.save(bookmarks.records())?;
            println!("Removed photo {} from {}", index, title);
        }
        Command::Remove { id, confirm: opts } => {
            let (_config, mut vault, mut bookmarks) = open_collection(&cli.data_dir)?;
            let Some(record) = bookmarks.get(&id) else {
                println!("No bookmark with id {}", id);
                return Ok(());
            };
            let title = record.title.clone();
            if !opts.yes && !confirm(&format!("Delete {}?", title))? {
                println!("Cancelled");
                return Ok(());
            }
            bookmarks.delete(&id);
            vault.save(bookmarks.records())?;
            println!("Removed {}", title);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Load config, the persistence vault, and the persisted collection from the
/// data directory.
fn open_collection(
    data_dir: &Path,
) -> Result<(config::AppConfig, BookmarkVault<FileStore>, BookmarkStore), Box<dyn std::error::Error>>
{
    let config = config::load_config(data_dir)?;
    let backend = match config.storage.capacity_bytes {
        Some(capacity) => FileStore::with_capacity(data_dir, capacity),
        None => FileStore::new(data_dir),
    };
    let vault = BookmarkVault::new(backend);
    let bookmarks = BookmarkStore::from_records(vault.load());
    Ok((config, vault, bookmarks))
}

/// Look up a bookmark or fail with a user-facing error.
fn require_bookmark<'a>(
    bookmarks: &'a BookmarkStore,
    id: &str,
) -> Result<&'a TravelBookmark, Box<dyn std::error::Error>> {
    bookmarks
        .get(id)
        .ok_or_else(|| format!("no bookmark with id {}", id).into())
}

/// Ask for confirmation on stdin. Anything but y/yes declines.
fn confirm(prompt: &str) -> std::io::Result<bool> {
    print!("{} [y/N] ", prompt);
    std::io::stdout().flush()?;
    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    let answer = answer.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}
