//! Courrier Code - CLI
//!
//! Encode and decode numeric cipher messages, identify the sender from a key
//! book, and encode pictures.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use courrier_code::{
    cipher::Cipher,
    commands::{
        DEFAULT_MAX_SIDE, DecodeMode, EncodeConfig, decode_image_file, decode_text,
        encode_image_file, encode_text, inspect_image_file, match_keys, reference_table, run_batch,
    },
    core::{ShiftResolver, SubstitutionTable, Weekday},
    decoder::{AutoDecodeConfig, DayMode, load_key_book},
    dictionary::{Dictionary, loader::load_from_file},
    logging::init_tracing,
    output::{
        print_batch_result, print_decode_result, print_encode_result, print_image_decode_result,
        print_image_encode_result, print_image_metadata, print_match_report,
        print_reference_table,
    },
    picture::ImageKey,
    segment::PolicyType,
};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "courrier_code",
    about = "Keyed numeric substitution cipher with automatic French decoding",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Shared secret added to the shift
    #[arg(short, long, global = true, default_value = "")]
    secret: String,

    /// 6-digit table code (alphabet table when absent)
    #[arg(short, long, global = true)]
    table: Option<String>,

    /// Segmentation scoring: reference (default) or legacy
    #[arg(long, global = true, default_value = "reference")]
    scoring: String,

    /// Extra dictionary words, one per line
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// More log output (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a message
    Encode {
        /// The message
        text: String,

        /// Apply today's day shift and marker
        #[arg(short, long)]
        day: bool,

        /// Apply a given day's shift and marker (name or 0-6, Sunday = 0)
        #[arg(long, conflicts_with = "day")]
        on: Option<Weekday>,

        /// Shuffle the word order first
        #[arg(long)]
        shuffle: bool,

        /// Draw a fresh random table code (replaces --table)
        #[arg(long)]
        random_table: bool,

        /// Print code units separated by spaces
        #[arg(short, long)]
        grouped: bool,
    },

    /// Decode a message
    Decode {
        /// The cipher text
        cipher: String,

        /// Explicit shift instead of searching
        #[arg(long, allow_hyphen_values = true)]
        shift: Option<i64>,

        /// No day shift, secret only
        #[arg(long, conflicts_with = "exhaustive")]
        no_day: bool,

        /// Try every day even when a marker is present
        #[arg(long)]
        exhaustive: bool,

        /// The message was sent without word separators
        #[arg(short, long)]
        glued: bool,
    },

    /// Find which known key a message was written with
    Match {
        /// The cipher text
        cipher: String,

        /// Key book: JSON array of {"label", "secret", "table"}
        #[arg(short, long)]
        keys: PathBuf,

        /// Looser search for messages without separators
        #[arg(short, long)]
        glued: bool,
    },

    /// Decode every line of a file
    Batch {
        /// File with one cipher text per line
        file: PathBuf,

        /// No day shift, secret only
        #[arg(long)]
        no_day: bool,
    },

    /// Show the code of every letter and digit
    Table {
        /// Shift to apply
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        shift: i64,

        /// Add a day's shift (name or 0-6)
        #[arg(long)]
        on: Option<Weekday>,
    },

    /// Reverse a cipher text character by character
    Reverse {
        /// The cipher text
        cipher: String,
    },

    /// Generate a random 6-digit table code
    Seed,

    /// Encode or decode pictures
    Image {
        #[command(subcommand)]
        action: ImageAction,
    },
}

#[derive(Subcommand)]
enum ImageAction {
    /// Encode a picture to a JSON record
    Encode {
        /// Input picture (PNG)
        input: PathBuf,
        /// Output JSON record
        output: PathBuf,

        /// Apply today's day shift
        #[arg(short, long)]
        day: bool,

        /// Shrink so the largest side fits (0 keeps the original size)
        #[arg(long, default_value_t = DEFAULT_MAX_SIDE)]
        max_size: u32,
    },

    /// Decode a JSON record to a picture
    Decode {
        /// Input JSON record
        input: PathBuf,
        /// Output picture (PNG)
        output: PathBuf,
    },

    /// Show the header of a JSON record
    Info {
        /// Input JSON record
        input: PathBuf,
    },
}

/// Load the dictionary based on the -w flag
///
/// The embedded list is used as is unless extra words are given.
fn load_dictionary(words: Option<&PathBuf>) -> Result<Option<Dictionary>> {
    words
        .map(|path| {
            let extra = load_from_file(path)
                .with_context(|| format!("cannot read word list {}", path.display()))?;
            tracing::info!(count = extra.len(), "extra dictionary words loaded");
            Ok(Dictionary::embedded().with_extra_words(extra))
        })
        .transpose()
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let custom = load_dictionary(cli.words.as_ref())?;
    let dictionary = custom.as_ref().unwrap_or(Dictionary::french());
    let policy = PolicyType::from_name(&cli.scoring);
    let table = cli.table.as_deref();

    match cli.command {
        Commands::Encode {
            text,
            day,
            on,
            shuffle,
            random_table,
            grouped,
        } => {
            let table = if random_table {
                Some(SubstitutionTable::generate_seed(&mut rand::rng()))
            } else {
                cli.table.clone()
            };
            let config = EncodeConfig {
                text,
                weekday: on.or_else(|| day.then(Weekday::today)),
                secret: cli.secret.clone(),
                table,
                shuffle,
            };
            print_encode_result(&encode_text(&config), grouped);
            Ok(())
        }
        Commands::Decode {
            cipher,
            shift,
            no_day,
            exhaustive,
            glued,
        } => {
            let config = AutoDecodeConfig {
                day_mode: day_mode(no_day, exhaustive),
                policy,
            };
            let mode = match (shift, glued) {
                (Some(shift), _) => DecodeMode::Shift(shift),
                (None, true) => DecodeMode::Glued(config),
                (None, false) => DecodeMode::Auto(config),
            };
            let result = decode_text(&cipher, &cli.secret, table, mode, dictionary);
            print_decode_result(&result);
            Ok(())
        }
        Commands::Match {
            cipher,
            keys,
            glued,
        } => {
            let book = load_key_book(&keys)
                .with_context(|| format!("cannot load key book {}", keys.display()))?;
            print_match_report(&match_keys(&cipher, &book, glued, dictionary, policy));
            Ok(())
        }
        Commands::Batch { file, no_day } => {
            let content = fs::read_to_string(&file)
                .with_context(|| format!("cannot read {}", file.display()))?;
            let config = AutoDecodeConfig {
                day_mode: day_mode(no_day, false),
                policy,
            };
            let result = run_batch(
                &content,
                Cipher::with_table_seed(table),
                &cli.secret,
                config,
                dictionary,
                true,
            );
            print_batch_result(&result);
            Ok(())
        }
        Commands::Table { shift, on } => {
            let total = ShiftResolver::offset_shift(shift, on, &cli.secret);
            print_reference_table(&reference_table(&SubstitutionTable::resolve(table), total));
            Ok(())
        }
        Commands::Reverse { cipher } => {
            println!("{}", Cipher::reverse(&cipher));
            Ok(())
        }
        Commands::Seed => {
            println!("{}", SubstitutionTable::generate_seed(&mut rand::rng()));
            Ok(())
        }
        Commands::Image { action } => run_image_command(action, &cli.secret, table),
    }
}

fn day_mode(no_day: bool, exhaustive: bool) -> DayMode {
    if no_day {
        DayMode::Off
    } else if exhaustive {
        DayMode::Exhaustive
    } else {
        DayMode::Marker
    }
}

fn run_image_command(action: ImageAction, secret: &str, table: Option<&str>) -> Result<()> {
    match action {
        ImageAction::Encode {
            input,
            output,
            day,
            max_size,
        } => {
            let key = ImageKey {
                weekday: day.then(Weekday::today),
                secret,
                table,
            };
            let max_side = (max_size > 0).then_some(max_size);
            let result = encode_image_file(&input, &output, &key, max_side)
                .with_context(|| format!("cannot encode {}", input.display()))?;
            print_image_encode_result(&result);
        }
        ImageAction::Decode { input, output } => {
            let result = decode_image_file(&input, &output, secret)
                .with_context(|| format!("cannot decode {}", input.display()))?;
            print_image_decode_result(&result);
        }
        ImageAction::Info { input } => {
            let metadata = inspect_image_file(&input)
                .with_context(|| format!("cannot read {}", input.display()))?;
            print_image_metadata(&metadata);
        }
    }
    Ok(())
}
