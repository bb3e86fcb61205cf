//! Build script embedding the French dictionary
//!
//! Turns `data/french_words.txt` (one word per line, `#` comments allowed)
//! into a const slice included by `src/dictionary/embedded.rs`.

use std::env;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

const WORD_LIST: &str = "data/french_words.txt";

fn main() -> io::Result<()> {
    let out_dir = env::var("OUT_DIR").map_err(io::Error::other)?;
    let content = fs::read_to_string(WORD_LIST)?;

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();

    let file = fs::File::create(Path::new(&out_dir).join("french_words.rs"))?;
    write_word_list(&mut BufWriter::new(file), &words)?;

    println!("cargo:rerun-if-changed={WORD_LIST}");
    Ok(())
}

fn write_word_list(out: &mut impl Write, words: &[&str]) -> io::Result<()> {
    let count = words.len();

    writeln!(out, "// Generated from {WORD_LIST}, do not edit")?;
    writeln!(out)?;
    writeln!(out, "/// Common French words, accents folded, lower-case ({count} words)")?;
    writeln!(out, "pub const FRENCH_WORDS: &[&str] = &[")?;
    for word in words {
        writeln!(out, "    {word:?},")?;
    }
    writeln!(out, "];")?;
    writeln!(out)?;
    writeln!(out, "/// Number of words in FRENCH_WORDS")?;
    writeln!(out, "pub const FRENCH_WORDS_COUNT: usize = {count};")?;
    out.flush()
}
