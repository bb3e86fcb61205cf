//! Embedded word list
//!
//! Compiled into the binary at build time from `data/french_words.txt`.

include!(concat!(env!("OUT_DIR"), "/french_words.rs"));
