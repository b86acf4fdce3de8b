//! Word list loading utilities
//!
//! Provides functions to load a dictionary from a file or from the embedded
//! constant. Lines are trimmed; blank lines and anything that is not a
//! five-letter word are skipped.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Parse a dictionary with one word per line
///
/// Order is preserved.
#[must_use]
pub fn parse_words(content: &str) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect()
}

/// Load words from a file
///
/// The whole file is read once, up front.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use wordle_helper::wordlists::loader::load_from_file;
///
/// let words = load_from_file("five_words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_words(&content))
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_helper::wordlists::loader::words_from_slice;
/// use wordle_helper::wordlists::DICTIONARY;
///
/// let words = words_from_slice(DICTIONARY);
/// assert_eq!(words.len(), DICTIONARY.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_words_one_per_line() {
        let words = parse_words("hello\nhillo\r\n  jelly  \n");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["hello", "hillo", "jelly"]);
    }

    #[test]
    fn parse_words_skips_blank_and_malformed() {
        let words = parse_words("hello\n\ntoolong\nabc\n\njelly");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["hello", "jelly"]);
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["crane", "toolong", "abc", "slate"]);
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn load_from_file_reads_words() {
        let path = std::env::temp_dir().join(format!(
            "wordle_helper_loader_{}.txt",
            std::process::id()
        ));
        fs::write(&path, "hello\nhillo\njelly\n").unwrap();

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words.len(), 3);
        assert_eq!(words[2].text(), "jelly");
    }

    #[test]
    fn load_from_missing_file_fails() {
        let result = load_from_file("definitely/not/a/real/five_words.txt");
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn load_from_embedded_dictionary() {
        use crate::wordlists::DICTIONARY;

        let words = words_from_slice(DICTIONARY);
        assert_eq!(words.len(), DICTIONARY.len());
    }
}
