//! Recognition score used to rank competing decodings

use crate::dictionary::Dictionary;

/// Sum of squared lengths of the tokens the dictionary recognises
///
/// Tokens are separated by single spaces; empty tokens are skipped.
///
/// # Examples
/// ```
/// use courrier_code::dictionary::Dictionary;
/// use courrier_code::segment::recognized_word_score;
///
/// let dict = Dictionary::french();
/// assert_eq!(recognized_word_score(dict, "BONJOUR MON AMI"), 49 + 9 + 9);
/// assert_eq!(recognized_word_score(dict, "XQZW"), 0);
/// ```
#[must_use]
pub fn recognized_word_score(dictionary: &Dictionary, sentence: &str) -> usize {
    recognized_tokens(dictionary, sentence)
        .map(|word| {
            let len = word.chars().count();
            len * len
        })
        .sum()
}

/// Number of tokens the dictionary recognises
#[must_use]
pub fn recognized_word_count(dictionary: &Dictionary, sentence: &str) -> usize {
    recognized_tokens(dictionary, sentence).count()
}

fn recognized_tokens<'s>(
    dictionary: &Dictionary,
    sentence: &'s str,
) -> impl Iterator<Item = &'s str> {
    sentence
        .split(' ')
        .filter(|word| !word.is_empty())
        .filter(move |word| dictionary.contains(word))
}
