//! Text normalisation applied before encoding and before secret-shift summing

/// Replace accented Latin letters with their unaccented form
///
/// Ligatures expand (`œ` → `oe`, `Æ` → `AE`). Characters outside the table pass through.
///
/// # Examples
/// ```
/// use courrier_code::core::fold_diacritics;
///
/// assert_eq!(fold_diacritics("Été à Noël"), "Ete a Noel");
/// assert_eq!(fold_diacritics("cœur"), "coeur");
/// ```
#[must_use]
pub fn fold_diacritics(text: &str) -> String {
    let mut folded = String::with_capacity(text.len());
    for ch in text.chars() {
        match fold_char(ch) {
            Folded::One(c) => folded.push(c),
            Folded::Two(a, b) => {
                folded.push(a);
                folded.push(b);
            }
        }
    }
    folded
}

/// Fold diacritics and upper-case, the form every codec operation reads
#[must_use]
pub fn normalize(text: &str) -> String {
    fold_diacritics(text).to_uppercase()
}

enum Folded {
    One(char),
    Two(char, char),
}

const fn fold_char(ch: char) -> Folded {
    let c = match ch {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'ç' => 'c',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'ñ' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' => 'o',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'ý' | 'ÿ' => 'y',
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' => 'A',
        'Ç' => 'C',
        'È' | 'É' | 'Ê' | 'Ë' => 'E',
        'Ì' | 'Í' | 'Î' | 'Ï' => 'I',
        'Ñ' => 'N',
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' => 'O',
        'Ù' | 'Ú' | 'Û' | 'Ü' => 'U',
        'Ý' | 'Ÿ' => 'Y',
        'æ' => return Folded::Two('a', 'e'),
        'œ' => return Folded::Two('o', 'e'),
        'Æ' => return Folded::Two('A', 'E'),
        'Œ' => return Folded::Two('O', 'E'),
        other => other,
    };
    Folded::One(c)
}
