//! Filename-safe rendition of program names.

/// Collapse a program name into something safe to use as a filename:
/// optionally fold Polish diacritics to their ASCII base letters, then
/// replace everything outside `[A-Za-z0-9]` with `_`.
#[must_use]
pub fn slugify(name: &str, fold_diacritics: bool) -> String {
    name.chars()
        .map(|character| {
            let character =
                if fold_diacritics { fold_polish_diacritic(character) } else { character };
            if character.is_ascii_alphanumeric() { character } else { '_' }
        })
        .collect()
}

const fn fold_polish_diacritic(character: char) -> char {
    match character {
        'ą' => 'a',
        'Ą' => 'A',
        'ć' => 'c',
        'Ć' => 'C',
        'ę' => 'e',
        'Ę' => 'E',
        'ł' => 'l',
        'Ł' => 'L',
        'ń' => 'n',
        'Ń' => 'N',
        'ó' => 'o',
        'Ó' => 'O',
        'ś' => 's',
        'Ś' => 'S',
        'ź' => 'z',
        'Ź' => 'Z',
        'ż' => 'z',
        'Ż' => 'Z',
        _ => character,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_folds_diacritics() {
        assert_eq!(slugify("Żółć", true), "Zolc");
        assert_eq!(slugify("Świt & spółka", true), "Swit___spolka");
    }

    #[test]
    fn test_slugify_keeps_alphanumerics() {
        assert_eq!(slugify("Poranek 357", true), "Poranek_357");
    }

    #[test]
    fn test_slugify_without_folding_substitutes_diacritics() {
        assert_eq!(slugify("Żółć", false), "____");
    }
}
