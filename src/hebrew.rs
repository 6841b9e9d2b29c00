/// Hebrew final-form letters and their standard (non-final) forms.
/// A final form only ever appears at the end of a word, so candidates built
/// from normalized letters can be matched against dictionary headwords.
const FINAL_FORMS: [(char, char); 5] = [
    ('ם', 'מ'),
    ('ן', 'נ'),
    ('ץ', 'צ'),
    ('ף', 'פ'),
    ('ך', 'כ'),
];

/// Map a single final-form letter to its standard form; every other
/// character passes through unchanged.
pub fn unfinalize(c: char) -> char {
    FINAL_FORMS
        .iter()
        .find(|&&(finl, _)| finl == c)
        .map(|&(_, standard)| standard)
        .unwrap_or(c)
}

/// Replace every final-form letter in `text` with its standard form.
/// Total over all inputs, including empty and non-Hebrew text.
pub fn normalize(text: &str) -> String {
    text.chars().map(unfinalize).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_final_forms_map_to_standard_forms() {
        assert_eq!(unfinalize('ם'), 'מ');
        assert_eq!(unfinalize('ן'), 'נ');
        assert_eq!(unfinalize('ץ'), 'צ');
        assert_eq!(unfinalize('ף'), 'פ');
        assert_eq!(unfinalize('ך'), 'כ');
    }

    #[test]
    fn test_standard_letters_pass_through() {
        assert_eq!(unfinalize('מ'), 'מ');
        assert_eq!(unfinalize('א'), 'א');
        assert_eq!(unfinalize('a'), 'a');
        assert_eq!(unfinalize(' '), ' ');
    }

    #[test]
    fn test_normalize_word_without_final_forms() {
        assert_eq!(normalize("אבג"), "אבג");
    }

    #[test]
    fn test_normalize_word_ending_in_final_mem() {
        assert_eq!(normalize("שלום"), "שלומ");
    }

    #[test]
    fn test_normalize_all_five_finals() {
        assert_eq!(normalize("םןץףך"), "מנצפכ");
    }

    #[test]
    fn test_normalize_mixed_text() {
        assert_eq!(normalize("בצלץ abc"), "בצלצ abc");
    }

    #[test]
    fn test_normalize_empty_string() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_normalize_non_hebrew_text_unchanged() {
        assert_eq!(normalize("hello, world."), "hello, world.");
    }
}
