//! Diacritic detection via base-Latin folding.
//!
//! A cell is flagged when folding it to unaccented Latin letters yields a
//! different string, mirroring a transliterate-and-compare check. The fold
//! table covers Latin-1 Supplement and Latin Extended-A, which is the full
//! repertoire Windows-1252/UTF-8 uploads of Portuguese text can carry.

use cadastro_model::{Violation, ViolationKind};

pub fn check(display_row: usize, column: &str, value: &str) -> Option<Violation> {
    if !has_diacritics(value) {
        return None;
    }
    Some(Violation::cell(
        display_row,
        column,
        ViolationKind::Diacritic,
        format!("contains accented character ({value})"),
    ))
}

/// True when the value folds to something other than itself.
pub fn has_diacritics(value: &str) -> bool {
    value.chars().any(|ch| fold_char(ch).is_some())
}

/// Fold a string to its base-Latin form. Unmapped characters pass through.
pub fn fold_diacritics(value: &str) -> String {
    let mut folded = String::with_capacity(value.len());
    for ch in value.chars() {
        match fold_char(ch) {
            Some(base) => folded.push_str(base),
            None => folded.push(ch),
        }
    }
    folded
}

fn fold_char(ch: char) -> Option<&'static str> {
    let folded = match ch {
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' | 'Ā' | 'Ă' | 'Ą' => "A",
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => "a",
        'Æ' => "AE",
        'æ' => "ae",
        'Ç' | 'Ć' | 'Ĉ' | 'Ċ' | 'Č' => "C",
        'ç' | 'ć' | 'ĉ' | 'ċ' | 'č' => "c",
        'Ð' | 'Ď' | 'Đ' => "D",
        'ð' | 'ď' | 'đ' => "d",
        'È' | 'É' | 'Ê' | 'Ë' | 'Ē' | 'Ĕ' | 'Ė' | 'Ę' | 'Ě' => "E",
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => "e",
        'Ĝ' | 'Ğ' | 'Ġ' | 'Ģ' => "G",
        'ĝ' | 'ğ' | 'ġ' | 'ģ' => "g",
        'Ĥ' | 'Ħ' => "H",
        'ĥ' | 'ħ' => "h",
        'Ì' | 'Í' | 'Î' | 'Ï' | 'Ĩ' | 'Ī' | 'Ĭ' | 'Į' | 'İ' => "I",
        'ì' | 'í' | 'î' | 'ï' | 'ĩ' | 'ī' | 'ĭ' | 'į' | 'ı' => "i",
        'Ĵ' => "J",
        'ĵ' => "j",
        'Ķ' => "K",
        'ķ' => "k",
        'Ĺ' | 'Ļ' | 'Ľ' | 'Ŀ' | 'Ł' => "L",
        'ĺ' | 'ļ' | 'ľ' | 'ŀ' | 'ł' => "l",
        'Ñ' | 'Ń' | 'Ņ' | 'Ň' => "N",
        'ñ' | 'ń' | 'ņ' | 'ň' => "n",
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' | 'Ō' | 'Ŏ' | 'Ő' => "O",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ŏ' | 'ő' => "o",
        'Œ' => "OE",
        'œ' => "oe",
        'Ŕ' | 'Ŗ' | 'Ř' => "R",
        'ŕ' | 'ŗ' | 'ř' => "r",
        'Ś' | 'Ŝ' | 'Ş' | 'Š' => "S",
        'ś' | 'ŝ' | 'ş' | 'š' => "s",
        'ß' => "ss",
        'Ţ' | 'Ť' | 'Ŧ' => "T",
        'ţ' | 'ť' | 'ŧ' => "t",
        'Þ' => "TH",
        'þ' => "th",
        'Ù' | 'Ú' | 'Û' | 'Ü' | 'Ũ' | 'Ū' | 'Ŭ' | 'Ů' | 'Ű' | 'Ų' => "U",
        'ù' | 'ú' | 'û' | 'ü' | 'ũ' | 'ū' | 'ŭ' | 'ů' | 'ű' | 'ų' => "u",
        'Ŵ' => "W",
        'ŵ' => "w",
        'Ý' | 'Ÿ' | 'Ŷ' => "Y",
        'ý' | 'ÿ' | 'ŷ' => "y",
        'Ź' | 'Ż' | 'Ž' => "Z",
        'ź' | 'ż' | 'ž' => "z",
        _ => return None,
    };
    Some(folded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folding_strips_portuguese_accents() {
        assert_eq!(fold_diacritics("JOÃO"), "JOAO");
        assert_eq!(fold_diacritics("Conceição"), "Conceicao");
        assert_eq!(fold_diacritics("ATENÇÃO"), "ATENCAO");
    }

    #[test]
    fn plain_ascii_folds_to_itself() {
        let value = "MARIA DA SILVA, 100-B";
        assert_eq!(fold_diacritics(value), value);
        assert!(!has_diacritics(value));
    }

    #[test]
    fn detection_matches_fold_inequality() {
        for value in ["Feminino", "SAO PAULO", "café", "ÀÉÎÕÜ"] {
            assert_eq!(has_diacritics(value), fold_diacritics(value) != value);
        }
    }

    #[test]
    fn violation_embeds_raw_value() {
        let violation = check(3, "SEXO", "Feminíno").expect("flagged");
        assert!(violation.message.contains("Feminíno"));
        assert_eq!(violation.kind, ViolationKind::Diacritic);
    }
}
