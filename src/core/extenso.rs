//! Portuguese cardinal spelling ("extenso") for integers in [-99999, 99999].

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::utils::error::{ExtensoError, Result};

pub const MIN_NUMBER: i64 = -99999;
pub const MAX_NUMBER: i64 = 99999;

const SEPARATOR: &str = " e ";
const NEGATIVE_PREFIX: &str = "menos ";

/// Canonical words for 0-20, the tens and the hundreds.
///
/// 100 maps to "cento"; the standalone "cem" is chosen by the caller.
fn translation_table() -> &'static HashMap<i64, &'static str> {
    static TABLE: OnceLock<HashMap<i64, &'static str>> = OnceLock::new();
    TABLE.get_or_init(|| {
        HashMap::from([
            (0, "zero"),
            (1, "um"),
            (2, "dois"),
            (3, "três"),
            (4, "quatro"),
            (5, "cinco"),
            (6, "seis"),
            (7, "sete"),
            (8, "oito"),
            (9, "nove"),
            (10, "dez"),
            (11, "onze"),
            (12, "doze"),
            (13, "treze"),
            (14, "quatorze"),
            (15, "quinze"),
            (16, "dezesseis"),
            (17, "dezessete"),
            (18, "dezoito"),
            (19, "dezenove"),
            (20, "vinte"),
            (30, "trinta"),
            (40, "quarenta"),
            (50, "cinquenta"),
            (60, "sessenta"),
            (70, "setenta"),
            (80, "oitenta"),
            (90, "noventa"),
            (100, "cento"),
            (200, "duzentos"),
            (300, "trezentos"),
            (400, "quatrocentos"),
            (500, "quinhentos"),
            (600, "seiscentos"),
            (700, "setecentos"),
            (800, "oitocentos"),
            (900, "novecentos"),
        ])
    })
}

/// Spells `n` in Portuguese.
///
/// # Errors
/// Returns [`ExtensoError::OutOfRange`] when `n` is outside [-99999, 99999].
///
/// ```
/// assert_eq!(extenso::translate(71111).unwrap(), "setenta e um mil e cento e onze");
/// assert_eq!(extenso::translate(-1042).unwrap(), "menos mil e quarenta e dois");
/// ```
pub fn translate(n: i64) -> Result<String> {
    if !(MIN_NUMBER..=MAX_NUMBER).contains(&n) {
        return Err(ExtensoError::OutOfRange { value: n });
    }

    let (prefix, n) = if n < 0 {
        (NEGATIVE_PREFIX, -n)
    } else {
        ("", n)
    };

    if n == 100 {
        return Ok(format!("{}cem", prefix));
    }
    if let Some(word) = translation_table().get(&n) {
        return Ok(format!("{}{}", prefix, word));
    }

    let thousands = n / 1000;
    let hundreds = (n - thousands * 1000) / 100;
    let rest = n - thousands * 1000 - hundreds * 100;

    let mut groups = Vec::with_capacity(3);

    match thousands {
        0 => {}
        1 => groups.push("mil".to_string()),
        _ => groups.push(format!("{} mil", two_digits(thousands))),
    }

    if hundreds == 1 && rest == 0 {
        groups.push("cem".to_string());
    } else {
        if hundreds > 0 {
            groups.push(word(hundreds * 100).to_string());
        }
        if rest > 0 {
            groups.push(two_digits(rest));
        }
    }

    Ok(format!("{}{}", prefix, groups.join(SEPARATOR)))
}

/// Spells a value in 0..=99.
fn two_digits(n: i64) -> String {
    debug_assert!((0..100).contains(&n));

    match translation_table().get(&n) {
        Some(word) => word.to_string(),
        None => format!("{}{}{}", word(n / 10 * 10), SEPARATOR, word(n % 10)),
    }
}

// Callers only pass units, whole tens and whole hundreds, all of which are keys.
fn word(n: i64) -> &'static str {
    translation_table()[&n]
}
