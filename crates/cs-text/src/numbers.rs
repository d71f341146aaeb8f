//! Integer formatting: ordinals and English words.
//!
//! [`IntegerExt::to_words`] renders an integer as English prose
//! (`999` → `"nine hundred and ninety-nine"`).  The magnitude is split into
//! groups of three decimal digits, each non-zero group is rendered with the
//! hundreds routine and followed by its scale word, and the groups are joined
//! most-significant first.  Work happens on the unsigned magnitude in `u128`,
//! so `i32::MIN` and `i64::MIN` need no special case.

const UNITS: [&str; 20] = [
    "zero",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Scale word for each power of 1000, index 0 being the units group.
/// Covers the whole `u128` range.
const SCALES: [&str; 13] = [
    "",
    "thousand",
    "million",
    "billion",
    "trillion",
    "quadrillion",
    "quintillion",
    "sextillion",
    "septillion",
    "octillion",
    "nonillion",
    "decillion",
    "undecillion",
];

/// Return the English ordinal suffix for `n` (e.g. `1` → `"st"`, `2` → `"nd"`).
pub fn ordinal_suffix(n: u128) -> &'static str {
    match n % 100 {
        11..=13 => "th",
        _ => match n % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    }
}

/// Render a signed value as English words.
pub fn number_to_words(value: i128) -> String {
    if value == 0 {
        return UNITS[0].to_string();
    }
    let words = magnitude_words(value.unsigned_abs());
    if value < 0 {
        format!("minus {words}")
    } else {
        words
    }
}

fn magnitude_words(mut n: u128) -> String {
    let mut groups = Vec::new();
    let mut scale = 0;
    while n > 0 {
        let group = (n % 1000) as usize;
        if group != 0 {
            let mut words = hundreds_words(group);
            if scale > 0 {
                words.push(' ');
                words.push_str(SCALES[scale]);
            }
            groups.push(words);
        }
        n /= 1000;
        scale += 1;
    }
    groups.reverse();
    groups.join(" ")
}

/// Words for 1–999.
fn hundreds_words(n: usize) -> String {
    debug_assert!((1..1000).contains(&n));
    let (hundreds, rest) = (n / 100, n % 100);
    match (hundreds, rest) {
        (0, _) => tens_words(rest),
        (h, 0) => format!("{} hundred", UNITS[h]),
        (h, r) => format!("{} hundred and {}", UNITS[h], tens_words(r)),
    }
}

/// Words for 1–99.
fn tens_words(n: usize) -> String {
    debug_assert!((1..100).contains(&n));
    if n < 20 {
        return UNITS[n].to_string();
    }
    match n % 10 {
        0 => TENS[n / 10].to_string(),
        u => format!("{}-{}", TENS[n / 10], UNITS[u]),
    }
}

/// Ordinal and word rendering for the built-in integer types.
pub trait IntegerExt: Copy {
    /// Format with an English ordinal suffix (`1` → `"1st"`, `22` → `"22nd"`).
    ///
    /// Zero and negative values have no ordinal and are returned as plain
    /// digits.
    fn ordinal(self) -> String;

    /// Render as English words (`-1234` →
    /// `"minus one thousand two hundred and thirty-four"`).
    fn to_words(self) -> String;
}

macro_rules! impl_integer_ext {
    ($($t:ty),* $(,)?) => {
        $(
            impl IntegerExt for $t {
                fn ordinal(self) -> String {
                    let n = self as i128;
                    if n <= 0 {
                        return n.to_string();
                    }
                    format!("{n}{}", ordinal_suffix(n.unsigned_abs()))
                }

                fn to_words(self) -> String {
                    number_to_words(self as i128)
                }
            }
        )*
    };
}

impl_integer_ext!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
