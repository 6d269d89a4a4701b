// Reference:
// https://snowballstem.org/algorithms/english/stemmer.html
//
// Article:
// Martin Porter (2001) Snowball: A language for stemming algorithms.
//
// The word is kept as an ASCII `String` for the whole pipeline so byte
// offsets and char offsets are the same thing. A consonantal `y` is stored
// as an uppercase `Y`, which no normalized input can contain.
use lazy_static::lazy_static;
use regex_automata::meta::Regex;

const Y_MARKER: char = 'Y';

lazy_static! {
    static ref VOWEL_CONSONANT: Regex = Regex::new("[aeiouy][^aeiouy]").unwrap();
    static ref SHORT_SYLLABLE: Regex =
        Regex::new("^(?:[aeiouy][^aeiouy]|.*[^aeiouy][aeiouy][^aeiouywxY])$").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Region {
    R1,
    R2,
}

use Region::*;

/// What must come right before a suffix for its rule to fire.
#[derive(Debug, Clone, Copy)]
enum Preceding {
    Any,
    OneOf(&'static str),
}

use Preceding::*;

impl Preceding {
    fn allows(&self, stem: &str) -> bool {
        match self {
            Any => true,
            OneOf(letters) => stem
                .bytes()
                .last()
                .map_or(false, |c| letters.as_bytes().contains(&c)),
        }
    }
}

// (region, suffix, preceding, replacement), longest suffix first.
// A `None` replacement deletes the suffix.
type Steps<const N: usize> = [(Region, &'static str, Preceding, Option<&'static str>); N];

static STEP1B: Steps<6> = [
    (R1, "eedly", Any, Some("ee")),
    (R1, "ingly", Any, None),
    (R1, "edly", Any, None),
    (R1, "eed", Any, Some("ee")),
    (R1, "ing", Any, None),
    (R1, "ed", Any, None),
];

static STEP2: Steps<23> = [
    (R1, "ational", Any, Some("ate")),
    (R1, "fulness", Any, Some("ful")),
    (R1, "iveness", Any, Some("ive")),
    (R1, "ization", Any, Some("ize")),
    (R1, "ousness", Any, Some("ous")),
    (R1, "biliti", Any, Some("ble")),
    (R1, "lessli", Any, Some("less")),
    (R1, "tional", Any, Some("tion")),
    (R1, "alism", Any, Some("al")),
    (R1, "aliti", Any, Some("al")),
    (R1, "ation", Any, Some("ate")),
    (R1, "entli", Any, Some("ent")),
    (R1, "fulli", Any, Some("ful")),
    (R1, "iviti", Any, Some("ive")),
    (R1, "ousli", Any, Some("ous")),
    (R1, "abli", Any, Some("able")),
    (R1, "alli", Any, Some("al")),
    (R1, "anci", Any, Some("ance")),
    (R1, "ator", Any, Some("ate")),
    (R1, "enci", Any, Some("ence")),
    (R1, "bli", Any, Some("ble")),
    (R1, "ogi", OneOf("l"), Some("og")),
    (R1, "li", OneOf("cdeghkmnrt"), None),
];

static STEP3: Steps<9> = [
    (R1, "ational", Any, Some("ate")),
    (R1, "tional", Any, Some("tion")),
    (R1, "alize", Any, Some("al")),
    (R1, "icate", Any, Some("ic")),
    (R1, "iciti", Any, Some("ic")),
    (R2, "ative", Any, None),
    (R1, "ical", Any, Some("ic")),
    (R1, "ness", Any, None),
    (R1, "ful", Any, None),
];

static STEP4: Steps<18> = [
    (R2, "ement", Any, None),
    (R2, "able", Any, None),
    (R2, "ance", Any, None),
    (R2, "ence", Any, None),
    (R2, "ible", Any, None),
    (R2, "ment", Any, None),
    (R2, "ant", Any, None),
    (R2, "ate", Any, None),
    (R2, "ent", Any, None),
    // Only `ion` goes, the `s` or `t` stays.
    (R2, "ion", OneOf("st"), None),
    (R2, "ism", Any, None),
    (R2, "iti", Any, None),
    (R2, "ive", Any, None),
    (R2, "ize", Any, None),
    (R2, "ous", Any, None),
    (R2, "al", Any, None),
    (R2, "er", Any, None),
    (R2, "ic", Any, None),
];

static DOUBLES: [&str; 9] = ["bb", "dd", "ff", "gg", "mm", "nn", "pp", "rr", "tt"];

#[inline]
fn is_vowel(c: u8) -> bool {
    matches!(c, b'a' | b'e' | b'i' | b'o' | b'u' | b'y')
}

fn contains_vowel(string: &str) -> bool {
    string.bytes().any(is_vowel)
}

/// R1 and R2 offsets, computed once on the Y-marked word.
///
/// Later steps only ever shorten the word from its end, so the offsets keep
/// pointing at the same letters. When the word shrinks past one of them, the
/// offset is clamped to the current length and its region is empty.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Regions {
    r1: usize,
    r2: usize,
}

impl Regions {
    fn compute(word: &str) -> Self {
        let r1 = after_vowel_consonant(word, 0);
        let r2 = after_vowel_consonant(word, r1);

        Self { r1, r2 }
    }

    fn start(&self, region: Region, word: &str) -> usize {
        let offset = match region {
            R1 => self.r1,
            R2 => self.r2,
        };

        offset.min(word.len())
    }

    fn contains(&self, region: Region, word: &str, offset: usize) -> bool {
        offset >= self.start(region, word)
    }
}

fn after_vowel_consonant(word: &str, from: usize) -> usize {
    match VOWEL_CONSONANT.find(&word[from..]) {
        Some(matched_part) => from + matched_part.end(),
        None => word.len(),
    }
}

fn is_short(word: &str, regions: &Regions) -> bool {
    regions.start(R1, word) == word.len() && SHORT_SYLLABLE.is_match(word)
}

fn normalize(word: &str) -> String {
    word.chars()
        .map(|c| c.to_ascii_lowercase())
        .filter(|c| c.is_ascii_lowercase() || *c == '\'')
        .collect()
}

fn mark_consonantal_y(word: &mut String) {
    if !word.contains('y') {
        return;
    }

    let mut marked = String::with_capacity(word.len());
    let mut last_char: Option<char> = None;

    for c in word.chars() {
        let consonantal =
            c == 'y' && last_char.map_or(true, |last| matches!(last, 'a' | 'e' | 'i' | 'o' | 'u'));

        marked.push(if consonantal { Y_MARKER } else { c });
        last_char = Some(c);
    }

    *word = marked;
}

fn remove_apostrophe_suffix(word: &mut String) {
    if let Some(i) = word.find('\'') {
        word.truncate(i);
    }
}

fn finalize(word: String) -> String {
    word.chars()
        .filter(|c| *c != '\'')
        .map(|c| if c == Y_MARKER { 'y' } else { c })
        .collect()
}

/// Rewrites the longest suffix of `word` found in `rules`, if that suffix
/// satisfies its rule. Returns the rewritten suffix.
///
/// A longest suffix that fails its region or preceding-letter test stops the
/// step: shorter suffixes are never tried in its place.
fn apply_rules<const N: usize>(
    rules: &Steps<N>,
    word: &mut String,
    regions: &Regions,
) -> Option<&'static str> {
    let &(region, suffix, preceding, replacement) = rules
        .iter()
        .find(|(_, suffix, _, _)| word.ends_with(*suffix))?;

    let start = word.len() - suffix.len();

    if !regions.contains(region, word, start) || !preceding.allows(&word[..start]) {
        return None;
    }

    word.truncate(start);

    if let Some(value) = replacement {
        word.push_str(value);
    }

    Some(suffix)
}

fn step1a(word: &mut String) {
    if word.ends_with("sses") {
        word.truncate(word.len() - 2);
        return;
    }

    if word.ends_with("ied") || word.ends_with("ies") {
        let stem_len = word.len() - 3;
        word.truncate(stem_len);
        word.push_str(if stem_len > 1 { "i" } else { "ie" });
        return;
    }

    if word.ends_with("us") || word.ends_with("ss") {
        return;
    }

    if word.ends_with('s') && contains_vowel(&word[..word.len().saturating_sub(2)]) {
        word.pop();
    }
}

fn step1b(word: &mut String, regions: &Regions) {
    if let Some("ed" | "edly" | "ing" | "ingly") = apply_rules(&STEP1B, word, regions) {
        if word.ends_with("at") || word.ends_with("bl") || word.ends_with("iz") {
            word.push('e');
        } else if DOUBLES.iter().any(|double| word.ends_with(double)) {
            word.pop();
        } else if is_short(word, regions) {
            word.push('e');
        }
    }
}

fn step1c(word: &mut String) {
    let bytes = word.as_bytes();
    let n = bytes.len();

    if n > 2 && matches!(bytes[n - 1], b'y' | b'Y') && !is_vowel(bytes[n - 2]) {
        word.pop();
        word.push('i');
    }
}

fn step5(word: &mut String, regions: &Regions) {
    if word.ends_with('e') {
        let e = word.len() - 1;

        if regions.contains(R2, word, e)
            || (regions.contains(R1, word, e) && !is_short(&word[..e], regions))
        {
            word.pop();
        }
    } else if word.ends_with("ll") && regions.contains(R2, word, word.len() - 1) {
        word.pop();
    }
}

/// Reduces an English word to its stem using the Porter2 algorithm.
///
/// Uppercase ASCII letters are folded and every character that is neither
/// an ASCII letter nor an apostrophe is dropped before stemming.
pub fn porter2_stemmer(word: &str) -> String {
    let mut word = normalize(word);

    if word.len() <= 2 {
        return finalize(word);
    }

    mark_consonantal_y(&mut word);

    let regions = Regions::compute(&word);

    remove_apostrophe_suffix(&mut word);

    step1a(&mut word);
    step1b(&mut word, &regions);
    step1c(&mut word);

    apply_rules(&STEP2, &mut word, &regions);
    apply_rules(&STEP3, &mut word, &regions);
    apply_rules(&STEP4, &mut word, &regions);

    step5(&mut word, &regions);

    finalize(word)
}
