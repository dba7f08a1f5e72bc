//! Name normalization: raw source spellings to canonical entity keys.
//!
//! Cross-source entity identity is a static lookup table built once at
//! construction, not fuzzy matching at merge time. Keys are case-folded,
//! diacritic-folded, and punctuation/whitespace-insensitive, so most
//! spelling variants ("Micronesia, Federated States of" vs "Micronesia
//! (Federated States of)") collapse without an explicit alias. The alias
//! table covers the genuinely divergent spellings the sources are known to
//! use for one another's entries.

use std::collections::HashMap;

/// Alias spellings mapped to the canonical (UN-preferred) spelling.
///
/// Left side: how a secondary source spells the entity. Right side: the
/// spelling the UN list uses. Both sides are key-folded at construction.
const ALIASES: &[(&str, &str)] = &[
    ("United States", "United States of America"),
    ("US Virgin Islands", "United States Virgin Islands"),
    (
        "United Kingdom",
        "United Kingdom of Great Britain and Northern Ireland",
    ),
    ("Saint Martin (France)", "Saint-Martin (French part)"),
    ("Sint Maarten (Netherlands)", "Sint Maarten (Dutch part)"),
    ("Caribbean Netherlands", "Netherlands Antilles"),
    ("Sint Eustatius", "Bonaire, Saint Eustatius and Saba"),
    ("Laos", "Lao People's Democratic Republic"),
    ("Burma", "Myanmar"),
    ("Korea, North", "Democratic People's Republic of Korea"),
    ("Korea, South", "Republic of Korea"),
    (
        "Congo, Democratic Republic of the (Zaire)",
        "Democratic Republic of the Congo",
    ),
    ("Macau", "China, Macao Special Administrative Region"),
    ("Faroe Islands", "Faeroe Islands"),
    ("East Timor", "Timor-Leste"),
    ("Palestinian Territories", "State of Palestine"),
    ("Vatican City State (Holy See)", "Holy See (Vatican City State)"),
    ("Ivory Coast", "C\u{f4}te d'Ivoire"),
    (
        "South Georgia and the South Sandwich Islands",
        "South Georgia and South S.S.",
    ),
    // The one deviation from UN spelling: we write "Vietnam".
    ("Viet Nam", "Vietnam"),
    ("Holy See", "Holy See (Vatican City State)"),
];

/// Display-name rewrites applied after conflict resolution.
///
/// "Viet Nam" -> "Vietnam" is the only deviation from the otherwise
/// UN-preferred spelling; the Holy See entry restores the parenthetical the
/// UN list dropped so the entity is not mistaken for a bare "Holy See".
const DISPLAY_OVERRIDES: &[(&str, &str)] = &[
    ("Viet Nam", "Vietnam"),
    ("Holy See", "Holy See (Vatican City State)"),
];

/// Maps every raw name or alias to a canonical entity key.
///
/// Pure: `normalize` has no side effects and a name with no alias and no
/// override simply becomes its own key (a new, isolated entity).
pub struct NameNormalizer {
    aliases: HashMap<String, String>,
    display_overrides: HashMap<String, &'static str>,
}

impl NameNormalizer {
    pub fn new() -> Self {
        let mut aliases = HashMap::new();
        for (alias, canonical) in ALIASES {
            aliases.insert(fold_key(alias), fold_key(canonical));
        }
        let mut display_overrides = HashMap::new();
        for (name, preferred) in DISPLAY_OVERRIDES {
            display_overrides.insert(fold_key(name), *preferred);
        }
        Self {
            aliases,
            display_overrides,
        }
    }

    /// Canonical entity key for a raw name as any source spells it.
    pub fn normalize(&self, raw_name: &str) -> String {
        let folded = fold_key(raw_name);
        match self.aliases.get(&folded) {
            Some(canonical) => canonical.clone(),
            None => folded,
        }
    }

    /// Preferred display spelling for a resolved name, when one exists.
    pub fn display_override(&self, name: &str) -> Option<&'static str> {
        self.display_overrides.get(&fold_key(name)).copied()
    }
}

impl Default for NameNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Fold a name into its matching key: lowercase, diacritics stripped,
/// punctuation treated as whitespace, runs of whitespace collapsed.
pub fn fold_key(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_space = false;
    for ch in name.chars() {
        let folded = fold_char(ch);
        match folded {
            Some(c) => {
                if pending_space && !out.is_empty() {
                    out.push(' ');
                }
                pending_space = false;
                out.push(c);
            }
            None => pending_space = true,
        }
    }
    out
}

/// Lowercase one character, folding common Latin diacritics to ASCII.
/// Non-alphanumeric characters fold to None (word separators).
fn fold_char(ch: char) -> Option<char> {
    let lower = ch.to_lowercase().next().unwrap_or(ch);
    match lower {
        'a'..='z' | '0'..='9' => Some(lower),
        '\u{e0}'..='\u{e5}' => Some('a'),
        '\u{e7}' => Some('c'),
        '\u{e8}'..='\u{eb}' => Some('e'),
        '\u{ec}'..='\u{ef}' => Some('i'),
        '\u{f1}' => Some('n'),
        '\u{f2}'..='\u{f6}' | '\u{f8}' => Some('o'),
        '\u{f9}'..='\u{fc}' => Some('u'),
        _ => None,
    }
}
