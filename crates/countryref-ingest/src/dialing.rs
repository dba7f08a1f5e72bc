//! Parsing of dialing-code cell text.
//!
//! The dialing source reports one cell per country containing entries like
//! `+84`, `+1 242` or `+1 809, +1 829, +1 849`, sometimes with bracketed
//! footnote markers. The first entry carries the international dialing
//! code; when entries carry a second token, those are the area codes the
//! country is allotted within its shared numbering area.

/// A parsed dialing cell: the IDC plus any per-entry area codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialingNumbers {
    pub idc: String,
    pub area_codes: Vec<String>,
}

/// Parse one dialing cell. Returns `None` when no usable entry is present.
pub fn parse_dialing(raw: &str) -> Option<DialingNumbers> {
    let cleaned = strip_footnotes(raw);
    let entries: Vec<Vec<&str>> = cleaned
        .split(',')
        .filter_map(|entry| {
            let entry = entry.trim();
            // Keep only the part from the '+' on; cells sometimes carry
            // leading annotations.
            let entry = match entry.find('+') {
                Some(position) => &entry[position + 1..],
                None if entry.is_empty() => return None,
                None => entry,
            };
            let tokens: Vec<&str> = entry.split_whitespace().collect();
            if tokens.is_empty() { None } else { Some(tokens) }
        })
        .collect();

    let first = entries.first()?;
    let idc = (*first.first()?).to_string();
    if idc.is_empty() || !idc.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    // Area codes exist only when the leading entry pairs the IDC with a
    // second token; single-token follow-up entries are then skipped.
    let area_codes = if first.len() > 1 {
        entries
            .iter()
            .filter_map(|tokens| tokens.get(1).map(|code| (*code).to_string()))
            .collect()
    } else {
        Vec::new()
    };

    Some(DialingNumbers { idc, area_codes })
}

/// Remove `[...]` footnote markers.
fn strip_footnotes(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut depth = 0usize;
    for ch in raw.chars() {
        match ch {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            _ if depth == 0 => out.push(ch),
            _ => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_idc() {
        let parsed = parse_dialing("+84").expect("parse");
        assert_eq!(parsed.idc, "84");
        assert!(parsed.area_codes.is_empty());
    }

    #[test]
    fn single_area_code() {
        let parsed = parse_dialing("+1 242").expect("parse");
        assert_eq!(parsed.idc, "1");
        assert_eq!(parsed.area_codes, ["242"]);
    }

    #[test]
    fn multiple_area_codes() {
        let parsed = parse_dialing("+1 809, +1 829, +1 849").expect("parse");
        assert_eq!(parsed.idc, "1");
        assert_eq!(parsed.area_codes, ["809", "829", "849"]);
    }

    #[test]
    fn footnotes_are_stripped() {
        let parsed = parse_dialing("+44[note 1]").expect("parse");
        assert_eq!(parsed.idc, "44");
    }

    #[test]
    fn missing_plus_still_parses_digits() {
        let parsed = parse_dialing("39 066").expect("parse");
        assert_eq!(parsed.idc, "39");
        assert_eq!(parsed.area_codes, ["066"]);
    }

    #[test]
    fn junk_yields_none() {
        assert!(parse_dialing("").is_none());
        assert!(parse_dialing("n/a").is_none());
        assert!(parse_dialing(" , ,").is_none());
    }
}
