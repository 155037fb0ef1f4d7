use std::collections::HashSet;

/// Split a comma-separated recipient list.
///
/// Pieces are trimmed, empty pieces dropped, and duplicates removed keeping
/// the first occurrence. Addresses are otherwise not validated.
pub fn parse_recipients(raw: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    raw.split(',')
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .filter(|r| seen.insert(*r))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_dedupes_and_keeps_first_occurrence_order() {
        assert_eq!(
            parse_recipients(" a@x.com, b@x.com ,a@x.com,"),
            vec!["a@x.com", "b@x.com"]
        );
    }

    #[test]
    fn blank_input_yields_nothing() {
        assert!(parse_recipients("").is_empty());
        assert!(parse_recipients(" , ,, ").is_empty());
    }

    #[test]
    fn comparison_is_exact_after_trimming() {
        assert_eq!(
            parse_recipients("ops@x.com,OPS@x.com"),
            vec!["ops@x.com", "OPS@x.com"]
        );
    }
}
