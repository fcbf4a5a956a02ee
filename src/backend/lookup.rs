//! Rust model of the lookup rules compiled into generated code.
//!
//! Generated `<S>FromString` compares a name against every stored name character by character,
//! optionally ignoring ASCII case and a number of leading characters of the stored name. The same
//! rule is implemented here so the generator can tell when two entries cannot be told apart.

/// Equality used by generated `FromString`.
///
/// `ignore_prefix_len` leading bytes of `stored` are skipped (never past its end). Both strings must
/// end together; running out on one side only is a mismatch.
pub fn names_match(needle: &str, stored: &str, ignore_case: bool, ignore_prefix_len: usize) -> bool {
    let stored = stored.as_bytes();
    let stored = &stored[ignore_prefix_len.min(stored.len())..];
    let needle = needle.as_bytes();

    needle.len() == stored.len()
        && needle.iter().zip(stored).all(|(a, b)| {
            if ignore_case { a.eq_ignore_ascii_case(b) } else { a == b }
        })
}

/// First index whose name matches `needle`, as generated `FromString` scans.
pub fn find_index<'a>(
    names: impl IntoIterator<Item = &'a str>,
    needle: &str,
    ignore_case: bool,
    ignore_prefix_len: usize,
) -> Option<usize> {
    names
        .into_iter()
        .position(|stored| names_match(needle, stored, ignore_case, ignore_prefix_len))
}

/// An entry that `FromString` can never return because an earlier entry matches first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collision {
    pub index: usize,
    pub shadowed_by: usize,
}

/// Entries unreachable through case-insensitive `FromString` (exact duplicates included).
pub fn case_insensitive_collisions(names: &[&str]) -> Vec<Collision> {
    names
        .iter()
        .enumerate()
        .filter_map(|(index, name)| {
            let first = find_index(names.iter().copied(), name, true, 0)?;
            (first != index).then_some(Collision {
                index,
                shadowed_by: first,
            })
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        assert!(names_match("RED", "RED", false, 0));
        assert!(!names_match("red", "RED", false, 0));
        assert!(names_match("red", "RED", true, 0));
    }

    #[test]
    fn test_one_side_ending_is_mismatch() {
        assert!(!names_match("RE", "RED", false, 0));
        assert!(!names_match("REDX", "RED", false, 0));
    }

    #[test]
    fn test_prefix_skip() {
        assert!(names_match("RED", "COLOR_RED", false, 6));
        assert!(names_match("red", "COLOR_RED", true, 6));
        assert!(!names_match("RED", "COLOR_RED", false, 5));
    }

    #[test]
    fn test_prefix_skip_stops_at_end() {
        assert!(names_match("", "AB", false, 10));
        assert!(!names_match("B", "AB", false, 10));
    }

    #[test]
    fn test_find_index_first_wins() {
        let names = ["Red", "RED", "GREEN"];
        assert_eq!(find_index(names, "red", true, 0), Some(0));
        assert_eq!(find_index(names, "RED", false, 0), Some(1));
        assert_eq!(find_index(names, "BLUE", true, 0), None);
    }

    #[test]
    fn test_collisions() {
        let names = ["Red", "GREEN", "RED", "Green"];
        assert_eq!(
            case_insensitive_collisions(&names),
            vec![
                Collision { index: 2, shadowed_by: 0 },
                Collision { index: 3, shadowed_by: 1 },
            ]
        );
        assert!(case_insensitive_collisions(&["A", "B"]).is_empty());
    }
}
