//! Sequence-to-delimited-string reducer shared by every list-valued field.

use std::fmt::{Display, Write};

/// Concatenate `items` in order, separated by `delim`.
///
/// Entries are not escaped: a value containing the delimiter cannot be split
/// back apart by the consumer. An empty sequence yields `""`.
///
/// Empty entries keep their position, leading ones included:
/// `["", "x", ""]` joins to `",x,"`, not `"x,"`.
pub fn join<I, S, D>(items: I, delim: D) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    D: Display,
{
    let mut out = String::new();
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            // Writing into a String cannot fail.
            let _ = write!(out, "{delim}");
        }
        out.push_str(item.as_ref());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sequence_is_empty_string() {
        let items: Vec<String> = Vec::new();
        assert_eq!(join(items, ','), "");
    }

    #[test]
    fn single_element_has_no_delimiter() {
        assert_eq!(join(["alice"], ','), "alice");
    }

    #[test]
    fn keeps_sequence_order() {
        assert_eq!(join(vec!["b".to_string(), "a".to_string(), "c".to_string()], ','), "b,a,c");
    }

    #[test]
    fn accepts_str_delimiter() {
        assert_eq!(join(["1", "2", "3"], ", "), "1, 2, 3");
    }

    #[test]
    fn empty_entries_still_get_separated() {
        assert_eq!(join(["", "x", ""], ','), ",x,");
    }

    #[test]
    fn delimiter_inside_value_is_not_escaped() {
        assert_eq!(join(["a,b", "c"], ','), "a,b,c");
    }
}
