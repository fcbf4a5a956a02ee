//! INI reader producing `(section, key, value)` triples in file order.
//!
//! Accepted syntax:
//! - `[Name]` starts a section (name trimmed). Triples before the first header carry an empty section.
//! - `key=value` or `key: value`, split at the first `=` or `:`; key and value are trimmed.
//! - Blank lines and lines starting with `;` or `#` are ignored.
//! - `;` preceded by whitespace starts an inline comment inside a value.
//! - A leading UTF-8 byte order mark is ignored.

use crate::diagnostics::SyntaxDiagnostic;

/// One key/value pair and the section it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IniTriple {
    /// Current section name, empty before the first section header.
    pub section: String,
    pub key: String,
    pub value: String,
    /// 1-based source line.
    pub line: usize,
}

/// Result of reading a description: the triples plus the lines that were skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IniDocument {
    pub triples: Vec<IniTriple>,
    pub diagnostics: Vec<SyntaxDiagnostic>,
}

/// Read a whole description.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse(source: &str) -> IniDocument {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    let mut doc = IniDocument::default();
    let mut section = String::new();

    for (idx, raw) in source.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();

        if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
            continue;
        }

        if let Some(rest) = line.strip_prefix('[') {
            match rest.find(']') {
                Some(end) => section = rest[..end].trim().to_string(),
                None => doc.diagnostics.push(SyntaxDiagnostic::UnclosedSection { line: line_no }),
            }
            continue;
        }

        let Some(sep) = line.find(['=', ':']) else {
            doc.diagnostics.push(SyntaxDiagnostic::MissingSeparator { line: line_no });
            continue;
        };

        let key = line[..sep].trim();
        let value = strip_inline_comment(line[sep + 1..].trim_start()).trim_end();
        doc.triples.push(IniTriple {
            section: section.clone(),
            key: key.to_string(),
            value: value.to_string(),
            line: line_no,
        });
    }

    doc
}

fn strip_inline_comment(value: &str) -> &str {
    let mut was_space = false;
    for (i, ch) in value.char_indices() {
        if ch == ';' && was_space {
            return &value[..i];
        }
        was_space = ch.is_whitespace();
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(doc: &IniDocument) -> Vec<(&str, &str, &str)> {
        doc.triples
            .iter()
            .map(|t| (t.section.as_str(), t.key.as_str(), t.value.as_str()))
            .collect()
    }

    #[test]
    fn test_sections_and_keys_in_order() {
        let doc = parse("c-header=h\n[Color]\ntype=enum\nfield=RED=0\nfield=GREEN\n");
        assert_eq!(
            keys(&doc),
            vec![
                ("", "c-header", "h"),
                ("Color", "type", "enum"),
                ("Color", "field", "RED=0"),
                ("Color", "field", "GREEN"),
            ]
        );
        assert!(doc.diagnostics.is_empty());
    }

    #[test]
    fn test_colon_separator_and_trimming() {
        let doc = parse("  top :  #pragma once  \n");
        assert_eq!(keys(&doc), vec![("", "top", "#pragma once")]);
    }

    #[test]
    fn test_first_separator_wins() {
        let doc = parse("[S]\nfield=BLUE(descr=\"ok\")\ninclude-file=#include <a:b.h>\n");
        assert_eq!(doc.triples[0].value, "BLUE(descr=\"ok\")");
        assert_eq!(doc.triples[1].value, "#include <a:b.h>");
    }

    #[test]
    fn test_comments_are_skipped() {
        let doc = parse("; comment\n# another\n[S]\nfield=A ; trailing\nfield=B;kept\n");
        assert_eq!(keys(&doc), vec![("S", "field", "A"), ("S", "field", "B;kept")]);
    }

    #[test]
    fn test_line_numbers() {
        let doc = parse("\n[S]\n\nfield=A\n");
        assert_eq!(doc.triples[0].line, 4);
    }

    #[test]
    fn test_malformed_lines_are_reported_and_skipped() {
        let doc = parse("[Broken\nfield=A\njust words\n");
        assert_eq!(
            doc.diagnostics,
            vec![
                SyntaxDiagnostic::UnclosedSection { line: 1 },
                SyntaxDiagnostic::MissingSeparator { line: 3 },
            ]
        );
        assert_eq!(keys(&doc), vec![("", "field", "A")]);
    }

    #[test]
    fn test_bom_and_crlf() {
        let doc = parse("\u{feff}[S]\r\nfield=A\r\n");
        assert_eq!(keys(&doc), vec![("S", "field", "A")]);
    }

    #[test]
    fn test_section_name_trimmed() {
        let doc = parse("[  Color  ]\nfield=A\n");
        assert_eq!(doc.triples[0].section, "Color");
    }
}
