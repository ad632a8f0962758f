//! ## logline-core::field
//! **Field list loading and template building**
//!
//! A field list is a plain text file with one record attribute name per
//! line. Names are trimmed, blank lines are skipped and excluded names are
//! dropped; file order is preserved.

use std::fmt;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::error::FieldListError;

/// Names dropped from a field list unless the caller says otherwise.
pub const DEFAULT_EXCLUDED: &[&str] = &["funcName"];

/// A record attribute name as read from a field list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldName(String);

impl FieldName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The `%(<name>)s` placeholder for this field.
    pub fn placeholder(&self) -> String {
        format!("%({})s", self.0)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FieldName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Parses field list text, keeping file order.
pub fn parse_field_names<S: AsRef<str>>(contents: &str, excluded: &[S]) -> Vec<FieldName> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| !excluded.iter().any(|ex| ex.as_ref() == *line))
        .map(FieldName::new)
        .collect()
}

/// Reads and parses the field list at `path`.
///
/// A missing file is reported as [`FieldListError::FileNotFound`]; nothing
/// is retried.
pub fn load_field_names<P, S>(path: P, excluded: &[S]) -> Result<Vec<FieldName>, FieldListError>
where
    P: AsRef<Path>,
    S: AsRef<str>,
{
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => FieldListError::FileNotFound(path.to_path_buf()),
        _ => FieldListError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let names = parse_field_names(&contents, excluded);
    for name in &names {
        debug!(field = %name, "field name loaded");
    }
    debug!(path = %path.display(), count = names.len(), "field list loaded");
    Ok(names)
}

/// Joins field placeholders into a format template.
///
/// Every placeholder is followed by one space, so a non-empty template ends
/// with a trailing separator. Names are not checked here.
pub fn build_template(fields: &[FieldName]) -> String {
    fields.iter().fold(String::new(), |mut template, field| {
        template.push_str(&field.placeholder());
        template.push(' ');
        template
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::io::Write;
    use tracing_test::traced_test;

    fn names(list: &[&str]) -> Vec<FieldName> {
        list.iter().map(|n| FieldName::new(*n)).collect()
    }

    #[test]
    fn builds_template_with_trailing_separator() {
        let fields = parse_field_names("levelname\nmessage\n", DEFAULT_EXCLUDED);
        assert_eq!(build_template(&fields), "%(levelname)s %(message)s ");
    }

    #[test]
    fn excluded_name_is_dropped() {
        let fields = parse_field_names("funcName\nmessage\n", DEFAULT_EXCLUDED);
        assert_eq!(fields, names(&["message"]));
        assert_eq!(build_template(&fields), "%(message)s ");
    }

    #[test]
    fn lines_are_trimmed_and_blanks_skipped() {
        let fields = parse_field_names("  asctime \r\n\n\t\nlevelname\n", DEFAULT_EXCLUDED);
        assert_eq!(fields, names(&["asctime", "levelname"]));
    }

    #[test]
    fn exclusion_matches_whole_names_only() {
        let fields = parse_field_names("funcNameX\nfuncName\n", DEFAULT_EXCLUDED);
        assert_eq!(fields, names(&["funcNameX"]));
    }

    #[test]
    fn empty_list_builds_empty_template() {
        assert_eq!(build_template(&[]), "");
    }

    #[traced_test]
    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "asctime\nfuncName\nmessage").unwrap();

        let fields = load_field_names(file.path(), DEFAULT_EXCLUDED).unwrap();
        assert_eq!(fields, names(&["asctime", "message"]));
        assert!(logs_contain("field list loaded"));
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logging_variables.txt");

        let err = load_field_names(&path, DEFAULT_EXCLUDED).unwrap_err();
        assert!(matches!(err, FieldListError::FileNotFound(p) if p == path));
    }

    #[test]
    fn directory_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_field_names(dir.path(), DEFAULT_EXCLUDED).unwrap_err();
        assert!(matches!(err, FieldListError::Io { .. }));
    }

    fn field_line() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("funcName".to_string()),
            Just(String::new()),
            "[A-Za-z_][A-Za-z0-9_]{0,12}",
        ]
    }

    proptest! {
        #[test]
        fn excluded_name_never_reaches_template(lines in prop::collection::vec(field_line(), 0..24)) {
            let contents = lines.join("\n");
            let template = build_template(&parse_field_names(&contents, DEFAULT_EXCLUDED));
            prop_assert!(!template.contains("%(funcName)s"));
        }

        #[test]
        fn one_placeholder_per_retained_line(lines in prop::collection::vec(field_line(), 0..24)) {
            let contents = lines.join("\n");
            let retained = lines
                .iter()
                .filter(|l| !l.is_empty() && l.as_str() != "funcName")
                .count();
            let template = build_template(&parse_field_names(&contents, DEFAULT_EXCLUDED));
            prop_assert_eq!(template.matches("%(").count(), retained);
        }

        #[test]
        fn template_keeps_file_order(lines in prop::collection::vec("[a-z]{1,8}", 1..12)) {
            let fields = parse_field_names(&lines.join("\n"), DEFAULT_EXCLUDED);
            let expected: String = lines.iter().map(|l| format!("%({l})s ")).collect();
            prop_assert_eq!(build_template(&fields), expected);
        }
    }
}
