//! Minimal deb822 reader for `.changes` files.

use std::str::FromStr;

use crate::error::ChangesError;

/// Field listing the Launchpad bugs an upload closes.
pub const BUGS_FIXED_FIELD: &str = "Launchpad-Bugs-Fixed";

const PGP_SIGNED_HEADER: &str = "-----BEGIN PGP SIGNED MESSAGE-----";
const PGP_SIGNATURE_HEADER: &str = "-----BEGIN PGP SIGNATURE-----";

/// The first paragraph of a changes file, fields in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangesFile {
    fields: Vec<(String, String)>,
}

impl ChangesFile {
    /// Value of `name`, matched case-insensitively.
    ///
    /// Continuation lines are joined with `\n`.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Bug numbers listed under [`BUGS_FIXED_FIELD`].
    #[must_use]
    pub fn bugs_fixed(&self) -> Vec<String> {
        self.field(BUGS_FIXED_FIELD)
            .map(|value| value.split_whitespace().map(String::from).collect())
            .unwrap_or_default()
    }
}

impl FromStr for ChangesFile {
    type Err = ChangesError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut fields: Vec<(String, String)> = Vec::new();
        let mut signed = false;
        let mut in_armor_headers = false;

        for (number, line) in text.lines().enumerate() {
            if !signed && fields.is_empty() && line.trim_end() == PGP_SIGNED_HEADER {
                signed = true;
                in_armor_headers = true;
                continue;
            }
            if in_armor_headers {
                in_armor_headers = !line.trim().is_empty();
                continue;
            }
            if signed && line.trim_end() == PGP_SIGNATURE_HEADER {
                break;
            }
            if line.trim().is_empty() {
                if fields.is_empty() {
                    continue;
                }
                break;
            }
            if line.starts_with('#') {
                continue;
            }
            if line.starts_with(|c: char| c == ' ' || c == '\t') {
                let Some((_, value)) = fields.last_mut() else {
                    return Err(ChangesError { line: number + 1, content: line.to_string() });
                };
                let continuation = line.trim();
                if continuation != "." {
                    if !value.is_empty() {
                        value.push('\n');
                    }
                    value.push_str(continuation);
                }
                continue;
            }
            let Some((key, value)) = line.split_once(':') else {
                return Err(ChangesError { line: number + 1, content: line.to_string() });
            };
            fields.push((key.trim().to_string(), value.trim().to_string()));
        }

        Ok(Self { fields })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHANGES: &str = "\
Format: 1.8
Date: Tue, 02 Jan 2024 10:00:00 +0000
Source: gnome-shell
Version: 45.2-0ubuntu1
Distribution: noble
Launchpad-Bugs-Fixed: 2045123 2046001
Changes:
 gnome-shell (45.2-0ubuntu1) noble; urgency=medium
 .
   * New upstream release (LP: #2045123)
Files:
 0123abcd 2048 gnome optional gnome-shell_45.2-0ubuntu1.dsc
";

    #[test]
    fn reads_bugs_fixed() {
        let changes: ChangesFile = CHANGES.parse().unwrap();
        assert_eq!(changes.bugs_fixed(), ["2045123", "2046001"]);
        assert_eq!(changes.field("source"), Some("gnome-shell"));
    }

    #[test]
    fn joins_continuation_lines() {
        let changes: ChangesFile = CHANGES.parse().unwrap();
        let body = changes.field("Changes").unwrap();
        assert!(body.starts_with("gnome-shell (45.2-0ubuntu1)"));
        assert!(body.contains("* New upstream release"));
    }

    #[test]
    fn missing_field_yields_no_bugs() {
        let changes: ChangesFile = "Source: hello\nVersion: 1.0\n".parse().unwrap();
        assert!(changes.bugs_fixed().is_empty());
    }

    #[test]
    fn extra_whitespace_between_bugs_is_ignored() {
        let changes: ChangesFile = "Launchpad-Bugs-Fixed:  1   2\t3\n".parse().unwrap();
        assert_eq!(changes.bugs_fixed(), ["1", "2", "3"]);
    }

    #[test]
    fn strips_clearsign_armor() {
        let signed = format!(
            "-----BEGIN PGP SIGNED MESSAGE-----\nHash: SHA512\n\n{CHANGES}\n\
             -----BEGIN PGP SIGNATURE-----\n\niQIzBAEBCgAdFiEE\n-----END PGP SIGNATURE-----\n"
        );
        let changes: ChangesFile = signed.parse().unwrap();
        assert_eq!(changes.bugs_fixed(), ["2045123", "2046001"]);
        assert_eq!(changes.field("Hash"), None);
    }

    #[test]
    fn blank_lines_before_armor_are_skipped() {
        let signed = format!(
            "\n\n-----BEGIN PGP SIGNED MESSAGE-----\nHash: SHA256\n\n{CHANGES}\n\
             -----BEGIN PGP SIGNATURE-----\n\niQIzBAEBCgAdFiEE\n-----END PGP SIGNATURE-----\n"
        );
        let changes: ChangesFile = signed.parse().unwrap();
        assert_eq!(changes.bugs_fixed(), ["2045123", "2046001"]);
    }

    #[test]
    fn only_first_paragraph_is_read() {
        let changes: ChangesFile =
            "Source: a\n\nLaunchpad-Bugs-Fixed: 99\n".parse().unwrap();
        assert!(changes.bugs_fixed().is_empty());
    }

    #[test]
    fn line_without_colon_is_malformed() {
        let err = "Source: a\nnot a field\n".parse::<ChangesFile>().unwrap_err();
        assert_eq!(err.line, 2);
        assert_eq!(err.content, "not a field");
    }

    #[test]
    fn leading_continuation_is_malformed() {
        let err = " orphan\n".parse::<ChangesFile>().unwrap_err();
        assert_eq!(err.line, 1);
    }
}
