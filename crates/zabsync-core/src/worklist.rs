// Work-list parsing
//
// The input is a flat text file, one identifier per line. Blank lines
// and `#` comments are skipped; surrounding whitespace is trimmed.

use std::path::Path;

use crate::error::CoreError;

/// Parse work-list contents into the ordered item list.
pub fn parse(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_owned)
        .collect()
}

/// Read and parse a work list from a file.
pub fn read_work_list(path: &Path) -> Result<Vec<String>, CoreError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CoreError::WorkList {
        path: path.to_owned(),
        source,
    })?;
    Ok(parse(&contents))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{parse, read_work_list};

    #[test]
    fn parse_skips_blanks_and_comments() {
        let contents = "\
a.example.com

# decommissioned
b.example.com
   c.example.com  \n\n# trailing comment\n";

        assert_eq!(
            parse(contents),
            vec!["a.example.com", "b.example.com", "c.example.com"]
        );
    }

    #[test]
    fn parse_empty_input_yields_no_items() {
        assert_eq!(parse(""), Vec::<String>::new());
        assert_eq!(parse("\n# only a comment\n\n"), Vec::<String>::new());
    }

    #[test]
    fn read_work_list_reads_file_in_order() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(
            &mut file,
            b"one.example.com\ntwo.example.com\n# three\n",
        )
        .unwrap();

        let items = read_work_list(file.path()).unwrap();
        assert_eq!(items, vec!["one.example.com", "two.example.com"]);
    }

    #[test]
    fn read_work_list_missing_file_is_an_error() {
        let result = read_work_list(std::path::Path::new("/nonexistent/hosts.txt"));
        assert!(result.is_err());
    }
}
