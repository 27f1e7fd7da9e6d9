use thiserror::Error;

use crate::models::team::Team;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ImportError {
    #[error("invalid format: the first column header must be \"name\"")]
    InvalidHeader,
    #[error("file must contain a header and at least one player name")]
    NoRows,
}

/// Parse a delimited roster file into team names.
///
/// The first cell of the header row, trimmed, must equal "name"
/// (case-insensitive). Each later row contributes its first cell,
/// trimmed; rows with an empty first cell are skipped. Only the first
/// column is read.
pub fn parse_roster(input: &str) -> Result<Vec<String>, ImportError> {
    let mut lines = input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty());

    let header = lines.next().ok_or(ImportError::NoRows)?;
    let header_cell = first_cell(header);
    if !header_cell.eq_ignore_ascii_case("name") {
        return Err(ImportError::InvalidHeader);
    }

    let names: Vec<String> = lines
        .map(first_cell)
        .filter(|cell| !cell.is_empty())
        .map(str::to_string)
        .collect();

    if names.is_empty() {
        return Err(ImportError::NoRows);
    }
    Ok(names)
}

fn first_cell(line: &str) -> &str {
    line.split(',').next().unwrap_or_default().trim()
}

/// Build fresh roster entries for imported names. All-or-nothing: the
/// caller replaces the whole roster with the result.
pub fn teams_from_names<S: AsRef<str>>(names: &[S]) -> Vec<Team> {
    names.iter().map(|name| Team::new(name.as_ref())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_match_is_case_insensitive() {
        let names = parse_roster("Name\nAlice\nBob").unwrap();
        assert_eq!(names, vec!["Alice", "Bob"]);
        let names = parse_roster("NAME\nCarol").unwrap();
        assert_eq!(names, vec!["Carol"]);
    }

    #[test]
    fn blank_rows_are_skipped() {
        let names = parse_roster("name\nAlice\n\n  \n,orphan cell\nBob").unwrap();
        assert_eq!(names, vec!["Alice", "Bob"]);
    }

    #[test]
    fn only_first_column_is_read() {
        let names = parse_roster("name,seed\nAlice,1\nBob,2").unwrap();
        assert_eq!(names, vec!["Alice", "Bob"]);
    }

    #[test]
    fn values_are_trimmed() {
        let names = parse_roster("  name  \n  Alice  ").unwrap();
        assert_eq!(names, vec!["Alice"]);
    }

    #[test]
    fn wrong_header_is_a_format_error() {
        assert_eq!(parse_roster("player\nAlice"), Err(ImportError::InvalidHeader));
    }

    #[test]
    fn header_without_rows_is_a_format_error() {
        assert_eq!(parse_roster("name"), Err(ImportError::NoRows));
        assert_eq!(parse_roster("name\n\n ,"), Err(ImportError::NoRows));
        assert_eq!(parse_roster(""), Err(ImportError::NoRows));
    }

    #[test]
    fn teams_get_ids_logos_and_tags() {
        let teams = teams_from_names(&["Red Dragons"]);
        assert_eq!(teams.len(), 1);
        assert_eq!(teams[0].name, "Red Dragons");
        assert_eq!(teams[0].tag, "red");
        assert!(teams[0].logo_url.contains(&teams[0].id.to_string()));
    }
}
