//! Script text lexing: comment stripping and statement splitting.
//!
//! This is a best-effort lexical pass, not a SQL parser. A `;` inside a
//! string literal or a procedural block is still treated as a terminator,
//! and only full-line `--` comments are recognized (known limitation).

/// Line prefix that marks a SQL comment.
const COMMENT_MARKER: &str = "--";

/// Split raw script text into an ordered sequence of statements.
///
/// Lines whose first non-whitespace characters are `--` are dropped, the
/// remainder is split on `;`, and each piece is trimmed; empty pieces are
/// discarded.
///
/// # Examples
/// ```
/// use preen_core::statement::split_statements;
/// let script = "-- create the table\nCREATE TABLE t (id INT);\nINSERT INTO t VALUES (1);";
/// assert_eq!(
///     split_statements(script),
///     vec!["CREATE TABLE t (id INT)", "INSERT INTO t VALUES (1)"]
/// );
/// ```
pub fn split_statements(text: &str) -> Vec<String> {
    let without_comments = text
        .lines()
        .filter(|line| !line.trim_start().starts_with(COMMENT_MARKER))
        .collect::<Vec<_>>()
        .join("\n");

    without_comments
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
#[path = "statement_test.rs"]
mod tests;
