// src/graph/parse.rs
//! Reader for the link file format.
//!
//! ```text
//! <n> <m>
//! <id> <name...>      (n lines, ids 1-based)
//! <src> <dst>         (m pairs, 1-based)
//! ```
//!
//! Edge pairs are read as a token stream, so a pair may wrap across lines.
//! Anything after the last announced edge is ignored.

use std::fs;
use std::path::Path;

use tracing::debug;

use super::{Edge, Entity, LinkGraph};
use crate::error::{RankError, Result};

/// Reads and parses a link file.
///
/// # Errors
/// Returns `Io` if the file cannot be read, otherwise any error from [`parse_str`].
pub fn parse_file(path: &Path) -> Result<LinkGraph> {
    let content = fs::read_to_string(path).map_err(|source| RankError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    let graph = parse_str(&content)?;
    debug!(
        path = %path.display(),
        entities = graph.len(),
        edges = graph.edges.len(),
        "parsed link file"
    );
    Ok(graph)
}

/// Parses link data held in memory.
///
/// # Errors
/// Returns `Parse` on malformed counts, entity lines or edge tokens, and
/// `EdgeOutOfRange` when an edge names an entity outside `1..=n`.
pub fn parse_str(content: &str) -> Result<LinkGraph> {
    let mut lines = content
        .lines()
        .enumerate()
        .map(|(idx, text)| (idx + 1, text))
        .filter(|(_, text)| !text.trim().is_empty());

    let (n, m) = parse_header(lines.next())?;
    let (entities, last_line) = parse_entities(&mut lines, n)?;
    let edges = parse_edges(lines, last_line, n, m)?;

    Ok(LinkGraph { entities, edges })
}

fn parse_header(line: Option<(usize, &str)>) -> Result<(usize, usize)> {
    let Some((line_no, text)) = line else {
        return Err(RankError::parse(1, "empty input, expected `<entities> <edges>`"));
    };
    let mut tokens = text.split_whitespace();
    let n = parse_count(tokens.next(), line_no, "entity count")?;
    let m = parse_count(tokens.next(), line_no, "edge count")?;
    if let Some(extra) = tokens.next() {
        return Err(RankError::parse(
            line_no,
            format!("unexpected token `{extra}` after counts"),
        ));
    }
    if n == 0 {
        return Err(RankError::parse(line_no, "entity count must be at least 1"));
    }
    Ok((n, m))
}

fn parse_count(token: Option<&str>, line: usize, what: &str) -> Result<usize> {
    let token = token.ok_or_else(|| RankError::parse(line, format!("missing {what}")))?;
    token
        .parse()
        .map_err(|_| RankError::parse(line, format!("{what} `{token}` is not a non-negative integer")))
}

/// Returns the entities and the line number of the last entity line.
fn parse_entities<'a, I>(lines: &mut I, n: usize) -> Result<(Vec<Entity>, usize)>
where
    I: Iterator<Item = (usize, &'a str)>,
{
    let mut slots: Vec<Option<Entity>> = vec![None; n];
    let mut last_line = 1;

    for _ in 0..n {
        let Some((line_no, text)) = lines.next() else {
            return Err(RankError::parse(
                last_line + 1,
                format!("unexpected end of input, expected {n} entity lines"),
            ));
        };
        last_line = line_no;

        let entity = parse_entity(line_no, text, n)?;
        let slot = &mut slots[entity.id];
        if slot.is_some() {
            return Err(RankError::parse(
                line_no,
                format!("duplicate entity id {}", entity.id + 1),
            ));
        }
        *slot = Some(entity);
    }

    // n lines with n distinct ids in 1..=n fill every slot
    Ok((slots.into_iter().flatten().collect(), last_line))
}

fn parse_entity(line_no: usize, text: &str, n: usize) -> Result<Entity> {
    let text = text.trim();
    let (id_token, name) = text
        .split_once(char::is_whitespace)
        .ok_or_else(|| RankError::parse(line_no, "expected `<id> <name>`"))?;

    let id: usize = id_token
        .parse()
        .map_err(|_| RankError::parse(line_no, format!("entity id `{id_token}` is not an integer")))?;
    if id == 0 || id > n {
        return Err(RankError::parse(
            line_no,
            format!("entity id {id} outside 1..={n}"),
        ));
    }

    let name = name.trim();
    if name.is_empty() {
        return Err(RankError::parse(line_no, "entity name is empty"));
    }

    Ok(Entity {
        id: id - 1,
        name: name.to_string(),
    })
}

/// Cursor over edge tokens that remembers the last line it consumed.
struct EdgeTokens<I> {
    tokens: I,
    last_line: usize,
    expected: usize,
}

impl<'a, I> EdgeTokens<I>
where
    I: Iterator<Item = (usize, &'a str)>,
{
    fn next_endpoint(&mut self, read: usize) -> Result<(usize, usize)> {
        let Some((line_no, token)) = self.tokens.next() else {
            return Err(RankError::parse(
                self.last_line + 1,
                format!("unexpected end of input after {read} of {} edges", self.expected),
            ));
        };
        self.last_line = line_no;
        let value = token
            .parse()
            .map_err(|_| RankError::parse(line_no, format!("edge endpoint `{token}` is not an integer")))?;
        Ok((line_no, value))
    }
}

fn parse_edges<'a, I>(lines: I, last_line: usize, n: usize, m: usize) -> Result<Vec<Edge>>
where
    I: Iterator<Item = (usize, &'a str)>,
{
    let mut cursor = EdgeTokens {
        tokens: lines.flat_map(|(line_no, text)| {
            text.split_whitespace().map(move |token| (line_no, token))
        }),
        last_line,
        expected: m,
    };

    let mut edges = Vec::with_capacity(m);
    for k in 0..m {
        let (line_no, src) = cursor.next_endpoint(k)?;
        let (_, dst) = cursor.next_endpoint(k)?;

        if src == 0 || src > n || dst == 0 || dst > n {
            return Err(RankError::EdgeOutOfRange {
                line: line_no,
                src,
                dst,
                n,
            });
        }
        edges.push(Edge::new(src - 1, dst - 1));
    }
    Ok(edges)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "3 4\n1 http://a.example/\n2 http://b.example/ index\n3 http://c.example/\n1 2\n2 3\n3 1\n1 2\n";

    #[test]
    fn parses_sample() {
        let g = parse_str(SAMPLE).unwrap();
        assert_eq!(g.len(), 3);
        assert_eq!(g.name(1), Some("http://b.example/ index"));
        assert_eq!(g.edges.len(), 4);
        assert_eq!(g.edges[0], Edge::new(0, 1));
    }

    #[test]
    fn entities_placed_by_declared_id() {
        let g = parse_str("2 0\n2 second\n1 first\n").unwrap();
        assert_eq!(g.name(0), Some("first"));
        assert_eq!(g.name(1), Some("second"));
    }

    #[test]
    fn edge_pairs_may_wrap_lines() {
        let g = parse_str("2 2\n1 a\n2 b\n1\n2 2 1\n").unwrap();
        assert_eq!(g.edges, vec![Edge::new(0, 1), Edge::new(1, 0)]);
    }

    #[test]
    fn rejects_out_of_range_edge() {
        let err = parse_str("2 1\n1 a\n2 b\n1 3\n").unwrap_err();
        assert!(matches!(err, RankError::EdgeOutOfRange { line: 4, dst: 3, .. }));
    }

    #[test]
    fn truncated_edges_report_following_line() {
        let err = parse_str("2 2\n1 a\n2 b\n1 2\n").unwrap_err();
        assert!(matches!(err, RankError::Parse { line: 5, .. }), "{err}");

        // a dangling endpoint still points past the last line read
        let err = parse_str("2 2\n1 a\n2 b\n1 2\n2\n").unwrap_err();
        assert!(matches!(err, RankError::Parse { line: 6, .. }), "{err}");

        // no edge lines at all
        let err = parse_str("2 1\n1 a\n2 b\n").unwrap_err();
        assert!(matches!(err, RankError::Parse { line: 4, .. }), "{err}");
    }

    #[test]
    fn truncated_entities_report_following_line() {
        let err = parse_str("3 0\n1 a\n2 b\n").unwrap_err();
        assert!(matches!(err, RankError::Parse { line: 4, .. }), "{err}");
    }

    #[test]
    fn rejects_bad_header() {
        assert!(parse_str("").is_err());
        assert!(parse_str("x 2\n").is_err());
        assert!(parse_str("0 0\n").is_err());
    }

    #[test]
    fn rejects_duplicate_entity_id() {
        let err = parse_str("2 0\n1 a\n1 b\n").unwrap_err();
        assert!(matches!(err, RankError::Parse { line: 3, .. }));
    }
}
