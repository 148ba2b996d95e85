//! Whitespace-token input format: a point count followed by that many
//! integer coordinate pairs.
//!
//! Tokens form one conceptual stream and may be split across lines
//! arbitrarily. Malformed input (non-numeric tokens, token shortfall,
//! negative count) fails fast here; the core solver never sees it.

use anyhow::{bail, Context, Result};
use closest::Point;
use std::io::Read;
use std::path::Path;

/// Read the token stream from a file, or stdin when no path is given.
pub fn read_source(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) => {
            std::fs::read_to_string(p).with_context(|| format!("reading {}", p.display()))
        }
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("reading stdin")?;
            Ok(text)
        }
    }
}

/// Parse `n` followed by exactly `n` coordinate pairs.
pub fn parse_points(text: &str) -> Result<Vec<Point>> {
    let mut tokens = text.split_whitespace();
    let head = tokens.next().context("missing point count")?;
    let n: usize = head
        .parse()
        .with_context(|| format!("invalid point count {head:?}"))?;
    let mut points = Vec::with_capacity(n);
    for i in 0..n {
        let x = next_coord(&mut tokens, i, "x")?;
        let y = next_coord(&mut tokens, i, "y")?;
        points.push(Point::new(x, y));
    }
    if let Some(extra) = tokens.next() {
        bail!("unexpected trailing token {extra:?} after {n} points");
    }
    Ok(points)
}

fn next_coord<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    i: usize,
    axis: &str,
) -> Result<i64> {
    let tok = tokens
        .next()
        .with_context(|| format!("point {i}: missing {axis} coordinate"))?;
    tok.parse()
        .with_context(|| format!("point {i}: invalid {axis} coordinate {tok:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_tokens_across_lines() {
        let pts = parse_points("3\n0 0\n3\n4 -1 -2\n").unwrap();
        assert_eq!(
            pts,
            vec![Point::new(0, 0), Point::new(3, 4), Point::new(-1, -2)]
        );
    }

    #[test]
    fn rejects_negative_count_and_bad_tokens() {
        assert!(parse_points("-1").is_err());
        assert!(parse_points("2 0 0 1").is_err()); // token shortfall
        assert!(parse_points("1 a 0").is_err());
        assert!(parse_points("1 0 0 extra").is_err());
        assert!(parse_points("").is_err());
    }

    #[test]
    fn reads_from_a_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, "2\n0 0\n3 4\n").unwrap();
        let text = read_source(Some(f.path())).unwrap();
        let pts = parse_points(&text).unwrap();
        assert_eq!(pts.len(), 2);
    }
}
