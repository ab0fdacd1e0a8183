//! Arena input parsing.
//!
//! Reads the line-oriented arena protocol: a one-time startup block
//! describing the map, then one block per turn refreshing every cell's
//! resource and ant counts. Malformed or short input is fatal and surfaces
//! as a typed error; a clean end of stream at a turn boundary means the
//! arena closed the game and is not an error.

use std::io::BufRead;

use thiserror::Error;

use crate::board::{Cell, CellKind, Layout, Snapshot, NEIGHBOR_SLOTS, NO_NEIGHBOR};

/// Errors that can occur while reading arena input.
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("unexpected end of input while reading {0}")]
    UnexpectedEof(&'static str),

    #[error("invalid integer '{value}' in {context}")]
    InvalidInteger {
        context: &'static str,
        value: String,
    },

    #[error("unknown cell kind tag {0}")]
    UnknownCellKind(i32),

    #[error("cell {cell} line has {got} fields, expected {expected}")]
    ShortCellLine {
        cell: usize,
        got: usize,
        expected: usize,
    },

    #[error("invalid neighbor index {0}")]
    InvalidNeighbor(i32),

    #[error("expected {expected} base ids, got {got}")]
    ShortBaseLine { expected: usize, got: usize },

    #[error("negative count {value} in {context}")]
    NegativeCount { context: &'static str, value: i32 },

    #[error("invalid layout: {0}")]
    InvalidLayout(String),
}

/// Reads one line, failing with `UnexpectedEof` if the stream ended.
fn next_line<R: BufRead>(input: &mut R, context: &'static str) -> Result<String, ProtocolError> {
    let mut line = String::new();
    let read = input.read_line(&mut line)?;
    if read == 0 {
        return Err(ProtocolError::UnexpectedEof(context));
    }
    Ok(line)
}

fn parse_int(token: &str, context: &'static str) -> Result<i32, ProtocolError> {
    token
        .trim()
        .parse::<i32>()
        .map_err(|_| ProtocolError::InvalidInteger {
            context,
            value: token.trim().to_string(),
        })
}

fn non_negative(value: i32, context: &'static str) -> Result<i32, ProtocolError> {
    if value < 0 {
        return Err(ProtocolError::NegativeCount { context, value });
    }
    Ok(value)
}

/// Reads the startup block: cell count, one line per cell, base count,
/// then one line of base ids per player.
pub fn read_layout<R: BufRead>(input: &mut R) -> Result<Layout, ProtocolError> {
    let count_line = next_line(input, "cell count")?;
    let num_cells = non_negative(parse_int(&count_line, "cell count")?, "cell count")? as usize;
    if num_cells == 0 {
        return Err(ProtocolError::InvalidLayout("map has no cells".to_string()));
    }

    let mut cells = Vec::with_capacity(num_cells);
    for cell_id in 0..num_cells {
        let line = next_line(input, "cell description")?;
        let fields: Vec<&str> = line.split_whitespace().collect();
        // kind tag, initial resources, six neighbor slots
        let expected = 2 + NEIGHBOR_SLOTS;
        if fields.len() < expected {
            return Err(ProtocolError::ShortCellLine {
                cell: cell_id,
                got: fields.len(),
                expected,
            });
        }

        let tag = parse_int(fields[0], "cell kind")?;
        let kind = CellKind::from_tag(tag).ok_or(ProtocolError::UnknownCellKind(tag))?;
        non_negative(parse_int(fields[1], "initial resources")?, "initial resources")?;

        let mut neighbors = Vec::with_capacity(NEIGHBOR_SLOTS);
        for slot in 0..NEIGHBOR_SLOTS {
            let value = parse_int(fields[2 + slot], "neighbor index")?;
            if value == NO_NEIGHBOR {
                continue;
            }
            if value < 0 {
                return Err(ProtocolError::InvalidNeighbor(value));
            }
            neighbors.push(value as usize);
        }

        cells.push(Cell {
            kind,
            neighbors: neighbors.into_boxed_slice(),
        });
    }

    let base_count_line = next_line(input, "base count")?;
    let base_count =
        non_negative(parse_int(&base_count_line, "base count")?, "base count")? as usize;

    let my_bases = read_base_line(input, base_count, "own base ids")?;
    let enemy_bases = read_base_line(input, base_count, "enemy base ids")?;

    Layout::new(cells, my_bases, enemy_bases).map_err(ProtocolError::InvalidLayout)
}

/// Reads one line of exactly `expected` base ids.
fn read_base_line<R: BufRead>(
    input: &mut R,
    expected: usize,
    context: &'static str,
) -> Result<Vec<usize>, ProtocolError> {
    let line = next_line(input, context)?;
    let mut bases = Vec::with_capacity(expected);
    for token in line.split_whitespace() {
        let value = non_negative(parse_int(token, "base id")?, "base id")?;
        bases.push(value as usize);
    }
    if bases.len() != expected {
        return Err(ProtocolError::ShortBaseLine {
            expected,
            got: bases.len(),
        });
    }
    Ok(bases)
}

/// Reads one turn's snapshot: one `resources my_ants enemy_ants` line per
/// cell, in cell-id order. Returns `Ok(None)` on a clean end of stream
/// before the first cell line; an end of stream mid-turn is an error.
pub fn read_snapshot<R: BufRead>(
    input: &mut R,
    num_cells: usize,
) -> Result<Option<Snapshot>, ProtocolError> {
    let mut snap = Snapshot::empty(num_cells);
    for cell_id in 0..num_cells {
        let mut line = String::new();
        let read = input.read_line(&mut line)?;
        if read == 0 {
            if cell_id == 0 {
                return Ok(None);
            }
            return Err(ProtocolError::UnexpectedEof("turn input"));
        }
        if cell_id == 0 && line.trim().is_empty() {
            // A trailing blank line before EOF also counts as a clean end.
            return Ok(None);
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 3 {
            return Err(ProtocolError::ShortCellLine {
                cell: cell_id,
                got: fields.len(),
                expected: 3,
            });
        }
        snap.resources[cell_id] =
            non_negative(parse_int(fields[0], "resources")?, "resources")?;
        snap.my_ants[cell_id] = non_negative(parse_int(fields[1], "own ants")?, "own ants")?;
        snap.enemy_ants[cell_id] =
            non_negative(parse_int(fields[2], "enemy ants")?, "enemy ants")?;
    }
    Ok(Some(snap))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Startup block: 3-cell path, base 0 vs base 2, crystals on 2.
    const STARTUP: &str = "3\n\
        0 0 1 -1 -1 -1 -1 -1\n\
        0 0 0 2 -1 -1 -1 -1\n\
        2 12 1 -1 -1 -1 -1 -1\n\
        1\n\
        0\n\
        2\n";

    #[test]
    fn startup_block_parses() {
        let mut input = Cursor::new(STARTUP);
        let layout = read_layout(&mut input).unwrap();
        assert_eq!(layout.len(), 3);
        assert_eq!(layout.kind(2), CellKind::Crystals);
        assert_eq!(layout.neighbors(1), &[0, 2]);
        assert_eq!(&*layout.my_bases, &[0]);
        assert_eq!(&*layout.enemy_bases, &[2]);
    }

    #[test]
    fn truncated_startup_is_an_eof_error() {
        let mut input = Cursor::new("3\n0 0 1 -1 -1 -1 -1 -1\n");
        let err = read_layout(&mut input).unwrap_err();
        assert!(matches!(err, ProtocolError::UnexpectedEof(_)), "{}", err);
    }

    #[test]
    fn unknown_kind_tag_is_rejected() {
        let mut input = Cursor::new("1\n7 0 -1 -1 -1 -1 -1 -1\n1\n0\n0\n");
        let err = read_layout(&mut input).unwrap_err();
        assert!(matches!(err, ProtocolError::UnknownCellKind(7)), "{}", err);
    }

    #[test]
    fn short_cell_line_is_rejected() {
        let mut input = Cursor::new("1\n0 0 -1 -1\n1\n0\n0\n");
        let err = read_layout(&mut input).unwrap_err();
        assert!(
            matches!(err, ProtocolError::ShortCellLine { cell: 0, .. }),
            "{}",
            err
        );
    }

    #[test]
    fn garbage_integer_is_rejected() {
        let mut input = Cursor::new("1\n0 zero -1 -1 -1 -1 -1 -1\n1\n0\n0\n");
        let err = read_layout(&mut input).unwrap_err();
        assert!(
            matches!(err, ProtocolError::InvalidInteger { .. }),
            "{}",
            err
        );
    }

    #[test]
    fn out_of_range_neighbor_is_rejected() {
        let mut input = Cursor::new("1\n0 0 5 -1 -1 -1 -1 -1\n1\n0\n0\n");
        let err = read_layout(&mut input).unwrap_err();
        assert!(matches!(err, ProtocolError::InvalidLayout(_)), "{}", err);
    }

    #[test]
    fn negative_non_sentinel_neighbor_is_rejected() {
        let mut input = Cursor::new("1\n0 0 -2 -1 -1 -1 -1 -1\n1\n0\n0\n");
        let err = read_layout(&mut input).unwrap_err();
        assert!(matches!(err, ProtocolError::InvalidNeighbor(-2)), "{}", err);
    }

    #[test]
    fn base_count_mismatch_is_rejected() {
        let mut input =
            Cursor::new("2\n0 0 1 -1 -1 -1 -1 -1\n0 0 0 -1 -1 -1 -1 -1\n2\n0\n1\n");
        let err = read_layout(&mut input).unwrap_err();
        assert!(
            matches!(
                err,
                ProtocolError::ShortBaseLine {
                    expected: 2,
                    got: 1
                }
            ),
            "{}",
            err
        );
    }

    #[test]
    fn empty_map_is_rejected() {
        let mut input = Cursor::new("0\n0\n\n\n");
        let err = read_layout(&mut input).unwrap_err();
        assert!(matches!(err, ProtocolError::InvalidLayout(_)), "{}", err);
    }

    #[test]
    fn turn_block_parses() {
        let mut input = Cursor::new("10 0 0\n0 5 1\n0 0 3\n");
        let snap = read_snapshot(&mut input, 3).unwrap().unwrap();
        assert_eq!(snap.resources[0], 10);
        assert_eq!(snap.my_ants[1], 5);
        assert_eq!(snap.enemy_ants[2], 3);
        assert_eq!(snap.my_total(), 5);
        assert_eq!(snap.enemy_total(), 4);
    }

    #[test]
    fn eof_at_turn_boundary_is_clean() {
        let mut input = Cursor::new("");
        assert!(read_snapshot(&mut input, 3).unwrap().is_none());
    }

    #[test]
    fn eof_mid_turn_is_an_error() {
        let mut input = Cursor::new("10 0 0\n");
        let err = read_snapshot(&mut input, 3).unwrap_err();
        assert!(
            matches!(err, ProtocolError::UnexpectedEof("turn input")),
            "{}",
            err
        );
    }

    #[test]
    fn negative_ant_count_is_rejected() {
        let mut input = Cursor::new("10 -1 0\n");
        let err = read_snapshot(&mut input, 1).unwrap_err();
        assert!(
            matches!(err, ProtocolError::NegativeCount { value: -1, .. }),
            "{}",
            err
        );
    }

    #[test]
    fn consecutive_turns_read_independently() {
        let mut input = Cursor::new("5 2 0\n0 8 1\n");
        let first = read_snapshot(&mut input, 1).unwrap().unwrap();
        let second = read_snapshot(&mut input, 1).unwrap().unwrap();
        assert_eq!(first.resources[0], 5);
        assert_eq!(second.my_ants[0], 8);
        assert!(read_snapshot(&mut input, 1).unwrap().is_none());
    }
}
