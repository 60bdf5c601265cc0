#![no_main]

//! Grid loader fuzzer.
//!
//! Arbitrary bytes must either be rejected or produce a rectangular grid
//! that prints and re-parses to itself.

use libfuzzer_sys::fuzz_target;
use nashgrid::{Grid, MalformedInput};

fuzz_target!(|data: &[u8]| {
    match Grid::parse_bytes(data) {
        Ok(grid) => {
            assert!(grid.rows() > 0 && grid.cols() > 0);
            assert_eq!(grid.cells().len(), grid.rows() * grid.cols());

            let reparsed: Grid = grid.to_string().parse().expect("printed grid must parse");
            assert_eq!(reparsed, grid);
        }
        Err(MalformedInput::RaggedRow { expected, found, .. }) => {
            assert_ne!(expected, found);
        }
        Err(MalformedInput::Empty) => {
            assert!(!data.iter().any(|&b| b == b'.' || b == b'X'));
        }
        Err(e @ MalformedInput::Unreadable { .. }) => {
            panic!("parsing bytes cannot fail on I/O: {e}");
        }
    }
});
