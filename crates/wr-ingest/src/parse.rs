//! Coordinate text parsing.
//!
//! # Accepted forms
//!
//! | Function                  | Input                         | Components |
//! |---------------------------|-------------------------------|------------|
//! | [`parse_coordinate`]      | `"lon,lat"` or `"lon,lat,alt"`| 2 or 3     |
//! | [`parse_coordinate_list`] | tuples separated by whitespace| 2 or 3 each|
//! | [`parse_query`]           | `"lon,lat"`                   | exactly 2  |
//!
//! Altitude is accepted and discarded.  Every component must parse as a
//! finite `f64`.

use wr_core::Coordinate;

use crate::{IngestError, IngestResult};

/// Parse one `lon,lat[,alt]` tuple.
pub fn parse_coordinate(input: &str) -> IngestResult<Coordinate> {
    parse_tuple(input, 3)
}

/// Parse a query coordinate of the strict form `lon,lat`.
pub fn parse_query(input: &str) -> IngestResult<Coordinate> {
    parse_tuple(input, 2)
}

/// Parse a whitespace-separated list of tuples.
///
/// Malformed tuples are dropped from the returned list and reported in the
/// second vector, in input order.
pub fn parse_coordinate_list(input: &str) -> (Vec<Coordinate>, Vec<IngestError>) {
    let mut coords = Vec::new();
    let mut errors = Vec::new();
    for token in input.split_whitespace() {
        match parse_coordinate(token) {
            Ok(c) => coords.push(c),
            Err(e) => errors.push(e),
        }
    }
    (coords, errors)
}

fn parse_tuple(input: &str, max_components: usize) -> IngestResult<Coordinate> {
    let malformed = |reason| IngestError::MalformedCoordinate { input: input.to_owned(), reason };

    let parts: Vec<&str> = input.trim().split(',').map(str::trim).collect();
    if parts.len() < 2 || parts.len() > max_components {
        return Err(malformed(if max_components == 2 {
            "expected exactly 2 components (lon,lat)"
        } else {
            "expected 2 or 3 components (lon,lat[,alt])"
        }));
    }

    let mut values = [0.0f64; 3];
    for (slot, part) in values.iter_mut().zip(&parts) {
        *slot = part.parse::<f64>().map_err(|_| malformed("component is not a number"))?;
    }
    if !values[..parts.len()].iter().all(|v| v.is_finite()) {
        return Err(malformed("component is not finite"));
    }

    Ok(Coordinate::new(values[0], values[1]))
}
