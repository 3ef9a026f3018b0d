use lights_out_types::Coord;

/// Errors raised by the rules.
///
/// Every variant is a caller bug: the presentation layer only ever toggles
/// cells it has rendered. Surface it, don't retry it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("coordinate {coord} is outside the {rows}x{cols} grid")]
    InvalidCoordinate {
        coord: Coord,
        rows: usize,
        cols: usize,
    },
}
