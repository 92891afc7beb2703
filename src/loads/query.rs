//! Positional query parameter

/// Where along a domain to sample loads or sections.
///
/// The two arms make the "exactly one of position / minimum count" contract
/// a type-level invariant rather than a runtime check.
#[derive(Debug, Clone, PartialEq)]
pub enum PositionQuery {
    /// Sample at exactly these positions (deduplicated and sorted ascending
    /// before use).
    At(Vec<f64>),
    /// Sample at least this many distinct positions, evenly spread over the
    /// domain and always including every stored discontinuity.
    MinPositions(usize),
}

impl PositionQuery {
    /// Query a single position.
    pub fn at(position: f64) -> Self {
        PositionQuery::At(vec![position])
    }

    /// Query an explicit set of positions.
    pub fn at_each(positions: impl Into<Vec<f64>>) -> Self {
        PositionQuery::At(positions.into())
    }

    /// Query a minimum number of evenly spread positions.
    pub fn min_positions(n: usize) -> Self {
        PositionQuery::MinPositions(n)
    }
}
