//! Load case storage and positional queries
//!
//! A [`LoadCase`] owns the immutable sample table for one load scenario on
//! the normalized [0, 1] domain of a single element. Rows are
//! `[position, vx, vy, n, mx, my, t]`; duplicated positions are legitimate
//! and represent a discontinuity (e.g. the jump in shear at a point load).

use serde::{Deserialize, Serialize};

use crate::error::{BeamError, BeamResult};
use crate::interp::{self, Extrapolate};
use crate::loads::{LoadComponent, PositionQuery};

/// Identifier for a load case within an element or beam.
pub type CaseId = u32;

/// Width of a load-table row: position plus six components.
pub const ROW_WIDTH: usize = 7;

/// One load-table row: `[position, vx, vy, n, mx, my, t]`.
pub type LoadRow = [f64; ROW_WIDTH];

/// An immutable table of load samples over a normalized [0, 1] domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadCase {
    rows: Vec<LoadRow>,
}

impl LoadCase {
    /// A case with no stored loads.
    ///
    /// Queries on an empty case succeed and return `f64::NAN` for every
    /// component (the "no load data" sentinel), with the requested positions
    /// intact.
    pub fn empty() -> Self {
        Self { rows: Vec::new() }
    }

    /// Build a case from full rows.
    ///
    /// Positions must be ascending (duplicates allowed) and within [0, 1].
    pub fn new(rows: Vec<LoadRow>) -> BeamResult<Self> {
        for (i, row) in rows.iter().enumerate() {
            let position = row[0];

            if !(0.0..=1.0).contains(&position) {
                return Err(BeamError::LoadPositionRange { position });
            }

            if i > 0 && position < rows[i - 1][0] {
                return Err(BeamError::LoadPositionOrder {
                    index: i,
                    position,
                    previous: rows[i - 1][0],
                });
            }
        }

        Ok(Self { rows })
    }

    /// Build a single-row case from a flat slice.
    ///
    /// The slice must hold exactly [`ROW_WIDTH`] values; anything else is a
    /// shape error.
    pub fn from_flat(values: &[f64]) -> BeamResult<Self> {
        if values.len() != ROW_WIDTH {
            return Err(BeamError::LoadCaseShape { len: values.len() });
        }

        let mut row = [0.0; ROW_WIDTH];
        row.copy_from_slice(values);

        Self::new(vec![row])
    }

    /// A case with one constant load along the whole domain.
    ///
    /// `components` are `[vx, vy, n, mx, my, t]`; the single stored row sits
    /// at position 0.0 and applies everywhere.
    pub fn constant_load(components: [f64; 6]) -> Self {
        let mut row = [0.0; ROW_WIDTH];
        row[1..].copy_from_slice(&components);

        Self { rows: vec![row] }
    }

    /// The stored rows.
    pub fn rows(&self) -> &[LoadRow] {
        &self.rows
    }

    /// The stored sample positions, duplicates included.
    pub fn load_positions(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r[0]).collect()
    }

    /// The stored sample positions with duplicates removed.
    pub fn distinct_positions(&self) -> Vec<f64> {
        let mut positions = self.load_positions();
        positions.dedup();
        positions
    }

    /// The number of stored sample rows.
    pub fn num_positions(&self) -> usize {
        self.rows.len()
    }

    /// True if the case stores no load data.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get the loads at the queried positions, one full row per result.
    ///
    /// Positions that exactly match stored samples return every stored row
    /// at that position verbatim, so discontinuities come back as multiple
    /// rows at the same position, in insertion order. Positions strictly
    /// between samples interpolate linearly per component; positions outside
    /// the stored span hold the nearest edge values. Results are ordered by
    /// position ascending.
    pub fn get_load(&self, query: &PositionQuery) -> BeamResult<Vec<LoadRow>> {
        let positions = self.resolve_positions(query)?;

        let mut result = Vec::with_capacity(positions.len());
        for p in positions {
            self.rows_at(p, &mut result)?;
        }

        Ok(result)
    }

    /// Get a single component at the queried positions as `[position, value]`
    /// pairs.
    pub fn get_load_component(
        &self,
        query: &PositionQuery,
        component: LoadComponent,
    ) -> BeamResult<Vec<[f64; 2]>> {
        let rows = self.get_load(query)?;
        let column = component.column();

        Ok(rows.iter().map(|r| [r[0], r[column]]).collect())
    }

    /// Turn a query into the sorted, deduplicated position set to report.
    fn resolve_positions(&self, query: &PositionQuery) -> BeamResult<Vec<f64>> {
        let mut positions = match query {
            PositionQuery::At(requested) => {
                if requested.is_empty() {
                    return Err(BeamError::EmptyQuery);
                }
                for &position in requested {
                    if !(0.0..=1.0).contains(&position) {
                        return Err(BeamError::LoadPositionRange { position });
                    }
                }
                requested.clone()
            }
            PositionQuery::MinPositions(n) => {
                // stored positions first so no discontinuity is missed
                let mut positions = self.load_positions();
                positions.extend(interp::linspace(0.0, 1.0, *n));
                positions
            }
        };

        positions.sort_by(|a, b| a.total_cmp(b));
        positions.dedup();

        if let PositionQuery::MinPositions(n) = query {
            debug_assert!(positions.len() >= *n);
        }

        Ok(positions)
    }

    /// Append every result row for a single position.
    fn rows_at(&self, position: f64, out: &mut Vec<LoadRow>) -> BeamResult<()> {
        if self.rows.is_empty() {
            let mut row = [f64::NAN; ROW_WIDTH];
            row[0] = position;
            out.push(row);
            return Ok(());
        }

        if self.rows.len() == 1 {
            // a single stored row applies along the whole domain
            let mut row = self.rows[0];
            row[0] = position;
            out.push(row);
            return Ok(());
        }

        // direct hits return the stored rows verbatim - all of them, so a
        // jump at this exact position surfaces as multiple rows
        let mut any_hit = false;
        for row in self.rows.iter().filter(|r| r[0] == position) {
            any_hit = true;
            out.push(*row);
        }
        if any_hit {
            return Ok(());
        }

        // interpolate all six components over the stored axis; duplicated
        // positions keep their jump semantics in multi_interp
        let xs = self.load_positions();
        let ys: Vec<Vec<f64>> = LoadComponent::ALL
            .iter()
            .map(|c| self.rows.iter().map(|r| r[c.column()]).collect())
            .collect();

        let values = interp::multi_interp(&[position], &xs, &ys, Extrapolate::Clamp)?;

        let mut row = [0.0; ROW_WIDTH];
        row[0] = position;
        for (component, series) in LoadComponent::ALL.iter().zip(&values) {
            row[component.column()] = series[0];
        }

        out.push(row);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_empty_case_returns_nan_rows() {
        let case = LoadCase::empty();
        let rows = case.get_load(&PositionQuery::at(0.25)).unwrap();

        assert_eq!(rows.len(), 1);
        assert_relative_eq!(rows[0][0], 0.25);
        assert!(rows[0][1..].iter().all(|v| v.is_nan()));
    }

    #[test]
    fn test_constant_load_applies_everywhere() {
        let case = LoadCase::constant_load([1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);

        for p in [0.0, 0.37, 1.0] {
            let rows = case.get_load(&PositionQuery::at(p)).unwrap();
            assert_eq!(rows, vec![[p, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0]]);
        }
    }

    #[test]
    fn test_stored_positions_round_trip() {
        let stored = vec![
            [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
            [0.5, 2.0, 4.0, 6.0, 8.0, 10.0, 12.0],
            [1.0, 3.0, 6.0, 9.0, 12.0, 15.0, 18.0],
        ];
        let case = LoadCase::new(stored.clone()).unwrap();

        let rows = case
            .get_load(&PositionQuery::at_each([0.0, 0.5, 1.0]))
            .unwrap();

        assert_eq!(rows, stored);
    }

    #[test]
    fn test_midpoint_interpolation() {
        let case = LoadCase::new(vec![
            [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            [1.0, 10.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        ])
        .unwrap();

        let rows = case
            .get_load_component(&PositionQuery::at(0.5), "shear-x".parse().unwrap())
            .unwrap();

        assert_eq!(rows.len(), 1);
        assert_relative_eq!(rows[0][0], 0.5);
        assert_relative_eq!(rows[0][1], 5.0);
    }

    #[test]
    fn test_all_components_interpolate() {
        let case = LoadCase::new(vec![
            [0.0, 0.0, 2.0, -4.0, 10.0, 0.0, 1.0],
            [1.0, 10.0, 4.0, 4.0, -10.0, 0.0, 3.0],
        ])
        .unwrap();

        let rows = case.get_load(&PositionQuery::at(0.5)).unwrap();

        assert_eq!(rows.len(), 1);
        let expected = [0.5, 5.0, 3.0, 0.0, 0.0, 0.0, 2.0];
        for (got, want) in rows[0].iter().zip(expected) {
            assert_relative_eq!(*got, want);
        }
    }

    #[test]
    fn test_discontinuity_preserved() {
        // a point load at midspan: two rows at 0.5 with a shear jump
        let case = LoadCase::new(vec![
            [0.0, 0.0, 5.0, 0.0, 0.0, 0.0, 0.0],
            [0.5, 0.0, 5.0, 0.0, 0.0, 0.0, 0.0],
            [0.5, 0.0, -5.0, 0.0, 0.0, 0.0, 0.0],
            [1.0, 0.0, -5.0, 0.0, 0.0, 0.0, 0.0],
        ])
        .unwrap();

        let rows = case.get_load(&PositionQuery::at(0.5)).unwrap();

        assert_eq!(rows.len(), 2);
        assert_relative_eq!(rows[0][2], 5.0);
        assert_relative_eq!(rows[1][2], -5.0);

        // either side of the jump interpolates against the near face
        let before = case.get_load(&PositionQuery::at(0.25)).unwrap();
        assert_relative_eq!(before[0][2], 5.0);
        let after = case.get_load(&PositionQuery::at(0.75)).unwrap();
        assert_relative_eq!(after[0][2], -5.0);
    }

    #[test]
    fn test_min_positions_includes_discontinuities() {
        let case = LoadCase::new(vec![
            [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            [0.33, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            [0.33, 2.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            [1.0, 4.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        ])
        .unwrap();

        let rows = case.get_load(&PositionQuery::min_positions(5)).unwrap();

        let mut positions: Vec<f64> = rows.iter().map(|r| r[0]).collect();
        assert!(positions.windows(2).all(|w| w[0] <= w[1]));

        // both rows at the discontinuity survive
        assert_eq!(positions.iter().filter(|&&p| p == 0.33).count(), 2);

        positions.dedup();
        assert!(positions.len() >= 5);
        assert!(positions.contains(&0.0));
        assert!(positions.contains(&1.0));
        assert!(positions.contains(&0.33));
    }

    #[test]
    fn test_query_outside_stored_span_clamps() {
        let case = LoadCase::new(vec![
            [0.25, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            [0.75, 3.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        ])
        .unwrap();

        let rows = case.get_load(&PositionQuery::at_each([0.0, 1.0])).unwrap();

        assert_relative_eq!(rows[0][1], 1.0);
        assert_relative_eq!(rows[1][1], 3.0);
    }

    #[test]
    fn test_duplicate_query_positions_collapse() {
        let case = LoadCase::constant_load([1.0, 0.0, 0.0, 0.0, 0.0, 0.0]);

        let rows = case
            .get_load(&PositionQuery::at_each([0.5, 0.5, 0.25]))
            .unwrap();

        let positions: Vec<f64> = rows.iter().map(|r| r[0]).collect();
        assert_eq!(positions, vec![0.25, 0.5]);
    }

    #[test]
    fn test_flat_shape_error() {
        let err = LoadCase::from_flat(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0]).unwrap_err();
        assert!(matches!(err, BeamError::LoadCaseShape { len: 6 }));
    }

    #[test]
    fn test_unsorted_rows_rejected() {
        let err = LoadCase::new(vec![
            [0.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            [0.25, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        ])
        .unwrap_err();
        assert!(matches!(err, BeamError::LoadPositionOrder { index: 1, .. }));
    }

    #[test]
    fn test_out_of_range_rows_rejected() {
        let err = LoadCase::new(vec![[1.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]]).unwrap_err();
        assert!(matches!(err, BeamError::LoadPositionRange { .. }));
    }

    #[test]
    fn test_out_of_range_query_rejected() {
        let case = LoadCase::empty();
        let err = case.get_load(&PositionQuery::at(1.1)).unwrap_err();
        assert!(matches!(err, BeamError::LoadPositionRange { .. }));
    }

    #[test]
    fn test_empty_query_rejected() {
        let case = LoadCase::empty();
        let err = case.get_load(&PositionQuery::At(Vec::new())).unwrap_err();
        assert!(matches!(err, BeamError::EmptyQuery));
    }
}
