//! Beam - the coordinate-resolution authority across multiple elements
//!
//! A [`Beam`] wraps one or more [`Element`]s laid end to end on a single
//! real-world axis starting at 0.0. It translates global positions into
//! (element, local position) pairs, fans queries out to the owning elements
//! and stitches the results back together in position order. A beam is
//! deliberately generic: nothing design-code specific is stored here.

mod element;

pub use element::{Element, ElementKind};

use log::{debug, trace};

use crate::error::{BeamError, BeamResult};
use crate::interp;
use crate::loads::{CaseId, LoadComponent, LoadRow, PositionQuery};
use crate::sections::SectionRef;

/// One resolved query row: a global position, the element that contains it
/// and the local position to query that element at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedPosition {
    /// Global position along the beam (m).
    pub position: f64,
    /// Index of the containing element.
    pub element: usize,
    /// Local position in the element's [0, 1] domain.
    pub local_position: f64,
}

/// A design beam built from one or more elements.
#[derive(Debug, Clone)]
pub struct Beam {
    elements: Vec<Element>,
}

impl Beam {
    /// Build a beam from ordered elements.
    ///
    /// Every element must carry the same set of load case ids; the first
    /// element starts at global position 0.0 and the elements run end to
    /// end in the order given.
    pub fn new(elements: Vec<Element>) -> BeamResult<Self> {
        if elements.is_empty() {
            return Err(BeamError::EmptyBeam);
        }

        let expected = elements[0].load_case_ids();
        for element in &elements[1..] {
            let found = element.load_case_ids();
            if found != expected {
                return Err(BeamError::ElementCaseMismatch { expected, found });
            }
        }

        debug!(
            "beam built: {} elements, {} load cases",
            elements.len(),
            expected.len()
        );

        Ok(Self { elements })
    }

    /// Build a beam from a single element.
    pub fn single(element: Element) -> BeamResult<Self> {
        Self::new(vec![element])
    }

    /// A beam of one load-free element; mostly useful in tests.
    pub fn empty(length: f64, section: SectionRef) -> BeamResult<Self> {
        Self::single(Element::empty(length, section)?)
    }

    /// The elements that make up the beam.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// The number of elements in the beam.
    pub fn num_elements(&self) -> usize {
        self.elements.len()
    }

    /// The total real-world length of the beam (m).
    pub fn length(&self) -> f64 {
        self.elements.iter().map(|e| e.length()).sum()
    }

    /// The load case ids shared by every element, ascending.
    pub fn load_case_ids(&self) -> Vec<CaseId> {
        // construction guarantees all elements agree
        self.elements[0].load_case_ids()
    }

    /// The number of load cases on the beam.
    pub fn num_load_cases(&self) -> usize {
        self.elements[0].num_load_cases()
    }

    /// Every element's section, in element order.
    pub fn sections(&self) -> Vec<SectionRef> {
        self.elements.iter().map(|e| e.section().clone()).collect()
    }

    /// The [start, end] global interval of every element, by cumulative
    /// summation of lengths.
    pub fn element_ends(&self) -> Vec<[f64; 2]> {
        let mut ends = Vec::with_capacity(self.elements.len());
        let mut start = 0.0;

        for element in &self.elements {
            let end = start + element.length();
            ends.push([start, end]);
            start = end;
        }

        ends
    }

    /// The [start, end] global interval of one element.
    pub fn element_start_end(&self, element: usize) -> [f64; 2] {
        self.element_ends()[element]
    }

    /// Every element whose interval contains `position`, ends inclusive.
    ///
    /// A position exactly on a shared boundary belongs to all adjacent
    /// elements, which is how both the before- and after-faces of a
    /// discontinuity stay visible. Positions off the beam give an empty vec.
    pub fn in_elements(&self, position: f64) -> Vec<usize> {
        let ends = self.element_ends();

        (0..ends.len())
            .filter(|&i| position >= ends[i][0] && position <= ends[i][1])
            .collect()
    }

    /// Map a global position into an element's local [0, 1] domain.
    ///
    /// Fails if the position lies outside the element, and on zero-length
    /// elements where the division is undefined - callers handle seams via
    /// [`ElementKind`].
    pub fn beam_to_local_position(&self, position: f64, element: usize) -> BeamResult<f64> {
        let [start, end] = self.element_start_end(element);

        if position < start || position > end {
            return Err(BeamError::PositionNotInElement { position, element });
        }

        match self.elements[element].kind() {
            ElementKind::ZeroLengthSeam => Err(BeamError::ZeroLengthElement { element }),
            ElementKind::NormalSegment => {
                // the range check above proves start <= position <= end, but
                // accumulated rounding in the element starts can push the
                // quotient one ulp past 1.0
                let local = (position - start) / self.elements[element].length();
                Ok(local.clamp(0.0, 1.0))
            }
        }
    }

    /// Map an element-local position back to a global position.
    pub fn local_to_beam_position(&self, position: f64, element: usize) -> BeamResult<f64> {
        if !(0.0..=1.0).contains(&position) {
            return Err(BeamError::LocalPositionRange(position));
        }

        let [start, _] = self.element_start_end(element);

        Ok(start + position * self.elements[element].length())
    }

    /// Resolve a query into (global position, element, local position) rows.
    ///
    /// With explicit positions, exactly those positions are resolved. With a
    /// minimum count, the working set is every element boundary, every
    /// stored load position of `load_case` mapped to global coordinates, and
    /// an even grid of at least that many points over the whole beam.
    ///
    /// Positions on element boundaries resolve to one row per containing
    /// element. Zero-length seam elements resolve to one row per distinct
    /// stored load position, padded so the 0.0 and 1.0 faces always appear
    /// (just the two faces when no load case is given) - the seam's loads
    /// and section stay reachable without a division by zero.
    pub fn list_positions(
        &self,
        load_case: Option<CaseId>,
        query: &PositionQuery,
    ) -> BeamResult<Vec<ResolvedPosition>> {
        let positions = self.resolve_query_positions(load_case, query)?;

        let mut resolved = Vec::with_capacity(positions.len());

        for &position in &positions {
            for element in self.in_elements(position) {
                match self.elements[element].kind() {
                    ElementKind::NormalSegment => {
                        resolved.push(ResolvedPosition {
                            position,
                            element,
                            local_position: self.beam_to_local_position(position, element)?,
                        });
                    }
                    ElementKind::ZeroLengthSeam => {
                        for local_position in self.seam_local_positions(element, load_case)? {
                            resolved.push(ResolvedPosition {
                                position,
                                element,
                                local_position,
                            });
                        }
                    }
                }
            }
        }

        trace!(
            "resolved {} query positions into {} rows",
            positions.len(),
            resolved.len()
        );

        Ok(resolved)
    }

    /// Get the loads at the queried global positions, one full row per
    /// result, position column in global coordinates.
    ///
    /// Positions at element or load discontinuities return multiple rows.
    pub fn get_loads(&self, case: CaseId, query: &PositionQuery) -> BeamResult<Vec<LoadRow>> {
        let resolved = self.list_positions(Some(case), query)?;

        let mut result = Vec::with_capacity(resolved.len());
        for r in resolved {
            let rows =
                self.elements[r.element].get_loads(case, &PositionQuery::at(r.local_position))?;

            for mut row in rows {
                // re-stamp the local position with the global one
                row[0] = r.position;
                result.push(row);
            }
        }

        Ok(result)
    }

    /// Get a single load component at the queried global positions as
    /// `[position, value]` pairs.
    pub fn get_load_component(
        &self,
        case: CaseId,
        query: &PositionQuery,
        component: LoadComponent,
    ) -> BeamResult<Vec<[f64; 2]>> {
        let rows = self.get_loads(case, query)?;
        let column = component.column();

        Ok(rows.iter().map(|r| [r[0], r[column]]).collect())
    }

    /// The sections at the given global positions.
    ///
    /// `None` returns all sections as a single group. Each position yields
    /// the sections of every containing element in element order, so a
    /// boundary position reports both (or all) adjoining sections.
    pub fn get_section(&self, positions: Option<&[f64]>) -> BeamResult<Vec<Vec<SectionRef>>> {
        let positions = match positions {
            None => return Ok(vec![self.sections()]),
            Some(p) => p,
        };

        let length = self.length();
        for &position in positions {
            if position < 0.0 || position > length {
                return Err(BeamError::PositionNotInBeam { position, length });
            }
        }

        Ok(positions
            .iter()
            .map(|&p| {
                self.in_elements(p)
                    .into_iter()
                    .map(|i| self.elements[i].section().clone())
                    .collect()
            })
            .collect())
    }

    /// Build the sorted, deduplicated set of global positions to resolve.
    fn resolve_query_positions(
        &self,
        load_case: Option<CaseId>,
        query: &PositionQuery,
    ) -> BeamResult<Vec<f64>> {
        let length = self.length();

        let mut positions = match query {
            PositionQuery::At(requested) => {
                if requested.is_empty() {
                    return Err(BeamError::EmptyQuery);
                }
                for &position in requested {
                    if !position.is_finite() || position < 0.0 || position > length {
                        return Err(BeamError::PositionNotInBeam { position, length });
                    }
                }
                requested.clone()
            }
            PositionQuery::MinPositions(n) => {
                // element boundaries always participate
                let mut positions: Vec<f64> =
                    self.element_ends().into_iter().flatten().collect();

                // stored load positions, remapped to global coordinates
                for (i, element) in self.elements.iter().enumerate() {
                    let local = match load_case {
                        Some(case) => element.load_case(case)?.distinct_positions(),
                        None => vec![0.0, 1.0],
                    };
                    for p in local {
                        positions.push(self.local_to_beam_position(p, i)?);
                    }
                }

                positions.extend(interp::linspace(0.0, length, *n));
                positions
            }
        };

        positions.sort_by(|a, b| a.total_cmp(b));
        positions.dedup();

        Ok(positions)
    }

    /// Local positions to report for a zero-length seam element: the
    /// distinct stored load positions, padded so the 0.0 and 1.0 faces are
    /// always present, or just the two faces when no case is given.
    fn seam_local_positions(
        &self,
        element: usize,
        load_case: Option<CaseId>,
    ) -> BeamResult<Vec<f64>> {
        let mut local = match load_case {
            None => vec![0.0, 1.0],
            Some(case) => self.elements[element].load_case(case)?.distinct_positions(),
        };

        // both faces of the seam must stay visible, whatever the case stores
        if local.first() != Some(&0.0) {
            local.insert(0, 0.0);
        }
        if local.last() != Some(&1.0) {
            local.push(1.0);
        }

        Ok(local)
    }
}
