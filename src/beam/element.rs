//! Element - one physical segment of a beam
//!
//! Elements bridge a [`LoadCase`]'s normalized [0, 1] domain to a real
//! length, and carry the section for that segment. They map one-to-one onto
//! (for example) FEA beam elements, several of which usually make up one
//! design beam.

use std::collections::BTreeMap;

use crate::error::{BeamError, BeamResult};
use crate::loads::{CaseId, LoadCase, LoadComponent, LoadRow, PositionQuery};
use crate::sections::SectionRef;

/// Classification of an element by its length.
///
/// Zero-length elements are a legitimate modeling device: a seam marking a
/// discrete transition (a splice, a section step) that contributes no
/// physical length. Local-position mapping is undefined on a seam, so the
/// beam layer routes seams through a dedicated branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// An ordinary segment with physical length.
    NormalSegment,
    /// A zero-length transition marker.
    ZeroLengthSeam,
}

/// One segment of a beam: a length, a section and one load case per case id.
#[derive(Debug, Clone)]
pub struct Element {
    length: f64,
    section: SectionRef,
    loads: BTreeMap<CaseId, LoadCase>,
}

impl Element {
    /// Create an element from explicit load cases.
    ///
    /// `length` is the real-world length (m) and must be >= 0; zero length
    /// models a seam.
    pub fn new(
        loads: BTreeMap<CaseId, LoadCase>,
        length: f64,
        section: SectionRef,
    ) -> BeamResult<Self> {
        if length < 0.0 {
            return Err(BeamError::NegativeLength(length));
        }

        Ok(Self {
            length,
            section,
            loads,
        })
    }

    /// An element with a single empty load case (case id 0).
    pub fn empty(length: f64, section: SectionRef) -> BeamResult<Self> {
        let loads = BTreeMap::from([(0, LoadCase::empty())]);
        Self::new(loads, length, section)
    }

    /// An element with one constant-load case along its length.
    ///
    /// `components` are `[vx, vy, n, mx, my, t]`.
    pub fn constant_load(
        case: CaseId,
        components: [f64; 6],
        length: f64,
        section: SectionRef,
    ) -> BeamResult<Self> {
        let loads = BTreeMap::from([(case, LoadCase::constant_load(components))]);
        Self::new(loads, length, section)
    }

    /// The real-world length of the element (m).
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Classify the element for position mapping.
    pub fn kind(&self) -> ElementKind {
        if self.length == 0.0 {
            ElementKind::ZeroLengthSeam
        } else {
            ElementKind::NormalSegment
        }
    }

    /// The section of the element.
    pub fn section(&self) -> &SectionRef {
        &self.section
    }

    /// The load case ids stored on the element, ascending.
    pub fn load_case_ids(&self) -> Vec<CaseId> {
        self.loads.keys().copied().collect()
    }

    /// The number of load cases stored on the element.
    pub fn num_load_cases(&self) -> usize {
        self.loads.len()
    }

    /// The load case stored under the given id.
    pub fn load_case(&self, case: CaseId) -> BeamResult<&LoadCase> {
        self.loads
            .get(&case)
            .ok_or(BeamError::LoadCaseNotFound(case))
    }

    /// Get the loads in a case at the queried local positions.
    ///
    /// Positions stay in local [0, 1] space - mapping to real lengths is the
    /// beam's job, because only the beam knows this element's global offset.
    pub fn get_loads(&self, case: CaseId, query: &PositionQuery) -> BeamResult<Vec<LoadRow>> {
        self.load_case(case)?.get_load(query)
    }

    /// Get a single load component in a case at the queried local positions.
    pub fn get_load_component(
        &self,
        case: CaseId,
        query: &PositionQuery,
        component: LoadComponent,
    ) -> BeamResult<Vec<[f64; 2]>> {
        self.load_case(case)?.get_load_component(query, component)
    }

    /// The stored sample positions of a case, duplicates included.
    ///
    /// The case must be named because different cases can store samples at
    /// different positions.
    pub fn load_positions(&self, case: CaseId) -> BeamResult<Vec<f64>> {
        Ok(self.load_case(case)?.load_positions())
    }
}
