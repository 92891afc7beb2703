//! Member checks to AS4100, the Australian steel structures standard.
//!
//! [`As4100`] implements the [`CodeCheck`](crate::codecheck::CodeCheck)
//! trait over a beam or a bare section. Each underlying section is wrapped
//! in an [`As4100Section`] that pre-computes the areas and design strengths
//! the capacity equations need. The clause-level equations live in the
//! [`s5`], [`s6`] and [`s7`] modules as pure functions.

pub mod s5;
pub mod s6;
pub mod s7;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::beam::Beam;
use crate::codecheck::CodeCheck;
use crate::error::{BeamError, BeamResult};
use crate::loads::{CaseId, LoadComponent, PositionQuery};
use crate::materials::MatType;
use crate::sections::SectionRef;
use crate::solvers;

/// Design parameters for an AS4100 check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct As4100Params {
    /// Capacity reduction factor for structural steel.
    pub phi_steel: f64,
    /// Ultimate-strength uncertainty factor from S7.2.
    pub alpha_u: f64,
    /// Connection efficiency factor from S7.3.
    pub kt: f64,
    /// Minimum number of positions assessed along the beam when no
    /// explicit positions are given.
    pub assessment_points: usize,
}

impl Default for As4100Params {
    fn default() -> Self {
        Self {
            phi_steel: 0.9,
            alpha_u: 0.85,
            kt: 1.0,
            assessment_points: 20,
        }
    }
}

impl As4100Params {
    /// Load parameters from a JSON file; missing fields take the AS4100
    /// defaults.
    pub fn from_file(path: &Path) -> BeamResult<Self> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }
}

/// A section wrapper carrying the properties AS4100 needs, pre-computed at
/// construction so the capacity loops stay infallible.
#[derive(Debug, Clone)]
pub struct As4100Section {
    section: SectionRef,
    ag: f64,
    an: f64,
    min_fy: f64,
    min_fu: f64,
}

impl As4100Section {
    /// Wrap a section for AS4100 checking. Only steel sections are valid.
    pub fn new(section: SectionRef) -> BeamResult<Self> {
        if section.material().mat_type != MatType::Steel {
            return Err(BeamError::InvalidMaterial(format!(
                "{} {}",
                section.material().standard,
                section.material().name,
            )));
        }

        let min_fy = section.min_strength_yield()?;
        let min_fu = section.min_strength_ultimate()?;

        Ok(Self {
            ag: section.area(),
            an: section.area_net(),
            min_fy,
            min_fu,
            section,
        })
    }

    /// The wrapped section.
    pub fn section(&self) -> &SectionRef {
        &self.section
    }

    /// Gross area (m²).
    pub fn ag(&self) -> f64 {
        self.ag
    }

    /// Net area (m²), allowing for holes.
    pub fn an(&self) -> f64 {
        self.an
    }

    /// Minimum yield strength of the section (Pa).
    pub fn min_fy(&self) -> f64 {
        self.min_fy
    }

    /// Minimum ultimate strength of the section (Pa).
    pub fn min_fu(&self) -> f64 {
        self.min_fu
    }
}

#[derive(Debug, Clone)]
enum CheckTarget {
    Beam(Beam),
    Section(SectionRef),
}

/// An AS4100 code check over a beam or a single section.
#[derive(Debug, Clone)]
pub struct As4100 {
    target: CheckTarget,
    sections: Vec<As4100Section>,
    params: As4100Params,
}

impl As4100 {
    /// Build a check from an optional beam and an optional section; exactly
    /// one target is required, and a beam wins if both are given.
    pub fn new(
        beam: Option<Beam>,
        section: Option<SectionRef>,
        params: As4100Params,
    ) -> BeamResult<Self> {
        let target = match (beam, section) {
            (Some(beam), _) => CheckTarget::Beam(beam),
            (None, Some(section)) => CheckTarget::Section(section),
            (None, None) => return Err(BeamError::NothingToCheck),
        };

        let raw = match &target {
            CheckTarget::Beam(beam) => beam.sections(),
            CheckTarget::Section(section) => vec![section.clone()],
        };

        let sections = raw
            .into_iter()
            .map(As4100Section::new)
            .collect::<BeamResult<Vec<_>>>()?;

        debug!("as4100 check over {} sections", sections.len());

        Ok(Self {
            target,
            sections,
            params,
        })
    }

    /// Check a beam with the default AS4100 parameters.
    pub fn for_beam(beam: Beam) -> BeamResult<Self> {
        Self::new(Some(beam), None, As4100Params::default())
    }

    /// Check a single section with the default AS4100 parameters.
    pub fn for_section(section: SectionRef) -> BeamResult<Self> {
        Self::new(None, Some(section), As4100Params::default())
    }

    /// The check parameters.
    pub fn params(&self) -> &As4100Params {
        &self.params
    }

    /// The AS4100 section wrappers, one per underlying section.
    pub fn as4100_sections(&self) -> &[As4100Section] {
        &self.sections
    }

    /// Resolve a positional query to `(position, section)` pairs, reusing
    /// the beam's coordinate resolution so boundary and seam positions
    /// report every adjoining section.
    pub fn get_as4100_section(
        &self,
        load_case: Option<CaseId>,
        query: &PositionQuery,
    ) -> BeamResult<Vec<(f64, &As4100Section)>> {
        let beam = self.beam().ok_or(BeamError::SectionOnly)?;
        let resolved = beam.list_positions(load_case, query)?;

        Ok(resolved
            .iter()
            .map(|r| (r.position, &self.sections[r.element]))
            .collect())
    }

    /// Nominal tension capacity (N): the lesser of yield and fracture.
    ///
    /// With no positions given, the minimum over every section of the
    /// member is returned.
    pub fn nt(&self, position: Option<&[f64]>) -> BeamResult<f64> {
        Ok(self.nty(position)?.min(self.ntu(position)?))
    }

    /// Design tension capacity (N), φNt.
    pub fn phi_nt(&self, position: Option<&[f64]>) -> BeamResult<f64> {
        Ok(self.params.phi_steel * self.nt(position)?)
    }

    /// Nominal gross yield capacity (N) to S7.2.
    pub fn nty(&self, position: Option<&[f64]>) -> BeamResult<f64> {
        Ok(self
            .sections_at(position)?
            .iter()
            .map(|s| s7::s7_2_nty(s.ag(), s.min_fy()))
            .fold(f64::INFINITY, f64::min))
    }

    /// Design gross yield capacity (N), φNty.
    pub fn phi_nty(&self, position: Option<&[f64]>) -> BeamResult<f64> {
        Ok(self.params.phi_steel * self.nty(position)?)
    }

    /// Nominal net fracture capacity (N) to S7.2.
    pub fn ntu(&self, position: Option<&[f64]>) -> BeamResult<f64> {
        Ok(self
            .sections_at(position)?
            .iter()
            .map(|s| s7::s7_2_ntu(s.an(), s.min_fu(), self.params.kt, self.params.alpha_u))
            .fold(f64::INFINITY, f64::min))
    }

    /// Design net fracture capacity (N), φNtu.
    pub fn phi_ntu(&self, position: Option<&[f64]>) -> BeamResult<f64> {
        Ok(self.params.phi_steel * self.ntu(position)?)
    }

    /// Worst tension utilisation over the given load case and positions.
    ///
    /// `None` for the load case checks every case on the beam; `None` for
    /// the positions assesses at least `assessment_points` positions plus
    /// every load discontinuity. The utilisation is found by scaling the
    /// load until it meets the capacity, so it stays valid for capacities
    /// that depend on the applied load. Compressive and absent axial loads
    /// report zero.
    pub fn tension_utilisation(
        &self,
        load_case: Option<CaseId>,
        position: Option<&[f64]>,
    ) -> BeamResult<f64> {
        let beam = self.beam().ok_or(BeamError::SectionOnly)?;

        let cases = match load_case {
            Some(case) => vec![case],
            None => beam.load_case_ids(),
        };

        let mut worst = 0.0_f64;

        for case in cases {
            let positions: Vec<f64> = match position {
                Some(p) => p.to_vec(),
                None => {
                    let resolved = beam.list_positions(
                        Some(case),
                        &PositionQuery::min_positions(self.params.assessment_points),
                    )?;
                    let mut p: Vec<f64> = resolved.iter().map(|r| r.position).collect();
                    p.dedup();
                    p
                }
            };

            for &p in &positions {
                let capacity = self.phi_nt(Some(&[p]))?;
                let axial =
                    beam.get_load_component(case, &PositionQuery::at(p), LoadComponent::N)?;

                for [_, n] in axial {
                    // compression and the empty-case NaN sentinel do not
                    // contribute to the tension utilisation
                    if n.is_nan() || n <= 0.0 {
                        continue;
                    }

                    // scale the load until it meets the capacity; written
                    // through the solver so load-dependent capacities keep
                    // working
                    let cap_fn = |_load: f64| capacity;
                    let root = solvers::secant(
                        |x| (x * n) / cap_fn(x * n) - 1.0,
                        -100_000.0,
                        100_000.0,
                        1e-9,
                        None,
                        false,
                    )?;

                    let util = if root.x != 0.0 { 1.0 / root.x } else { 0.0 };
                    worst = worst.max(util);
                }
            }
        }

        Ok(worst)
    }

    fn sections_at(&self, position: Option<&[f64]>) -> BeamResult<Vec<&As4100Section>> {
        match position {
            None => Ok(self.sections.iter().collect()),
            Some(p) => Ok(self
                .get_as4100_section(None, &PositionQuery::at_each(p.to_vec()))?
                .into_iter()
                .map(|(_, s)| s)
                .collect()),
        }
    }
}

impl CodeCheck for As4100 {
    fn beam(&self) -> Option<&Beam> {
        match &self.target {
            CheckTarget::Beam(beam) => Some(beam),
            CheckTarget::Section(_) => None,
        }
    }

    fn section(&self) -> Option<&SectionRef> {
        match &self.target {
            CheckTarget::Beam(_) => None,
            CheckTarget::Section(section) => Some(section),
        }
    }

    fn tension_capacity(&self, position: Option<&[f64]>) -> BeamResult<f64> {
        self.phi_nt(position)
    }

    fn tension_utilisation(
        &self,
        load_case: Option<CaseId>,
        position: Option<&[f64]>,
    ) -> BeamResult<f64> {
        As4100::tension_utilisation(self, load_case, position)
    }
}
