//! Design-code checks over beams and sections.
//!
//! [`CodeCheck`] is the minimal surface every design code shares; code
//! specific behaviour (capacities, clause equations, parameters) lives in
//! the per-code modules such as [`as4100`].

pub mod as4100;

pub use as4100::{As4100, As4100Params, As4100Section};

use crate::beam::Beam;
use crate::error::{BeamError, BeamResult};
use crate::loads::CaseId;
use crate::sections::SectionRef;

/// The common interface of a design-code check.
///
/// A check is built over either a full [`Beam`] or a bare section; exactly
/// one of [`beam`](CodeCheck::beam) and [`section`](CodeCheck::section) is
/// populated. Section-only checks reject positional queries with
/// [`BeamError::SectionOnly`].
pub trait CodeCheck {
    /// The beam being checked, if the check is beam-based.
    fn beam(&self) -> Option<&Beam>;

    /// The section being checked, if the check is section-based.
    fn section(&self) -> Option<&SectionRef>;

    /// Every section making up the checked member. A section-based check
    /// still returns a one-element list for consistency.
    fn sections(&self) -> Vec<SectionRef> {
        match self.beam() {
            Some(beam) => beam.sections(),
            None => self.section().cloned().into_iter().collect(),
        }
    }

    /// The limiting tension capacity (N) over the given positions, or over
    /// the whole member when `None`. Includes the code's capacity
    /// reduction factors.
    fn tension_capacity(&self, position: Option<&[f64]>) -> BeamResult<f64>;

    /// The worst tension utilisation over the given load case and
    /// positions, as the fraction of the load at which demand meets
    /// capacity. Not a plain demand/capacity division: codes where the
    /// capacity depends on the applied load still report correctly.
    fn tension_utilisation(
        &self,
        load_case: Option<CaseId>,
        position: Option<&[f64]>,
    ) -> BeamResult<f64>;

    /// The sections at the given global positions, via the underlying
    /// beam's coordinate resolution.
    fn get_section(&self, positions: Option<&[f64]>) -> BeamResult<Vec<Vec<SectionRef>>> {
        let beam = self.beam().ok_or(BeamError::SectionOnly)?;
        beam.get_section(positions)
    }
}
