//! Beamcheck - positional load queries and design-code checks for beams
//!
//! This library models a beam as a chain of elements, each carrying one or
//! more load cases as position-tagged load tables, and answers positional
//! queries about loads and sections:
//! - loads interpolated at any position, in global or element coordinates
//! - discontinuities preserved: boundary positions report every adjoining
//!   value rather than averaging them away
//! - zero-length seam elements for section or load steps at a single point
//! - section lookups along the member
//! - AS4100 member checks (tension capacity and utilisation) over the
//!   resolved positions
//!
//! ## Example
//! ```rust
//! use beamcheck::prelude::*;
//! use std::sync::Arc;
//!
//! // A 4m member with a constant 50kN tension load in case 1.
//! let section: SectionRef = Arc::new(Circle::new(Material::as3678_250(), 0.01).unwrap());
//! let element = Element::constant_load(
//!     1,
//!     [0.0, 0.0, 50e3, 0.0, 0.0, 0.0],
//!     4.0,
//!     section,
//! )
//! .unwrap();
//! let beam = Beam::single(element).unwrap();
//!
//! // Query the axial load at mid-span.
//! let axial = beam
//!     .get_load_component(1, &PositionQuery::at(2.0), LoadComponent::N)
//!     .unwrap();
//! assert_eq!(axial, vec![[2.0, 50e3]]);
//!
//! // Check it against AS4100.
//! let check = As4100::for_beam(beam).unwrap();
//! let utilisation = check.tension_utilisation(Some(1), None).unwrap();
//! assert!(utilisation < 1.0);
//! ```

pub mod beam;
pub mod codecheck;
pub mod error;
pub mod interp;
pub mod loads;
pub mod materials;
pub mod sections;
pub mod solvers;

// Re-export common types
pub mod prelude {
    pub use crate::beam::{Beam, Element, ElementKind, ResolvedPosition};
    pub use crate::codecheck::{As4100, As4100Params, As4100Section, CodeCheck};
    pub use crate::error::{BeamError, BeamResult};
    pub use crate::interp::Extrapolate;
    pub use crate::loads::{CaseId, LoadCase, LoadComponent, LoadRow, PositionQuery, ROW_WIDTH};
    pub use crate::materials::{MatType, Material, StrengthBand};
    pub use crate::sections::{Circle, HollowCircle, Section, SectionRef};
}
