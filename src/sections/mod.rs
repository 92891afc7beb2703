//! Cross-section property types
//!
//! The query engine never interprets geometry - it stores and hands back
//! [`SectionRef`]s keyed by position. The [`Section`] trait is the contract
//! the code-check layer consumes.

mod circle;
mod hollow_circle;

use std::fmt::Debug;
use std::sync::Arc;

pub use circle::Circle;
pub use hollow_circle::HollowCircle;

use crate::error::BeamResult;
use crate::materials::Material;

/// A cross section with the accessors design-code checks require.
pub trait Section: Debug + Send + Sync {
    /// The material of the section.
    fn material(&self) -> &Material;

    /// Gross area of the section (m²).
    fn area(&self) -> f64;

    /// Net area after bolt holes etc. (m²). Equal to the gross area for
    /// simple shapes.
    fn area_net(&self) -> f64 {
        self.area()
    }

    /// The governing thickness used for strength lookups (m).
    fn thickness(&self) -> f64;

    /// Is the section circular?
    fn is_circle(&self) -> bool;

    /// Is the section hollow?
    fn is_hollow(&self) -> bool;

    /// Is the section built from more than one material?
    fn is_composite(&self) -> bool {
        false
    }

    /// Minimum yield strength across the section (Pa).
    fn min_strength_yield(&self) -> BeamResult<f64> {
        self.material().strength_yield(self.thickness())
    }

    /// Minimum ultimate strength across the section (Pa).
    fn min_strength_ultimate(&self) -> BeamResult<f64> {
        self.material().strength_ultimate(self.thickness())
    }
}

/// Shared handle to a section; sections are commonly reused across several
/// elements of a beam.
pub type SectionRef = Arc<dyn Section>;
