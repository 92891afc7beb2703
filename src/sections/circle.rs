//! Solid circular sections

use serde::{Deserialize, Serialize};

use crate::error::{BeamError, BeamResult};
use crate::materials::Material;
use crate::sections::Section;

/// A solid circular bar section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    material: Material,
    radius: f64,
}

impl Circle {
    /// Create a circle of the given radius (m).
    pub fn new(material: Material, radius: f64) -> BeamResult<Self> {
        if radius < 0.0 {
            return Err(BeamError::InvalidGeometry(format!(
                "circle radius must be >= 0.0, got {radius}"
            )));
        }

        Ok(Self { material, radius })
    }

    /// The radius of the section (m).
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Section for Circle {
    fn material(&self) -> &Material {
        &self.material
    }

    fn area(&self) -> f64 {
        std::f64::consts::PI * self.radius.powi(2)
    }

    // the full diameter governs strength lookups for a solid bar
    fn thickness(&self) -> f64 {
        2.0 * self.radius
    }

    fn is_circle(&self) -> bool {
        true
    }

    fn is_hollow(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_circle_area() {
        let c = Circle::new(Material::as3678_250(), 0.01).unwrap();
        assert_relative_eq!(c.area(), std::f64::consts::PI * 1e-4);
        assert_relative_eq!(c.area_net(), c.area());
        assert!(c.is_circle());
        assert!(!c.is_hollow());
        assert!(!c.is_composite());
    }

    #[test]
    fn test_strength_uses_diameter() {
        // radius 5mm -> thickness 10mm -> the 12mm band of grade 250
        let c = Circle::new(Material::as3678_250(), 0.005).unwrap();
        assert_relative_eq!(c.min_strength_yield().unwrap(), 260e6);
        assert_relative_eq!(c.min_strength_ultimate().unwrap(), 410e6);
    }

    #[test]
    fn test_negative_radius_rejected() {
        assert!(Circle::new(Material::as3678_250(), -0.1).is_err());
    }
}
