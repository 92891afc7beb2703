//! Hollow circular (CHS) sections

use serde::{Deserialize, Serialize};

use crate::error::{BeamError, BeamResult};
use crate::materials::Material;
use crate::sections::Section;

/// A hollow circular (pipe) section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HollowCircle {
    material: Material,
    radius_o: f64,
    radius_i: f64,
}

impl HollowCircle {
    /// Create a hollow circle from outer and inner radii (m).
    pub fn new(material: Material, radius_o: f64, radius_i: f64) -> BeamResult<Self> {
        if radius_i < 0.0 || radius_o < 0.0 {
            return Err(BeamError::InvalidGeometry(format!(
                "radii must be >= 0.0, got outer {radius_o}, inner {radius_i}"
            )));
        }
        if radius_i > radius_o {
            return Err(BeamError::InvalidGeometry(format!(
                "inner radius {radius_i} must not exceed outer radius {radius_o}"
            )));
        }

        Ok(Self {
            material,
            radius_o,
            radius_i,
        })
    }

    /// The outer radius (m).
    pub fn radius_o(&self) -> f64 {
        self.radius_o
    }

    /// The inner radius (m).
    pub fn radius_i(&self) -> f64 {
        self.radius_i
    }
}

impl Section for HollowCircle {
    fn material(&self) -> &Material {
        &self.material
    }

    fn area(&self) -> f64 {
        std::f64::consts::PI * (self.radius_o.powi(2) - self.radius_i.powi(2))
    }

    fn thickness(&self) -> f64 {
        self.radius_o - self.radius_i
    }

    fn is_circle(&self) -> bool {
        true
    }

    fn is_hollow(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_hollow_circle_area() {
        let c = HollowCircle::new(Material::as3678_250(), 0.1, 0.09).unwrap();
        let expected = std::f64::consts::PI * (0.1_f64.powi(2) - 0.09_f64.powi(2));
        assert_relative_eq!(c.area(), expected);
        assert!(c.is_circle());
        assert!(c.is_hollow());
    }

    #[test]
    fn test_wall_thickness_governs_strength() {
        // 10mm wall -> the 12mm band of grade 250
        let c = HollowCircle::new(Material::as3678_250(), 0.1, 0.09).unwrap();
        assert_relative_eq!(c.thickness(), 0.01, epsilon = 1e-12);
        assert_relative_eq!(c.min_strength_yield().unwrap(), 260e6);
    }

    #[test]
    fn test_inner_radius_must_fit() {
        assert!(HollowCircle::new(Material::as3678_250(), 0.05, 0.06).is_err());
    }
}
