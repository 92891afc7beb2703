//! Material properties
//!
//! A [`Material`] stores very little: identification plus the
//! thickness-banded strength table that design standards key off. What a
//! strength *means* is up to the code-check layer.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BeamError, BeamResult};

/// Broad material family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatType {
    Steel,
    Concrete,
}

/// One thickness band of a strength table.
///
/// The band applies to thicknesses up to and including `max_thickness`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrengthBand {
    /// Upper thickness bound of the band (m)
    pub max_thickness: f64,
    /// Yield strength within the band (Pa)
    pub fy: f64,
    /// Ultimate strength within the band (Pa)
    pub fu: f64,
}

/// Material properties for member design
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Material family
    pub mat_type: MatType,
    /// Name of the material (e.g. a grade designation)
    pub name: String,
    /// The standard the material complies with
    pub standard: String,
    /// Modulus of elasticity (Pa)
    pub e: f64,
    /// Density (kg/m³)
    pub rho: f64,
    /// Strength bands, ascending by thickness
    strengths: Vec<StrengthBand>,
}

impl Material {
    /// Create a material from an explicit strength table.
    ///
    /// Bands must be ascending by `max_thickness`.
    pub fn new(
        mat_type: MatType,
        name: &str,
        standard: &str,
        e: f64,
        rho: f64,
        strengths: Vec<StrengthBand>,
    ) -> BeamResult<Self> {
        for pair in strengths.windows(2) {
            if pair[1].max_thickness <= pair[0].max_thickness {
                return Err(BeamError::InvalidGeometry(format!(
                    "strength bands must be ascending by thickness, got {} after {}",
                    pair[1].max_thickness, pair[0].max_thickness
                )));
            }
        }

        Ok(Self {
            mat_type,
            name: name.to_string(),
            standard: standard.to_string(),
            e,
            rho,
            strengths,
        })
    }

    /// AS3678 grade 250 structural plate.
    pub fn as3678_250() -> Self {
        Self {
            mat_type: MatType::Steel,
            name: "250".to_string(),
            standard: "AS3678".to_string(),
            e: 200e9,
            rho: 7850.0,
            strengths: vec![
                StrengthBand {
                    max_thickness: 0.008,
                    fy: 280e6,
                    fu: 410e6,
                },
                StrengthBand {
                    max_thickness: 0.012,
                    fy: 260e6,
                    fu: 410e6,
                },
                StrengthBand {
                    max_thickness: 0.050,
                    fy: 250e6,
                    fu: 410e6,
                },
                StrengthBand {
                    max_thickness: 0.080,
                    fy: 240e6,
                    fu: 410e6,
                },
                StrengthBand {
                    max_thickness: 0.150,
                    fy: 230e6,
                    fu: 410e6,
                },
            ],
        }
    }

    /// AS3678 grade 300 structural plate.
    pub fn as3678_300() -> Self {
        Self {
            mat_type: MatType::Steel,
            name: "300".to_string(),
            standard: "AS3678".to_string(),
            e: 200e9,
            rho: 7850.0,
            strengths: vec![
                StrengthBand {
                    max_thickness: 0.008,
                    fy: 320e6,
                    fu: 430e6,
                },
                StrengthBand {
                    max_thickness: 0.012,
                    fy: 310e6,
                    fu: 430e6,
                },
                StrengthBand {
                    max_thickness: 0.020,
                    fy: 300e6,
                    fu: 430e6,
                },
                StrengthBand {
                    max_thickness: 0.050,
                    fy: 280e6,
                    fu: 430e6,
                },
                StrengthBand {
                    max_thickness: 0.080,
                    fy: 270e6,
                    fu: 430e6,
                },
                StrengthBand {
                    max_thickness: 0.150,
                    fy: 260e6,
                    fu: 430e6,
                },
            ],
        }
    }

    /// Yield strength for a given thickness (m).
    pub fn strength_yield(&self, thickness: f64) -> BeamResult<f64> {
        self.band(thickness).map(|b| b.fy)
    }

    /// Ultimate strength for a given thickness (m).
    pub fn strength_ultimate(&self, thickness: f64) -> BeamResult<f64> {
        self.band(thickness).map(|b| b.fu)
    }

    /// The strength bands of the material.
    pub fn strengths(&self) -> &[StrengthBand] {
        &self.strengths
    }

    fn band(&self, thickness: f64) -> BeamResult<&StrengthBand> {
        if thickness > 0.0 {
            if let Some(band) = self
                .strengths
                .iter()
                .find(|b| thickness <= b.max_thickness)
            {
                return Ok(band);
            }
        }

        Err(BeamError::InvalidThickness {
            thickness,
            material: self.name.clone(),
        })
    }

    /// Load a named catalog of materials from a JSON file.
    pub fn load_catalog(path: &Path) -> BeamResult<HashMap<String, Material>> {
        let file = File::open(path)?;
        let catalog = serde_json::from_reader(BufReader::new(file))?;
        Ok(catalog)
    }
}
