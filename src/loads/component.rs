//! Load component addressing

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{BeamError, BeamResult};

/// One of the six directional load channels carried along a member.
///
/// The ordering is a stable contract: a load-table row is
/// `[position, vx, vy, n, mx, my, t]`, so each component's table column is
/// its integer code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoadComponent {
    /// Shear along the local x axis
    Vx,
    /// Shear along the local y axis
    Vy,
    /// Axial force
    N,
    /// Bending moment about the local x axis
    Mx,
    /// Bending moment about the local y axis
    My,
    /// Torsion
    T,
}

impl LoadComponent {
    /// All components in table-column order.
    pub const ALL: [LoadComponent; 6] = [
        LoadComponent::Vx,
        LoadComponent::Vy,
        LoadComponent::N,
        LoadComponent::Mx,
        LoadComponent::My,
        LoadComponent::T,
    ];

    /// The integer code of the component (1 to 6).
    pub fn code(self) -> usize {
        match self {
            LoadComponent::Vx => 1,
            LoadComponent::Vy => 2,
            LoadComponent::N => 3,
            LoadComponent::Mx => 4,
            LoadComponent::My => 5,
            LoadComponent::T => 6,
        }
    }

    /// The column of the component in a 7-wide load row.
    pub fn column(self) -> usize {
        self.code()
    }

    /// Look a component up by its integer code.
    pub fn from_code(code: usize) -> BeamResult<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.code() == code)
            .ok_or(BeamError::InvalidComponentCode(code))
    }

    /// The short name of the component.
    pub fn name(self) -> &'static str {
        match self {
            LoadComponent::Vx => "vx",
            LoadComponent::Vy => "vy",
            LoadComponent::N => "n",
            LoadComponent::Mx => "mx",
            LoadComponent::My => "my",
            LoadComponent::T => "t",
        }
    }
}

impl FromStr for LoadComponent {
    type Err = BeamError;

    /// Accepts the short names (`vx`, `n`, ...) and the descriptive aliases
    /// (`shear-x`, `axial`, `torsion`, ...), case-insensitively.
    fn from_str(s: &str) -> BeamResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "vx" | "shear-x" => Ok(LoadComponent::Vx),
            "vy" | "shear-y" => Ok(LoadComponent::Vy),
            "n" | "axial" => Ok(LoadComponent::N),
            "mx" | "moment-x" => Ok(LoadComponent::Mx),
            "my" | "moment-y" => Ok(LoadComponent::My),
            "t" | "torsion" => Ok(LoadComponent::T),
            _ => Err(BeamError::UnknownComponent(s.to_string())),
        }
    }
}

impl fmt::Display for LoadComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_match_columns() {
        for (i, c) in LoadComponent::ALL.into_iter().enumerate() {
            assert_eq!(c.code(), i + 1);
            assert_eq!(c.column(), c.code());
            assert_eq!(LoadComponent::from_code(c.code()).unwrap(), c);
        }
    }

    #[test]
    fn test_invalid_code() {
        assert!(LoadComponent::from_code(0).is_err());
        assert!(LoadComponent::from_code(7).is_err());
    }

    #[test]
    fn test_names_and_aliases() {
        assert_eq!("vx".parse::<LoadComponent>().unwrap(), LoadComponent::Vx);
        assert_eq!(
            "shear-x".parse::<LoadComponent>().unwrap(),
            LoadComponent::Vx
        );
        assert_eq!("Axial".parse::<LoadComponent>().unwrap(), LoadComponent::N);
        assert_eq!(
            "torsion".parse::<LoadComponent>().unwrap(),
            LoadComponent::T
        );
        assert!("bending".parse::<LoadComponent>().is_err());
    }
}
