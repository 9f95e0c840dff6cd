//! The physical coordinate systems a record's axis can be expressed in.

use std::fmt::{self, Display};

/// The physical quantity along a record's independent axis, with its
/// conventional unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisDomain {
    /// Wavelength in nanometers
    Wavelength,
    /// Optical frequency in terahertz
    Frequency,
    /// Photon energy in electronvolts
    Energy,
    /// Raman shift wavenumber in reciprocal centimeters
    RamanShift,
    /// Pump-probe delay in picoseconds
    TimeDelay,
}

impl AxisDomain {
    pub const fn unit(&self) -> &'static str {
        match self {
            Self::Wavelength => "nm",
            Self::Frequency => "THz",
            Self::Energy => "eV",
            Self::RamanShift => "cm-1",
            Self::TimeDelay => "ps",
        }
    }
}

impl Display for AxisDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Wavelength => "wavelength",
            Self::Frequency => "frequency",
            Self::Energy => "energy",
            Self::RamanShift => "Raman shift",
            Self::TimeDelay => "time delay",
        };
        write!(f, "{} ({})", label, self.unit())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_units() {
        assert_eq!(AxisDomain::Wavelength.unit(), "nm");
        assert_eq!(AxisDomain::RamanShift.unit(), "cm-1");
        assert_eq!(AxisDomain::TimeDelay.to_string(), "time delay (ps)");
    }
}
