//! The four record kinds a measurement can be expressed as.
//!
//! A [`WavelengthRecord`] or [`TimeRecord`] is populated from a sky file.
//! [`FrequencyRecord`] and [`RamanRecord`] are derived from a wavelength
//! record by converting its axis and resampling the signal onto a uniformly
//! spaced grid in the destination coordinate; they copy the source record's
//! metadata by value. Records are plain data and are not mutated after
//! construction.

use std::io::Read;
use std::path::Path;

use thiserror::Error;

use crate::convert::{
    energy_to_wavelength, frequency_to_wavelength, inverse_raman_shift, raman_shift,
    wavelength_to_energy, wavelength_to_frequency,
};
use crate::coordinate::AxisDomain;
use crate::io::filename::{base_name, index_from_extension, index_from_underscore, IndexParseError};
use crate::io::sky::{SkyParserError, SkyReaderType, SkyRecord};
use crate::resample::{resample_axis, ResampleError};

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("Failed to parse data file: {0}")]
    Parser(
        #[from]
        #[source]
        SkyParserError,
    ),
    #[error("Failed to derive the record index: {0}")]
    Index(
        #[from]
        #[source]
        IndexParseError,
    ),
    #[error("Failed to resample the record: {0}")]
    Resample(
        #[from]
        #[source]
        ResampleError,
    ),
}

/// The unit a [`FrequencyRecord`]'s axis is expressed in.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrequencyUnit {
    /// THz
    #[default]
    Terahertz,
    /// eV
    Electronvolt,
}

/// A spectral trace on a wavelength axis in nanometers, as measured.
///
/// The axis is assumed strictly monotonic but need not be uniformly spaced.
/// `axis` and `signal` are always the same length, index-aligned.
#[derive(Debug, Clone, PartialEq)]
pub struct WavelengthRecord {
    /// The pump-probe delay times recorded in the file header, in ps
    pub delays: Vec<f64>,
    /// Wavelength in nm
    pub axis: Vec<f64>,
    pub signal: Vec<f64>,
    /// The source file's base name
    pub name: String,
    /// The counter parsed from the file name's trailing underscore segment
    pub index: u32,
}

impl Default for WavelengthRecord {
    fn default() -> Self {
        Self {
            delays: Vec::new(),
            axis: Vec::new(),
            signal: Vec::new(),
            name: "wdat".to_string(),
            index: 0,
        }
    }
}

impl WavelengthRecord {
    /// Load a wavelength-domain sky file, deriving the record name and index
    /// from the file name.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, RecordError> {
        let name = base_name(&path);
        let mut reader = SkyReaderType::open_path(&path).map_err(SkyParserError::from)?;
        let raw = reader.read_record()?;
        Self::from_parts(raw, name)
    }

    /// Parse a wavelength-domain record from an arbitrary stream, with the
    /// name supplied by the caller.
    pub fn from_reader<R: Read>(name: &str, source: R) -> Result<Self, RecordError> {
        let raw = SkyReaderType::new(source).read_record()?;
        Self::from_parts(raw, name.to_string())
    }

    fn from_parts(raw: SkyRecord, name: String) -> Result<Self, RecordError> {
        let index = index_from_underscore(&name)?;
        Ok(Self {
            delays: raw.header,
            axis: raw.axis,
            signal: raw.signal,
            name,
            index,
        })
    }

    pub fn len(&self) -> usize {
        self.axis.len()
    }

    pub fn is_empty(&self) -> bool {
        self.axis.is_empty()
    }

    pub const fn axis_domain(&self) -> AxisDomain {
        AxisDomain::Wavelength
    }
}

/// A spectral trace converted onto a uniformly spaced frequency (THz) or
/// photon energy (eV) axis.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyRecord {
    /// Delay times copied from the source record
    pub delays: Vec<f64>,
    /// Frequency in THz or energy in eV, uniformly spaced, ascending when
    /// the source wavelength axis is ascending
    pub axis: Vec<f64>,
    pub signal: Vec<f64>,
    pub name: String,
    pub index: u32,
    pub unit: FrequencyUnit,
}

impl FrequencyRecord {
    /// Convert a wavelength record onto a uniformly spaced axis in `unit`.
    pub fn from_wavelength(
        source: &WavelengthRecord,
        unit: FrequencyUnit,
    ) -> Result<Self, RecordError> {
        let (axis, signal) = match unit {
            FrequencyUnit::Terahertz => resample_axis(
                &source.axis,
                &source.signal,
                wavelength_to_frequency,
                frequency_to_wavelength,
            )?,
            FrequencyUnit::Electronvolt => resample_axis(
                &source.axis,
                &source.signal,
                wavelength_to_energy,
                energy_to_wavelength,
            )?,
        };
        Ok(Self {
            delays: source.delays.clone(),
            axis,
            signal,
            name: source.name.clone(),
            index: source.index,
            unit,
        })
    }

    pub fn len(&self) -> usize {
        self.axis.len()
    }

    pub fn is_empty(&self) -> bool {
        self.axis.is_empty()
    }

    pub const fn axis_domain(&self) -> AxisDomain {
        match self.unit {
            FrequencyUnit::Terahertz => AxisDomain::Frequency,
            FrequencyUnit::Electronvolt => AxisDomain::Energy,
        }
    }
}

/// A spectral trace converted onto a uniformly spaced Raman shift axis in
/// cm⁻¹, relative to the pump wavelength used for the conversion.
///
/// Negative shifts are Stokes scattering, positive shifts anti-Stokes.
#[derive(Debug, Clone, PartialEq)]
pub struct RamanRecord {
    /// Delay times copied from the source record
    pub delays: Vec<f64>,
    /// Raman shift in cm⁻¹, uniformly spaced
    pub axis: Vec<f64>,
    pub signal: Vec<f64>,
    pub name: String,
    pub index: u32,
    /// The Raman pump wavelength in nm the shift axis is referenced to
    pub pump_wavelength: f64,
}

impl RamanRecord {
    /// Convert a wavelength record onto a uniformly spaced Raman shift axis
    /// referenced to `pump_wavelength` (nm).
    pub fn from_wavelength(
        source: &WavelengthRecord,
        pump_wavelength: f64,
    ) -> Result<Self, RecordError> {
        let (axis, signal) = resample_axis(
            &source.axis,
            &source.signal,
            |x| raman_shift(x, pump_wavelength),
            |q| inverse_raman_shift(q, pump_wavelength),
        )?;
        Ok(Self {
            delays: source.delays.clone(),
            axis,
            signal,
            name: source.name.clone(),
            index: source.index,
            pump_wavelength,
        })
    }

    pub fn len(&self) -> usize {
        self.axis.len()
    }

    pub fn is_empty(&self) -> bool {
        self.axis.is_empty()
    }

    pub const fn axis_domain(&self) -> AxisDomain {
        AxisDomain::RamanShift
    }
}

/// A kinetic trace on a pump-probe delay axis in picoseconds.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeRecord {
    /// The probe wavelengths recorded in the file header, in nm
    pub wavelengths: Vec<f64>,
    /// Delay time in ps
    pub axis: Vec<f64>,
    pub signal: Vec<f64>,
    /// The source file's base name
    pub name: String,
    /// The counter parsed from the file name's numeric extension
    pub index: u32,
}

impl Default for TimeRecord {
    fn default() -> Self {
        Self {
            wavelengths: Vec::new(),
            axis: Vec::new(),
            signal: Vec::new(),
            name: "tdat".to_string(),
            index: 0,
        }
    }
}

impl TimeRecord {
    /// Load a time-domain sky file, deriving the record name and index from
    /// the file name.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, RecordError> {
        let name = base_name(&path);
        let mut reader = SkyReaderType::open_path(&path).map_err(SkyParserError::from)?;
        let raw = reader.read_record()?;
        Self::from_parts(raw, name)
    }

    /// Parse a time-domain record from an arbitrary stream, with the name
    /// supplied by the caller.
    pub fn from_reader<R: Read>(name: &str, source: R) -> Result<Self, RecordError> {
        let raw = SkyReaderType::new(source).read_record()?;
        Self::from_parts(raw, name.to_string())
    }

    fn from_parts(raw: SkyRecord, name: String) -> Result<Self, RecordError> {
        let index = index_from_extension(&name)?;
        Ok(Self {
            wavelengths: raw.header,
            axis: raw.axis,
            signal: raw.signal,
            name,
            index,
        })
    }

    pub fn len(&self) -> usize {
        self.axis.len()
    }

    pub fn is_empty(&self) -> bool {
        self.axis.is_empty()
    }

    pub const fn axis_domain(&self) -> AxisDomain {
        AxisDomain::TimeDelay
    }
}
