//! Read sky-format femtosecond transient absorption data and convert spectra
//! between axis domains.
//!
//! The sky format is the flat-text output of the fs_kHz measurement program:
//! a `#EX` header line of metadata floats followed by a two-column numeric
//! body. A [`WavelengthRecord`] or [`TimeRecord`] is loaded from such a file;
//! a [`FrequencyRecord`] (THz or eV) or [`RamanRecord`] (cm⁻¹) is derived
//! from a wavelength record by converting the axis and resampling the signal
//! onto a uniformly spaced grid in the destination coordinate.
//!
//! ```no_run
//! use skydata::{FrequencyRecord, FrequencyUnit, RamanRecord, WavelengthRecord};
//!
//! # fn main() -> Result<(), skydata::RecordError> {
//! let wd = WavelengthRecord::from_path("DA1050_DA_0001")?;
//! let fd = FrequencyRecord::from_wavelength(&wd, FrequencyUnit::Terahertz)?;
//! let rd = RamanRecord::from_wavelength(&wd, 400.0)?;
//! assert_eq!(fd.axis.len(), wd.axis.len());
//! assert_eq!(rd.pump_wavelength, 400.0);
//! # Ok(())
//! # }
//! ```

pub mod convert;
pub mod coordinate;
pub mod io;
pub mod prelude;
pub mod record;
pub mod resample;

pub use crate::coordinate::AxisDomain;

pub use crate::convert::{
    energy_to_wavelength, frequency_to_wavelength, inverse_raman_shift, raman_shift,
    wavelength_to_energy, wavelength_to_frequency, EV_NM, SPEED_OF_LIGHT_NM_THZ,
};

pub use crate::io::{read_sky_file, SkyParserError, SkyReader, SkyReaderType, SkyRecord};

pub use crate::record::{
    FrequencyRecord, FrequencyUnit, RamanRecord, RecordError, TimeRecord, WavelengthRecord,
};

pub use crate::resample::{linspace, resample_axis, LinearInterpolant, ResampleError};
