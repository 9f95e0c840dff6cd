//! A prelude bringing the crate's working surface into scope with one import.

pub use crate::convert::{
    energy_to_wavelength, frequency_to_wavelength, inverse_raman_shift, raman_shift,
    wavelength_to_energy, wavelength_to_frequency,
};
pub use crate::coordinate::AxisDomain;
pub use crate::io::{read_sky_file, SkyReader, SkyReaderType};
pub use crate::record::{FrequencyRecord, FrequencyUnit, RamanRecord, TimeRecord, WavelengthRecord};
pub use crate::resample::{resample_axis, LinearInterpolant};
