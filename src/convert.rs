//! Pure conversions between spectral axis coordinates.
//!
//! All conversions are plain `f64` arithmetic with no validation. Passing a
//! value outside a function's physical domain (a zero or negative wavelength,
//! a Raman shift that cancels the pump term) produces a non-finite result per
//! IEEE-754 rather than an error. Downstream code tolerates these edge
//! artifacts, so they are deliberately not detected here.

/// The speed of light expressed in nm·THz, so that `c / wavelength_nm`
/// yields a frequency in THz.
pub const SPEED_OF_LIGHT_NM_THZ: f64 = 299792.458;

/// The photon energy-wavelength product in eV·nm, so that `1240 / nm`
/// yields an energy in eV.
pub const EV_NM: f64 = 1240.0;

/// Wavenumbers (cm⁻¹) per inverse nanometer.
const WAVENUMBERS_PER_INVERSE_NM: f64 = 1.0e7;

/// Convert a wavelength in nanometers to a frequency in THz.
#[inline]
pub fn wavelength_to_frequency(wavelength_nm: f64) -> f64 {
    SPEED_OF_LIGHT_NM_THZ / wavelength_nm
}

/// Convert a frequency in THz to a wavelength in nanometers.
///
/// The functional form is its own inverse, this is
/// [`wavelength_to_frequency`] under a clearer name.
#[inline]
pub fn frequency_to_wavelength(frequency_thz: f64) -> f64 {
    SPEED_OF_LIGHT_NM_THZ / frequency_thz
}

/// Convert a wavelength in nanometers to a photon energy in eV.
#[inline]
pub fn wavelength_to_energy(wavelength_nm: f64) -> f64 {
    EV_NM / wavelength_nm
}

/// Convert a photon energy in eV to a wavelength in nanometers.
#[inline]
pub fn energy_to_wavelength(energy_ev: f64) -> f64 {
    EV_NM / energy_ev
}

/// Compute the Raman shift wavenumber in cm⁻¹ for a scattered wavelength
/// and a Raman pump wavelength, both in nanometers.
///
/// `q = (1/scattered - 1/pump) * 1e7`
///
/// A negative shift denotes Stokes scattering, a positive shift anti-Stokes
/// (the scattered photon carries more energy than the pump photon).
#[inline]
pub fn raman_shift(scattered_nm: f64, pump_nm: f64) -> f64 {
    (scattered_nm.recip() - pump_nm.recip()) * WAVENUMBERS_PER_INVERSE_NM
}

/// Recover the scattered wavelength in nanometers from a Raman shift in cm⁻¹
/// and the pump wavelength in nanometers.
///
/// Exact algebraic inverse of [`raman_shift`]. When `q == -1e7 / pump` the
/// denominator vanishes and the result is infinite.
#[inline]
pub fn inverse_raman_shift(q_wavenumber: f64, pump_nm: f64) -> f64 {
    (q_wavenumber / WAVENUMBERS_PER_INVERSE_NM + pump_nm.recip()).recip()
}

/// Element-wise [`wavelength_to_frequency`].
pub fn wavelengths_to_frequencies(wavelengths_nm: &[f64]) -> Vec<f64> {
    wavelengths_nm
        .iter()
        .map(|x| wavelength_to_frequency(*x))
        .collect()
}

/// Element-wise [`wavelength_to_energy`].
pub fn wavelengths_to_energies(wavelengths_nm: &[f64]) -> Vec<f64> {
    wavelengths_nm
        .iter()
        .map(|x| wavelength_to_energy(*x))
        .collect()
}

/// Element-wise [`raman_shift`] against a single pump wavelength.
pub fn raman_shifts(scattered_nm: &[f64], pump_nm: f64) -> Vec<f64> {
    scattered_nm.iter().map(|x| raman_shift(*x, pump_nm)).collect()
}

/// Element-wise [`inverse_raman_shift`] against a single pump wavelength.
pub fn inverse_raman_shifts(q_wavenumbers: &[f64], pump_nm: f64) -> Vec<f64> {
    q_wavenumbers
        .iter()
        .map(|q| inverse_raman_shift(*q, pump_nm))
        .collect()
}
