pub(crate) mod pdf;
pub(crate) mod png;

/// Metres per inch, for PNG `pHYs` conversion.
const METRES_PER_INCH: f64 = 0.0254;

/// Pixels per metre for `dpi`.
pub(crate) fn dpi_to_ppm(dpi: u32) -> u32 {
    (f64::from(dpi) / METRES_PER_INCH).round() as u32
}

/// Dots per inch for `ppm` pixels per metre.
pub(crate) fn ppm_to_dpi(ppm: u32) -> u32 {
    (f64::from(ppm) * METRES_PER_INCH).round() as u32
}
