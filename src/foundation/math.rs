/// `round(x * y / 255)` for 8-bit channel products.
pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

/// Scale an 8-bit alpha by `opacity`, truncating like an integer pixel point operation.
pub(crate) fn scale_alpha(a: u8, opacity: f32) -> u8 {
    let opacity = opacity.clamp(0.0, 1.0);
    (f32::from(a) * opacity) as u8
}

/// Signed offset that places `inner` inside `outer` according to `align`.
pub(crate) fn align_offset(outer: i64, inner: i64, align: crate::design::model::TextAlign) -> i64 {
    use crate::design::model::TextAlign;
    match align {
        TextAlign::Left => 0,
        TextAlign::Center => (outer - inner).div_euclid(2),
        TextAlign::Right => outer - inner,
    }
}
