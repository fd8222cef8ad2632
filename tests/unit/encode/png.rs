use super::*;

#[test]
fn encodes_dimensions_and_dpi() {
    let img = RgbImage::from_pixel(7, 5, image::Rgb([1, 2, 3]));
    let bytes = encode_png(&img, 300).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    let info = read_png_info(&bytes).unwrap();
    assert_eq!(
        info,
        RasterInfo {
            width: 7,
            height: 5,
            dpi: Some(300)
        }
    );
}

#[test]
fn pixels_survive_a_decode() {
    let img = RgbImage::from_fn(4, 3, |x, y| image::Rgb([x as u8 * 60, y as u8 * 80, 7]));
    let bytes = encode_png(&img, 72).unwrap();
    let decoded = image::load_from_memory(&bytes).unwrap().to_rgb8();
    assert_eq!(decoded, img);
}

#[test]
fn empty_image_is_an_encode_error() {
    let err = encode_png(&RgbImage::new(0, 3), 72).unwrap_err();
    assert!(matches!(err, BookmarkError::Encode(_)));
}

#[test]
fn garbage_is_rejected() {
    assert!(read_png_info(b"nope").is_err());
}
