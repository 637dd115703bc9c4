use super::decode_poster;
use std::io::Cursor;

fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let image = image::RgbaImage::from_pixel(width, height, image::Rgba([200, 40, 40, 255]));
    let mut out = Cursor::new(Vec::new());
    image
        .write_to(&mut out, image::ImageFormat::Png)
        .expect("encode png");
    out.into_inner()
}

#[test]
fn decodes_small_poster_at_native_size() {
    let poster = decode_poster(&png_bytes(3, 5)).expect("decode");
    assert_eq!((poster.width, poster.height), (3, 5));
    assert_eq!(poster.rgba.len(), 3 * 5 * 4);
    assert_eq!(&poster.rgba[..4], &[200, 40, 40, 255]);
}

#[test]
fn large_poster_is_bounded() {
    let poster = decode_poster(&png_bytes(2048, 1024)).expect("decode");
    assert_eq!(poster.width, 1024);
    assert_eq!(poster.height, 512);
}

#[test]
fn garbage_bytes_fail_to_decode() {
    assert!(decode_poster(b"definitely not an image").is_err());
}
