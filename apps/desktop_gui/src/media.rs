//! Poster decoding into RGBA pixels ready for texture upload.

const POSTER_MAX_DIMENSION: u32 = 1024;

#[derive(Clone, PartialEq, Eq)]
pub struct PosterImage {
    pub width: usize,
    pub height: usize,
    pub rgba: Vec<u8>,
}

impl std::fmt::Debug for PosterImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PosterImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.rgba.len())
            .finish()
    }
}

pub fn decode_poster(bytes: &[u8]) -> Result<PosterImage, image::ImageError> {
    let dynamic = image::load_from_memory(bytes)?;
    let oversized =
        dynamic.width() > POSTER_MAX_DIMENSION || dynamic.height() > POSTER_MAX_DIMENSION;
    let bounded = if oversized {
        dynamic.thumbnail(POSTER_MAX_DIMENSION, POSTER_MAX_DIMENSION)
    } else {
        dynamic
    };
    let resized = bounded.to_rgba8();
    let width = resized.width() as usize;
    let height = resized.height() as usize;
    Ok(PosterImage {
        width,
        height,
        rgba: resized.into_raw(),
    })
}

#[cfg(test)]
#[path = "tests/media_tests.rs"]
mod tests;
