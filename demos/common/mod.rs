use image::GrayImage;

/// Stretches the luma range to cover 0..=255.
pub fn normalise(image: &mut GrayImage) {
    let (min, max) = image
        .iter()
        .fold((u8::MAX, u8::MIN), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    if min >= max {
        return;
    }

    let range = (max - min) as u32;
    for v in image.iter_mut() {
        *v = ((*v - min) as u32 * 255 / range) as u8;
    }
}
