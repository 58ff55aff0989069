use super::*;

fn template_with_border(w: u32, h: u32) -> Template {
    // white panel inside a one-pixel black outline
    let img = RgbaImage::from_fn(w, h, |x, y| {
        if x == 0 || y == 0 || x == w - 1 || y == h - 1 {
            image::Rgba([0, 0, 0, 255])
        } else {
            image::Rgba([255, 255, 255, 255])
        }
    });
    Template::from_image(&img)
}

#[test]
fn composite_keeps_paint_inside_and_white_outside() {
    let t = template_with_border(6, 5);
    let canvas = RgbaImage::from_pixel(6, 5, image::Rgba([25, 25, 25, 255]));
    let out = composite(&canvas, &t).unwrap();

    assert_eq!(out.dimensions(), (6, 5));
    assert_eq!(out.get_pixel(2, 2).0, [25, 25, 25, 255]);
    assert_eq!(out.get_pixel(0, 0).0, [255, 255, 255, 255]);
    assert_eq!(out.get_pixel(5, 4).0, [255, 255, 255, 255]);
}

#[test]
fn gray_mask_blends_every_channel() {
    let tpl = RgbaImage::from_pixel(1, 1, image::Rgba([128, 128, 128, 255]));
    let t = Template::from_image(&tpl);
    assert_eq!(t.mask().get_pixel(0, 0)[0], 128);

    let canvas = RgbaImage::from_pixel(1, 1, image::Rgba([0, 0, 0, 0]));
    let out = composite(&canvas, &t).unwrap();
    // 255 * 127 / 255 for every channel, alpha included
    assert_eq!(out.get_pixel(0, 0).0, [127, 127, 127, 127]);
}

#[test]
fn composite_rejects_size_mismatch() {
    let t = template_with_border(4, 4);
    let canvas = RgbaImage::new(3, 4);
    let err = composite(&canvas, &t).unwrap_err();
    assert!(matches!(err, WrapError::Validation(_)));
}

#[test]
fn luminance_ignores_alpha() {
    let img = RgbaImage::from_pixel(1, 1, image::Rgba([255, 255, 255, 0]));
    assert_eq!(luminance_mask(&img).get_pixel(0, 0)[0], 255);
}

#[test]
fn paste_with_alpha_mask_clips_at_edges() {
    let mut dst = RgbaImage::from_pixel(4, 4, image::Rgba([239, 26, 45, 255]));
    let logo = RgbaImage::from_fn(2, 2, |x, _| {
        if x == 0 {
            image::Rgba([255, 255, 0, 255])
        } else {
            image::Rgba([255, 255, 255, 0])
        }
    });
    let mask = alpha_mask(&logo);
    paste_masked(&mut dst, &logo, &mask, 3, -1).unwrap();

    assert_eq!(dst.get_pixel(3, 0).0, [255, 255, 0, 255]);
    assert_eq!(dst.get_pixel(3, 1).0, [239, 26, 45, 255]);
    assert_eq!(dst.get_pixel(2, 0).0, [239, 26, 45, 255]);
}

#[test]
fn paste_requires_matching_mask() {
    let mut dst = RgbaImage::new(2, 2);
    let src = RgbaImage::new(2, 2);
    let mask = GrayImage::new(1, 2);
    assert!(paste_masked(&mut dst, &src, &mask, 0, 0).is_err());
}

#[test]
fn load_missing_template_is_asset_error() {
    let err = Template::load("target/definitely/missing/template.png").unwrap_err();
    assert!(matches!(err, WrapError::Asset(_)));
}
