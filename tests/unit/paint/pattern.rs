use super::*;

fn px(img: &RgbaImage, x: u32, y: u32) -> Rgba8 {
    Rgba8::from(*img.get_pixel(x, y))
}

const RED: Rgba8 = Rgba8::opaque(255, 0, 0);
const BLUE: Rgba8 = Rgba8::opaque(0, 0, 255);

#[test]
fn fill_rect_is_inclusive_and_clipped() {
    let mut img = RgbaImage::new(10, 10);
    fill_rect(&mut img, 2, 3, 4, 5, RED);
    assert_eq!(px(&img, 2, 3), RED);
    assert_eq!(px(&img, 4, 5), RED);
    assert_eq!(px(&img, 5, 5), Rgba8::TRANSPARENT);
    assert_eq!(px(&img, 1, 3), Rgba8::TRANSPARENT);

    fill_rect(&mut img, -5, -5, 100, 0, BLUE);
    assert_eq!(px(&img, 0, 0), BLUE);
    assert_eq!(px(&img, 9, 0), BLUE);
    assert_eq!(px(&img, 9, 1), Rgba8::TRANSPARENT);
}

#[test]
fn inverted_rect_paints_nothing() {
    let mut img = RgbaImage::new(4, 4);
    fill_rect(&mut img, 3, 0, 1, 3, RED);
    assert!(img.pixels().all(|p| p.0 == [0, 0, 0, 0]));
}

#[test]
fn gradient_starts_at_from_and_truncates() {
    let mut img = RgbaImage::new(3, 100);
    let from = Rgba8::opaque(0, 100, 200);
    let to = Rgba8::opaque(100, 0, 150);
    linear_gradient(&mut img, from, to, Direction::Vertical);

    assert_eq!(px(&img, 0, 0), from);
    assert_eq!(px(&img, 2, 0), from);
    // ratio 0.5
    assert_eq!(px(&img, 1, 50), Rgba8::opaque(50, 50, 175));
    // last row: ratio 0.99 -> 99, 1, 150.5 truncated
    assert_eq!(px(&img, 0, 99), Rgba8::opaque(99, 1, 150));
}

#[test]
fn horizontal_gradient_varies_by_column() {
    let mut img = RgbaImage::new(4, 2);
    linear_gradient(&mut img, Rgba8::BLACK, Rgba8::WHITE, Direction::Horizontal);
    assert_eq!(px(&img, 0, 1), Rgba8::BLACK);
    assert_eq!(px(&img, 2, 0), Rgba8::opaque(127, 127, 127));
    assert_eq!(px(&img, 2, 1), Rgba8::opaque(127, 127, 127));
}

#[test]
fn stripes_cycle_through_palette() {
    let colors = [RED, Rgba8::WHITE, BLUE];
    let mut img = RgbaImage::new(5, 600);
    stripes(&mut img, &colors, 60, Direction::Horizontal);
    for y in 0..600 {
        assert_eq!(px(&img, 0, y), colors[(y / 60) as usize % 3], "row {y}");
    }
}

#[test]
fn vertical_stripes_cycle_by_column() {
    let colors = [RED, BLUE];
    let mut img = RgbaImage::new(50, 2);
    stripes(&mut img, &colors, 10, Direction::Vertical);
    assert_eq!(px(&img, 9, 1), RED);
    assert_eq!(px(&img, 10, 1), BLUE);
    assert_eq!(px(&img, 25, 0), RED);
}

#[test]
fn degenerate_stripes_paint_single_band_or_nothing() {
    let mut img = RgbaImage::new(4, 4);
    stripes(&mut img, &[RED, BLUE], 0, Direction::Horizontal);
    assert!(img.pixels().all(|p| p.0 == [0, 0, 0, 0]));

    stripes(&mut img, &[RED, BLUE], 100, Direction::Horizontal);
    assert!(img.pixels().all(|p| Rgba8::from(*p) == RED));
}

#[test]
fn racing_stripes_are_symmetric() {
    let mut img = RgbaImage::new(1000, 4);
    fill(&mut img, Rgba8::BLACK);
    racing_stripes(&mut img, Rgba8::WHITE, 30, 10);

    let white: Vec<u32> = (0..1000)
        .filter(|&x| px(&img, x, 2) == Rgba8::WHITE)
        .collect();
    assert_eq!(white.first(), Some(&465));
    assert_eq!(white.last(), Some(&535));
    for &x in &white {
        assert_eq!(px(&img, 1000 - x, 2), Rgba8::WHITE);
    }
    assert_eq!(px(&img, 500, 0), Rgba8::BLACK);
    assert_eq!(px(&img, 496, 0), Rgba8::BLACK);
    assert_eq!(px(&img, 495, 0), Rgba8::WHITE);
}

#[test]
fn polygon_fills_interior_only() {
    let mut img = RgbaImage::new(20, 20);
    let tri = [
        Point::new(0.0, 0.0),
        Point::new(20.0, 0.0),
        Point::new(0.0, 20.0),
    ];
    fill_polygon(&mut img, &tri, RED);
    assert_eq!(px(&img, 1, 1), RED);
    assert_eq!(px(&img, 18, 18), Rgba8::TRANSPARENT);

    let mut img2 = RgbaImage::new(4, 4);
    fill_polygon(&mut img2, &tri[..2], RED);
    assert!(img2.pixels().all(|p| p.0 == [0, 0, 0, 0]));
}

#[test]
fn weave_uses_all_shades_and_tiles() {
    let weave = Weave::default();
    let mut img = RgbaImage::new(64, 32);
    carbon_weave(&mut img, &weave);

    for shade in [weave.base, weave.light, weave.dark, weave.cross] {
        assert!(img.pixels().any(|p| Rgba8::from(*p) == shade));
    }
    for y in 0..32 {
        for x in 0..(64 - weave.step) {
            assert_eq!(px(&img, x, y), px(&img, x + weave.step, y));
        }
    }
}

#[test]
fn fade_ramps_alpha_down_the_band() {
    let mut img = RgbaImage::new(2, 100);
    fill(&mut img, Rgba8::WHITE);
    vertical_fade(
        &mut img,
        Rgba8::BLACK,
        0.5,
        1.0,
        1.0,
        FadeDirection::Down,
    );

    assert_eq!(px(&img, 0, 49), Rgba8::WHITE);
    assert_eq!(px(&img, 0, 50), Rgba8::WHITE);
    // ratio 0.5 -> alpha 128 -> 255 * 127 / 255
    assert_eq!(px(&img, 1, 75), Rgba8::opaque(127, 127, 127));
    assert!(px(&img, 0, 99).r < 10);
    assert!(img.pixels().all(|p| p.0[3] == 255));
}

#[test]
fn fade_up_is_strongest_at_band_start() {
    let mut img = RgbaImage::new(1, 10);
    fill(&mut img, Rgba8::WHITE);
    vertical_fade(&mut img, Rgba8::BLACK, 0.0, 1.0, 1.0, FadeDirection::Up);
    assert_eq!(px(&img, 0, 0), Rgba8::BLACK);
    assert!(px(&img, 0, 9).r > px(&img, 0, 1).r);
}

#[test]
fn over_handles_opaque_and_clear_sources() {
    let dst = Rgba8::opaque(10, 20, 30);
    assert_eq!(over(dst, Rgba8::new(1, 2, 3, 0)), dst);
    assert_eq!(over(dst, RED), RED);
    assert_eq!(over(Rgba8::TRANSPARENT, Rgba8::new(100, 0, 0, 128)), Rgba8::new(100, 0, 0, 128));
}
