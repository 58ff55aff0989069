use super::*;
use serde_json::json;

fn ctx_parts() -> (Palette, AssetStore) {
    (Palette::standard(), AssetStore::empty())
}

fn px(img: &RgbaImage, x: u32, y: u32) -> Rgba8 {
    Rgba8::from(*img.get_pixel(x, y))
}

#[test]
fn layers_deserialize_with_defaults() {
    let layers: Vec<Layer> = serde_json::from_value(json!([
        { "kind": "fill", "color": "ferrari_red" },
        { "kind": "stripes", "colors": ["red", "#ffffff", [0, 0, 255]] },
        { "kind": "racing_stripes", "base": "black", "stripe": "white" },
        { "kind": "carbon_weave" },
        { "kind": "fade", "color": "black", "start": 0.7, "strength": 0.8 },
        { "kind": "rect", "x0": 0, "y0": { "frac": 0.15 }, "x1": { "frac": 1.0 }, "y1": { "frac": 0.15, "px": 15 }, "color": "ferrari_green" }
    ]))
    .unwrap();

    assert_eq!(
        layers[1],
        Layer::Stripes {
            colors: vec![
                ColorRef::named("red"),
                ColorRef::Value(Rgba8::WHITE),
                ColorRef::Value(Rgba8::opaque(0, 0, 255)),
            ],
            stripe_width: 50,
            direction: Direction::Horizontal,
        }
    );
    assert!(matches!(
        layers[2],
        Layer::RacingStripes {
            stripe_width: 30,
            gap: 10,
            ..
        }
    ));
    assert_eq!(layers[3], Layer::CarbonWeave);
    assert!(matches!(layers[4], Layer::Fade { end, direction: FadeDirection::Down, .. } if end == 1.0));
}

#[test]
fn rect_band_uses_truncated_fractions() {
    let (palette, assets) = ctx_parts();
    let cx = PaintCtx::new(&palette, &assets);
    let mut img = RgbaImage::new(10, 100);
    Layer::band(Coord::frac(0.15), Coord::new(0.15, 14.0), "ferrari_green")
        .paint(&mut img, &cx)
        .unwrap();

    let green = Rgba8::opaque(0, 165, 81);
    assert_eq!(px(&img, 0, 14), Rgba8::TRANSPARENT);
    assert_eq!(px(&img, 0, 15), green);
    assert_eq!(px(&img, 9, 29), green);
    assert_eq!(px(&img, 9, 30), Rgba8::TRANSPARENT);
}

#[test]
fn polygon_from_fractions_covers_corner_region() {
    let (palette, assets) = ctx_parts();
    let cx = PaintCtx::new(&palette, &assets);
    let mut img = RgbaImage::new(100, 100);
    Layer::polygon(
        &[(0.0, 0.3), (0.35, 0.4), (0.35, 0.8), (0.0, 0.9)],
        "ferrari_black",
    )
    .paint(&mut img, &cx)
    .unwrap();

    assert_eq!(px(&img, 10, 50), Rgba8::BLACK);
    assert_eq!(px(&img, 50, 50), Rgba8::TRANSPARENT);
    assert_eq!(px(&img, 10, 10), Rgba8::TRANSPARENT);
}

#[test]
fn unknown_color_fails_painting() {
    let (palette, assets) = ctx_parts();
    let cx = PaintCtx::new(&palette, &assets);
    let mut img = RgbaImage::new(2, 2);
    assert!(Layer::fill("octarine").paint(&mut img, &cx).is_err());
}

#[test]
fn logo_layer_pastes_with_alpha() {
    let palette = Palette::standard();
    let mut assets = AssetStore::empty();
    let logo = RgbaImage::from_fn(2, 1, |x, _| {
        if x == 0 {
            image::Rgba([255, 242, 0, 255])
        } else {
            image::Rgba([255, 255, 255, 0])
        }
    });
    assets.insert("dot", logo);
    let cx = PaintCtx::new(&palette, &assets);

    let mut img = RgbaImage::from_pixel(4, 4, Rgba8::opaque(239, 26, 45).to_pixel());
    Layer::logo("dot", [2, 1], Coord::px(1.0), Coord::frac(0.5))
        .paint(&mut img, &cx)
        .unwrap();
    assert_eq!(px(&img, 1, 2), Rgba8::opaque(255, 242, 0));
    assert_eq!(px(&img, 2, 2), Rgba8::opaque(239, 26, 45));

    assert!(
        Layer::logo("dot", [0, 1], Coord::px(0.0), Coord::px(0.0))
            .paint(&mut img, &cx)
            .is_err()
    );
    assert!(
        Layer::logo("missing", [1, 1], Coord::px(0.0), Coord::px(0.0))
            .paint(&mut img, &cx)
            .is_err()
    );
}

#[test]
fn slice_paints_in_order() {
    let (palette, assets) = ctx_parts();
    let cx = PaintCtx::new(&palette, &assets);
    let mut img = RgbaImage::new(3, 3);
    let layers = [Layer::fill("red"), Layer::fill("blue")];
    layers.as_slice().paint(&mut img, &cx).unwrap();
    assert_eq!(px(&img, 1, 1), Rgba8::opaque(0, 0, 255));
}
