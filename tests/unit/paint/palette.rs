use super::*;
use serde_json::json;

#[test]
fn standard_palette_has_brand_colors() {
    let p = Palette::standard();
    assert_eq!(p.get("matte_black"), Some(Rgba8::opaque(25, 25, 25)));
    assert_eq!(p.get("ferrari_red"), Some(Rgba8::opaque(239, 26, 45)));
    assert_eq!(p.get("ferrari_green"), Some(Rgba8::opaque(0, 165, 81)));
    assert_eq!(p.get("nope"), None);
}

#[test]
fn color_ref_json_forms() {
    let c: ColorRef = serde_json::from_value(json!("ferrari_yellow")).unwrap();
    assert_eq!(c, ColorRef::named("ferrari_yellow"));

    let c: ColorRef = serde_json::from_value(json!("#fff200")).unwrap();
    assert_eq!(c, ColorRef::Value(Rgba8::opaque(255, 242, 0)));

    let c: ColorRef = serde_json::from_value(json!([30, 30, 30, 255])).unwrap();
    assert_eq!(c, ColorRef::Value(Rgba8::opaque(30, 30, 30)));

    assert!(serde_json::from_value::<ColorRef>(json!("#nothex")).is_err());
}

#[test]
fn resolve_unknown_name_is_validation_error() {
    let p = Palette::standard();
    let err = p.resolve(&ColorRef::named("chartreuse")).unwrap_err();
    assert!(matches!(err, WrapError::Validation(_)));
    assert!(err.to_string().contains("chartreuse"));
}

#[test]
fn extended_overrides_and_adds() {
    let base = Palette::standard();
    let mut extra = BTreeMap::new();
    extra.insert("red".to_owned(), Rgba8::opaque(200, 0, 0));
    extra.insert("teal".to_owned(), Rgba8::opaque(0, 128, 128));

    let p = base.extended(&extra);
    assert_eq!(p.get("red"), Some(Rgba8::opaque(200, 0, 0)));
    assert_eq!(p.get("teal"), Some(Rgba8::opaque(0, 128, 128)));
    assert_eq!(p.len(), base.len() + 1);
    assert!(!p.is_empty());
    assert!(Palette::default().is_empty());
    // the source table is untouched
    assert_eq!(base.get("red"), Some(Rgba8::opaque(255, 0, 0)));
}
