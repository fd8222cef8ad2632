use serde_json::json;

use super::*;

#[test]
fn complexity_bounds_are_enforced() {
    assert!(Complexity::new(0).is_err());
    assert!(Complexity::new(6).is_err());
    assert_eq!(Complexity::new(3).unwrap().tier(), 3);
    assert!(serde_json::from_value::<Complexity>(json!(9)).is_err());
}

#[test]
fn complexity_from_score_truncates_and_clamps() {
    assert_eq!(Complexity::from_score(3.9).tier(), 3);
    assert_eq!(Complexity::from_score(0.2).tier(), 1);
    assert_eq!(Complexity::from_score(10.0).tier(), 5);
    assert_eq!(Complexity::from_score(f64::NAN).tier(), 1);
}

#[test]
fn palette_accessors_fall_back() {
    let one = Palette::from_hex(&["#F5F5DC"]).unwrap();
    assert_eq!(one.accent(), one.base());
    assert_eq!(one.text_color(), Rgb8::DARK_GRAY);
    assert_eq!(one.get_or(2, 0), one.base());

    let three = Palette::from_hex(&["#000001", "#000002", "#000003"]).unwrap();
    assert_eq!(three.accent(), Rgb8::new(0, 0, 2));
    assert_eq!(three.text_color(), Rgb8::new(0, 0, 3));
    assert_eq!(three.cyclic(4), Rgb8::new(0, 0, 2));

    assert!(Palette::new(vec![]).is_err());
    assert!(serde_json::from_value::<Palette>(json!([])).is_err());
}

#[test]
fn layout_and_mood_use_wire_names() {
    let l: LayoutArchetype = serde_json::from_value(json!("full-bleed-image")).unwrap();
    assert_eq!(l, LayoutArchetype::FullBleedImage);
    assert_eq!(
        serde_json::to_value(LayoutArchetype::LeftRight).unwrap(),
        json!("left-right")
    );

    let m: Mood = serde_json::from_value(json!("温暖治愈")).unwrap();
    assert_eq!(m, Mood::Warm);
    let m: Mood = serde_json::from_value(json!("artistic")).unwrap();
    assert_eq!(m, Mood::Artistic);
}

#[test]
fn font_size_tiers_map_to_multipliers() {
    let t: FontSizeTier = serde_json::from_value(json!("xlarge")).unwrap();
    assert_eq!(t, FontSizeTier::XLarge);
    assert_eq!(t.multiplier(), 1.8);
    assert_eq!(FontSizeTier::default().multiplier(), 1.0);
}

#[test]
fn background_spec_is_tagged_by_type() {
    let bg: BackgroundSpec = serde_json::from_value(json!({
        "type": "gradient",
        "direction": "radial",
        "colors": ["#FFFFFF", "#000000"]
    }))
    .unwrap();
    match bg {
        BackgroundSpec::Gradient {
            direction,
            colors,
            angle,
        } => {
            assert_eq!(direction, GradientDirection::Radial);
            assert_eq!(colors.len(), 2);
            assert_eq!(angle, 90.0);
        }
        other => panic!("unexpected {other:?}"),
    }

    let bg: BackgroundSpec = serde_json::from_value(json!({
        "type": "image",
        "image_path": "bg.png"
    }))
    .unwrap();
    assert_eq!(
        bg,
        BackgroundSpec::Image {
            path: "bg.png".into(),
            opacity: 1.0,
            fit_mode: FitMode::Cover,
        }
    );
}

#[test]
fn request_json_uses_defaults() {
    let req = DesignRequest::from_json_str(
        r##"{
            "mood": "fresh",
            "complexity": 4,
            "colors": ["#F5F5DC", "#4A7C59"],
            "layout": "top-bottom",
            "text_position": {"direction": "vertical", "left_margin": 12},
            "rich_text": {"blocks": [{"text": "静夜思", "style": {"font_weight": "bold"}}]}
        }"##,
    )
    .unwrap();
    assert_eq!(req.user_text, "");
    assert!(!req.show_borders);
    let zone = req.text_zone.unwrap();
    assert_eq!(zone.direction, TextDirection::Vertical);
    assert_eq!((zone.left_margin, zone.top_margin), (12, 40));
    let block = &req.rich_text.unwrap().blocks[0];
    assert_eq!(block.style.weight, FontWeight::Bold);
    assert_eq!(block.style.color, None);
    assert_eq!(block.style.alignment, TextAlign::Center);
}

#[test]
fn request_json_errors_are_serde_errors() {
    let err = DesignRequest::from_json_str("{").unwrap_err();
    assert!(err.to_string().contains("serialization error:"));
}

#[test]
fn background_accepts_nested_settings_form() {
    let bg: BackgroundSpec = serde_json::from_value(json!({
        "background_type": "image",
        "image": {"type": "image", "image_path": "bg.png", "opacity": 0.5, "fit_mode": "stretch"}
    }))
    .unwrap();
    assert_eq!(
        bg,
        BackgroundSpec::Image {
            path: "bg.png".into(),
            opacity: 0.5,
            fit_mode: FitMode::Stretch,
        }
    );

    let bg: BackgroundSpec = serde_json::from_value(json!({
        "backgroundType": "solid",
        "solid": {"color": "#112233"},
        "gradient": {"colors": ["#FFFFFF", "#000000"]}
    }))
    .unwrap();
    assert_eq!(
        serde_json::to_value(&bg).unwrap(),
        json!({"type": "solid", "color": "#112233"})
    );
}

#[test]
fn nested_background_without_its_settings() {
    let missing = json!({"background_type": "gradient", "solid": {"color": "#112233"}});
    assert!(serde_json::from_value::<BackgroundSpec>(missing.clone()).is_err());

    let req: DesignRequest = serde_json::from_value(json!({
        "mood": "warm",
        "complexity": 2,
        "colors": ["#F5F5DC"],
        "layout": "left-right",
        "background": missing
    }))
    .unwrap();
    assert_eq!(req.background, None);
}
