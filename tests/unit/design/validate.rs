use super::*;
use crate::design::model::{
    Complexity, FitMode, GradientDirection, LayoutArchetype, Mood, RichTextContent,
};
use crate::foundation::core::Rgb8;

fn base_request() -> DesignRequest {
    DesignRequest::new(
        Mood::Modern,
        Complexity::new(2).unwrap(),
        Palette::from_hex(&["#FFFFFF", "#000000"]).unwrap(),
        LayoutArchetype::CenterFocused,
    )
}

#[test]
fn minimal_request_is_valid() {
    base_request().validate().unwrap();
}

#[test]
fn rejects_oversized_palette() {
    let mut req = base_request();
    req.colors = Palette::from_hex(&["#000000"; 5]).unwrap();
    assert!(req.validate().is_err());
}

#[test]
fn rejects_overlong_text_and_empty_rich_text() {
    let mut req = base_request();
    req.user_text = "字".repeat(MAX_USER_TEXT_CHARS + 1);
    assert!(req.validate().is_err());

    let mut req = base_request();
    req.rich_text = Some(RichTextContent { blocks: vec![] });
    assert!(req.validate().is_err());
}

#[test]
fn rejects_bad_backgrounds() {
    let mut req = base_request();
    req.background = Some(BackgroundSpec::Gradient {
        direction: GradientDirection::Diagonal,
        colors: vec![Rgb8::new(0, 0, 0)],
        angle: 90.0,
    });
    assert!(req.validate().is_err());

    req.background = Some(BackgroundSpec::Image {
        path: "bg.png".into(),
        opacity: 1.5,
        fit_mode: FitMode::Stretch,
    });
    assert!(req.validate().is_err());

    req.background = Some(BackgroundSpec::Image {
        path: "bg.png".into(),
        opacity: 0.5,
        fit_mode: FitMode::Stretch,
    });
    req.validate().unwrap();
}
