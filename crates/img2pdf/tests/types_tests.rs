use img2pdf::*;

#[test]
fn test_page_size_dimensions() {
    assert_eq!(PageSize::A4.dimensions_pt(), (595.28, 841.89));
    assert_eq!(PageSize::Letter.dimensions_pt(), (612.0, 792.0));
    assert_eq!(PageSize::Legal.dimensions_pt(), (612.0, 1008.0));
    assert_eq!(PageSize::Tabloid.dimensions_pt(), (792.0, 1224.0));
    assert_eq!(PageSize::Executive.dimensions_pt(), (522.0, 756.0));
}

#[test]
fn test_margin_preset_points() {
    assert_eq!(MarginPreset::None.points(), 0.0);
    assert_eq!(MarginPreset::Small.points(), 10.0);
    assert_eq!(MarginPreset::Normal.points(), 15.0);
    assert_eq!(MarginPreset::Large.points(), 25.0);
}

#[test]
fn test_page_size_keys_round_trip() {
    for page in [
        PageSize::A4,
        PageSize::Letter,
        PageSize::Legal,
        PageSize::Tabloid,
        PageSize::Executive,
    ] {
        assert_eq!(page.name().parse::<PageSize>().unwrap(), page);
    }
}

#[test]
fn test_margin_preset_keys_round_trip() {
    for margin in [
        MarginPreset::None,
        MarginPreset::Small,
        MarginPreset::Normal,
        MarginPreset::Large,
    ] {
        assert_eq!(margin.name().parse::<MarginPreset>().unwrap(), margin);
    }
}

#[test]
fn test_placement_keys_round_trip() {
    for placement in [
        Placement::Cover,
        Placement::Top,
        Placement::Center,
        Placement::Bottom,
        Placement::Stretch,
    ] {
        assert_eq!(placement.name().parse::<Placement>().unwrap(), placement);
    }
}

#[test]
fn test_unknown_keys_are_rejected() {
    let result = "a3".parse::<PageSize>();
    assert!(matches!(result, Err(Img2PdfError::InvalidArgument(_))));

    let result = "huge".parse::<MarginPreset>();
    assert!(matches!(result, Err(Img2PdfError::InvalidArgument(_))));

    let result = "sideways".parse::<Placement>();
    match result {
        Err(Img2PdfError::InvalidArgument(msg)) => {
            assert!(msg.contains("sideways"));
        }
        _ => panic!("Expected InvalidArgument error"),
    }
}

#[test]
fn test_keys_are_case_sensitive() {
    assert!("A4".parse::<PageSize>().is_err());
    assert!("Cover".parse::<Placement>().is_err());
}

#[test]
fn test_defaults_match_ui_defaults() {
    assert_eq!(PageSize::default(), PageSize::A4);
    assert_eq!(MarginPreset::default(), MarginPreset::Normal);
    assert_eq!(Placement::default(), Placement::Cover);
}
