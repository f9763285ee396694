use poster_tile::*;

#[test]
fn test_defaults() {
    let options = PosterOptions::default();

    assert_eq!(options.dpi, 96.0);
    assert_eq!(options.paper, PaperSize::A4.spec(Orientation::Portrait));
    assert_eq!(options.overlap_mm, 10.0);
    assert_eq!(options.grid_placement, GridPlacement::None);
    assert_eq!(options.marker_position, OverlapMarkerPosition::Both);
    assert_eq!(options.marker_style, OverlapMarkerStyle::Dashed);
    assert!(!options.debug_overlay);

    assert!(options.validate().is_ok());
}

#[test]
fn test_validation_rejects_bad_density() {
    let mut options = PosterOptions::default();
    options.dpi = 0.0;

    match options.validate() {
        Err(PosterError::Config(msg)) => assert!(msg.contains("dpi")),
        other => panic!("expected Config error, got {:?}", other),
    }

    options.dpi = f32::NAN;
    assert!(options.validate().is_err());
}

#[test]
fn test_validation_rejects_bad_overlap() {
    let mut options = PosterOptions::default();

    options.overlap_mm = -1.0;
    match options.validate() {
        Err(PosterError::Config(msg)) => assert!(msg.contains("overlap_mm")),
        other => panic!("expected Config error, got {:?}", other),
    }

    // Overlap must stay below the smaller paper dimension
    options.overlap_mm = 210.0;
    assert!(options.validate().is_err());

    options.overlap_mm = 209.9;
    assert!(options.validate().is_ok());
}

#[test]
fn test_validation_rejects_bad_paper() {
    let mut options = PosterOptions::default();
    options.paper = PaperSpec::new(-210.0, 297.0);

    match options.validate() {
        Err(PosterError::Config(msg)) => assert!(msg.contains("paper")),
        other => panic!("expected Config error, got {:?}", other),
    }
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_save_and_load_options() {
    use tempfile::NamedTempFile;

    let options = PosterOptions {
        dpi: 300.0,
        paper: PaperSize::A3.spec(Orientation::Landscape),
        overlap_mm: 15.0,
        grid_placement: GridPlacement::Back,
        marker_position: OverlapMarkerPosition::NW,
        marker_style: OverlapMarkerStyle::Solid,
        debug_overlay: false,
    };

    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path();

    options.save(path).await.unwrap();
    let loaded = PosterOptions::load(path).await.unwrap();

    assert_eq!(loaded, options);
}
