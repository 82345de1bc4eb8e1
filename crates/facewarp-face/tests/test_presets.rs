use facewarp_face::preset::{
    apply_operations, LandmarkRef, PresetDefinition, PresetKind, PresetPipeline, PresetRegistry,
    PullTarget,
};
use facewarp_face::{apply_preset, FaceError, LandmarkSet, NUM_LANDMARKS};
use facewarp_image::{Image, PixelBuffer, Point};

/// A synthetic 200x200 face with the landmarks used by the built-in presets.
fn synthetic_face() -> LandmarkSet {
    let mut points = vec![Point::new(100.0, 100.0); NUM_LANDMARKS];

    // face width
    points[234] = Point::new(20.0, 100.0);
    points[447] = Point::new(180.0, 100.0);

    // nose tip and bridge
    points[4] = Point::new(100.0, 110.0);
    points[6] = Point::new(100.0, 80.0);
    points[168] = Point::new(100.0, 70.0);

    // jaw and cheeks
    points[150] = Point::new(50.0, 150.0);
    points[379] = Point::new(150.0, 150.0);
    points[172] = Point::new(40.0, 135.0);
    points[397] = Point::new(160.0, 135.0);
    points[215] = Point::new(55.0, 125.0);
    points[435] = Point::new(145.0, 125.0);

    // eye corners and temples
    points[243] = Point::new(85.0, 75.0);
    points[463] = Point::new(115.0, 75.0);
    points[33] = Point::new(55.0, 75.0);
    points[359] = Point::new(145.0, 75.0);
    points[34] = Point::new(35.0, 78.0);
    points[162] = Point::new(30.0, 60.0);
    points[368] = Point::new(165.0, 78.0);
    points[264] = Point::new(170.0, 60.0);

    LandmarkSet::new(points).unwrap()
}

fn checkerboard(width: usize, height: usize) -> PixelBuffer {
    Image::from_size_fn([width, height].into(), |x, y| {
        let v = if (x + y) % 2 == 0 { 0 } else { 255 };
        [v, 255 - v, 64, 255]
    })
}

#[test]
fn every_preset_keeps_size_and_changes_image() -> Result<(), FaceError> {
    let src = checkerboard(200, 200);
    let landmarks = synthetic_face();

    for kind in PresetKind::ALL {
        let dst = apply_preset(&src, &landmarks, kind.as_str())?;
        assert_eq!(dst.size(), src.size(), "{kind}");
        assert_ne!(dst, src, "{kind} left the image unchanged");
    }

    Ok(())
}

#[test]
fn preset_does_not_touch_far_pixels() -> Result<(), FaceError> {
    let src = checkerboard(200, 200);
    let dst = apply_preset(&src, &synthetic_face(), "lower_jaw")?;

    // radius is 160 * 0.4 = 64 around (50, 150) and (150, 150)
    for (x, y) in [(0, 0), (199, 0), (100, 20), (199, 60)] {
        assert_eq!(dst.pixel(x, y), src.pixel(x, y));
    }

    Ok(())
}

#[test]
fn preset_matches_manual_composition() -> Result<(), FaceError> {
    let src = checkerboard(200, 200);
    let landmarks = synthetic_face();
    let pipeline = PresetPipeline::builtin()?;

    let ops = pipeline.plan(&landmarks, PresetKind::BackSlit)?;
    assert_eq!(ops.len(), 2);
    assert_eq!(ops[0].anchor, Point::new(55.0, 75.0));
    assert_eq!(ops[0].anchor + ops[0].displacement, Point::new(32.5, 69.0));
    assert_eq!(ops[1].anchor + ops[1].displacement, Point::new(167.5, 69.0));

    let by_hand = ops[1].apply(&ops[0].apply(&src)?)?;
    assert_eq!(pipeline.apply(&src, &landmarks, PresetKind::BackSlit)?, by_hand);

    Ok(())
}

#[test]
fn composition_order_matters() -> Result<(), FaceError> {
    // a strong two-sided pull whose influence areas overlap
    let definition = PresetDefinition {
        kind: PresetKind::Cheek,
        strength: 1.0,
        influence_ratio: 0.25,
        face_size_landmarks: (234, 447),
        targets: vec![
            PullTarget::new(LandmarkRef::Index(215), LandmarkRef::Index(4)),
            PullTarget::new(LandmarkRef::Index(435), LandmarkRef::Index(4)),
        ],
    };
    let pipeline = PresetPipeline::new(PresetRegistry::new([definition])?);

    let mut points = vec![Point::new(32.0, 32.0); NUM_LANDMARKS];
    points[234] = Point::new(0.0, 32.0);
    points[447] = Point::new(48.0, 32.0);
    points[215] = Point::new(28.0, 32.0);
    points[435] = Point::new(36.0, 32.0);
    points[4] = Point::new(32.0, 22.0);
    let landmarks = LandmarkSet::new(points)?;

    // sharp vertical edge between the two anchors
    let src: PixelBuffer = Image::from_size_fn([64, 64].into(), |x, _| {
        if x < 32 {
            [255, 0, 0, 255]
        } else {
            [0, 0, 255, 255]
        }
    });

    let ops = pipeline.plan(&landmarks, PresetKind::Cheek)?;
    let left_then_right = pipeline.apply(&src, &landmarks, PresetKind::Cheek)?;
    let right_then_left = apply_operations(&src, &[ops[1], ops[0]])?;

    assert_eq!(left_then_right, apply_operations(&src, &ops)?);
    assert_ne!(left_then_right, right_then_left);

    Ok(())
}

#[test]
fn unknown_preset_never_returns_an_image() {
    let src = checkerboard(16, 16);
    let res = apply_preset(&src, &synthetic_face(), "LOWER_JAW");
    assert!(matches!(res, Err(FaceError::UnknownPreset(_))));
}
