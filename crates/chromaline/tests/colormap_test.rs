//! End-to-end tests for chromaline: unit map behavior through the public
//! API, presets, and colormap file round trips.

use chromaline::*;

fn map(points: &[(f64, f64)]) -> UnitMap {
    UnitMap::from_points(points.iter().map(|&(x, y)| DVec2::new(x, y)).collect())
        .expect("valid points")
}

fn assert_maps_close(a: &UnitMap, b: &UnitMap, tol: f64) {
    assert_eq!(a.num_points(), b.num_points(), "{a:?} vs {b:?}");
    for (p, q) in a.points().iter().zip(b.points()) {
        assert!((*p - *q).length() < tol, "{p:?} vs {q:?}");
    }
}

fn assert_colormaps_close(a: &Colormap, b: &Colormap, tol: f64) {
    for channel in Channel::ALL {
        assert_maps_close(a.channel(channel), b.channel(channel), tol);
    }
}

#[test]
fn test_unit_map_basics() {
    init_logging();
    // Calling twice is fine
    init_logging();

    // Identity evaluation
    {
        let m = UnitMap::identity();
        for x in [0.0, 0.1, 0.37, 0.5, 1.0] {
            assert_eq!(m.evaluate(x).unwrap(), x);
        }
        assert!(matches!(m.evaluate(-0.1), Err(ChromalineError::Domain(_))));
        assert!(matches!(m.evaluate(1.1), Err(ChromalineError::Domain(_))));
    }

    // Adding a point bends the curve
    {
        let mut m = UnitMap::new();
        m.add_point(0.5, 0.25).unwrap();
        assert_eq!(m.evaluate(0.5).unwrap(), 0.25);
        assert_eq!(m.evaluate(0.25).unwrap(), 0.125);
        assert!(matches!(
            m.add_point(1.5, 0.5),
            Err(ChromalineError::OutOfRange { name: "x", .. })
        ));
        assert_eq!(m.num_points(), 3);
    }

    // Endpoints cannot be deleted
    {
        let mut m = map(&[(0.0, 0.0), (0.5, 0.25), (1.0, 1.0)]);
        assert!(m.delete_point(0).is_err());
        assert!(m.delete_point(2).is_err());
        assert_eq!(m.num_points(), 3);
        assert_eq!(m.delete_point(1).unwrap(), DVec2::new(0.5, 0.25));
        assert_eq!(m, UnitMap::identity());
    }

    // Invertibility
    {
        assert!(!map(&[(0.0, 0.0), (0.5, 1.0), (1.0, 0.0)]).invertible());
        assert!(map(&[(0.0, 0.0), (1.0, 1.0)]).invertible());
        assert!(map(&[(0.0, 1.0), (1.0, 0.0)]).invertible());
    }

    // Composition with the identity is a no-op
    {
        let m = map(&[(0.0, 0.2), (0.3, 0.9), (0.6, 0.1), (1.0, 0.7)]);
        let id = UnitMap::identity();
        assert_maps_close(&m.compose(&id).unwrap(), &m, 1e-6);
        assert_maps_close(&id.compose(&m).unwrap(), &m, 1e-6);
    }

    // Clean stays within its tolerance
    {
        let mut m = map(&[
            (0.0, 0.0),
            (0.2, 0.201),
            (0.4, 0.399),
            (0.6, 0.602),
            (0.8, 0.7),
            (1.0, 1.0),
        ]);
        let original = m.clone();
        let removed = m.clean(0.005).unwrap();
        assert!(removed > 0);
        for p in original.points() {
            assert!((m.evaluate(p.x).unwrap() - p.y).abs() < 0.005);
        }
    }

    // A jump becomes one segment triple
    {
        let mut m = UnitMap::identity();
        m.add_point(0.3, 0.3).unwrap();
        m.add_point(0.3, 0.9).unwrap();
        let segments = to_segments(&m);
        assert!(segments.contains(&SegmentTriple::new(0.3, 0.3, 0.9)));
        assert_eq!(segments.len(), 3);
    }
}

#[test]
fn test_presets_and_luminance() {
    let registry = ColormapRegistry::new();
    assert_eq!(registry.names(), vec!["autumn", "cool", "gray", "hot", "jet"]);

    let hot = load_preset("hot").unwrap();
    let lum = hot.luminance(&LuminanceWeights::default()).unwrap();
    assert!(lum.is_monotonic());
    assert_eq!(lum.num_points(), 4);
    assert!((lum.evaluate(0.0).unwrap() - 0.3 * 0.0416).abs() < 1e-9);

    let lut = hot.lookup_table(256).unwrap();
    assert_eq!(lut[0], Rgba8 { r: 11, g: 0, b: 0, a: 255 });
    assert_eq!(lut[255], Rgba8 { r: 255, g: 255, b: 255, a: 255 });

    assert!(matches!(
        load_preset("viridis"),
        Err(ChromalineError::UnknownColormap(_))
    ));
}

#[test]
fn test_table_file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let registry = ColormapRegistry::new();

    for name in registry.names() {
        let cmap = registry.get(name).unwrap();
        let path = dir.path().join(format!("{name}.cmap"));
        save_table(&path, cmap).unwrap();
        let back = load_colormap(&path).unwrap();
        assert_eq!(back.name(), name);
        assert_colormaps_close(&back, cmap, 1e-9);
    }
}

#[test]
fn test_table_file_keeps_jumps() {
    let dir = tempfile::tempdir().unwrap();
    let mut red = UnitMap::identity();
    red.add_point(0.3, 0.3).unwrap();
    red.add_point(0.3, 0.9).unwrap();
    let cmap = Colormap::from_channels(
        "stepped",
        red,
        map(&[(0.0, 1.0), (0.6, 0.2), (1.0, 0.0)]),
        UnitMap::identity(),
    );

    let path = dir.path().join("stepped.cmap");
    save_table(&path, &cmap).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("stepped\n"));

    let back = load_colormap(&path).unwrap();
    assert_colormaps_close(&back, &cmap, 1e-9);
    assert_eq!(
        to_segments(back.channel(Channel::Red))[1],
        SegmentTriple::new(0.3, 0.3, 0.9)
    );

    // Coarser settings still keep the jump
    let coarse = TableOptions::new().with_precision(6).with_jump_epsilon(1e-4);
    let path = dir.path().join("coarse.cmap");
    save_table_with(&path, &cmap, &coarse).unwrap();
    let back = load_colormap_with(&path, &coarse, &Options::default()).unwrap();
    let red = back.channel(Channel::Red).points();
    assert_eq!(red[1].x, red[2].x);
}

#[test]
fn test_segment_json_file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmap = load_preset("jet").unwrap();
    cmap.channel_mut(Channel::Blue).add_point(0.5, 0.5).unwrap();
    cmap.channel_mut(Channel::Blue).add_point(0.5, 0.1).unwrap();

    let path = dir.path().join("my_jet.json");
    save_segment_json(&path, &cmap).unwrap();
    let back = load_colormap(&path).unwrap();
    assert_eq!(back.name(), "my_jet");
    assert_colormaps_close(&back, &cmap, 1e-12);
}

#[test]
fn test_load_errors() {
    let dir = tempfile::tempdir().unwrap();

    let path = dir.path().join("map.png");
    std::fs::write(&path, "not a colormap").unwrap();
    assert!(matches!(
        load_colormap(&path),
        Err(ChromalineError::UnknownExtension(_))
    ));

    let path = dir.path().join("broken.cmap");
    std::fs::write(&path, "broken\n0 0 0 0\n0.5 0.1 0.2\n1 1 1 1\n").unwrap();
    assert!(matches!(
        load_colormap(&path),
        Err(ChromalineError::Parse { line: 3, .. })
    ));

    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{\"red\": []}").unwrap();
    assert!(matches!(
        load_colormap(&path),
        Err(ChromalineError::JsonError(_))
    ));

    assert!(matches!(
        load_colormap(dir.path().join("missing.cmap")),
        Err(ChromalineError::IoError(_))
    ));
}
