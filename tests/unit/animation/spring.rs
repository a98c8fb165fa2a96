use super::*;

fn fps30() -> Fps {
    Fps::new(30, 1).unwrap()
}

#[test]
fn zero_at_or_before_trigger() {
    for config in [
        SpringConfig::default(),
        SpringConfig::new(15.0, 100.0),
        SpringConfig::with_damping(200.0),
    ] {
        for frame in [-100.0, -1.0, -0.5, 0.0] {
            assert_eq!(spring(frame, fps30(), config), 0.0);
        }
        assert!(spring(1.0, fps30(), config) > 0.0);
    }
}

#[test]
fn approaches_one() {
    for config in [
        SpringConfig::default(),
        SpringConfig::new(15.0, 100.0),
        SpringConfig::new(20.0, 150.0),
        SpringConfig::with_damping(200.0),
    ] {
        let v = spring(300.0, fps30(), config);
        assert!((v - 1.0).abs() < 1e-3, "{config:?} -> {v}");
    }
}

#[test]
fn underdamped_overshoots_and_clamping_caps_it() {
    let config = SpringConfig::new(8.0, 180.0);
    assert!(config.is_underdamped());
    let peak = (0..90)
        .map(|f| spring(f as f64, fps30(), config))
        .fold(f64::MIN, f64::max);
    assert!(peak > 1.0);

    let clamped = config.overshoot_clamping(true);
    let peak = (0..90)
        .map(|f| spring(f as f64, fps30(), clamped))
        .fold(f64::MIN, f64::max);
    assert!(peak <= 1.0);
}

#[test]
fn heavily_damped_is_monotonic() {
    let config = SpringConfig::with_damping(200.0);
    assert!(!config.is_underdamped());
    let mut prev = 0.0;
    for f in 0..120 {
        let v = spring(f as f64, fps30(), config);
        assert!(v >= prev - 1e-12);
        assert!(v <= 1.0 + 1e-12);
        prev = v;
    }
}

#[test]
fn fractional_frames_sit_between_whole_frames() {
    let config = SpringConfig::with_damping(200.0);
    let a = spring(4.0, fps30(), config);
    let b = spring(4.5, fps30(), config);
    let c = spring(5.0, fps30(), config);
    assert!(a < b && b < c);
}

#[test]
fn low_fps_substeps_instead_of_dropping_time() {
    // At 10fps a frame is 100ms, above the 64ms step cap.
    let fps10 = Fps::new(10, 1).unwrap();
    let config = SpringConfig::with_damping(200.0);
    let at_10fps = spring(5.0, fps10, config); // 0.5s
    let at_30fps = spring(15.0, fps30(), config); // 0.5s
    assert!((at_10fps - at_30fps).abs() < 1e-9);
}

#[test]
fn measure_spring_finds_settle_frame() {
    let frames = measure_spring(fps30(), SpringConfig::default(), 0.005).unwrap();
    assert!(frames > 10 && frames < 120, "{frames}");
    for f in frames..frames + 20 {
        assert!((spring(f as f64, fps30(), SpringConfig::default()) - 1.0).abs() < 0.005);
    }
}

#[test]
fn measure_spring_rejects_non_settling_and_bad_threshold() {
    let undamped = SpringConfig::new(0.0, 100.0);
    assert!(undamped.validate().is_ok());
    assert!(measure_spring(fps30(), undamped, 0.005).is_err());
    assert!(measure_spring(fps30(), SpringConfig::default(), 0.0).is_err());
}

#[test]
fn pinned_reference_values() {
    let cases = [
        (10.0, SpringConfig::new(15.0, 100.0), 0.9736366981),
        (5.0, SpringConfig::new(20.0, 150.0), 0.6809725236),
    ];
    for (frame, config, expected) in cases {
        let v = spring(frame, fps30(), config);
        assert!((v - expected).abs() < 1e-9, "{config:?} @ {frame} -> {v}");
    }
}

#[test]
fn validate_rejects_non_physical_configs() {
    assert!(SpringConfig::default().validate().is_ok());
    assert!(SpringConfig::with_damping(0.0).validate().is_ok());

    let bad = [
        SpringConfig {
            mass: f64::NAN,
            ..SpringConfig::default()
        },
        SpringConfig {
            mass: -1.0,
            ..SpringConfig::default()
        },
        SpringConfig {
            mass: 0.0,
            ..SpringConfig::default()
        },
        SpringConfig::new(10.0, -100.0),
        SpringConfig::new(10.0, f64::INFINITY),
        SpringConfig::new(-1.0, 100.0),
        SpringConfig::new(f64::NAN, 100.0),
    ];
    for config in bad {
        assert!(config.validate().is_err(), "{config:?}");
        assert!(measure_spring(fps30(), config, 0.005).is_err(), "{config:?}");
        assert!(Spring::new(config).sample(10.0, fps30()).is_err(), "{config:?}");
    }
}

#[test]
fn spring_builder_delays_and_remaps() {
    let s = Spring::new(SpringConfig::with_damping(200.0))
        .range(30.0, 0.0)
        .delay(10.0);
    assert_eq!(s.sample(0.0, fps30()).unwrap(), 30.0);
    assert_eq!(s.sample(10.0, fps30()).unwrap(), 30.0);
    assert!(s.sample(11.0, fps30()).unwrap() < 30.0);
    assert!(s.sample(200.0, fps30()).unwrap().abs() < 1e-2);
}

#[test]
fn spring_builder_duration_stretches_curve() {
    let config = SpringConfig::default();
    let natural = measure_spring(fps30(), config, DEFAULT_SETTLE_THRESHOLD).unwrap() as f64;
    let stretched = Spring::new(config).duration(natural * 2.0);
    let plain = Spring::new(config);

    let a = stretched.sample(20.0, fps30()).unwrap();
    let b = plain.sample(10.0, fps30()).unwrap();
    assert!((a - b).abs() < 1e-9);

    assert!(Spring::new(config).duration(0.0).sample(1.0, fps30()).is_err());
}
