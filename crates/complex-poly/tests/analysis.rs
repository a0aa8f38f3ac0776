use complex_poly::{Analysis, PlotConfig, PolyError};
use ndarray::Array1;
use num_complex::Complex64;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn small_config() -> PlotConfig {
    PlotConfig {
        num_coeffs: 6,
        image_res: 64,
        render_res: 16,
        figure_size: (900, 500),
        ..Default::default()
    }
}

#[test]
fn random_run_agrees_and_covers_roots() {
    init_logger();
    let config = small_config();
    let analysis = Analysis::run(&config).expect("analysis should succeed");

    assert_eq!(analysis.coefficients().len(), 6);
    assert_eq!(analysis.roots.len(), 5);
    assert_eq!(analysis.residuals.len(), 5);
    assert_eq!(analysis.manual.dim(), (64, 64));
    assert_eq!(analysis.reference.dim(), (64, 64));
    assert!(analysis.evaluations_agree(), "diff {:?}", analysis.diff.max_abs);

    let extent = analysis.grid.extent();
    for r in &analysis.roots {
        assert!(r.re.abs() < extent && r.im.abs() < extent, "{} outside {}", r, extent);
    }
    // roots are sorted by real part
    for pair in analysis.roots.windows(2) {
        assert!(pair[0].re <= pair[1].re);
    }
}

#[test]
fn same_seed_same_analysis() {
    let a = Analysis::run(&small_config()).unwrap();
    let b = Analysis::run(&small_config()).unwrap();
    assert_eq!(a.coefficients(), b.coefficients());
    assert_eq!(a.roots, b.roots);

    let c = Analysis::run(&PlotConfig {
        seed: 1,
        ..small_config()
    })
    .unwrap();
    assert_ne!(a.coefficients(), c.coefficients());
}

#[test]
fn known_polynomial_roots_and_extent() {
    init_logger();
    // (z - 1)(z + 1)(z - 2i)(z + 2i) = z^4 + 3z^2 - 4
    let coeffs = Array1::from_vec(
        [-4.0, 0.0, 3.0, 0.0, 1.0]
            .iter()
            .map(|&v| Complex64::new(v, 0.0))
            .collect(),
    );
    let analysis = Analysis::from_coefficients(&small_config(), coeffs).unwrap();

    let expected = [
        Complex64::new(-1.0, 0.0),
        Complex64::new(0.0, -2.0),
        Complex64::new(0.0, 2.0),
        Complex64::new(1.0, 0.0),
    ];
    assert_eq!(analysis.roots.len(), expected.len());
    for (root, want) in analysis.roots.iter().zip(expected) {
        assert!((root - want).norm() < 1e-9, "{} vs {}", root, want);
    }
    for residual in &analysis.residuals {
        assert!(*residual < 1e-9);
    }
    // furthest coordinate is 2, wiggle room 0.5
    assert!((analysis.grid.extent() - 3.0).abs() < 1e-9);
}

#[test]
fn constant_polynomial_has_default_extent() {
    let coeffs = Array1::from_vec(vec![Complex64::new(2.0, 1.0)]);
    let analysis = Analysis::from_coefficients(&small_config(), coeffs).unwrap();
    assert!(analysis.roots.is_empty());
    assert_eq!(analysis.grid.extent(), 1.5);
    assert!(analysis.evaluations_agree());
}

#[test]
fn invalid_config_stops_the_run() {
    let config = PlotConfig {
        num_coeffs: 0,
        ..small_config()
    };
    assert!(matches!(
        Analysis::run(&config),
        Err(PolyError::InvalidConfig(_))
    ));
}
