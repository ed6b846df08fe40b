use approx::{assert_abs_diff_eq, assert_relative_eq};

use nodal::interpolation::errors::InterpolationError;
use nodal::interpolation::points::{Provenance, Sample, TestFunction};
use nodal::session::{Outcome, Session, SessionCfg, SessionError};

type SessionResult = Result<(), SessionError>;

fn samples(pairs: &[(f64, f64)]) -> Vec<Sample> {
    pairs.iter().copied().map(Sample::from).collect()
}

#[test]
fn uneven_points_use_divided_differences() -> SessionResult {
    let mut s = Session::default();
    s.set_manual(samples(&[(0.0, 0.0), (1.0, 1.0), (4.0, 16.0)]))?;
    assert!(!s.is_equidistant());

    let rep = s.query(2.0)?;
    assert_abs_diff_eq!(rep.lagrange, 4.0, epsilon = 1e-12);
    assert_abs_diff_eq!(rep.newton_divided.value().unwrap(), 4.0, epsilon = 1e-12);
    assert_eq!(rep.newton_finite, Outcome::NotApplicable);
    assert!(rep.exact.is_none());
    Ok(())
}

#[test]
fn equidistant_points_use_finite_differences() -> SessionResult {
    let mut s = Session::default();
    s.set_manual(samples(&[(0.0, 0.0), (1.0, 1.0), (2.0, 4.0), (3.0, 9.0)]))?;
    assert!(s.is_equidistant());

    let rep = s.query(1.5)?;
    assert_abs_diff_eq!(rep.newton_finite.value().unwrap(), 2.25, epsilon = 1e-12);
    assert_eq!(rep.newton_divided, Outcome::NotApplicable);
    assert!(!rep.newton_divided.is_applicable());
    Ok(())
}

#[test]
fn genuine_zero_is_not_confused_with_inapplicable() -> SessionResult {
    let mut s = Session::default();
    s.set_manual(samples(&[(-1.0, 1.0), (0.0, 0.0), (1.0, 1.0)]))?;

    let rep = s.query(0.0)?;
    assert_eq!(rep.newton_finite, Outcome::Value(0.0));
    assert_eq!(rep.newton_divided, Outcome::NotApplicable);
    Ok(())
}

#[test]
fn generated_points_report_errors() -> SessionResult {
    let mut s = Session::default();
    s.generate(TestFunction::Sin, 0.0, std::f64::consts::PI, 9)?;

    let x = 1.0;
    let rep = s.query(x)?;
    let cmp = rep.exact.expect("generated points carry their function");

    assert_eq!(cmp.function, "sin(x)");
    assert_relative_eq!(cmp.exact, x.sin());
    assert_relative_eq!(cmp.lagrange_error, (x.sin() - rep.lagrange).abs());
    assert!(cmp.lagrange_error < 1e-5);
    assert!(cmp.newton_divided_error.is_none());
    // forward branch from the bracketing node drops to degree 6 here
    let finite_err = cmp.newton_finite_error.expect("finite differences apply");
    assert!(finite_err < 1e-4);
    Ok(())
}

#[test]
fn manual_entry_drops_ground_truth() -> SessionResult {
    let mut s = Session::default();
    s.generate(TestFunction::Square, 0.0, 2.0, 3)?;
    assert!(s.query(0.5)?.exact.is_some());

    s.set_manual(samples(&[(0.0, 0.0), (1.0, 1.0), (4.0, 16.0)]))?;
    assert!(matches!(s.points().provenance(), Provenance::Manual));
    assert!(s.query(0.5)?.exact.is_none());
    Ok(())
}

#[test]
fn rejected_input_keeps_previous_points() -> SessionResult {
    let mut s = Session::default();
    s.generate(TestFunction::Square, 0.0, 2.0, 3)?;

    let err = s.set_manual(samples(&[(1.0, 1.0)])).unwrap_err();
    assert!(matches!(err, SessionError::Interpolation(InterpolationError::InsufficientPoints { got: 1 })));

    let err = s.generate(TestFunction::Sin, 1.0, 0.0, 4).unwrap_err();
    assert!(matches!(err, SessionError::Interpolation(InterpolationError::InvalidInterval { .. })));

    assert_eq!(s.points().len(), 3);
    assert!(matches!(s.points().generator(), Some(TestFunction::Square)));
    Ok(())
}

#[test]
fn empty_session_rejects_requests() {
    let s = Session::default();
    let insufficient = |e: SessionError| {
        matches!(e, SessionError::Interpolation(InterpolationError::InsufficientPoints { got: 0 }))
    };
    assert!(insufficient(s.query(1.0).unwrap_err()));
    assert!(insufficient(s.difference_table().unwrap_err()));
    assert!(insufficient(s.divided_difference_table().unwrap_err()));
    assert!(insufficient(s.plot().unwrap_err()));
}

#[test]
fn non_finite_query_rejected() -> SessionResult {
    let mut s = Session::default();
    s.set_manual(samples(&[(0.0, 0.0), (1.0, 1.0)]))?;
    assert!(matches!(s.query(f64::NAN).unwrap_err(), SessionError::NonFiniteQuery { .. }));
    Ok(())
}

#[test]
fn tables_follow_points() -> SessionResult {
    let mut s = Session::default();
    s.set_manual(samples(&[(0.0, 0.0), (1.0, 1.0), (4.0, 16.0)]))?;

    let fin = s.difference_table()?;
    assert_eq!(fin.row_triangle(0), &[0.0, 1.0, 14.0]);

    let div = s.divided_difference_table()?;
    assert_abs_diff_eq!(div.get(0, 2), 1.0, epsilon = 1e-12);

    s.set_manual(samples(&[(0.0, 5.0), (2.0, 1.0)]))?;
    assert_eq!(s.difference_table()?.row_triangle(0), &[5.0, -4.0]);
    Ok(())
}

#[test]
fn report_display_marks_inapplicable_method() -> SessionResult {
    let mut s = Session::default();
    s.generate(TestFunction::Square, 0.0, 3.0, 4)?;

    let text = s.query(1.5)?.to_string();
    assert!(text.contains("Lagrange:"));
    assert!(text.contains("not applicable"));
    assert!(text.contains("cannot be computed"));
    assert!(text.contains("x^2"));
    Ok(())
}

#[test]
fn spacing_tolerance_is_configurable() -> SessionResult {
    let pts = samples(&[(0.0, 0.0), (1.0, 1.0), (2.001, 4.0)]);

    let mut strict = Session::default();
    strict.set_manual(pts.clone())?;
    assert!(!strict.is_equidistant());

    let mut loose = Session::new(SessionCfg::new().with_spacing_tol(1e-2))?;
    loose.set_manual(pts)?;
    assert!(loose.is_equidistant());
    assert!(loose.query(1.0)?.newton_finite.is_applicable());
    Ok(())
}

#[test]
fn invalid_config_rejected() {
    let err = Session::new(SessionCfg::new().with_plot_resolution(1)).unwrap_err();
    assert!(matches!(err, SessionError::InvalidConfig { field: "plot_resolution", .. }));

    let err = Session::new(SessionCfg::new().with_spacing_tol(0.0)).unwrap_err();
    assert!(matches!(err, SessionError::InvalidConfig { field: "spacing_tol", .. }));

    let err = Session::new(SessionCfg::new().with_plot_y_margin(-1.0)).unwrap_err();
    assert!(matches!(err, SessionError::InvalidConfig { field: "plot_y_margin", .. }));
}

#[test]
fn offset_generated_grid_uses_finite_differences() -> SessionResult {
    let mut s = Session::default();
    s.generate(TestFunction::Square, 1000.0, 1001.0, 11)?;
    assert!(s.is_equidistant());

    let x = 1000.55;
    let rep = s.query(x)?;
    assert_eq!(rep.newton_divided, Outcome::NotApplicable);
    let finite = rep.newton_finite.value().expect("generated grid is equidistant");
    assert_relative_eq!(finite, x * x, max_relative = 1e-9);

    let cmp = rep.exact.expect("generated points carry their function");
    assert!(cmp.newton_finite_error.is_some());
    assert!(cmp.newton_divided_error.is_none());

    let bundle = s.plot()?;
    assert_eq!(bundle.curves[1].label, "newton finite-difference");
    Ok(())
}
