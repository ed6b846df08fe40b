use std::f64::consts::PI;

use approx::assert_abs_diff_eq;

use nodal::interpolation::points::{Sample, TestFunction};
use nodal::session::{Session, SessionCfg, SessionError};

type SessionResult = Result<(), SessionError>;

#[test]
fn equidistant_bundle() -> SessionResult {
    let mut s = Session::default();
    s.generate(TestFunction::Sin, 0.0, PI, 5)?;

    let bundle = s.plot()?;
    assert!(bundle.spacing.is_equidistant());
    assert_eq!(bundle.nodes.len(), 5);

    let reference = bundle.reference.as_ref().expect("generated points plot their function");
    assert_eq!(reference.label, "sin(x)");
    assert_eq!(reference.len(), 100);

    let labels: Vec<&str> = bundle.curves.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(labels, ["lagrange", "newton finite-difference"]);
    for curve in &bundle.curves {
        assert_eq!(curve.len(), 100);
        assert_eq!(curve.x[0], 0.0);
        assert_abs_diff_eq!(curve.x[99], PI, epsilon = 1e-12);
        assert_abs_diff_eq!(curve.y[0], 0.0, epsilon = 1e-12);
    }

    assert_eq!(bundle.x_range, (0.0, PI));
    assert_abs_diff_eq!(bundle.y_range.0, -1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(bundle.y_range.1, 2.0, epsilon = 1e-12);
    Ok(())
}

#[test]
fn uneven_bundle() -> SessionResult {
    let mut s = Session::default();
    s.set_manual(vec![Sample::new(4.0, 16.0), Sample::new(0.0, 0.0), Sample::new(1.0, 1.0)])?;

    let bundle = s.plot()?;
    assert!(bundle.reference.is_none());
    assert_eq!(bundle.curves[1].label, "newton divided-difference");
    assert_eq!(bundle.x_range, (0.0, 4.0));

    // both curves trace x^2 across the grid
    for curve in &bundle.curves {
        for (x, y) in curve.x.iter().zip(&curve.y) {
            assert_abs_diff_eq!(*y, x * x, epsilon = 1e-9);
        }
    }
    Ok(())
}

#[test]
fn resolution_and_margin_from_config() -> SessionResult {
    let cfg = SessionCfg::new().with_plot_resolution(10).with_plot_y_margin(0.0);
    let mut s = Session::new(cfg)?;
    s.generate(TestFunction::Square, -1.0, 1.0, 3)?;

    let bundle = s.plot()?;
    assert!(bundle.curves.iter().all(|c| c.len() == 10));
    assert_eq!(bundle.reference.as_ref().map(|r| r.len()), Some(10));
    assert_eq!(bundle.y_range, (0.0, 1.0));
    Ok(())
}

#[test]
fn writes_json() -> Result<(), Box<dyn std::error::Error>> {
    let mut s = Session::default();
    s.generate(TestFunction::Square, 0.0, 3.0, 4)?;

    let dir = tempfile::tempdir()?;
    let path = dir.path().join("plot.json");
    s.plot()?.write_json(&path)?;

    let value: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
    assert_eq!(value["spacing"]["kind"], "equidistant");
    assert_eq!(value["nodes"]["x"].as_array().map(Vec::len), Some(4));
    assert_eq!(value["curves"].as_array().map(Vec::len), Some(2));
    assert_eq!(value["reference"]["label"], "x^2");
    Ok(())
}

#[test]
fn unwritable_path_reported() -> SessionResult {
    let mut s = Session::default();
    s.generate(TestFunction::Square, 0.0, 3.0, 4)?;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("plot.json");
    let err = s.plot()?.write_json(&path).unwrap_err();
    assert!(matches!(err, SessionError::PlotWrite { .. }));
    Ok(())
}
