use nodal::interpolation::differences::{divided_differences, finite_differences, DifferenceKind};
use nodal::interpolation::points::Sample;

const ATOL: f64 = 1e-12;

#[inline]
fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= ATOL
}

#[inline]
fn assert_vec_close(a: &[f64], b: &[f64]) {
    assert_eq!(a.len(), b.len());
    for (i, (ai, bi)) in a.iter().zip(b.iter()).enumerate() {
        assert!(approx_eq(*ai, *bi), "mismatch at index {}: left={}, right={}", i, ai, bi);
    }
}

fn samples(xs: &[f64], f: impl Fn(f64) -> f64) -> Vec<Sample> {
    xs.iter().map(|&x| Sample::new(x, f(x))).collect()
}

#[test]
fn first_column_is_y() {
    let pts = samples(&[0.3, -1.0, 2.5, 7.0, 4.0], |x| x.sin() * 3.0 + 1.0);
    let t = finite_differences(&pts);
    assert_eq!(t.kind(), DifferenceKind::Finite);
    assert_eq!(t.size(), 5);
    for (i, p) in pts.iter().enumerate() {
        assert_eq!(t.get(i, 0), p.y);
    }
}

#[test]
fn squares_table() {
    let t = finite_differences(&samples(&[0.0, 1.0, 2.0, 3.0], |x| x * x));
    assert_eq!(t.row_triangle(0), &[0.0, 1.0, 2.0, 0.0]);
    assert_eq!(t.row_triangle(1), &[1.0, 3.0, 2.0]);
    assert_eq!(t.row_triangle(2), &[4.0, 5.0]);
    assert_eq!(t.row_triangle(3), &[9.0]);
    assert_eq!(t.row(3), &[9.0, 0.0, 0.0, 0.0]);
}

#[test]
fn finite_table_ignores_x() {
    let ys = [1.0, -2.0, 0.5, 4.0];
    let even: Vec<Sample> = ys.iter().enumerate().map(|(i, &y)| Sample::new(i as f64, y)).collect();
    let uneven: Vec<Sample> = ys.iter().zip([0.0, 0.1, 5.0, 9.0]).map(|(&y, x)| Sample::new(x, y)).collect();
    assert_eq!(finite_differences(&even).to_vecs(), finite_differences(&uneven).to_vecs());
}

#[test]
fn divided_table_of_squares() {
    let d = divided_differences(&samples(&[0.0, 1.0, 4.0], |x| x * x));
    assert_eq!(d.kind(), DifferenceKind::Divided);
    // f[x0] = 0, f[x0,x1] = 1, f[x0,x1,x2] = 1 (leading coefficient of x^2)
    assert_vec_close(d.row_triangle(0), &[0.0, 1.0, 1.0]);
    assert_vec_close(d.row_triangle(1), &[1.0, 5.0]);
}

#[test]
fn divided_matches_scaled_finite_on_even_grid() {
    let h = 0.5;
    let xs: Vec<f64> = (0..5).map(|i| i as f64 * h).collect();
    let pts = samples(&xs, |x| x * x * x - 2.0 * x);

    let fin = finite_differences(&pts);
    let div = divided_differences(&pts);

    // f[x0..xk] = Δ^k y0 / (k! h^k)
    let mut scale = 1.0;
    for k in 0..5 {
        if k > 0 {
            scale *= k as f64 * h;
        }
        assert!(approx_eq(div.get(0, k), fin.get(0, k) / scale), "order {k}");
    }
}

#[test]
fn cubic_divided_differences_vanish_past_degree() {
    let pts = samples(&[-2.0, -0.5, 0.0, 1.0, 3.0, 3.5], |x| 2.0 * x * x * x - x + 4.0);
    let d = divided_differences(&pts);
    for i in 0..pts.len() - 3 {
        assert!((d.get(i, 3) - 2.0).abs() < 1e-10, "row {i}");
    }
    for i in 0..pts.len() - 4 {
        assert!(d.get(i, 4).abs() < 1e-10, "row {i}");
    }
}
