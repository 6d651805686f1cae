use ndarray::prelude::*;
use nmsimplex::prelude::*;

fn quadratic(x: ArrayView1<f64>) -> f64 {
    x.iter().map(|xi| xi * xi).sum()
}

fn rosenbrock(x: ArrayView1<f64>) -> f64 {
    let p = 1.0 - x[0];
    let q = x[1] - x[0] * x[0];
    p * p + 100.0 * q * q
}

fn himmelblau(x: ArrayView1<f64>) -> f64 {
    let p = x[0] * x[0] + x[1] - 11.0;
    let q = x[0] + x[1] * x[1] - 7.0;
    p * p + q * q
}

fn zero(_: ArrayView1<f64>) -> f64 {
    0.0
}

#[test]
fn test_rosenbrock() {
    let xmin = minimize(rosenbrock, &array![-2.0, 2.0], 0.1);
    assert!(
        rosenbrock(xmin.view()) < 1e-6,
        "{} -> {}",
        xmin,
        rosenbrock(xmin.view())
    );
}

#[test]
fn test_himmelblau() {
    let xmin = minimize(himmelblau, &array![0.0, 0.0], 0.1);
    assert!(himmelblau(xmin.view()) < 1e-6);

    let minima = [
        (3.0, 2.0),
        (-2.805118, 3.131312),
        (-3.779310, -3.283186),
        (3.584428, -1.848126),
    ];
    assert!(
        minima
            .iter()
            .any(|&(a, b)| (xmin[0] - a).abs() < 1e-3 && (xmin[1] - b).abs() < 1e-3),
        "{} is not a known minimum",
        xmin
    );
}

#[test]
fn test_zero_terminates() {
    let res = NelderMead::default()
        .minimize(zero, &array![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 1.0)
        .unwrap();
    assert_eq!(res.termination, Termination::Stagnation);
    assert!(res.iters < NelderMeadOptions::default().max_iterations());
}

#[test]
fn test_starting_grid() {
    let targets: [(&str, fn(ArrayView1<f64>) -> f64); 4] = [
        ("quadratic", quadratic),
        ("rosenbrock", rosenbrock),
        ("himmelblau", himmelblau),
        ("zero", zero),
    ];
    for x in [-100.0, -2.1, -2.0, -1.0, 0.0, 1.0, 2.0, 50.0, 200.0] {
        for y in [-200.0, -2.0, -1.0, 0.0, 1.0, 2.0, 5.0, 100.0] {
            let x0 = array![x, y];
            for &(name, f) in targets.iter() {
                let xmin = minimize(f, &x0, 0.1);
                assert!(
                    f(xmin.view()) < 1e-6,
                    "{}: {} -> {} -> {}",
                    name,
                    x0,
                    xmin,
                    f(xmin.view())
                );
            }
        }
    }
}

#[test]
fn test_quadratic_12d() {
    let x0 = Array1::from_iter((1..=12).map(|i| i as f64));
    let xmin = minimize(quadratic, &x0, 0.1);
    for (i, xi) in xmin.iter().enumerate() {
        assert!(
            xi.abs() < 1e-6,
            "wrong result for x_{}: expected 0, got {}",
            i,
            xi
        );
    }
}

#[test]
fn test_scalar() {
    let f = |x: ArrayView1<f64>| (x[0] - 0.75).powi(2) + 1.0;
    let res = NelderMead::default()
        .minimize(f, &array![-10.0], 1.0)
        .unwrap();
    assert!((res.xmin[0] - 0.75).abs() < 1e-3);
    assert!((res.fmin - 1.0).abs() < 1e-6);
}

#[test]
fn test_order_and_objective_agree() {
    let x0 = array![-1.2, 1.0];
    let a = minimize(rosenbrock, &x0, 0.1);
    let b = minimize_with_order(
        |x: ArrayView1<f64>, y: ArrayView1<f64>| rosenbrock(x) < rosenbrock(y),
        &x0,
        0.1,
    );
    assert_eq!(a, b);
}
