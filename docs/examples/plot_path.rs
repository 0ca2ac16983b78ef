// Looped 2-D motion path: 5 waypoints, closed curve.
// Prints JSON with waypoints and 200 evaluation points:
//   {"kx":[...], "ky":[...], "x":[...], "y":[...]}
// Run with `cargo run --example plot_path`.

use cubis::{DiagonalCache, SplineBundle};

fn fmt_arr(v: &[f64]) -> String {
    let inner: Vec<String> = v.iter().map(|x| format!("{x:.6}")).collect();
    format!("[{}]", inner.join(","))
}

fn main() {
    let waypoints = [
        [0.0, 0.0],
        [2.0, 1.0],
        [3.0, 3.0],
        [1.0, 4.0],
        [-1.0, 2.0],
    ];

    let mut cache = DiagonalCache::new();
    let mut path = SplineBundle::new(2);
    path.resize(waypoints.len());
    path.set_looped(true);
    for (i, w) in waypoints.iter().enumerate() {
        path.set_point(i, w).unwrap();
    }
    path.solve(&mut cache);

    let kx: Vec<f64> = waypoints.iter().map(|w| w[0]).collect();
    let ky: Vec<f64> = waypoints.iter().map(|w| w[1]).collect();

    const N: usize = 200;
    let mut x_vals = vec![0.0_f64; N];
    let mut y_vals = vec![0.0_f64; N];
    for i in 0..N {
        let t = waypoints.len() as f64 * i as f64 / N as f64;
        let p = path.evaluate(t);
        x_vals[i] = p[0];
        y_vals[i] = p[1];
    }

    println!(
        "{{\"kx\":{},\"ky\":{},\"x\":{},\"y\":{}}}",
        fmt_arr(&kx),
        fmt_arr(&ky),
        fmt_arr(&x_vals),
        fmt_arr(&y_vals)
    );
}
