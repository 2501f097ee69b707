//! Finite-difference verification of every backward rule.
//!
//! Each check builds a scalar loss `L = Σ w[i] * forward(x)[i]` for a fixed
//! weight vector `w`, so the analytic gradient is exactly the op's backward
//! invoked with `w` as the upstream gradient. Central differences on the
//! inputs must agree.

use minigrad_core::ops::{
    add_backward, add_op, dot_backward, dot_op, log_softmax_backward, log_softmax_op,
    mul_backward, mul_op, relu_backward, relu_op, sum_backward, sum_op,
};
use minigrad_core::{OpContext, Value};

const EPS: f64 = 1e-5;
const REL_TOL: f64 = 1e-6;

fn unwrap_vector(value: Value<f64>) -> Vec<f64> {
    match value {
        Value::Vector(v) => v,
        other => panic!("expected a vector, got {:?}", other),
    }
}

fn weighted_loss(output: &[f64], weights: &[f64]) -> f64 {
    output.iter().zip(weights.iter()).map(|(o, w)| o * w).sum()
}

fn numerical_gradient<F>(f: F, point: &[f64]) -> Vec<f64>
where
    F: Fn(&[f64]) -> f64,
{
    let mut grads = vec![0.0; point.len()];
    for i in 0..point.len() {
        let mut plus = point.to_vec();
        plus[i] += EPS;
        let mut minus = point.to_vec();
        minus[i] -= EPS;
        grads[i] = (f(&plus) - f(&minus)) / (2.0 * EPS);
    }
    grads
}

fn check_close(analytical: &[f64], numerical: &[f64], name: &str) {
    assert_eq!(analytical.len(), numerical.len(), "{name}: length mismatch");
    for (i, (a, n)) in analytical.iter().zip(numerical.iter()).enumerate() {
        let denom = a.abs().max(n.abs()).max(1e-8);
        let rel_err = (a - n).abs() / denom;
        assert!(
            rel_err < REL_TOL,
            "{name}[{i}]: analytical={a}, numerical={n}, rel_err={rel_err}"
        );
    }
}

#[test]
fn mul_gradients_match_finite_differences() {
    let a = vec![0.5, -1.2, 2.0];
    let b = vec![1.5, 0.3, -0.7];
    let w = vec![1.0, -2.0, 0.5];

    let mut ctx = OpContext::new();
    mul_op(&mut ctx, &Value::Vector(a.clone()), &Value::Vector(b.clone())).unwrap();
    let (grad_a, grad_b) = mul_backward(&ctx, &Value::Vector(w.clone())).unwrap();

    let num_a = numerical_gradient(
        |xs| {
            let mut c = OpContext::new();
            let out = mul_op(&mut c, &Value::Vector(xs.to_vec()), &Value::Vector(b.clone()))
                .unwrap();
            weighted_loss(&unwrap_vector(out), &w)
        },
        &a,
    );
    let num_b = numerical_gradient(
        |ys| {
            let mut c = OpContext::new();
            let out = mul_op(&mut c, &Value::Vector(a.clone()), &Value::Vector(ys.to_vec()))
                .unwrap();
            weighted_loss(&unwrap_vector(out), &w)
        },
        &b,
    );

    check_close(&unwrap_vector(grad_a), &num_a, "mul grad_a");
    check_close(&unwrap_vector(grad_b), &num_b, "mul grad_b");
}

#[test]
fn add_gradients_match_finite_differences() {
    let a = vec![0.5, -1.2, 2.0];
    let b = vec![1.5, 0.3, -0.7];
    let w = vec![0.25, 1.0, -3.0];

    let mut ctx = OpContext::new();
    add_op(&mut ctx, &Value::Vector(a.clone()), &Value::Vector(b.clone())).unwrap();
    let (grad_a, grad_b) = add_backward(&ctx, &Value::Vector(w.clone())).unwrap();

    let num_a = numerical_gradient(
        |xs| {
            let mut c = OpContext::new();
            let out = add_op(&mut c, &Value::Vector(xs.to_vec()), &Value::Vector(b.clone()))
                .unwrap();
            weighted_loss(&unwrap_vector(out), &w)
        },
        &a,
    );

    check_close(&unwrap_vector(grad_a), &num_a, "add grad_a");
    // Addition is symmetric; both gradients are the upstream itself.
    assert_eq!(unwrap_vector(grad_b), w);
}

#[test]
fn dot_gradients_match_finite_differences() {
    let a = vec![0.5, -1.2, 2.0, 0.1];
    let b = vec![1.5, 0.3, -0.7, 2.2];
    let w = vec![1.7];

    let mut ctx = OpContext::new();
    dot_op(&mut ctx, &Value::Vector(a.clone()), &Value::Vector(b.clone())).unwrap();
    let (grad_a, grad_b) = dot_backward(&ctx, &Value::Vector(w.clone())).unwrap();

    let num_a = numerical_gradient(
        |xs| {
            let mut c = OpContext::new();
            let out = dot_op(&mut c, &Value::Vector(xs.to_vec()), &Value::Vector(b.clone()))
                .unwrap();
            weighted_loss(&unwrap_vector(out), &w)
        },
        &a,
    );
    let num_b = numerical_gradient(
        |ys| {
            let mut c = OpContext::new();
            let out = dot_op(&mut c, &Value::Vector(a.clone()), &Value::Vector(ys.to_vec()))
                .unwrap();
            weighted_loss(&unwrap_vector(out), &w)
        },
        &b,
    );

    check_close(&unwrap_vector(grad_a), &num_a, "dot grad_a");
    check_close(&unwrap_vector(grad_b), &num_b, "dot grad_b");
}

#[test]
fn sum_gradient_matches_finite_differences() {
    let x = vec![0.5, -1.2, 2.0];
    let w = vec![-0.8];

    let mut ctx = OpContext::new();
    sum_op(&mut ctx, &Value::Vector(x.clone())).unwrap();
    let grad = sum_backward(&ctx, &Value::Vector(w.clone())).unwrap();

    let num = numerical_gradient(
        |xs| {
            let mut c = OpContext::new();
            let out = sum_op(&mut c, &Value::Vector(xs.to_vec())).unwrap();
            weighted_loss(&unwrap_vector(out), &w)
        },
        &x,
    );

    check_close(&unwrap_vector(grad), &num, "sum grad");
}

#[test]
fn relu_gradient_matches_finite_differences() {
    // Points chosen away from the kink at zero, where the derivative exists.
    let x = vec![0.5, -1.2, 2.0, -0.3];
    let w = vec![1.0, 2.0, -1.0, 0.5];

    let mut ctx = OpContext::new();
    relu_op(&mut ctx, &Value::Vector(x.clone())).unwrap();
    let grad = relu_backward(&ctx, &Value::Vector(w.clone())).unwrap();

    let num = numerical_gradient(
        |xs| {
            let mut c = OpContext::new();
            let out = relu_op(&mut c, &Value::Vector(xs.to_vec())).unwrap();
            weighted_loss(&unwrap_vector(out), &w)
        },
        &x,
    );

    check_close(&unwrap_vector(grad), &num, "relu grad");
}

#[test]
fn log_softmax_gradient_matches_finite_differences() {
    let x = vec![0.1, 0.7, -0.4, 1.3];
    let w = vec![1.0, -1.0, 0.5, 0.25];

    let mut ctx = OpContext::new();
    log_softmax_op(&mut ctx, &Value::Vector(x.clone())).unwrap();
    let grad = log_softmax_backward(&ctx, &Value::Vector(w.clone())).unwrap();

    let num = numerical_gradient(
        |xs| {
            let mut c = OpContext::new();
            let out = log_softmax_op(&mut c, &Value::Vector(xs.to_vec())).unwrap();
            weighted_loss(&unwrap_vector(out), &w)
        },
        &x,
    );

    check_close(&unwrap_vector(grad), &num, "log_softmax grad");
}
