use super::*;
use crate::nn::Neuron;
use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_mlp(seed: u64) -> MLP {
    let mut rng = StdRng::seed_from_u64(seed);
    MLP::with_rng(4, &[5, 5], 1, &mut rng).unwrap()
}

#[test]
fn test_parameter_count() {
    let mlp = seeded_mlp(0);
    // 5 * (4 + 1) + 5 * (5 + 1) + 1 * (5 + 1)
    assert_eq!(mlp.num_parameters(), 61);
    assert_eq!(mlp.sizes(), vec![4, 5, 5, 1]);
    assert_eq!(mlp.input_size(), 4);
    assert_eq!(mlp.output_size(), 1);
    assert_eq!(mlp.layers().len(), 3);
}

#[test]
fn test_single_output_predict_is_scalar() {
    let mlp = seeded_mlp(0);
    let inputs = Value::from_slice(&[2.0, 3.0, -1.0, 0.5]);
    match mlp.predict(&inputs).unwrap() {
        Output::Scalar(v) => assert!(v.data() > -1.0 && v.data() < 1.0),
        Output::Vector(vs) => panic!("Expected a scalar, got {} outputs", vs.len()),
    }
}

#[test]
fn test_multi_output_predict_is_vector() {
    let mut rng = StdRng::seed_from_u64(1);
    let mlp = MLP::with_rng(2, &[3], 2, &mut rng).unwrap();
    let out = mlp.predict(&Value::from_slice(&[0.5, -0.5])).unwrap();
    assert_eq!(out.len(), 2);
    assert!(out.clone().into_scalar().is_none());
    assert_eq!(out.into_vec().len(), 2);
}

#[test]
fn test_forward_is_deterministic() {
    let mlp = seeded_mlp(21);
    let x = [1.0, -2.0, 0.5, 0.25];
    let a = mlp.forward(&Value::from_slice(&x)).unwrap();
    let b = mlp.forward(&Value::from_slice(&x)).unwrap();
    assert_eq!(a[0].data(), b[0].data());
}

#[test]
fn test_forward_accepts_numbers_or_nodes() {
    let mlp = seeded_mlp(3);
    let raw = [0.25, -1.0, 2.0, 0.0];
    let from_numbers = mlp.forward_f64(&raw).unwrap();
    let from_nodes = mlp.forward(&Value::from_slice(&raw)).unwrap();
    assert_eq!(from_numbers.len(), 1);
    assert_eq!(from_numbers[0].data(), from_nodes[0].data());
    assert!(matches!(
        mlp.forward_f64(&[1.0]),
        Err(GradError::ArityMismatch { .. })
    ));
}

#[test]
fn test_same_seed_same_network() {
    let a = seeded_mlp(8);
    let b = seeded_mlp(8);
    let pa: Vec<f64> = a.parameters().iter().map(Value::data).collect();
    let pb: Vec<f64> = b.parameters().iter().map(Value::data).collect();
    assert_eq!(pa, pb);
}

#[test]
fn test_zero_width_is_rejected() {
    let mut rng = StdRng::seed_from_u64(0);
    for (input, hidden, output) in [(0, vec![5], 1), (4, vec![5, 0], 1), (4, vec![5], 0)] {
        let result = MLP::with_rng(input, &hidden, output, &mut rng);
        assert!(
            matches!(result, Err(GradError::InvalidArchitecture(_))),
            "sizes {} {:?} {} should be rejected",
            input,
            hidden,
            output
        );
    }
}

#[test]
fn test_no_hidden_layers() {
    let mut rng = StdRng::seed_from_u64(0);
    let mlp = MLP::with_rng(3, &[], 1, &mut rng).unwrap();
    assert_eq!(mlp.layers().len(), 1);
    assert_eq!(mlp.num_parameters(), 4);
}

#[test]
fn test_wrong_input_length() {
    let mlp = seeded_mlp(0);
    let result = mlp.forward(&Value::from_slice(&[1.0, 2.0, 3.0]));
    assert!(matches!(
        result,
        Err(GradError::ArityMismatch {
            expected: 4,
            actual: 3,
            ..
        })
    ));
}

#[test]
fn test_named_parameters() {
    let mlp = seeded_mlp(0);
    let named = mlp.named_parameters();
    assert_eq!(named.len(), 61);
    assert_eq!(named[0].0, "layers.0.neurons.0.weight.0");
    assert_eq!(named[4].0, "layers.0.neurons.0.bias");
    assert_eq!(named[60].0, "layers.2.neurons.0.bias");
    let params = mlp.parameters();
    for (p, (_, q)) in params.iter().zip(&named) {
        assert!(p.ptr_eq(q));
    }
}

#[test]
fn test_from_layers_checks_chaining() {
    let mut rng = StdRng::seed_from_u64(0);
    let ok = MLP::from_layers(vec![Layer::new(2, 3, &mut rng), Layer::new(3, 1, &mut rng)]);
    assert!(ok.is_ok());
    let bad = MLP::from_layers(vec![Layer::new(2, 3, &mut rng), Layer::new(4, 1, &mut rng)]);
    assert!(matches!(bad, Err(GradError::InvalidArchitecture(_))));
    assert!(MLP::from_layers(Vec::new()).is_err());
}

#[test]
fn test_hand_built_network_value() {
    // 1 -> 1 -> 1 with known weights: tanh(0.5 * tanh(2x + 0.1) - 0.2)
    let l0 = Layer::from_neurons(vec![Neuron::from_parameters(
        vec![Value::new(2.0)],
        Value::new(0.1),
    )])
    .unwrap();
    let l1 = Layer::from_neurons(vec![Neuron::from_parameters(
        vec![Value::new(0.5)],
        Value::new(-0.2),
    )])
    .unwrap();
    let mlp = MLP::from_layers(vec![l0, l1]).unwrap();
    let x = 0.3;
    let y = mlp.predict(&[Value::new(x)]).unwrap().into_scalar().unwrap();
    let expected = (0.5 * (2.0 * x + 0.1_f64).tanh() - 0.2).tanh();
    assert_relative_eq!(y.data(), expected, epsilon = 1e-12);
}

#[test]
fn test_zero_grad_after_backward() {
    let mlp = seeded_mlp(4);
    let y = mlp
        .predict(&Value::from_slice(&[1.0, 1.0, 1.0, 1.0]))
        .unwrap()
        .into_scalar()
        .unwrap();
    y.backward();
    assert!(mlp.parameters().iter().any(|p| p.grad() != 0.0));
    mlp.zero_grad();
    assert!(mlp.parameters().iter().all(|p| p.grad() == 0.0));
}
