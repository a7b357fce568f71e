//! Sliding-window vs convolution parity, checked over random rings.

use neural_field::{
    cconv, cconv_direct, sliding_step, weight_vector, FieldError, KernelFamily, KernelParams,
    NeuralField, TransferFunction,
};
use proptest::prelude::*;

fn ring() -> impl Strategy<Value = Vec<f64>> {
    (1usize..80).prop_flat_map(|n| prop::collection::vec(-1.0f64..1.0, n))
}

fn kernel_params() -> impl Strategy<Value = KernelParams> {
    (0.0f64..4.0, 0.0f64..=1.0, 0.0f64..=1.0, 0.01f64..90.0)
        .prop_map(|(ae, ke, ki, si)| KernelParams::new(ae, ke, ki, si))
}

fn tolerance(activation: &[f64], params: &KernelParams) -> f64 {
    let mass: f64 = activation.iter().map(|f| f.abs()).sum();
    1e-9 * (1.0 + params.amplitude * mass)
}

proptest! {
    #[test]
    fn sliding_window_matches_fft_convolution(fu in ring(), params in kernel_params()) {
        let w = weight_vector(KernelFamily::Step, fu.len(), &params);
        let generic = cconv(&fu, &w).unwrap();
        let sliding = sliding_step(&fu, &params);

        let tol = tolerance(&fu, &params);
        for (i, (a, b)) in generic.iter().zip(&sliding).enumerate() {
            prop_assert!((a - b).abs() <= tol, "unit {}: {} vs {}", i, a, b);
        }
    }

    #[test]
    fn sliding_window_matches_integer_radii(
        fu in ring(),
        ae in 0.0f64..4.0,
        ki in 0.0f64..=1.0,
        si in 0u32..45,
        half in any::<bool>(),
    ) {
        // Integer radii sit exactly on the window corners
        let si = f64::from(si);
        let params = KernelParams::new(ae, if half { 0.5 } else { 1.0 }, ki, si);
        let w = weight_vector(KernelFamily::Step, fu.len(), &params);
        let direct = cconv_direct(&fu, &w).unwrap();
        let sliding = sliding_step(&fu, &params);

        let tol = tolerance(&fu, &params);
        for (a, b) in direct.iter().zip(&sliding) {
            prop_assert!((a - b).abs() <= tol);
        }
    }

    #[test]
    fn weight_vectors_are_toric_symmetric(n in 1usize..120, params in kernel_params()) {
        for family in KernelFamily::ALL {
            let w = weight_vector(family, n, &params);
            for i in 0..n {
                prop_assert_eq!(w[i].to_bits(), w[(n - i) % n].to_bits());
            }
        }
    }

    #[test]
    fn whole_ring_radius_gives_uniform_inhibition(fu in ring(), ae in 0.0f64..4.0, ki in 0.0f64..=1.0) {
        let n = fu.len();
        // ke = 0 leaves only the unit itself in the excitatory window
        let params = KernelParams::new(ae, 0.0, ki, (n - 1) as f64);
        let total: f64 = fu.iter().sum();
        let sliding = sliding_step(&fu, &params);

        let tol = tolerance(&fu, &params);
        for (i, v) in sliding.iter().enumerate() {
            let expected = ae * fu[i] - ki * ae * total;
            prop_assert!((v - expected).abs() <= tol);
        }
    }

    #[test]
    fn mismatched_input_is_rejected(n in 1usize..40, extra in 1usize..5) {
        let mut field = NeuralField::new(n, KernelFamily::OptimStep, TransferFunction::sigmoid()).unwrap();
        field.set_params(&[0.1, 0.0, 1.0, 0.5, 0.5, 3.0]).unwrap();
        let before = field.get_output();

        let err = field.step(&vec![0.0; n + extra]).unwrap_err();
        prop_assert_eq!(err, FieldError::InputSizeMismatch { expected: n, actual: n + extra });
        prop_assert_eq!(field.get_output(), before);
    }
}

#[test]
fn four_unit_scenario() {
    let fu = [1.0, 0.0, 1.0, 0.0];
    let params = KernelParams::new(2.0, 0.5, 0.5, 1.0);

    let w = weight_vector(KernelFamily::Step, 4, &params);
    // Self weight Ae - Ai, neighbours -Ai, opposite unit out of reach
    assert_eq!(w, vec![1.0, -1.0, 0.0, -1.0]);

    let generic = cconv(&fu, &w).unwrap();
    let sliding = sliding_step(&fu, &params);
    let expected = [1.0, -2.0, 1.0, -2.0];
    for i in 0..4 {
        assert!((generic[i] - expected[i]).abs() < 1e-12);
        assert_eq!(sliding[i], expected[i]);
    }
}

#[test]
fn step_and_optim_step_fields_agree() {
    let n = 64;
    let input: Vec<f64> = (0..n)
        .map(|i| {
            let d = i as f64 - 20.0;
            1.5 * (-d * d / 40.0).exp()
        })
        .collect();
    let params = [0.1, -0.2, 0.2, 0.3, 0.6, 12.5];

    let mut fields: Vec<NeuralField> = ["step", "optim_step"]
        .into_iter()
        .map(|name| NeuralField::with_kernel_name(n, name, TransferFunction::Rectified).unwrap())
        .collect();
    for field in &mut fields {
        field.set_params(&params).unwrap();
        field.step_n(&input, 20).unwrap();
    }

    for (a, b) in fields[0].potential().iter().zip(fields[1].potential()) {
        assert!((a - b).abs() < 1e-9, "{} vs {}", a, b);
    }
}
