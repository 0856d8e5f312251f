use expected_levenshtein::*;
use std::ops::ControlFlow;

fn init_log() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn binary_length_two() {
    init_log();
    let tables = estimate(2, 1000, &[0u8, 1]).unwrap();
    assert_eq!(tables.len(), 2);
    let last = tables.last().unwrap();
    assert_eq!(last.shape(), (3, 3));
    assert_eq!(last.bottom_right().round(), 1.);
}

#[test]
fn single_length_matches_exact_expectation() {
    init_log();
    // Over all 16 binary pairs of length 2: 4 at distance 0, 8 at 1 and 4 at 2.
    let d = average_for_length(2, 20000, &[0u8, 1]).unwrap();
    assert!((d.bottom_right() - 1.).abs() < 0.05, "{d}");
    // Single symbols differ half the time.
    assert!((d[(1, 1)] - 0.5).abs() < 0.05, "{d}");
}

#[test]
fn expected_distance_grows_with_length() {
    init_log();
    let averager =
        MonteCarloAverager::new(Alphabet::dna(), SamplingParams::new(12, 300).with_seed(31415))
            .unwrap();
    let tables = averager.estimate();
    let curve = tables.last().unwrap().diagonal();
    assert_eq!(curve.len(), 13);
    assert_eq!(curve[0], 0.);
    for w in curve.windows(2) {
        assert!(w[0] < w[1], "{curve:?}");
    }
    // Never more than the length, and for 4 letters clearly above half of it.
    for (n, &d) in curve.iter().enumerate().skip(1) {
        assert!(d <= n as f64);
        assert!(d > 0.5 * n as f64, "{curve:?}");
    }
}

#[test]
fn single_sample_equals_that_sample() {
    let params = SamplingParams::new(6, 1).with_seed(7);
    let averager = MonteCarloAverager::new(Alphabet::dna(), params).unwrap();
    let sample = averager.samples(6).next().unwrap();
    let mean = averager.average_for_length(6).unwrap();
    assert_eq!(mean, sample);
    // A single sample has integer distances.
    assert!(mean.as_slice().iter().all(|x| x.fract() == 0.));
}

#[test]
fn streaming_samples_average_to_estimate() {
    let params = SamplingParams::new(5, 40).with_seed(11);
    let averager = MonteCarloAverager::new(Alphabet::binary(), params).unwrap();

    let samples = averager.samples(5).collect::<Vec<_>>();
    let mut sum = DistanceMatrix::zeros(6, 6);
    for s in &samples {
        for i in 0..6 {
            for j in 0..6 {
                sum[(i, j)] += s[(i, j)];
            }
        }
    }
    let mean = averager.average_for_length(5).unwrap();
    for i in 0..6 {
        for j in 0..6 {
            let plain = sum[(i, j)] / samples.len() as f64;
            assert!((mean[(i, j)] - plain).abs() <= 1e-9 * plain.max(1.));
        }
    }
}

#[test]
fn seeded_runs_are_reproducible() {
    let params = SamplingParams::new(8, 50).with_seed(42);
    let a = MonteCarloAverager::new(Alphabet::dna(), params.clone())
        .unwrap()
        .estimate();
    let b = MonteCarloAverager::new(Alphabet::dna(), params)
        .unwrap()
        .estimate();
    assert_eq!(a, b);
}

#[test]
fn early_stop_returns_completed_lengths() {
    init_log();
    let averager =
        MonteCarloAverager::new(Alphabet::binary(), SamplingParams::new(20, 10).with_seed(1))
            .unwrap();
    let mut calls = 0;
    let tables = averager.estimate_with(|stats| {
        calls += 1;
        assert_eq!(stats.lengths, calls);
        assert_eq!(stats.samples, 10 * calls);
        if stats.lengths == 3 {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    });
    assert_eq!(calls, 3);
    assert_eq!(tables.len(), 3);
    assert_eq!(tables[2].shape(), (4, 4));
}

#[test]
fn errors() {
    assert_eq!(estimate::<char>(5, 5, &[]), Err(Error::InvalidAlphabet));
    assert_eq!(estimate(5, 0, &['a', 'b']), Err(Error::InsufficientSamples(0)));
    assert_eq!(
        MonteCarloAverager::new(Alphabet::dna(), SamplingParams::new(0, 5)).unwrap_err(),
        Error::InvalidLength(0)
    );
    assert_eq!(
        Error::InsufficientSamples(0).to_string(),
        "At least one sample per length is required, got 0"
    );
}

#[test]
fn json_export_shape() {
    let d = average_for_length(3, 10, &['x', 'y']).unwrap();
    let json = serde_json::to_value(d.to_rows()).unwrap();
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 4);
    assert!(rows.iter().all(|r| r.as_array().unwrap().len() == 4));
    let back: DistanceMatrix = serde_json::from_str(&serde_json::to_string(&d).unwrap()).unwrap();
    assert_eq!(back.shape(), d.shape());
    for (x, y) in std::iter::zip(back.as_slice(), d.as_slice()) {
        assert!((x - y).abs() < 1e-12);
    }
}

#[cfg(feature = "parallel")]
#[test]
fn parallel_is_close_to_sequential() {
    init_log();
    let params = SamplingParams::new(6, 4000).with_seed(5);
    let seq = MonteCarloAverager::new(Alphabet::binary(), params.clone())
        .unwrap()
        .average_for_length(6)
        .unwrap();
    let par = MonteCarloAverager::new(Alphabet::binary(), params.with_parallel(true))
        .unwrap()
        .average_for_length(6)
        .unwrap();
    for (x, y) in std::iter::zip(seq.as_slice(), par.as_slice()) {
        assert!((x - y).abs() < 0.1, "{x} vs {y}");
    }
}
