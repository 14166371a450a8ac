use std::path::PathBuf;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use twolayer_nn::{Matrix, NetError, NetSpec, TrainConfig, TwoLayerNet};

fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("twolayer_nn_{}_{name}", std::process::id()))
}

#[test]
fn trained_network_round_trips() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let net = TwoLayerNet::from_rng(4, 6, 3, 1e-1, &mut rng).unwrap();
    let x = Matrix::randn(10, 4, 1.0, &mut rng);

    let path = scratch_path("net.json");
    net.save_json(&path).unwrap();
    let loaded = TwoLayerNet::load_json(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded, net);
    assert_eq!(loaded.scores(&x).unwrap(), net.scores(&x).unwrap());
}

#[test]
fn inconsistent_shapes_are_rejected_on_load() {
    // b1 has three entries but W1 has two hidden columns.
    let json = r#"{
        "params": {
            "w1": { "rows": 1, "cols": 2, "data": [[1.0, 2.0]] },
            "b1": { "rows": 1, "cols": 3, "data": [[0.0, 0.0, 0.0]] },
            "w2": { "rows": 2, "cols": 2, "data": [[1.0, 0.0], [0.0, 1.0]] },
            "b2": { "rows": 1, "cols": 2, "data": [[0.0, 0.0]] }
        }
    }"#;
    let path = scratch_path("bad_net.json");
    std::fs::write(&path, json).unwrap();
    let result = TwoLayerNet::load_json(&path);
    std::fs::remove_file(&path).ok();

    assert!(matches!(result, Err(NetError::ShapeMismatch { op: "b1", .. })));
}

#[test]
fn matrix_data_must_match_its_declared_shape() {
    // w1 claims two rows but stores one; the network would index past it.
    let json = r#"{
        "params": {
            "w1": { "rows": 2, "cols": 2, "data": [[1.0, 2.0]] },
            "b1": { "rows": 1, "cols": 2, "data": [[0.0, 0.0]] },
            "w2": { "rows": 2, "cols": 2, "data": [[1.0, 0.0], [0.0, 1.0]] },
            "b2": { "rows": 1, "cols": 2, "data": [[0.0, 0.0]] }
        }
    }"#;
    let path = scratch_path("short_net.json");
    std::fs::write(&path, json).unwrap();
    let result = TwoLayerNet::load_json(&path);
    std::fs::remove_file(&path).ok();

    assert!(matches!(result, Err(NetError::Json(_))));
}

#[test]
fn ragged_matrix_rows_are_rejected_on_load() {
    let json = r#"{
        "params": {
            "w1": { "rows": 2, "cols": 2, "data": [[1.0, 2.0], [3.0]] },
            "b1": { "rows": 1, "cols": 2, "data": [[0.0, 0.0]] },
            "w2": { "rows": 2, "cols": 2, "data": [[1.0, 0.0], [0.0, 1.0]] },
            "b2": { "rows": 1, "cols": 2, "data": [[0.0, 0.0]] }
        }
    }"#;
    let path = scratch_path("ragged_net.json");
    std::fs::write(&path, json).unwrap();
    let result = TwoLayerNet::load_json(&path);
    std::fs::remove_file(&path).ok();

    assert!(matches!(result, Err(NetError::Json(_))));
}

#[test]
fn missing_file_is_an_io_error() {
    let result = TwoLayerNet::load_json(scratch_path("does_not_exist.json"));
    assert!(matches!(result, Err(NetError::Io(_))));
}

#[test]
fn garbage_is_a_json_error() {
    let path = scratch_path("garbage.json");
    std::fs::write(&path, "not json").unwrap();
    let result = NetSpec::load_json(&path);
    std::fs::remove_file(&path).ok();

    assert!(matches!(result, Err(NetError::Json(_))));
}

#[test]
fn spec_round_trips_and_builds() {
    let spec = NetSpec { std: 0.5, ..NetSpec::new(3, 7, 2) };
    let path = scratch_path("spec.json");
    spec.save_json(&path).unwrap();
    let loaded = NetSpec::load_json(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded, spec);
    let a = loaded.build(&mut ChaCha8Rng::seed_from_u64(4)).unwrap();
    let b = spec.build(&mut ChaCha8Rng::seed_from_u64(4)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn partial_train_config_fills_defaults() {
    let path = scratch_path("partial_config.json");
    std::fs::write(&path, r#"{ "num_iters": 1500, "verbose": true }"#).unwrap();
    let config = TrainConfig::load_json(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(config.num_iters, 1500);
    assert!(config.verbose);
    assert_eq!(config.batch_size, TrainConfig::default().batch_size);
    assert_eq!(config.learning_rate, TrainConfig::default().learning_rate);
}

#[test]
fn invalid_train_config_is_rejected_on_load() {
    let path = scratch_path("bad_config.json");
    std::fs::write(&path, r#"{ "batch_size": 0 }"#).unwrap();
    let result = TrainConfig::load_json(&path);
    std::fs::remove_file(&path).ok();

    assert!(matches!(result, Err(NetError::InvalidHyperparameter { name: "batch_size", .. })));
}
