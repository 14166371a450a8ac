// Demo: trains the two-layer classifier on three synthetic Gaussian blobs.
//
//   cargo run                         # built-in hyperparameters
//   cargo run -- train_config.json    # hyperparameters from a TrainConfig JSON file
//
// Set RUST_LOG=debug to also see every epoch boundary.
use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use twolayer_nn::{make_blobs, NetSpec, TrainConfig};

const SEED: u64 = 231;

fn main() -> twolayer_nn::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            info!("loading training config from {path}");
            TrainConfig::load_json(path)?
        }
        None => TrainConfig {
            learning_rate: 1e-1,
            reg: 1e-3,
            num_iters: 500,
            batch_size: 50,
            verbose: true,
            ..TrainConfig::default()
        },
    };

    let mut rng = ChaCha8Rng::seed_from_u64(SEED);

    let centers = vec![
        vec![3.0, 0.0, 0.0, 0.0],
        vec![0.0, 3.0, 0.0, 0.0],
        vec![0.0, 0.0, 3.0, 3.0],
    ];
    let mut data = make_blobs(&centers, 120, 0.8, &mut rng)?;
    data.shuffle(&mut rng);
    let (train, val) = data.split_at(300);
    info!("{} training rows, {} validation rows, {} features", train.len(), val.len(), train.num_features());

    let mut net = NetSpec { std: 1e-1, ..NetSpec::new(4, 10, centers.len()) }.build(&mut rng)?;
    let history = net.train(
        &train.features,
        &train.labels,
        &val.features,
        &val.labels,
        &config,
        &mut rng,
    )?;

    info!(
        "done after {} iterations ({} epochs): loss {:.4} -> {:.4}",
        history.loss_history.len(),
        history.epochs(),
        history.loss_history.first().copied().unwrap_or(f64::NAN),
        history.final_loss().unwrap_or(f64::NAN),
    );
    info!(
        "final train accuracy {:.3}, validation accuracy {:.3}",
        history.final_train_accuracy().unwrap_or(0.0),
        net.accuracy(&val.features, &val.labels)?,
    );

    Ok(())
}
