use std::env;

use anyhow::Context;
use log::info;

use linear_descent::{
    arch::loss::Mse, config::TrainingConfig, dataset::Dataset, optimization::GradientDescent,
    training::Trainer,
};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = match env::args().nth(1) {
        Some(path) => TrainingConfig::from_file(&path)
            .with_context(|| format!("failed to load config from '{path}'"))?,
        None => TrainingConfig::default(),
    };
    info!("using {config:?}");

    let mut rng = config.rng();
    let dataset = Dataset::synthetic(
        &mut rng,
        config.samples,
        config.true_weight,
        config.true_bias,
        config.noise_std,
    )?;
    info!(
        "generated {} sample(s) around y = {} * x + {}",
        dataset.len(),
        config.true_weight,
        config.true_bias
    );

    let mut model = config.initial_model();
    let optimizer = GradientDescent::new(config.learning_rate)?;
    info!("gradient descent with learning rate {}", optimizer.learning_rate());
    let mut trainer = Trainer::new(optimizer, Mse);
    let history = trainer.fit(&mut model, &dataset, config.epochs)?;

    for record in history.records() {
        println!("{record}");
    }
    println!(
        "Final: W={:1.2} b={:1.2} (true W={} b={})",
        model.weight(),
        model.bias(),
        config.true_weight,
        config.true_bias
    );

    if let Some(path) = &config.history_path {
        history
            .save(path)
            .with_context(|| format!("failed to write history to '{}'", path.display()))?;
        info!("history written to {}", path.display());
    }

    Ok(())
}
