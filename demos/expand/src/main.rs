#[macro_use]
extern crate log;

use dialoguer::{theme::ColorfulTheme, Input, Select};
use kernel_expansion::{FeatureExpansion, Kernel, KernelExpansion, Params, DEFAULT_SIGMA};
use nalgebra::{DMatrix, Dim, Matrix};
use time_series_generator::generate_sine_wave;

const NUM_TIME_DELAY_TAPS: usize = 3;

pub(crate) fn main() {
    pretty_env_logger::init();

    let kernels = [Kernel::Linear, Kernel::Polynomial, Kernel::RadialBasis];
    let names = ["Linear", "Polynomial", "Radial Basis"];
    let k = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Select kernel")
        .items(&names)
        .default(0)
        .interact()
        .unwrap();
    let kernel = kernels[k];

    let mut params = Params::new(kernel, 0, NUM_TIME_DELAY_TAPS);
    if kernel != Kernel::Linear {
        params.d = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Expansion order")
            .default(2_usize)
            .interact_text()
            .unwrap();
    }
    if kernel.uses_sigma() {
        params.sigma = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Sigma")
            .default(DEFAULT_SIGMA)
            .interact_text()
            .unwrap();
    }

    if let Err(e) = run(params) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(params: Params) -> kernel_expansion::Result<()> {
    let expansion = KernelExpansion::new(params)?;

    let values: Vec<f64> = generate_sine_wave(100);
    info!("got {} datapoints", values.len());
    let inputs = delay_embed(&values, NUM_TIME_DELAY_TAPS);
    info!("inputs.nrows(): {}, inputs.ncols(): {}", inputs.nrows(), inputs.ncols());

    let full_features = expansion.expand_rows(&inputs)?;
    info!(
        "kernel {:?} expanded {} inputs into {} features",
        expansion.kernel(),
        expansion.input_dim(),
        full_features.ncols()
    );

    // the dot products of expanded rows reproduce the kernel
    let mut max_err: f64 = 0.0;
    for i in 1..inputs.nrows() {
        let x: Vec<f64> = inputs.row(i - 1).iter().cloned().collect();
        let y: Vec<f64> = inputs.row(i).iter().cloned().collect();
        let k = expansion.kernel_value(&x, &y)?;
        let dot = full_features.row(i - 1).dot(&full_features.row(i));
        max_err = max_err.max((k - dot).abs());
    }
    info!("max deviation between kernel and feature dot products: {:e}", max_err);

    Ok(())
}

/// Rows hold the current value followed by its predecessors
fn delay_embed(values: &[f64], num_taps: usize) -> DMatrix<f64> {
    let nrows = values.len().saturating_sub(num_taps - 1);
    Matrix::from_fn_generic(Dim::from_usize(nrows), Dim::from_usize(num_taps), |i, j| {
        values[i + num_taps - 1 - j]
    })
}
