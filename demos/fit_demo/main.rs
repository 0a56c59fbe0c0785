//! Fit demo: fits a Fourier series to a synthetic closed curve and prints
//! the exported formula and coefficient list in plain and LaTeX styles.
//!
//! ```text
//! main.rs    - entry point (this file)
//! shapes.rs  - synthetic sample loops
//! ```
//!
//! Usage:
//! ```text
//! cargo run --example fit_demo                                  # default (cardioid)
//! cargo run --example fit_demo -- star                          # named shape
//! cargo run --example fit_demo -- square --harmonics 12 --terms 5
//! ```

mod shapes;

use fourier_curve::export::{CoefficientList, ExpandedFormula, ExportParams, FormulaStyle};
use fourier_curve::sampling::SampleCurve;
use fourier_curve::series::{FitParams, FourierSeries, Terms};
use fourier_curve::CurveError;

/// Parsed CLI arguments.
struct CliArgs {
    /// Shape name to fit.
    shape: String,
    /// Harmonics computed per axis.
    harmonics: usize,
    /// Terms exported, `-1` for all.
    terms: i64,
}

/// Parse CLI arguments: a shape name plus `--harmonics N` and `--terms N`.
///
/// Returns a message naming the flag if a numeric value does not parse.
fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let value_of = |flag: &str| {
        args.iter()
            .position(|a| a == flag)
            .map(|i| args.get(i + 1).cloned().unwrap_or_default())
    };
    let harmonics = match value_of("--harmonics") {
        Some(v) => v
            .parse()
            .map_err(|_| format!("--harmonics expects a positive integer, got {v:?}"))?,
        None => fourier_curve::series::DEFAULT_HARMONICS,
    };
    let terms = match value_of("--terms") {
        Some(v) => v
            .parse()
            .map_err(|_| format!("--terms expects -1 or a non-negative integer, got {v:?}"))?,
        None => -1,
    };
    let shape = args
        .iter()
        .enumerate()
        .find(|(i, a)| {
            !a.starts_with('-')
                && !(*i > 0 && matches!(args[i - 1].as_str(), "--harmonics" | "--terms"))
        })
        .map(|(_, a)| a.clone())
        .unwrap_or_else(|| "cardioid".to_string());

    Ok(CliArgs {
        shape,
        harmonics,
        terms,
    })
}

fn main() -> Result<(), CurveError> {
    // Default: WARN for everything, INFO for the crate and this demo.
    // Override with RUST_LOG (e.g. RUST_LOG=fourier_curve=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("fit_demo=info".parse().unwrap_or_default())
        .add_directive("fourier_curve=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let argv: Vec<String> = std::env::args().skip(1).collect();
    let args = match parse_args(&argv) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("[fit_demo] {message}");
            return Ok(());
        }
    };
    let Some((xs, ys)) = shapes::generate(&args.shape) else {
        eprintln!("[fit_demo] unknown shape: {}", args.shape);
        eprintln!("[fit_demo] available: {}", shapes::SHAPES.join(", "));
        return Ok(());
    };

    let series = FourierSeries::new(&xs, &ys, FitParams::new(args.harmonics))?;
    let terms = Terms::from_signed(args.terms)?;
    tracing::info!(
        shape = %args.shape,
        samples = xs.len(),
        harmonics = series.harmonics(),
        perimeter = series.perimeter(),
        "fitted"
    );

    // Worst distance between a sample and the fitted curve at the same time.
    let curve = series.evaluator(terms)?;
    let max_error = series
        .samples()
        .points()
        .iter()
        .zip(series.times())
        .map(|(p, &t)| (curve.point(t) - p).norm())
        .fold(0.0, f64::max);
    let polyline = SampleCurve::new(&curve).execute()?;
    tracing::info!(max_error, polyline_points = polyline.len(), "reconstruction");

    for style in [FormulaStyle::Plain, FormulaStyle::Latex] {
        let params = ExportParams {
            style,
            ..ExportParams::default()
        };
        println!("{}", ExpandedFormula::new(&series).with_params(params).execute(terms)?);
        println!("{}", CoefficientList::new(&series).with_params(params).execute(terms)?);
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn defaults() {
        let args = parse_args(&[]).unwrap();
        assert_eq!(args.shape, "cardioid");
        assert_eq!(args.harmonics, fourier_curve::series::DEFAULT_HARMONICS);
        assert_eq!(args.terms, -1);
    }

    #[test]
    fn shape_and_counts() {
        let args = parse_args(&argv(&["--harmonics", "12", "square", "--terms", "5"])).unwrap();
        assert_eq!(args.shape, "square");
        assert_eq!(args.harmonics, 12);
        assert_eq!(args.terms, 5);
    }

    #[test]
    fn unparsable_counts_are_rejected() {
        let err = parse_args(&argv(&["--terms", "abc"])).err().unwrap();
        assert!(err.contains("--terms"));
        let err = parse_args(&argv(&["star", "--harmonics", "abc"])).err().unwrap();
        assert!(err.contains("--harmonics"));
        assert!(parse_args(&argv(&["--harmonics"])).is_err());
    }
}
