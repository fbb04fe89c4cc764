mod config;

use std::{borrow::Cow, env, fs, process};

use billsplit_application::BillSplitService;
use billsplit_domain::{SettlementMatcher, ShareCalculator};
use billsplit_infrastructure::{CodecError, PayloadFormat, decode_state, encode_results};
use billsplit_presentation::{SplitPresenter, format_invalid_input};
use config::InterpreterConfig;
use tracing_subscriber::EnvFilter;

type CliResult<T> = Result<T, Cow<'static, str>>;

const USAGE: &str = "Usage: billsplit_interpreter <state.json> [--json]";

fn main() {
    init_logging();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> CliResult<()> {
    let config = InterpreterConfig::from_env().map_err(|err| err.to_string())?;

    let mut args = env::args().skip(1);
    let Some(path) = args.next() else {
        return Err(USAGE.into());
    };
    let as_json = match args.next().as_deref() {
        None => false,
        Some("--json") => true,
        Some(_) => return Err(USAGE.into()),
    };

    let source =
        fs::read_to_string(&path).map_err(|err| format!("Failed to read '{path}': {err}"))?;

    let format = match config.input_format {
        Some(format) => format,
        None => PayloadFormat::detect(&source).map_err(describe_codec_error)?,
    };
    tracing::debug!(?format, ?config, "Decoding bill split state");

    let state = decode_state(&source, format).map_err(describe_codec_error)?;

    let service = BillSplitService::new(
        ShareCalculator::new(config.share_rounding),
        SettlementMatcher::new(config.match_strategy),
    );
    let results = service.calculate(&state).map_err(|err| {
        tracing::warn!(error = %err, "Bill split rejected");
        format_invalid_input(&err)
    })?;

    if as_json {
        println!("{}", encode_results(&results).map_err(describe_codec_error)?);
    } else {
        println!("{}", SplitPresenter::render(&results));
    }

    Ok(())
}

fn describe_codec_error(err: CodecError) -> Cow<'static, str> {
    match err {
        CodecError::InvalidInput(invalid) => format_invalid_input(&invalid).into(),
        other => other.to_string().into(),
    }
}
