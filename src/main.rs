use std::ffi::OsString;

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

use profix_intent::config::Config;
use profix_intent::fallback::onnx::OnnxModelLoader;
use profix_intent::intent::IntentClassifier;
use profix_intent::output;

/// ProFix intent: route a free-text service request to a provider category.
///
/// Prints exactly one line: Cleaner, Electrician, Painter, Salon, Carpenter,
/// Mechanic, or a message saying the request is outside what it knows.
/// Settings come from the environment (see `Config`); the command line only
/// carries the request, so there are no flags, not even --help.
#[derive(Parser, Debug)]
#[command(
    name = "profix-intent",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// The customer's request, e.g. "my fan is not working". Any further
    /// arguments are ignored.
    #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

impl Cli {
    fn query(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }
}

/// The query is the first argument after the program name. Anything clap
/// cannot parse (e.g. non-UTF-8 input) is taken verbatim rather than
/// reported.
fn parse_query<I>(argv: I) -> Option<String>
where
    I: IntoIterator<Item = OsString>,
{
    let argv: Vec<OsString> = argv.into_iter().collect();
    let first = || argv.get(1).map(|a| a.to_string_lossy().into_owned());
    match Cli::try_parse_from(&argv) {
        // A lone "--" is swallowed by clap as the end-of-options marker.
        Ok(cli) => cli.query().map(str::to_string).or_else(first),
        Err(err) => {
            debug!(kind = ?err.kind(), "argument parsing failed, using first argument as-is");
            first()
        }
    }
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    let config = Config::load();
    init_logging(config.quiet);

    // No query means nothing to classify; exit quietly.
    let Some(query) = parse_query(std::env::args_os()) else {
        debug!("no query supplied");
        return Ok(());
    };

    let classifier = IntentClassifier::new(OnnxModelLoader::new(config.model_dir));

    let resolution = classifier.resolve(&query);
    debug!(?resolution, "classification finished");

    println!("{}", output::render(&resolution.classification(), config.json)?);
    Ok(())
}

/// Set up structured logging. In quiet mode every event is written to a
/// sink so stdout stays the only channel; this also covers diagnostics the
/// ONNX runtime forwards through tracing.
fn init_logging(quiet: bool) {
    let writer = if quiet {
        BoxMakeWriter::new(std::io::sink)
    } else {
        BoxMakeWriter::new(std::io::stderr)
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("profix_intent=info")),
        )
        .with_writer(writer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query_of(args: &[&str]) -> Option<String> {
        let argv = std::iter::once("profix-intent")
            .chain(args.iter().copied())
            .map(OsString::from);
        parse_query(argv)
    }

    #[test]
    fn test_no_arguments_means_no_query() {
        assert_eq!(query_of(&[]), None);
    }

    #[test]
    fn test_empty_argument_is_a_query() {
        assert_eq!(query_of(&[""]), Some(String::new()));
    }

    #[test]
    fn test_extra_arguments_are_ignored() {
        assert_eq!(query_of(&["fan", "extra"]), Some("fan".to_string()));
        assert_eq!(
            query_of(&["my fan", "-x", "--y"]),
            Some("my fan".to_string())
        );
    }

    #[test]
    fn test_flag_like_queries_are_queries() {
        for q in ["-h", "--help", "--version", "-V", "--json"] {
            assert_eq!(query_of(&[q]), Some(q.to_string()), "{q:?}");
        }
    }

    #[test]
    fn test_double_dash_is_a_query() {
        assert_eq!(query_of(&["--"]), Some("--".to_string()));
    }
}
