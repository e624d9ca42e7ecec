use clap::{Arg, ArgAction, Command, ValueEnum, builder::EnumValueParser};
use env_logger::{Builder, Env};
use serde::Deserialize;
use std::io::Write;

/// How query results are written to stdout
#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable ranked table
    #[serde(rename = "table")]
    Table,

    /// Machine-readable JSON
    #[serde(rename = "json")]
    Json,
}

/// These options define the inputs from the user.
/// Nothing is owned by basic data types so this class can be easily freely around.
#[derive(Deserialize, Clone, Debug)]
pub struct CommandLineOptions {
    /// JSON network description; the built-in pulmonary network when absent
    pub network_file: Option<String>,
    pub evidence: Vec<(String, bool)>,
    pub explain: Option<String>,
    pub sample_case: Option<Vec<String>>,
    pub seed: Option<u64>,
    pub show_marginals: bool,
    pub output_format: OutputFormat,
}

/// Installs the process-wide logger with the `level [file:line] message` layout.
pub fn init_logging() {
    let _ = Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let file = record.file().unwrap_or("unknown");
            let line = record.line().unwrap_or(0);
            writeln!(
                buf,
                "{} [{}:{}] {}",
                record.level(),
                file,
                line,
                record.args()
            )
        })
        .try_init();
}

/// Parses a single `Symptom=true` observation.
pub fn parse_observation(raw: &str) -> Result<(String, bool), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected SYMPTOM=true|false, got '{}'", raw))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing symptom name in '{}'", raw));
    }
    let observed = match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "present" | "1" => true,
        "false" | "no" | "absent" | "0" => false,
        other => return Err(format!("invalid observation value '{}'", other)),
    };
    Ok((name.to_string(), observed))
}

pub fn build_command() -> Command {
    Command::new("DIAGNET")
        .version("1.0")
        .about("Exact Noisy-OR inference for differential diagnosis.")
        .arg(
            Arg::new("network_file")
                .long("network_file")
                .value_name("FILE")
                .help("JSON network description (defaults to the built-in pulmonary network)"),
        )
        .arg(
            Arg::new("evidence")
                .long("evidence")
                .short('e')
                .value_name("SYMPTOM=BOOL")
                .help("Observed symptom, e.g. Fever=true (repeatable, comma separated)")
                .value_delimiter(',')
                .value_parser(parse_observation)
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("explain")
                .long("explain")
                .value_name("DISEASE")
                .help("Explain the posterior of a disease under the given evidence"),
        )
        .arg(
            Arg::new("sample_case")
                .long("sample_case")
                .value_name("DISEASES")
                .help("Generate a synthetic case for the comma-separated diseases")
                .value_delimiter(',')
                .num_args(0..)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_name("NUMBER")
                .help("Random seed for case sampling (optional)")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new("show_marginals")
                .long("show_marginals")
                .help("Print symptom probabilities next to the disease ranking")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output_format")
                .long("output_format")
                .value_parser(EnumValueParser::<OutputFormat>::new())
                .help("Output format: 'table' or 'json'")
                .default_value("table"),
        )
}

pub fn options_from_args<I, T>(args: I) -> Result<CommandLineOptions, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let matches = build_command().try_get_matches_from(args)?;
    let network_file = matches.get_one::<String>("network_file").cloned();
    let evidence = matches
        .get_many::<(String, bool)>("evidence")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();
    let explain = matches.get_one::<String>("explain").cloned();
    let sample_case = matches.get_many::<String>("sample_case").map(|values| {
        values
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect()
    });
    let seed = matches.get_one::<u64>("seed").copied();
    let show_marginals = matches.get_flag("show_marginals");
    let output_format = matches
        .get_one::<OutputFormat>("output_format")
        .copied()
        .unwrap_or(OutputFormat::Table);

    Ok(CommandLineOptions {
        network_file,
        evidence,
        explain,
        sample_case,
        seed,
        show_marginals,
        output_format,
    })
}

pub fn parse_configuration_options() -> CommandLineOptions {
    init_logging();
    options_from_args(std::env::args_os()).unwrap_or_else(|e| e.exit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_observation() {
        assert_eq!(parse_observation("Fever=true"), Ok(("Fever".to_string(), true)));
        assert_eq!(parse_observation(" Crackles = absent"), Ok(("Crackles".to_string(), false)));
        assert!(parse_observation("Fever").is_err());
        assert!(parse_observation("=true").is_err());
        assert!(parse_observation("Fever=maybe").is_err());
    }

    #[test]
    fn test_options_from_args() {
        let options = options_from_args([
            "diagnet",
            "--evidence",
            "Fever=true,Crackles=false",
            "-e",
            "Hemoptysis=yes",
            "--explain",
            "Pneumonia",
            "--seed",
            "7",
            "--output_format",
            "json",
        ])
        .unwrap();

        assert_eq!(options.evidence.len(), 3);
        assert_eq!(options.evidence[1], ("Crackles".to_string(), false));
        assert_eq!(options.explain.as_deref(), Some("Pneumonia"));
        assert_eq!(options.seed, Some(7));
        assert_eq!(options.output_format, OutputFormat::Json);
        assert!(options.network_file.is_none());
        assert!(options.sample_case.is_none());
        assert!(!options.show_marginals);
    }

    #[test]
    fn test_sample_case_list() {
        let options =
            options_from_args(["diagnet", "--sample_case", "Pneumonia,PE", "--show_marginals"]).unwrap();
        assert_eq!(
            options.sample_case,
            Some(vec!["Pneumonia".to_string(), "PE".to_string()])
        );
        assert!(options.show_marginals);
        assert_eq!(options.output_format, OutputFormat::Table);
    }
}
