use anyhow::{Context, Result};
use diagnet::common::setup::{CommandLineOptions, OutputFormat, parse_configuration_options};
use diagnet::inference::SymptomProbability;
use diagnet::network::pulmonary::{disease_display_name, symptom_display_name};
use diagnet::{
    Evidence, Explanation, GeneratedCase, InferenceEngine, Network, NetworkSpec, PosteriorTable,
    print_blue, print_green, print_yellow,
};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

#[derive(Serialize)]
struct Report {
    evidence: Evidence,
    ranking: Vec<(String, f64)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    symptoms: Option<Vec<SymptomProbability>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    explanation: Option<Explanation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    case: Option<GeneratedCase>,
}

fn load_network(options: &CommandLineOptions) -> Result<Network> {
    match &options.network_file {
        Some(path) => Network::load_from_file(path),
        None => {
            info!("Using the built-in pulmonary network");
            Network::from_spec(&NetworkSpec::pulmonary()).context("Invalid built-in network")
        }
    }
}

fn print_table(
    table: &PosteriorTable,
    symptoms: Option<&[SymptomProbability]>,
    explanation: Option<&Explanation>,
    case: Option<&GeneratedCase>,
) {
    print_blue!("DISEASE PROBABILITIES");
    println!("{}", "-".repeat(60));
    print!("{}", table.render_table(disease_display_name));

    if let Some(symptoms) = symptoms {
        println!();
        print_blue!("SYMPTOM PROBABILITIES");
        println!("{}", "-".repeat(60));
        for symptom in symptoms {
            let status = match symptom.observed {
                Some(true) => "[OBSERVED: Present]",
                Some(false) => "[OBSERVED: Absent]",
                None => "",
            };
            println!(
                "  {:45} {:>6.1}%  {}",
                symptom_display_name(&symptom.name),
                symptom.probability * 100.0,
                status
            );
        }
    }

    if let Some(explanation) = explanation {
        println!();
        print_yellow!("EXPLANATION: {}", disease_display_name(&explanation.disease));
        println!("{}", explanation.narrative);
    }

    if let Some(case) = case {
        println!();
        print_green!("GENERATED CASE: {}", case.true_diseases.join(", "));
        for symptom in case.present_symptoms() {
            println!("  {}", symptom_display_name(symptom));
        }
    }
}

fn main() -> Result<()> {
    let options = parse_configuration_options();
    let network = load_network(&options)?;
    let engine = InferenceEngine::new(network);

    let evidence: Evidence = options.evidence.iter().cloned().collect();
    let table = engine.posteriors_all(&evidence)?;

    let symptoms = if options.show_marginals {
        Some(engine.symptom_probabilities(&evidence)?)
    } else {
        None
    };
    let explanation = options
        .explain
        .as_deref()
        .map(|disease| engine.explain(disease, &evidence))
        .transpose()?;
    let case = match &options.sample_case {
        Some(diseases) => {
            let mut rng = match options.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            Some(diagnet::sample_case(engine.network(), diseases.as_slice(), &mut rng)?)
        }
        None => None,
    };

    match options.output_format {
        OutputFormat::Table => print_table(
            &table,
            symptoms.as_deref(),
            explanation.as_ref(),
            case.as_ref(),
        ),
        OutputFormat::Json => {
            let report = Report {
                evidence,
                ranking: table.ranked(),
                symptoms,
                explanation,
                case,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
