//! Walks the pulmonary network through progressively richer evidence and
//! prints how the differential shifts at each step.

use anyhow::Result;
use diagnet::common::setup::init_logging;
use diagnet::network::pulmonary::{disease_display_name, symptom_display_name};
use diagnet::{DiagnosisSession, Network, NetworkSpec, print_blue, print_green};

fn show_probabilities(session: &DiagnosisSession, title: &str) -> Result<()> {
    println!();
    print_green!("{}", title);
    println!("{}", "=".repeat(60));

    println!("\nDISEASE PROBABILITIES:");
    println!("{}", "-".repeat(60));
    print!("{}", session.posteriors_all()?.render_table(disease_display_name));

    println!("\nSYMPTOM PROBABILITIES:");
    println!("{}", "-".repeat(60));
    for symptom in session.symptom_probabilities()? {
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
    Ok(())
}

fn main() -> Result<()> {
    init_logging();
    let network = Network::from_spec(&NetworkSpec::pulmonary())?;
    let mut session = DiagnosisSession::new(network);

    print_blue!("BAYESIAN NETWORK - PROBABILITY UPDATES");

    show_probabilities(&session, "BASELINE (No symptoms observed)")?;

    session.observe("Fever", true)?;
    show_probabilities(&session, "AFTER OBSERVING: Fever")?;

    session.observe("Crackles", true)?;
    show_probabilities(&session, "AFTER OBSERVING: Fever + Crackles")?;

    session.observe("Progressive_Dyspnea", true)?;
    show_probabilities(&session, "AFTER OBSERVING: Fever + Crackles + Dyspnea")?;

    session.observe("Calcified_Plaques", true)?;
    show_probabilities(&session, "AFTER OBSERVING: + Calcified Pleural Plaques")?;

    println!();
    println!("{}", session.explain("Asbestosis")?.narrative);
    Ok(())
}
