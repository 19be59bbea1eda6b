use env_logger::Env;
use linfa_selection::prelude::*;
use linfa_selection_datasets::WineQualitySample;

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = WorkflowConfig::wine_quality();
    let mut reporter = Reporter::stdout();

    run_workflow::<WineQualitySample, _, _, _>(
        &config,
        wine_quality_pipeline(),
        Classifier::all(),
        &mut reporter,
    )?;

    Ok(())
}
