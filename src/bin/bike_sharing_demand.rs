use env_logger::Env;
use linfa_selection::prelude::*;
use linfa_selection_datasets::BikeSharingDemandSample;

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = WorkflowConfig::bike_sharing_demand();
    let mut reporter = Reporter::stdout();

    run_workflow::<BikeSharingDemandSample, _, _, _>(
        &config,
        bike_sharing_pipeline(),
        Regressor::all(),
        &mut reporter,
    )?;

    Ok(())
}
