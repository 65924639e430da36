use crate::cli::ChartArgs;
use crate::exit_codes;
use crate::output;
use rss_core::types::{MeasureType, Selection};

pub fn execute(args: ChartArgs) -> i32 {
    let measure: MeasureType = match args.measure.parse() {
        Ok(m) => m,
        Err(e) => {
            eprintln!("Error: {}", e);
            return exit_codes::INPUT_ERROR;
        }
    };

    let store = match rss_core::load(&args.dataset.mean_csv, &args.dataset.variance_csv) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Error: {}", e);
            return exit_codes::INPUT_ERROR;
        }
    };

    let selection = Selection {
        measure,
        subject_id: args.subject.clone(),
        activity: args.activity.clone(),
        sensor_pairs: args.sensors.clone(),
    };

    let chart = rss_core::chart_data(&store, &selection);
    if chart.rows.is_empty() {
        log::warn!("Selection matched no data; emitting an empty chart");
    }

    match output::write_json(&chart, args.compact, args.output.as_deref()) {
        Ok(()) => exit_codes::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit_codes::EXECUTION_ERROR
        }
    }
}
