use crate::cli::InfoArgs;
use crate::exit_codes;
use crate::output;
use rss_core::types::MeasureType;
use serde::Serialize;

#[derive(Serialize)]
struct InfoOutput {
    mean_rows: usize,
    variance_rows: usize,
    columns: usize,
    activities: Vec<String>,
    sensor_pairs: Vec<String>,
    subjects: Vec<String>,
}

pub fn execute(args: InfoArgs) -> i32 {
    let store = match rss_core::load(&args.dataset.mean_csv, &args.dataset.variance_csv) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Error: {}", e);
            return exit_codes::INPUT_ERROR;
        }
    };

    let info = InfoOutput {
        mean_rows: store.measure_count(MeasureType::Mean),
        variance_rows: store.measure_count(MeasureType::Variance),
        columns: store.columns().len(),
        activities: store.activities(),
        sensor_pairs: store.sensor_pair_labels(),
        subjects: store.subject_ids(),
    };

    if args.json {
        match output::write_json(&info, false, None) {
            Ok(()) => exit_codes::SUCCESS,
            Err(e) => {
                eprintln!("Error: {}", e);
                exit_codes::EXECUTION_ERROR
            }
        }
    } else {
        println!(
            "Dataset: {} mean rows, {} variance rows, {} data columns",
            info.mean_rows, info.variance_rows, info.columns
        );
        println!("Activities:   {}", info.activities.join(", "));
        println!("Sensor pairs: {}", info.sensor_pairs.join(", "));
        println!("Subjects:     {}", info.subjects.join(", "));
        exit_codes::SUCCESS
    }
}
