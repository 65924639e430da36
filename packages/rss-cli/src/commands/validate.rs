use crate::cli::ValidateArgs;
use crate::exit_codes;
use crate::output;
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct ValidateOutput {
    mean_csv: String,
    variance_csv: String,
    mean_exists: bool,
    variance_exists: bool,
    schema_ok: bool,
    rows: Option<usize>,
    error: Option<String>,
}

pub fn execute(args: ValidateArgs) -> i32 {
    let mean_exists = Path::new(&args.dataset.mean_csv).is_file();
    let variance_exists = Path::new(&args.dataset.variance_csv).is_file();

    let (schema_ok, rows, error) = if !mean_exists {
        (
            false,
            None,
            Some(format!("File not found: {}", args.dataset.mean_csv)),
        )
    } else if !variance_exists {
        (
            false,
            None,
            Some(format!("File not found: {}", args.dataset.variance_csv)),
        )
    } else {
        match rss_core::load(&args.dataset.mean_csv, &args.dataset.variance_csv) {
            Ok(store) => (true, Some(store.len()), None),
            Err(e) => (false, None, Some(e.to_string())),
        }
    };

    let result = ValidateOutput {
        mean_csv: args.dataset.mean_csv.clone(),
        variance_csv: args.dataset.variance_csv.clone(),
        mean_exists,
        variance_exists,
        schema_ok,
        rows,
        error: error.clone(),
    };

    if args.json {
        if let Err(e) = output::write_json(&result, false, None) {
            eprintln!("Error: {}", e);
            return exit_codes::EXECUTION_ERROR;
        }
    } else if let Some(ref err) = error {
        eprintln!("Error: {}", err);
    } else {
        println!(
            "Dataset is valid ({} observations after concatenation)",
            rows.unwrap_or(0)
        );
    }

    if error.is_some() {
        exit_codes::INPUT_ERROR
    } else {
        exit_codes::SUCCESS
    }
}
