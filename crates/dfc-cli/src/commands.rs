use anyhow::{Result, bail};
use comfy_table::Table;

use dfc_cli::pipeline::{CleanRunOptions, CleanRunResult, run_clean};
use dfc_clean::STATE_CODES;

use crate::cli::CleanArgs;
use crate::summary::apply_table_style;

pub fn run_clean_command(args: &CleanArgs) -> Result<CleanRunResult> {
    let Ok(delimiter) = u8::try_from(args.delimiter) else {
        bail!("delimiter must be a single ASCII character");
    };
    let output_dir = args.output_dir.clone().unwrap_or_else(|| {
        args.input
            .parent()
            .map_or_else(|| std::path::PathBuf::from("output"), |dir| dir.join("output"))
    });
    let as_of = args
        .as_of
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    let options = CleanRunOptions {
        input: args.input.clone(),
        output_dir,
        preamble_lines: args.skip_lines,
        delimiter,
        as_of,
        dry_run: args.dry_run,
    };
    run_clean(&options)
}

pub fn run_states() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Code", "Kind"]);
    apply_table_style(&mut table);
    for code in STATE_CODES {
        table.add_row(vec![code, code_kind(code)]);
    }
    println!("{table}");
    Ok(())
}

fn code_kind(code: &str) -> &'static str {
    match code {
        "DC" => "Federal district",
        "GU" | "MP" | "PR" | "VI" => "Territory",
        _ => "State",
    }
}
