use bmp_filters::filters::{gaussian, grayscale, sobel};
use bmp_filters::{bmp, DecodedBmp};
use serde::Serialize;
use std::env;
use std::fs;
use std::path::Path;

const DEFAULT_RADIUS: i32 = 3;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() < 3 {
        return Err(usage());
    }
    let input = Path::new(&args[0]);
    let output = Path::new(&args[1]);
    let filter = args[2].as_str();

    let decoded = bmp::load(input).map_err(|e| format!("failed to load {}: {e}", input.display()))?;
    log::debug!("loaded {}: {:?}", input.display(), decoded.file_header);

    match filter {
        "headers" => return write_header_report(input, output, &decoded),
        "grayscale" | "gaussian" | "sobel" => check_output_extension(output)?,
        other => return Err(format!("unknown filter '{other}'\n{}", usage())),
    }

    let gray = grayscale(&decoded.pixels);
    let result = match filter {
        "grayscale" => gray,
        "gaussian" => {
            let radius = match args.get(3) {
                Some(raw) => raw
                    .parse::<i32>()
                    .map_err(|_| format!("invalid radius '{raw}'\n{}", usage()))?,
                None => DEFAULT_RADIUS,
            };
            let mut blurred = gray;
            gaussian(&mut blurred, radius).map_err(|e| e.to_string())?;
            blurred
        }
        "sobel" => sobel(&gray).magnitude,
        _ => unreachable!(),
    };

    bmp::save(output, &result).map_err(|e| format!("failed to save {}: {e}", output.display()))?;
    println!(
        "Saved {} output ({}x{}) to {}",
        filter,
        result.w,
        result.h,
        output.display()
    );
    Ok(())
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct HeaderReport<'a> {
    input: String,
    dimensions: String,
    file_header: &'a bmp::FileHeader,
    info_header: &'a bmp::InfoHeader,
}

fn write_header_report(input: &Path, output: &Path, decoded: &DecodedBmp) -> Result<(), String> {
    let report = HeaderReport {
        input: input.display().to_string(),
        dimensions: format!(
            "{}x{}",
            decoded.info_header.width, decoded.info_header.height
        ),
        file_header: &decoded.file_header,
        info_header: &decoded.info_header,
    };
    let json = serde_json::to_string_pretty(&report)
        .map_err(|e| format!("failed to serialize header report: {e}"))?;
    fs::write(output, json)
        .map_err(|e| format!("failed to write {}: {e}", output.display()))?;
    println!("Saved header report to {}", output.display());
    Ok(())
}

/// Output extension dispatch: only the BMP container is implemented.
fn check_output_extension(output: &Path) -> Result<(), String> {
    let ext = output
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .ok_or_else(|| format!("invalid output '{}': no file extension", output.display()))?;
    match ext.as_str() {
        "bmp" => Ok(()),
        "png" | "jpg" | "jpeg" => Err(format!("{ext} output is not yet supported")),
        other => Err(format!("unrecognized output extension '{other}'")),
    }
}

fn usage() -> String {
    "Usage: bmp-filters <input.bmp> <output> <grayscale|gaussian|sobel|headers> [radius]".to_string()
}
