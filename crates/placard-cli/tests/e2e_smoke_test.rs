use std::{
    fs,
    path::{Path, PathBuf},
};

use clap::Parser;
use tempfile::tempdir;

use placard_cli::Args;

fn demos_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../demos")
}

/// Collects all .json files from a directory
fn collect_json_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("json")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

fn args(input: &Path, output: &Path, extra: &[&str]) -> Args {
    let mut argv = vec![
        "placard".to_string(),
        input.to_string_lossy().to_string(),
        "--output".to_string(),
        output.to_string_lossy().to_string(),
        "--log-level".to_string(),
        "off".to_string(),
    ];
    argv.extend(extra.iter().map(|s| s.to_string()));
    Args::parse_from(argv)
}

#[test]
fn e2e_smoke_test_valid_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let valid_demos = collect_json_files(demos_dir());

    assert!(!valid_demos.is_empty(), "No valid demos found in demos/");

    let mut failed_demos = Vec::new();

    for demo_path in &valid_demos {
        let output_filename = format!("{}.svg", demo_path.file_stem().unwrap().to_string_lossy());
        let output_path = temp_dir.path().join(output_filename);

        match placard_cli::run(&args(demo_path, &output_path, &[])) {
            Ok(()) => {
                let svg = fs::read_to_string(&output_path).expect("Output written");
                assert!(svg.contains("<svg"), "{} produced no SVG", demo_path.display());
            }
            Err(e) => failed_demos.push((demo_path.clone(), e)),
        }
    }

    if !failed_demos.is_empty() {
        eprintln!("\nValid demos that failed:");
        for (path, err) in &failed_demos {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} valid demo(s) failed unexpectedly", failed_demos.len());
    }
}

#[test]
fn e2e_smoke_test_error_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let error_demos = collect_json_files(demos_dir().join("errors"));

    assert!(
        !error_demos.is_empty(),
        "No error demos found in demos/errors/"
    );

    let mut unexpectedly_succeeded = Vec::new();

    for demo_path in &error_demos {
        let output_filename = format!(
            "error_{}.svg",
            demo_path.file_stem().unwrap().to_string_lossy()
        );
        let output_path = temp_dir.path().join(output_filename);

        if placard_cli::run(&args(demo_path, &output_path, &[])).is_ok() {
            unexpectedly_succeeded.push(demo_path.clone());
        }
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError demos that unexpectedly succeeded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error demo(s) succeeded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }
}

#[test]
fn e2e_missing_input_writes_placeholder() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("missing.svg");

    placard_cli::run(&args(
        &temp_dir.path().join("does-not-exist.json"),
        &output_path,
        &[],
    ))
    .expect("A missing document still renders");

    let svg = fs::read_to_string(&output_path).expect("Output written");
    assert!(svg.contains("Loading..."));
}

#[test]
fn e2e_pointer_renders_popover() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = demos_dir().join("itil-framework.json");

    let idle_path = temp_dir.path().join("idle.svg");
    placard_cli::run(&args(&input, &idle_path, &[])).expect("Idle render");
    let idle = fs::read_to_string(&idle_path).unwrap();
    assert!(!idle.contains("data-layer=\"popover\""));

    // The foundation spans the lower part of the default 1200x800 canvas.
    let hovered_path = temp_dir.path().join("hovered.svg");
    placard_cli::run(&args(&input, &hovered_path, &["--pointer", "600,700"]))
        .expect("Hovered render");
    let hovered = fs::read_to_string(&hovered_path).unwrap();
    assert!(hovered.contains("data-layer=\"popover\""));
    assert!(hovered.contains("Holds the configuration items"));
}

#[test]
fn e2e_viewport_flags_and_config() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(
        &config_path,
        "[canvas]\nwidth = 900\nfunnel_height = 600\n\n[style]\nfont_family = \"Verdana\"\n",
    )
    .unwrap();

    let input = demos_dir().join("task-funnel.json");
    let output_path = temp_dir.path().join("funnel.svg");
    let config = config_path.to_string_lossy().to_string();
    placard_cli::run(&args(&input, &output_path, &["--config", &config]))
        .expect("Configured render");

    let svg = fs::read_to_string(&output_path).unwrap();
    assert!(svg.contains("viewBox=\"0 0 900 600\""));
    assert!(svg.contains("Verdana"));

    let narrow_path = temp_dir.path().join("narrow.svg");
    placard_cli::run(&args(
        &input,
        &narrow_path,
        &["--config", &config, "--width", "640", "--height", "480"],
    ))
    .expect("Resized render");
    let svg = fs::read_to_string(&narrow_path).unwrap();
    assert!(svg.contains("viewBox=\"0 0 640 480\""));
}

#[test]
fn e2e_zero_width_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = demos_dir().join("task-funnel.json");
    let output_path = temp_dir.path().join("zero.svg");

    let result = placard_cli::run(&args(&input, &output_path, &["--width", "0"]));
    assert!(matches!(result, Err(placard::PlacardError::Export(_))));
}

#[test]
fn e2e_unwritable_output_is_io_error() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = demos_dir().join("task-funnel.json");
    let output_path = temp_dir.path().join("no-such-dir").join("out.svg");

    let result = placard_cli::run(&args(&input, &output_path, &[]));
    assert!(matches!(result, Err(placard::PlacardError::Io(_))));
}
