use std::fs;
use std::path::Path;
use std::process::Command;

use eyeslash_icons::{generate, GeneratorConfig, STANDARD_SIZES};

fn config_for(dir: &Path) -> GeneratorConfig {
    GeneratorConfig {
        out_dir: Some(dir.to_path_buf()),
        ..Default::default()
    }
}

fn sorted_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("read out dir")
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn run_writes_four_decodable_icons() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let out = tmp.path().join("nested").join("icons");

    let report = generate(&config_for(&out)).expect("generate");
    assert!(report.is_complete());
    assert_eq!(report.out_dir, out);

    assert_eq!(
        sorted_names(&out),
        vec!["icon-128.png", "icon-16.png", "icon-32.png", "icon-48.png"]
    );

    for size in STANDARD_SIZES {
        let path = out.join(format!("icon-{}.png", size));
        let bytes = fs::read(&path).unwrap();
        assert_eq!(&bytes[0..8], b"\x89PNG\r\n\x1a\n");

        let img = image::open(&path).expect("decode png");
        assert_eq!((img.width(), img.height()), (size, size));
        assert_eq!(img.color(), image::ColorType::Rgba8);

        let rendered = eyeslash_icons::render(size).unwrap();
        assert_eq!(img.to_rgba8().as_raw(), rendered.pixels.as_raw());
    }
}

#[test]
fn rerun_overwrites_with_identical_files() {
    let tmp = tempfile::tempdir().unwrap();
    let cfg = config_for(tmp.path());

    generate(&cfg).unwrap();
    let first = fs::read(tmp.path().join("icon-32.png")).unwrap();

    fs::write(tmp.path().join("icon-32.png"), b"stale").unwrap();
    let report = generate(&cfg).unwrap();
    assert!(report.is_complete());

    let second = fs::read(tmp.path().join("icon-32.png")).unwrap();
    assert_eq!(first, second);
}

#[test]
fn one_failing_size_does_not_stop_the_others() {
    let tmp = tempfile::tempdir().unwrap();
    // A directory where the file should go makes the write fail
    fs::create_dir(tmp.path().join("icon-48.png")).unwrap();

    let report = generate(&config_for(tmp.path())).expect("run still completes");
    assert_eq!(report.outcomes.len(), 4);

    let failed: Vec<u32> = report.failed().map(|o| o.size).collect();
    assert_eq!(failed, vec![48]);
    assert!(matches!(
        report.outcomes[2].result,
        Err(eyeslash_icons::Error::Encode { .. })
    ));

    for size in [16, 32, 128] {
        assert!(tmp.path().join(format!("icon-{}.png", size)).is_file());
    }
    assert_eq!(report.succeeded().count(), 3);
}

#[test]
fn unusable_output_dir_aborts_before_rendering() {
    let tmp = tempfile::tempdir().unwrap();
    let blocker = tmp.path().join("not-a-dir");
    fs::write(&blocker, b"file").unwrap();

    let err = generate(&config_for(&blocker.join("icons"))).unwrap_err();
    assert!(matches!(err, eyeslash_icons::Error::OutputDir { .. }));
}

#[test]
fn binary_reports_progress_and_completion() {
    let tmp = tempfile::tempdir().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_eyeslash-icons"))
        .arg("--out-dir")
        .arg(tmp.path())
        .env_remove("RUST_LOG")
        .output()
        .expect("run binary");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Generating"));
    assert!(stdout.contains(&tmp.path().display().to_string()));
    for size in STANDARD_SIZES {
        assert!(stdout.contains(&format!("Created icon-{}.png ({}x{}px)", size, size, size)));
    }
    assert!(stdout.contains("All icons created successfully!"));
    assert_eq!(sorted_names(tmp.path()).len(), 4);
}

#[test]
fn binary_exits_cleanly_on_partial_failure() {
    let tmp = tempfile::tempdir().unwrap();
    fs::create_dir(tmp.path().join("icon-48.png")).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_eyeslash-icons"))
        .arg("--out-dir")
        .arg(tmp.path())
        .output()
        .expect("run binary");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to create icon-48.png"));
    assert!(stdout.contains("3 of 4 icons created (1 failed)"));
}
