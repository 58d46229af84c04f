use objstats::{write_reports, ObjStats, ReportStyle};

use std::io::Write;
use std::path::PathBuf;

use approx::assert_relative_eq;
use tempfile::{NamedTempFile, TempDir};

const CUBE: &str = "\
# unit cube, one corner at the origin
o cube
v 0.0 0.0 0.0
v 1.0 0.0 0.0
v 1.0 1.0 0.0
v 0.0 1.0 0.0
v 0.0 0.0 1.0
v 1.0 0.0 1.0
v 1.0 1.0 1.0
v 0.0 1.0 1.0
vt 0.0 0.0
vt 1.0 0.0
vn 0.0 0.0 -1.0
vn 0.0 0.0 1.0
s off
f 1 4 3 2
f 5 6 7 8
f 1 2 6 5
f 2 3 7 6
f 3 4 8
f 3 8 7
f 4 1 5 8
";

const TRIANGLE: &str = "v 0.0 0.0 0.0\nv 1.0 2.0 3.0\nv -1.0 5.0 0.5\nf 1 2 3\n";

fn model(source: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(source.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn cube_statistics() {
    let file = model(CUBE);
    let stats = ObjStats::from_path(file.path()).unwrap();

    assert_eq!(stats.vertices, 8);
    assert_eq!(stats.texture_vertices, 2);
    assert_eq!(stats.parameter_vertices, 0);
    assert_eq!(stats.normals, 2);
    assert_eq!(stats.faces, 7);
    assert_eq!(stats.quad_faces, 5);
    assert_eq!(stats.triangular_faces, 2);
    assert_eq!(stats.polygon_faces, 0);
    assert_eq!(stats.biggest_face, 4);
    assert_eq!(*stats.bounds.low, [0.0; 3]);
    assert_eq!(*stats.bounds.high, [1.0; 3]);
}

#[test]
fn bounds_agree_with_tobj() {
    let file = model(CUBE);
    let stats = ObjStats::from_path(file.path()).unwrap();

    let (models, _) = tobj::load_obj(file.path(), &tobj::LoadOptions::default()).unwrap();
    let positions: Vec<f32> = models
        .iter()
        .flat_map(|model| model.mesh.positions.iter().copied())
        .collect();
    assert_eq!(positions.len(), 3 * stats.vertices);

    for (axis, (low, high)) in stats.bounds.low.iter().zip(stats.bounds.high.iter()).enumerate() {
        let values = positions.iter().skip(axis).step_by(3).map(|&v| f64::from(v));
        let expected_low = values.clone().fold(f64::INFINITY, f64::min);
        let expected_high = values.fold(f64::NEG_INFINITY, f64::max);

        assert_relative_eq!(*low, expected_low);
        assert_relative_eq!(*high, expected_high);
    }
}

#[test]
fn full_report_for_concrete_triangle() {
    let file = model(TRIANGLE);
    let mut out = Vec::new();

    write_reports(&mut out, &[file.path()], ReportStyle::Full).unwrap();

    let expected = format!(
        "--\n{}\n\
         x = -1.000000 - 1.000000\n\
         y = 0.000000 - 5.000000\n\
         z = 0.000000 - 3.000000\n\
         \n\
         1 faces of up to 3 vertices\n\
         - 1 triangular faces\n\
         - 0 quad faces\n\
         - 0 other (general polygon) faces\n\
         \n\
         3 vertexes\n\
         0 texture vertexes\n\
         0 parameter vertexes\n\
         0 normals\n",
        file.path().display()
    );
    assert_eq!(String::from_utf8(out).unwrap(), expected);
}

#[test]
fn bounds_report_has_no_header() {
    let file = model(TRIANGLE);
    let mut out = Vec::new();

    write_reports(&mut out, &[file.path()], ReportStyle::Bounds).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "x = -1.000000 - 1.000000\ny = 0.000000 - 5.000000\nz = 0.000000 - 3.000000\n"
    );
}

#[test]
fn each_model_is_read_from_its_own_path() {
    let triangle = model(TRIANGLE);
    let cube = model(CUBE);
    let mut out = Vec::new();

    let stats = write_reports(
        &mut out,
        &[triangle.path(), cube.path()],
        ReportStyle::Full,
    )
    .unwrap();

    assert_eq!(stats.len(), 2);
    assert_eq!(stats[0].vertices, 3);
    assert_eq!(stats[1].vertices, 8);
    assert_ne!(stats[0], stats[1]);

    let report = String::from_utf8(out).unwrap();
    let cube_block = report
        .split("--\n")
        .nth(2)
        .expect("second model block");
    assert!(cube_block.starts_with(&format!("{}\n", cube.path().display())));
    assert!(cube_block.contains("8 vertexes\n"));
}

#[test]
fn model_without_vertices_reports_sentinels() {
    let file = model("# nothing here\ng empty\n");
    let mut out = Vec::new();

    write_reports(&mut out, &[file.path()], ReportStyle::Bounds).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "x = 10000.000000 - -10000.000000\n\
         y = 10000.000000 - -10000.000000\n\
         z = 10000.000000 - -10000.000000\n"
    );
}

#[test]
fn failing_model_aborts_the_run() {
    let good = model(TRIANGLE);
    let bad = model("v 1 2 3\nv 1 x 3\n");
    let dir = TempDir::new().unwrap();
    let never_read: PathBuf = dir.path().join("missing.obj");
    let mut out = Vec::new();

    let error = write_reports(
        &mut out,
        &[good.path(), bad.path(), never_read.as_path()],
        ReportStyle::Full,
    )
    .unwrap_err();

    assert_eq!(error.line(), Some(2));
    assert!(error.to_string().contains(&bad.path().display().to_string()));

    let report = String::from_utf8(out).unwrap();
    assert!(report.contains(&good.path().display().to_string()));
    assert!(report.ends_with(&format!("--\n{}\n", bad.path().display())));
    assert!(!report.contains("missing.obj"));
}

#[test]
fn repeated_scans_are_identical() {
    let file = model(CUBE);
    let mut first = Vec::new();
    let mut second = Vec::new();

    write_reports(&mut first, &[file.path()], ReportStyle::Full).unwrap();
    write_reports(&mut second, &[file.path()], ReportStyle::Full).unwrap();

    assert_eq!(first, second);
}
