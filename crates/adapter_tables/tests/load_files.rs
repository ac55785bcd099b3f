//! Loading figure tables from disk through `FileProvider`.

use adapter_tables::figure::Query;
use adapter_tables::naming::{FigureId, FigureKind};
use adapter_tables::provider::{FileProvider, TableProvider};
use adapter_tables::LoadError;
use approx::assert_relative_eq;
use interp_core::math::interpolators::Extrapolation;
use interp_core::types::InterpolationError;
use std::fs;
use tempfile::TempDir;

const SCRIPT: &str = r#"
// Figure 1.2(1)
var F01_02_1IIDi1 = [0, 1, 2];
var F01_02_1IIDi2 = [0, 10];
var F01_02_1IIDd = [
    [1, 2, 3],
    [4, 5, 6]
];
var F03_01_2IDi = [0, 1, 2];
var F03_01_2IDd = [0, 10, 20];
"#;

fn write(dir: &TempDir, name: &str, text: &str) {
    fs::write(dir.path().join(name), text).unwrap();
}

#[tokio::test]
async fn loads_script_tables() {
    let dir = TempDir::new().unwrap();
    write(&dir, "figures.js", SCRIPT);

    let provider = FileProvider::new().with_base_dir(dir.path());
    let set = provider.load("figures.js").await.unwrap();

    let ids: Vec<_> = set.ids().copied().collect();
    assert_eq!(ids, vec![FigureId::new(1, 2, 1), FigureId::new(3, 1, 2)]);
    assert_eq!(set.get(&ids[0]).unwrap().kind(), FigureKind::Surface);
    assert_eq!(set.get(&ids[1]).unwrap().kind(), FigureKind::Curve);

    // Corner node
    let z = set.evaluate(&ids[0], Query::Point2(2.0, 10.0)).unwrap();
    assert_relative_eq!(z, 6.0);

    // Cell interior
    let z = set.evaluate(&ids[0], Query::Point2(1.5, 2.5)).unwrap();
    assert_relative_eq!(z, 3.25, epsilon = 1e-12);

    let y = set.evaluate(&ids[1], Query::Point1(0.25)).unwrap();
    assert_relative_eq!(y, 2.5, epsilon = 1e-12);
}

#[tokio::test]
async fn loads_json_and_toml_tables() {
    let dir = TempDir::new().unwrap();
    write(
        &dir,
        "figures.json",
        r#"{"F02_04_1IDi": [1, 2, 3], "F02_04_1IDd": [10, 20, 40]}"#,
    );
    write(
        &dir,
        "figures.toml",
        "F02_04_1IDi = [1, 2, 3]\nF02_04_1IDd = [10, 20, 40]\n",
    );

    let provider = FileProvider::new().with_base_dir(dir.path());
    let id = FigureId::new(2, 4, 1);

    for source in ["figures.json", "figures.toml"] {
        let set = provider.load(source).await.unwrap();
        let y = set.evaluate(&id, Query::Point1(2.5)).unwrap();
        assert_relative_eq!(y, 30.0, epsilon = 1e-12);
    }
}

#[tokio::test]
async fn helper_variables_are_skipped() {
    let dir = TempDir::new().unwrap();
    write(
        &dir,
        "figure3.js",
        r#"
/* Figure 3.1(2), digitised */
var title = "Figure 3.1; saturated";
var F03_01_2IDi = [.5, 1., 1.5,];
var F03_01_2IDd = [1, 2, 4,];
"#,
    );

    let provider = FileProvider::new().with_base_dir(dir.path());
    let set = provider.load("figure3.js").await.unwrap();

    assert_eq!(set.len(), 1);
    let y = set.evaluate(&FigureId::new(3, 1, 2), Query::Point1(1.25)).unwrap();
    assert_relative_eq!(y, 3.0, epsilon = 1e-12);
}

#[tokio::test]
async fn malformed_figure_variable_fails_the_load() {
    let dir = TempDir::new().unwrap();
    write(&dir, "bad.js", "var F03_01_2IDi = \"0, 1\";\nvar F03_01_2IDd = [1, 2];\n");

    let provider = FileProvider::new().with_base_dir(dir.path());
    match provider.load("bad.js").await.unwrap_err() {
        LoadError::Parse { message, .. } => assert!(message.starts_with("F03_01_2IDi:")),
        other => panic!("Expected Parse error, got {:?}", other),
    }
}

#[tokio::test]
async fn extrapolates_unless_forbidden() {
    let dir = TempDir::new().unwrap();
    write(&dir, "figures.js", SCRIPT);
    let id = FigureId::new(3, 1, 2);

    let extend = FileProvider::new().with_base_dir(dir.path());
    let set = extend.load("figures.js").await.unwrap();
    assert_relative_eq!(set.evaluate(&id, Query::Point1(-1.0)).unwrap(), -10.0);

    let forbid = extend.clone().with_extrapolation(Extrapolation::Forbid);
    let set = forbid.load("figures.js").await.unwrap();
    assert!(matches!(
        set.evaluate(&id, Query::Point1(-1.0)),
        Err(LoadError::Interpolation(InterpolationError::OutOfBounds { .. }))
    ));
}

#[tokio::test]
async fn degenerate_axis_is_rejected_at_load() {
    let dir = TempDir::new().unwrap();
    write(&dir, "dup.js", "var F03_01_2IDi = [0, 1, 1];\nvar F03_01_2IDd = [0, 1, 2];\n");

    let provider = FileProvider::new().with_base_dir(dir.path());
    match provider.load("dup.js").await {
        Err(LoadError::InvalidTable { figure, source }) => {
            assert_eq!(figure, FigureId::new(3, 1, 2));
            assert_eq!(source, InterpolationError::NonMonotonicData { index: 2 });
        }
        other => panic!("Expected InvalidTable, got {:?}", other),
    }
}

#[tokio::test]
async fn ragged_grid_is_rejected_at_load() {
    let dir = TempDir::new().unwrap();
    write(
        &dir,
        "ragged.js",
        "var F01_01_1IIDi1 = [0, 1];\nvar F01_01_1IIDi2 = [0, 1];\nvar F01_01_1IIDd = [[1, 2], [3]];\n",
    );

    let provider = FileProvider::new().with_base_dir(dir.path());
    assert!(matches!(
        provider.load("ragged.js").await,
        Err(LoadError::InvalidTable {
            source: InterpolationError::InvalidInput(_),
            ..
        })
    ));
}

#[tokio::test]
async fn provider_is_usable_as_trait_object() {
    let dir = TempDir::new().unwrap();
    write(&dir, "figures.js", SCRIPT);

    let provider: Box<dyn TableProvider> = Box::new(FileProvider::new().with_base_dir(dir.path()));
    let set = provider.load("figures.js").await.unwrap();
    assert_eq!(set.len(), 2);
}
