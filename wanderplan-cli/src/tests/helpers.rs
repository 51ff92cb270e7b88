//! Test helpers for building catalogs, stores and CLI invocations.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;
use wanderplan_core::{Itinerary, ItineraryId};

use super::*;

pub(super) const CATALOG: &str = "\
location,attraction,rating,price,time
Jaipur,Amber Fort,4.7,200,3
Jaipur,Hawa Mahal,4.5,50,1.5
Jaipur,City Palace,4.6,300,2.5
Jaipur,Nahargarh Fort,4.3,100,9
Goa,Baga Beach,4.4,0,4
";

/// Temporary directory holding a catalog file and a store path.
#[derive(Debug)]
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 tempdir");
        write_utf8(&root.join("attractions.csv"), CATALOG.as_bytes());
        Self { _dir: dir, root }
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub(super) fn catalog(&self) -> Utf8PathBuf {
        self.root.join("attractions.csv")
    }

    pub(super) fn store(&self) -> Utf8PathBuf {
        self.root.join("state/trips.db")
    }
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write test file");
}

/// Run the CLI and capture stdout.
pub(super) fn invoke(args: &[&str]) -> Result<String, CliError> {
    let mut output = Vec::new();
    let mut argv = vec!["wanderplan"];
    argv.extend_from_slice(args);
    run_with(argv, &mut output)?;
    Ok(String::from_utf8(output).expect("utf-8 output"))
}

/// Plan a two-day Jaipur trip into the workspace store and return its id.
pub(super) fn plan_trip(workspace: &Workspace) -> ItineraryId {
    let catalog = workspace.catalog();
    let store = workspace.store();
    let output = invoke(&[
        "plan",
        "--catalog",
        catalog.as_str(),
        "--store",
        store.as_str(),
        "--location",
        "Jaipur",
        "--budget",
        "1000",
        "--days",
        "2",
    ])
    .expect("plan succeeds");
    let itinerary: Itinerary = serde_json::from_str(&output).expect("itinerary json");
    itinerary.id
}
