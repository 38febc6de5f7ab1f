use hrview::application::EmployeeDirectory;
use hrview::infrastructure::FileStorage;
use hrview::util::testing::{raw_user_fixture, MockEmployeeSource};
use std::path::PathBuf;
use tempfile::TempDir;

/// Test fixture for a storage file inside a temporary directory
#[allow(dead_code)]
pub struct TestStorage {
    _temp_dir: TempDir,
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestStorage {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temporary directory");
        let path = temp_dir.path().join("hrview/local-storage.json");
        Self {
            _temp_dir: temp_dir,
            path,
        }
    }

    /// Fresh handle onto the same file, as a new process would get
    pub fn open(&self) -> FileStorage {
        FileStorage::new(&self.path)
    }
}

/// Names of the first records of the demo API, in fetch order
#[allow(dead_code)]
pub const STAFF: [(&str, &str); 20] = [
    ("Emily", "Johnson"),
    ("Michael", "Williams"),
    ("Sophia", "Brown"),
    ("James", "Davis"),
    ("Emma", "Miller"),
    ("Olivia", "Wilson"),
    ("Alexander", "Jones"),
    ("Ava", "Taylor"),
    ("Ethan", "Martinez"),
    ("Isabella", "Anderson"),
    ("Liam", "Garcia"),
    ("Mia", "Rodriguez"),
    ("Noah", "Hernandez"),
    ("Charlotte", "Lopez"),
    ("William", "Gonzalez"),
    ("Avery", "Perez"),
    ("Evelyn", "Sanchez"),
    ("Logan", "Torres"),
    ("Abigail", "Rivera"),
    ("Jackson", "Evans"),
];

/// Source serving the twenty staff records with ids 1..=20
#[allow(dead_code)]
pub fn staff_source() -> MockEmployeeSource {
    STAFF
        .iter()
        .enumerate()
        .fold(MockEmployeeSource::builder(), |builder, (i, (first, last))| {
            builder.with_user(raw_user_fixture(i as i64 + 1, first, last))
        })
        .build()
}

/// Source serving all staff except the given ids
#[allow(dead_code)]
pub fn staff_source_without(excluded: &[i64]) -> MockEmployeeSource {
    STAFF
        .iter()
        .enumerate()
        .map(|(i, name)| (i as i64 + 1, name))
        .filter(|(id, _)| !excluded.contains(id))
        .fold(MockEmployeeSource::builder(), |builder, (id, (first, last))| {
            builder.with_user(raw_user_fixture(id, first, last))
        })
        .build()
}

#[allow(dead_code)]
pub fn staff_directory() -> EmployeeDirectory<MockEmployeeSource> {
    EmployeeDirectory::new(staff_source())
}

#[allow(dead_code)]
pub fn failing_directory() -> EmployeeDirectory<MockEmployeeSource> {
    EmployeeDirectory::new(
        MockEmployeeSource::builder()
            .with_failure("connection refused")
            .build(),
    )
}
