//! Flat-file JSON record store.
//!
//! Data lives in one directory:
//! ```text
//! data/
//! ├── employees.json    # [{"employeeId", "name", "phone"}, ...]
//! ├── shifts.json       # [{"shiftId", "date", "startTime", "endTime"}, ...]
//! ├── assignments.json  # [{"employeeId", "shiftId"}, ...]
//! └── config.json       # {"maxDailyHours": 8}
//! ```
//! Every read parses the whole file and every append rewrites it.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::config::PolicyConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{Assignment, Employee, NewEmployee, Shift};
use crate::roster::next_employee_id;

use super::RecordStore;

const EMPLOYEES_FILE: &str = "employees.json";
const SHIFTS_FILE: &str = "shifts.json";
const ASSIGNMENTS_FILE: &str = "assignments.json";
const CONFIG_FILE: &str = "config.json";

/// A record store backed by JSON files in a data directory.
///
/// # Example
///
/// ```no_run
/// use shift_roster::store::{JsonFileStore, RecordStore};
///
/// let store = JsonFileStore::open("./data");
/// for employee in store.list_employees()? {
///     println!("{} {}", employee.employee_id, employee.name);
/// }
/// # Ok::<(), shift_roster::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    /// Opens a store over an existing data directory.
    ///
    /// Nothing is read until the first operation; a missing file is reported
    /// then as `StoreNotFound`.
    pub fn open<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Creates the data directory and any missing data files.
    ///
    /// Collections start empty and the policy starts at the default cap.
    /// Existing files are left untouched.
    pub fn init<P: AsRef<Path>>(root: P) -> EngineResult<Self> {
        let store = Self::open(root);

        fs::create_dir_all(&store.root).map_err(|e| EngineError::StoreWriteError {
            path: store.root.display().to_string(),
            message: e.to_string(),
        })?;

        for file in [EMPLOYEES_FILE, SHIFTS_FILE, ASSIGNMENTS_FILE] {
            if !store.path(file).exists() {
                store.write_file(file, &Vec::<serde_json::Value>::new())?;
            }
        }
        if !store.path(CONFIG_FILE).exists() {
            store.write_file(CONFIG_FILE, &PolicyConfig::default())?;
        }

        info!(data_dir = %store.root.display(), "Initialised data directory");
        Ok(store)
    }

    /// Returns the data directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path(&self, file: &str) -> PathBuf {
        self.root.join(file)
    }

    /// Reads and parses one data file.
    fn read_file<T: DeserializeOwned>(&self, file: &str) -> EngineResult<T> {
        let path = self.path(file);
        let path_str = path.display().to_string();

        let content = fs::read_to_string(&path).map_err(|_| EngineError::StoreNotFound {
            path: path_str.clone(),
        })?;

        serde_json::from_str(&content).map_err(|e| EngineError::StoreParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Serializes a value with 4-space indentation and replaces the file.
    fn write_file<T: Serialize + ?Sized>(&self, file: &str, value: &T) -> EngineResult<()> {
        let path = self.path(file);
        let write_error = |message: String| EngineError::StoreWriteError {
            path: path.display().to_string(),
            message,
        };

        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        value
            .serialize(&mut serializer)
            .map_err(|e| write_error(e.to_string()))?;

        // Write beside the target then rename, so readers never see half a file
        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, &buf).map_err(|e| write_error(e.to_string()))?;
        fs::rename(&tmp_path, &path).map_err(|e| write_error(e.to_string()))?;

        debug!(path = %path.display(), bytes = buf.len(), "Wrote data file");
        Ok(())
    }
}

impl RecordStore for JsonFileStore {
    fn list_employees(&self) -> EngineResult<Vec<Employee>> {
        self.read_file(EMPLOYEES_FILE)
    }

    fn list_shifts(&self) -> EngineResult<Vec<Shift>> {
        self.read_file(SHIFTS_FILE)
    }

    fn list_assignments(&self) -> EngineResult<Vec<Assignment>> {
        self.read_file(ASSIGNMENTS_FILE)
    }

    fn append_assignment(&self, assignment: Assignment) -> EngineResult<()> {
        let mut assignments = self.list_assignments()?;
        assignments.push(assignment);
        self.write_file(ASSIGNMENTS_FILE, &assignments)
    }

    fn append_employee(&self, employee: NewEmployee) -> EngineResult<Employee> {
        let mut employees = self.list_employees()?;
        let employee = employee.with_id(next_employee_id(&employees)?);
        employees.push(employee.clone());
        self.write_file(EMPLOYEES_FILE, &employees)?;
        Ok(employee)
    }

    fn policy(&self) -> EngineResult<PolicyConfig> {
        self.read_file(CONFIG_FILE)
    }
}
