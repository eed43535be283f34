//! The keyed student record store.
//!
//! Every operation validates all of its inputs before touching the map, so a
//! failed call leaves the store exactly as it was.

use super::table;
use crate::error::{StoreError, StoreResult};
use crate::storage::FlatFile;
use crate::types::{is_valid_grade, is_valid_id, is_valid_name, FileName, Student};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// In-memory student records keyed by id.
///
/// Records are owned by the store. Lookups hand out copies, so the only way
/// to change a stored record is through the update methods.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordStore {
    students: BTreeMap<i64, Student>,
}

impl RecordStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store from an initial set of records.
    ///
    /// Each record is copied in through [`RecordStore::add`], so the first
    /// invalid or duplicate record aborts construction.
    pub fn from_students<I>(students: I) -> StoreResult<Self>
    where
        I: IntoIterator<Item = Student>,
    {
        let mut store = Self::new();
        for student in students {
            store.add(&student)?;
        }
        Ok(store)
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.students.len()
    }

    /// Check if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Check whether a record with `id` is stored.
    pub fn contains(&self, id: i64) -> bool {
        self.students.contains_key(&id)
    }

    /// Look up a copy of the record with `id`.
    pub fn get(&self, id: i64) -> StoreResult<Student> {
        self.ensure_exists(id)?;
        self.students
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    /// Snapshot of every record in ascending id order.
    pub fn students(&self) -> Vec<Student> {
        self.students.values().cloned().collect()
    }

    /// Store a copy of `student`.
    pub fn add(&mut self, student: &Student) -> StoreResult<()> {
        student.validate()?;
        if self.contains(student.id) {
            return Err(StoreError::DuplicateId(student.id));
        }

        self.students.insert(student.id, student.clone());
        debug!(id = student.id, "added student");
        Ok(())
    }

    /// Remove the record with `id`.
    pub fn delete(&mut self, id: i64) -> StoreResult<Student> {
        self.ensure_exists(id)?;
        let removed = self.students.remove(&id).ok_or(StoreError::NotFound(id))?;
        debug!(id, "deleted student");
        Ok(removed)
    }

    /// Remove the stored record only if it equals `student` in every field.
    ///
    /// A stored record with the same id but a different name or grade is
    /// reported as [`StoreError::NotFound`] and left in place.
    pub fn delete_record(&mut self, student: &Student) -> StoreResult<()> {
        self.ensure_exists(student.id)?;
        if self.students.get(&student.id) != Some(student) {
            return Err(StoreError::NotFound(student.id));
        }

        self.students.remove(&student.id);
        debug!(id = student.id, "deleted matching student");
        Ok(())
    }

    /// Replace the name of the record with `id`.
    pub fn update_name(&mut self, id: i64, new_name: &str) -> StoreResult<()> {
        self.ensure_exists(id)?;
        if !is_valid_name(new_name) {
            return Err(StoreError::InvalidName(new_name.to_string()));
        }

        let student = self.students.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        student.name = new_name.to_string();
        debug!(id, "updated student name");
        Ok(())
    }

    /// Move the record with `id` to `new_id`, keeping its name and grade.
    ///
    /// `new_id` must not be in use. That includes `id` itself, so renaming a
    /// record to its own id is rejected with [`StoreError::DuplicateId`].
    pub fn update_id(&mut self, id: i64, new_id: i64) -> StoreResult<()> {
        if !is_valid_id(id) {
            return Err(StoreError::InvalidId(id));
        }
        if !is_valid_id(new_id) {
            return Err(StoreError::InvalidNewId(new_id));
        }
        if !self.contains(id) {
            return Err(StoreError::NotFound(id));
        }
        if self.contains(new_id) {
            return Err(StoreError::DuplicateId(new_id));
        }

        let mut student = self.students.remove(&id).ok_or(StoreError::NotFound(id))?;
        student.id = new_id;
        self.students.insert(new_id, student);
        debug!(id, new_id, "moved student to new id");
        Ok(())
    }

    /// Replace the grade of the record with `id`.
    pub fn update_grade(&mut self, id: i64, new_grade: f64) -> StoreResult<()> {
        self.ensure_exists(id)?;
        if !is_valid_grade(new_grade) {
            return Err(StoreError::InvalidGrade(new_grade));
        }

        let student = self.students.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        student.grade = new_grade;
        debug!(id, "updated student grade");
        Ok(())
    }

    /// Render the record table, or the empty notice.
    pub fn render(&self) -> String {
        table::render(self.students.values())
    }

    /// Save to `<name>.txt` in the working directory.
    pub fn save(&self, name: &str) -> StoreResult<PathBuf> {
        self.save_to(&FlatFile::current_dir(), name)
    }

    /// Save to the record file `name` in `files`.
    ///
    /// An empty store is rejected before the name is looked at, and no file
    /// is created.
    pub fn save_to(&self, files: &FlatFile, name: &str) -> StoreResult<PathBuf> {
        if self.is_empty() {
            warn!(file = name, "refusing to save an empty store");
            return Err(StoreError::EmptyStore);
        }
        let name: FileName = name.parse()?;

        let path = files.write(&name, self.students.values())?;
        info!(path = %path.display(), records = self.len(), "saved student records");
        Ok(path)
    }

    /// Replace the contents of the store with `<name>.txt` from the working
    /// directory.
    pub fn load(&mut self, name: &str) -> StoreResult<()> {
        self.load_from(&FlatFile::current_dir(), name)
    }

    /// Replace the contents of the store with the record file `name` in
    /// `files`.
    ///
    /// Every record is checked as if it were added. The store is only
    /// replaced once the whole file has been accepted.
    pub fn load_from(&mut self, files: &FlatFile, name: &str) -> StoreResult<()> {
        let name: FileName = name.parse()?;
        let loaded = Self::from_students(files.read(&name)?)?;

        info!(
            path = %files.path_for(&name).display(),
            records = loaded.len(),
            "loaded student records"
        );
        *self = loaded;
        Ok(())
    }

    /// Fail unless `id` is valid and stored.
    fn ensure_exists(&self, id: i64) -> StoreResult<()> {
        if !is_valid_id(id) {
            return Err(StoreError::InvalidId(id));
        }
        if !self.contains(id) {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a Student;
    type IntoIter = std::collections::btree_map::Values<'a, i64, Student>;

    fn into_iter(self) -> Self::IntoIter {
        self.students.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FileNameError;
    use std::fs;
    use tempfile::TempDir;

    fn sample_store() -> RecordStore {
        RecordStore::from_students([
            Student::new(10154707, "Jason", 82.0),
            Student::new(10163270, "Sanchayata", 70.0),
            Student::new(10199398, "John", 57.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_from_students_copies_records() {
        let store = sample_store();
        assert_eq!(
            store.students(),
            vec![
                Student::new(10154707, "Jason", 82.0),
                Student::new(10163270, "Sanchayata", 70.0),
                Student::new(10199398, "John", 57.0),
            ]
        );
    }

    #[test]
    fn test_from_students_rejects_duplicates() {
        let result = RecordStore::from_students([
            Student::new(1, "Jason", 82.0),
            Student::new(1, "John", 57.0),
        ]);
        assert!(matches!(result, Err(StoreError::DuplicateId(1))));
    }

    #[test]
    fn test_add_valid_student() {
        for (name, id, grade) in [
            ("Henry", 23054570, 69.0),
            ("Sanchayata", 33136700, 32.2),
            ("Sarah", 88888888, 0.9),
        ] {
            let mut store = sample_store();
            store.add(&Student::new(id, name, grade)).unwrap();

            let stored = store.get(id).unwrap();
            assert_eq!(stored.id, id);
            assert_eq!(stored.name, name);
            assert_eq!(stored.grade, grade);
            assert_eq!(store.len(), 4);
        }
    }

    #[test]
    fn test_add_keeps_its_own_copy() {
        let mut store = RecordStore::new();
        let mut student = Student::new(1, "Henry", 69.0);
        store.add(&student).unwrap();

        student.name = "Ke$ha".to_string();
        assert_eq!(store.get(1).unwrap().name, "Henry");
    }

    #[test]
    fn test_add_invalid_id() {
        for id in [-1, 0, -100000] {
            let mut store = sample_store();
            let err = store.add(&Student::new(id, "Henry", 80.0)).unwrap_err();
            assert!(matches!(err, StoreError::InvalidId(i) if i == id));
            assert_eq!(
                err.to_string(),
                format!("Invalid ID {}. ID must be a positive integer", id)
            );
            assert_eq!(store, sample_store());
        }
    }

    #[test]
    fn test_add_invalid_name() {
        for name in ["Takeshi69", "Ke$ha", "tosh.o", "!\"£$%^&*()"] {
            let mut store = sample_store();
            let err = store.add(&Student::new(999, name, 80.0)).unwrap_err();
            assert!(matches!(err, StoreError::InvalidName(ref n) if n == name));
            assert_eq!(store, sample_store());
        }
    }

    #[test]
    fn test_add_invalid_grade() {
        for grade in [101.0, -1.0, -123590.0, 65784932.0] {
            let mut store = sample_store();
            let err = store.add(&Student::new(999, "Henry", grade)).unwrap_err();
            assert!(matches!(err, StoreError::InvalidGrade(g) if g == grade));
            assert_eq!(store, sample_store());
        }
    }

    #[test]
    fn test_add_existing_student() {
        for (name, id, grade) in [("Jason", 10154707, 82.0), ("Henry", 10163270, 1.0)] {
            let mut store = sample_store();
            let err = store.add(&Student::new(id, name, grade)).unwrap_err();
            assert!(matches!(err, StoreError::DuplicateId(i) if i == id));
            assert_eq!(store, sample_store());
        }
    }

    #[test]
    fn test_get_errors() {
        let store = sample_store();
        assert!(matches!(store.get(0), Err(StoreError::InvalidId(0))));
        assert!(matches!(store.get(967), Err(StoreError::NotFound(967))));
    }

    #[test]
    fn test_delete_by_id() {
        for id in [10154707, 10163270, 10199398] {
            let mut store = sample_store();
            let removed = store.delete(id).unwrap();
            assert_eq!(removed.id, id);
            assert!(!store.contains(id));
            assert!(matches!(store.get(id), Err(StoreError::NotFound(_))));
        }
    }

    #[test]
    fn test_delete_missing_id() {
        for id in [9823011, 1, 967] {
            let mut store = sample_store();
            let err = store.delete(id).unwrap_err();
            assert_eq!(
                err.to_string(),
                format!("Student with id {} does not exist in the system", id)
            );
        }
    }

    #[test]
    fn test_delete_invalid_id() {
        let mut store = sample_store();
        for id in [-1, 0, -100000] {
            assert!(matches!(store.delete(id), Err(StoreError::InvalidId(i)) if i == id));
        }
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_delete_record() {
        let mut store = sample_store();
        store
            .delete_record(&Student::new(10163270, "Sanchayata", 70.0))
            .unwrap();
        assert!(!store.contains(10163270));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_delete_record_missing() {
        let mut store = sample_store();
        let err = store
            .delete_record(&Student::new(23054570, "Henry", 69.0))
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound(23054570)));

        let err = store
            .delete_record(&Student::new(-4, "Henry", 69.0))
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidId(-4)));
    }

    #[test]
    fn test_delete_record_mismatch_keeps_entry() {
        let mut store = sample_store();
        let err = store
            .delete_record(&Student::new(10154707, "Jason", 81.0))
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound(10154707)));

        let err = store
            .delete_record(&Student::new(10154707, "Jase", 82.0))
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound(10154707)));

        assert_eq!(store, sample_store());
    }

    #[test]
    fn test_update_name() {
        for (id, name) in [
            (10154707, "Jase"),
            (10163270, "Sancha"),
            (10199398, "Jonathan Woodgate"),
        ] {
            let mut store = sample_store();
            let before = store.get(id).unwrap();
            store.update_name(id, name).unwrap();

            let after = store.get(id).unwrap();
            assert_eq!(after.name, name);
            assert_eq!(after.grade, before.grade);
            assert_eq!(store.len(), 3);
        }
    }

    #[test]
    fn test_update_name_only_touches_target() {
        let mut store = sample_store();
        store.update_name(10154707, "Jase").unwrap();
        assert_eq!(
            store.get(10163270).unwrap(),
            Student::new(10163270, "Sanchayata", 70.0)
        );
        assert_eq!(
            store.get(10199398).unwrap(),
            Student::new(10199398, "John", 57.0)
        );
    }

    #[test]
    fn test_update_name_errors() {
        let mut store = sample_store();
        assert!(matches!(
            store.update_name(-1, "Jason"),
            Err(StoreError::InvalidId(-1))
        ));
        assert!(matches!(
            store.update_name(5, "Jason"),
            Err(StoreError::NotFound(5))
        ));
        for name in ["Takeshi69", "Ke$ha", "tosh.o"] {
            assert!(matches!(
                store.update_name(10154707, name),
                Err(StoreError::InvalidName(_))
            ));
        }
        assert_eq!(store, sample_store());
    }

    #[test]
    fn test_update_id() {
        for (id, new_id) in [(10154707, 101), (10163270, 2), (10199398, 10100998)] {
            let mut store = sample_store();
            let before = store.get(id).unwrap();
            store.update_id(id, new_id).unwrap();

            assert!(!store.contains(id));
            let after = store.get(new_id).unwrap();
            assert_eq!(after.id, new_id);
            assert_eq!(after.name, before.name);
            assert_eq!(after.grade, before.grade);
            assert_eq!(store.len(), 3);
        }
    }

    #[test]
    fn test_update_id_errors() {
        let mut store = sample_store();
        assert!(matches!(store.update_id(-1, 101), Err(StoreError::InvalidId(-1))));
        assert!(matches!(store.update_id(0, 2), Err(StoreError::InvalidId(0))));
        assert!(matches!(
            store.update_id(10154707, -1),
            Err(StoreError::InvalidNewId(-1))
        ));
        assert!(matches!(store.update_id(7, 8), Err(StoreError::NotFound(7))));

        let err = store.update_id(10163270, 10154707).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateId(10154707)));
        assert_eq!(store, sample_store());
    }

    #[test]
    fn test_update_id_to_itself_is_rejected() {
        let mut store = sample_store();
        let err = store.update_id(10154707, 10154707).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateId(10154707)));
        assert_eq!(store, sample_store());
    }

    #[test]
    fn test_update_grade() {
        for (id, grade) in [(10154707, 80.8), (10163270, 77.2), (10199398, 12.223)] {
            let mut store = sample_store();
            let before = store.get(id).unwrap();
            store.update_grade(id, grade).unwrap();

            let after = store.get(id).unwrap();
            assert_eq!(after.grade, grade);
            assert_eq!(after.name, before.name);
        }
    }

    #[test]
    fn test_update_grade_errors() {
        let mut store = sample_store();
        assert!(matches!(store.update_grade(0, 57.2), Err(StoreError::InvalidId(0))));
        assert!(matches!(store.update_grade(42, 57.2), Err(StoreError::NotFound(42))));
        for grade in [101.0, -1.0, -123590.0, 65784932.0, f64::NAN] {
            assert!(matches!(
                store.update_grade(10199398, grade),
                Err(StoreError::InvalidGrade(_))
            ));
        }
        assert_eq!(store, sample_store());
    }

    #[test]
    fn test_render() {
        let table = sample_store().render();
        assert!(table.contains(
            "|10154707       |Jason                                                                 |82.00|\n"
        ));
        assert_eq!(table.lines().count(), 9);
        assert_eq!(RecordStore::new().render(), table::EMPTY_NOTICE);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let files = FlatFile::new(dir.path());

        let mut store = sample_store();
        store.update_grade(10199398, 12.223).unwrap();
        store.add(&Student::new(5, "Mary Ann", 100.0 / 3.0)).unwrap();

        for name in ["test", "students", "database01", "student-data"] {
            let path = store.save_to(&files, name).unwrap();
            assert!(path.is_file());

            let mut loaded = RecordStore::new();
            loaded.load_from(&files, name).unwrap();
            assert_eq!(loaded, store);
        }
    }

    #[test]
    fn test_load_replaces_contents() {
        let dir = TempDir::new().unwrap();
        let files = FlatFile::new(dir.path());
        sample_store().save_to(&files, "students").unwrap();

        let mut store = RecordStore::from_students([Student::new(1, "Henry", 69.0)]).unwrap();
        store.load_from(&files, "students").unwrap();
        assert!(!store.contains(1));
        assert_eq!(store, sample_store());
    }

    #[test]
    fn test_save_invalid_file_name() {
        let dir = TempDir::new().unwrap();
        let files = FlatFile::new(dir.path());
        let store = sample_store();

        for name in ["test.", "@students", "data/base01", "s*tudent-data"] {
            let err = store.save_to(&files, name).unwrap_err();
            assert_eq!(err.to_string(), format!("Invalid file name {}", name));
        }

        let err = store.save_to(&files, "").unwrap_err();
        assert!(matches!(err, StoreError::InvalidFileName(FileNameError::Empty)));
        assert_eq!(err.to_string(), "Invalid file name \"\", no file name given");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_save_empty_store() {
        let dir = TempDir::new().unwrap();
        let files = FlatFile::new(dir.path());

        let err = RecordStore::new().save_to(&files, "empty").unwrap_err();
        assert!(matches!(err, StoreError::EmptyStore));
        assert!(!dir.path().join("empty.txt").exists());

        // Emptiness is reported ahead of a bad name.
        let err = RecordStore::new().save_to(&files, "empty.txt").unwrap_err();
        assert!(matches!(err, StoreError::EmptyStore));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let mut store = sample_store();
        let err = store
            .load_from(&FlatFile::new(dir.path()), "nonexistent")
            .unwrap_err();
        assert!(matches!(err, StoreError::MissingFile(_)));
        assert_eq!(store, sample_store());
    }

    #[test]
    fn test_load_invalid_file_name() {
        let dir = TempDir::new().unwrap();
        let mut store = RecordStore::new();
        let err = store
            .load_from(&FlatFile::new(dir.path()), "../students")
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidFileName(_)));
    }

    #[test]
    fn test_load_rejects_invalid_records_atomically() {
        let dir = TempDir::new().unwrap();
        let files = FlatFile::new(dir.path());
        fs::write(dir.path().join("bad.txt"), "1,Jason,82.0\n2,Ke$ha,70.0\n").unwrap();

        let mut store = sample_store();
        let err = store.load_from(&files, "bad").unwrap_err();
        assert!(matches!(err, StoreError::InvalidName(_)));
        assert_eq!(store, sample_store());

        fs::write(dir.path().join("dup.txt"), "1,Jason,82.0\n1,John,57.0\n").unwrap();
        let err = store.load_from(&files, "dup").unwrap_err();
        assert!(matches!(err, StoreError::DuplicateId(1)));

        fs::write(dir.path().join("range.txt"), "1,Jason,182.0\n").unwrap();
        let err = store.load_from(&files, "range").unwrap_err();
        assert!(matches!(err, StoreError::InvalidGrade(_)));
        assert_eq!(store, sample_store());
    }

    #[test]
    fn test_iterate_in_id_order() {
        let store = sample_store();
        let ids: Vec<i64> = (&store).into_iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![10154707, 10163270, 10199398]);
    }
}
