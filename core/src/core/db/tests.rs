mod common {
    use crate::core::db::Database;
    use crate::types::{Config, SlotKey};
    use tempfile::TempDir;

    pub(super) fn create_test_db() -> (Database, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let db = Database::new(&test_config(&temp_dir)).unwrap();
        (db, temp_dir)
    }

    pub(super) fn test_config(temp_dir: &TempDir) -> Config {
        Config {
            base_path: temp_dir.path().to_path_buf(),
        }
    }

    pub(super) fn make_key(s: &str) -> SlotKey {
        SlotKey::try_from(s).unwrap()
    }
}

mod crud {
    use super::common::{create_test_db, make_key};
    use crate::core::slots::SlotStore;

    #[test]
    fn test_get_nonexistent_slot() {
        let (db, _temp) = create_test_db();
        assert_eq!(db.get(&make_key("nonexistent")).unwrap(), None);
    }

    #[test]
    fn test_set_and_get() {
        let (db, _temp) = create_test_db();
        let key = make_key("mosaic_ide_layout");

        db.set(&key, r#"{"tabs":["Editor"]}"#).unwrap();

        assert_eq!(
            db.get(&key).unwrap().as_deref(),
            Some(r#"{"tabs":["Editor"]}"#)
        );
    }

    #[test]
    fn test_set_overwrites_existing_slot() {
        let (db, _temp) = create_test_db();
        let key = make_key("mosaic_ide_version");

        db.set(&key, "0.9.0").unwrap();
        db.set(&key, "1.0.0").unwrap();

        assert_eq!(db.get(&key).unwrap().as_deref(), Some("1.0.0"));
    }

    #[test]
    fn test_remove_slot() {
        let (db, _temp) = create_test_db();
        let key = make_key("ide-theme");

        db.set(&key, "dark").unwrap();
        db.remove(&key).unwrap();

        assert_eq!(db.get(&key).unwrap(), None);
    }

    #[test]
    fn test_remove_missing_slot_is_ok() {
        let (db, _temp) = create_test_db();
        db.remove(&make_key("never-written")).unwrap();
    }

    #[test]
    fn test_slots_are_independent() {
        let (db, _temp) = create_test_db();
        let a = make_key("a");
        let b = make_key("b");

        db.set(&a, "1").unwrap();
        db.set(&b, "2").unwrap();
        db.remove(&a).unwrap();

        assert_eq!(db.get(&a).unwrap(), None);
        assert_eq!(db.get(&b).unwrap().as_deref(), Some("2"));
    }
}

mod durability {
    use super::common::{make_key, test_config};
    use crate::core::db::Database;
    use crate::core::slots::SlotStore;
    use tempfile::TempDir;

    #[test]
    fn test_values_survive_reopen() {
        let temp = TempDir::new().unwrap();
        let key = make_key("mosaic_ide_layout");

        {
            let db = Database::new(&test_config(&temp)).unwrap();
            db.set(&key, "persisted").unwrap();
        }

        let db = Database::new(&test_config(&temp)).unwrap();
        assert_eq!(db.get(&key).unwrap().as_deref(), Some("persisted"));
    }

    #[test]
    fn test_creates_missing_data_dir() {
        let temp = TempDir::new().unwrap();
        let config = crate::types::Config {
            base_path: temp.path().join("nested").join("dir"),
        };

        let _db = Database::new(&config).unwrap();
        assert!(config.db_path().exists());
    }
}
