//! Database identity and the version-gated schema.
//!
//! # Design
//! - One database, one object store, two non-unique secondary indexes.
//! - Structure is created only while upgrading and only when missing, so
//!   repeated opens never duplicate it.

/// Database name.
pub const DB_NAME: &str = "nousui_lab_db";
/// Schema version requested on open.
pub const DB_VERSION: u32 = 1;
/// Object store holding component records.
pub const STORE_NAME: &str = "components";
/// In-line key path of the object store.
pub const KEY_PATH: &str = "id";

/// Secondary index definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexSpec {
    /// Index name.
    pub name: &'static str,
    /// Record field the index is built over.
    pub key_path: &'static str,
    /// Whether index keys must be unique.
    pub unique: bool,
}

/// Secondary indexes created with the object store.
pub const INDEXES: [IndexSpec; 2] = [
    IndexSpec {
        name: "status",
        key_path: "status",
        unique: false,
    },
    IndexSpec {
        name: "createdAt",
        key_path: "createdAt",
        unique: false,
    },
];

/// Work required while handling an upgrade request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpgradePlan {
    /// The object store already exists; nothing to do.
    UpToDate,
    /// Create the object store and its indexes.
    CreateStore,
}

/// Decide the upgrade work from the stores that already exist.
#[must_use]
pub fn plan_upgrade<'a>(existing_stores: impl IntoIterator<Item = &'a str>) -> UpgradePlan {
    if existing_stores.into_iter().any(|name| name == STORE_NAME) {
        UpgradePlan::UpToDate
    } else {
        UpgradePlan::CreateStore
    }
}

/// Whether opening at `current_version` fires an upgrade.
#[must_use]
pub const fn upgrade_needed(current_version: Option<u32>) -> bool {
    match current_version {
        None => true,
        Some(version) => version < DB_VERSION,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_database_creates_store() {
        assert!(upgrade_needed(None));
        assert_eq!(plan_upgrade(Vec::<&str>::new()), UpgradePlan::CreateStore);
    }

    #[test]
    fn existing_store_is_left_alone() {
        assert_eq!(
            plan_upgrade(["other", STORE_NAME]),
            UpgradePlan::UpToDate
        );
        assert!(!upgrade_needed(Some(DB_VERSION)));
    }

    #[test]
    fn indexes_are_non_unique() {
        assert!(INDEXES.iter().all(|index| !index.unique));
        let names: Vec<_> = INDEXES.iter().map(|index| index.name).collect();
        assert_eq!(names, ["status", "createdAt"]);
    }
}
