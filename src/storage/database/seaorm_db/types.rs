use sea_orm::DatabaseConnection;

/// SeaORM-based database implementation
#[derive(Debug, Clone)]
pub struct SeaOrmDatabase {
    pub(super) db: DatabaseConnection,
    /// Backend type indicator
    pub(super) backend_type: DatabaseBackendType,
}

/// Database backend type indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseBackendType {
    PostgreSQL,
    SQLite,
}

/// Row counts reported by the health endpoint
#[derive(Debug, Clone, Default, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseStats {
    pub products: u64,
    pub work_processes: u64,
    pub workers: u64,
    pub folders: u64,
    pub categories: u64,
}
