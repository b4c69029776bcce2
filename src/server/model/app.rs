use sea_orm::DatabaseConnection;

/// State shared by every request handler.
///
/// The connection is a pool handle, cloning the state is cheap.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: DatabaseConnection,
}

impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
