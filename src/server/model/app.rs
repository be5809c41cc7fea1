use sea_orm::DatabaseConnection;

use crate::server::google::GoogleClient;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub google: GoogleClient,
}
