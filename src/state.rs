use std::sync::{Arc, Mutex};

use sea_orm::DatabaseConnection;

use crate::cart::CartStore;
use crate::models::Product;

#[derive(Clone)]
pub struct AppState {
    pub orm: DatabaseConnection,
    pub shelf: Arc<Vec<Product>>,
    pub cart: Arc<Mutex<CartStore>>,
}
