use std::path::PathBuf;
use std::{fs, io};

use uuid::Uuid;

use crate::error::AppResult;
use crate::models::{CartItem, Product};

/// Where cart contents survive between requests. `save` receives the
/// full replacement state on every mutation.
pub trait CartPersistence: Send {
    fn load(&self) -> AppResult<Vec<CartItem>>;
    fn save(&self, items: &[CartItem]) -> AppResult<()>;
}

/// Cart persistence in a single JSON file. A missing file is an empty
/// cart, not an error.
pub struct JsonCartFile {
    path: PathBuf,
}

impl JsonCartFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CartPersistence for JsonCartFile {
    fn load(&self) -> AppResult<Vec<CartItem>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(anyhow::Error::from(err).into()),
        };
        Ok(serde_json::from_str(&raw).map_err(anyhow::Error::from)?)
    }

    fn save(&self, items: &[CartItem]) -> AppResult<()> {
        let raw = serde_json::to_string_pretty(items).map_err(anyhow::Error::from)?;
        fs::write(&self.path, raw).map_err(anyhow::Error::from)?;
        Ok(())
    }
}

/// The shopper's cart. Every mutation is written through the
/// persistence port before the in-memory state changes, so a failed
/// save leaves the cart as it was.
pub struct CartStore {
    items: Vec<CartItem>,
    port: Box<dyn CartPersistence>,
}

impl CartStore {
    /// Open a store over `port`, picking up whatever it already holds.
    pub fn open(port: Box<dyn CartPersistence>) -> AppResult<Self> {
        let items = port.load()?;
        Ok(Self { items, port })
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Add `quantity` of a product, merging with an existing line.
    pub fn add_item(
        &mut self,
        product_id: Uuid,
        quantity: i32,
        product: Option<Product>,
    ) -> AppResult<()> {
        let mut next = self.items.clone();
        match next.iter_mut().find(|item| item.product_id == product_id) {
            Some(line) => line.quantity += quantity,
            None => next.push(CartItem {
                product_id,
                quantity,
                product,
            }),
        }
        self.commit(next)
    }

    /// Drop a product's line. Removing an absent product changes nothing.
    pub fn remove_item(&mut self, product_id: Uuid) -> AppResult<()> {
        let next = self
            .items
            .iter()
            .filter(|item| item.product_id != product_id)
            .cloned()
            .collect();
        self.commit(next)
    }

    /// Set a line's quantity outright. Zero or less removes the line;
    /// a product not in the cart is never inserted.
    pub fn update_quantity(&mut self, product_id: Uuid, quantity: i32) -> AppResult<()> {
        let next = if quantity <= 0 {
            self.items
                .iter()
                .filter(|item| item.product_id != product_id)
                .cloned()
                .collect()
        } else {
            self.items
                .iter()
                .cloned()
                .map(|mut item| {
                    if item.product_id == product_id {
                        item.quantity = quantity;
                    }
                    item
                })
                .collect()
        };
        self.commit(next)
    }

    pub fn clear(&mut self) -> AppResult<()> {
        self.commit(Vec::new())
    }

    /// Sum of sale-or-regular price times quantity. Lines without a
    /// product snapshot price at zero.
    pub fn total_price(&self) -> f64 {
        self.items
            .iter()
            .map(|item| {
                let unit = item
                    .product
                    .as_ref()
                    .map(Product::effective_price)
                    .unwrap_or(0.0);
                unit * f64::from(item.quantity)
            })
            .sum()
    }

    pub fn item_count(&self) -> i32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    fn commit(&mut self, next: Vec<CartItem>) -> AppResult<()> {
        self.port.save(&next)?;
        self.items = next;
        Ok(())
    }
}
