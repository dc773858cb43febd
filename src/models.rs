use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Surface treatment of a product. Stored as kebab-case text in the
/// database and on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Finish {
    Chrome,
    MatteBlack,
    BrushedGold,
    Gunmetal,
    Nickel,
}

impl Finish {
    pub fn as_str(&self) -> &'static str {
        match self {
            Finish::Chrome => "chrome",
            Finish::MatteBlack => "matte-black",
            Finish::BrushedGold => "brushed-gold",
            Finish::Gunmetal => "gunmetal",
            Finish::Nickel => "nickel",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "chrome" => Some(Finish::Chrome),
            "matte-black" => Some(Finish::MatteBlack),
            "brushed-gold" => Some(Finish::BrushedGold),
            "gunmetal" => Some(Finish::Gunmetal),
            "nickel" => Some(Finish::Nickel),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<f64>,
    pub category: String,
    pub finish: Finish,
    pub image_url: String,
    #[serde(default)]
    pub is_new: bool,
    pub rating: f64,
    pub reviews_count: i32,
    pub in_stock: bool,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Price a shopper actually pays: the sale price when one is set.
    pub fn effective_price(&self) -> f64 {
        self.sale_price.unwrap_or(self.price)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: Uuid,
    pub quantity: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<Product>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Completed,
    Failed,
    Refunded,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Uuid,
    pub items: Vec<CartItem>,
    pub total_amount: f64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}
