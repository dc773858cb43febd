use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::models::{Finish, Product};

const FINISH_CYCLE: [Finish; 5] = [
    Finish::MatteBlack,
    Finish::BrushedGold,
    Finish::Chrome,
    Finish::Gunmetal,
    Finish::Nickel,
];

/// The demo shower-head shelf: sixteen products with a spread of
/// prices, finishes and stock states. Backs the category listing until
/// real merchandising data lands, and doubles as seed data.
pub fn shower_heads() -> Vec<Product> {
    let now = Utc::now();
    (0..16)
        .map(|i| {
            let has_sale = i == 2 || i == 7;
            Product {
                id: Uuid::new_v4(),
                name: if i % 4 == 0 {
                    "Monarch Rainfall Shower".to_string()
                } else {
                    "Vortex High-Pressure Handheld".to_string()
                },
                description: None,
                price: 189.0 + f64::from(i) * 25.0,
                sale_price: has_sale.then(|| 149.0 + f64::from(i) * 10.0),
                category: "shower-heads".to_string(),
                finish: FINISH_CYCLE[(i % 5) as usize],
                image_url: "/images/hero-showerhead.jpg".to_string(),
                is_new: i < 3,
                rating: 4.5 + f64::from(i % 5) * 0.1,
                reviews_count: 80 + i * 12,
                in_stock: i != 5 && i != 11,
                // Staggered so newest-first ordering is deterministic.
                created_at: now - Duration::days(i.into()),
            }
        })
        .collect()
}
