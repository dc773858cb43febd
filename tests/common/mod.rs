use chrono::{DateTime, Duration, TimeZone, Utc};
use uuid::Uuid;

use axum_storefront_api::{
    catalog::{self, CatalogBackend, CatalogPage, FilterCriteria, SortKey},
    models::{Finish, Product},
};

// Whole seconds only: Postgres keeps microseconds, so sub-second
// fixture timestamps would not survive a round trip.
fn day(offset: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap() - Duration::days(offset)
}

/// Eight products spanning three categories, five finishes, distinct
/// prices, ratings and ages. Index 0 is the newest.
pub fn fixture_products() -> Vec<Product> {
    let rows: Vec<(&str, &str, f64, Option<f64>, &str, Finish, f64, i32, bool)> = vec![
        (
            "Monarch Rainfall Shower",
            "Ceiling-mounted rainfall head",
            420.0,
            None,
            "shower-heads",
            Finish::Chrome,
            4.9,
            120,
            true,
        ),
        (
            "Vortex Handheld Shower",
            "High-pressure handheld spray",
            189.0,
            Some(149.0),
            "shower-heads",
            Finish::MatteBlack,
            4.5,
            80,
            true,
        ),
        (
            "Cascade Shower System",
            "Thermostatic shower system",
            980.0,
            None,
            "shower-heads",
            Finish::BrushedGold,
            4.7,
            64,
            false,
        ),
        (
            "Aurora Basin Tap",
            "Brass basin mixer",
            240.0,
            None,
            "taps",
            Finish::BrushedGold,
            4.2,
            45,
            true,
        ),
        (
            "Atlas Kitchen Mixer",
            "Pull-down kitchen spout",
            310.0,
            Some(279.0),
            "taps",
            Finish::Gunmetal,
            3.9,
            150,
            true,
        ),
        (
            "Plinth Towel Rail",
            "Heated towel rail",
            150.0,
            None,
            "accessories",
            Finish::Nickel,
            3.4,
            12,
            false,
        ),
        (
            "Meridian Robe Hook",
            "Solid-brass robe hook",
            28.0,
            None,
            "accessories",
            Finish::MatteBlack,
            4.0,
            9,
            true,
        ),
        (
            "Doric Floor Drain",
            "Linear floor drain",
            95.0,
            None,
            "accessories",
            Finish::Chrome,
            2.8,
            4,
            true,
        ),
    ];

    rows.into_iter()
        .enumerate()
        .map(
            |(i, (name, desc, price, sale_price, category, finish, rating, reviews, in_stock))| {
                Product {
                    id: Uuid::from_u128((i + 1) as u128),
                    name: name.to_string(),
                    description: Some(desc.to_string()),
                    price,
                    sale_price,
                    category: category.to_string(),
                    finish,
                    image_url: format!("/images/fixture-{}.jpg", i + 1),
                    is_new: i < 2,
                    rating,
                    reviews_count: reviews,
                    in_stock,
                    created_at: day(i as i64),
                }
            },
        )
        .collect()
}

fn names(page: &CatalogPage) -> Vec<&str> {
    page.items.iter().map(|p| p.name.as_str()).collect()
}

/// Behaviour every catalog backend has to show over [`fixture_products`].
/// Run against the in-memory backend in unit tests and against the
/// database backend in the integration flow.
pub async fn assert_backend_contract<B: CatalogBackend>(backend: &B) -> anyhow::Result<()> {
    // Defaults: everything, newest first.
    let page = catalog::search(backend, &FilterCriteria::default()).await?;
    assert_eq!(page.total, 8);
    assert_eq!(
        names(&page),
        [
            "Monarch Rainfall Shower",
            "Vortex Handheld Shower",
            "Cascade Shower System",
            "Aurora Basin Tap",
            "Atlas Kitchen Mixer",
            "Plinth Towel Rail",
            "Meridian Robe Hook",
            "Doric Floor Drain",
        ]
    );

    // Explicit newest matches the relevance fallback.
    let criteria = FilterCriteria {
        sort_by: SortKey::Newest,
        ..Default::default()
    };
    let newest = catalog::search(backend, &criteria).await?;
    assert_eq!(names(&newest), names(&page));

    // Price window is inclusive on both ends.
    let criteria = FilterCriteria {
        min_price: 200.0,
        max_price: 500.0,
        ..Default::default()
    };
    let page = catalog::search(backend, &criteria).await?;
    assert_eq!(page.total, 3);
    for product in &page.items {
        assert!(product.price >= 200.0 && product.price <= 500.0);
    }

    // Finish set is a disjunction within the clause.
    let criteria = FilterCriteria {
        finishes: vec![Finish::MatteBlack, Finish::Chrome],
        ..Default::default()
    };
    let page = catalog::search(backend, &criteria).await?;
    assert_eq!(page.total, 4);

    // Category clause.
    let criteria = FilterCriteria {
        categories: vec!["taps".to_string()],
        ..Default::default()
    };
    let page = catalog::search(backend, &criteria).await?;
    assert_eq!(page.total, 2);

    // Rating threshold keeps the boundary value.
    let criteria = FilterCriteria {
        min_rating: 4.5,
        ..Default::default()
    };
    let page = catalog::search(backend, &criteria).await?;
    assert_eq!(page.total, 3);

    // Stock toggle.
    let criteria = FilterCriteria {
        in_stock_only: true,
        ..Default::default()
    };
    let page = catalog::search(backend, &criteria).await?;
    assert_eq!(page.total, 6);

    // Search matches name or description, case-insensitively.
    let criteria = FilterCriteria {
        search_query: "mixer".to_string(),
        ..Default::default()
    };
    let page = catalog::search(backend, &criteria).await?;
    let mut found = names(&page);
    found.sort_unstable();
    assert_eq!(found, ["Atlas Kitchen Mixer", "Aurora Basin Tap"]);

    // Clauses combine conjunctively.
    let criteria = FilterCriteria {
        categories: vec!["shower-heads".to_string()],
        in_stock_only: true,
        max_price: 500.0,
        ..Default::default()
    };
    let page = catalog::search(backend, &criteria).await?;
    assert_eq!(
        names(&page),
        ["Monarch Rainfall Shower", "Vortex Handheld Shower"]
    );

    let criteria = FilterCriteria {
        min_price: 50.0,
        max_price: 200.0,
        finishes: vec![Finish::Chrome],
        in_stock_only: true,
        ..Default::default()
    };
    let page = catalog::search(backend, &criteria).await?;
    assert_eq!(page.total, 1);
    assert_eq!(names(&page), ["Doric Floor Drain"]);

    // Rating sort is descending.
    let criteria = FilterCriteria {
        sort_by: SortKey::Rating,
        ..Default::default()
    };
    let page = catalog::search(backend, &criteria).await?;
    assert_eq!(names(&page)[..3], [
        "Monarch Rainfall Shower",
        "Cascade Shower System",
        "Vortex Handheld Shower",
    ]);

    // Pagination slices after sorting; total counts every match.
    let mut criteria = FilterCriteria {
        sort_by: SortKey::PriceAsc,
        limit: 3,
        ..Default::default()
    };
    let page = catalog::search(backend, &criteria).await?;
    assert_eq!(page.total, 8);
    assert_eq!(
        names(&page),
        ["Meridian Robe Hook", "Doric Floor Drain", "Plinth Towel Rail"]
    );

    criteria.page = 2;
    let page = catalog::search(backend, &criteria).await?;
    assert_eq!(page.total, 8);
    assert_eq!(
        names(&page),
        ["Vortex Handheld Shower", "Aurora Basin Tap", "Atlas Kitchen Mixer"]
    );

    criteria.page = 3;
    let page = catalog::search(backend, &criteria).await?;
    assert_eq!(
        names(&page),
        ["Monarch Rainfall Shower", "Cascade Shower System"]
    );

    // A page past the end is empty but still counted.
    criteria.page = 4;
    let page = catalog::search(backend, &criteria).await?;
    assert!(page.items.is_empty());
    assert_eq!(page.total, 8);

    // Price descending mirrors ascending.
    let criteria = FilterCriteria {
        sort_by: SortKey::PriceDesc,
        ..Default::default()
    };
    let page = catalog::search(backend, &criteria).await?;
    assert_eq!(
        names(&page)[..2],
        ["Cascade Shower System", "Monarch Rainfall Shower"]
    );

    // Point lookup.
    let hit = backend.product(Uuid::from_u128(1)).await?;
    assert_eq!(
        hit.map(|p| p.name),
        Some("Monarch Rainfall Shower".to_string())
    );
    let miss = backend.product(Uuid::from_u128(999)).await?;
    assert!(miss.is_none());

    Ok(())
}
