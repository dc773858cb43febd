use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use uuid::Uuid;

use crate::catalog::criteria::{FilterCriteria, PRICE_CEILING, SortColumn, SortDirection};
use crate::catalog::{CatalogBackend, CatalogPage};
use crate::entity::products::{Column, Entity as Products, Model as ProductModel};
use crate::error::{AppError, AppResult};
use crate::models::{Finish, Product};

/// Catalog backend over the `products` table.
pub struct DbCatalog<'a> {
    conn: &'a DatabaseConnection,
}

impl<'a> DbCatalog<'a> {
    pub fn new(conn: &'a DatabaseConnection) -> Self {
        Self { conn }
    }
}

impl CatalogBackend for DbCatalog<'_> {
    async fn query(&self, criteria: &FilterCriteria) -> AppResult<CatalogPage> {
        let mut condition = Condition::all();

        if criteria.min_price > 0.0 {
            condition = condition.add(Column::Price.gte(criteria.min_price));
        }
        if criteria.max_price < PRICE_CEILING {
            condition = condition.add(Column::Price.lte(criteria.max_price));
        }
        if !criteria.finishes.is_empty() {
            let finishes: Vec<&str> = criteria.finishes.iter().map(Finish::as_str).collect();
            condition = condition.add(Column::Finish.is_in(finishes));
        }
        if !criteria.categories.is_empty() {
            condition = condition.add(Column::Category.is_in(criteria.categories.clone()));
        }
        if criteria.min_rating > 0.0 {
            condition = condition.add(Column::Rating.gte(criteria.min_rating));
        }
        if criteria.in_stock_only {
            condition = condition.add(Column::InStock.eq(true));
        }
        if !criteria.search_query.is_empty() {
            let pattern = format!("%{}%", criteria.search_query);
            condition = condition.add(
                Condition::any()
                    .add(Expr::col(Column::Name).ilike(pattern.clone()))
                    .add(Expr::col(Column::Description).ilike(pattern)),
            );
        }

        let (sort_col, sort_dir) = criteria.sort_by.ordering();
        let sort_col = match sort_col {
            SortColumn::Price => Column::Price,
            SortColumn::Rating => Column::Rating,
            SortColumn::CreatedAt => Column::CreatedAt,
        };

        let mut finder = Products::find().filter(condition);
        finder = match sort_dir {
            SortDirection::Asc => finder.order_by_asc(sort_col),
            SortDirection::Desc => finder.order_by_desc(sort_col),
        };

        let total = finder.clone().count(self.conn).await? as i64;

        let items = finder
            .limit(criteria.limit as u64)
            .offset(criteria.offset() as u64)
            .all(self.conn)
            .await?
            .into_iter()
            .map(product_from_entity)
            .collect::<AppResult<Vec<_>>>()?;

        Ok(CatalogPage { items, total })
    }

    async fn product(&self, id: Uuid) -> AppResult<Option<Product>> {
        Products::find_by_id(id)
            .one(self.conn)
            .await?
            .map(product_from_entity)
            .transpose()
    }
}

fn product_from_entity(model: ProductModel) -> AppResult<Product> {
    let finish = Finish::parse(&model.finish).ok_or_else(|| {
        AppError::Internal(anyhow::anyhow!(
            "product {} has unknown finish {:?}",
            model.id,
            model.finish
        ))
    })?;
    Ok(Product {
        id: model.id,
        name: model.name,
        description: model.description,
        price: model.price,
        sale_price: model.sale_price,
        category: model.category,
        finish,
        image_url: model.image_url,
        is_new: model.is_new,
        rating: model.rating,
        reviews_count: model.reviews_count,
        in_stock: model.in_stock,
        created_at: model.created_at.with_timezone(&Utc),
    })
}
