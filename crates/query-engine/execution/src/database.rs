//! Creating and seeding the orders table.

use query_engine_metadata::metadata::{Category, OrderStatus, TableInfo};
use sqlx::SqlitePool;
use tracing::{info_span, Instrument};

use crate::error::Error;

/// One row of the sample data set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleOrder {
    pub order_id: &'static str,
    pub category: Category,
    pub status: OrderStatus,
    pub price: f64,
    pub order_date: &'static str,
}

const fn order(
    order_id: &'static str,
    category: Category,
    status: OrderStatus,
    price: f64,
    order_date: &'static str,
) -> SampleOrder {
    SampleOrder {
        order_id,
        category,
        status,
        price,
        order_date,
    }
}

/// The orders a fresh database is seeded with.
pub const SAMPLE_ORDERS: [SampleOrder; 9] = [
    order("ODID001", Category::TShirts, OrderStatus::Shipped, 1599.0, "2025-03-28 14:30"),
    order("ODID002", Category::TShirts, OrderStatus::Pending, 2099.0, "2025-03-29 10:15"),
    order("ODID003", Category::TShirts, OrderStatus::Delivered, 1299.0, "2025-03-27 18:45"),
    order("ODID004", Category::Shoes, OrderStatus::Cancelled, 3999.0, "2025-03-26 08:00"),
    order("ODID005", Category::Shoes, OrderStatus::Shipped, 6999.0, "2025-03-28 20:30"),
    order("ODID006", Category::Shoes, OrderStatus::Delivered, 3099.0, "2025-03-25 16:20"),
    order("ODID007", Category::Hats, OrderStatus::Pending, 899.0, "2025-03-29 09:50"),
    order("ODID008", Category::Hats, OrderStatus::Shipped, 1149.0, "2025-03-28 22:10"),
    order("ODID009", Category::Hats, OrderStatus::Cancelled, 1499.0, "2025-03-27 11:05"),
];

/// Create the orders table if it is missing and insert the sample orders.
///
/// Orders already present (by `order_id`) are left alone, so seeding an
/// existing database is a no-op.
pub async fn seed(pool: &SqlitePool, table: &TableInfo) -> Result<(), Error> {
    let table_name = &table.table_name;
    let category = &table.columns.category;
    let status = &table.columns.status;

    let create_table = format!(
        "CREATE TABLE IF NOT EXISTS {table_name} (\
            id INTEGER PRIMARY KEY AUTOINCREMENT, \
            order_id TEXT UNIQUE, \
            {category} TEXT, \
            {status} TEXT, \
            price REAL, \
            order_date TEXT\
        )"
    );
    let insert_order = format!(
        "INSERT OR IGNORE INTO {table_name} \
            (order_id, {category}, {status}, price, order_date) \
            VALUES (?, ?, ?, ?, ?)"
    );

    async {
        let mut transaction = pool.begin().await?;

        sqlx::query(&create_table).execute(&mut *transaction).await?;

        let mut inserted = 0;
        for sample in &SAMPLE_ORDERS {
            let result = sqlx::query(&insert_order)
                .bind(sample.order_id)
                .bind(sample.category.as_str())
                .bind(sample.status.as_str())
                .bind(sample.price)
                .bind(sample.order_date)
                .execute(&mut *transaction)
                .await?;
            inserted += result.rows_affected();
        }

        transaction.commit().await?;

        tracing::info!(table = %table_name, inserted, "seeded orders table");
        Ok::<(), Error>(())
    }
    .instrument(info_span!("Seed database"))
    .await
}
