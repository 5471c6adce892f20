//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `rowmap_core` linkage end to end.
//! - Keep output deterministic for quick local sanity checks.

use rowmap_core::{
    default_log_level, init_logging, FieldMap, ManagerRegistry, RecordType, StatementExecutor,
    StoreHandle, Value,
};
use std::sync::Arc;

struct Product;

impl RecordType for Product {
    const TABLE: &'static str = "products";
}

struct User;

impl RecordType for User {
    const TABLE: &'static str = "users";
}

struct Order;

impl RecordType for Order {
    const TABLE: &'static str = "orders";
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let log_dir = std::env::temp_dir().join("rowmap-cli-logs");
    if let Err(error) = init_logging(default_log_level(), &log_dir.to_string_lossy()) {
        eprintln!("logging disabled: {error}");
    }

    let handle = Arc::new(StoreHandle::new());
    handle.connect_in_memory()?;

    let executor = StatementExecutor::new(&handle);
    executor.execute(
        "CREATE TABLE products (id INTEGER PRIMARY KEY, title TEXT NOT NULL, price REAL NOT NULL, brand TEXT NOT NULL);",
        &[],
    )?;
    executor.execute(
        "CREATE TABLE users (id INTEGER PRIMARY KEY, first_name TEXT NOT NULL, last_name TEXT NOT NULL, email TEXT NOT NULL);",
        &[],
    )?;
    executor.execute(
        "CREATE TABLE orders (id INTEGER PRIMARY KEY, product_title TEXT NOT NULL, quantity INTEGER NOT NULL);",
        &[],
    )?;

    // Staging-style bulk load, one prepared statement over every tuple.
    executor.execute_many(
        "INSERT INTO products (id, title, price, brand) VALUES (?, ?, ?, ?);",
        &[
            vec![
                Value::Integer(1),
                Value::Text("Espresso Machine".to_string()),
                Value::Real(249.0),
                Value::Text("Brewline".to_string()),
            ],
            vec![
                Value::Integer(2),
                Value::Text("Hand Grinder".to_string()),
                Value::Real(79.5),
                Value::Text("Brewline".to_string()),
            ],
        ],
    )?;

    let registry = ManagerRegistry::new(Arc::clone(&handle));

    println!("catalog after staging:");
    for product in Product::manager(&registry).select(&["id", "title", "price", "brand"])? {
        println!("{product}");
    }

    let signup = FieldMap::new()
        .with("id", 100_i64)
        .with("first_name", "Ada".to_string())
        .with("last_name", "Lovelace".to_string())
        .with("email", "ada@example.com".to_string());
    User::manager(&registry).insert(&[signup])?;

    println!("users after sign-up:");
    for user in User::manager(&registry).select(&["id", "first_name", "last_name", "email"])? {
        println!("{user}");
    }

    Product::manager(&registry).update(&FieldMap::new().with("price", Value::Real(59.0)))?;

    println!("catalog after clearance pricing:");
    for product in Product::manager(&registry).select(&["title", "price"])? {
        println!("{product}");
    }

    let orders = Order::manager(&registry);
    orders.insert(&[FieldMap::new()
        .with("id", 1_i64)
        .with("product_title", "Hand Grinder".to_string())
        .with("quantity", 2_i64)])?;
    orders.delete()?;
    println!("orders after cart clear: {}", orders.select(&["id"])?.len());

    println!("rowmap_core version={}", rowmap_core::core_version());
    Ok(())
}
