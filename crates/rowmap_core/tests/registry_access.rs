use rowmap_core::{ManagerRegistry, RecordType, StoreHandle};
use std::sync::Arc;

struct Product;

impl RecordType for Product {
    const TABLE: &'static str = "products";
}

struct Order;

impl RecordType for Order {
    const TABLE: &'static str = "orders";
}

#[test]
fn repeated_lookups_return_the_same_manager() {
    let registry = ManagerRegistry::new(Arc::new(StoreHandle::new()));

    let first = registry.manager_for::<Product>();
    let second = registry.manager_for::<Product>();
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn distinct_record_types_get_distinct_managers() {
    let registry = ManagerRegistry::new(Arc::new(StoreHandle::new()));

    let products = registry.manager_for::<Product>();
    let orders = registry.manager_for::<Order>();
    assert!(!Arc::ptr_eq(&products, &orders));
    assert_eq!(products.table_name(), "products");
    assert_eq!(orders.table_name(), "orders");
}

#[test]
fn record_type_accessor_reaches_the_registry_manager() {
    let registry = ManagerRegistry::new(Arc::new(StoreHandle::new()));

    let via_trait = Product::manager(&registry);
    let via_registry = registry.manager_for::<Product>();
    assert!(Arc::ptr_eq(&via_trait, &via_registry));
    assert_eq!(via_trait.record_name(), "Product");
}

#[test]
fn separate_registries_produce_separate_managers() {
    let handle = Arc::new(StoreHandle::new());
    let registry_a = ManagerRegistry::new(Arc::clone(&handle));
    let registry_b = ManagerRegistry::new(handle);

    assert!(!Arc::ptr_eq(
        &registry_a.manager_for::<Product>(),
        &registry_b.manager_for::<Product>()
    ));
}

#[test]
fn lookups_from_multiple_threads_share_one_manager() {
    let registry = ManagerRegistry::new(Arc::new(StoreHandle::new()));

    let managers = std::thread::scope(|scope| {
        let handles = [
            scope.spawn(|| registry.manager_for::<Product>()),
            scope.spawn(|| registry.manager_for::<Product>()),
        ];
        handles.map(|handle| handle.join().unwrap())
    });

    assert!(Arc::ptr_eq(&managers[0], &managers[1]));
}
