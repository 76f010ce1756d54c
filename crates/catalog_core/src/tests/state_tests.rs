use super::*;
use shared::domain::ProductId;

fn product(id: &str, name: &str, description: &str, price: f64) -> Product {
    Product {
        id: ProductId(id.to_string()),
        name: name.to_string(),
        description: description.to_string(),
        price,
        images: Vec::new(),
    }
}

fn fruit_catalog() -> Vec<Product> {
    vec![
        product("p1", "Apple", "red fruit", 3.0),
        product("p2", "Banana", "yellow fruit", 1.0),
        product("p3", "Desk", "wooden furniture", 120.0),
    ]
}

fn names(products: &[Product]) -> Vec<&str> {
    products.iter().map(|p| p.name.as_str()).collect()
}

#[test]
fn loading_flag_tracks_the_fetch_lifecycle() {
    let initial = CatalogState::default();
    assert!(!initial.loading);

    let started = reduce(&initial, CatalogAction::LoadStarted);
    assert!(started.loading);

    let succeeded = reduce(&started, CatalogAction::LoadSucceeded(fruit_catalog()));
    assert!(!succeeded.loading);

    let restarted = reduce(&succeeded, CatalogAction::LoadStarted);
    let failed = reduce(&restarted, CatalogAction::LoadFailed("boom".to_string()));
    assert!(!failed.loading);
}

#[test]
fn load_failure_keeps_prior_lists_and_surfaces_the_error() {
    let loaded = reduce(
        &CatalogState::default(),
        CatalogAction::LoadSucceeded(fruit_catalog()),
    );

    let failed = reduce(&loaded, CatalogAction::LoadFailed("endpoint down".to_string()));
    assert_eq!(failed.products, loaded.products);
    assert_eq!(failed.visible, loaded.visible);
    assert_eq!(failed.load_error.as_deref(), Some("endpoint down"));

    let dismissed = reduce(&failed, CatalogAction::LoadErrorDismissed);
    assert_eq!(dismissed.load_error, None);
}

#[test]
fn first_load_failure_leaves_both_lists_empty() {
    let failed = reduce(
        &reduce(&CatalogState::default(), CatalogAction::LoadStarted),
        CatalogAction::LoadFailed("offline".to_string()),
    );
    assert!(failed.products.is_empty());
    assert!(failed.visible.is_empty());
}

#[test]
fn successful_load_derives_the_visible_list() {
    let loaded = reduce(
        &CatalogState::default(),
        CatalogAction::LoadSucceeded(fruit_catalog()),
    );
    assert_eq!(names(&loaded.visible), vec!["Apple", "Banana", "Desk"]);
    assert_eq!(loaded.load_error, None);
}

#[test]
fn empty_load_renders_an_empty_visible_list_without_error() {
    let loaded = reduce(
        &reduce(&CatalogState::default(), CatalogAction::LoadStarted),
        CatalogAction::LoadSucceeded(Vec::new()),
    );
    assert!(loaded.products.is_empty());
    assert!(loaded.visible.is_empty());
    assert!(!loaded.loading);
    assert_eq!(loaded.load_error, None);
}

#[test]
fn filter_commit_always_derives_from_the_full_list() {
    let loaded = reduce(
        &CatalogState::default(),
        CatalogAction::LoadSucceeded(fruit_catalog()),
    );

    let narrowed = reduce(&loaded, CatalogAction::FilterCommitted("apple".to_string()));
    assert_eq!(names(&narrowed.visible), vec!["Apple"]);

    // Widening the query again must not be limited by the previous subset.
    let widened = reduce(&narrowed, CatalogAction::FilterCommitted("fruit".to_string()));
    assert_eq!(names(&widened.visible), vec!["Apple", "Banana"]);
}

#[test]
fn filter_after_sort_preserves_the_active_ordering() {
    let loaded = reduce(
        &CatalogState::default(),
        CatalogAction::LoadSucceeded(fruit_catalog()),
    );
    let sorted = reduce(&loaded, CatalogAction::SortKeyChanged(SortKey::PriceDesc));
    assert_eq!(names(&sorted.visible), vec!["Desk", "Apple", "Banana"]);

    // The filtered subset stays price-descending instead of reverting to
    // source order.
    let filtered = reduce(&sorted, CatalogAction::FilterCommitted("fruit".to_string()));
    assert_eq!(names(&filtered.visible), vec!["Apple", "Banana"]);
}

#[test]
fn filter_then_price_sort_matches_the_catalog_scenario() {
    let loaded = reduce(
        &CatalogState::default(),
        CatalogAction::LoadSucceeded(vec![
            product("p1", "Apple", "red fruit", 3.0),
            product("p2", "Banana", "yellow fruit", 1.0),
        ]),
    );

    let filtered = reduce(&loaded, CatalogAction::FilterCommitted("fruit".to_string()));
    assert_eq!(names(&filtered.visible), vec!["Apple", "Banana"]);

    let sorted = reduce(&filtered, CatalogAction::SortKeyChanged(SortKey::PriceAsc));
    assert_eq!(names(&sorted.visible), vec!["Banana", "Apple"]);
    assert_eq!(sorted.visible[0].price, 1.0);
    assert_eq!(sorted.visible[1].price, 3.0);
}

#[test]
fn reload_clears_a_previous_error_banner() {
    let failed = reduce(
        &CatalogState::default(),
        CatalogAction::LoadFailed("endpoint down".to_string()),
    );
    let reloading = reduce(&failed, CatalogAction::LoadStarted);
    assert!(reloading.loading);
    assert_eq!(reloading.load_error, None);
}
