// tests/pagination_tests.rs - Sorting and paging over the sample catalog
//
// Walks a user session: pick a sort, page through, follow URL changes.

mod common;

use common::{priced, titles};
use storefront_state::fixtures::sample_products;
use storefront_state::web_app::state::{page_from_query, query_with_page, PaginationSort};
use storefront_state::{Product, Rating, SortOption};

fn ids(products: &[Product]) -> Vec<u64> {
    products.iter().filter_map(|p| p.id).collect()
}

// ===== Sorting =====

#[test]
fn test_default_sort_keeps_catalog_order() {
    let products = sample_products().unwrap();
    let pagination = PaginationSort::new(4);

    assert_eq!(ids(&pagination.sorted_items(&products)), (1..=10).collect::<Vec<_>>());
}

#[test]
fn test_price_ascending_is_stable_for_ties() {
    let products = sample_products().unwrap();
    let mut pagination = PaginationSort::new(4);
    pagination.set_sort(SortOption::PriceAsc);

    let sorted = pagination.sorted_items(&products);

    // USB Cable (#8) and Cotton Socks (#10) share 9.99 and keep catalog order
    assert_eq!(ids(&sorted[..2]), vec![8, 10]);
    assert!(sorted
        .windows(2)
        .all(|w| w[0].price_or_zero() <= w[1].price_or_zero()));
}

#[test]
fn test_rating_descending() {
    let products = sample_products().unwrap();
    let mut pagination = PaginationSort::new(4);
    pagination.set_sort(SortOption::RatingDesc);

    let page = pagination.paginated_items(&products);

    assert_eq!(ids(&page), vec![8, 3, 4, 2]);
}

#[test]
fn test_missing_values_sort_as_zero() {
    let mut items = priced(&[("B", 5.0), ("A", 1.0)]);
    items.push(Product {
        title: "Unpriced".into(),
        rating: Some(Rating {
            rate: Some(4.0),
            count: None,
        }),
        ..Product::default()
    });

    let mut pagination = PaginationSort::new(10);
    pagination.set_sort(SortOption::PriceAsc);
    assert_eq!(titles(&pagination.sorted_items(&items)), vec!["Unpriced", "A", "B"]);

    pagination.set_sort(SortOption::RatingAsc);
    assert_eq!(titles(&pagination.sorted_items(&items)), vec!["B", "A", "Unpriced"]);
}

#[test]
fn test_rating_of_wrong_shape_sorts_as_zero() {
    let items: Vec<Product> = serde_json::from_str(
        r#"[{"title": "A", "price": 10, "rating": 5}, {"title": "B", "rating": {"rate": 1}}]"#,
    )
    .unwrap();
    let mut pagination = PaginationSort::new(4);
    pagination.set_sort(SortOption::RatingAsc);

    assert_eq!(titles(&pagination.sorted_items(&items)), vec!["A", "B"]);
    assert_eq!(items[0].rating_rate(), 0.0);
}

#[test]
fn test_sorting_does_not_touch_input() {
    let products = sample_products().unwrap();
    let before = products.clone();
    let mut pagination = PaginationSort::new(4);
    pagination.set_sort(SortOption::PriceDesc);

    let _ = pagination.sorted_items(&products);

    assert_eq!(products, before);
}

// ===== Paging =====

#[test]
fn test_paging_through_catalog() {
    let products = sample_products().unwrap();
    let mut pagination = PaginationSort::new(4);

    let first = pagination.view(&products);
    assert_eq!(ids(&first.items), vec![1, 2, 3, 4]);
    assert_eq!((first.display_start, first.display_end), (1, 4));
    assert_eq!(first.page_count, 3);

    pagination.set_page(3);
    let last = pagination.view(&products);
    assert_eq!(ids(&last.items), vec![9, 10]);
    assert_eq!((last.display_start, last.display_end), (9, 10));
    assert_eq!(last.total, 10);
}

#[test]
fn test_page_past_the_end() {
    let products = sample_products().unwrap();
    let mut pagination = PaginationSort::new(4);
    pagination.set_page(7);

    let view = pagination.view(&products);

    assert!(view.items.is_empty());
    assert_eq!(view.display_start, 25);
    assert_eq!(view.display_end, 10);
}

#[test]
fn test_empty_list() {
    let pagination = PaginationSort::new(4);
    let view = pagination.view::<Product>(&[]);

    assert!(view.items.is_empty());
    assert_eq!((view.display_start, view.display_end), (0, 0));
    assert_eq!(view.page_count, 0);
}

#[test]
fn test_sort_change_returns_to_first_page() {
    let products = sample_products().unwrap();
    let mut pagination = PaginationSort::new(4);
    pagination.set_page(3);

    pagination.set_sort(SortOption::PriceDesc);

    assert_eq!(pagination.current_page(), 1);
    assert_eq!(ids(&pagination.paginated_items(&products)), vec![4, 5, 1, 7]);
}

// ===== URL sync =====

#[test]
fn test_session_follows_the_url() {
    let mut pagination = PaginationSort::from_query("?page=2&q=shoes", 4);
    assert_eq!(pagination.current_page(), 2);

    // Back button to a URL without the parameter
    assert!(pagination.sync_from_query("?q=shoes"));
    assert_eq!(pagination.current_page(), 1);

    // Same page again: nothing to do
    assert!(!pagination.sync_from_query("?q=shoes&page=1"));
}

#[test]
fn test_state_writes_back_to_the_url() {
    let mut pagination = PaginationSort::new(4);
    let mut query = String::from("?q=shoes");

    pagination.set_page(3);
    query = pagination.rewrite_query(&query);
    assert_eq!(query, "?q=shoes&page=3");
    assert_eq!(page_from_query(&query), 3);

    pagination.set_page(1);
    query = pagination.rewrite_query(&query);
    assert_eq!(query, "?q=shoes");
}

#[test]
fn test_query_with_page_only_param() {
    assert_eq!(query_with_page("", 2), "?page=2");
    assert_eq!(query_with_page("?page=2", 1), "");
}
