//! Gateway tests against a live Postgres
//!
//! Connection parameters come from `FLYWAY_DB`, `FLYWAY_USER` and
//! `FLYWAY_PASS`. The tests share the `category` table, so run them
//! serially: `cargo test --test postgres_gateway -- --ignored --test-threads=1`.

use catalog_admin::domain::category::{
    Category, CategoryGateway, CategoryId, CategorySearchQuery, SortDirection, SortField,
};
use catalog_admin::domain::entity::Entity;
use catalog_admin::infrastructure::config::DatabaseConfig;
use catalog_admin::infrastructure::persistence::{
    connect_pool, run_migrations, PostgresCategoryGateway,
};

async fn gateway() -> PostgresCategoryGateway {
    let pool = connect_pool(&DatabaseConfig::from_env())
        .await
        .expect("database must be reachable");
    run_migrations(&pool).await.expect("migrations must apply");
    sqlx::query("DELETE FROM category")
        .execute(&pool)
        .await
        .expect("table must be clearable");
    PostgresCategoryGateway::new(pool)
}

fn category(name: &str, description: Option<&str>) -> Category {
    Category::new_category(Some(name.to_string()), description.map(str::to_string), true)
}

#[tokio::test]
#[ignore = "requires a running Postgres"]
async fn test_create_find_update_delete() {
    let gateway = gateway().await;
    let filmes = Category::new_category(Some("Filmes".to_string()), Some("A categoria mais assistida".to_string()), false);
    let id = *filmes.id();

    let created = gateway.create(filmes.clone()).await.unwrap();
    assert_eq!(created.id(), &id);
    assert_eq!(created.created_at(), filmes.created_at());
    assert_eq!(created.deleted_at(), filmes.deleted_at());

    let found = gateway.find_by_id(&id).await.unwrap().unwrap();
    assert_eq!(found.name(), Some("Filmes"));
    assert!(!found.is_active());

    let updated = gateway
        .update(found.update(Some("Filmes 2".to_string()), None, true))
        .await
        .unwrap();
    assert_eq!(updated.name(), Some("Filmes 2"));
    assert!(updated.description().is_none());
    assert!(updated.deleted_at().is_none());

    gateway.delete_by_id(&id).await.unwrap();
    assert!(gateway.find_by_id(&id).await.unwrap().is_none());

    gateway.delete_by_id(&id).await.unwrap();
}

#[tokio::test]
#[ignore = "requires a running Postgres"]
async fn test_update_unknown_category_fails() {
    let gateway = gateway().await;
    assert!(gateway.update(category("Filmes", None)).await.is_err());
    assert!(gateway.find_by_id(&CategoryId::unique()).await.unwrap().is_none());
}

#[tokio::test]
#[ignore = "requires a running Postgres"]
async fn test_find_all_search_sort_and_page() {
    let gateway = gateway().await;
    for (name, description) in [
        ("Filmes", Some("A categoria mais assistida")),
        ("Series", None),
        ("Documentarios", Some("Filmes reais")),
        ("Kids", Some("100% infantil")),
    ] {
        gateway.create(category(name, description)).await.unwrap();
    }

    let query = CategorySearchQuery::new(1, 2, "", SortField::Name, SortDirection::Asc);
    let page = gateway.find_all(&query).await.unwrap();
    assert_eq!(page.total, 4);
    let names: Vec<_> = page.items.iter().filter_map(|c| c.name()).collect();
    assert_eq!(names, vec!["Kids", "Series"]);

    let query = CategorySearchQuery::new(0, 10, "filmes", SortField::Name, SortDirection::Desc);
    let page = gateway.find_all(&query).await.unwrap();
    let names: Vec<_> = page.items.iter().filter_map(|c| c.name()).collect();
    assert_eq!(names, vec!["Filmes", "Documentarios"]);

    let query = CategorySearchQuery::new(0, 10, "%", SortField::Name, SortDirection::Asc);
    let page = gateway.find_all(&query).await.unwrap();
    assert_eq!(page.total, 1);

    let query = CategorySearchQuery::new(0, 10, "", SortField::Description, SortDirection::Asc);
    let page = gateway.find_all(&query).await.unwrap();
    assert_eq!(page.items.last().and_then(|c| c.name()), Some("Series"));
}

#[tokio::test]
#[ignore = "requires a running Postgres"]
async fn test_padded_max_length_name_fits_column() {
    let gateway = gateway().await;
    let name = "a".repeat(255);
    let padded = Category::new_category(Some(format!("  {name}  ")), Some("d".repeat(4000)), true);
    let id = *padded.id();

    gateway.create(padded).await.unwrap();
    let found = gateway.find_by_id(&id).await.unwrap().unwrap();
    assert_eq!(found.name(), Some(name.as_str()));
    assert_eq!(found.description().map(|d| d.chars().count()), Some(4000));
}

#[tokio::test]
#[ignore = "requires a running Postgres"]
async fn test_ping() {
    let gateway = gateway().await;
    gateway.ping().await.unwrap();
}
