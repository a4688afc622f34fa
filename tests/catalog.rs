use migration::{Migrator, MigratorTrait};
use reelrank::{catalog::MovieCatalog, entities::movie, error::AppError, models::NewMovie};
use sea_orm::{ConnectOptions, Database, EntityTrait};

async fn catalog() -> MovieCatalog {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1);
    let db = Database::connect(options).await.expect("connect");
    Migrator::up(&db, None).await.expect("migrate");
    MovieCatalog::new(db)
}

fn new_movie(title: &str, rating: f64) -> NewMovie {
    NewMovie {
        title: title.to_string(),
        year: 2010,
        description: Some("A movie worth arguing about.".to_string()),
        rating,
        ranking: None,
        review: "Watched it twice.".to_string(),
        img_url: "https://example.com/poster.jpg".to_string(),
    }
}

async fn all_movies(catalog: &MovieCatalog) -> Vec<movie::Model> {
    movie::Entity::find().all(catalog.db()).await.expect("select")
}

#[tokio::test]
async fn ranks_form_a_permutation_ordered_by_rating() {
    let catalog = catalog().await;
    catalog.add(new_movie("Solaris", 7.5)).await.unwrap();
    catalog.add(new_movie("Stalker", 9.1)).await.unwrap();
    catalog.add(new_movie("Alien", 3.2)).await.unwrap();
    catalog.add(new_movie("Heat", 8.0)).await.unwrap();

    let movies = catalog.list_ranked().await.unwrap();

    let mut ranks: Vec<i32> = movies.iter().map(|m| m.ranking.unwrap()).collect();
    ranks.sort_unstable();
    assert_eq!(ranks, vec![1, 2, 3, 4]);

    let rank_of = |title: &str| {
        movies.iter().find(|m| m.title == title).and_then(|m| m.ranking).unwrap()
    };
    assert_eq!(rank_of("Stalker"), 4);
    assert_eq!(rank_of("Alien"), 1);

    // Best-first display order.
    assert_eq!(movies[0].title, "Stalker");
    assert_eq!(movies[3].title, "Alien");
}

#[tokio::test]
async fn ranks_are_persisted_before_the_list_is_returned() {
    let catalog = catalog().await;
    let low = catalog.add(new_movie("Klute", 6.0)).await.unwrap();
    let high = catalog.add(new_movie("Ran", 9.0)).await.unwrap();

    assert_eq!(low.ranking, None);
    catalog.list_ranked().await.unwrap();

    assert_eq!(catalog.find(low.id).await.unwrap().ranking, Some(1));
    assert_eq!(catalog.find(high.id).await.unwrap().ranking, Some(2));
}

#[tokio::test]
async fn equal_ratings_keep_insertion_order() {
    let catalog = catalog().await;
    let first = catalog.add(new_movie("Vertigo", 8.0)).await.unwrap();
    let second = catalog.add(new_movie("Rear Window", 8.0)).await.unwrap();

    catalog.list_ranked().await.unwrap();

    assert_eq!(catalog.find(first.id).await.unwrap().ranking, Some(1));
    assert_eq!(catalog.find(second.id).await.unwrap().ranking, Some(2));
}

#[tokio::test]
async fn duplicate_titles_are_rejected() {
    let catalog = catalog().await;
    catalog.add(new_movie("Inception", 8.8)).await.unwrap();

    let err = catalog.add(new_movie("Inception", 5.0)).await.unwrap_err();
    assert!(matches!(err, AppError::DuplicateTitle(_)));
    assert_eq!(all_movies(&catalog).await.len(), 1);
}

#[tokio::test]
async fn updating_a_missing_movie_leaves_the_store_unchanged() {
    let catalog = catalog().await;
    let movie = catalog.add(new_movie("Brazil", 8.5)).await.unwrap();

    let err = catalog.update_review(movie.id + 1, 1.0, "nope".to_string()).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound));

    let stored = catalog.find(movie.id).await.unwrap();
    assert_eq!(stored.rating, 8.5);
    assert_eq!(stored.review, "Watched it twice.");
}

#[tokio::test]
async fn deleting_a_missing_movie_leaves_the_store_unchanged() {
    let catalog = catalog().await;
    let movie = catalog.add(new_movie("Brazil", 8.5)).await.unwrap();

    let err = catalog.remove(movie.id + 1).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound));
    assert_eq!(all_movies(&catalog).await.len(), 1);
}

#[tokio::test]
async fn update_changes_only_rating_and_review() {
    let catalog = catalog().await;
    let movie = catalog.add(new_movie("Heat", 8.0)).await.unwrap();

    let updated = catalog
        .update_review(movie.id, 9.5, "Even better on rewatch.".to_string())
        .await
        .unwrap();

    assert_eq!(updated.rating, 9.5);
    assert_eq!(updated.review, "Even better on rewatch.");
    assert_eq!(updated.title, "Heat");
    assert_eq!(updated.year, 2010);
    assert_eq!(updated.img_url, "https://example.com/poster.jpg");
}

#[tokio::test]
async fn add_edit_delete_reranks_the_catalog() {
    let catalog = catalog().await;

    let inception = catalog.add(new_movie("Inception", 9.0)).await.unwrap();
    let movies = catalog.list_ranked().await.unwrap();
    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0].ranking, Some(1));

    let second = catalog.add(new_movie("Tenet", 7.0)).await.unwrap();
    catalog.list_ranked().await.unwrap();
    assert_eq!(catalog.find(inception.id).await.unwrap().ranking, Some(2));
    assert_eq!(catalog.find(second.id).await.unwrap().ranking, Some(1));

    catalog.update_review(second.id, 10.0, "Changed my mind.".to_string()).await.unwrap();
    catalog.list_ranked().await.unwrap();
    assert_eq!(catalog.find(second.id).await.unwrap().ranking, Some(2));
    assert_eq!(catalog.find(inception.id).await.unwrap().ranking, Some(1));

    catalog.remove(inception.id).await.unwrap();
    let movies = catalog.list_ranked().await.unwrap();
    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0].title, "Tenet");
    assert_eq!(movies[0].ranking, Some(1));
}
