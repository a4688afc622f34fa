use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use tracing::debug;

use crate::{
    entities::movie,
    error::{AppError, AppResult},
    models::NewMovie,
};

#[derive(Clone)]
pub struct MovieCatalog {
    db: DatabaseConnection,
}

impl MovieCatalog {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Reassigns every movie's rank from its rating and returns the catalog
    /// ordered best-first.
    ///
    /// Ranks run 1..=n in ascending rating order, so the highest-rated movie
    /// carries the largest rank number. Equal ratings keep insertion order.
    pub async fn list_ranked(&self) -> AppResult<Vec<movie::Model>> {
        let mut movies = movie::Entity::find()
            .order_by_asc(movie::Column::Rating)
            .order_by_asc(movie::Column::Id)
            .all(&self.db)
            .await?;

        for (i, m) in movies.iter_mut().enumerate() {
            let rank = i as i32 + 1;
            if m.ranking != Some(rank) {
                let mut active: movie::ActiveModel = m.clone().into();
                active.ranking = Set(Some(rank));
                active.update(&self.db).await?;
                m.ranking = Some(rank);
            }
        }

        movies.reverse();
        Ok(movies)
    }

    pub async fn find(&self, id: i32) -> AppResult<movie::Model> {
        movie::Entity::find_by_id(id).one(&self.db).await?.ok_or(AppError::NotFound)
    }

    pub async fn add(&self, new: NewMovie) -> AppResult<movie::Model> {
        let existing = movie::Entity::find()
            .filter(movie::Column::Title.eq(&new.title))
            .one(&self.db)
            .await?;
        if existing.is_some() {
            return Err(AppError::DuplicateTitle(new.title));
        }

        let model = movie::ActiveModel {
            title: Set(new.title),
            year: Set(new.year),
            description: Set(new.description),
            rating: Set(new.rating),
            ranking: Set(new.ranking),
            review: Set(new.review),
            img_url: Set(new.img_url),
            ..Default::default()
        };

        let movie = model.insert(&self.db).await?;
        debug!(id = movie.id, title = %movie.title, "movie added");
        Ok(movie)
    }

    pub async fn update_review(
        &self,
        id: i32,
        rating: f64,
        review: String,
    ) -> AppResult<movie::Model> {
        let movie = self.find(id).await?;

        let mut active: movie::ActiveModel = movie.into();
        active.rating = Set(rating);
        active.review = Set(review);

        let movie = active.update(&self.db).await?;
        debug!(id = movie.id, rating = movie.rating, "movie updated");
        Ok(movie)
    }

    pub async fn remove(&self, id: i32) -> AppResult<()> {
        let result = movie::Entity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        debug!(id, "movie deleted");
        Ok(())
    }
}
