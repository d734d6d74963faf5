use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::{
    entities::movies,
    error::AppResult,
    models::{MovieFilter, MovieInput},
};

#[derive(Clone)]
pub struct MovieStore {
    db: DatabaseConnection,
}

impl MovieStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, input: MovieInput) -> AppResult<movies::Model> {
        let now = Utc::now();
        let model = movies::ActiveModel {
            id: Default::default(),
            title: Set(input.title),
            year: Set(input.year),
            length: Set(input.length),
            director: Set(input.director),
            description: Set(input.description),
            poster_url: Set(input.poster_url),
            category: Set(input.category),
            discount: Set(input.discount),
            female_director: Set(input.female_director),
            created_at: Set(now),
            updated_at: Set(now),
        };

        Ok(model.insert(&self.db).await?)
    }

    pub async fn get(&self, id: i32) -> AppResult<Option<movies::Model>> {
        Ok(movies::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn list(&self, filter: &MovieFilter) -> AppResult<Vec<movies::Model>> {
        let mut query = movies::Entity::find().order_by_asc(movies::Column::Id);

        if let Some(category) = &filter.category {
            query = query.filter(movies::Column::Category.eq(category));
        }
        if let Some(year) = filter.year {
            query = query.filter(movies::Column::Year.eq(year));
        }
        if let Some(discount) = filter.discount {
            query = query.filter(movies::Column::Discount.eq(discount));
        }
        if let Some(female_director) = filter.female_director {
            query = query.filter(movies::Column::FemaleDirector.eq(female_director));
        }

        Ok(query.all(&self.db).await?)
    }

    /// Replaces every data column with the payload values. The primary key
    /// and `created_at` are left untouched.
    pub async fn update(&self, id: i32, input: MovieInput) -> AppResult<Option<movies::Model>> {
        let Some(existing) = movies::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let mut model: movies::ActiveModel = existing.into();
        model.title = Set(input.title);
        model.year = Set(input.year);
        model.length = Set(input.length);
        model.director = Set(input.director);
        model.description = Set(input.description);
        model.poster_url = Set(input.poster_url);
        model.category = Set(input.category);
        model.discount = Set(input.discount);
        model.female_director = Set(input.female_director);
        model.updated_at = Set(Utc::now());

        Ok(Some(model.update(&self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> AppResult<bool> {
        let res = movies::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }
}
