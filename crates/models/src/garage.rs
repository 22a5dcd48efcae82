use sea_orm::{entity::prelude::*, Set, DatabaseConnection};
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "garage")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub gid: String,
    pub location: String,
    pub budget: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations defined here") }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create(db: &DatabaseConnection, gid: &str, location: &str, budget: i32) -> Result<Model, errors::ModelError> {
    errors::require("gid", gid)?;
    let am = ActiveModel {
        gid: Set(gid.to_string()),
        location: Set(location.to_string()),
        budget: Set(budget),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn find_by_gid(db: &DatabaseConnection, gid: &str) -> Result<Option<Model>, errors::ModelError> {
    Entity::find()
        .filter(Column::Gid.eq(gid))
        .one(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}
