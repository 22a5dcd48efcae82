use sea_orm::{entity::prelude::*, Set, DatabaseConnection};
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "customer")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub cid: String,
    pub name: String,
    pub phone: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations defined here") }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create(db: &DatabaseConnection, cid: &str, name: &str, phone: &str) -> Result<Model, errors::ModelError> {
    errors::require("cid", cid)?;
    errors::require("name", name)?;
    let am = ActiveModel {
        cid: Set(cid.to_string()),
        name: Set(name.to_string()),
        phone: Set(phone.to_string()),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn find_by_cid(db: &DatabaseConnection, cid: &str) -> Result<Option<Model>, errors::ModelError> {
    Entity::find()
        .filter(Column::Cid.eq(cid))
        .one(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}
