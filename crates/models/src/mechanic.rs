use sea_orm::{entity::prelude::*, Set, DatabaseConnection};
use serde::{Deserialize, Serialize};

use crate::{errors, garage};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "mechanic")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub mid: String,
    pub name: String,
    pub salary: f64,
    pub garage_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Garage }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Garage => Entity::belongs_to(garage::Entity)
                .from(Column::GarageId)
                .to(garage::Column::Id)
                .into(),
        }
    }
}

impl Related<garage::Entity> for Entity {
    fn to() -> RelationDef { Relation::Garage.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create(
    db: &DatabaseConnection,
    mid: &str,
    name: &str,
    salary: f64,
    garage_id: Option<i32>,
) -> Result<Model, errors::ModelError> {
    errors::require("mid", mid)?;
    errors::require("name", name)?;
    if !salary.is_finite() {
        return Err(errors::ModelError::Validation("salary must be a finite number".into()));
    }
    let am = ActiveModel {
        mid: Set(mid.to_string()),
        name: Set(name.to_string()),
        salary: Set(salary),
        garage_id: Set(garage_id),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn find_by_mid(db: &DatabaseConnection, mid: &str) -> Result<Option<Model>, errors::ModelError> {
    Entity::find()
        .filter(Column::Mid.eq(mid))
        .one(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}
