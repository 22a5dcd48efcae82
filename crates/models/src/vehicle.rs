use sea_orm::{entity::prelude::*, Set, DatabaseConnection};
use serde::{Deserialize, Serialize};

use crate::{customer, errors, mechanic};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "vehicle")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub reg: String,
    pub make: String,
    pub model: String,
    pub owner_id: Option<i32>,
    pub mechanic_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Owner, Mechanic }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Owner => Entity::belongs_to(customer::Entity).from(Column::OwnerId).to(customer::Column::Id).into(),
            Relation::Mechanic => Entity::belongs_to(mechanic::Entity).from(Column::MechanicId).to(mechanic::Column::Id).into(),
        }
    }
}

impl Related<customer::Entity> for Entity {
    fn to() -> RelationDef { Relation::Owner.def() }
}

impl Related<mechanic::Entity> for Entity {
    fn to() -> RelationDef { Relation::Mechanic.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Insert a vehicle row. Only seeding sets an owner; the service layer never does.
pub async fn create(
    db: &DatabaseConnection,
    reg: &str,
    make: &str,
    model: &str,
    owner_id: Option<i32>,
) -> Result<Model, errors::ModelError> {
    errors::require("reg", reg)?;
    errors::require("make", make)?;
    errors::require("model", model)?;
    let am = ActiveModel {
        reg: Set(reg.to_string()),
        make: Set(make.to_string()),
        model: Set(model.to_string()),
        owner_id: Set(owner_id),
        mechanic_id: Set(None),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn find_by_reg(db: &DatabaseConnection, reg: &str) -> Result<Option<Model>, errors::ModelError> {
    Entity::find()
        .filter(Column::Reg.eq(reg))
        .one(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn set_mechanic(db: &DatabaseConnection, id: i32, mechanic_id: Option<i32>) -> Result<Model, errors::ModelError> {
    let mut found: ActiveModel = Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?
        .ok_or_else(|| errors::ModelError::Validation("vehicle not found".into()))?
        .into();
    found.mechanic_id = Set(mechanic_id);
    found.update(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
