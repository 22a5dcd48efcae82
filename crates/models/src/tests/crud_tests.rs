use anyhow::Result;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

use super::setup_test_db;
use crate::errors::ModelError;
use crate::{customer, garage, mechanic, vehicle};

#[tokio::test]
async fn test_garage_and_mechanic_crud() -> Result<()> {
    let db = setup_test_db().await?;

    let g = garage::create(&db, "G100", "Sligo", 90_000).await?;
    assert!(g.id > 0);
    assert_eq!(garage::find_by_gid(&db, "G100").await?, Some(g.clone()));

    let m = mechanic::create(&db, "M100", "Nora", 41_250.75, Some(g.id)).await?;
    assert_eq!(m.garage_id, Some(g.id));
    assert_eq!(m.salary, 41_250.75);

    let (found, found_garage) = mechanic::Entity::find_by_id(m.id)
        .find_also_related(garage::Entity)
        .one(&db)
        .await?
        .expect("mechanic row");
    assert_eq!(found.mid, "M100");
    assert_eq!(found_garage.map(|g| g.gid), Some("G100".to_string()));

    mechanic::Entity::delete_by_id(m.id).exec(&db).await?;
    assert!(mechanic::find_by_mid(&db, "M100").await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_vehicle_crud_and_mechanic_link() -> Result<()> {
    let db = setup_test_db().await?;

    let c = customer::create(&db, "C100", "Eoin", "087-0000000").await?;
    let v = vehicle::create(&db, "231-G-1", "Skoda", "Octavia", Some(c.id)).await?;
    assert_eq!(v.owner_id, Some(c.id));
    assert_eq!(v.mechanic_id, None);

    let m = mechanic::create(&db, "M200", "Aoife", 39_000.0, None).await?;
    let updated = vehicle::set_mechanic(&db, v.id, Some(m.id)).await?;
    assert_eq!(updated.mechanic_id, Some(m.id));
    assert_eq!(updated.reg, "231-G-1");

    let by_make = vehicle::Entity::find()
        .filter(vehicle::Column::Make.eq("Skoda"))
        .all(&db)
        .await?;
    assert_eq!(by_make.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_unique_business_codes_enforced() -> Result<()> {
    let db = setup_test_db().await?;

    vehicle::create(&db, "DUP-1", "Opel", "Astra", None).await?;
    let err = vehicle::create(&db, "DUP-1", "Opel", "Corsa", None).await.unwrap_err();
    assert!(matches!(err, ModelError::Db(_)));

    customer::create(&db, "C1", "A", "1").await?;
    assert!(customer::create(&db, "C1", "B", "2").await.is_err());
    Ok(())
}

#[tokio::test]
async fn test_blank_codes_rejected_before_insert() -> Result<()> {
    let db = setup_test_db().await?;

    let err = vehicle::create(&db, "  ", "Opel", "Astra", None).await.unwrap_err();
    assert!(matches!(err, ModelError::Validation(ref m) if m == "reg required"));
    assert!(matches!(garage::create(&db, "", "x", 1).await, Err(ModelError::Validation(_))));
    assert!(matches!(
        mechanic::create(&db, "M9", "N", f64::NAN, None).await,
        Err(ModelError::Validation(_))
    ));
    assert!(vehicle::Entity::find().all(&db).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_set_mechanic_on_missing_vehicle() -> Result<()> {
    let db = setup_test_db().await?;
    let err = vehicle::set_mechanic(&db, 4242, None).await.unwrap_err();
    assert!(matches!(err, ModelError::Validation(_)));
    Ok(())
}
