//! Demo reference data.
//!
//! Customers, garages and mechanics have no creation path through the API, so a
//! fresh database would be unusable without this. Loading is idempotent: rows
//! whose business code already exists are left untouched.

use sea_orm::DatabaseConnection;
use tracing::info;

use crate::{customer, errors::ModelError, garage, mechanic, vehicle};

const GARAGES: &[(&str, &str, i32)] = &[
    ("G001", "Galway", 250_000),
    ("G002", "Athlone", 120_000),
];

const CUSTOMERS: &[(&str, &str, &str)] = &[
    ("C001", "Alan Smith", "091-555123"),
    ("C002", "Barbara Jones", "090-555456"),
    ("C003", "Ciara Walsh", "01-555789"),
];

// (mid, name, salary, gid)
const MECHANICS: &[(&str, &str, f64, Option<&str>)] = &[
    ("M001", "Tom Burke", 45_000.0, Some("G001")),
    ("M002", "Mary Kelly", 52_500.5, Some("G001")),
    ("M003", "Kevin Ryan", 38_000.0, Some("G002")),
    ("M007", "Sean Quinn", 61_000.0, None),
];

// (reg, make, model, cid, mid)
const VEHICLES: &[(&str, &str, &str, Option<&str>, Option<&str>)] = &[
    ("191-G-123", "Toyota", "Corolla", Some("C001"), Some("M001")),
    ("201-D-456", "Ford", "Focus", Some("C002"), Some("M002")),
    ("182-WH-789", "Toyota", "Yaris", Some("C001"), None),
    ("172-G-321", "Nissan", "Micra", None, None),
];

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub garages: usize,
    pub customers: usize,
    pub mechanics: usize,
    pub vehicles: usize,
}

pub async fn load_demo_data(db: &DatabaseConnection) -> Result<SeedReport, ModelError> {
    let mut report = SeedReport::default();

    for (gid, location, budget) in GARAGES {
        if garage::find_by_gid(db, gid).await?.is_none() {
            garage::create(db, gid, location, *budget).await?;
            report.garages += 1;
        }
    }

    for (cid, name, phone) in CUSTOMERS {
        if customer::find_by_cid(db, cid).await?.is_none() {
            customer::create(db, cid, name, phone).await?;
            report.customers += 1;
        }
    }

    for (mid, name, salary, gid) in MECHANICS {
        if mechanic::find_by_mid(db, mid).await?.is_some() {
            continue;
        }
        let garage_id = match gid {
            Some(gid) => garage::find_by_gid(db, gid).await?.map(|g| g.id),
            None => None,
        };
        mechanic::create(db, mid, name, *salary, garage_id).await?;
        report.mechanics += 1;
    }

    for (reg, make, model, cid, mid) in VEHICLES {
        if vehicle::find_by_reg(db, reg).await?.is_some() {
            continue;
        }
        let owner_id = match cid {
            Some(cid) => customer::find_by_cid(db, cid).await?.map(|c| c.id),
            None => None,
        };
        let created = vehicle::create(db, reg, make, model, owner_id).await?;
        if let Some(mid) = mid {
            if let Some(m) = mechanic::find_by_mid(db, mid).await? {
                vehicle::set_mechanic(db, created.id, Some(m.id)).await?;
            }
        }
        report.vehicles += 1;
    }

    info!(
        garages = report.garages,
        customers = report.customers,
        mechanics = report.mechanics,
        vehicles = report.vehicles,
        "demo data loaded"
    );
    Ok(report)
}
