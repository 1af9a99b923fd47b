use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ticket")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub user_id: String,
    pub vehicle_license_number: String,
    pub parking_spot_id: String,
    pub parking_lot_id: String,
    pub issue_timestamp: i64,
    pub end_timestamp: i64,
    pub amount_paid: f64,
    pub level: i32,
    pub spot_ordinal_number: Option<i32>,
    pub code: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
