//! `SeaORM` Entity for transactions table.

use chrono::Utc;
use fintrack_core::transaction::Transaction;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::TransactionKind;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub date: Date,
    pub account: String,
    pub category: String,
    pub subcategory: Option<String>,
    pub note: Option<String>,
    #[sea_orm(column_type = "Decimal(Some((14, 2)))")]
    pub amount: Decimal,
    #[sea_orm(column_name = "type")]
    pub kind: TransactionKind,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Transaction {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            date: model.date,
            account: model.account,
            category: model.category,
            subcategory: model.subcategory,
            note: model.note,
            amount: model.amount,
            kind: model.kind.into(),
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}
