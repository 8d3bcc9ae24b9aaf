use chrono::Utc;
use contracts::domain::a001_invoice::{Invoice, InvoiceId};
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::Expr;
use sea_orm::{DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "a001_invoice")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub invoice_number: String,
    pub invoice_date: String,
    pub item_name: String,
    pub price: f64,
    pub expiry_date: String,
    pub done: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Invoice {
    fn from(m: Model) -> Self {
        Invoice {
            id: InvoiceId(m.id),
            invoice_number: m.invoice_number,
            invoice_date: m.invoice_date,
            item_name: m.item_name,
            price: m.price,
            expiry_date: m.expiry_date,
            done: m.done,
        }
    }
}

/// Все накладные в порядке создания
pub async fn list_all(db: &DatabaseConnection) -> anyhow::Result<Vec<Invoice>> {
    let items = Entity::find()
        .order_by_asc(Column::CreatedAt)
        .order_by_asc(Column::Id)
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(db: &DatabaseConnection, id: &str) -> anyhow::Result<Option<Invoice>> {
    let result = Entity::find_by_id(id.to_string()).one(db).await?;
    Ok(result.map(Into::into))
}

pub async fn insert(db: &DatabaseConnection, invoice: &Invoice) -> anyhow::Result<()> {
    let active = ActiveModel {
        id: Set(invoice.id.0.clone()),
        invoice_number: Set(invoice.invoice_number.clone()),
        invoice_date: Set(invoice.invoice_date.clone()),
        item_name: Set(invoice.item_name.clone()),
        price: Set(invoice.price),
        expiry_date: Set(invoice.expiry_date.clone()),
        done: Set(invoice.done),
        created_at: Set(Utc::now()),
    };
    active.insert(db).await?;
    Ok(())
}

/// Инвертировать флаг `done` одним UPDATE, без чтения перед записью
pub async fn flip_done(db: &DatabaseConnection, id: &str) -> anyhow::Result<bool> {
    let result = Entity::update_many()
        .col_expr(Column::Done, Expr::cust("NOT done"))
        .filter(Column::Id.eq(id))
        .exec(db)
        .await?;
    Ok(result.rows_affected > 0)
}

pub async fn delete(db: &DatabaseConnection, id: &str) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(id.to_string()).exec(db).await?;
    Ok(result.rows_affected > 0)
}
