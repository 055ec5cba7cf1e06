use anyhow::Result;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, EntityTrait, Set};

use crate::account::{self, Currency};
use crate::client;

fn new_account(client_id: i64, name: &str, balance: Decimal, currency: Currency) -> account::ActiveModel {
    account::ActiveModel {
        balance: Set(balance),
        currency: Set(currency),
        client_id: Set(client_id),
        name: Set(name.to_string()),
        ..Default::default()
    }
}

#[tokio::test]
async fn account_insert_generates_id_and_keeps_currency() -> Result<()> {
    let Some(db) = super::db_or_skip().await else { return Ok(()) };

    let saved = new_account(880_001, "Deposit", Decimal::new(981778, 2), Currency::Usd)
        .insert(&db)
        .await?;
    assert!(saved.id > 0);
    assert_eq!(saved.currency, Currency::Usd);
    assert_eq!(saved.balance, Decimal::new(981778, 2));

    let found = account::Entity::find_by_id(saved.id).one(&db).await?;
    assert_eq!(found, Some(saved.clone()));

    account::Entity::delete_by_id(saved.id).exec(&db).await?;
    Ok(())
}

#[tokio::test]
async fn accounts_by_client_are_listed_and_bulk_deleted() -> Result<()> {
    let Some(db) = super::db_or_skip().await else { return Ok(()) };
    let client_id = 880_002;

    let a = new_account(client_id, "Main", Decimal::new(100, 0), Currency::Rub).insert(&db).await?;
    let b = new_account(client_id, "Savings", Decimal::new(25050, 2), Currency::Eur).insert(&db).await?;
    let other = new_account(client_id + 1, "Foreign", Decimal::ONE, Currency::Usd).insert(&db).await?;

    let listed = account::find_by_client_id(&db, client_id).await?;
    assert_eq!(listed.iter().map(|m| m.id).collect::<Vec<_>>(), vec![a.id, b.id]);

    let removed = account::delete_by_client_id(&db, client_id).await?;
    assert_eq!(removed, 2);
    assert!(account::find_by_client_id(&db, client_id).await?.is_empty());
    assert!(account::Entity::find_by_id(other.id).one(&db).await?.is_some());

    account::Entity::delete_by_id(other.id).exec(&db).await?;
    Ok(())
}

#[tokio::test]
async fn client_round_trip_with_optional_fields() -> Result<()> {
    let Some(db) = super::db_or_skip().await else { return Ok(()) };

    let saved = client::ActiveModel {
        name: Set("Stephen".into()),
        surname: Set("Hawking".into()),
        middle_name: Set(Some("William".into())),
        birthday: Set(NaiveDate::from_ymd_opt(1942, 1, 8)),
        ..Default::default()
    }
    .insert(&db)
    .await?;

    assert!(client::exists(&db, saved.id).await?);
    let found = client::Entity::find_by_id(saved.id).one(&db).await?.expect("client row");
    assert_eq!(found.birthday, NaiveDate::from_ymd_opt(1942, 1, 8));

    client::Entity::delete_by_id(saved.id).exec(&db).await?;
    assert!(!client::exists(&db, saved.id).await?);
    Ok(())
}

#[test]
fn names_are_validated() {
    assert!(account::validate_name("  ").is_err());
    assert!(account::validate_name(&"x".repeat(256)).is_err());
    assert!(account::validate_name("Deposit").is_ok());
    assert!(client::validate_names("Tim", "").is_err());
    assert!(client::validate_names("Tim", "Burton").is_ok());
}
