use migration::{Migrator, m20220926_000001_create_movies};
use sea_orm_migration::sea_orm::{ConnectionTrait, Database, DatabaseConnection, Statement};
use sea_orm_migration::{MigrationTrait, MigratorTrait, SchemaManager};

async fn connect() -> DatabaseConnection {
    Database::connect("sqlite::memory:").await.expect("in-memory sqlite")
}

async fn table_info(db: &DatabaseConnection, table: &str) -> Vec<(String, String, bool, bool)> {
    let rows = db
        .query_all(Statement::from_string(
            db.get_database_backend(),
            format!("PRAGMA table_info({table})"),
        ))
        .await
        .expect("pragma table_info");

    let mut cols = Vec::new();
    for row in rows {
        let name: String = row.try_get_by("name").expect("column name");
        let ty: String = row.try_get_by("type").expect("column type");
        let notnull: i32 = row.try_get_by("notnull").expect("notnull flag");
        let pk: i32 = row.try_get_by("pk").expect("pk flag");
        cols.push((name, ty.to_lowercase(), notnull != 0, pk != 0));
    }
    cols
}

#[async_std::test]
async fn up_creates_movies_with_expected_columns() {
    let db = connect().await;
    Migrator::up(&db, None).await.expect("migrate up");

    let cols = table_info(&db, "movies").await;
    let names: Vec<&str> = cols.iter().map(|(n, _, _, _)| n.as_str()).collect();
    assert_eq!(
        names,
        [
            "id",
            "title",
            "year",
            "length",
            "director",
            "description",
            "poster_url",
            "category",
            "discount",
            "female_director",
            "created_at",
            "updated_at",
        ]
    );

    for (name, ty, notnull, pk) in &cols {
        match name.as_str() {
            "id" => {
                assert!(*pk, "id must be the primary key");
                assert!(ty.contains("int"), "id is integral, got {ty}");
            }
            "year" | "length" => {
                assert!(ty.contains("int"), "{name} is integral, got {ty}");
                assert!(!notnull, "{name} is nullable");
            }
            "discount" | "female_director" => {
                assert!(ty.contains("bool"), "{name} is boolean, got {ty}");
                assert!(!notnull, "{name} is nullable");
            }
            "created_at" | "updated_at" => {
                assert!(notnull, "{name} is set on every row");
            }
            _ => assert!(!notnull, "{name} is nullable"),
        }
    }
}

#[async_std::test]
async fn reapplying_without_rollback_fails() {
    let db = connect().await;
    let manager = SchemaManager::new(&db);
    let migration = m20220926_000001_create_movies::Migration;

    migration.up(&manager).await.expect("first apply");
    let second = migration.up(&manager).await;
    assert!(second.is_err(), "duplicate create_table must be rejected");
}

#[async_std::test]
async fn migrator_ledger_makes_up_idempotent() {
    let db = connect().await;
    Migrator::up(&db, None).await.expect("first up");
    Migrator::up(&db, None).await.expect("second up is a recorded no-op");
}

#[async_std::test]
async fn down_drops_the_table() {
    let db = connect().await;
    Migrator::up(&db, None).await.expect("migrate up");
    Migrator::down(&db, None).await.expect("migrate down");

    let rows = db
        .query_all(Statement::from_string(
            db.get_database_backend(),
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name = 'movies'".to_string(),
        ))
        .await
        .expect("sqlite_master lookup");
    assert!(rows.is_empty(), "movies table should be gone after rollback");
}
