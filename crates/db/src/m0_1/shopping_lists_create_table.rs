use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};

use crate::table::ShoppingLists;

pub struct Operation;

fn up_statement() -> TableCreateStatement {
    Table::create()
        .table(ShoppingLists::Table)
        .col(
            ColumnDef::new(ShoppingLists::Id)
                .integer()
                .not_null()
                .primary_key(),
        )
        .col(ColumnDef::new(ShoppingLists::Items).blob().not_null())
        .to_owned()
}

fn down_statement() -> TableDropStatement {
    Table::drop().table(ShoppingLists::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for Operation {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = up_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = down_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}
