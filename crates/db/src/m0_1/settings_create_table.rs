use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};

use crate::table::Settings;

pub struct Operation;

fn up_statement() -> TableCreateStatement {
    Table::create()
        .table(Settings::Table)
        .col(
            ColumnDef::new(Settings::Key)
                .string()
                .not_null()
                .string_len(30)
                .primary_key(),
        )
        .col(ColumnDef::new(Settings::Value).string().not_null())
        .to_owned()
}

fn down_statement() -> TableDropStatement {
    Table::drop().table(Settings::Table).to_owned()
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
