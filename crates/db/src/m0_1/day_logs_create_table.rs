use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};

use crate::table::DayLogs;

pub struct Operation;

fn up_statement() -> TableCreateStatement {
    Table::create()
        .table(DayLogs::Table)
        .col(
            ColumnDef::new(DayLogs::Date)
                .string()
                .not_null()
                .string_len(10)
                .primary_key(),
        )
        .col(ColumnDef::new(DayLogs::Workout).string().string_len(1).null())
        .col(
            ColumnDef::new(DayLogs::WorkoutCompleted)
                .boolean()
                .not_null()
                .default(false),
        )
        .col(ColumnDef::new(DayLogs::Lunch).integer().null())
        .col(ColumnDef::new(DayLogs::Dinner).integer().null())
        .col(ColumnDef::new(DayLogs::Weight).double().null())
        .to_owned()
}

fn down_statement() -> TableDropStatement {
    Table::drop().table(DayLogs::Table).to_owned()
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
