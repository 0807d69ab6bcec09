use std::ops::Deref;

use fitveg_db::table::ShoppingLists;
use fitveg_shared::{add_days, format_date};
use sea_query::{OnConflict, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use time::Date;

use crate::{IngredientAggregationService, Query, ShoppingListItem, query::LIST_ID};

/// Days covered by a generated list, today included
pub const WINDOW_DAYS: i64 = 7;

#[derive(Clone)]
pub struct Command {
    query: Query,
}

impl Deref for Command {
    type Target = Query;

    fn deref(&self) -> &Self::Target {
        &self.query
    }
}

impl Command {
    pub fn new(state: fitveg_shared::State) -> Self {
        Self {
            query: Query::new(state),
        }
    }

    /// Replace the stored list
    pub async fn save(&self, list: &[ShoppingListItem]) -> fitveg_shared::Result<()> {
        let items = bitcode::encode(list);

        let statement = sea_query::Query::insert()
            .into_table(ShoppingLists::Table)
            .columns([ShoppingLists::Id, ShoppingLists::Items])
            .values_panic([LIST_ID.into(), items.into()])
            .on_conflict(
                OnConflict::column(ShoppingLists::Id)
                    .update_column(ShoppingLists::Items)
                    .to_owned(),
            )
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.write_db).await?;

        Ok(())
    }

    /// Build a fresh list from the meals planned for `today` and the six days after.
    /// Days without a stored log contribute nothing and are not created.
    pub async fn generate(&self, today: Date) -> fitveg_shared::Result<Vec<ShoppingListItem>> {
        let daylog = fitveg_daylog::Query::new(fitveg_shared::State::clone(self));

        let mut logs = Vec::with_capacity(WINDOW_DAYS as usize);
        for offset in 0..WINDOW_DAYS {
            if let Some(log) = daylog.get(add_days(today, offset)).await? {
                logs.push(log);
            }
        }

        let list = IngredientAggregationService::aggregate(&logs);
        self.save(&list).await?;

        tracing::info!(
            from = %format_date(today),
            days_with_logs = logs.len(),
            items = list.len(),
            "shopping list generated"
        );

        Ok(list)
    }

    /// Flip the checked flag of the item at `index`
    pub async fn toggle(&self, index: usize) -> fitveg_shared::Result<ShoppingListItem> {
        let mut list = self.load().await?;
        let Some(item) = list.get_mut(index) else {
            fitveg_shared::user!("no shopping list item at position {}", index);
        };

        item.checked = !item.checked;
        let item = item.clone();
        self.save(&list).await?;

        tracing::info!(index, ingredient = %item.ingredient, checked = item.checked, "item toggled");

        Ok(item)
    }

    pub async fn clear(&self) -> fitveg_shared::Result<()> {
        self.save(&[]).await?;

        tracing::info!("shopping list cleared");

        Ok(())
    }
}
