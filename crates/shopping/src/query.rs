use std::ops::Deref;

use fitveg_db::table::ShoppingLists;
use sea_query::{Expr, ExprTrait, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

use crate::ShoppingListItem;

/// The app keeps a single shopping list
pub(crate) const LIST_ID: i64 = 1;

#[derive(Clone)]
pub struct Query {
    state: fitveg_shared::State,
}

impl Deref for Query {
    type Target = fitveg_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.state
    }
}

impl Query {
    pub fn new(state: fitveg_shared::State) -> Self {
        Self { state }
    }

    /// Stored list, empty when never generated or unreadable
    pub async fn load(&self) -> fitveg_shared::Result<Vec<ShoppingListItem>> {
        let statement = sea_query::Query::select()
            .column(ShoppingLists::Items)
            .from(ShoppingLists::Table)
            .and_where(Expr::col(ShoppingLists::Id).eq(LIST_ID))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let row = sqlx::query_as_with::<_, (Vec<u8>,), _>(&sql, values)
            .fetch_optional(&self.read_db)
            .await?;

        let Some((items,)) = row else {
            return Ok(vec![]);
        };

        match bitcode::decode::<Vec<ShoppingListItem>>(&items) {
            Ok(list) => Ok(list),
            Err(err) => {
                tracing::warn!(error = %err, "ignoring malformed shopping list");
                Ok(vec![])
            }
        }
    }
}
