mod day_logs_create_table;
mod settings_create_table;
mod shopping_lists_create_table;

use sqlx_migrator::vec_box;

pub struct M0_1;

sqlx_migrator::sqlite_migration!(
    M0_1,
    "fitveg",
    "m0_1",
    vec_box![],
    vec_box![
        settings_create_table::Operation,
        day_logs_create_table::Operation,
        shopping_lists_create_table::Operation
    ]
);
