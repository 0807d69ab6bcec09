use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum Settings {
    Table,
    Key,
    Value,
}

#[derive(Iden, Clone)]
pub enum DayLogs {
    Table,
    Date,
    Workout,
    WorkoutCompleted,
    Lunch,
    Dinner,
    Weight,
}

#[derive(Iden, Clone)]
pub enum ShoppingLists {
    Table,
    Id,
    Items,
}
