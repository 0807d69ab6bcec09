use anyhow::Result;
use fitveg_shared::today;
use fitveg_shopping::{Command, ShoppingListItem, checked_count, grouped};

fn print_list(list: &[ShoppingListItem]) {
    if list.is_empty() {
        println!("Shopping list is empty");
        return;
    }

    for group in grouped(list) {
        println!("{}", group.category);
        for (idx, item) in group.items {
            let mark = if item.checked { "x" } else { " " };
            println!("  {idx:>3} [{mark}] {}", item.ingredient);
        }
    }

    println!("{}/{} checked", checked_count(list), list.len());
}

#[tracing::instrument(skip(config))]
pub async fn show(config: fitveg::Config) -> Result<()> {
    let command = Command::new(super::open(&config).await?);

    print_list(&command.load().await?);

    Ok(())
}

#[tracing::instrument(skip(config))]
pub async fn generate(config: fitveg::Config) -> Result<()> {
    let command = Command::new(super::open(&config).await?);

    let list = command.generate(today()).await?;
    print_list(&list);

    Ok(())
}

#[tracing::instrument(skip(config))]
pub async fn toggle(config: fitveg::Config, index: usize) -> Result<()> {
    let command = Command::new(super::open(&config).await?);

    command.toggle(index).await?;
    print_list(&command.load().await?);

    Ok(())
}

#[tracing::instrument(skip(config))]
pub async fn clear(config: fitveg::Config) -> Result<()> {
    let command = Command::new(super::open(&config).await?);

    command.clear().await?;
    println!("Shopping list cleared");

    Ok(())
}
