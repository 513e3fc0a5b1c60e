use colored::*;
use futures::FutureExt;
use migration::Migrator;
use sea_orm_migration::prelude::*;
use std::io::{self, Write};
use std::time::Instant;

const STATUS_COLUMN: usize = 80;

/// Applies every pending migration, printing one status line per migration.
pub async fn run_all_migrations(url: &str) -> anyhow::Result<()> {
    let db = sea_orm::Database::connect(url).await?;

    println!("Running migrations...");
    let pending: Vec<String> = Migrator::get_pending_migrations(&db)
        .await?
        .iter()
        .map(|m| m.name().to_owned())
        .collect();

    if pending.is_empty() {
        println!("{}", "Nothing to migrate".dimmed());
    }

    for name in &pending {
        print_status_prefix(name)?;

        let start = Instant::now();
        let result = std::panic::AssertUnwindSafe(Migrator::up(&db, Some(1)))
            .catch_unwind()
            .await;

        match result {
            Ok(Ok(())) => {
                let time_str = format!("({:.2?})", start.elapsed()).dimmed();
                println!("{} {}", "done".green(), time_str);
            }
            Ok(Err(err)) => {
                println!("{}", "failed".red());
                return Err(err.into());
            }
            Err(_) => {
                println!("{}", "failed".red());
                anyhow::bail!("migration {} panicked", name);
            }
        }
    }

    db.close().await?;
    Ok(())
}

fn print_status_prefix(name: &str) -> io::Result<()> {
    let name_str = format!("Applying {}", name.bold());
    let dots = ".".repeat(STATUS_COLUMN.saturating_sub(name_str.len()));
    print!("{}{} ", name_str, dots);
    io::stdout().flush()
}
