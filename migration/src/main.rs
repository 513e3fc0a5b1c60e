use anyhow::Context;
use std::{env, fs, path::Path};
use util::config;

mod runner;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let db_path = config::database_path();
    let url = if db_path.starts_with("sqlite:") {
        db_path.clone()
    } else {
        format!("sqlite://{}?mode=rwc", db_path)
    };
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(|s| s.as_str()) {
        Some("clean") => {
            remove_db_file(&db_path)?;
        }
        Some("fresh") => {
            remove_db_file(&db_path)?;
            create_db_dir(&db_path)?;
            runner::run_all_migrations(&url).await?;
        }
        _ => {
            create_db_dir(&db_path)?;
            runner::run_all_migrations(&url).await?;
        }
    }

    Ok(())
}

fn remove_db_file(path: &str) -> anyhow::Result<()> {
    let db_path = Path::new(path);
    if db_path.exists() {
        fs::remove_file(db_path)
            .with_context(|| format!("Failed to delete DB file {}", db_path.display()))?;
        println!("Deleted DB: {}", db_path.display());
    } else {
        println!("DB file does not exist: {}", db_path.display());
    }
    Ok(())
}

fn create_db_dir(path: &str) -> anyhow::Result<()> {
    if let Some(parent) = Path::new(path).parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create DB directory {}", parent.display()))?;
    }
    Ok(())
}
