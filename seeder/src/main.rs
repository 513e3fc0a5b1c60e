use crate::seed::{Seeder, run_seeder};
use crate::seeds::{course::CourseSeeder, review::ReviewSeeder, user::UserSeeder};
use migration::{Migrator, MigratorTrait};

mod seed;
mod seeds;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let db = db::connect().await?;
    Migrator::up(&db, None).await?;

    for (seeder, name) in [
        (Box::new(UserSeeder) as Box<dyn Seeder + Send + Sync>, "User"),
        (Box::new(CourseSeeder), "Course"),
        (Box::new(ReviewSeeder), "Review"),
    ] {
        run_seeder(&*seeder, name, &db).await;
    }

    db.close().await?;
    Ok(())
}
