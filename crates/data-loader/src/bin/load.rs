use data_loader::{course::load_courses, requirement::load_requirements};
use database::db::create_connection;
use log::info;
use migration::{Migrator, MigratorTrait};
use std::{env, path::Path, process};

/// Loads a course catalog and any number of requirement documents:
/// `load <courses.json> [requirements.json ...]`
#[tokio::main]
async fn main() {
    env_logger::init();

    let mut args = env::args().skip(1);
    let Some(catalog) = args.next() else {
        eprintln!("usage: load <courses.json> [requirements.json ...]");
        process::exit(2);
    };

    let db = create_connection()
        .await
        .expect("Failed to connect to database");
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    if load_courses(&db, Path::new(&catalog)).await.is_err() {
        process::exit(1);
    }

    for requirements in args {
        match load_requirements(&db, Path::new(&requirements)).await {
            Ok(report) => info!(
                "{}: {} requirements, {} specs, {} unresolved reference(s)",
                report.major,
                report.requirement_count,
                report.spec_count,
                report.unresolved.len()
            ),
            Err(_) => process::exit(1),
        }
    }
}
