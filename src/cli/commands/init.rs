use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::store::AppStore;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite store, its migrations and the legacy key copy
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;
    let db_path = db_path.to_string_lossy().to_string();

    println!("⚙️  Initializing vibelog…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", &db_path);

    let store = AppStore::open(&db_path)?;
    store.audit("init", "", &format!("Store initialized at {}", &db_path));

    println!("✅ Store initialized at {}", &db_path);
    println!("🎉 vibelog initialization completed!");
    Ok(())
}
