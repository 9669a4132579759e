use crate::db::pool::DbPool;
use crate::db::storage;
use crate::errors::AppResult;
use crate::models::settings::{TRAINING_CHECKLIST_PREFIX, TRAINING_COMPLETE_PREFIX};
use crate::utils::colors::{CYAN, GREEN, RESET, YELLOW};
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) KEYS
    //
    let keys = storage::keys(&pool.conn)?;
    println!("{}• Stored keys:{} {}{}{}", CYAN, RESET, GREEN, keys.len(), RESET);

    //
    // 3) TRAINING DAYS
    //
    let completed = storage::with_prefix(&pool.conn, TRAINING_COMPLETE_PREFIX)?
        .into_iter()
        .filter(|(_, v)| v == "true")
        .count();
    let checklists = storage::with_prefix(&pool.conn, TRAINING_CHECKLIST_PREFIX)?.len();

    println!("{}• Completed trainings:{} {}", CYAN, RESET, completed);
    println!("{}• Training checklists:{} {}", CYAN, RESET, checklists);

    //
    // 4) LOG ROWS
    //
    let log_rows: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM log", [], |row| row.get(0))?;
    println!("{}• Internal log rows:{} {}", CYAN, RESET, log_rows);

    println!();
    Ok(())
}
