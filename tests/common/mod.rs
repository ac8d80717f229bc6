use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use expenso::core::clock::Clock;
use expenso::core::ExpenseManager;
use expenso::storage::JsonStorage;
use tempfile::TempDir;

/// Clock pinned to a fixed instant so ids and timestamps are deterministic.
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

pub fn sample_date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn sample_instant(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 10, 0, 0).unwrap()
}

/// Creates an isolated manager backed by a unique directory. The TempDir
/// guard must outlive the manager.
#[allow(dead_code)]
pub fn setup_manager(now: DateTime<Utc>) -> (ExpenseManager, TempDir) {
    let temp = TempDir::new().expect("create temp dir");
    let storage = JsonStorage::new(temp.path().to_path_buf()).expect("create json storage backend");
    let manager = ExpenseManager::open(Box::new(storage), Box::new(FixedClock(now)))
        .expect("open expense manager");
    (manager, temp)
}

/// Reopens a manager over an existing data directory, as a new session would.
#[allow(dead_code)]
pub fn reopen_manager(temp: &TempDir, now: DateTime<Utc>) -> ExpenseManager {
    let storage = JsonStorage::new(temp.path().to_path_buf()).expect("create json storage backend");
    ExpenseManager::open(Box::new(storage), Box::new(FixedClock(now))).expect("open expense manager")
}
