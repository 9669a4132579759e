use crate::core::store::AppStore;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Remove shift `id`. Deleting an absent id is not an error.
    pub fn apply(store: &AppStore, id: i64) -> AppResult<bool> {
        let mut ledger = store.load_ledger()?;

        if !ledger.delete(id) {
            info(format!("No shift #{id}, nothing to delete."));
            return Ok(false);
        }

        store.save_ledger(&ledger)?;
        store.audit("del", &id.to_string(), "Shift deleted");
        Ok(true)
    }
}
