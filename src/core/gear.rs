use crate::errors::{AppError, AppResult};
use crate::models::gear::{GearItem, default_gear};

pub struct GearLogic;

impl GearLogic {
    /// Flip the `checked` flag of the item with `key`. Returns the new state.
    pub fn toggle(items: &mut [GearItem], key: &str) -> AppResult<bool> {
        let item = items
            .iter_mut()
            .find(|i| i.key == key)
            .ok_or_else(|| AppError::UnknownItem(key.to_string()))?;

        item.checked = !item.checked;
        Ok(item.checked)
    }

    pub fn reset() -> Vec<GearItem> {
        default_gear()
    }

    pub fn all_checked(items: &[GearItem]) -> bool {
        items.iter().all(|i| i.checked)
    }

    pub fn missing(items: &[GearItem]) -> Vec<&GearItem> {
        items.iter().filter(|i| !i.checked).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readiness_requires_every_item() {
        let mut items = default_gear();
        assert!(!GearLogic::all_checked(&items));

        let keys: Vec<String> = items.iter().map(|i| i.key.clone()).collect();
        for k in &keys {
            GearLogic::toggle(&mut items, k).unwrap();
        }
        assert!(GearLogic::all_checked(&items));
        assert!(GearLogic::missing(&items).is_empty());
    }

    #[test]
    fn unknown_key_is_an_error() {
        let mut items = default_gear();
        assert!(GearLogic::toggle(&mut items, "parachute").is_err());
    }
}
