//! Priority order reconciliation and display sorting.
//!
//! The persisted order is self-healing: callers run [`reconcile`] on every
//! render pass instead of keeping the array transactionally up to date, so
//! externally edited state (a restored backup, for instance) converges on
//! the next pass.

use std::cmp::Ordering;

use crate::item::Item;

/// Reconcile a persisted order against the live countdown id set.
///
/// Preserves the relative order of ids already present, appends live ids
/// missing from `order` in the order encountered, and drops stale ids.
/// Pure; the caller persists the result. Idempotent.
pub fn reconcile(order: &[i64], live: &[i64]) -> Vec<i64> {
    let mut next: Vec<i64> = order
        .iter()
        .copied()
        .filter(|id| live.contains(id))
        .collect();
    for &id in live {
        if !next.contains(&id) {
            next.push(id);
        }
    }
    next
}

/// Display comparator for countdown items.
///
/// Items present in `order` sort by their index; a present item sorts
/// before an absent one; two absent items sort by deadline, soonest first.
pub fn display_cmp(a: &Item, b: &Item, order: &[i64]) -> Ordering {
    let pos_a = order.iter().position(|&id| id == a.id);
    let pos_b = order.iter().position(|&id| id == b.id);
    match (pos_a, pos_b) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.date.cmp(&b.date),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemKind;

    fn item(id: i64, date: i64) -> Item {
        Item {
            id,
            kind: ItemKind::Countdown,
            name: format!("item-{id}"),
            date,
            description: String::new(),
            created_at: Some(0),
        }
    }

    #[test]
    fn appends_missing_ids_in_encounter_order() {
        assert_eq!(reconcile(&[3, 1], &[1, 2, 3, 4]), vec![3, 1, 2, 4]);
    }

    #[test]
    fn drops_stale_ids() {
        assert_eq!(reconcile(&[5, 3, 1], &[3, 1]), vec![3, 1]);
    }

    #[test]
    fn consistent_order_is_untouched() {
        assert_eq!(reconcile(&[2, 1, 3], &[1, 2, 3]), vec![2, 1, 3]);
    }

    #[test]
    fn reconcile_is_idempotent() {
        let once = reconcile(&[9, 2, 7], &[7, 4, 2]);
        let twice = reconcile(&once, &[7, 4, 2]);
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_order_takes_live_order() {
        assert_eq!(reconcile(&[], &[4, 1, 2]), vec![4, 1, 2]);
    }

    #[test]
    fn comparator_prefers_order_index_over_date() {
        let order = vec![2, 1];
        let a = item(1, 100);
        let b = item(2, 200);
        // Item 2 is first in the order despite its later deadline.
        assert_eq!(display_cmp(&a, &b, &order), Ordering::Greater);
    }

    #[test]
    fn comparator_puts_ordered_items_first() {
        let order = vec![1];
        let a = item(1, 500);
        let b = item(2, 100);
        assert_eq!(display_cmp(&a, &b, &order), Ordering::Less);
        assert_eq!(display_cmp(&b, &a, &order), Ordering::Greater);
    }

    #[test]
    fn comparator_falls_back_to_deadline() {
        let order = vec![];
        let a = item(1, 100);
        let b = item(2, 200);
        assert_eq!(display_cmp(&a, &b, &order), Ordering::Less);
    }
}
