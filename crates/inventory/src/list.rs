//! Singly-linked inventory list.
//!
//! The [`Inventory`] owns its head node and every node owns its successor, so
//! the sequence can never contain a cycle or share a node with another
//! inventory. Unlinking moves the successor into the predecessor's link (or
//! into `head`) before the removed box is dropped.

use stockline_core::{DomainError, DomainResult, Entity, ProductId, ProductName, Stock};

use crate::outcome::{InsertPosition, Inserted, Removed, StockChange};
use crate::product::Product;

type Link = Option<Box<Node>>;

struct Node {
    product: Product,
    next: Link,
}

/// In-memory product inventory keyed by [`ProductId`].
///
/// All lookups are linear scans from the head.
#[derive(Default)]
pub struct Inventory {
    head: Link,
    len: usize,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.iter().any(|p| p.id() == id)
    }

    /// Insert a new product at the head or the tail.
    ///
    /// Fails with [`DomainError::DuplicateId`] if `id` is already present, in
    /// which case nothing is allocated and the sequence is untouched. A tail
    /// insert into an empty inventory links the node as the head and reports
    /// `used = Head`.
    pub fn insert(
        &mut self,
        id: ProductId,
        name: ProductName,
        stock: Stock,
        position: InsertPosition,
    ) -> DomainResult<Inserted> {
        if self.contains(id) {
            tracing::debug!("insert rejected: product {} already exists", id);
            return Err(DomainError::duplicate(id));
        }

        // The node is fully built before any link is rewritten.
        let node = Box::new(Node {
            product: Product::new(id, name, stock),
            next: None,
        });

        let used = match position {
            InsertPosition::Head => self.link_front(node),
            InsertPosition::Tail => self.link_back(node),
        };
        self.len += 1;

        tracing::info!(
            "product {} inserted at {} (requested {}, len {})",
            id,
            used,
            position,
            self.len
        );

        Ok(Inserted {
            requested: position,
            used,
        })
    }

    fn link_front(&mut self, mut node: Box<Node>) -> InsertPosition {
        node.next = self.head.take();
        self.head = Some(node);
        InsertPosition::Head
    }

    fn link_back(&mut self, node: Box<Node>) -> InsertPosition {
        if self.head.is_none() {
            self.head = Some(node);
            return InsertPosition::Head;
        }

        let mut link = &mut self.head;
        while let Some(current) = link {
            link = &mut current.next;
        }
        *link = Some(node);
        InsertPosition::Tail
    }

    /// Look up a product by id.
    pub fn find(&self, id: ProductId) -> DomainResult<&Product> {
        let found = self.iter().find(|p| p.id() == id);
        tracing::debug!("find product {}: {}", id, if found.is_some() { "hit" } else { "miss" });
        found.ok_or(DomainError::not_found(id))
    }

    fn find_mut(&mut self, id: ProductId) -> Option<&mut Product> {
        let mut cursor = self.head.as_deref_mut();
        while let Some(node) = cursor {
            if node.product.id() == id {
                return Some(&mut node.product);
            }
            cursor = node.next.as_deref_mut();
        }
        None
    }

    /// Replace the stock of an existing product in place.
    ///
    /// Negative values are rejected with [`DomainError::Validation`] even if
    /// the caller already checked them. No node is added, removed or relinked.
    pub fn update_stock(&mut self, id: ProductId, new_stock: i64) -> DomainResult<StockChange> {
        let current = Stock::try_from(new_stock).inspect_err(|_| {
            tracing::debug!("update rejected: negative stock {} for product {}", new_stock, id);
        })?;

        let Some(product) = self.find_mut(id) else {
            tracing::debug!("update rejected: product {} not found", id);
            return Err(DomainError::not_found(id));
        };
        let previous = product.set_stock(current);

        tracing::info!("product {} stock {} -> {}", id, previous, current);
        Ok(StockChange { previous, current })
    }

    /// Unlink and release the product with `id`.
    ///
    /// A single forward scan walks the links; the link that points at the
    /// match is rewritten to the match's successor, which covers head,
    /// interior and tail positions alike.
    pub fn delete(&mut self, id: ProductId) -> DomainResult<Removed> {
        let mut link = &mut self.head;
        let mut index = 0usize;
        let mut removed = loop {
            if let Some(node) = link.take_if(|n| n.product.id() == id) {
                break node;
            }
            match link {
                Some(node) => {
                    link = &mut node.next;
                    index += 1;
                }
                None => {
                    tracing::debug!("delete rejected: product {} not found", id);
                    return Err(DomainError::not_found(id));
                }
            }
        };
        *link = removed.next.take();
        self.len -= 1;

        tracing::info!("product {} deleted from index {} (len {})", id, index, self.len);
        Ok(Removed {
            product: removed.product,
            index,
        })
    }

    /// Snapshot of every product, head to tail.
    pub fn list(&self) -> Vec<Product> {
        self.iter().cloned().collect()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.len,
        }
    }

    /// Release every node. Returns how many were released.
    pub fn clear(&mut self) -> usize {
        let mut released = 0;
        let mut cursor = self.head.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
            released += 1;
        }
        self.len = 0;
        released
    }
}

impl Drop for Inventory {
    // Iterative teardown; the default recursive drop of `Box<Node>` chains
    // would overflow the stack on long lists.
    fn drop(&mut self) {
        let released = self.clear();
        if released > 0 {
            tracing::debug!("inventory dropped, {} products released", released);
        }
    }
}

impl core::fmt::Debug for Inventory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Borrowing iterator over an [`Inventory`], head to tail.
pub struct Iter<'a> {
    next: Option<&'a Node>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Product;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            self.remaining -= 1;
            &node.product
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a Product;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pid(n: u32) -> ProductId {
        ProductId::from_u32(n)
    }

    fn insert(inv: &mut Inventory, id: u32, name: &str, stock: u64, pos: InsertPosition) -> DomainResult<Inserted> {
        inv.insert(pid(id), ProductName::new(name), Stock::new(stock), pos)
    }

    fn ids(inv: &Inventory) -> Vec<u32> {
        inv.iter().map(|p| p.id().get()).collect()
    }

    /// Walks the raw links and checks the counter agrees with reachability.
    fn assert_well_linked(inv: &Inventory) {
        let mut reachable = 0;
        let mut cursor = inv.head.as_deref();
        while let Some(node) = cursor {
            reachable += 1;
            cursor = node.next.as_deref();
        }
        assert_eq!(reachable, inv.len());
        assert_eq!(inv.is_empty(), inv.len() == 0);
    }

    #[test]
    fn new_inventory_is_empty() {
        let inv = Inventory::new();
        assert!(inv.is_empty());
        assert_eq!(inv.len(), 0);
        assert!(inv.list().is_empty());
        assert_eq!(format!("{inv:?}"), "[]");
    }

    #[test]
    fn tail_inserts_keep_insertion_order() {
        let mut inv = Inventory::new();
        for id in 1..=3 {
            insert(&mut inv, id, "item", 1, InsertPosition::Tail).unwrap();
        }
        assert_eq!(ids(&inv), vec![1, 2, 3]);
        assert_well_linked(&inv);
    }

    #[test]
    fn head_inserts_reverse_insertion_order() {
        let mut inv = Inventory::new();
        for id in 1..=3 {
            insert(&mut inv, id, "item", 1, InsertPosition::Head).unwrap();
        }
        assert_eq!(ids(&inv), vec![3, 2, 1]);
        assert_well_linked(&inv);
    }

    #[test]
    fn tail_insert_into_empty_inventory_lands_at_head() {
        let mut tail = Inventory::new();
        let outcome = insert(&mut tail, 9, "Bolt", 4, InsertPosition::Tail).unwrap();
        assert_eq!(outcome.requested, InsertPosition::Tail);
        assert_eq!(outcome.used, InsertPosition::Head);
        assert!(outcome.is_degenerate_tail());

        let mut head = Inventory::new();
        let outcome = insert(&mut head, 9, "Bolt", 4, InsertPosition::Head).unwrap();
        assert!(!outcome.is_degenerate_tail());

        assert_eq!(tail.list(), head.list());
        assert_eq!(tail.len(), 1);
    }

    #[test]
    fn second_tail_insert_reports_tail() {
        let mut inv = Inventory::new();
        insert(&mut inv, 1, "a", 0, InsertPosition::Tail).unwrap();
        let outcome = insert(&mut inv, 2, "b", 0, InsertPosition::Tail).unwrap();
        assert_eq!(outcome.used, InsertPosition::Tail);
        assert!(!outcome.is_degenerate_tail());
    }

    #[test]
    fn duplicate_id_is_rejected_and_sequence_unchanged() {
        let mut inv = Inventory::new();
        insert(&mut inv, 1, "Widget", 10, InsertPosition::Tail).unwrap();
        insert(&mut inv, 2, "Gadget", 5, InsertPosition::Tail).unwrap();
        let before = inv.list();

        for pos in [InsertPosition::Head, InsertPosition::Tail] {
            let err = insert(&mut inv, 2, "Other", 99, pos).unwrap_err();
            assert_eq!(err, DomainError::DuplicateId(pid(2)));
        }

        assert_eq!(inv.list(), before);
        assert_eq!(inv.len(), 2);
    }

    #[test]
    fn find_returns_match_or_not_found() {
        let mut inv = Inventory::new();
        assert_eq!(inv.find(pid(1)).unwrap_err(), DomainError::NotFound(pid(1)));

        insert(&mut inv, 1, "Widget", 10, InsertPosition::Tail).unwrap();
        let found = inv.find(pid(1)).unwrap();
        assert_eq!(found.name().as_str(), "Widget");
        assert_eq!(found.stock(), Stock::new(10));
        assert!(matches!(inv.find(pid(2)), Err(DomainError::NotFound(_))));
    }

    #[test]
    fn update_stock_replaces_value_in_place() {
        let mut inv = Inventory::new();
        insert(&mut inv, 1, "Widget", 10, InsertPosition::Tail).unwrap();
        insert(&mut inv, 2, "Gadget", 5, InsertPosition::Tail).unwrap();

        let change = inv.update_stock(pid(2), 0).unwrap();
        assert_eq!(change.previous, Stock::new(5));
        assert_eq!(change.current, Stock::ZERO);

        let p = inv.find(pid(2)).unwrap();
        assert_eq!(p.name().as_str(), "Gadget");
        assert_eq!(p.stock(), Stock::ZERO);
        assert_eq!(ids(&inv), vec![1, 2]);
    }

    #[test]
    fn update_stock_rejects_negative_values_without_mutation() {
        let mut inv = Inventory::new();
        insert(&mut inv, 1, "Widget", 10, InsertPosition::Tail).unwrap();

        let err = inv.update_stock(pid(1), -3).unwrap_err();
        match err {
            DomainError::Validation(msg) if msg.contains("negative") => {}
            other => panic!("Expected Validation error, got {other:?}"),
        }
        assert_eq!(inv.find(pid(1)).unwrap().stock(), Stock::new(10));
    }

    #[test]
    fn update_stock_of_missing_product_is_not_found() {
        let mut inv = Inventory::new();
        insert(&mut inv, 1, "Widget", 10, InsertPosition::Tail).unwrap();
        let before = inv.list();

        assert_eq!(inv.update_stock(pid(8), 3).unwrap_err(), DomainError::NotFound(pid(8)));
        assert_eq!(inv.list(), before);
    }

    #[test]
    fn delete_interior_node_relinks_neighbours() {
        let mut inv = Inventory::new();
        for id in 1..=3 {
            insert(&mut inv, id, "n", 0, InsertPosition::Tail).unwrap();
        }

        let removed = inv.delete(pid(2)).unwrap();
        assert_eq!(removed.product.id(), pid(2));
        assert_eq!(removed.index, 1);
        assert!(!removed.was_head());
        assert_eq!(ids(&inv), vec![1, 3]);
        assert_well_linked(&inv);
    }

    #[test]
    fn delete_head_promotes_second_node() {
        let mut inv = Inventory::new();
        for id in 1..=3 {
            insert(&mut inv, id, "n", 0, InsertPosition::Tail).unwrap();
        }

        let removed = inv.delete(pid(1)).unwrap();
        assert!(removed.was_head());
        assert_eq!(ids(&inv), vec![2, 3]);
        assert_well_linked(&inv);
    }

    #[test]
    fn delete_tail_leaves_new_tail_terminated() {
        let mut inv = Inventory::new();
        for id in 1..=3 {
            insert(&mut inv, id, "n", 0, InsertPosition::Tail).unwrap();
        }

        let removed = inv.delete(pid(3)).unwrap();
        assert_eq!(removed.index, 2);
        assert_eq!(ids(&inv), vec![1, 2]);

        // The new tail accepts a tail insert after it.
        insert(&mut inv, 4, "n", 0, InsertPosition::Tail).unwrap();
        assert_eq!(ids(&inv), vec![1, 2, 4]);
        assert_well_linked(&inv);
    }

    #[test]
    fn delete_sole_node_empties_inventory() {
        let mut inv = Inventory::new();
        insert(&mut inv, 5, "only", 1, InsertPosition::Head).unwrap();

        inv.delete(pid(5)).unwrap();
        assert!(inv.is_empty());
        assert_eq!(inv.len(), 0);
        assert_well_linked(&inv);
    }

    #[test]
    fn delete_missing_or_from_empty_is_not_found() {
        let mut inv = Inventory::new();
        assert_eq!(inv.delete(pid(1)).unwrap_err(), DomainError::NotFound(pid(1)));

        insert(&mut inv, 1, "a", 1, InsertPosition::Tail).unwrap();
        insert(&mut inv, 2, "b", 2, InsertPosition::Tail).unwrap();
        let before = inv.list();
        assert_eq!(inv.delete(pid(3)).unwrap_err(), DomainError::NotFound(pid(3)));
        assert_eq!(inv.list(), before);
    }

    #[test]
    fn deleted_id_can_be_inserted_again() {
        let mut inv = Inventory::new();
        insert(&mut inv, 1, "a", 1, InsertPosition::Tail).unwrap();
        inv.delete(pid(1)).unwrap();
        insert(&mut inv, 1, "a again", 2, InsertPosition::Tail).unwrap();
        assert_eq!(inv.find(pid(1)).unwrap().name().as_str(), "a again");
    }

    #[test]
    fn draining_through_every_position_keeps_links_sound() {
        let mut inv = Inventory::new();
        let long = "é".repeat(ProductName::MAX_CHARS + 5);
        insert(&mut inv, 1, &long, 1, InsertPosition::Tail).unwrap();
        for id in 2..=5 {
            insert(&mut inv, id, "n", 0, InsertPosition::Tail).unwrap();
        }

        // Negative stock is rejected before the lookup, even for a missing id.
        assert!(matches!(inv.update_stock(pid(99), -1), Err(DomainError::Validation(_))));

        let interior = inv.delete(pid(3)).unwrap();
        assert_eq!(interior.index, 2);
        let tail = inv.delete(pid(5)).unwrap();
        assert_eq!(tail.index, 3);
        let head = inv.delete(pid(1)).unwrap();
        assert!(head.was_head());
        assert_eq!(head.product.name().as_str().chars().count(), ProductName::MAX_CHARS);
        assert_eq!(ids(&inv), vec![2, 4]);
        assert_well_linked(&inv);

        inv.delete(pid(4)).unwrap();
        let last = inv.delete(pid(2)).unwrap();
        assert_eq!(last.index, 0);
        assert!(inv.is_empty());
        assert_well_linked(&inv);
        assert_eq!(inv.delete(pid(2)).unwrap_err(), DomainError::NotFound(pid(2)));

        insert(&mut inv, 6, "n", 0, InsertPosition::Tail).unwrap();
        assert_eq!(ids(&inv), vec![6]);
    }

    #[test]
    fn overlong_names_are_stored_truncated() {
        let mut inv = Inventory::new();
        let raw = "N".repeat(100);
        insert(&mut inv, 1, &raw, 1, InsertPosition::Tail).unwrap();
        assert_eq!(inv.find(pid(1)).unwrap().name().as_str(), &raw[..ProductName::MAX_CHARS]);
    }

    #[test]
    fn example_session() {
        let mut inv = Inventory::new();

        let first = insert(&mut inv, 1, "Widget", 10, InsertPosition::Tail).unwrap();
        assert_eq!(first.requested, InsertPosition::Tail);
        let second = insert(&mut inv, 2, "Gadget", 5, InsertPosition::Head).unwrap();
        assert_eq!(second.used, InsertPosition::Head);

        let listed: Vec<(u32, String, u64)> = inv
            .iter()
            .map(|p| (p.id().get(), p.name().to_string(), p.stock().units()))
            .collect();
        assert_eq!(
            listed,
            vec![(2, "Gadget".to_string(), 5), (1, "Widget".to_string(), 10)]
        );

        let change = inv.update_stock(pid(1), 20).unwrap();
        assert_eq!((change.previous.units(), change.current.units()), (10, 20));

        inv.delete(pid(2)).unwrap();
        assert_eq!(
            inv.list(),
            vec![Product::new(pid(1), ProductName::new("Widget"), Stock::new(20))]
        );
        assert_eq!(inv.find(pid(2)).unwrap_err(), DomainError::NotFound(pid(2)));
    }

    #[test]
    fn iterator_reports_exact_length() {
        let mut inv = Inventory::new();
        for id in 0..5 {
            insert(&mut inv, id, "n", 0, InsertPosition::Head).unwrap();
        }
        let mut iter = inv.iter();
        assert_eq!(iter.len(), 5);
        iter.next();
        assert_eq!(iter.len(), 4);
        assert_eq!((&inv).into_iter().count(), 5);
    }

    #[test]
    fn clear_releases_every_node() {
        let mut inv = Inventory::new();
        for id in 0..10 {
            insert(&mut inv, id, "n", 0, InsertPosition::Head).unwrap();
        }
        assert_eq!(inv.clear(), 10);
        assert!(inv.is_empty());
        assert_eq!(inv.clear(), 0);
    }

    #[test]
    fn dropping_a_long_inventory_does_not_overflow_the_stack() {
        let mut inv = Inventory::new();
        for id in 0..200_000u32 {
            insert_unchecked_head(&mut inv, id);
        }
        assert_eq!(inv.len(), 200_000);
        drop(inv);
    }

    // Head insert without the O(n) duplicate scan, to build large lists quickly.
    fn insert_unchecked_head(inv: &mut Inventory, id: u32) {
        let node = Box::new(Node {
            product: Product::new(pid(id), ProductName::default(), Stock::ZERO),
            next: None,
        });
        inv.link_front(node);
        inv.len += 1;
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        #[derive(Debug, Clone)]
        enum Op {
            Insert(u32, InsertPosition),
            Update(u32, i64),
            Delete(u32),
        }

        fn op_strategy() -> impl Strategy<Value = Op> {
            let position = prop_oneof![Just(InsertPosition::Head), Just(InsertPosition::Tail)];
            prop_oneof![
                (0u32..16, position).prop_map(|(id, pos)| Op::Insert(id, pos)),
                (0u32..16, -5i64..50).prop_map(|(id, stock)| Op::Update(id, stock)),
                (0u32..16).prop_map(Op::Delete),
            ]
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 512,
                ..ProptestConfig::default()
            })]

            /// Property: ids stay unique and the sequence mirrors a Vec model
            /// under any mix of inserts, updates and deletes.
            #[test]
            fn inventory_matches_vec_model(ops in prop::collection::vec(op_strategy(), 0..64)) {
                let mut inv = Inventory::new();
                let mut model: Vec<(u32, u64)> = Vec::new();

                for op in ops {
                    match op {
                        Op::Insert(id, pos) => {
                            let result = inv.insert(pid(id), ProductName::new("p"), Stock::new(1), pos);
                            if model.iter().any(|(m, _)| *m == id) {
                                prop_assert_eq!(result, Err(DomainError::DuplicateId(pid(id))));
                            } else {
                                prop_assert!(result.is_ok());
                                match pos {
                                    InsertPosition::Head => model.insert(0, (id, 1)),
                                    InsertPosition::Tail => model.push((id, 1)),
                                }
                            }
                        }
                        Op::Update(id, stock) => {
                            let result = inv.update_stock(pid(id), stock);
                            let slot = model.iter_mut().find(|(m, _)| *m == id);
                            match (stock < 0, slot) {
                                (true, _) => prop_assert!(matches!(result, Err(DomainError::Validation(_)))),
                                (false, None) => prop_assert_eq!(result, Err(DomainError::NotFound(pid(id)))),
                                (false, Some(entry)) => {
                                    let change = result.unwrap();
                                    prop_assert_eq!(change.previous.units(), entry.1);
                                    entry.1 = stock as u64;
                                }
                            }
                        }
                        Op::Delete(id) => {
                            let result = inv.delete(pid(id));
                            match model.iter().position(|(m, _)| *m == id) {
                                Some(index) => {
                                    model.remove(index);
                                    prop_assert_eq!(result.unwrap().index, index);
                                }
                                None => prop_assert_eq!(result, Err(DomainError::NotFound(pid(id)))),
                            }
                        }
                    }

                    let actual: Vec<(u32, u64)> =
                        inv.iter().map(|p| (p.id().get(), p.stock().units())).collect();
                    prop_assert_eq!(&actual, &model);
                    assert_well_linked(&inv);
                }
            }

            /// Property: a rejected insert leaves the sequence identical.
            #[test]
            fn duplicate_insert_is_a_no_op(
                ids in prop::collection::hash_set(0u32..1000, 1..20),
                pick in any::<prop::sample::Index>(),
                head in any::<bool>(),
            ) {
                let ids: Vec<u32> = ids.into_iter().collect();
                let mut inv = Inventory::new();
                for id in &ids {
                    inv.insert(pid(*id), ProductName::new("p"), Stock::new(u64::from(*id)), InsertPosition::Tail).unwrap();
                }
                let before = inv.list();
                let dup = ids[pick.index(ids.len())];
                let pos = if head { InsertPosition::Head } else { InsertPosition::Tail };

                let result = inv.insert(pid(dup), ProductName::new("dup"), Stock::ZERO, pos);
                prop_assert_eq!(result, Err(DomainError::DuplicateId(pid(dup))));
                prop_assert_eq!(inv.list(), before);
            }
        }
    }
}
