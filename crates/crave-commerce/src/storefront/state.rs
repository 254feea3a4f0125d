//! Storefront state and intent handling.

use std::sync::Arc;

use crate::cart::{CartItem, CartLedger};
use crate::catalog::{Catalog, Product};
use crate::checkout::{CheckoutConfirmation, NoopNotifier, OrderNotifier, OrderSummary};
use crate::error::CommerceError;
use crate::ids::{CartItemId, ProductId};
use crate::money::Money;
use crate::search::{CatalogFilter, CategoryFilter};
use crate::selection::{AddOutcome, SelectionFlow};
use crate::storefront::{Intent, Panels, StorefrontView};

/// All mutable storefront state, owned in one place.
///
/// Surfaces call the intent methods (or [`Storefront::dispatch`]) and read
/// back through [`Storefront::view`]. Each intent is fully applied before it
/// returns, so views always reflect the latest state.
#[derive(Debug)]
pub struct Storefront<N = NoopNotifier> {
    catalog: Arc<Catalog>,
    cart: CartLedger,
    selection: SelectionFlow,
    filter: CatalogFilter,
    checkout: CheckoutConfirmation,
    cart_open: bool,
    notifier: N,
}

impl<N: OrderNotifier> Storefront<N> {
    /// Create a storefront over a shared catalog.
    pub fn new(catalog: Arc<Catalog>, notifier: N) -> Self {
        Self {
            catalog,
            cart: CartLedger::new(),
            selection: SelectionFlow::new(),
            filter: CatalogFilter::default(),
            checkout: CheckoutConfirmation::new(),
            cart_open: false,
            notifier,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &CartLedger {
        &self.cart
    }

    pub fn selection(&self) -> &SelectionFlow {
        &self.selection
    }

    pub fn filter(&self) -> &CatalogFilter {
        &self.filter
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Ask to add a product by id.
    ///
    /// Simple products land in the cart and open it. Flavored products
    /// open the flavor picker instead.
    pub fn request_add(&mut self, product_id: &ProductId) -> Result<AddOutcome, CommerceError> {
        let product = self
            .catalog
            .product(product_id)
            .ok_or_else(|| CommerceError::ProductNotFound(product_id.to_string()))?;

        let outcome = self.selection.request_add(product, &mut self.cart);
        if let AddOutcome::Added(_) = outcome {
            self.cart_open = true;
        }
        Ok(outcome)
    }

    /// Pick a flavor for the pending product.
    ///
    /// Returns `Ok(None)` without effect when nothing is pending. An unknown
    /// flavor name is an error and leaves the pending product in place.
    pub fn confirm_flavor(&mut self, flavor_name: &str) -> Result<Option<CartItemId>, CommerceError> {
        if self.selection.pending().is_none() {
            return Ok(None);
        }

        let flavor = self
            .catalog
            .flavor(flavor_name)
            .ok_or_else(|| CommerceError::FlavorNotFound(flavor_name.to_string()))?;

        let added = self.selection.confirm_flavor(flavor, &mut self.cart);
        if added.is_some() {
            self.cart_open = true;
        }
        Ok(added)
    }

    pub fn cancel_flavor_selection(&mut self) {
        self.selection.cancel();
    }

    /// Change a line's quantity; unknown ids are ignored.
    pub fn update_quantity(&mut self, item_id: &CartItemId, delta: i64) -> Option<i64> {
        self.cart.update_quantity(item_id, delta)
    }

    /// Remove a line; unknown ids are ignored.
    ///
    /// Removing the last line while checkout is open closes checkout.
    pub fn remove(&mut self, item_id: &CartItemId) -> bool {
        let removed = self.cart.remove(item_id);
        self.checkout.close_if_empty(&self.cart);
        removed
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.filter.set_category(category);
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.filter.set_query(query);
    }

    pub fn open_cart(&mut self) {
        self.cart_open = true;
    }

    pub fn close_cart(&mut self) {
        self.cart_open = false;
    }

    /// Move from the cart to the confirmation step.
    ///
    /// Does nothing for an empty cart.
    pub fn checkout(&mut self) -> bool {
        let opened = self.checkout.open(&self.cart);
        if opened {
            self.cart_open = false;
        }
        opened
    }

    pub fn cancel_checkout(&mut self) {
        self.checkout.cancel();
    }

    /// Place the order: notify once, then empty the cart.
    pub fn confirm_order(&mut self) -> Option<OrderSummary> {
        self.checkout.confirm(&mut self.cart, &self.notifier)
    }

    /// Summary shown by the confirmation step, if it is open.
    pub fn order_summary(&self) -> Option<OrderSummary> {
        self.checkout.summary(&self.cart)
    }

    /// Apply one intent.
    pub fn dispatch(&mut self, intent: Intent) -> Result<(), CommerceError> {
        tracing::debug!(%intent, "Dispatching intent");
        match intent {
            Intent::RequestAdd { product_id } => {
                self.request_add(&product_id)?;
            }
            Intent::ConfirmFlavor { flavor } => {
                self.confirm_flavor(&flavor)?;
            }
            Intent::CancelFlavorSelection => self.cancel_flavor_selection(),
            Intent::UpdateQuantity { item_id, delta } => {
                self.update_quantity(&item_id, delta);
            }
            Intent::Remove { item_id } => {
                self.remove(&item_id);
            }
            Intent::SetCategory { category } => self.set_category(category),
            Intent::SetSearchQuery { query } => self.set_search_query(query),
            Intent::OpenCart => self.open_cart(),
            Intent::CloseCart => self.close_cart(),
            Intent::Checkout => {
                self.checkout();
            }
            Intent::CancelCheckout => self.cancel_checkout(),
            Intent::ConfirmOrder => {
                self.confirm_order();
            }
        }
        Ok(())
    }

    pub fn items(&self) -> &[CartItem] {
        self.cart.items()
    }

    pub fn subtotal(&self) -> Money {
        self.cart.subtotal()
    }

    pub fn item_count(&self) -> i64 {
        self.cart.item_count()
    }

    /// Products passing the current filter.
    pub fn visible_products(&self) -> Vec<&Product> {
        self.filter.apply(&self.catalog)
    }

    pub fn pending_product(&self) -> Option<&Product> {
        self.selection.pending()
    }

    pub fn panels(&self) -> Panels {
        Panels {
            cart: self.cart_open,
            flavor: self.selection.pending().is_some(),
            checkout: self.checkout.is_open(),
        }
    }

    /// Snapshot for rendering.
    pub fn view(&self) -> StorefrontView {
        let totals = self.cart.totals();
        StorefrontView {
            items: self.cart.items().to_vec(),
            lines: totals.lines,
            subtotal: totals.subtotal,
            item_count: totals.item_count,
            products: self.visible_products().into_iter().cloned().collect(),
            pending_product: self.pending_product().cloned(),
            category: self.filter.category,
            query: self.filter.query.clone(),
            panels: self.panels(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use crate::checkout::RecordingNotifier;

    fn store() -> Storefront<RecordingNotifier> {
        Storefront::new(Arc::new(Catalog::builtin().unwrap()), RecordingNotifier::new())
    }

    #[test]
    fn test_simple_add_opens_cart() {
        let mut store = store();
        let outcome = store.request_add(&ProductId::new("c1")).unwrap();

        assert_eq!(outcome, AddOutcome::Added(CartItemId::new("c1")));
        assert!(store.panels().cart);
        assert!(!store.panels().flavor);
        assert_eq!(store.subtotal(), Money::new(39));
    }

    #[test]
    fn test_flavored_add_opens_picker() {
        let mut store = store();
        store.request_add(&ProductId::new("m2")).unwrap();

        let panels = store.panels();
        assert!(panels.flavor);
        assert!(!panels.cart);
        assert!(store.items().is_empty());
    }

    #[test]
    fn test_unknown_product() {
        let mut store = store();
        let err = store.request_add(&ProductId::new("x9")).unwrap_err();
        assert_eq!(err, CommerceError::ProductNotFound("x9".to_string()));
        assert!(store.items().is_empty());
    }

    #[test]
    fn test_unknown_flavor_keeps_pending() {
        let mut store = store();
        store.request_add(&ProductId::new("m1")).unwrap();

        let err = store.confirm_flavor("Ketchup").unwrap_err();
        assert_eq!(err, CommerceError::FlavorNotFound("Ketchup".to_string()));
        assert_eq!(store.pending_product().unwrap().id.as_str(), "m1");

        store.confirm_flavor("Dark Truffle").unwrap();
        assert_eq!(store.subtotal(), Money::new(105));
        assert!(store.panels().cart);
    }

    #[test]
    fn test_confirm_flavor_without_pending_is_noop() {
        let mut store = store();
        assert_eq!(store.confirm_flavor("Ketchup"), Ok(None));
        assert!(!store.panels().cart);
    }

    #[test]
    fn test_cancel_flavor_selection() {
        let mut store = store();
        store.request_add(&ProductId::new("m4")).unwrap();
        store.cancel_flavor_selection();

        assert!(store.pending_product().is_none());
        assert!(store.items().is_empty());
    }

    #[test]
    fn test_checkout_closes_cart() {
        let mut store = store();
        store.request_add(&ProductId::new("nc3")).unwrap();
        assert!(store.checkout());

        let panels = store.panels();
        assert!(!panels.cart);
        assert!(panels.checkout);
        assert_eq!(store.order_summary().unwrap().subtotal, Money::new(39));
    }

    #[test]
    fn test_checkout_on_empty_cart_is_noop() {
        let mut store = store();
        store.open_cart();
        assert!(!store.checkout());
        assert!(store.panels().cart);
        assert!(!store.panels().checkout);
    }

    #[test]
    fn test_confirm_order_notifies_and_clears() {
        let mut store = store();
        store.request_add(&ProductId::new("c2")).unwrap();
        store.request_add(&ProductId::new("c2")).unwrap();
        store.checkout();

        let summary = store.confirm_order().unwrap();
        assert_eq!(summary.item_count, 2);
        assert_eq!(store.item_count(), 0);
        assert!(!store.panels().checkout);
        assert_eq!(store.notifier().count(), 1);
    }

    #[test]
    fn test_confirm_order_on_empty_cart_is_noop() {
        let mut store = store();
        assert!(store.confirm_order().is_none());
        assert_eq!(store.notifier().count(), 0);
    }

    #[test]
    fn test_removing_last_line_closes_checkout() {
        let mut store = store();
        store.request_add(&ProductId::new("m1")).unwrap();
        store.confirm_flavor("Garlic").unwrap();
        store.request_add(&ProductId::new("m1")).unwrap();
        store.confirm_flavor("Garlic").unwrap();
        assert!(store.checkout());

        assert!(store.remove(&CartItemId::new("m1-Garlic")));
        assert_eq!(store.item_count(), 0);
        assert!(!store.panels().checkout);
        assert!(store.order_summary().is_none());

        assert!(store.confirm_order().is_none());
        assert_eq!(store.notifier().count(), 0);
        assert_eq!(store.panels(), Panels::default());
    }

    #[test]
    fn test_removing_one_of_two_lines_keeps_checkout() {
        let mut store = store();
        store.request_add(&ProductId::new("c1")).unwrap();
        store.request_add(&ProductId::new("c2")).unwrap();
        store.checkout();

        store.remove(&CartItemId::new("c1"));
        assert!(store.panels().checkout);
        assert_eq!(store.order_summary().unwrap().subtotal, Money::new(39));
    }

    #[test]
    fn test_cancel_checkout_keeps_cart() {
        let mut store = store();
        store.request_add(&ProductId::new("c2")).unwrap();
        store.checkout();
        store.cancel_checkout();

        assert!(!store.panels().checkout);
        assert_eq!(store.item_count(), 1);
    }

    #[test]
    fn test_view_tracks_filter() {
        let mut store = store();
        store.set_category(CategoryFilter::Only(Category::Meal));
        assert_eq!(store.view().products.len(), 4);

        store.set_search_query("kimchi");
        let view = store.view();
        assert_eq!(view.products.len(), 2);
        assert_eq!(view.query, "kimchi");
        assert_eq!(view.category, CategoryFilter::Only(Category::Meal));

        store.set_category(CategoryFilter::All);
        store.set_search_query("");
        assert_eq!(store.view().products.len(), 18);
    }

    #[test]
    fn test_dispatch_script() {
        let mut store = store();
        let script = "add m1\nflavor Garlic\nadd c1\nqty c1 +2\nremove nope\ncheckout\n";
        for intent in Intent::parse_script(script).unwrap() {
            store.dispatch(intent).unwrap();
        }

        let view = store.view();
        assert_eq!(view.item_count, 4);
        assert_eq!(view.subtotal, Money::new(100 + 39 * 3));
        assert!(view.panels.checkout);

        store.dispatch(Intent::ConfirmOrder).unwrap();
        assert_eq!(store.view().item_count, 0);
    }

    #[test]
    fn test_dispatch_propagates_lookup_errors() {
        let mut store = store();
        let err = store
            .dispatch(Intent::RequestAdd { product_id: ProductId::new("zz") })
            .unwrap_err();
        assert_eq!(err, CommerceError::ProductNotFound("zz".to_string()));
    }
}
