use crate::app::quantity::ItemQuantity;
use crate::core::aggregate;
use crate::domain::model::{Assembly, CartLineItem, CartSummary, Severity};
use crate::domain::ports::{Navigator, Notifier, QuantityUpdater, SessionKey, SessionStore};
use crate::utils::error::{Result, StorefrontError};

/// Cart view shell: renders assembled line items, exposes the aggregate
/// totals, and wires the per-line quantity callbacks to the remote updater.
pub struct CartView<S, U, N, V>
where
    S: SessionStore,
    U: QuantityUpdater,
    N: Notifier,
    V: Navigator,
{
    assembly: Assembly,
    session: S,
    updater: U,
    notifier: N,
    nav: V,
}

impl<S, U, N, V> CartView<S, U, N, V>
where
    S: SessionStore,
    U: QuantityUpdater,
    N: Notifier,
    V: Navigator,
{
    pub fn new(assembly: Assembly, session: S, updater: U, notifier: N, nav: V) -> Self {
        Self {
            assembly,
            session,
            updater,
            notifier,
            nav,
        }
    }

    pub fn lines(&self) -> &[CartLineItem] {
        &self.assembly.items
    }

    pub fn quantity_control(&self, product_id: &str) -> Option<ItemQuantity> {
        self.assembly
            .items
            .iter()
            .find(|line| line.product_id == product_id)
            .map(|line| ItemQuantity::for_line(line, true))
    }

    pub fn summary(&self) -> CartSummary {
        CartSummary {
            items: self.assembly.items.clone(),
            total_value: aggregate::total_value(&self.assembly.items),
            total_count: aggregate::total_count(&self.assembly.items),
        }
    }

    pub async fn increment(&self, product_id: &str) -> Result<()> {
        self.change_quantity(product_id, 1).await
    }

    /// No lower bound: decrementing a quantity of 1 sends 0 to the updater.
    /// The collaborator owns the decision of what that means.
    pub async fn decrement(&self, product_id: &str) -> Result<()> {
        self.change_quantity(product_id, -1).await
    }

    pub fn checkout(&self) {
        self.nav.navigate_to("/checkout");
    }

    async fn change_quantity(&self, product_id: &str, delta: i64) -> Result<()> {
        let line = self
            .assembly
            .items
            .iter()
            .find(|line| line.product_id == product_id)
            .ok_or_else(|| StorefrontError::ValidationError {
                message: format!("No cart line for product id: {product_id}"),
            })?;

        let token =
            self.session
                .get(SessionKey::Token)
                .ok_or_else(|| StorefrontError::SessionError {
                    message: "No session token, cannot update cart".to_string(),
                })?;

        let new_quantity = line.quantity + delta;
        tracing::debug!(
            "Updating quantity for {} from {} to {}",
            product_id,
            line.quantity,
            new_quantity
        );

        self.updater
            .update_quantity(&token, product_id, new_quantity)
            .await?;

        self.notifier.notify("Cart updated", Severity::Success);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::AssemblyWarning;
    use std::sync::Mutex;

    struct TokenSession {
        token: Option<String>,
    }

    impl SessionStore for TokenSession {
        fn get(&self, key: SessionKey) -> Option<String> {
            match key {
                SessionKey::Token => self.token.clone(),
                SessionKey::Username => Some("ada".to_string()),
            }
        }

        fn clear(&self) {}
    }

    #[derive(Default)]
    struct RecordingUpdater {
        calls: Mutex<Vec<(String, String, i64)>>,
    }

    impl QuantityUpdater for RecordingUpdater {
        async fn update_quantity(
            &self,
            token: &str,
            product_id: &str,
            new_quantity: i64,
        ) -> Result<()> {
            self.calls.lock().unwrap().push((
                token.to_string(),
                product_id.to_string(),
                new_quantity,
            ));
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        messages: Mutex<Vec<(String, Severity)>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, message: &str, severity: Severity) {
            self.messages
                .lock()
                .unwrap()
                .push((message.to_string(), severity));
        }
    }

    #[derive(Default)]
    struct RecordingNavigator {
        visited: Mutex<Vec<String>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate_to(&self, path: &str) {
            self.visited.lock().unwrap().push(path.to_string());
        }
    }

    fn line(id: &str, cost: f64, quantity: i64) -> CartLineItem {
        CartLineItem {
            product_id: id.to_string(),
            name: format!("Product {id}"),
            category: "misc".to_string(),
            cost,
            rating: 4,
            image_url: format!("https://cdn.example.com/{id}.png"),
            quantity,
        }
    }

    fn view(
        items: Vec<CartLineItem>,
        token: Option<&str>,
    ) -> CartView<TokenSession, RecordingUpdater, RecordingNotifier, RecordingNavigator> {
        CartView::new(
            Assembly {
                items,
                warnings: vec![],
            },
            TokenSession {
                token: token.map(str::to_string),
            },
            RecordingUpdater::default(),
            RecordingNotifier::default(),
            RecordingNavigator::default(),
        )
    }

    #[tokio::test]
    async fn test_increment_sends_quantity_plus_one_with_token() {
        let view = view(vec![line("A", 10.0, 2)], Some("tok-1"));

        view.increment("A").await.unwrap();

        let calls = view.updater.calls.lock().unwrap();
        assert_eq!(*calls, vec![("tok-1".to_string(), "A".to_string(), 3)]);
    }

    #[tokio::test]
    async fn test_decrement_does_not_clamp_at_zero() {
        let view = view(vec![line("A", 10.0, 1)], Some("tok-1"));

        view.decrement("A").await.unwrap();

        let calls = view.updater.calls.lock().unwrap();
        assert_eq!(*calls, vec![("tok-1".to_string(), "A".to_string(), 0)]);
    }

    #[tokio::test]
    async fn test_update_without_token_fails() {
        let view = view(vec![line("A", 10.0, 1)], None);

        let err = view.increment("A").await.unwrap_err();

        assert!(matches!(err, StorefrontError::SessionError { .. }));
        assert!(view.updater.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_unknown_line_fails() {
        let view = view(vec![line("A", 10.0, 1)], Some("tok-1"));

        let err = view.increment("Z").await.unwrap_err();

        assert!(matches!(err, StorefrontError::ValidationError { .. }));
    }

    #[tokio::test]
    async fn test_successful_update_notifies() {
        let view = view(vec![line("A", 10.0, 2)], Some("tok-1"));

        view.increment("A").await.unwrap();

        let messages = view.notifier.messages.lock().unwrap();
        assert_eq!(
            *messages,
            vec![("Cart updated".to_string(), Severity::Success)]
        );
    }

    #[test]
    fn test_summary_reflects_lines() {
        let view = view(vec![line("A", 5.0, 3), line("B", 2.0, 1)], None);

        let summary = view.summary();

        assert_eq!(summary.total_value, 17.0);
        assert_eq!(summary.total_count, 4);
    }

    #[test]
    fn test_quantity_control_for_known_line() {
        let view = view(vec![line("A", 5.0, 3)], None);

        let control = view.quantity_control("A").unwrap();
        assert_eq!(control.label(), "- 3 +");
        assert!(view.quantity_control("Z").is_none());
    }

    #[test]
    fn test_checkout_navigates() {
        let view = view(vec![], None);

        view.checkout();

        let visited = view.nav.visited.lock().unwrap();
        assert_eq!(*visited, vec!["/checkout"]);
    }

    #[test]
    fn test_warnings_do_not_block_rendering() {
        let assembly = Assembly {
            items: vec![line("A", 1.0, 1)],
            warnings: vec![AssemblyWarning::MissingProduct {
                product_id: "Z".to_string(),
            }],
        };
        let view = CartView::new(
            assembly,
            TokenSession { token: None },
            RecordingUpdater::default(),
            RecordingNotifier::default(),
            RecordingNavigator::default(),
        );

        assert_eq!(view.lines().len(), 1);
    }
}
