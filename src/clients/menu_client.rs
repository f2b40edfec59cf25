use tracing::{debug, info, instrument, warn};
use validator::Validate;

use crate::actor_framework::{StoreClient, StoredDocument};
use crate::document_id::DocumentId;
use crate::domain::Pizza;
use crate::error::MenuError;

/// Client for the `pizza` collection.
#[derive(Clone)]
pub struct MenuClient {
    store: StoreClient,
}

impl_basic_client!(MenuClient, Pizza, MenuError, pizza, menu);

impl MenuClient {
    /// Validates and stores a new pizza. Names are not deduplicated.
    #[instrument(skip(self, pizza), fields(pizza_name = %pizza.name))]
    pub async fn add_pizza(&self, pizza: Pizza) -> Result<DocumentId, MenuError> {
        debug!("Sending request");
        if let Err(errors) = pizza.validate() {
            warn!(%errors, "Pizza rejected");
            return Err(MenuError::Validation(errors));
        }
        let id = self.store.insert(&pizza).await?;
        info!(pizza_id = %id, "Pizza added to menu");
        Ok(id)
    }

    /// Lookup by an already parsed id.
    #[instrument(skip(self))]
    pub async fn find_pizza(&self, id: DocumentId) -> Result<Option<StoredDocument<Pizza>>, MenuError> {
        debug!("Sending request");
        Ok(self.store.find::<Pizza>(id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor_framework::DocumentStoreActor;
    use crate::error::StoreError;

    fn start() -> MenuClient {
        let (actor, store) = DocumentStoreActor::in_memory(8, "test");
        tokio::spawn(actor.run());
        MenuClient::new(store)
    }

    #[tokio::test]
    async fn added_pizza_is_listed_with_all_fields() {
        let menu = start();
        let pizza = Pizza {
            name: "Diavola".to_string(),
            description: Some("Salami and chilli".to_string()),
            price: 11.0,
            image: Some("https://example.com/diavola.png".to_string()),
            vegetarian: false,
            spicy: true,
        };

        let id = menu.add_pizza(pizza.clone()).await.unwrap();
        let listed = menu.list_menu().await.unwrap();

        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, id);
        assert_eq!(listed[0].body, pizza);
    }

    #[tokio::test]
    async fn duplicate_names_are_allowed() {
        let menu = start();
        let first = menu.add_pizza(Pizza::new("Margherita", 9.5)).await.unwrap();
        let second = menu.add_pizza(Pizza::new("Margherita", 9.5)).await.unwrap();
        assert_ne!(first, second);
        assert_eq!(menu.list_menu().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn negative_price_is_rejected_before_storing() {
        let menu = start();
        let result = menu.add_pizza(Pizza::new("Refund", -1.0)).await;
        assert!(matches!(result, Err(MenuError::Validation(_))));
        assert!(menu.list_menu().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn get_pizza_parses_the_id() {
        let menu = start();
        let id = menu.add_pizza(Pizza::new("Margherita", 9.5)).await.unwrap();

        let found = menu.get_pizza(&id.to_string()).await.unwrap().unwrap();
        assert_eq!(found.body.name, "Margherita");

        let result = menu.get_pizza("nope").await;
        assert_eq!(result, Err(MenuError::Store(StoreError::InvalidId("nope".to_string()))));
    }
}
