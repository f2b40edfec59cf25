use serde::Serialize;
use tracing::{error, info, instrument, warn};
use validator::Validate;

use crate::actor_framework::StoreClient;
use crate::clients::MenuClient;
use crate::document_id::DocumentId;
use crate::domain::{round_currency, Order, OrderItem, OrderRequest, ORDER_STATUS_RECEIVED};
use crate::error::{MenuError, OrderError};

/// Outcome of a successfully placed order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedOrder {
    pub id: DocumentId,
    pub total: f64,
}

/// Client for the `order` collection.
///
/// Placing an order reads each referenced pizza through the menu client and
/// copies its name and price into the order before anything is written.
#[derive(Clone)]
pub struct OrderClient {
    store: StoreClient,
    menu_client: MenuClient,
}

impl OrderClient {
    pub fn new(store: StoreClient, menu_client: MenuClient) -> Self {
        Self { store, menu_client }
    }

    #[instrument(skip(self, request), fields(customer = %request.customer_name, lines = request.items.len()))]
    pub async fn create_order(&self, request: OrderRequest) -> Result<PlacedOrder, OrderError> {
        info!("Processing create_order request");

        if request.items.is_empty() {
            warn!("Order has no items");
            return Err(OrderError::EmptyOrder);
        }

        let mut items = Vec::with_capacity(request.items.len());
        let mut total = 0.0;

        // Lines are resolved in order and the first failure aborts the order.
        for line in &request.items {
            let Ok(id) = DocumentId::parse(&line.pizza_id) else {
                error!(pizza_id = %line.pizza_id, "Malformed pizza id");
                return Err(OrderError::InvalidPizzaId(line.pizza_id.clone()));
            };

            let pizza = match self.menu_client.find_pizza(id).await {
                Ok(Some(pizza)) => pizza.body,
                Ok(None) => {
                    error!(pizza_id = %line.pizza_id, "Pizza not found");
                    return Err(OrderError::PizzaNotFound(line.pizza_id.clone()));
                }
                Err(MenuError::Store(e)) => {
                    error!(error = %e, "Pizza lookup failed");
                    return Err(OrderError::Store(e));
                }
                Err(MenuError::Validation(errors)) => return Err(OrderError::Validation(errors)),
            };

            let item = OrderItem {
                pizza_id: line.pizza_id.clone(),
                name: pizza.name,
                price: pizza.price,
                quantity: line.effective_quantity(),
            };
            total += item.line_total();
            items.push(item);
        }

        let order = Order {
            customer_name: request.customer_name,
            phone: request.phone,
            address: request.address,
            items,
            notes: request.notes,
            total: round_currency(total),
            status: ORDER_STATUS_RECEIVED.to_string(),
        };
        order.validate().map_err(OrderError::Validation)?;

        let id = self.store.insert(&order).await?;
        info!(order_id = %id, total = order.total, "Order created successfully");
        Ok(PlacedOrder { id, total: order.total })
    }
}

impl_client_methods!(OrderClient, Order, OrderError, order, orders);
