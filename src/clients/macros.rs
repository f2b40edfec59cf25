/// Generates the read side shared by every collection client: a point lookup
/// and a full listing. The client struct must hold a `store: StoreClient`
/// field and `$error` must convert from `StoreError`.
#[macro_export]
macro_rules! impl_client_methods {
    ($client_name:ident, $entity:ty, $error:ty, $one:ident, $many:ident) => {
        paste::paste! {
            impl $client_name {
                #[tracing::instrument(skip(self))]
                pub async fn [<get_ $one>](
                    &self,
                    id: &str,
                ) -> Result<Option<$crate::actor_framework::StoredDocument<$entity>>, $error> {
                    tracing::debug!("Sending request");
                    let id = $crate::document_id::DocumentId::parse(id)?;
                    Ok(self.store.find::<$entity>(id).await?)
                }

                #[tracing::instrument(skip(self))]
                pub async fn [<list_ $many>](
                    &self,
                ) -> Result<Vec<$crate::actor_framework::StoredDocument<$entity>>, $error> {
                    tracing::debug!("Sending request");
                    Ok(self.store.all::<$entity>().await?)
                }
            }
        }
    };
}

#[macro_export]
macro_rules! impl_client_new {
    ($client_name:ident) => {
        impl $client_name {
            pub fn new(store: $crate::actor_framework::StoreClient) -> Self {
                Self { store }
            }
        }
    };
}

#[macro_export]
macro_rules! impl_basic_client {
    ($client_name:ident, $entity:ty, $error:ty, $one:ident, $many:ident) => {
        $crate::impl_client_new!($client_name);
        $crate::impl_client_methods!($client_name, $entity, $error, $one, $many);
    };
}
