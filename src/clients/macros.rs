/// Generate client methods with oneshot channel boilerplate and automatic tracing.
macro_rules! client_method {
    ($client:ty => fn $method:ident($($param:ident: $param_type:ty),*) -> $return_type:ty as $request:ident::$variant:ident) => {
        impl $client {
            #[tracing::instrument(skip(self))]
            pub async fn $method(&self, $($param: $param_type),*) -> Result<$return_type, $crate::error::StoreError> {
                tracing::debug!("Sending request");
                let (respond_to, response) = tokio::sync::oneshot::channel();
                self.sender
                    .send($request::$variant {
                        $($param,)*
                        respond_to,
                    })
                    .await
                    .map_err(|_| $crate::error::StoreError::ActorClosed)?;

                response.await.map_err(|_| $crate::error::StoreError::ActorDropped)?
            }
        }
    };
}

/// Generate the snapshot accessors shared by every store client.
macro_rules! snapshot_accessors {
    ($client:ty, $record:ty) => {
        impl $client {
            /// Current contents of the store. Never waits on the actor.
            pub fn snapshot(&self) -> $crate::actor_framework::Snapshot<$record> {
                self.state.borrow().clone()
            }

            pub fn items(&self) -> std::sync::Arc<Vec<$record>> {
                std::sync::Arc::clone(&self.state.borrow().items)
            }

            pub fn is_loading(&self) -> bool {
                self.state.borrow().loading
            }

            pub fn get(&self, id: <$record as $crate::actor_framework::Record>::Id) -> Option<$record> {
                self.state.borrow().find(id).cloned()
            }

            /// A receiver that wakes whenever the store publishes a new snapshot.
            pub fn subscribe(&self) -> tokio::sync::watch::Receiver<$crate::actor_framework::Snapshot<$record>> {
                self.state.clone()
            }
        }
    };
}
