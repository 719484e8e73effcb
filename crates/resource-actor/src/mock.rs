//! # Mock Framework & Testing Guide
//!
//! The `MockClient<T>` type hands out a real `ResourceClient<T>` whose requests are answered
//! from a queue of expectations instead of a database. It lets you test code that sits *on top
//! of* the client (HTTP handlers, orchestration) deterministically and without SQLite.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **Speed** | Instant (in-memory) | Fast (in-memory SQLite) |
//! | **State** | No real state (expectations) | Real rows |
//! | **Use Case** | Testing logic *around* the client | Testing the data access layer or full system |
//! | **Error Injection** | Easy (`return_err`) | Hard (requires a broken database) |
//! | **Call Checking** | Unexpected requests are recorded and fail `verify()` | No |
//!
//! ## Example
//!
//! ```rust,ignore
//! let mut mock = MockClient::<Order>::new();
//! mock.expect_get(OrderId(7)).return_ok(None);
//!
//! let app = router_for(mock.client());
//! // PUT /orders/7 must stop at the lookup and never send an Update.
//! mock.verify();
//! ```
//!
//! ## Mocking Utilities
//!
//! Use [`create_mock_client`] to get a client and a raw receiver, or use the fluent [`MockClient`] API.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// The canned answer for one expected request.
enum Reply<T: ActorEntity> {
    Get(Result<Option<T>, FrameworkError>),
    List(Result<Vec<T>, FrameworkError>),
    Create(Result<T, FrameworkError>),
    Update(Result<T, FrameworkError>),
    Delete(Result<T, FrameworkError>),
}

/// An expected request: which ID it targets (if any) and what to answer.
struct Expectation<T: ActorEntity> {
    id: Option<T::Id>,
    reply: Reply<T>,
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

fn lock<V>(mutex: &Mutex<V>) -> MutexGuard<'_, V> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn request_kind<T: ActorEntity>(request: &ResourceRequest<T>) -> String {
    match request {
        ResourceRequest::Create { .. } => "Create".to_string(),
        ResourceRequest::Get { id, .. } => format!("Get({id})"),
        ResourceRequest::List { .. } => "List".to_string(),
        ResourceRequest::Update { id, .. } => format!("Update({id})"),
        ResourceRequest::Delete { id, .. } => format!("Delete({id})"),
    }
}

/// A mock client with expectation tracking for fluent testing.
///
/// Expectations are consumed in the order they were registered. A request that does not
/// match the next expectation (wrong kind or wrong ID) is recorded as a failure and its
/// response channel is dropped, so the caller observes `FrameworkError::ActorDropped`.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Queue<T>,
    failures: Arc<Mutex<Vec<String>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let failures = Arc::new(Mutex::new(Vec::new()));
        let queue = expectations.clone();
        let failed = failures.clone();

        // Spawn background task to handle requests
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let kind = request_kind(&request);
                let expectation = lock(&queue).pop_front();

                let Some(Expectation { id: expected_id, reply }) = expectation else {
                    lock(&failed).push(format!("unexpected {kind} request"));
                    continue;
                };

                let id_matches = |id: T::Id| expected_id == Some(id);
                match (request, reply) {
                    (ResourceRequest::Create { respond_to, .. }, Reply::Create(response)) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::List { respond_to }, Reply::List(response)) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Get { id, respond_to }, Reply::Get(response))
                        if id_matches(id) =>
                    {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Update { id, respond_to, .. }, Reply::Update(response))
                        if id_matches(id) =>
                    {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Delete { id, respond_to }, Reply::Delete(response))
                        if id_matches(id) =>
                    {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        lock(&failed).push(format!("{kind} request did not match expectation"));
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            failures,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    fn builder<V>(
        &self,
        id: Option<T::Id>,
        wrap: fn(Result<V, FrameworkError>) -> Reply<T>,
    ) -> ExpectationBuilder<T, V> {
        ExpectationBuilder {
            expectations: self.expectations.clone(),
            id,
            wrap,
        }
    }

    /// Expects a `get` operation.
    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        self.builder(Some(id), Reply::Get)
    }

    /// Expects a `list` operation.
    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(None, Reply::List)
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T> {
        self.builder(None, Reply::Create)
    }

    /// Expects an `update` operation.
    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        self.builder(Some(id), Reply::Update)
    }

    /// Expects a `delete` operation.
    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        self.builder(Some(id), Reply::Delete)
    }

    /// Verifies that all expectations were met and no unexpected request arrived.
    pub fn verify(&self) {
        let failures = lock(&self.failures);
        if !failures.is_empty() {
            panic!("Unexpected requests: {}", failures.join(", "));
        }
        let remaining = lock(&self.expectations).len();
        if remaining > 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }
}

/// Builder returned by the `expect_*` methods of [`MockClient`].
pub struct ExpectationBuilder<T: ActorEntity, V> {
    expectations: Queue<T>,
    id: Option<T::Id>,
    wrap: fn(Result<V, FrameworkError>) -> Reply<T>,
}

impl<T: ActorEntity, V> ExpectationBuilder<T, V> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: V) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<V, FrameworkError>) {
        lock(&self.expectations).push_back(Expectation {
            id: self.id,
            reply: (self.wrap)(response),
        });
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// Creates a mock client and a receiver for asserting requests.
///
/// The client sends messages to a channel the test controls, so the test can inspect each
/// request and answer it by hand (success, failure, or never).
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, crate::message::Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, crate::message::Response<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::SqliteQuery;

    #[derive(Clone, Debug, PartialEq, sqlx::FromRow)]
    struct Tag {
        id: i64,
        label: String,
    }

    #[derive(Debug)]
    struct TagCreate {
        label: String,
    }

    impl ActorEntity for Tag {
        type Id = i64;
        type Create = TagCreate;
        type Update = String;

        const NAME: &'static str = "Tag";
        const TABLE: &'static str = "tags";
        const COLUMNS: &'static [&'static str] = &["label"];
        const SCHEMA: &'static str = "";

        fn from_create_params(id: i64, params: TagCreate) -> Self {
            Self {
                id,
                label: params.label,
            }
        }

        fn id(&self) -> i64 {
            self.id
        }

        fn bind_columns<'q>(&self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
            query.bind(self.label.clone())
        }

        fn on_update(&mut self, label: String) {
            self.label = label;
        }
    }

    fn tag(id: i64, label: &str) -> Tag {
        Tag {
            id,
            label: label.to_string(),
        }
    }

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<Tag>(10);

        let create_task = tokio::spawn(async move {
            client
                .create(TagCreate {
                    label: "vegan".to_string(),
                })
                .await
        });

        let (payload, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(payload.label, "vegan");
        responder.send(Ok(tag(1, "vegan"))).unwrap();

        let result = create_task.await.unwrap();
        assert_eq!(result.unwrap(), tag(1, "vegan"));
    }

    #[tokio::test]
    async fn test_raw_get_answered_by_hand() {
        let (client, mut receiver) = create_mock_client::<Tag>(10);

        let get_task = tokio::spawn(async move { client.get(3).await });

        let (id, responder) = expect_get(&mut receiver).await.expect("Expected Get request");
        assert_eq!(id, 3);
        responder.send(Ok(None)).unwrap();

        assert!(get_task.await.unwrap().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Tag>::new();

        mock.expect_create().return_ok(tag(1, "spicy"));
        mock.expect_get(1).return_ok(Some(tag(1, "spicy")));
        mock.expect_list().return_ok(vec![tag(1, "spicy")]);
        mock.expect_update(1).return_ok(tag(1, "mild"));
        mock.expect_delete(1).return_ok(tag(1, "mild"));

        let client = mock.client();

        let created = client
            .create(TagCreate {
                label: "spicy".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(created.id, 1);

        let fetched = client.get(1).await.unwrap();
        assert_eq!(fetched, Some(tag(1, "spicy")));
        assert_eq!(client.list().await.unwrap().len(), 1);
        assert_eq!(client.update(1, "mild".into()).await.unwrap().label, "mild");
        assert_eq!(client.delete(1).await.unwrap().label, "mild");

        mock.verify();
    }

    #[tokio::test]
    async fn test_mock_client_returns_injected_error() {
        let mut mock = MockClient::<Tag>::new();
        mock.expect_get(9)
            .return_err(FrameworkError::NotFound("9".to_string()));

        let result = mock.client().get(9).await;
        assert!(matches!(result, Err(FrameworkError::NotFound(id)) if id == "9"));
        mock.verify();
    }

    #[tokio::test]
    async fn test_mismatched_id_is_recorded() {
        let mut mock = MockClient::<Tag>::new();
        mock.expect_get(1).return_ok(None);

        let result = mock.client().get(2).await;
        assert!(matches!(result, Err(FrameworkError::ActorDropped)));

        let verdict = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| mock.verify()));
        assert!(verdict.is_err());
    }

    #[tokio::test]
    async fn test_unexpected_request_is_recorded() {
        let mock = MockClient::<Tag>::new();

        let result = mock.client().delete(4).await;
        assert!(matches!(result, Err(FrameworkError::ActorDropped)));

        let verdict = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| mock.verify()));
        assert!(verdict.is_err());
    }
}
