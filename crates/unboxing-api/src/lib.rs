// unboxing-api: Async Rust client for the Unboxing back-office REST API
//
// One generic `ResourceClient` drives every endpoint. Each endpoint is a
// static `ResourceDescriptor` (path, payload fields, body encoding, auth
// requirement); the typed wrappers in `resources` are thin conveniences on
// top of `ResourceClient::perform`.

pub mod catalog;
pub mod client;
pub mod descriptor;
pub mod error;
pub mod models;
pub mod outcome;
pub mod resources;
pub mod session;
pub mod transport;

pub use client::{CredentialPolicy, ResourceClient};
pub use descriptor::{
    Encoding, FieldKind, FieldSpec, Method, Payload, ResourceDescriptor, ResponseBody,
};
pub use error::Error;
pub use models::{
    AuthenticationToken, Billing, Credentials, Customer, HealthStatus, Payroll, Registration, User,
};
pub use outcome::{Body, FailureKind, RequestOutcome};
pub use resources::USERS_ENVELOPE;
pub use session::{CREDENTIAL_SLOT, CredentialStore, MemoryStore, Session, StoreError};
pub use transport::{TlsMode, TransportConfig};
