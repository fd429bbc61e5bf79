// Endpoint catalog
//
// One descriptor per resource/action pair. Auth flags mirror what the
// existing front end sends for each call, which is not uniform across
// resources (billing and payroll creation go out without a bearer token,
// for instance). `CredentialPolicy::Always` on the client overrides them.
//
// Mutating endpoints answer with plain text or with JSON followed by
// trailing junk, so their responses are `opaque`.

use crate::descriptor::{FieldSpec, ResourceDescriptor};

// ── Authentication ──────────────────────────────────────────────────

pub const AUTHENTICATION: ResourceDescriptor =
    ResourceDescriptor::new("authentication", "/tokens/authentication")
        .fields(&[FieldSpec::text("email"), FieldSpec::text("password")])
        .form_encoded()
        .public();

pub const REGISTRATION: ResourceDescriptor = ResourceDescriptor::new("registration", "/admin/register")
    .fields(&[
        FieldSpec::text("name"),
        FieldSpec::text("email"),
        FieldSpec::text("password"),
        FieldSpec::text("secret-key").optional(),
    ])
    .form_encoded()
    .public()
    .opaque();

pub const HEALTHCHECK: ResourceDescriptor = ResourceDescriptor::new("healthcheck", "/healthcheck")
    .public()
    .opaque();

// ── Customers ───────────────────────────────────────────────────────

pub const CUSTOMER_LIST: ResourceDescriptor = ResourceDescriptor::new("customer", "/v1/customer");

pub const CUSTOMER_DETAIL: ResourceDescriptor = ResourceDescriptor::new("customer", "/v1/customer");

pub const CUSTOMER_CREATE: ResourceDescriptor = ResourceDescriptor::new("customer", "/v1/customer")
    .fields(&[
        FieldSpec::text("name"),
        FieldSpec::text("email"),
        FieldSpec::text("phone").sent_as("info"),
        FieldSpec::text("address").optional(),
    ])
    .opaque();

pub const CUSTOMER_UPDATE: ResourceDescriptor = ResourceDescriptor::new("customer", "/v1/customer")
    .fields(&[
        FieldSpec::text("name").optional(),
        FieldSpec::text("email").optional(),
        FieldSpec::text("phone").optional(),
        FieldSpec::text("address").optional(),
    ])
    .opaque();

pub const CUSTOMER_DELETE: ResourceDescriptor =
    ResourceDescriptor::new("customer", "/v1/customer").opaque();

// ── Billing ─────────────────────────────────────────────────────────

pub const BILLING_LIST: ResourceDescriptor = ResourceDescriptor::new("billing", "/v1/billing");

pub const BILLING_CREATE: ResourceDescriptor = ResourceDescriptor::new("billing", "/v1/billing")
    .fields(&[
        FieldSpec::integer("customer_id"),
        FieldSpec::float("amount"),
        FieldSpec::text("date"),
    ])
    .public()
    .opaque();

// ── Payroll ─────────────────────────────────────────────────────────

pub const PAYROLL_LIST: ResourceDescriptor = ResourceDescriptor::new("payroll", "/v1/payroll");

pub const PAYROLL_CREATE: ResourceDescriptor = ResourceDescriptor::new("payroll", "/v1/payroll")
    .fields(&[
        FieldSpec::integer("employee_id"),
        FieldSpec::float("amount"),
        FieldSpec::text("date"),
    ])
    .public()
    .opaque();

pub const PAYROLL_UPDATE: ResourceDescriptor = ResourceDescriptor::new("payroll", "/v1/payroll")
    .fields(&[
        FieldSpec::integer("employee_id").optional(),
        FieldSpec::float("amount").optional(),
        FieldSpec::text("date").optional(),
    ])
    .opaque();

pub const PAYROLL_DELETE: ResourceDescriptor =
    ResourceDescriptor::new("payroll", "/v1/payroll").opaque();

// ── Users ───────────────────────────────────────────────────────────

pub const USER_LIST: ResourceDescriptor = ResourceDescriptor::new("user", "/v1/user");

pub const USER_DETAIL: ResourceDescriptor = ResourceDescriptor::new("user", "/v1/user");

pub const USER_CREATE: ResourceDescriptor = ResourceDescriptor::new("user", "/v1/user")
    .fields(&[
        FieldSpec::text("name").optional(),
        FieldSpec::text("email"),
        FieldSpec::text("password"),
        FieldSpec::text("role"),
    ])
    .opaque();

pub const USER_UPDATE: ResourceDescriptor = ResourceDescriptor::new("user", "/v1/user")
    .fields(&[
        FieldSpec::text("email").optional(),
        FieldSpec::text("password").optional(),
        FieldSpec::text("role").optional(),
    ])
    .opaque();

pub const USER_DELETE: ResourceDescriptor = ResourceDescriptor::new("user", "/v1/user").opaque();
