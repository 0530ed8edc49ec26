//! Server-side API backend and business logic.
//!
//! # Architecture
//!
//! The server follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business rules between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and validated parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Security pipeline, sessions and authentication guards
//!
//! Supporting modules:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state
//! - **Startup** (`startup`) - Database, sessions, listener and shutdown
//! - **Router** (`router`) - Route table, API documentation and middleware assembly
//!
//! # Request Flow
//!
//! 1. Tracing and panic isolation wrap every request
//! 2. The security pipeline cleans and rate-limits the request
//! 3. The session layer loads the session from its cookie
//! 4. The router dispatches to a controller, which checks access and calls a service
//! 5. The service applies business rules and calls repositories
//! 6. The controller converts the domain model to a DTO and responds

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
