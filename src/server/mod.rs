//! Server-side API backend and business logic.
//!
//! This module contains the complete backend: API endpoints, business logic, data access,
//! the World Bank client and infrastructure. The backend uses Axum as the web framework,
//! SeaORM for database operations and reqwest for upstream requests.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business logic: authentication, indicator normalization and fallbacks
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session access and the login guard
//! - **Upstream** (`worldbank/`) - Client for the World Bank indicator API
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, World Bank client)
//! - **Startup** (`startup`) - Tracing, database, sessions and HTTP client initialization
//! - **Router** (`router`) - Axum route configuration
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Middleware** loads the session and rejects anonymous `/api` requests
//! 3. **Controller** parses the query or form into parameters and calls a service
//! 4. **Service** fetches from upstream or the database and builds domain models
//! 5. **Controller** converts the domain model to a DTO and responds

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
pub mod worldbank;
