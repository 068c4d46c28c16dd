//! # Posts API
//!
//! A small CRUD service for posts, backed by a pluggable storage layer.
//!
//! This crate provides the full stack for the service: domain types, a
//! repository abstraction with Postgres and in-memory implementations, a
//! service layer with the API's business rules, and an Axum-based REST
//! server exposing them.
//!
//! ## Features
//!
//! - **Post CRUD**: Create, read, update, and delete posts over REST
//! - **Repository Pattern**: Swap storage backends without touching handlers
//! - **Postgres Backend**: Diesel + r2d2 connection pooling (`postgres-repo`)
//! - **Local Backend**: In-memory store for tests and local development (`local-repo`)
//! - **HTTP API**: RESTful endpoints with CORS, compression, and tracing (`http-server`)
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Domain types shared across layers
//! - [`db`]: Database operations, repository pattern, and persistence layer
//! - [`http`]: Axum-based HTTP server and request handlers

#![allow(clippy::result_large_err)]

pub mod api;

pub mod db;

#[cfg(feature = "http-server")]
pub mod http;
