//! Snaplink - a minimal URL shortener service
//!
//! This library provides the core functionality for the Snaplink service:
//! short-code generation, durable code-to-URL mappings, and the HTTP
//! endpoints that create and resolve them.
//!
//! # Architecture
//! - `api`: HTTP handlers and route wiring (shorten, redirect, static assets)
//! - `repository`: storage backends and data access
//! - `config`: configuration management
//! - `system`: logging and process-level utilities
//! - `utils`: short-code generation

pub mod api;
pub mod config;
pub mod errors;
pub mod repository;
pub mod system;
pub mod utils;
