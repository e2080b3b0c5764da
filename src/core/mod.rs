/*!
 * Core Module
 * Shared types and centralized error handling
 */

pub mod errors;
pub mod types;
