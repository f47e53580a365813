//! Tests for catalog services
//!
//! Real random services are checked for range and shape; the planets client
//! is driven through a mocked transport.
