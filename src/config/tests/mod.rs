//! Unit tests for configuration loading and precedence.
//!
//! Tests are organised into modules by functional area:
//! - `precedence`: Layer precedence tests
//! - `field_resolution`: Access key, PR URL, cutoff, and zone resolution tests
