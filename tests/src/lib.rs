//! End-to-end tests driving the catalog router over HTTP.
