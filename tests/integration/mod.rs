//! End-to-end page flows against a mocked catalog API.
//!
//! Each test starts a mockito server, points a real `TmdbBackend` at it and
//! drives the pages through the public library API.

mod browse_flow;
mod search_flow;
