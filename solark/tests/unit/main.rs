//! Client integration tests against a mock Sol-Ark Cloud server

mod test_client;
