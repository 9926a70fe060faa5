mod bellman_tests;
mod config_tests;
mod error_tests;
mod policy_iteration_tests;
