// Counterfeit: fake-profile likelihood scoring for social media accounts
//
// This is the library root. The scoring engine (`profile` + `scoring`) is
// pure and synchronous; `db`, `output` and `status` serve the CLI.

pub mod config;
pub mod db;
pub mod error;
pub mod output;
pub mod profile;
pub mod scoring;
pub mod status;
