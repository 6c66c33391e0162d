// Adapters layer: HTTP implementations of the provider port, one per job board.

pub mod headhunter;
pub mod http;
pub mod superjob;

pub use headhunter::HeadHunter;
pub use superjob::SuperJob;
