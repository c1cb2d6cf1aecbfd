mod ninja_api;

pub use ninja_api::NinjaApiClient;
