pub mod dust_data_loader;

pub use dust_data_loader::{ignored_names, DustDataLoader};
