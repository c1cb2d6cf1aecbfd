// Core modules that contain actual files
pub mod dust_value;
pub mod item_category;
pub mod merged_item;
pub mod price_listing;

pub use dust_value::DustValueRecord;

pub use item_category::ItemCategory;

pub use merged_item::{
    MergeResult,
    MergedItem,
    PipelineOutput,
};

pub use price_listing::{
    CanonicalPriceRecord,
    PriceListing,
};
