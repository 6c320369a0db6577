pub mod cache_key;
pub mod resource_cache;
