mod data_collection;
pub use data_collection::DataCollectionView;
