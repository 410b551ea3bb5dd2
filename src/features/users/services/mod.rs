mod user_collection;

pub use user_collection::UserCollectionModel;
