mod category;
mod ids;

pub use category::Category;
pub use ids::CardId;
pub use ids::Holder;
pub use ids::PlayerId;
