pub mod feature_card;
pub mod navigation;
