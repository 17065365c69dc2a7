/// Модуль предобработки данных

pub mod cleaning;
pub mod collinearity;
pub mod encoding;
pub mod feature_engineering;
pub mod normalization;
pub mod transform;

pub use cleaning::Cleaner;
pub use collinearity::CollinearityPruner;
pub use encoding::OneHotEncoder;
pub use feature_engineering::FeatureEngineer;
pub use normalization::StandardScaler;
pub use transform::Transformer;
